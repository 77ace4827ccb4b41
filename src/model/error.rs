//! Error types raised when refusing to build a world from bad input.

use crate::model::hex::Hex;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WorldError {
    /// The height, biome and water-distance maps must cover exactly the
    /// same coordinates.
    #[error("world maps disagree: {0} is missing coordinates present elsewhere")]
    InconsistentMaps(&'static str),

    /// A world with no tiles cannot host a population.
    #[error("world data contains no tiles")]
    EmptyWorld,

    /// A creature was placed on a coordinate with no tile.
    #[error("no tile at {0:?}")]
    MissingTile(Hex),
}
