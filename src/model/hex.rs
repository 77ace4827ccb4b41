//! Cube-coordinate hex algebra for the world grid.
//!
//! Coordinates are stored as `(q, r)` with the third axis implied by the
//! cube invariant `q + r + s = 0`. The grid uses flat-top orientation and
//! odd-r shifted rows for offset conversion.

use serde::{Deserialize, Serialize};

/// The six hex directions, east first, walking the ring counter-clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HexDirection {
    East,
    NorthEast,
    NorthWest,
    West,
    SouthWest,
    SouthEast,
}

impl HexDirection {
    pub const ALL: [HexDirection; 6] = [
        HexDirection::East,
        HexDirection::NorthEast,
        HexDirection::NorthWest,
        HexDirection::West,
        HexDirection::SouthWest,
        HexDirection::SouthEast,
    ];

    /// Cube offset for this direction.
    pub fn offset(&self) -> Hex {
        match self {
            HexDirection::East => Hex::new(1, 0),
            HexDirection::NorthEast => Hex::new(1, -1),
            HexDirection::NorthWest => Hex::new(0, -1),
            HexDirection::West => Hex::new(-1, 0),
            HexDirection::SouthWest => Hex::new(-1, 1),
            HexDirection::SouthEast => Hex::new(0, 1),
        }
    }
}

/// A hex position in cube coordinates.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Hex {
    pub q: i32,
    pub r: i32,
}

impl Hex {
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Third cube axis, derived from the invariant `q + r + s = 0`.
    pub fn s(&self) -> i32 {
        -self.q - self.r
    }

    /// Hex (Manhattan-on-cube) distance between two coordinates.
    pub fn distance(&self, other: Hex) -> u32 {
        let dq = (self.q - other.q).abs();
        let dr = (self.r - other.r).abs();
        let ds = (self.s() - other.s()).abs();
        ((dq + dr + ds) / 2) as u32
    }

    /// The adjacent coordinate in the given direction.
    pub fn neighbor(&self, direction: HexDirection) -> Hex {
        let d = direction.offset();
        Hex::new(self.q + d.q, self.r + d.r)
    }

    /// All six adjacent coordinates in canonical direction order.
    pub fn neighbors(&self) -> [Hex; 6] {
        let mut out = [Hex::default(); 6];
        for (slot, dir) in out.iter_mut().zip(HexDirection::ALL) {
            *slot = self.neighbor(dir);
        }
        out
    }

    /// Every coordinate within `radius` of this one, including itself.
    pub fn range(&self, radius: i32) -> Vec<Hex> {
        let mut out = Vec::new();
        for dq in -radius..=radius {
            let lo = (-radius).max(-dq - radius);
            let hi = radius.min(-dq + radius);
            for dr in lo..=hi {
                out.push(Hex::new(self.q + dq, self.r + dr));
            }
        }
        out
    }

    /// Round fractional cube coordinates back onto the grid, pinning the
    /// axis with the largest rounding delta so the invariant holds.
    pub fn round(fq: f32, fr: f32) -> Hex {
        let fs = -fq - fr;
        let mut q = fq.round();
        let mut r = fr.round();
        let s = fs.round();

        let dq = (q - fq).abs();
        let dr = (r - fr).abs();
        let ds = (s - fs).abs();

        if dq > dr && dq > ds {
            q = -r - s;
        } else if dr > ds {
            r = -q - s;
        }
        Hex::new(q as i32, r as i32)
    }

    /// Center of this hex in pixel space for flat-top layout with size `size`.
    pub fn to_pixel(&self, size: f32) -> (f32, f32) {
        let x = size * 3.0f32.sqrt() * (self.q as f32 + self.r as f32 / 2.0);
        let y = size * 1.5 * self.r as f32;
        (x, y)
    }

    /// Inverse of [`Hex::to_pixel`], cube-rounded to the nearest hex.
    pub fn from_pixel(x: f32, y: f32, size: f32) -> Hex {
        let fr = y / (size * 1.5);
        let fq = x / (size * 3.0f32.sqrt()) - fr / 2.0;
        Hex::round(fq, fr)
    }

    /// Odd-r offset coordinates `(col, row)` for this hex.
    pub fn to_offset(&self) -> (i32, i32) {
        let col = self.q + (self.r - (self.r & 1)) / 2;
        (col, self.r)
    }

    /// Build a hex from odd-r offset coordinates.
    pub fn from_offset(col: i32, row: i32) -> Hex {
        let q = col - (row - (row & 1)) / 2;
        Hex::new(q, row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_invariant_holds_for_neighbors() {
        let origin = Hex::new(3, -2);
        for n in origin.neighbors() {
            assert_eq!(n.q + n.r + n.s(), 0);
            assert_eq!(origin.distance(n), 1);
        }
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Hex::new(0, 0);
        let b = Hex::new(4, -2);
        assert_eq!(a.distance(b), b.distance(a));
        assert_eq!(a.distance(b), 4);
    }

    #[test]
    fn range_counts_match_formula() {
        // 1 + 6 + 12 = 19 hexes within radius 2.
        assert_eq!(Hex::new(0, 0).range(2).len(), 19);
        assert!(Hex::new(1, 1).range(1).contains(&Hex::new(1, 1)));
    }

    #[test]
    fn offset_round_trip() {
        for row in -3..8 {
            for col in -3..8 {
                let h = Hex::from_offset(col, row);
                assert_eq!(h.to_offset(), (col, row));
            }
        }
    }

    #[test]
    fn pixel_round_trip() {
        for q in -5..5 {
            for r in -5..5 {
                let h = Hex::new(q, r);
                let (x, y) = h.to_pixel(12.0);
                assert_eq!(Hex::from_pixel(x, y, 12.0), h);
            }
        }
    }
}
