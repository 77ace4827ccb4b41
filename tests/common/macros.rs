/// Asserts that the alive population matches the expected count.
#[macro_export]
macro_rules! assert_population {
    ($world:expr, $count:expr) => {
        assert_eq!($world.alive_count(), $count, "alive population mismatch");
    };
}

/// Asserts that a creature with the given id is no longer in the world.
#[macro_export]
macro_rules! assert_creature_gone {
    ($world:expr, $id:expr) => {
        assert!(
            !$world.creatures().iter().any(|c| c.id == $id),
            "creature {} should have been removed",
            $id
        );
    };
}

/// Asserts the universal per-creature invariants: cube coordinates, need
/// bounds and stat bounds.
#[macro_export]
macro_rules! assert_creature_invariants {
    ($world:expr) => {
        for c in $world.creatures() {
            assert_eq!(c.position.q + c.position.r + c.position.s(), 0);
            assert!((0.0..=100.0).contains(&c.needs.hunger));
            assert!((0.0..=100.0).contains(&c.needs.thirst));
            assert!((0.0..=100.0).contains(&c.needs.love));
            assert!((1.0..=100.0).contains(&c.stats.size));
            assert!((1.0..=100.0).contains(&c.stats.speed));
            assert!((1.0..=100.0).contains(&c.stats.reproduction_rate));
            assert!((-99..=99).contains(&c.stats.diet));
            assert!((0.0..=100.0).contains(&c.stats.stealth));
            assert!((0.0..=100.0).contains(&c.stats.perception));
        }
    };
}
