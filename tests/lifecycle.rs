mod common;

use common::SimBuilder;
use veldt::model::hex::Hex;
use veldt::model::state::biome::Biome;
use veldt::model::state::creature::Stats;

#[test]
fn starvation_kills_and_leaves_a_carcass() {
    // One big herbivore on a barren desert tile with nothing to eat or
    // drink: the metabolism pass tips it over 100 hunger in a single turn.
    let origin = Hex::new(0, 0);
    let mut world = SimBuilder::new()
        .with_biome(Biome::Desert)
        .with_mature_creature(
            origin,
            Stats {
                size: 40.0,
                diet: -60,
                ..common::grazer_stats()
            },
        )
        .build();

    {
        let tile = world.tile_mut(origin).unwrap();
        tile.resources.plant_food = 0.0;
        tile.resources.plant_growth_rate = 0.0;
        tile.resources.water = 0.0;
    }
    world.creature_mut(0).unwrap().needs.hunger = 95.0;

    world.step();

    assert_population!(world, 0);
    assert_creature_gone!(world, 0);
    // Carcass yield is twice the body size.
    assert_eq!(world.tile_mut(origin).unwrap().resources.meat, 80.0);
}

#[test]
fn carcasses_rot_away() {
    let origin = Hex::new(0, 0);
    let mut world = SimBuilder::new()
        .with_biome(Biome::Desert)
        .with_mature_creature(
            origin,
            Stats {
                size: 12.0,
                diet: -60,
                ..common::grazer_stats()
            },
        )
        .build();
    {
        let tile = world.tile_mut(origin).unwrap();
        tile.resources.plant_food = 0.0;
        tile.resources.plant_growth_rate = 0.0;
        tile.resources.water = 0.0;
    }
    world.creature_mut(0).unwrap().needs.hunger = 99.9;

    world.step();
    let meat = world.tile_mut(origin).unwrap().resources.meat;
    assert_eq!(meat, 24.0);

    world.step();
    let meat = world.tile_mut(origin).unwrap().resources.meat;
    assert!((meat - 21.6).abs() < 1e-4);
}

#[test]
fn old_age_is_fatal() {
    let origin = Hex::new(0, 0);
    let mut world = SimBuilder::new()
        .with_config(|c| c.lifecycle.max_age = 20)
        .with_mature_creature(origin, common::grazer_stats())
        .build();

    for _ in 0..9 {
        world.step();
    }
    assert_population!(world, 1);

    world.step();
    assert_population!(world, 0);
    // The body became food.
    assert!(world.tile_mut(origin).unwrap().resources.meat > 0.0);
}

#[test]
fn ages_increase_monotonically_while_alive() {
    let mut world = SimBuilder::new()
        .with_grid(4)
        .with_creature(Hex::new(0, 0), common::grazer_stats())
        .with_creature(Hex::new(1, 1), common::grazer_stats())
        .build();

    let mut previous: Vec<(u64, u32)> = world.creatures().iter().map(|c| (c.id, c.age)).collect();
    for _ in 0..20 {
        world.step();
        for c in world.creatures() {
            if let Some((_, old_age)) = previous.iter().find(|(id, _)| *id == c.id) {
                assert!(c.age >= *old_age);
            }
        }
        previous = world.creatures().iter().map(|c| (c.id, c.age)).collect();
        assert_creature_invariants!(world);
    }
}

#[test]
fn dead_creatures_never_come_back() {
    let origin = Hex::new(0, 0);
    let mut world = SimBuilder::new()
        .with_biome(Biome::Desert)
        .with_mature_creature(origin, common::grazer_stats())
        .build();
    world.creature_mut(0).unwrap().needs.thirst = 100.0;
    {
        let tile = world.tile_mut(origin).unwrap();
        tile.resources.water = 0.0;
    }

    world.step();
    assert_creature_gone!(world, 0);
    for _ in 0..10 {
        world.step();
        assert_creature_gone!(world, 0);
    }
}
