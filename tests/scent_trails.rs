mod common;

use common::{grazer_stats, SimBuilder};
use veldt::model::hex::Hex;
use veldt::model::state::biome::Biome;
use veldt::model::state::creature::Stats;
use veldt::model::state::scent::ScentType;

#[test]
fn movement_lays_a_trail_at_the_origin() {
    let origin = Hex::new(0, 0);
    let wet = Hex::new(1, 0);
    let mut world = SimBuilder::new()
        .with_grid(3)
        .with_biome(Biome::Desert)
        .with_mature_creature(origin, grazer_stats())
        .build();
    // Only the eastern neighbor offers water.
    for row in 0..3 {
        for col in 0..3 {
            let hex = Hex::from_offset(col, row);
            world.tile_mut(hex).unwrap().resources.water = 0.0;
        }
    }
    world.tile_mut(wet).unwrap().resources.water = 100.0;
    world.creature_mut(0).unwrap().needs.thirst = 90.0;

    world.step();

    let creature = &world.creatures()[0];
    assert!(creature.is_moving);
    assert_eq!(creature.target_position, wet);
    // The trail marks where the walk began, not where it ends.
    let trail: Vec<_> = world.scent_field().of_creature(0);
    assert_eq!(trail.len(), 1);
    assert_eq!(trail[0].position, origin);
    assert_eq!(trail[0].scent_type, ScentType::Movement);
}

#[test]
fn trails_fade_and_expire() {
    let origin = Hex::new(0, 0);
    let wet = Hex::new(1, 0);
    let mut world = SimBuilder::new()
        .with_grid(3)
        .with_biome(Biome::Desert)
        .with_mature_creature(
            origin,
            Stats {
                speed: 1.0,
                ..grazer_stats()
            },
        )
        .build();
    for row in 0..3 {
        for col in 0..3 {
            let hex = Hex::from_offset(col, row);
            world.tile_mut(hex).unwrap().resources.water = 0.0;
        }
    }
    world.tile_mut(wet).unwrap().resources.water = 100.0;
    world.creature_mut(0).unwrap().needs.thirst = 90.0;

    world.step();
    let initial = world.scent_field().of_creature(0)[0].intensity;
    assert_eq!(initial, 100.0);

    // Movement trails decay by a fifth per turn and expire on the fifth.
    // The slow walker stays in transit the whole time, adding nothing new.
    world.step();
    assert!((world.scent_field().of_creature(0)[0].intensity - 80.0).abs() < 1e-4);
    world.step();
    assert!((world.scent_field().of_creature(0)[0].intensity - 64.0).abs() < 1e-4);
    world.step();
    world.step();
    world.step();
    assert!(world.scent_field().of_creature(0).is_empty());
}

#[test]
fn idle_creatures_lay_no_trails() {
    let mut world = SimBuilder::new()
        .with_grid(6)
        .with_creature(Hex::from_offset(0, 0), grazer_stats())
        .build();

    // Fresh needs sit below every action threshold: no move, no trail.
    world.step();
    assert!(world.scents().is_empty());
}

#[test]
fn frozen_needs_while_in_transit() {
    let origin = Hex::new(0, 0);
    let wet = Hex::new(1, 0);
    let mut world = SimBuilder::new()
        .with_grid(3)
        .with_biome(Biome::Desert)
        .with_mature_creature(
            origin,
            Stats {
                speed: 1.0,
                stealth: 100.0,
                ..grazer_stats()
            },
        )
        .build();
    for row in 0..3 {
        for col in 0..3 {
            let hex = Hex::from_offset(col, row);
            world.tile_mut(hex).unwrap().resources.water = 0.0;
        }
    }
    world.tile_mut(wet).unwrap().resources.water = 100.0;
    world.creature_mut(0).unwrap().needs.thirst = 90.0;

    // Initiation turn: the creature acts, then starts walking.
    world.step();
    let creature = &world.creatures()[0];
    assert!(creature.is_moving);
    let frozen = creature.needs;

    // Speed 1 with full stealth means a long march: needs stay put.
    for _ in 0..5 {
        world.step();
        let creature = &world.creatures()[0];
        if !creature.is_moving {
            break;
        }
        assert_eq!(creature.needs, frozen);
    }
}
