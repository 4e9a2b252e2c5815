use super::*;

fn table() -> WorldTable {
    WorldTable::new(2, 3)
}

#[test]
fn ship_cursor_routes_successive_updates() {
    let mut world = table();
    world.update_ship(0, 1, 10.0, 0.0, 0.0);
    world.update_ship(0, 2, 20.0, 0.0, 0.0);
    world.update_ship(0, 3, 30.0, 0.0, 0.0);

    let agent = world.agent(0).unwrap();
    assert_eq!(agent.instances()[0].ship.hp, 1);
    assert_eq!(agent.instances()[1].ship.hp, 2);
    assert_eq!(agent.instances()[2].ship.hp, 3);
}

#[test]
fn ship_cursor_wraps_past_multiplicity() {
    let mut world = table();
    for hp in 1..=4 {
        world.update_ship(0, hp, 0.0, 0.0, 0.0);
    }
    // Fourth write wraps back onto slot 0.
    let agent = world.agent(0).unwrap();
    assert_eq!(agent.instances()[0].ship.hp, 4);
    assert_eq!(agent.instances()[1].ship.hp, 2);
}

#[test]
fn shots_attach_to_last_ship_slot() {
    let mut world = table();
    world.update_ship(0, 1, 0.0, 0.0, 0.0);
    world.update_ship(0, 1, 0.0, 0.0, 0.0);
    world.update_shot(0, 40, 5.0, 5.0, 0.0);

    let agent = world.agent(0).unwrap();
    assert!(agent.instances()[0].shots.is_empty());
    assert_eq!(agent.instances()[1].shots.len(), 1);
}

#[test]
fn shots_before_any_ship_update_attach_to_slot_zero() {
    let mut world = table();
    world.update_shot(0, 40, 5.0, 5.0, 0.0);
    let agent = world.agent(0).unwrap();
    assert_eq!(agent.instances()[0].shots.len(), 1);
}

#[test]
fn score_follows_shot_association() {
    let mut world = table();
    world.update_score(0, 100);
    world.update_ship(0, 1, 0.0, 0.0, 0.0);
    world.update_score(0, 250);

    let agent = world.agent(0).unwrap();
    assert_eq!(agent.instances()[0].score, 250);
}

#[test]
fn clear_tick_empties_shots_and_rewinds_cursors_only() {
    let mut world = table();
    world.update_ship(0, 7, 1.0, 2.0, 0.5);
    world.update_shot(0, 40, 5.0, 5.0, 0.0);
    world.update_score(0, 900);
    world.clear_tick();

    let agent = world.agent(0).unwrap();
    assert!(agent.instances()[0].shots.is_empty());
    assert_eq!(agent.instances()[0].ship.hp, 7);
    assert_eq!(agent.instances()[0].score, 900);

    // Cursors rewound: the next ship update lands on slot 0 again.
    world.update_ship(0, 8, 0.0, 0.0, 0.0);
    assert_eq!(world.agent(0).unwrap().instances()[0].ship.hp, 8);
}

#[test]
fn shot_ring_evicts_oldest_when_full() {
    let mut ring = ShotRing::with_capacity();
    for lifetime in 1..=(SHOT_RING_CAPACITY as i32 + 1) {
        ring.push(ShotState {
            lifetime,
            x: 0.0,
            y: 0.0,
            heading: 0.0,
        });
    }
    assert_eq!(ring.len(), SHOT_RING_CAPACITY);
    assert!(ring.iter().all(|shot| shot.lifetime != 1));
    assert!(ring.iter().any(|shot| shot.lifetime == SHOT_RING_CAPACITY as i32 + 1));
}

#[test]
fn out_of_range_agent_updates_are_ignored() {
    let mut world = table();
    world.update_ship(2, 9, 1.0, 1.0, 1.0);
    world.update_shot(2, 40, 1.0, 1.0, 1.0);
    world.update_score(2, 123);

    for agent_id in 0..2 {
        let agent = world.agent(agent_id).unwrap();
        for instance in agent.instances() {
            assert_eq!(instance.ship, ShipState::default());
            assert!(instance.shots.is_empty());
            assert_eq!(instance.score, 0);
        }
    }
    assert!(world.agent(2).is_none());
}

#[test]
fn non_finite_telemetry_is_sanitized_at_write() {
    let mut world = table();
    world.update_ship(0, 5, f32::NAN, f32::INFINITY, f32::NEG_INFINITY);
    world.update_shot(0, 40, f32::NAN, 3.0, f32::INFINITY);

    let agent = world.agent(0).unwrap();
    let ship = agent.instances()[0].ship;
    assert_eq!((ship.x, ship.y, ship.heading), (0.0, 0.0, 0.0));
    let shot = agent.instances()[0].shots.iter().next().unwrap();
    assert_eq!((shot.x, shot.y, shot.heading), (0.0, 3.0, 0.0));
}
