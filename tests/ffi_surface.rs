//! Exercises the flat C surface exactly as an embedding host would: opaque
//! pointer in, raw integers across the boundary, teardown at the end.

use asteroids_agent_core::ffi::{
    clear_world_state, free_context, init_agent, make_action, set_config_parameter, update_score,
    update_ship, update_shot,
};
use asteroids_agent_core::{ACTION_FIRE, ACTION_NONE};

#[test]
fn full_tick_through_the_c_surface() {
    let ctx = init_agent(2, 2, 0xD00D_F00D);
    assert!(!ctx.is_null());

    clear_world_state(ctx);
    update_ship(ctx, 0, 3, 0.0, 0.0, 0.0);
    update_ship(ctx, 0, 3, 100.0, 100.0, 1.5);
    update_shot(ctx, 0, 20, 110.0, 95.0, 4.0);
    update_score(ctx, 0, 1_200);

    let bits = make_action(ctx, 0, 0);
    assert_ne!(bits, ACTION_NONE);
    assert_eq!(bits & !0xF, 0, "only the four known flags may be set");

    // Agent 1 received no telemetry this session: every instance dead.
    assert_eq!(make_action(ctx, 1, 0), ACTION_NONE);

    free_context(ctx);
}

#[test]
fn invalid_sizing_yields_null() {
    assert!(init_agent(0, 4, 1).is_null());
    assert!(init_agent(4, 0, 1).is_null());
}

#[test]
fn null_context_is_tolerated_everywhere() {
    let null = core::ptr::null_mut();
    clear_world_state(null);
    set_config_parameter(null, 0, 1.0);
    update_ship(null, 0, 1, 0.0, 0.0, 0.0);
    update_shot(null, 0, 1, 0.0, 0.0, 0.0);
    update_score(null, 0, 0);
    assert_eq!(make_action(null, 0, 0), ACTION_NONE);
    free_context(null);
}

#[test]
fn unknown_config_discriminant_is_a_no_op() {
    let tweaked = init_agent(1, 1, 0x5EED_0042);
    let untouched = init_agent(1, 1, 0x5EED_0042);
    assert!(!tweaked.is_null() && !untouched.is_null());

    // Discriminants 5 and beyond are not part of the contract.
    set_config_parameter(tweaked, 5, 1_000.0);
    set_config_parameter(tweaked, u32::MAX, -1.0);

    for ctx in [tweaked, untouched] {
        clear_world_state(ctx);
        update_ship(ctx, 0, 1, 0.0, 0.0, 0.0);
    }
    assert_eq!(make_action(tweaked, 0, 0), make_action(untouched, 0, 0));

    free_context(tweaked);
    free_context(untouched);
}

#[test]
fn fire_cadence_survives_the_boundary() {
    // Sanity check that a real decision (not just NONE) crosses the ABI.
    let ctx = init_agent(1, 1, 0xCAFE_0001);
    clear_world_state(ctx);
    update_ship(ctx, 0, 5, 0.0, 0.0, 0.0);
    assert_ne!(make_action(ctx, 0, 0) & ACTION_FIRE, 0);
    free_context(ctx);
}
