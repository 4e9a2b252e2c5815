//! Flat C ABI for embedding hosts.
//!
//! Mirrors the host header symbol for symbol: an opaque `Context` pointer is
//! threaded through every call, null pointers and unknown discriminants are
//! tolerated as no-ops (or `ACTION_NONE` for the query), and enum-valued
//! arguments cross the boundary as raw `u32`s decoded with checked
//! converters. Ownership discipline: `init_agent` boxes, `free_context`
//! unboxes exactly once; anything else is the caller's contract violation.

use crate::action::ACTION_NONE;
use crate::config::ConfigParam;
use crate::context::Context;

fn ctx_mut<'a>(ctx: *mut Context) -> Option<&'a mut Context> {
    if ctx.is_null() {
        log::debug!("null context pointer, call ignored");
        None
    } else {
        Some(unsafe { &mut *ctx })
    }
}

#[no_mangle]
pub extern "C" fn init_agent(n_agents: u32, agent_multiplicity: u32, seed: u32) -> *mut Context {
    match Context::new(n_agents, agent_multiplicity, seed) {
        Some(ctx) => Box::into_raw(Box::new(ctx)),
        None => core::ptr::null_mut(),
    }
}

#[no_mangle]
pub extern "C" fn free_context(ctx: *mut Context) {
    if ctx.is_null() {
        return;
    }
    unsafe {
        drop(Box::from_raw(ctx));
    }
}

#[no_mangle]
pub extern "C" fn set_config_parameter(ctx: *mut Context, param: u32, value: f32) {
    let Some(ctx) = ctx_mut(ctx) else {
        return;
    };
    match ConfigParam::from_raw(param) {
        Some(param) => ctx.set_config_parameter(param, value),
        None => log::debug!("unknown config parameter {param}, ignored"),
    }
}

#[no_mangle]
pub extern "C" fn clear_world_state(ctx: *mut Context) {
    if let Some(ctx) = ctx_mut(ctx) {
        ctx.clear_world_state();
    }
}

#[no_mangle]
pub extern "C" fn update_ship(
    ctx: *mut Context,
    agent_id: u32,
    hp: i32,
    x: f32,
    y: f32,
    heading: f32,
) {
    if let Some(ctx) = ctx_mut(ctx) {
        ctx.update_ship(agent_id, hp, x, y, heading);
    }
}

#[no_mangle]
pub extern "C" fn update_shot(
    ctx: *mut Context,
    agent_id: u32,
    lifetime: i32,
    x: f32,
    y: f32,
    heading: f32,
) {
    if let Some(ctx) = ctx_mut(ctx) {
        ctx.update_shot(agent_id, lifetime, x, y, heading);
    }
}

#[no_mangle]
pub extern "C" fn update_score(ctx: *mut Context, agent_id: u32, score: i32) {
    if let Some(ctx) = ctx_mut(ctx) {
        ctx.update_score(agent_id, score);
    }
}

#[no_mangle]
pub extern "C" fn make_action(ctx: *mut Context, agent_id: u32, tick: u32) -> u32 {
    match ctx_mut(ctx) {
        Some(ctx) => ctx.make_action(agent_id, tick),
        None => ACTION_NONE,
    }
}
