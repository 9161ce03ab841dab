//! Vertical motion of the actor: gravity, jetpack thrust and the speed cap

use super::state::{AccelMode, Actor};

/// Advance the actor's vertical motion by `dt` milliseconds
///
/// The acceleration stored by the previous step is added on top of gravity
/// and the result is capped at gravity. A fresh thrust therefore fades by one
/// gravity unit per step until gravity alone wins and the actor is falling
/// again. Vertical speed is only capped downward.
pub fn integrate(actor: &mut Actor, gravity: f32, max_velocity: f32, dt: f32) {
    let boosted = gravity + actor.acceleration;
    let a = if boosted < gravity {
        actor.mode = AccelMode::Thrusting;
        boosted
    } else {
        actor.mode = AccelMode::Falling;
        gravity
    };

    actor.vel.y = (actor.vel.y + a * dt).min(max_velocity);
    actor.pos.y += actor.vel.y * dt;
    actor.acceleration = a;
}
