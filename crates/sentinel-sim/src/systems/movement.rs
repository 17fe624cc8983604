//! Intruder movement.
//!
//! Integrates player velocities and walks wandering players toward
//! seeded-random waypoints inside their region.

use glam::Vec3;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use sentinel_core::components::{Player, Wander};
use sentinel_core::constants::WANDER_ARRIVAL_RADIUS;
use sentinel_core::types::{Transform, Velocity};

/// Run kinematic integration for all players: position += velocity * dt.
pub fn run(world: &mut World, dt: f32) {
    for (_entity, (_player, transform, vel)) in
        world.query_mut::<(&Player, &mut Transform, &Velocity)>()
    {
        transform.position += vel.0 * dt;
    }
}

/// Advance wandering players toward their waypoints, picking a new one on arrival.
pub fn wander(world: &mut World, rng: &mut ChaCha8Rng, dt: f32) {
    for (_entity, (transform, wander)) in world.query_mut::<(&mut Transform, &mut Wander)>() {
        let waypoint = match wander.waypoint {
            Some(w) if transform.position.distance(w) > WANDER_ARRIVAL_RADIUS => w,
            _ => {
                let w = random_point(rng, wander.min, wander.max);
                wander.waypoint = Some(w);
                w
            }
        };
        transform.position = move_towards(transform.position, waypoint, wander.speed * dt);
    }
}

/// Uniform point inside the box `[min, max]`.
fn random_point(rng: &mut ChaCha8Rng, min: Vec3, max: Vec3) -> Vec3 {
    Vec3::new(
        rng.gen_range(min.x..=max.x),
        rng.gen_range(min.y..=max.y),
        rng.gen_range(min.z..=max.z),
    )
}

/// Step from `current` toward `target` by at most `max_step`, without overshoot.
pub fn move_towards(current: Vec3, target: Vec3, max_step: f32) -> Vec3 {
    let delta = target - current;
    let distance = delta.length();
    if distance <= max_step || distance == 0.0 {
        return target;
    }
    current + delta / distance * max_step.max(0.0)
}
