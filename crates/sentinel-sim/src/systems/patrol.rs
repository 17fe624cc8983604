//! Patrol system: advances every sentry head's sweep state machine.

use hecs::World;
use log::debug;

use sentinel_core::components::{PatrolState, Sentry};
use sentinel_core::events::SentryEvent;
use sentinel_core::types::Transform;
use sentinel_patrol::sweep;

/// Step each head by `dt` seconds and record sweep start/finish events.
pub fn run(world: &mut World, dt: f32, events: &mut Vec<SentryEvent>) {
    for (_entity, (sentry, head, patrol)) in
        world.query_mut::<(&Sentry, &mut Transform, &mut PatrolState)>()
    {
        let update = sweep::step(patrol, head.rotation, &sentry.config, dt);
        head.rotation = update.rotation;

        if let Some(started) = update.started {
            debug!(
                "sentry {} sweeping {:?} to {:.1} deg",
                sentry.sentry_id, started.direction, started.target_yaw_deg
            );
            events.push(SentryEvent::SweepStarted {
                sentry_id: sentry.sentry_id,
                direction: started.direction,
                target_yaw_deg: started.target_yaw_deg,
            });
        }
        if update.finished {
            let yaw_deg = head.yaw_degrees();
            debug!("sentry {} holding at {yaw_deg:.1} deg", sentry.sentry_id);
            events.push(SentryEvent::SweepFinished {
                sentry_id: sentry.sentry_id,
                yaw_deg,
            });
        }
    }
}
