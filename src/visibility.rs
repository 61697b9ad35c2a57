//! One-shot visibility trigger.
//!
//! The burst fires the first time at least `visibility_threshold` of the
//! container is visible. After that the trigger is `Fired` for good and the
//! visibility source is detached.
//!
//! Sources write [`ContainerVisibility`] messages:
//! - native: [`window_visibility_system`] reports the primary window as fully
//!   visible at startup and follows `WindowOccluded`
//! - wasm32: an `IntersectionObserver` on the canvas (see [`crate::web`])

use crate::config::RainConfig;
use crate::spawn::SpawnRequest;
use bevy::prelude::*;
use bevy::window::WindowOccluded;

/// Fraction of the container currently inside the viewport, in `[0, 1]`.
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct ContainerVisibility {
    pub ratio: f32,
}

/// Written once when the trigger fires so sources can stop observing.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityDetached;

#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisibilityTrigger {
    /// Waiting for the container to become visible.
    #[default]
    Armed,
    /// Burst has fired; further observations are ignored.
    Fired,
}

impl VisibilityTrigger {
    /// Feed one observation. Returns `true` only on the Armed → Fired transition.
    pub fn observe(&mut self, ratio: f32, threshold: f32) -> bool {
        match self {
            VisibilityTrigger::Armed if ratio >= threshold => {
                *self = VisibilityTrigger::Fired;
                true
            }
            _ => false,
        }
    }

    pub fn is_fired(&self) -> bool {
        *self == VisibilityTrigger::Fired
    }
}

/// Turn visibility observations into at most one burst request.
pub fn visibility_trigger_system(
    mut observations: MessageReader<ContainerVisibility>,
    mut trigger: ResMut<VisibilityTrigger>,
    mut requests: MessageWriter<SpawnRequest>,
    mut detached: MessageWriter<VisibilityDetached>,
    config: Res<RainConfig>,
) {
    for obs in observations.read() {
        if trigger.observe(obs.ratio, config.visibility_threshold) {
            info!(
                "Container {:.0}% visible; releasing burst",
                obs.ratio * 100.0
            );
            requests.write(SpawnRequest::Burst);
            detached.write(VisibilityDetached);
        }
    }
}

/// Native visibility source: the window is the container.
///
/// Reports full visibility on the first frame it runs, then mirrors occlusion
/// changes. Once the trigger has fired it stops reporting.
pub fn window_visibility_system(
    mut occlusion: MessageReader<WindowOccluded>,
    mut observations: MessageWriter<ContainerVisibility>,
    trigger: Res<VisibilityTrigger>,
    mut reported_initial: Local<bool>,
) {
    if trigger.is_fired() {
        for _ in occlusion.read() {}
        return;
    }

    let mut occluded = None;
    for event in occlusion.read() {
        occluded = Some(event.occluded);
    }

    match occluded {
        Some(occluded) => {
            observations.write(ContainerVisibility {
                ratio: if occluded { 0.0 } else { 1.0 },
            });
        }
        None if !*reported_initial => {
            observations.write(ContainerVisibility { ratio: 1.0 });
        }
        None => {}
    }
    *reported_initial = true;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_at_threshold() {
        let mut trigger = VisibilityTrigger::default();
        assert!(!trigger.observe(0.0, 0.1));
        assert!(!trigger.observe(0.099, 0.1));
        assert!(trigger.observe(0.1, 0.1));
        assert!(trigger.is_fired());
        for ratio in [0.1, 0.5, 1.0, 0.0, 1.0] {
            assert!(!trigger.observe(ratio, 0.1));
        }
        assert_eq!(trigger, VisibilityTrigger::Fired);
    }

    #[test]
    fn starts_armed() {
        assert_eq!(VisibilityTrigger::default(), VisibilityTrigger::Armed);
        assert!(!VisibilityTrigger::default().is_fired());
    }
}
