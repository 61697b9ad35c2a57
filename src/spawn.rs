//! Spawn controller: decides when and how many bodies to create.
//!
//! Two entry points, both driven by [`SpawnRequest`] messages:
//!
//! | Request  | Source                         | Bodies                   |
//! |----------|--------------------------------|--------------------------|
//! | `Burst`  | visibility trigger, once       | `floor(80 × scale)`      |
//! | `Single` | Add button (or page button)    | 1                        |
//!
//! Growth is unbounded unless `max_bodies` is configured.

use crate::body::spawn_body;
use crate::config::RainConfig;
use crate::engine::RapierWorld;
use crate::layout::PageLayout;
use crate::scale::ScaleFactor;
use crate::world::PhysicsWorld;
use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Request to add bodies to the world.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnRequest {
    Burst,
    Single,
}

/// Random source used by the body factory.
#[derive(Resource)]
pub struct SpawnRng(pub StdRng);

impl SpawnRng {
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self(StdRng::seed_from_u64(seed)),
            None => Self(StdRng::from_entropy()),
        }
    }
}

impl Default for SpawnRng {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Number of bodies in a burst: `floor(base × scale)`.
///
/// The scale is taken in whole percent so the product is exact; float
/// multiplication can land a hair under the integer (80 × 0.65 → 51.99…).
pub fn burst_count(scale: ScaleFactor, base: u32) -> usize {
    let percent = (scale.get() * 100.0).round().max(0.0) as u64;
    (u64::from(base) * percent / 100) as usize
}

/// Tracks how many bodies exist and enforces the optional cap.
///
/// Bodies are never removed, so `spawned` is also the world's body count.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct SpawnController {
    spawned: usize,
    limit: Option<usize>,
}

impl SpawnController {
    pub fn new(limit: Option<usize>) -> Self {
        Self { spawned: 0, limit }
    }

    pub fn spawned(&self) -> usize {
        self.spawned
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    pub fn set_limit(&mut self, limit: Option<usize>) {
        self.limit = limit;
    }

    fn has_room(&self) -> bool {
        self.limit.is_none_or(|max| self.spawned < max)
    }

    /// Spawn one body. Returns `false` when the cap is reached.
    pub fn single<W, R>(
        &mut self,
        world: &mut W,
        rng: &mut R,
        layout: &PageLayout,
        cfg: &RainConfig,
    ) -> bool
    where
        W: PhysicsWorld + ?Sized,
        R: Rng,
    {
        if !self.has_room() {
            return false;
        }
        spawn_body(world, rng, layout, cfg);
        self.spawned += 1;
        true
    }

    /// Spawn a burst sized for the current viewport. Returns how many bodies
    /// were actually added (fewer than the burst size only when capped).
    pub fn burst<W, R>(
        &mut self,
        world: &mut W,
        rng: &mut R,
        layout: &PageLayout,
        cfg: &RainConfig,
    ) -> usize
    where
        W: PhysicsWorld + ?Sized,
        R: Rng,
    {
        let count = burst_count(
            ScaleFactor::for_viewport(layout.viewport_width),
            cfg.burst_base_count,
        );
        let mut added = 0;
        for _ in 0..count {
            if !self.single(world, rng, layout, cfg) {
                break;
            }
            added += 1;
        }
        added
    }
}

/// Startup system: seed the factory and apply the configured cap.
pub fn init_spawning(mut commands: Commands, config: Res<RainConfig>) {
    commands.insert_resource(SpawnRng::new(config.seed));
    commands.insert_resource(SpawnController::new(config.max_bodies));
    match config.max_bodies {
        Some(max) => info!("Spawning capped at {max} bodies"),
        None => info!("Spawning uncapped"),
    }
}

/// Serve spawn requests in arrival order.
pub fn spawn_request_system(
    mut requests: MessageReader<SpawnRequest>,
    mut controller: ResMut<SpawnController>,
    mut rng: ResMut<SpawnRng>,
    mut world: RapierWorld,
    layout: Res<PageLayout>,
    config: Res<RainConfig>,
) {
    for request in requests.read() {
        match request {
            SpawnRequest::Burst => {
                let added = controller.burst(&mut world, &mut rng.0, &layout, &config);
                info!("Burst added {added} bodies ({} total)", controller.spawned());
            }
            SpawnRequest::Single => {
                if !controller.single(&mut world, &mut rng.0, &layout, &config) {
                    debug!(
                        "Body cap of {:?} reached; ignoring spawn request",
                        controller.limit()
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::MemoryWorld;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn burst_count_matches_breakpoints() {
        let cases = [(400.0, 28), (800.0, 32), (1200.0, 40), (1920.0, 52)];
        for (width, expected) in cases {
            assert_eq!(
                burst_count(ScaleFactor::for_viewport(width), 80),
                expected,
                "width {width}"
            );
        }
    }

    #[test]
    fn burst_then_clicks_add_up() {
        let cfg = RainConfig::default();
        let layout = PageLayout::uniform(800.0, 600.0);
        let mut rng = rng();

        // Clicks may come before the burst; the total is the same either way.
        for n in [0usize, 1, 7] {
            let mut world = MemoryWorld::default();
            let mut controller = SpawnController::default();
            for _ in 0..n {
                assert!(controller.single(&mut world, &mut rng, &layout, &cfg));
            }
            let c = controller.burst(&mut world, &mut rng, &layout, &cfg);
            assert_eq!(c, 32);
            for _ in 0..n {
                assert!(controller.single(&mut world, &mut rng, &layout, &cfg));
            }
            assert_eq!(world.bodies.len(), c + 2 * n);
            assert_eq!(controller.spawned(), c + 2 * n);
        }
    }

    #[test]
    fn cap_stops_bursts_and_clicks() {
        let cfg = RainConfig::default();
        let layout = PageLayout::uniform(1920.0, 1080.0);
        let mut world = MemoryWorld::default();
        let mut rng = rng();
        let mut controller = SpawnController::new(Some(10));

        assert_eq!(controller.burst(&mut world, &mut rng, &layout, &cfg), 10);
        assert!(!controller.single(&mut world, &mut rng, &layout, &cfg));
        assert_eq!(world.bodies.len(), 10);

        controller.set_limit(None);
        assert!(controller.single(&mut world, &mut rng, &layout, &cfg));
        assert_eq!(world.bodies.len(), 11);
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let cfg = RainConfig::default();
        let layout = PageLayout::uniform(800.0, 600.0);
        let mut a = MemoryWorld::default();
        let mut b = MemoryWorld::default();
        SpawnController::default().burst(&mut a, &mut SpawnRng::new(Some(9)).0, &layout, &cfg);
        SpawnController::default().burst(&mut b, &mut SpawnRng::new(Some(9)).0, &layout, &cfg);
        assert_eq!(a.bodies, b.bodies);
    }
}
