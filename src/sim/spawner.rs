//! Obstacle pair generation and terrain upkeep
//!
//! Obstacles are spawned in pairs around a random gap and dropped once far
//! off the left edge. Ground tiles are appended to the right as the strip
//! scrolls, and dropped by the same purge.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::terrain::Terrain;
use crate::consts::*;

/// Spawns obstacle pairs from a seeded RNG
#[derive(Debug, Clone)]
pub struct Spawner {
    rng: Pcg32,
}

impl Spawner {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Uniform integer anchor in the inclusive obstacle range
    pub fn roll_anchor(&mut self) -> i32 {
        self.rng
            .random_range(OBSTACLE_ANCHOR_MIN..=OBSTACLE_ANCHOR_MAX)
    }

    /// Append an upright + inverted pair sharing one random anchor, then purge
    /// stale terrain. Returns the anchor used.
    pub fn spawn_obstacle_pair(
        &mut self,
        obstacles: &mut Vec<Terrain>,
        grounds: &mut Vec<Terrain>,
    ) -> f32 {
        let anchor_y = self.roll_anchor() as f32;

        obstacles.push(Terrain::upright(UPRIGHT_SPAWN_X, anchor_y));
        obstacles.push(Terrain::inverted(
            INVERTED_SPAWN_X,
            anchor_y - OBSTACLE_PAIR_GAP,
        ));

        let removed = purge_far_terrain(obstacles, grounds);
        if removed > 0 {
            log::trace!("Purged {} terrain entities", removed);
        }

        anchor_y
    }
}

/// Remove (not recycle) every obstacle and ground tile left of the purge line.
/// Returns how many entities were removed.
pub fn purge_far_terrain(obstacles: &mut Vec<Terrain>, grounds: &mut Vec<Terrain>) -> usize {
    let before = obstacles.len() + grounds.len();
    obstacles.retain(|t| t.pos.x >= PURGE_X);
    grounds.retain(|t| t.pos.x >= PURGE_X);
    before - obstacles.len() - grounds.len()
}

/// Append a ground tile once the newest one has scrolled past the threshold.
///
/// An empty strip is re-seeded at the append position. Returns whether a tile
/// was added.
pub fn maintain_ground(grounds: &mut Vec<Terrain>) -> bool {
    let needs_tile = grounds
        .last()
        .is_none_or(|newest| newest.pos.x < GROUND_APPEND_THRESHOLD_X);

    if needs_tile {
        grounds.push(Terrain::ground(GROUND_APPEND_X));
    }
    needs_tile
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::TerrainKind;
    use proptest::prelude::*;

    #[test]
    fn test_spawn_pair_layout() {
        let mut spawner = Spawner::new(42);
        let mut obstacles = Vec::new();
        let mut grounds = vec![Terrain::ground(0.0)];

        let anchor = spawner.spawn_obstacle_pair(&mut obstacles, &mut grounds);

        assert_eq!(obstacles.len(), 2);
        assert_eq!(obstacles[0].kind, TerrainKind::Upright);
        assert_eq!(obstacles[0].pos.x, 400.0);
        assert_eq!(obstacles[0].pos.y, anchor);
        assert_eq!(obstacles[1].kind, TerrainKind::Inverted);
        assert_eq!(obstacles[1].pos.x, 469.0);
        assert_eq!(obstacles[1].pos.y, anchor - 200.0);
        assert_eq!(grounds.len(), 1);
    }

    #[test]
    fn test_same_seed_same_anchors() {
        let mut a = Spawner::new(7);
        let mut b = Spawner::new(7);
        for _ in 0..32 {
            assert_eq!(a.roll_anchor(), b.roll_anchor());
        }
    }

    #[test]
    fn test_purge_removes_far_left_only() {
        let mut obstacles = vec![
            Terrain::upright(-501.0, 300.0),
            Terrain::inverted(-500.0, 100.0),
            Terrain::upright(10.0, 300.0),
        ];
        let mut grounds = vec![Terrain::ground(-600.0), Terrain::ground(-40.0)];

        let removed = purge_far_terrain(&mut obstacles, &mut grounds);

        assert_eq!(removed, 2);
        assert_eq!(obstacles.len(), 2);
        assert_eq!(grounds.len(), 1);
        assert_eq!(grounds[0].pos.x, -40.0);
    }

    #[test]
    fn test_spawn_purges_stale_terrain() {
        let mut spawner = Spawner::new(1);
        let mut obstacles = vec![Terrain::upright(-700.0, 300.0)];
        let mut grounds = vec![Terrain::ground(-900.0), Terrain::ground(100.0)];

        spawner.spawn_obstacle_pair(&mut obstacles, &mut grounds);

        assert_eq!(obstacles.len(), 2);
        assert!(obstacles.iter().all(|o| o.pos.x >= PURGE_X));
        assert_eq!(grounds.len(), 1);
    }

    #[test]
    fn test_maintain_ground_threshold() {
        let mut grounds = vec![Terrain::ground(-47.0)];
        assert!(!maintain_ground(&mut grounds));
        assert_eq!(grounds.len(), 1);

        grounds[0].pos.x = -48.5;
        assert!(maintain_ground(&mut grounds));
        assert_eq!(grounds.len(), 2);
        assert_eq!(grounds[1].pos.x, GROUND_APPEND_X);
        assert_eq!(grounds[1].pos.y, GROUND_Y);

        // Only the newest tile is consulted
        assert!(!maintain_ground(&mut grounds));
    }

    #[test]
    fn test_maintain_ground_reseeds_empty_strip() {
        let mut grounds = Vec::new();
        assert!(maintain_ground(&mut grounds));
        assert_eq!(grounds.len(), 1);
    }

    proptest! {
        #[test]
        fn prop_anchor_in_range_and_gap_clear(seed in any::<u64>()) {
            let mut spawner = Spawner::new(seed);
            let mut obstacles = Vec::new();
            let mut grounds = Vec::new();

            let anchor = spawner.spawn_obstacle_pair(&mut obstacles, &mut grounds);

            prop_assert!((210.0..=450.0).contains(&anchor));
            prop_assert_eq!(anchor.fract(), 0.0);

            let upright = obstacles[0].hitbox().unwrap();
            let inverted = obstacles[1].hitbox().unwrap();
            prop_assert!(!upright.intersects(&inverted));
            // The gap between them is exactly the pair gap
            prop_assert_eq!(upright.min().y - inverted.max().y, OBSTACLE_PAIR_GAP);
        }

        #[test]
        fn prop_nothing_stale_after_spawn(
            seed in any::<u64>(),
            xs in prop::collection::vec(-2000.0f32..500.0, 0..20),
            ground_xs in prop::collection::vec(-2000.0f32..500.0, 0..8),
        ) {
            let mut spawner = Spawner::new(seed);
            let mut obstacles: Vec<Terrain> =
                xs.iter().map(|&x| Terrain::upright(x, 300.0)).collect();
            let mut grounds: Vec<Terrain> =
                ground_xs.iter().map(|&x| Terrain::ground(x)).collect();

            spawner.spawn_obstacle_pair(&mut obstacles, &mut grounds);

            prop_assert!(obstacles.iter().all(|o| o.pos.x >= PURGE_X));
            prop_assert!(grounds.iter().all(|g| g.pos.x >= PURGE_X));
        }
    }
}
