//! One-pass pairwise overlap resolution between spheres.
//!
//! Entity `i` is only compared with entities already processed this frame
//! (`j < i`). Impulses land on both partners but only `i` integrates now;
//! `j` picks its impulse up on the next frame. Results therefore depend on
//! row-major processing order.

use glam::Vec3;

use super::state::Entity;
use crate::params::sketch_constants::{COLLISION_STIFFNESS, VELOCITY_DAMPING};

/// Direction used when two centers coincide
const FALLBACK_DIRECTION: Vec3 = Vec3::X;

/// Push `current` and each overlapping entity in `earlier` apart.
///
/// `scale` converts summed sizes into a minimum center distance.
pub fn resolve(current: &mut Entity, earlier: &mut [Entity], scale: f32) {
    for other in earlier.iter_mut() {
        let offset = current.position - other.position;
        let distance = offset.length();
        let min_distance = (current.size + other.size) * scale;

        if distance < min_distance {
            let overlap = min_distance - distance;
            let direction = offset.try_normalize().unwrap_or(FALLBACK_DIRECTION);
            let force = direction * overlap * COLLISION_STIFFNESS;
            current.velocity += force;
            other.velocity -= force;
        }
    }
}

/// Apply velocity to position, then damp it
pub fn integrate(entity: &mut Entity) {
    entity.position += entity.velocity;
    entity.velocity *= VELOCITY_DAMPING;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity_at(position: Vec3, size: f32) -> Entity {
        Entity {
            size,
            position,
            ..Entity::new(0.0)
        }
    }

    #[test]
    fn test_overlapping_pair_gets_opposing_impulses() {
        let mut a = entity_at(Vec3::ZERO, 50.0);
        let mut b = entity_at(Vec3::new(1.0, 0.0, 0.0), 50.0);

        resolve(&mut b, std::slice::from_mut(&mut a), 1.0);

        // minDist 100, distance 1 → overlap 99, force 4.95 along +X
        assert!(b.velocity.x > 0.0);
        assert!(a.velocity.x < 0.0);
        assert!((b.velocity.x - 4.95).abs() < 1e-4);
        assert_eq!(a.velocity, -b.velocity);
    }

    #[test]
    fn test_separated_pair_is_untouched() {
        let mut a = entity_at(Vec3::ZERO, 10.0);
        let mut b = entity_at(Vec3::new(50.0, 0.0, 0.0), 10.0);

        resolve(&mut b, std::slice::from_mut(&mut a), 1.0);

        assert_eq!(a.velocity, Vec3::ZERO);
        assert_eq!(b.velocity, Vec3::ZERO);
    }

    #[test]
    fn test_coincident_centers_use_fallback_direction() {
        let mut a = entity_at(Vec3::new(3.0, 3.0, 3.0), 20.0);
        let mut b = entity_at(Vec3::new(3.0, 3.0, 3.0), 20.0);

        resolve(&mut b, std::slice::from_mut(&mut a), 1.0);

        assert!(b.velocity.is_finite());
        assert!(a.velocity.is_finite());
        assert!(b.velocity.x > 0.0);
        assert_eq!(b.velocity.y, 0.0);
    }

    #[test]
    fn test_integrate_moves_then_damps() {
        let mut e = entity_at(Vec3::ZERO, 10.0);
        e.velocity = Vec3::new(2.0, 0.0, -1.0);

        integrate(&mut e);

        assert_eq!(e.position, Vec3::new(2.0, 0.0, -1.0));
        assert!((e.velocity - Vec3::new(1.8, 0.0, -0.9)).length() < 1e-6);
    }

    #[test]
    fn test_overlap_deficit_shrinks_over_frames() {
        // Fixed anchors, sizes held constant, same per-frame order as the field:
        // entity 0 integrates first, entity 1 resolves against it then integrates.
        let size = 20.0;
        let mut entities = [
            entity_at(Vec3::ZERO, size),
            entity_at(Vec3::new(5.0, 0.0, 0.0), size),
        ];
        let min_distance = 2.0 * size;
        let initial_deficit = min_distance - 5.0;

        let mut deficit = initial_deficit;
        for _ in 0..300 {
            integrate(&mut entities[0]);
            let (earlier, rest) = entities.split_at_mut(1);
            resolve(&mut rest[0], earlier, 1.0);
            integrate(&mut rest[0]);

            let distance = entities[0].position.distance(entities[1].position);
            deficit = (min_distance - distance).max(0.0);
            assert!(distance.is_finite());
        }

        assert!(deficit < initial_deficit * 0.05, "deficit {}", deficit);
    }
}
