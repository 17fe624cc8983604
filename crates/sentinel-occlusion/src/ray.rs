//! Ray casting against a set of colliders.

use glam::Vec3;

use sentinel_core::types::LayerMask;

use crate::shapes::Collider;

/// Half-line with a unit direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Build a ray, normalizing `direction`. Returns `None` for a zero or
    /// non-finite direction.
    pub fn new(origin: Vec3, direction: Vec3) -> Option<Self> {
        let direction = direction.try_normalize()?;
        Some(Self { origin, direction })
    }

    /// Point at distance `t` along the ray.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Nearest collider struck by a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaycastHit<K> {
    /// Caller-supplied key of the collider (usually an entity).
    pub key: K,
    pub point: Vec3,
    pub normal: Vec3,
    pub distance: f32,
}

/// Cast `ray` up to `max_distance` and return the nearest collider whose
/// layer is in `mask`.
///
/// `colliders` yields `(key, center, collider)` triples. Ties keep the
/// first collider yielded.
pub fn raycast<'a, K, I>(
    ray: &Ray,
    max_distance: f32,
    mask: LayerMask,
    colliders: I,
) -> Option<RaycastHit<K>>
where
    I: IntoIterator<Item = (K, Vec3, &'a Collider)>,
{
    if max_distance.is_nan() || max_distance < 0.0 {
        return None;
    }

    let mut best: Option<RaycastHit<K>> = None;
    for (key, center, collider) in colliders {
        if !mask.contains(collider.layer) {
            continue;
        }
        let limit = best.as_ref().map_or(max_distance, |b| b.distance);
        let Some(hit) = collider.shape.intersect(center, ray, limit) else {
            continue;
        };
        if best.as_ref().is_some_and(|b| hit.distance >= b.distance) {
            continue;
        }
        best = Some(RaycastHit {
            key,
            point: ray.at(hit.distance),
            normal: hit.normal,
            distance: hit.distance,
        });
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::Shape;

    fn sphere(radius: f32, layer: u8) -> Collider {
        Collider {
            shape: Shape::Sphere { radius },
            layer,
        }
    }

    fn cube(half: f32, layer: u8) -> Collider {
        Collider {
            shape: Shape::Box {
                half_extents: Vec3::splat(half),
            },
            layer,
        }
    }

    #[test]
    fn test_ray_rejects_zero_direction() {
        assert!(Ray::new(Vec3::ZERO, Vec3::ZERO).is_none());
        assert!(Ray::new(Vec3::ZERO, Vec3::new(f32::NAN, 0.0, 0.0)).is_none());
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 5.0)).unwrap();
        assert!(ray.direction.abs_diff_eq(Vec3::Z, 1e-6));
    }

    #[test]
    fn test_hits_sphere_front_surface() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Z).unwrap();
        let s = sphere(1.0, 0);
        let hit = raycast(&ray, 100.0, LayerMask::ALL, [(7u32, Vec3::new(0.0, 0.0, 5.0), &s)])
            .expect("Ray along +Z should hit the sphere");
        assert_eq!(hit.key, 7);
        assert!((hit.distance - 4.0).abs() < 1e-4);
        assert!(hit.point.abs_diff_eq(Vec3::new(0.0, 0.0, 4.0), 1e-4));
        assert!(hit.normal.abs_diff_eq(-Vec3::Z, 1e-4));
    }

    #[test]
    fn test_hits_box_face_with_normal() {
        let ray = Ray::new(Vec3::new(-5.0, 0.2, 0.0), Vec3::X).unwrap();
        let b = cube(1.0, 0);
        let hit = raycast(&ray, 100.0, LayerMask::ALL, [(1u32, Vec3::ZERO, &b)]).unwrap();
        assert!((hit.distance - 4.0).abs() < 1e-4);
        assert!(hit.normal.abs_diff_eq(-Vec3::X, 1e-6));
    }

    #[test]
    fn test_max_distance_limits_hits() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Z).unwrap();
        let s = sphere(1.0, 0);
        let colliders = [(0u32, Vec3::new(0.0, 0.0, 10.0), &s)];
        assert!(raycast(&ray, 8.5, LayerMask::ALL, colliders).is_none());
        assert!(raycast(&ray, 9.5, LayerMask::ALL, colliders).is_some());
    }

    #[test]
    fn test_nearest_hit_wins() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Z).unwrap();
        let near = cube(0.5, 0);
        let far = sphere(1.0, 0);
        // Far collider yielded first
        let colliders = [
            (1u32, Vec3::new(0.0, 0.0, 8.0), &far),
            (2u32, Vec3::new(0.0, 0.0, 3.0), &near),
        ];
        let hit = raycast(&ray, 100.0, LayerMask::ALL, colliders).unwrap();
        assert_eq!(hit.key, 2);
        assert!((hit.distance - 2.5).abs() < 1e-4);
    }

    #[test]
    fn test_mask_filters_layers() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Z).unwrap();
        let wall = cube(0.5, 0);
        let player = sphere(0.5, 8);
        let colliders = [
            (1u32, Vec3::new(0.0, 0.0, 3.0), &wall),
            (2u32, Vec3::new(0.0, 0.0, 6.0), &player),
        ];
        let hit = raycast(&ray, 100.0, LayerMask::layer(8), colliders).unwrap();
        assert_eq!(hit.key, 2, "Wall on layer 0 should be ignored by the mask");
        assert!(raycast(&ray, 100.0, LayerMask::NONE, colliders).is_none());
    }

    #[test]
    fn test_origin_inside_shape_hits_at_zero() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X).unwrap();
        let s = sphere(2.0, 0);
        let b = cube(2.0, 0);
        let hit = raycast(&ray, 10.0, LayerMask::ALL, [(0u32, Vec3::ZERO, &s)]).unwrap();
        assert_eq!(hit.distance, 0.0);
        let hit = raycast(&ray, 10.0, LayerMask::ALL, [(0u32, Vec3::ZERO, &b)]).unwrap();
        assert_eq!(hit.distance, 0.0);
    }

    #[test]
    fn test_shape_behind_ray_is_missed() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Z).unwrap();
        let s = sphere(1.0, 0);
        let b = cube(1.0, 0);
        let behind = Vec3::new(0.0, 0.0, -5.0);
        assert!(raycast(&ray, 100.0, LayerMask::ALL, [(0u32, behind, &s)]).is_none());
        assert!(raycast(&ray, 100.0, LayerMask::ALL, [(0u32, behind, &b)]).is_none());
    }

    #[test]
    fn test_ray_passing_beside_shape_misses() {
        let ray = Ray::new(Vec3::new(2.0, 0.0, 0.0), Vec3::Z).unwrap();
        let s = sphere(1.0, 0);
        let b = cube(1.0, 0);
        let center = Vec3::new(0.0, 0.0, 5.0);
        assert!(raycast(&ray, 100.0, LayerMask::ALL, [(0u32, center, &s)]).is_none());
        assert!(raycast(&ray, 100.0, LayerMask::ALL, [(0u32, center, &b)]).is_none());
    }
}
