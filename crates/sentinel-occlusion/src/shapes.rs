//! Collider shapes and per-shape ray intersection.
//!
//! Shapes are centered on their owning entity's position and never rotate.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::ray::Ray;

/// Geometric extent of a collider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Shape {
    Sphere { radius: f32 },
    /// Axis-aligned box.
    Box { half_extents: Vec3 },
}

/// Collision volume attached to an entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Collider {
    pub shape: Shape,
    /// Layer index (0..32) tested against raycast masks.
    pub layer: u8,
}

/// Ray/shape intersection: distance along the ray and surface normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeHit {
    pub distance: f32,
    pub normal: Vec3,
}

impl Shape {
    /// Whether `point` lies inside (or on) this shape centered at `center`.
    pub fn contains(&self, center: Vec3, point: Vec3) -> bool {
        let offset = point - center;
        match *self {
            Shape::Sphere { radius } => offset.length_squared() <= radius * radius,
            Shape::Box { half_extents } => offset.abs().cmple(half_extents).all(),
        }
    }

    /// Nearest intersection of `ray` with this shape centered at `center`,
    /// limited to `[0, max_distance]`. A ray starting inside hits at 0.
    pub fn intersect(&self, center: Vec3, ray: &Ray, max_distance: f32) -> Option<ShapeHit> {
        match *self {
            Shape::Sphere { radius } => intersect_sphere(center, radius, ray, max_distance),
            Shape::Box { half_extents } => {
                intersect_aabb(center - half_extents, center + half_extents, ray, max_distance)
            }
        }
    }
}

fn intersect_sphere(center: Vec3, radius: f32, ray: &Ray, max_distance: f32) -> Option<ShapeHit> {
    let m = ray.origin - center;
    let b = m.dot(ray.direction);
    let c = m.dot(m) - radius * radius;

    // Origin outside and pointing away
    if c > 0.0 && b > 0.0 {
        return None;
    }
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }

    if c <= 0.0 {
        return Some(ShapeHit {
            distance: 0.0,
            normal: -ray.direction,
        });
    }

    let t = -b - disc.sqrt();
    if t > max_distance {
        return None;
    }
    let point = ray.at(t);
    Some(ShapeHit {
        distance: t,
        normal: (point - center).normalize_or_zero(),
    })
}

fn intersect_aabb(min: Vec3, max: Vec3, ray: &Ray, max_distance: f32) -> Option<ShapeHit> {
    let mut t_min = 0.0_f32;
    let mut t_max = max_distance;
    let mut entry_axis: Option<usize> = None;

    for axis in 0..3 {
        let o = ray.origin[axis];
        let d = ray.direction[axis];

        if d.abs() < 1e-8 {
            // Parallel to this slab: must already be between its planes
            if o < min[axis] || o > max[axis] {
                return None;
            }
            continue;
        }

        let inv = 1.0 / d;
        let mut t1 = (min[axis] - o) * inv;
        let mut t2 = (max[axis] - o) * inv;
        if t1 > t2 {
            std::mem::swap(&mut t1, &mut t2);
        }
        if t1 > t_min {
            t_min = t1;
            entry_axis = Some(axis);
        }
        t_max = t_max.min(t2);
        if t_min > t_max {
            return None;
        }
    }

    let normal = match entry_axis {
        Some(axis) => {
            let mut n = Vec3::ZERO;
            n[axis] = -ray.direction[axis].signum();
            n
        }
        None => -ray.direction,
    };

    Some(ShapeHit {
        distance: t_min,
        normal,
    })
}
