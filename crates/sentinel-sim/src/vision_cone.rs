//! Vision cone geometry.
//!
//! The cone is a flat triangle fan in the head's local XZ plane: the apex
//! sits at the head and the rim spans the full field of view at
//! `detection_range`. A child entity carries the mesh and copies the head
//! transform every tick.

use glam::Vec3;
use hecs::Entity;
use serde::{Deserialize, Serialize};

use sentinel_core::config::SentryConfig;
use sentinel_core::types::{yaw_rotation, Transform};

/// Renderable vertex/index buffers of a vision cone, in local space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConeMesh {
    pub vertices: Vec<Vec3>,
    /// Triangle list, three indices per triangle.
    pub triangles: Vec<u32>,
    /// Per-vertex normals, same length as `vertices`.
    pub normals: Vec<Vec3>,
}

/// Cone entity spawned as a child of a sentry head.
#[derive(Debug, Clone)]
pub struct VisionCone {
    pub sentry_id: u32,
    pub mesh: ConeMesh,
}

/// Link from a sentry to its cone entity.
#[derive(Debug, Clone, Copy)]
pub struct ConeLink(pub Entity);

impl ConeMesh {
    /// Build a fan of `segments` triangles spanning `fov_deg` at distance `range`.
    ///
    /// Vertex 0 is the apex; vertices `1..=segments + 1` run across the rim
    /// from `-fov/2` to `+fov/2`.
    pub fn build(fov_deg: f32, range: f32, segments: u32) -> Self {
        let segments = segments.max(1);
        let half = fov_deg * 0.5;
        let step = fov_deg / segments as f32;

        let mut vertices = Vec::with_capacity(segments as usize + 2);
        vertices.push(Vec3::ZERO);
        for i in 0..=segments {
            let angle = -half + step * i as f32;
            vertices.push(yaw_rotation(angle) * Vec3::Z * range);
        }

        let mut triangles = Vec::with_capacity(segments as usize * 3);
        for i in 0..segments {
            triangles.extend_from_slice(&[0, i + 1, i + 2]);
        }

        let normals = recalculate_normals(&vertices, &triangles);
        Self {
            vertices,
            triangles,
            normals,
        }
    }

    /// Cone matching a sentry's field of view and range.
    pub fn from_config(config: &SentryConfig) -> Self {
        Self::build(
            config.field_of_view_deg,
            config.detection_range,
            config.fov_mesh_segments,
        )
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }

    /// Vertices placed in world space by `transform`.
    pub fn to_world(&self, transform: &Transform) -> Vec<Vec3> {
        self.vertices
            .iter()
            .map(|v| transform.transform_point(*v))
            .collect()
    }
}

/// Area-weighted vertex normals: sum of adjacent face normals, normalized.
fn recalculate_normals(vertices: &[Vec3], triangles: &[u32]) -> Vec<Vec3> {
    let mut normals = vec![Vec3::ZERO; vertices.len()];
    for tri in triangles.chunks_exact(3) {
        let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        let face = (vertices[b] - vertices[a]).cross(vertices[c] - vertices[a]);
        normals[a] += face;
        normals[b] += face;
        normals[c] += face;
    }
    for n in &mut normals {
        *n = n.normalize_or_zero();
    }
    normals
}
