//! # Editing Module
//!
//! Places and removes single voxels picked by a ray, then rebuilds the geometry of
//! every chunk the edit can have changed.
//!
//! ## Edit Flow
//!
//! 1. Raycast against the world; a miss is a no-op
//! 2. Nudge the hit point half a voxel along the hit normal: outward when placing,
//!    inward when removing. The hit point lies exactly on a face, so without the
//!    nudge either neighboring cell could be picked.
//! 3. Write the new voxel
//! 4. Rebuild the edited chunk and the chunks of its six face neighbors, once each

use cgmath::Point3;
use log::trace;

use crate::config::{ConfigError, ConfigResult};

use super::{
    raycast::{intersect_ray, Ray},
    rendering::meshing::{ChunkRenderer, MeshBuilder},
    voxels::{
        block::{block_side::NEIGHBOR_OFFSETS, block_type::VoxelType},
        chunk::ChunkCoord,
        world::World,
    },
};

/// A request to edit the voxel under a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditRequest {
    /// Segment used to pick the voxel
    pub ray: Ray,
    /// Clear the struck voxel instead of placing one against it.
    pub remove: bool,
}

impl EditRequest {
    /// Places the editor's voxel type against the face the ray strikes.
    pub fn place(ray: Ray) -> Self {
        EditRequest { ray, remove: false }
    }

    /// Clears the voxel the ray strikes.
    pub fn remove(ray: Ray) -> Self {
        EditRequest { ray, remove: true }
    }
}

/// What an applied edit changed.
#[derive(Debug, Clone, PartialEq)]
pub struct EditOutcome {
    /// The cell that was written
    pub voxel_position: Point3<i32>,
    /// The voxel written into that cell
    pub voxel: VoxelType,
    /// Chunks whose geometry was rebuilt, in rebuild order
    pub rebuilt_chunks: Vec<ChunkCoord>,
}

/// Applies ray-picked voxel edits and keeps the solid voxel counter.
#[derive(Debug, Clone)]
pub struct WorldEditor {
    place_voxel_type: VoxelType,
    solid_voxel_count: usize,
}

impl WorldEditor {
    /// Creates an editor that places `place_voxel_type`.
    pub fn new(place_voxel_type: VoxelType) -> Self {
        WorldEditor {
            place_voxel_type,
            solid_voxel_count: 0,
        }
    }

    /// Voxel type written by place edits.
    pub fn place_voxel_type(&self) -> VoxelType {
        self.place_voxel_type
    }

    /// Changes the voxel type written by place edits.
    ///
    /// EMPTY is rejected: placing it would clear a cell while counting it as added.
    pub fn set_place_voxel_type(&mut self, voxel: VoxelType) -> ConfigResult<()> {
        if voxel.is_empty() {
            return Err(ConfigError::EmptyPlaceType);
        }
        self.place_voxel_type = voxel;
        Ok(())
    }

    /// Running count of solid voxels, for display.
    pub fn solid_voxel_count(&self) -> usize {
        self.solid_voxel_count
    }

    /// Adds voxels produced outside of edits, such as terrain generation.
    pub fn record_generated(&mut self, count: usize) {
        self.solid_voxel_count += count;
    }

    /// Applies one edit. Returns `None` when the ray hits nothing.
    pub fn apply_edit<R: ChunkRenderer + ?Sized>(
        &mut self,
        world: &mut World,
        mesh_builder: &MeshBuilder,
        renderer: &mut R,
        request: &EditRequest,
    ) -> Option<EditOutcome> {
        let hit = intersect_ray(world, &request.ray)?;

        let (voxel, nudge) = if request.remove {
            (VoxelType::EMPTY, -0.5)
        } else {
            (self.place_voxel_type, 0.5)
        };

        let target = World::voxel_position(hit.position + hit.normal_f32() * nudge);
        world.set_voxel(target.x, target.y, target.z, voxel);

        if request.remove {
            self.solid_voxel_count = self.solid_voxel_count.saturating_sub(1);
        } else {
            self.solid_voxel_count += 1;
        }

        trace!(
            "Edit at {:?}: {:?} (hit {:?} on {:?})",
            target,
            voxel,
            hit.cell,
            hit.normal
        );

        let rebuilt_chunks = Self::affected_chunks(world, target);
        for chunk in &rebuilt_chunks {
            mesh_builder.rebuild_chunk(world, *chunk, renderer);
        }

        Some(EditOutcome {
            voxel_position: target,
            voxel,
            rebuilt_chunks,
        })
    }

    /// Chunks containing a voxel or any of its six face neighbors, without duplicates.
    ///
    /// An interior voxel yields one chunk; a voxel on a chunk corner yields up to four,
    /// and the full seven only occur for one-voxel-wide chunks. Neighbors outside the
    /// `i32` range have no chunk and are skipped.
    pub fn affected_chunks(world: &World, voxel: Point3<i32>) -> Vec<ChunkCoord> {
        let mut chunks: Vec<ChunkCoord> = Vec::with_capacity(NEIGHBOR_OFFSETS.len());
        for [dx, dy, dz] in NEIGHBOR_OFFSETS {
            let Some(neighbor) = World::voxel_coord(Point3::new(
                i64::from(voxel.x) + i64::from(dx),
                i64::from(voxel.y) + i64::from(dy),
                i64::from(voxel.z) + i64::from(dz),
            )) else {
                continue;
            };
            let chunk = world.chunk_id(neighbor.x, neighbor.y, neighbor.z);
            if !chunks.contains(&chunk) {
                chunks.push(chunk);
            }
        }
        chunks
    }
}
