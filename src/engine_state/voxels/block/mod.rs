//! # Block Module
//!
//! This module provides the voxel type definition and the face/neighbor geometry
//! shared by the mesher and the world editor.
//!
//! A voxel carries nothing but its type. Chunks store `VoxelType` values directly
//! and removing a voxel is just overwriting its slot with `VoxelType::EMPTY`.

pub mod block_side;
pub mod block_type;

/// The underlying integer type used to represent voxel types.
pub type VoxelTypeSize = u8;
