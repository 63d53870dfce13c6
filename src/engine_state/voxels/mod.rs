//! # Voxel World Core
//!
//! This module contains the data side of the engine: what a voxel is, how voxels
//! are grouped into chunks and how chunks are addressed in the world.
//!
//! ## Architecture
//!
//! * **Block**: voxel types and the six face directions
//! * **Chunk**: dense fixed-size arrays of voxel slots
//! * **World**: sparse chunk store, owner of all coordinate math
//! * **Terrain**: fills chunks from a height function
//!
//! ## Data Flow
//!
//! 1. The terrain generator writes voxels through the world
//! 2. The world allocates chunks lazily on first write
//! 3. The mesher and the raycaster read voxels back through the world

pub mod block;
pub mod chunk;
pub mod terrain;
pub mod world;
