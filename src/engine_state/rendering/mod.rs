//! # Rendering Module
//!
//! CPU-side half of rendering: building chunk geometry and handing it across the
//! renderer boundary. Graphics API resources live behind [`meshing::ChunkRenderer`].

pub mod meshing;
