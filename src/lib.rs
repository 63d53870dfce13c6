#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # Voxel World
//!
//! An editable voxel world: a sparse chunk store, procedural terrain, per-chunk
//! face-culled meshing, grid raycasting and ray-picked voxel edits.
//!
//! ## Key Modules
//!
//! * `engine_state` - The world controller and every component it drives
//! * `config` - World and asset settings with validation
//!
//! ## Architecture
//!
//! The crate is the CPU side of a voxel engine. It owns voxel data and produces
//! chunk geometry; drawing that geometry is left to whatever implements
//! [`ChunkRenderer`]. Input is expressed as [`EditRequest`]s queued on the
//! [`EngineState`] and applied once per tick.
//!
//! ## Usage
//!
//! ```no_run
//! fn main() {
//!     if let Err(err) = voxel_world::run() {
//!         eprintln!("{err}");
//!     }
//! }
//! ```
//!
//! ## Performance Considerations
//!
//! * Chunks are stored sparsely, so empty space costs nothing
//! * Each chunk keeps a solid-voxel bitmask next to its voxel array
//! * Remeshing after an edit touches only the chunks the edit can affect

use cgmath::Point3;
use log::info;

pub mod config;
pub mod engine_state;

pub use config::{AtlasLayout, ConfigError, ConfigResult, WorldConfig};
pub use engine_state::{
    editing::{EditOutcome, EditRequest, WorldEditor},
    raycast::{cast, intersect_ray, Ray, RaycastHit},
    rendering::meshing::{
        ChunkGeometry, ChunkRenderable, ChunkRenderer, MeshBuilder, RenderableRegistry,
    },
    voxels::{
        block::{block_side::BlockSide, block_type::VoxelType},
        chunk::{Chunk, ChunkCoord, CHUNK_DIMENSION, MAX_CHUNK_DIMENSION},
        terrain::TerrainGenerator,
        world::World,
    },
    EngineState, ORIGIN_CHUNK,
};

/// Runs a headless session: loads the level, applies a few edits and logs the result.
///
/// The first command line argument, if present, names a JSON config file.
pub fn run() -> ConfigResult<()> {
    let mut log_builder = env_logger::Builder::new();
    log_builder
        .target(env_logger::Target::Stdout)
        .parse_env("RUST_LOG")
        .init();

    info!("Logger initialized");

    let config = match std::env::args().nth(1) {
        Some(path) => {
            info!("Loading config from {}", path);
            WorldConfig::from_path(path)?
        }
        None => WorldConfig::default(),
    };

    let mut engine = EngineState::new(config, RenderableRegistry::new())?;
    engine.load();
    info!("Solid voxels: {}", engine.solid_voxel_count());

    // Straight down through the middle of the origin chunk.
    let center = engine.config().chunk_dimension as f32 / 2.0 + 0.5;
    let top = engine.config().chunk_dimension as f32 * 2.0;
    let column = Ray::between(Point3::new(center, top, center), Point3::new(center, -1.0, center));

    engine.queue_edit(EditRequest::place(column));
    engine.queue_edit(EditRequest::place(column));
    engine.queue_edit(EditRequest::remove(column));

    for outcome in engine.process_edits() {
        info!(
            "{:?} at {:?}, rebuilt {} chunk(s)",
            outcome.voxel,
            outcome.voxel_position,
            outcome.rebuilt_chunks.len()
        );
    }

    let renderer = engine.renderer();
    info!(
        "Solid voxels: {}, renderables: {}, faces: {}",
        engine.solid_voxel_count(),
        renderer.len(),
        renderer.total_face_count()
    );

    Ok(())
}
