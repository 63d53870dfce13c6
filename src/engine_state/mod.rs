//! # Engine State Module
//!
//! The top-level controller of the voxel world.
//!
//! ## Key Components
//!
//! * `EngineState` - Owns the world and every component that reads or writes it
//! * `voxels` - Voxel types, chunks, the chunk store and terrain generation
//! * `rendering` - Chunk meshing and the renderer boundary
//! * `raycast` - Grid traversal for picking voxels
//! * `editing` - Ray-picked voxel placement and removal
//!
//! ## Architecture
//!
//! Input handling lives outside the engine. Callers turn input into
//! [`EditRequest`]s and queue them; the engine drains the queue once per tick in
//! submission order. Nothing is published or subscribed globally, so the order in
//! which edits and rebuilds happen is exactly the order of the queue.
//!
//! Everything runs on the caller's thread and every call completes before it
//! returns. Mutation of the world requires `&mut self`, which keeps a single
//! writer at a time.

use std::collections::VecDeque;

use cgmath::Point3;
use log::{debug, info};

use crate::config::{ConfigResult, WorldConfig};

pub mod editing;
pub mod raycast;
pub mod rendering;
pub mod voxels;

use editing::{EditOutcome, EditRequest, WorldEditor};
use rendering::meshing::{ChunkRenderer, MeshBuilder};
use voxels::{
    block::block_type::VoxelType, chunk::ChunkCoord, terrain::TerrainGenerator, world::World,
};

/// The chunk generated and meshed when a level loads.
pub const ORIGIN_CHUNK: ChunkCoord = Point3 { x: 0, y: 0, z: 0 };

/// The main state container for the voxel world.
///
/// # Examples
///
/// ```
/// use cgmath::Point3;
/// use voxel_world::{EditRequest, EngineState, Ray, RenderableRegistry, WorldConfig};
///
/// let config = WorldConfig { terrain_seed: Some(1), ..WorldConfig::default() };
/// let mut engine = EngineState::new(config, RenderableRegistry::new()).unwrap();
/// engine.load();
///
/// let ray = Ray::between(Point3::new(4.5, 40.0, 4.5), Point3::new(4.5, 0.0, 4.5));
/// engine.queue_edit(EditRequest::remove(ray));
/// let outcomes = engine.process_edits();
/// assert_eq!(outcomes.len(), 1);
/// ```
pub struct EngineState<R: ChunkRenderer> {
    /// Validated configuration the engine was built from
    config: WorldConfig,
    /// The voxel world containing all chunk data
    world: World,
    /// Terrain generator used when a level loads
    terrain: TerrainGenerator,
    /// Builds chunk geometry for the renderer
    mesh_builder: MeshBuilder,
    /// Applies edits and keeps the solid voxel counter
    editor: WorldEditor,
    /// Receives rebuilt chunk geometry
    renderer: R,
    /// Edits waiting for the next tick
    pending_edits: VecDeque<EditRequest>,
    /// Whether the level has been generated
    is_loaded: bool,
}

impl<R: ChunkRenderer> EngineState<R> {
    /// Creates a new engine from a configuration and a renderer.
    ///
    /// The configuration is validated here, before any component is built.
    pub fn new(config: WorldConfig, renderer: R) -> ConfigResult<Self> {
        config.validate()?;

        let terrain = match config.terrain_seed {
            Some(seed) => TerrainGenerator::with_seed(seed),
            None => TerrainGenerator::new(),
        };

        Ok(Self {
            world: World::new(config.chunk_dimension),
            terrain,
            mesh_builder: MeshBuilder::new(config.atlas),
            editor: WorldEditor::new(config.place_voxel_type),
            renderer,
            pending_edits: VecDeque::new(),
            is_loaded: false,
            config,
        })
    }

    /// Generates the starting chunk and uploads its geometry.
    ///
    /// Loading an already loaded level does nothing. Reloading after
    /// [`unload`](Self::unload) keeps the existing world, edits included, and only
    /// uploads its geometry again.
    pub fn load(&mut self) {
        if self.is_loaded {
            debug!("Level already loaded");
            return;
        }

        if self.world.get_chunk(ORIGIN_CHUNK).is_none() {
            let generated = self.terrain.generate_chunk(&mut self.world, ORIGIN_CHUNK);
            self.editor.record_generated(generated);
        } else {
            debug!("Origin chunk already generated, remeshing only");
        }
        self.mesh_builder
            .rebuild_chunk(&self.world, ORIGIN_CHUNK, &mut self.renderer);
        self.is_loaded = true;

        info!("Level loaded");
    }

    /// Marks the level as unloaded. World contents are kept.
    pub fn unload(&mut self) {
        self.is_loaded = false;
        info!("Level unloaded");
    }

    /// Whether [`load`](Self::load) has run since construction or the last unload.
    pub fn is_loaded(&self) -> bool {
        self.is_loaded
    }

    /// Queues an edit for the next call to [`process_edits`](Self::process_edits).
    pub fn queue_edit(&mut self, request: EditRequest) {
        self.pending_edits.push_back(request);
    }

    /// Number of edits waiting for the next [`process_edits`](Self::process_edits).
    pub fn pending_edit_count(&self) -> usize {
        self.pending_edits.len()
    }

    /// Applies every queued edit in order and returns the outcomes of those that hit.
    ///
    /// Call once per tick.
    pub fn process_edits(&mut self) -> Vec<EditOutcome> {
        let mut outcomes = Vec::new();
        while let Some(request) = self.pending_edits.pop_front() {
            if let Some(outcome) = self.edit(&request) {
                outcomes.push(outcome);
            }
        }
        outcomes
    }

    /// Applies one edit immediately, bypassing the queue.
    pub fn edit(&mut self, request: &EditRequest) -> Option<EditOutcome> {
        self.editor.apply_edit(
            &mut self.world,
            &self.mesh_builder,
            &mut self.renderer,
            request,
        )
    }

    /// Running solid voxel count, for display.
    pub fn solid_voxel_count(&self) -> usize {
        self.editor.solid_voxel_count()
    }

    /// Changes the voxel type written by place edits. EMPTY is rejected.
    pub fn set_place_voxel_type(&mut self, voxel: VoxelType) -> ConfigResult<()> {
        self.editor.set_place_voxel_type(voxel)
    }

    /// The configuration the engine was built from.
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Read-only view of the voxel world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The renderer receiving chunk geometry.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Mutable access to the renderer, e.g. to draw a frame.
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine_state::raycast::Ray;
    use crate::engine_state::rendering::meshing::RenderableRegistry;

    fn engine() -> EngineState<RenderableRegistry> {
        let config = WorldConfig {
            chunk_dimension: 8,
            terrain_seed: Some(11),
            ..WorldConfig::default()
        };
        EngineState::new(config, RenderableRegistry::new()).unwrap()
    }

    #[test]
    fn invalid_config_is_rejected_at_construction() {
        let config = WorldConfig {
            chunk_dimension: -2,
            ..WorldConfig::default()
        };
        assert!(EngineState::new(config, RenderableRegistry::new()).is_err());
    }

    #[test]
    fn load_generates_and_meshes_the_origin_chunk_once() {
        let mut engine = engine();
        assert!(!engine.is_loaded());

        engine.load();
        engine.load();

        assert!(engine.is_loaded());
        assert_eq!(engine.world().chunk_count(), 1);
        assert_eq!(engine.solid_voxel_count(), engine.world().solid_voxel_count());
        let renderable = engine.renderer().get(ORIGIN_CHUNK).unwrap();
        assert_eq!(renderable.revision, 0);
        assert!(!renderable.geometry.is_empty());

        engine.unload();
        assert!(!engine.is_loaded());
    }

    #[test]
    fn queued_edits_apply_in_order_on_process() {
        let mut engine = engine();
        engine.load();
        let count = engine.solid_voxel_count();

        let column = Ray::between(Point3::new(0.5, 20.0, 0.5), Point3::new(0.5, -1.0, 0.5));
        engine.queue_edit(EditRequest::place(column));
        engine.queue_edit(EditRequest::remove(column));
        assert_eq!(engine.pending_edit_count(), 2);
        // Nothing changes until the queue is drained.
        assert_eq!(engine.solid_voxel_count(), count);

        let outcomes = engine.process_edits();
        assert_eq!(engine.pending_edit_count(), 0);
        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].voxel, VoxelType::DIRT);
        assert_eq!(outcomes[1].voxel, VoxelType::EMPTY);
        // The removal strikes the voxel that was just placed.
        assert_eq!(outcomes[0].voxel_position, outcomes[1].voxel_position);
        assert_eq!(engine.solid_voxel_count(), count);
        assert_eq!(engine.world().solid_voxel_count(), count);
    }

    #[test]
    fn reload_keeps_edits_and_the_counter() {
        let mut engine = engine();
        engine.load();

        let column = Ray::between(Point3::new(0.5, 20.0, 0.5), Point3::new(0.5, -1.0, 0.5));
        let removed = engine
            .edit(&EditRequest::remove(column))
            .expect("terrain below")
            .voxel_position;
        let count = engine.solid_voxel_count();

        engine.unload();
        engine.load();

        assert!(engine.is_loaded());
        assert_eq!(engine.world().get_voxel(removed.x, removed.y, removed.z), VoxelType::EMPTY);
        assert_eq!(engine.solid_voxel_count(), count);
        assert_eq!(engine.solid_voxel_count(), engine.world().solid_voxel_count());
        // Geometry was uploaded again: load, edit, reload.
        assert_eq!(engine.renderer().get(ORIGIN_CHUNK).map(|r| r.revision), Some(2));
    }

    #[test]
    fn place_type_can_be_changed_but_not_to_empty() {
        let mut engine = engine();
        engine.load();
        assert!(engine.set_place_voxel_type(VoxelType::EMPTY).is_err());
        engine.set_place_voxel_type(VoxelType::SAND).unwrap();

        let column = Ray::between(Point3::new(0.5, 20.0, 0.5), Point3::new(0.5, -1.0, 0.5));
        let outcome = engine.edit(&EditRequest::place(column)).unwrap();
        assert_eq!(outcome.voxel, VoxelType::SAND);
    }
}
