//! # Configuration
//!
//! World and asset constants, loaded from an optional JSON file.
//!
//! Every field has a default, so a file only needs to name what it changes:
//!
//! ```json
//! { "chunk_dimension": 16, "place_voxel_type": "rock" }
//! ```
//!
//! Configuration is validated once, before any component is built. A bad value is
//! reported as a [`ConfigError`] instead of surfacing later as a wrong mesh.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine_state::voxels::{
    block::block_type::VoxelType,
    chunk::{CHUNK_DIMENSION, MAX_CHUNK_DIMENSION},
};

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file {path:?}: {source}")]
    Io {
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid JSON for [`WorldConfig`].
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),

    /// The chunk dimension is outside `1..=MAX_CHUNK_DIMENSION`.
    #[error("chunk dimension must be between 1 and {max}, got {0}", max = MAX_CHUNK_DIMENSION)]
    InvalidChunkDimension(i32),

    /// One of the atlas dimensions is zero.
    #[error("atlas dimensions must be non-zero, got tile {tile_size} in {width}x{height}")]
    EmptyAtlas {
        /// Configured tile edge length
        tile_size: u32,
        /// Configured atlas width
        width: u32,
        /// Configured atlas height
        height: u32,
    },

    /// A single tile is wider or taller than the atlas.
    #[error("tile size {tile_size} does not fit in a {width}x{height} atlas")]
    TileLargerThanAtlas {
        /// Configured tile edge length
        tile_size: u32,
        /// Configured atlas width
        width: u32,
        /// Configured atlas height
        height: u32,
    },

    /// Place edits would write EMPTY.
    #[error("place voxel type must be solid")]
    EmptyPlaceType,
}

/// Result type for configuration loading and validation.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Layout of the texture atlas consumed by UV generation.
///
/// Tiles are square; columns are indexed by voxel type and rows by face group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtlasLayout {
    /// Edge length of one tile, in pixels
    pub tile_size: u32,
    /// Atlas width, in pixels
    pub width: u32,
    /// Atlas height, in pixels
    pub height: u32,
}

impl Default for AtlasLayout {
    fn default() -> Self {
        AtlasLayout {
            tile_size: 64,
            width: 256,
            height: 192,
        }
    }
}

impl AtlasLayout {
    /// Checks that the atlas is non-empty and holds at least one tile.
    pub fn validate(&self) -> ConfigResult<()> {
        let AtlasLayout {
            tile_size,
            width,
            height,
        } = *self;
        if tile_size == 0 || width == 0 || height == 0 {
            return Err(ConfigError::EmptyAtlas {
                tile_size,
                width,
                height,
            });
        }
        if tile_size > width || tile_size > height {
            return Err(ConfigError::TileLargerThanAtlas {
                tile_size,
                width,
                height,
            });
        }
        Ok(())
    }
}

/// Settings shared by every component of the world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Edge length of a chunk, in voxels
    pub chunk_dimension: i32,
    /// Texture atlas layout used for UVs
    pub atlas: AtlasLayout,
    /// Voxel type written by place edits
    pub place_voxel_type: VoxelType,
    /// Seed for terrain materials; random when absent
    pub terrain_seed: Option<u64>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        WorldConfig {
            chunk_dimension: CHUNK_DIMENSION,
            atlas: AtlasLayout::default(),
            place_voxel_type: VoxelType::DIRT,
            terrain_seed: None,
        }
    }
}

impl WorldConfig {
    /// Parses and validates a JSON configuration.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: WorldConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Checks every field, so a bad value fails here rather than at allocation.
    pub fn validate(&self) -> ConfigResult<()> {
        if !(1..=MAX_CHUNK_DIMENSION).contains(&self.chunk_dimension) {
            return Err(ConfigError::InvalidChunkDimension(self.chunk_dimension));
        }
        self.atlas.validate()?;
        if self.place_voxel_type.is_empty() {
            return Err(ConfigError::EmptyPlaceType);
        }
        Ok(())
    }
}
