//! # Voxel Type Module
//!
//! This module defines the closed set of voxel types that can occupy a slot in the world.

use num_derive::FromPrimitive;
use serde::{Deserialize, Serialize};

use super::VoxelTypeSize;

/// Enumerates all possible voxel types in the world.
///
/// The declaration order is significant: `EMPTY` sits at position zero and the
/// solid types follow in the order their tiles appear in the texture atlas.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Hash, FromPrimitive, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum VoxelType {
    /// Absence of solid matter. Never rendered, never intersected.
    #[default]
    EMPTY,

    /// Grass, only generated on the surface layer of terrain columns.
    GRASS,

    /// Plain dirt, also the default type placed by edits.
    DIRT,

    /// Sand.
    SAND,

    /// Rock.
    ROCK,
}

impl VoxelType {
    /// All solid variants in enumeration order.
    pub const SOLID: [VoxelType; 4] = [
        VoxelType::GRASS,
        VoxelType::DIRT,
        VoxelType::SAND,
        VoxelType::ROCK,
    ];

    /// Converts an enumeration position back into a `VoxelType`.
    ///
    /// Returns `None` if `index` does not name a variant.
    pub fn from_index(index: VoxelTypeSize) -> Option<Self> {
        num::FromPrimitive::from_u8(index)
    }

    /// Position of this type in the enumeration.
    pub fn index(self) -> VoxelTypeSize {
        self as VoxelTypeSize
    }

    /// Returns `true` for `VoxelType::EMPTY`.
    pub fn is_empty(self) -> bool {
        self == VoxelType::EMPTY
    }

    /// Returns `true` for every type that is rendered and intersected.
    pub fn is_solid(self) -> bool {
        !self.is_empty()
    }

    /// Column of this type's tiles in the texture atlas.
    ///
    /// EMPTY occupies position zero of the enumeration but has no tile, so
    /// solid types map to `index - 1` and EMPTY maps to `None`.
    pub fn tile_column(self) -> Option<u32> {
        match self {
            VoxelType::EMPTY => None,
            solid => Some(solid.index() as u32 - 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trips_through_from_index() {
        for voxel in [VoxelType::EMPTY]
            .into_iter()
            .chain(VoxelType::SOLID.into_iter())
        {
            assert_eq!(VoxelType::from_index(voxel.index()), Some(voxel));
        }
        assert_eq!(VoxelType::from_index(5), None);
    }

    #[test]
    fn tile_column_skips_empty() {
        assert_eq!(VoxelType::EMPTY.tile_column(), None);
        assert_eq!(VoxelType::GRASS.tile_column(), Some(0));
        assert_eq!(VoxelType::ROCK.tile_column(), Some(3));
    }

    #[test]
    fn default_is_empty() {
        assert!(VoxelType::default().is_empty());
        assert!(VoxelType::SAND.is_solid());
    }

    #[test]
    fn deserializes_by_lowercase_name() {
        let voxel: VoxelType = serde_json::from_str("\"rock\"").unwrap();
        assert_eq!(voxel, VoxelType::ROCK);
    }
}
