use cgmath::{Point2, Point3};

use crate::engine_state::voxels::block::{block_side::BlockSide, block_type::VoxelType};

/// One corner of a face template: offset inside the unit cube and its atlas-tile UV.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceCorner {
    /// Corner position inside the unit cube
    pub position: [f32; 3],
    /// Tile-space UV, each component in `[0, 1]`
    pub uv: [f32; 2],
}

const fn corner(position: [f32; 3], uv: [f32; 2]) -> FaceCorner {
    FaceCorner { position, uv }
}

const TOP_CORNERS: [FaceCorner; 4] = [
    corner([0.0, 1.0, 1.0], [1.0, 1.0]),
    corner([1.0, 1.0, 1.0], [0.0, 1.0]),
    corner([0.0, 1.0, 0.0], [1.0, 0.0]),
    corner([1.0, 1.0, 0.0], [0.0, 0.0]),
];

const FRONT_CORNERS: [FaceCorner; 4] = [
    corner([0.0, 0.0, 1.0], [0.0, 0.0]),
    corner([1.0, 0.0, 1.0], [1.0, 0.0]),
    corner([0.0, 1.0, 1.0], [0.0, 1.0]),
    corner([1.0, 1.0, 1.0], [1.0, 1.0]),
];

const BACK_CORNERS: [FaceCorner; 4] = [
    corner([1.0, 0.0, 0.0], [0.0, 0.0]),
    corner([0.0, 0.0, 0.0], [1.0, 0.0]),
    corner([1.0, 1.0, 0.0], [0.0, 1.0]),
    corner([0.0, 1.0, 0.0], [1.0, 1.0]),
];

const LEFT_CORNERS: [FaceCorner; 4] = [
    corner([0.0, 1.0, 0.0], [0.0, 1.0]),
    corner([0.0, 0.0, 0.0], [0.0, 0.0]),
    corner([0.0, 1.0, 1.0], [1.0, 1.0]),
    corner([0.0, 0.0, 1.0], [1.0, 0.0]),
];

const RIGHT_CORNERS: [FaceCorner; 4] = [
    corner([1.0, 1.0, 1.0], [0.0, 1.0]),
    corner([1.0, 0.0, 1.0], [0.0, 0.0]),
    corner([1.0, 1.0, 0.0], [1.0, 1.0]),
    corner([1.0, 0.0, 0.0], [1.0, 0.0]),
];

const BOTTOM_CORNERS: [FaceCorner; 4] = [
    corner([1.0, 0.0, 1.0], [1.0, 0.0]),
    corner([0.0, 0.0, 1.0], [0.0, 0.0]),
    corner([1.0, 0.0, 0.0], [1.0, 1.0]),
    corner([0.0, 0.0, 0.0], [0.0, 1.0]),
];

/// Corner template of a face, ordered so that indices `[0, 1, 2, 2, 1, 3]`
/// produce two front-facing triangles.
pub fn corners(side: BlockSide) -> &'static [FaceCorner; 4] {
    match side {
        BlockSide::TOP => &TOP_CORNERS,
        BlockSide::FRONT => &FRONT_CORNERS,
        BlockSide::BACK => &BACK_CORNERS,
        BlockSide::LEFT => &LEFT_CORNERS,
        BlockSide::RIGHT => &RIGHT_CORNERS,
        BlockSide::BOTTOM => &BOTTOM_CORNERS,
    }
}

/// Represents a single visible quad of a voxel in chunk-local space.
///
/// The positions are the face template offset by the voxel's local coordinate;
/// the UVs are still in tile space (0 or 1) and get mapped into the atlas when the
/// face is pushed into a geometry payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face {
    /// Corner positions in chunk-local coordinates
    pub positions: [Point3<f32>; 4],
    /// Corner UVs inside the voxel's atlas tile
    pub tile_uvs: [Point2<f32>; 4],
    /// The voxel type, used for texture mapping
    pub voxel_type: VoxelType,
    /// Which side of the voxel this face represents
    pub block_side: BlockSide,
}

impl Face {
    /// Creates a new face for a voxel at local coordinates `(i, j, k)`.
    pub fn new(i: i32, j: i32, k: i32, voxel_type: VoxelType, block_side: BlockSide) -> Self {
        let template = corners(block_side);
        let (i, j, k) = (i as f32, j as f32, k as f32);

        Face {
            positions: template.map(|c| {
                Point3::new(c.position[0] + i, c.position[1] + j, c.position[2] + k)
            }),
            tile_uvs: template.map(|c| Point2::new(c.uv[0], c.uv[1])),
            voxel_type,
            block_side,
        }
    }
}
