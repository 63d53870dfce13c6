//! # Block Side Module
//!
//! This module defines the six axis-aligned faces of a voxel and the neighbor
//! offsets used for face culling and edit propagation.

use cgmath::Vector3;

/// Represents the six possible faces of a voxel.
///
/// The discriminants match the order in which faces are emitted by the mesher:
/// [TOP, FRONT, BACK, LEFT, RIGHT, BOTTOM]
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum BlockSide {
    /// The top face (facing positive Y)
    TOP = 0,

    /// The front face (facing positive Z)
    FRONT = 1,

    /// The back face (facing negative Z)
    BACK = 2,

    /// The left face (facing negative X)
    LEFT = 3,

    /// The right face (facing positive X)
    RIGHT = 4,

    /// The bottom face (facing negative Y)
    BOTTOM = 5,
}

/// Offsets from a voxel to itself followed by its six face neighbors.
///
/// Used to find every chunk whose geometry can change after a single voxel edit.
pub const NEIGHBOR_OFFSETS: [[i32; 3]; 7] = [
    [0, 0, 0],   // self
    [0, 1, 0],   // top
    [0, 0, 1],   // front
    [0, 0, -1],  // back
    [-1, 0, 0],  // left
    [1, 0, 0],   // right
    [0, -1, 0],  // bottom
];

impl BlockSide {
    /// Returns all six faces in emission order.
    pub fn all() -> [BlockSide; 6] {
        [
            BlockSide::TOP,
            BlockSide::FRONT,
            BlockSide::BACK,
            BlockSide::LEFT,
            BlockSide::RIGHT,
            BlockSide::BOTTOM,
        ]
    }

    /// Offset from a voxel to the neighbor this face looks at.
    pub fn offset(self) -> Vector3<i32> {
        Vector3::from(NEIGHBOR_OFFSETS[self as usize + 1])
    }

    /// Unit normal of this face.
    pub fn normal(self) -> Vector3<f32> {
        let offset = self.offset();
        Vector3::new(offset.x as f32, offset.y as f32, offset.z as f32)
    }

    /// Row of the texture atlas holding this face's tiles.
    ///
    /// Top and bottom each have a row of their own; the four side faces share one.
    pub fn tile_row(self) -> u32 {
        match self {
            BlockSide::TOP => 0,
            BlockSide::FRONT | BlockSide::BACK | BlockSide::LEFT | BlockSide::RIGHT => 1,
            BlockSide::BOTTOM => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_are_unit_and_distinct() {
        let sides = BlockSide::all();
        for side in sides {
            let o = side.offset();
            assert_eq!(o.x.abs() + o.y.abs() + o.z.abs(), 1);
        }
        for (i, a) in sides.iter().enumerate() {
            for b in &sides[i + 1..] {
                assert_ne!(a.offset(), b.offset());
            }
        }
    }

    #[test]
    fn named_faces_point_the_right_way() {
        assert_eq!(BlockSide::TOP.offset(), Vector3::new(0, 1, 0));
        assert_eq!(BlockSide::FRONT.offset(), Vector3::new(0, 0, 1));
        assert_eq!(BlockSide::LEFT.offset(), Vector3::new(-1, 0, 0));
        assert_eq!(BlockSide::BOTTOM.normal(), Vector3::new(0.0, -1.0, 0.0));
    }
}
