//! # Raycast Module
//!
//! Grid (DDA) traversal that finds the first solid voxel along a bounded segment.
//!
//! The traversal visits every cell the segment passes through, in order, stepping
//! exactly one cell per iteration along whichever axis reaches its next cell
//! boundary first. It stops at the first non-empty cell or once the parametric
//! distance exceeds the segment length.

use cgmath::{InnerSpace, Point3, Vector3};

use crate::engine_state::voxels::{block::block_type::VoxelType, world::World};

/// A bounded ray segment in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Where the walk begins
    pub start: Point3<f32>,
    /// Where the walk gives up
    pub end: Point3<f32>,
}

impl Ray {
    /// Creates a segment between two points.
    pub fn between(start: Point3<f32>, end: Point3<f32>) -> Self {
        Ray { start, end }
    }

    /// Creates a segment from an origin, a direction and a maximum distance.
    ///
    /// A zero direction produces a zero-length segment, which never hits anything.
    pub fn new(origin: Point3<f32>, direction: Vector3<f32>, max_distance: f32) -> Self {
        let end = if direction.magnitude2() > 0.0 {
            origin + direction.normalize() * max_distance
        } else {
            origin
        };
        Ray { start: origin, end }
    }

    /// Euclidean length of the segment.
    pub fn length(&self) -> f32 {
        (self.end - self.start).magnitude()
    }
}

/// The first solid voxel struck by a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaycastHit {
    /// World-space point where the ray entered the struck cell
    pub position: Point3<f32>,
    /// Normal of the face that was entered, or zero if the ray started inside the cell
    pub normal: Vector3<i32>,
    /// The struck voxel
    pub voxel: VoxelType,
    /// Integer coordinates of the struck cell
    pub cell: Point3<i32>,
    /// Distance from the ray start to `position`
    pub distance: f32,
}

impl RaycastHit {
    /// The hit normal as a float vector, for offsetting hit positions.
    pub fn normal_f32(&self) -> Vector3<f32> {
        Vector3::new(
            self.normal.x as f32,
            self.normal.y as f32,
            self.normal.z as f32,
        )
    }
}

/// Walks the grid along `ray` and returns the first solid voxel, if any.
pub fn intersect_ray(world: &World, ray: &Ray) -> Option<RaycastHit> {
    let delta = ray.end - ray.start;
    let length = delta.magnitude();
    // Also rejects NaN lengths.
    if !(length > 0.0) {
        return None;
    }
    let direction = delta / length;

    let start: [f32; 3] = ray.start.into();
    let dir: [f32; 3] = direction.into();

    let mut cell = [0i32; 3];
    let mut step = [0i32; 3];
    let mut t_delta = [0f32; 3];
    let mut t_max = [0f32; 3];

    for axis in 0..3 {
        cell[axis] = start[axis].floor() as i32;
        step[axis] = if dir[axis] > 0.0 { 1 } else { -1 };
        // Zero components give an infinite increment, so that axis is never stepped.
        t_delta[axis] = (1.0 / dir[axis]).abs();
        let boundary_distance = if step[axis] > 0 {
            cell[axis] as f32 + 1.0 - start[axis]
        } else {
            start[axis] - cell[axis] as f32
        };
        t_max[axis] = if t_delta[axis] < f32::INFINITY {
            t_delta[axis] * boundary_distance
        } else {
            f32::INFINITY
        };
    }

    let mut t = 0.0f32;
    let mut stepped_axis: Option<usize> = None;

    while t <= length {
        let voxel = world.get_voxel(cell[0], cell[1], cell[2]);
        if voxel.is_solid() {
            let mut normal = Vector3::new(0, 0, 0);
            if let Some(axis) = stepped_axis {
                normal[axis] = -step[axis];
            }
            return Some(RaycastHit {
                position: ray.start + direction * t,
                normal,
                voxel,
                cell: Point3::from(cell),
                distance: t,
            });
        }

        // Ties go to the later axis: X only wins strictly, Z wins every tie it is in.
        let axis = if t_max[0] < t_max[1] {
            if t_max[0] < t_max[2] {
                0
            } else {
                2
            }
        } else if t_max[1] < t_max[2] {
            1
        } else {
            2
        };

        // Leaving the i32 range ends the walk; nothing is stored out there.
        cell[axis] = cell[axis].checked_add(step[axis])?;
        t = t_max[axis];
        t_max[axis] += t_delta[axis];
        stepped_axis = Some(axis);
    }

    None
}

/// Convenience wrapper around [`intersect_ray`] for callers holding an origin,
/// a direction and a reach.
pub fn cast(
    world: &World,
    origin: Point3<f32>,
    direction: Vector3<f32>,
    max_distance: f32,
) -> Option<RaycastHit> {
    intersect_ray(world, &Ray::new(origin, direction, max_distance))
}
