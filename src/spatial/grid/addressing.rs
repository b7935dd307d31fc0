use super::*;

impl GridSpec {
    /// Resolve a world point to a cell. `rotation` is the panel orientation the
    /// point was sampled against (the host passes its current transform).
    /// The result is not clamped; callers check it with `in_bounds`.
    pub fn world_to_cell(&self, point: Vec3, rotation: Quat) -> CellCoord {
        let local = rotation.inverse() * (point - self.origin);
        let x = cell_floor(local.x / self.cell_size);
        let y = cell_floor(local.y / self.cell_size);
        CellCoord::new(saturate(x), saturate(y))
    }

    /// `world_to_cell` against the grid's own orientation
    pub fn world_to_cell_own(&self, point: Vec3) -> CellCoord {
        self.world_to_cell(point, self.rotation)
    }

    /// Lower-left corner of a cell, ignoring the panel rotation
    pub fn cell_to_world(&self, x: i32, y: i32) -> Vec3 {
        self.origin + self.local_corner(x, y)
    }

    /// Lower-left corner of a cell on the oriented panel
    pub fn cell_to_world_rotated(&self, x: i32, y: i32) -> Vec3 {
        self.origin + self.rotation * self.local_corner(x, y)
    }

    /// Middle of a cell on the oriented panel (where the spawn anchor sits)
    pub fn cell_center(&self, x: i32, y: i32) -> Vec3 {
        let half = self.cell_size * 0.5;
        let local = self.local_corner(x, y) + Vec3::new(half, half, 0.0);
        self.origin + self.rotation * local
    }

    #[inline]
    fn local_corner(&self, x: i32, y: i32) -> Vec3 {
        Vec3::new(x as f32 * self.cell_size, y as f32 * self.cell_size, 0.0)
    }
}

/// Distance from a cell edge, in cells, that still counts as on the edge
const EDGE_SNAP: f32 = 1e-4;

/// floor, not `as i32`: -0.5 must land in cell -1, not 0. Values that float
/// error left just under an edge (a corner pushed through the panel
/// transform) snap onto it.
#[inline]
fn cell_floor(v: f32) -> f32 {
    let edge = v.round();
    if (v - edge).abs() <= EDGE_SNAP {
        edge
    } else {
        v.floor()
    }
}

#[inline]
fn saturate(v: f32) -> i32 {
    if v.is_nan() {
        return i32::MIN;
    }
    // `as` saturates at the i32 range
    v as i32
}
