/// Camera and perspective projection
use nalgebra::Vector3;

use crate::geometry::{Cube, EdgeGroup, EDGES};

/// Default field of view
pub const DEFAULT_FOV: f64 = 120.0;

/// Points whose `fov + z` falls at or below this are behind the camera plane
pub const NEAR_EPSILON: f64 = 1e-6;

/// A projected point in integer screen coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
}

impl ScreenPoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// One cube edge after projection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectedEdge {
    pub from: ScreenPoint,
    pub to: ScreenPoint,
    pub group: EdgeGroup,
}

/// Perspective camera shared by all cubes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub fov: f64,
}

impl Camera {
    pub fn new(fov: f64) -> Self {
        Self { fov }
    }

    /// Project a 3D point to 2D screen space.
    ///
    /// Returns `None` when the point sits on or behind the camera plane
    /// (`fov + z <= NEAR_EPSILON`), where the divide would blow up or flip.
    pub fn project(&self, point: &Vector3<f64>) -> Option<ScreenPoint> {
        let depth = self.fov + point.z;
        if depth <= NEAR_EPSILON || !depth.is_finite() {
            return None;
        }

        let screen_x = point.x * self.fov / depth;
        let screen_y = point.y * self.fov / depth;

        // `as` truncates toward zero and saturates at the i32 bounds
        Some(ScreenPoint::new(screen_x as i32, screen_y as i32))
    }

    /// Project a cube's 12 edges, skipping any edge with an unprojectable end
    pub fn project_cube(&self, cube: &Cube) -> Vec<ProjectedEdge> {
        let projected = cube.world_corners().map(|corner| self.project(&corner));

        EDGES
            .iter()
            .filter_map(|&(a, b, group)| {
                let from = projected[a.index()]?;
                let to = projected[b.index()]?;
                Some(ProjectedEdge { from, to, group })
            })
            .collect()
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(DEFAULT_FOV)
    }
}
