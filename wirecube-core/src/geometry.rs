/// Cube model: a fixed rest pose plus mutable rotation state
use nalgebra::Vector3;

use crate::simulation::wrap_angle;
use crate::transform::{RotationState, Transform};

/// The eight named corners of a cube, front face first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    FrontTopLeft,
    FrontTopRight,
    FrontBottomLeft,
    FrontBottomRight,
    BackTopLeft,
    BackTopRight,
    BackBottomLeft,
    BackBottomRight,
}

impl Corner {
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Which visual group an edge belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeGroup {
    Front,
    Back,
    Connector,
}

/// The 12 cube edges in drawing order
pub const EDGES: [(Corner, Corner, EdgeGroup); 12] = [
    // Front face
    (Corner::FrontTopLeft, Corner::FrontTopRight, EdgeGroup::Front),
    (Corner::FrontTopRight, Corner::FrontBottomRight, EdgeGroup::Front),
    (Corner::FrontBottomRight, Corner::FrontBottomLeft, EdgeGroup::Front),
    (Corner::FrontBottomLeft, Corner::FrontTopLeft, EdgeGroup::Front),
    // Back face
    (Corner::BackTopLeft, Corner::BackTopRight, EdgeGroup::Back),
    (Corner::BackTopRight, Corner::BackBottomRight, EdgeGroup::Back),
    (Corner::BackBottomRight, Corner::BackBottomLeft, EdgeGroup::Back),
    (Corner::BackBottomLeft, Corner::BackTopLeft, EdgeGroup::Back),
    // Between both faces
    (Corner::FrontTopLeft, Corner::BackTopLeft, EdgeGroup::Connector),
    (Corner::FrontTopRight, Corner::BackTopRight, EdgeGroup::Connector),
    (Corner::FrontBottomLeft, Corner::BackBottomLeft, EdgeGroup::Connector),
    (Corner::FrontBottomRight, Corner::BackBottomRight, EdgeGroup::Connector),
];

/// A box whose corners never move; rendering rotates them about `center`.
#[derive(Debug, Clone)]
pub struct Cube {
    rest_pose: [Vector3<f64>; 8],
    center: Vector3<f64>,
    rotation: RotationState,
    auto_rotate: bool,
    auto_rotation_step: RotationState,
}

impl Cube {
    /// Build a cube from its front-top-left `origin` and its extents.
    ///
    /// `y` grows downward (screen space), the back face sits at `z + depth`.
    pub fn new(origin: Vector3<f64>, width: f64, height: f64, depth: f64) -> Self {
        let (x, y, z) = (origin.x, origin.y, origin.z);
        let rest_pose = [
            Vector3::new(x, y, z),
            Vector3::new(x + width, y, z),
            Vector3::new(x, y + height, z),
            Vector3::new(x + width, y + height, z),
            Vector3::new(x, y, z + depth),
            Vector3::new(x + width, y, z + depth),
            Vector3::new(x, y + height, z + depth),
            Vector3::new(x + width, y + height, z + depth),
        ];

        Self {
            rest_pose,
            center: origin + Vector3::new(width / 2.0, height / 2.0, depth / 2.0),
            rotation: RotationState::zero(),
            auto_rotate: false,
            auto_rotation_step: RotationState::zero(),
        }
    }

    pub fn corner(&self, corner: Corner) -> Vector3<f64> {
        self.rest_pose[corner.index()]
    }

    pub fn rest_pose(&self) -> [Vector3<f64>; 8] {
        self.rest_pose
    }

    pub fn center(&self) -> Vector3<f64> {
        self.center
    }

    pub fn origin(&self) -> Vector3<f64> {
        self.corner(Corner::FrontTopLeft)
    }

    pub fn width(&self) -> f64 {
        self.corner(Corner::FrontTopRight).x - self.corner(Corner::FrontTopLeft).x
    }

    pub fn height(&self) -> f64 {
        self.corner(Corner::FrontBottomLeft).y - self.corner(Corner::FrontTopLeft).y
    }

    pub fn depth(&self) -> f64 {
        self.corner(Corner::BackTopLeft).z - self.corner(Corner::FrontTopLeft).z
    }

    pub fn rotation(&self) -> &RotationState {
        &self.rotation
    }

    pub fn rotation_mut(&mut self) -> &mut RotationState {
        &mut self.rotation
    }

    pub fn auto_rotate(&self) -> bool {
        self.auto_rotate
    }

    pub fn auto_rotation_step(&self) -> &RotationState {
        &self.auto_rotation_step
    }

    /// Flip auto-rotation. Switching it on snapshots the current rotation as
    /// the per-tick step.
    pub fn toggle_auto_rotate(&mut self) {
        self.auto_rotate = !self.auto_rotate;
        if self.auto_rotate {
            self.auto_rotation_step = self.rotation;
        }
    }

    /// Advance one simulation tick. No-op unless auto-rotating.
    pub fn advance(&mut self) {
        if !self.auto_rotate {
            return;
        }
        let next = self.rotation.add(&self.auto_rotation_step);
        self.rotation = RotationState::new(wrap_angle(next.x), wrap_angle(next.y), wrap_angle(next.z));
    }

    /// Current world-space corners: the rest pose rotated about `center`
    pub fn world_corners(&self) -> [Vector3<f64>; 8] {
        self.rest_pose
            .map(|corner| Transform::about_pivot(&corner, &self.center, &self.rotation))
    }
}
