/// Wirecube Core Library - geometry, edit-mode state and projection
///
/// This library holds everything that does not touch a terminal: vector
/// rotation math, the cube model, the modal parameter editor, the fixed-tick
/// simulation step, perspective projection and the drawing contract.

pub mod config;
pub mod geometry;
pub mod input;
pub mod overlay;
pub mod projection;
pub mod render;
pub mod simulation;
pub mod state;
pub mod transform;

// Re-export commonly used types
pub use config::{Config, CubeConfig};
pub use geometry::{Corner, Cube, EdgeGroup, EDGES};
pub use input::{Action, Direction};
pub use projection::{Camera, ProjectedEdge, ScreenPoint};
pub use render::{draw_scene, Rgba, Surface};
pub use simulation::FixedTimestep;
pub use state::{AppState, EditMode};
pub use transform::{RotationState, Transform};
