/// Edit-mode state machine and application state
use crate::config::Config;
use crate::geometry::Cube;
use crate::input::{Action, Direction};
use crate::projection::Camera;
use crate::simulation;

/// FOV change per increase/decrease
pub const FOV_STEP: f64 = 0.5;

/// Rotation change (radians) per increase/decrease
pub const ROTATION_STEP: f64 = 0.01;

/// The scalar currently targeted by increase/decrease input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    Fov,
    RotateX,
    RotateY,
    RotateZ,
    SelectCube,
    ToggleAutoRotate,
}

impl EditMode {
    pub const ALL: [EditMode; 6] = [
        EditMode::Fov,
        EditMode::RotateX,
        EditMode::RotateY,
        EditMode::RotateZ,
        EditMode::SelectCube,
        EditMode::ToggleAutoRotate,
    ];

    /// The following mode, wrapping after the last
    pub fn next(self) -> EditMode {
        match self {
            EditMode::Fov => EditMode::RotateX,
            EditMode::RotateX => EditMode::RotateY,
            EditMode::RotateY => EditMode::RotateZ,
            EditMode::RotateZ => EditMode::SelectCube,
            EditMode::SelectCube => EditMode::ToggleAutoRotate,
            EditMode::ToggleAutoRotate => EditMode::Fov,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EditMode::Fov => "Editing FOV.",
            EditMode::RotateX => "Editing X rotation.",
            EditMode::RotateY => "Editing Y rotation.",
            EditMode::RotateZ => "Editing Z rotation.",
            EditMode::SelectCube => "Selecting cube.",
            EditMode::ToggleAutoRotate => "Toggling auto-rotate.",
        }
    }
}

/// Everything the main loop mutates: camera, cubes and the editor
#[derive(Debug, Clone)]
pub struct AppState {
    pub camera: Camera,
    pub cubes: Vec<Cube>,
    current_cube: usize,
    mode: EditMode,
    running: bool,
}

impl AppState {
    pub fn new(camera: Camera, cubes: Vec<Cube>) -> Self {
        Self {
            camera,
            cubes,
            current_cube: 0,
            mode: EditMode::default(),
            running: true,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let cubes = config.cubes.iter().map(|cube| cube.build()).collect();
        Self::new(Camera::new(config.fov), cubes)
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn current_cube_index(&self) -> usize {
        self.current_cube
    }

    pub fn current_cube(&self) -> Option<&Cube> {
        self.cubes.get(self.current_cube)
    }

    fn current_cube_mut(&mut self) -> Option<&mut Cube> {
        self.cubes.get_mut(self.current_cube)
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn cycle_mode(&mut self) {
        self.mode = self.mode.next();
        log::debug!("Edit mode: {:?}", self.mode);
    }

    /// Route an increase/decrease to whatever the current mode edits
    pub fn adjust(&mut self, direction: Direction) {
        let sign = direction.sign();
        match self.mode {
            EditMode::Fov => {
                self.camera.fov += sign * FOV_STEP;
            }
            EditMode::RotateX => {
                if let Some(cube) = self.current_cube_mut() {
                    cube.rotation_mut().x += sign * ROTATION_STEP;
                }
            }
            EditMode::RotateY => {
                if let Some(cube) = self.current_cube_mut() {
                    cube.rotation_mut().y += sign * ROTATION_STEP;
                }
            }
            EditMode::RotateZ => {
                if let Some(cube) = self.current_cube_mut() {
                    cube.rotation_mut().z += sign * ROTATION_STEP;
                }
            }
            EditMode::SelectCube => {
                self.select_cube(direction);
            }
            EditMode::ToggleAutoRotate => {
                let index = self.current_cube;
                if let Some(cube) = self.current_cube_mut() {
                    cube.toggle_auto_rotate();
                    log::debug!("Cube {} auto-rotate: {}", index, cube.auto_rotate());
                }
            }
        }
    }

    /// Move the selection one cube forward or back, wrapping at both ends
    pub fn select_cube(&mut self, direction: Direction) {
        let count = self.cubes.len();
        if count == 0 {
            return;
        }
        self.current_cube = match direction {
            Direction::Increase => (self.current_cube + 1) % count,
            Direction::Decrease => (self.current_cube + count - 1) % count,
        };
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => {
                log::info!("Received quit signal.");
                self.quit();
            }
            Action::CycleMode => self.cycle_mode(),
            Action::Increase => self.adjust(Direction::Increase),
            Action::Decrease => self.adjust(Direction::Decrease),
        }
    }

    /// Run one fixed simulation tick
    pub fn step(&mut self) {
        simulation::step(&mut self.cubes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;

    fn two_cubes() -> AppState {
        let cubes = vec![
            Cube::new(Vector3::new(300.0, 200.0, 0.0), 100.0, 100.0, 50.0),
            Cube::new(Vector3::new(500.0, 200.0, 0.0), 100.0, 100.0, 50.0),
        ];
        AppState::new(Camera::default(), cubes)
    }

    fn enter(state: &mut AppState, mode: EditMode) {
        while state.mode() != mode {
            state.cycle_mode();
        }
    }

    #[test]
    fn test_six_cycles_return_to_fov() {
        let mut state = two_cubes();
        assert_eq!(state.mode(), EditMode::Fov);
        let mut seen = Vec::new();
        for _ in 0..6 {
            seen.push(state.mode());
            state.apply(Action::CycleMode);
        }
        assert_eq!(state.mode(), EditMode::Fov);
        assert_eq!(seen, EditMode::ALL);
    }

    #[test]
    fn test_fov_edit() {
        let mut state = two_cubes();
        state.apply(Action::Increase);
        state.apply(Action::Increase);
        assert_eq!(state.camera.fov, 121.0);
        for _ in 0..300 {
            state.apply(Action::Decrease);
        }
        // No clamping
        assert_eq!(state.camera.fov, -29.0);
    }

    #[test]
    fn test_rotation_edits_target_selected_cube() {
        let mut state = two_cubes();
        enter(&mut state, EditMode::RotateY);
        state.apply(Action::Increase);
        state.apply(Action::Increase);
        assert!((state.cubes[0].rotation().y - 0.02).abs() < 1e-12);
        assert_eq!(state.cubes[0].rotation().x, 0.0);
        assert_eq!(state.cubes[1].rotation().y, 0.0);

        enter(&mut state, EditMode::SelectCube);
        state.apply(Action::Increase);
        enter(&mut state, EditMode::RotateZ);
        state.apply(Action::Decrease);
        assert!((state.cubes[1].rotation().z + 0.01).abs() < 1e-12);
        assert_eq!(state.cubes[0].rotation().z, 0.0);
    }

    #[test]
    fn test_cube_selection_wraps() {
        let mut state = two_cubes();
        enter(&mut state, EditMode::SelectCube);
        state.apply(Action::Decrease);
        assert_eq!(state.current_cube_index(), 1);
        state.apply(Action::Increase);
        assert_eq!(state.current_cube_index(), 0);
        state.apply(Action::Increase);
        state.apply(Action::Increase);
        assert_eq!(state.current_cube_index(), 0);
    }

    #[test]
    fn test_selecting_cube_does_not_toggle_auto_rotate() {
        let mut state = two_cubes();
        enter(&mut state, EditMode::SelectCube);
        state.apply(Action::Increase);
        state.apply(Action::Increase);
        assert!(state.cubes.iter().all(|cube| !cube.auto_rotate()));
    }

    #[test]
    fn test_toggle_auto_rotate_snapshots_rotation() {
        let mut state = two_cubes();
        enter(&mut state, EditMode::RotateX);
        state.apply(Action::Increase);

        enter(&mut state, EditMode::ToggleAutoRotate);
        state.apply(Action::Increase);
        let cube = &state.cubes[0];
        assert!(cube.auto_rotate());
        assert_eq!(cube.auto_rotation_step(), cube.rotation());

        state.step();
        assert!((state.cubes[0].rotation().x - 0.02).abs() < 1e-12);

        // Decrease toggles as well
        state.apply(Action::Decrease);
        assert!(!state.cubes[0].auto_rotate());
        state.step();
        assert!((state.cubes[0].rotation().x - 0.02).abs() < 1e-12);

        state.apply(Action::Increase);
        assert!((state.cubes[0].auto_rotation_step().x - 0.02).abs() < 1e-12);
    }

    #[test]
    fn test_empty_scene_edits_are_noops() {
        let mut state = AppState::new(Camera::default(), Vec::new());
        for mode in EditMode::ALL {
            enter(&mut state, mode);
            state.apply(Action::Increase);
            state.apply(Action::Decrease);
        }
        assert_eq!(state.current_cube_index(), 0);
        assert!(state.current_cube().is_none());
    }

    #[test]
    fn test_quit() {
        let mut state = two_cubes();
        assert!(state.is_running());
        state.apply(Action::Quit);
        assert!(!state.is_running());
    }
}
