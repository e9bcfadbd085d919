/// Heads-up text lines describing the current scene
use crate::state::AppState;

/// Longest overlay line, in characters
pub const MAX_LINE_WIDTH: usize = 40;

fn truncated(value: f64) -> i32 {
    // Saturates instead of overflowing; NaN becomes 0
    value as i32
}

fn bounded(mut line: String) -> String {
    if let Some((cut, _)) = line.char_indices().nth(MAX_LINE_WIDTH) {
        line.truncate(cut);
    }
    line
}

/// One line per fact: FOV, every cube's geometry and rotation, selection, mode
pub fn overlay_lines(state: &AppState) -> Vec<String> {
    let mut lines = Vec::with_capacity(3 + state.cubes.len() * 5);
    lines.push(format!("FOV: {}", truncated(state.camera.fov)));

    for (index, cube) in state.cubes.iter().enumerate() {
        let marker = if index == state.current_cube_index() { " <" } else { "" };
        let auto = if cube.auto_rotate() { " [auto]" } else { "" };
        lines.push(format!("Cube {}{}{}", index, auto, marker));

        let origin = cube.origin();
        lines.push(format!("  - x: {} w: {}", truncated(origin.x), truncated(cube.width())));
        lines.push(format!("  - y: {} h: {}", truncated(origin.y), truncated(cube.height())));
        lines.push(format!("  - z: {} d: {}", truncated(origin.z), truncated(cube.depth())));

        let rotation = cube.rotation();
        lines.push(format!(
            "  - r: {} {} {}",
            truncated(rotation.x.to_degrees()),
            truncated(rotation.y.to_degrees()),
            truncated(rotation.z.to_degrees()),
        ));
    }

    lines.push(format!("Selected cube: {}", state.current_cube_index()));
    lines.push(format!("{} (+/-)", state.mode().label()));

    lines.into_iter().map(bounded).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::input::Action;

    #[test]
    fn test_default_scene_lines() {
        let state = AppState::from_config(&Config::default());
        let lines = overlay_lines(&state);
        assert_eq!(lines.len(), 13);
        assert_eq!(lines[0], "FOV: 120");
        assert_eq!(lines[1], "Cube 0 <");
        assert_eq!(lines[2], "  - x: 300 w: 100");
        assert_eq!(lines[3], "  - y: 200 h: 100");
        assert_eq!(lines[4], "  - z: 0 d: 50");
        assert_eq!(lines[5], "  - r: 0 0 0");
        assert_eq!(lines[6], "Cube 1");
        assert_eq!(lines[11], "Selected cube: 0");
        assert_eq!(lines[12], "Editing FOV. (+/-)");
    }

    #[test]
    fn test_mode_and_auto_rotate_readouts() {
        let mut state = AppState::from_config(&Config::default());
        for _ in 0..5 {
            state.apply(Action::CycleMode);
        }
        state.apply(Action::Increase);
        let lines = overlay_lines(&state);
        assert_eq!(lines[1], "Cube 0 [auto] <");
        assert_eq!(lines.last().unwrap(), "Toggling auto-rotate. (+/-)");
    }

    #[test]
    fn test_extreme_values_stay_bounded() {
        let mut state = AppState::from_config(&Config::default());
        state.camera.fov = 1e300;
        state.cubes[0].rotation_mut().x = -1e300;
        state.cubes[0].rotation_mut().y = f64::NAN;
        let lines = overlay_lines(&state);
        assert_eq!(lines[0], format!("FOV: {}", i32::MAX));
        assert!(lines.iter().all(|line| line.chars().count() <= MAX_LINE_WIDTH));
        assert!(lines[5].starts_with(&format!("  - r: {} 0", i32::MIN)));
    }
}
