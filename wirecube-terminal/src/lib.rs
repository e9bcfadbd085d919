/// Terminal front end: key mapping, main loop and logging setup
use anyhow::Context;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{self},
};
use std::fs::File;
use std::io::{stdout, Stdout};
use std::path::Path;
use std::time::{Duration, Instant};
use wirecube_core::{draw_scene, Action, AppState, Config, FixedTimestep};

pub mod renderer;

pub use renderer::TerminalCanvas;

/// Translate a key event into an application action.
///
/// Only key-down (press and auto-repeat) events act; releases are ignored.
pub fn map_key(key: &KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Tab | KeyCode::Char('m') | KeyCode::Char('M') => Some(Action::CycleMode),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(Action::Increase),
        KeyCode::Char('-') | KeyCode::Char('_') => Some(Action::Decrease),
        _ => None,
    }
}

/// Route log output to `path`; the terminal itself is busy drawing.
pub fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .write_style(env_logger::WriteStyle::Never)
        .try_init()
        .context("Failed to initialize logger")?;
    Ok(())
}

/// Raw mode stays on while the guard lives; dropping it restores the terminal.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> anyhow::Result<Self> {
        terminal::enable_raw_mode().context("Failed to enable raw mode")?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Cleanup
        if let Err(err) = execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show) {
            log::error!("Failed to leave the alternate screen: {}", err);
        }
        if let Err(err) = terminal::disable_raw_mode() {
            log::error!("Failed to disable raw mode: {}", err);
        }
    }
}

/// Main application struct for the terminal wireframe viewer
pub struct TerminalApp {
    state: AppState,
    timestep: FixedTimestep,
    canvas: TerminalCanvas<Stdout>,
    title: String,
    frame_time: Duration,
}

impl TerminalApp {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let state = AppState::from_config(config);
        log::info!("Initialized {} cubes.", state.cubes.len());

        let timestep = FixedTimestep::from_rate(config.tick_rate);
        log::info!("Simulation tick is {:?}.", timestep.tick());

        let (cols, rows) = terminal::size().context("Failed to query terminal size")?;

        Ok(Self {
            state,
            timestep,
            canvas: TerminalCanvas::new(config.width, config.height, cols, rows, stdout()),
            title: config.title.clone(),
            frame_time: Duration::try_from_secs_f64(1.0 / config.frame_rate)
                .context("Invalid frame_rate")?,
        })
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        let _guard = TerminalGuard::enter()?;
        execute!(
            stdout(),
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::SetTitle(&self.title)
        )
        .context("Failed to set up the terminal")?;
        log::info!("Initialized terminal ({}x{} cells).", self.canvas.cols(), self.canvas.rows());

        self.main_loop()
    }

    fn main_loop(&mut self) -> anyhow::Result<()> {
        log::info!("Entering the main loop.");
        let mut last_tick = Instant::now();

        while self.state.is_running() {
            let frame_start = Instant::now();
            self.timestep.accumulate(frame_start - last_tick);
            last_tick = frame_start;

            // Handle input
            self.handle_input()?;

            // Update
            for _ in 0..self.timestep.drain() {
                self.state.step();
            }

            // Render
            draw_scene(&self.state, &mut self.canvas)?;

            // Frame timing
            let elapsed = frame_start.elapsed();
            if elapsed < self.frame_time {
                std::thread::sleep(self.frame_time - elapsed);
            }
        }

        Ok(())
    }

    /// Drain every pending event without blocking
    fn handle_input(&mut self) -> anyhow::Result<()> {
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) => {
                    if let Some(action) = map_key(&key) {
                        self.state.apply(action);
                    }
                }
                Event::Resize(cols, rows) => {
                    log::debug!("Terminal resized to {}x{}", cols, rows);
                    self.canvas.resize(cols, rows);
                }
                _ => {}
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_key_aliases() {
        let press = KeyEventKind::Press;
        assert_eq!(map_key(&key(KeyCode::Char('+'), press)), Some(Action::Increase));
        assert_eq!(map_key(&key(KeyCode::Char('='), press)), Some(Action::Increase));
        assert_eq!(map_key(&key(KeyCode::Char('-'), press)), Some(Action::Decrease));
        assert_eq!(map_key(&key(KeyCode::Char('_'), press)), Some(Action::Decrease));
        assert_eq!(map_key(&key(KeyCode::Tab, press)), Some(Action::CycleMode));
        assert_eq!(map_key(&key(KeyCode::Char('m'), press)), Some(Action::CycleMode));
        assert_eq!(map_key(&key(KeyCode::Char('M'), press)), Some(Action::CycleMode));
        assert_eq!(map_key(&key(KeyCode::Esc, press)), Some(Action::Quit));
        assert_eq!(map_key(&key(KeyCode::Char('Q'), press)), Some(Action::Quit));
        assert_eq!(map_key(&key(KeyCode::Char('x'), press)), None);
    }

    #[test]
    fn test_repeat_acts_release_ignored() {
        assert_eq!(
            map_key(&key(KeyCode::Char('+'), KeyEventKind::Repeat)),
            Some(Action::Increase)
        );
        assert_eq!(map_key(&key(KeyCode::Char('+'), KeyEventKind::Release)), None);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(&event), Some(Action::Quit));
        assert_eq!(map_key(&key(KeyCode::Char('c'), KeyEventKind::Press)), None);
    }

    #[test]
    fn test_key_sequence_drives_state() {
        let mut state = AppState::from_config(&Config::default());
        let presses = [KeyCode::Tab, KeyCode::Char('+'), KeyCode::Char('+'), KeyCode::Char('q')];
        for code in presses {
            if let Some(action) = map_key(&key(code, KeyEventKind::Press)) {
                state.apply(action);
            }
        }
        assert!((state.cubes[0].rotation().x - 0.02).abs() < 1e-12);
        assert!(!state.is_running());
    }
}
