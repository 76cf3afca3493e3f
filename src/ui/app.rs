//! Main TUI application state and logic

use crate::config::{random_values, RunConfig};
use crate::errors::VizResult;
use crate::playback::{Direction as PlayDirection, PlaybackEngine, MAX_SPEED, MIN_SPEED};
use crate::registry::{AlgorithmInput, Registry};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Longest the loop waits for input while nothing is scheduled
const IDLE_POLL: Duration = Duration::from_millis(50);

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    Visual,
    Narration,
}

impl FocusedPane {
    /// Move focus to the next pane (source -> visual -> narration)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Visual,
            FocusedPane::Visual => FocusedPane::Narration,
            FocusedPane::Narration => FocusedPane::Source,
        }
    }

    /// Move focus to the previous pane
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Narration,
            FocusedPane::Visual => FocusedPane::Source,
            FocusedPane::Narration => FocusedPane::Visual,
        }
    }
}

/// The main application state
pub struct App {
    pub registry: Registry,

    /// Index into `registry.all()` of the selected algorithm
    pub selected: usize,

    /// Input for sorting and searching algorithms
    pub input: AlgorithmInput,

    pub engine: PlaybackEngine,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    pub source_scroll: super::panes::SourceScrollState,
    pub narration_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create the app and load the configured algorithm
    pub fn new(registry: Registry, config: RunConfig) -> VizResult<Self> {
        let id = registry.lookup(&config.algorithm)?.id;
        let selected = registry
            .all()
            .iter()
            .position(|d| d.id == id)
            .unwrap_or_default();

        let mut engine = PlaybackEngine::new();
        engine.set_speed(config.speed)?;

        let mut app = App {
            registry,
            selected,
            input: config.input,
            engine,
            focused_pane: FocusedPane::Source,
            source_scroll: Default::default(),
            narration_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or_else(Instant::now),
        };
        app.reload();
        Ok(app)
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if self.engine.tick() && !self.engine.is_playing() {
                self.status_message = "Playback complete".to_string();
            }

            // Wake up in time for the next scheduled advance
            let timeout = self
                .engine
                .time_until_due()
                .map_or(IDLE_POLL, |due| due.min(IDLE_POLL));
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Regenerate the selected algorithm's steps and rewind
    fn reload(&mut self) {
        let descriptor = &self.registry.all()[self.selected];
        let steps = descriptor.generate(&self.input);
        log::debug!("loaded {} ({} steps)", descriptor.id, steps.len());
        self.status_message = format!("{} loaded", descriptor.name);
        self.engine.load(steps);
        self.source_scroll = Default::default();
        self.narration_scroll = 0;
    }

    fn select(&mut self, forward: bool) {
        let n = self.registry.len();
        self.selected = if forward {
            (self.selected + 1) % n
        } else {
            (self.selected + n - 1) % n
        };
        self.reload();
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        // Left column: listing | right column: visual (top) and narration (bottom)
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(main_chunks[0]);

        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(columns[1]);

        let descriptor = &self.registry.all()[self.selected];
        let step = self.engine.current_step();

        super::panes::render_source_pane(
            frame,
            columns[0],
            descriptor.name,
            descriptor.code,
            step.and_then(|s| s.code_line()),
            self.focused_pane == FocusedPane::Source,
            &mut self.source_scroll,
        );

        super::panes::render_visual_pane(
            frame,
            right_rows[0],
            step,
            self.focused_pane == FocusedPane::Visual,
        );

        super::panes::render_narration_pane(
            frame,
            right_rows[1],
            Some(descriptor),
            step,
            self.focused_pane == FocusedPane::Narration,
            &mut self.narration_scroll,
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &super::panes::StatusRenderData {
                message: &self.status_message,
                algorithm: descriptor.id,
                current_step: self.engine.current_index(),
                total_steps: self.engine.len(),
                speed: self.engine.speed(),
                state: self.engine.state(),
            },
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Left => {
                self.status_message = if self.engine.step(PlayDirection::Backward) {
                    "Stepped backward".to_string()
                } else {
                    "Already at the first step".to_string()
                };
            }
            KeyCode::Right => {
                self.status_message = if self.engine.step(PlayDirection::Forward) {
                    "Stepped forward".to_string()
                } else {
                    "Already at the last step".to_string()
                };
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Source => {
                    // Scrolling up makes the current line move down visually
                    if let Some(row) = self.source_scroll.target_line_row {
                        self.source_scroll.target_line_row = Some(row.saturating_add(1));
                    }
                }
                FocusedPane::Narration => {
                    self.narration_scroll = self.narration_scroll.saturating_sub(1);
                }
                FocusedPane::Visual => {}
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Source => {
                    if let Some(row) = self.source_scroll.target_line_row {
                        self.source_scroll.target_line_row = Some(row.saturating_sub(1));
                    }
                }
                FocusedPane::Narration => {
                    self.narration_scroll = self.narration_scroll.saturating_add(1);
                }
                FocusedPane::Visual => {}
            },
            KeyCode::Char(' ') => {
                // Toggle auto-play (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.status_message = if self.engine.toggle() {
                        "Playing...".to_string()
                    } else if self.engine.is_at_end() {
                        "At the last step".to_string()
                    } else {
                        "Paused".to_string()
                    };
                }
            }
            KeyCode::Enter => {
                self.engine.go_to_end();
                self.status_message = "Jumped to end".to_string();
            }
            KeyCode::Backspace => {
                self.engine.go_to_start();
                self.status_message = "Jumped to start".to_string();
            }
            KeyCode::Char('+') | KeyCode::Char('=') => self.change_speed(1),
            KeyCode::Char('-') => self.change_speed(-1),
            KeyCode::Char(']') => self.select(true),
            KeyCode::Char('[') => self.select(false),
            KeyCode::Char('r') => self.randomize(),
            _ => {}
        }
    }

    fn change_speed(&mut self, delta: i8) {
        let speed = self
            .engine
            .speed()
            .saturating_add_signed(delta)
            .clamp(MIN_SPEED, MAX_SPEED);
        // Clamped into range, so this cannot fail
        if self.engine.set_speed(speed).is_ok() {
            self.status_message = format!("Speed {speed}");
        }
    }

    /// New random input of the same length for algorithms that take input
    fn randomize(&mut self) {
        if !self.registry.all()[self.selected].kind.takes_input() {
            self.status_message = "This walkthrough uses fixed data".to_string();
            return;
        }
        let len = self.input.values.len().max(1);
        match random_values(len, &mut rand::thread_rng()) {
            Ok(values) => {
                self.input.values = values;
                self.reload();
            }
            Err(e) => self.status_message = e.to_string(),
        }
    }
}
