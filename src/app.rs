use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::{error, info};

use rustwheel::{Outcome, Phase, SpinConfig, SpinRequest, Wheel};

use crate::export::{self, ExportNotice};
use crate::screen::Screen;

const MAX_NAME_LEN: usize = 32;
const MAX_BATCH_LEN: usize = 512;
const STATUS_DURATION: Duration = Duration::from_secs(4);

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum InputMode {
    Browse,
    AddOne,
    AddMany,
}

impl InputMode {
    pub fn title(&self) -> &str {
        match self {
            InputMode::Browse => " Names ",
            InputMode::AddOne => " Add a name ",
            InputMode::AddMany => " Add names (comma separated) ",
        }
    }

    fn max_len(&self) -> usize {
        match self {
            InputMode::Browse => 0,
            InputMode::AddOne => MAX_NAME_LEN,
            InputMode::AddMany => MAX_BATCH_LEN,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum StatusKind {
    Info,
    Warning,
}

pub struct Status {
    pub text: String,
    pub kind: StatusKind,
    at: Instant,
}

impl Status {
    fn new(text: impl Into<String>, kind: StatusKind) -> Self {
        Self {
            text: text.into(),
            kind,
            at: Instant::now(),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.at.elapsed() < STATUS_DURATION
    }
}

pub struct App {
    pub should_quit: bool,
    pub wheel: Wheel<Screen>,
    pub mode: InputMode,
    pub input: String,
    pub status: Option<Status>,
    pub notice: Option<ExportNotice>,
    export_path: PathBuf,
}

impl App {
    pub fn new(config: SpinConfig, seed: Option<u64>, export_path: PathBuf) -> Self {
        let wheel = match seed {
            Some(seed) => Wheel::seeded(config, Screen::default(), seed),
            None => Wheel::new(config, Screen::default()),
        };
        Self {
            should_quit: false,
            wheel,
            mode: InputMode::Browse,
            input: String::new(),
            status: None,
            notice: None,
            export_path,
        }
    }

    pub fn on_tick(&mut self, elapsed: Duration) {
        self.wheel.advance(elapsed.as_secs_f64() * 1000.0);
        if self.status.as_ref().is_some_and(|s| !s.is_visible()) {
            self.status = None;
        }
        if self.notice.as_ref().is_some_and(|n| !n.is_visible()) {
            self.notice = None;
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        // Ctrl+C always quits
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // The result overlay swallows everything until dismissed
        if self.wheel.phase() == Phase::PresentingOutcome {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.acknowledge();
            }
            return;
        }

        if self.mode != InputMode::Browse {
            self.handle_text_input(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
            KeyCode::Char('a') | KeyCode::Char('A') => self.begin_input(InputMode::AddOne),
            KeyCode::Char('m') | KeyCode::Char('M') => self.begin_input(InputMode::AddMany),
            KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Char('s') | KeyCode::Char('S') => {
                self.spin()
            }
            KeyCode::Char('c') | KeyCode::Char('C') => self.export(),
            KeyCode::Char('r') | KeyCode::Char('R') => self.reset(),
            _ => {}
        }
    }

    pub fn spin(&mut self) {
        match self.wheel.request_spin() {
            Ok(SpinRequest::Started) => self.status = None,
            Ok(SpinRequest::Ignored) => {}
            Err(err) => self.warn(err.to_string()),
        }
    }

    fn acknowledge(&mut self) {
        if let Some(Outcome::Winner { winner, .. }) = self.wheel.acknowledge() {
            self.status = Some(Status::new(
                format!("{winner} won! Press R to start a new round."),
                StatusKind::Info,
            ));
        }
        self.wheel.view_mut().dismiss();
    }

    fn begin_input(&mut self, mode: InputMode) {
        if self.wheel.phase() != Phase::Idle {
            return;
        }
        self.mode = mode;
        self.input.clear();
    }

    fn handle_text_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_input(),
            KeyCode::Esc => {
                self.mode = InputMode::Browse;
                self.input.clear();
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) => {
                if self.input.chars().count() < self.mode.max_len() && !c.is_control() {
                    self.input.push(c);
                }
            }
            _ => {}
        }
    }

    fn submit_input(&mut self) {
        let text = std::mem::take(&mut self.input);
        match self.mode {
            InputMode::Browse => {}
            InputMode::AddOne => match self.wheel.add_one(&text) {
                Ok(()) => {
                    // Stay in the prompt so several names can be typed in a row
                    self.status = None;
                    return;
                }
                Err(err) => {
                    self.input = text;
                    self.warn(err.to_string());
                    return;
                }
            },
            InputMode::AddMany => self.add_batch(&text),
        }
        self.mode = InputMode::Browse;
    }

    /// Add a comma separated list, reporting anything that was skipped
    pub fn add_batch(&mut self, text: &str) {
        if text.trim().is_empty() {
            self.warn("Please enter at least one name.");
            return;
        }
        match self.wheel.add_many(text) {
            Ok(batch) if batch.skipped.is_empty() => {
                self.status = Some(Status::new(
                    format!("Added {} name(s).", batch.added.len()),
                    StatusKind::Info,
                ));
            }
            Ok(batch) => {
                let skipped: Vec<&str> = batch
                    .skipped
                    .iter()
                    .map(|s| if s.is_empty() { "(blank)" } else { s.as_str() })
                    .collect();
                self.warn(format!(
                    "The following name(s) were skipped: {}",
                    skipped.join(", ")
                ));
            }
            Err(err) => self.warn(err.to_string()),
        }
    }

    fn export(&mut self) {
        let names = self.wheel.snapshot();
        match export::export_names(&self.export_path, &names) {
            Ok(_) => {
                info!("exported {} name(s) to {}", names.len(), self.export_path.display());
                self.notice = Some(ExportNotice::new(self.export_path.clone(), names.len()));
            }
            Err(err) => {
                error!("export to {} failed: {err}", self.export_path.display());
                self.warn(format!("Failed to copy: {err}"));
            }
        }
    }

    fn reset(&mut self) {
        match self.wheel.clear() {
            Ok(()) => {
                self.status = Some(Status::new("Wheel cleared.", StatusKind::Info));
            }
            Err(err) => self.warn(err.to_string()),
        }
    }

    fn warn(&mut self, text: impl Into<String>) {
        self.status = Some(Status::new(text, StatusKind::Warning));
    }
}
