//! Spin state machine.
//!
//! The wheel is driven entirely by [`Wheel::advance`], which runs whole
//! fixed-size ticks out of the time it is given. A spin can only start from
//! [`Phase::Idle`], runs to completion once started, and leaves the wheel in
//! [`Phase::PresentingOutcome`] until the result is acknowledged.

use std::ops::Range;

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::SpinConfig;
use crate::error::WheelError;
use crate::mapper::{ease_out, select_index};
use crate::registry::{BatchAdd, Registry};
use crate::view::{WheelFrame, WheelView};

/// Coarse state, for enabling and disabling controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Spinning,
    PresentingOutcome,
}

/// Answer to [`Wheel::request_spin`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinRequest {
    Started,
    /// A spin or a presentation is already in progress
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Eliminated {
        name: String,
    },
    Winner {
        winner: String,
        eliminated: Option<String>,
    },
}

impl Outcome {
    pub fn is_winner(&self) -> bool {
        matches!(self, Outcome::Winner { .. })
    }
}

/// Bookkeeping for the spin in flight
#[derive(Debug, Clone, PartialEq)]
pub struct SpinSession {
    pub start_rotation: f64,
    /// Step taken on the first tick (degrees); decays to zero
    pub initial_step_degrees: f64,
    pub total_duration_ms: f64,
    pub elapsed_ms: f64,
}

impl SpinSession {
    /// Fraction of the spin already run, in `[0, 1]`
    pub fn progress(&self) -> f64 {
        if self.total_duration_ms <= 0.0 {
            return 1.0;
        }
        (self.elapsed_ms / self.total_duration_ms).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone)]
enum State {
    Idle,
    Spinning(SpinSession),
    PresentingOutcome(Outcome),
}

pub struct Wheel<V> {
    config: SpinConfig,
    registry: Registry,
    rotation: f64,
    state: State,
    // Time handed to advance() that has not made a whole tick yet
    pending_ms: f64,
    rng: StdRng,
    view: V,
}

impl<V: WheelView> Wheel<V> {
    pub fn new(config: SpinConfig, view: V) -> Self {
        Self::with_rng(config, view, StdRng::from_entropy())
    }

    /// Wheel whose spins are reproducible for a given seed
    pub fn seeded(config: SpinConfig, view: V, seed: u64) -> Self {
        Self::with_rng(config, view, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(config: SpinConfig, view: V, rng: StdRng) -> Self {
        assert!(config.tick_ms > 0.0, "tick_ms must be positive");
        let mut wheel = Self {
            config,
            registry: Registry::new(),
            rotation: 0.0,
            state: State::Idle,
            pending_ms: 0.0,
            rng,
            view,
        };
        wheel.render();
        wheel
    }

    pub fn phase(&self) -> Phase {
        match self.state {
            State::Idle => Phase::Idle,
            State::Spinning(_) => Phase::Spinning,
            State::PresentingOutcome(_) => Phase::PresentingOutcome,
        }
    }

    pub fn config(&self) -> &SpinConfig {
        &self.config
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn names(&self) -> &[String] {
        self.registry.names()
    }

    pub fn snapshot(&self) -> Vec<String> {
        self.registry.snapshot()
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn session(&self) -> Option<&SpinSession> {
        match &self.state {
            State::Spinning(session) => Some(session),
            _ => None,
        }
    }

    /// Result awaiting acknowledgement
    pub fn outcome(&self) -> Option<&Outcome> {
        match &self.state {
            State::PresentingOutcome(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Name currently under the pointer
    pub fn under_pointer(&self) -> Option<&str> {
        if self.registry.is_empty() {
            return None;
        }
        let index = select_index(self.rotation, self.registry.len());
        self.registry.names().get(index).map(String::as_str)
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn add_one(&mut self, raw: &str) -> Result<(), WheelError> {
        self.ensure_idle()?;
        match self.registry.add_one(raw) {
            Ok(name) => debug!("added {name:?}"),
            Err(err) => {
                warn!("rejected {raw:?}: {err}");
                return Err(err);
            }
        }
        self.render();
        Ok(())
    }

    /// Add a comma separated batch. Renders once for the whole batch.
    pub fn add_many(&mut self, raw: &str) -> Result<BatchAdd, WheelError> {
        self.ensure_idle()?;
        let batch = self.registry.add_many(raw);
        if !batch.skipped.is_empty() {
            warn!("skipped {} name(s): {:?}", batch.skipped.len(), batch.skipped);
        }
        debug!("added {} name(s)", batch.added.len());
        self.render();
        Ok(batch)
    }

    /// Empty the wheel to start a new round
    pub fn clear(&mut self) -> Result<(), WheelError> {
        self.ensure_idle()?;
        self.registry.clear();
        info!("wheel cleared");
        self.render();
        Ok(())
    }

    pub fn request_spin(&mut self) -> Result<SpinRequest, WheelError> {
        if !matches!(self.state, State::Idle) {
            debug!("spin requested while {:?}, ignoring", self.phase());
            return Ok(SpinRequest::Ignored);
        }

        let required = self.config.min_participants.max(1);
        let present = self.registry.len();
        if present < required {
            warn!("spin rejected: {present} of {required} names");
            return Err(WheelError::InsufficientParticipants { required, present });
        }

        let session = SpinSession {
            start_rotation: self.rotation,
            initial_step_degrees: sample(&mut self.rng, &self.config.step_degrees),
            total_duration_ms: sample(&mut self.rng, &self.config.duration_ms),
            elapsed_ms: 0.0,
        };
        debug!(
            "spin started: step {:.2} deg, {:.0} ms, {} names",
            session.initial_step_degrees, session.total_duration_ms, present
        );
        self.pending_ms = 0.0;
        self.state = State::Spinning(session);
        Ok(SpinRequest::Started)
    }

    /// Feed elapsed time into the spin. Does nothing unless spinning.
    pub fn advance(&mut self, delta_ms: f64) {
        if !matches!(self.state, State::Spinning(_)) {
            self.pending_ms = 0.0;
            return;
        }
        if delta_ms.is_finite() && delta_ms > 0.0 {
            self.pending_ms += delta_ms;
        }
        while self.pending_ms >= self.config.tick_ms {
            self.pending_ms -= self.config.tick_ms;
            if self.tick() {
                // Leftover time is not carried past the end of a spin
                self.pending_ms = 0.0;
                break;
            }
        }
    }

    /// Dismiss the presented outcome. Returns it, or `None` when nothing was
    /// being presented.
    pub fn acknowledge(&mut self) -> Option<Outcome> {
        match std::mem::replace(&mut self.state, State::Idle) {
            State::PresentingOutcome(outcome) => {
                debug!("outcome acknowledged");
                Some(outcome)
            }
            other => {
                self.state = other;
                None
            }
        }
    }

    fn ensure_idle(&self) -> Result<(), WheelError> {
        match self.state {
            State::Idle => Ok(()),
            _ => Err(WheelError::SpinInProgress),
        }
    }

    /// One fixed step. Returns true once the spin has finished.
    fn tick(&mut self) -> bool {
        let tick_ms = self.config.tick_ms;
        let (elapsed, total, step) = match &mut self.state {
            State::Spinning(session) => {
                session.elapsed_ms += tick_ms;
                (
                    session.elapsed_ms,
                    session.total_duration_ms,
                    session.initial_step_degrees,
                )
            }
            _ => return true,
        };

        if elapsed >= total {
            self.finish_spin();
            return true;
        }

        let remaining = step - ease_out(elapsed, 0.0, step, total);
        self.rotation += remaining.to_radians();
        self.render();
        false
    }

    fn finish_spin(&mut self) {
        let index = select_index(self.rotation, self.registry.len());
        let eliminated = match self.registry.remove_at(index) {
            Ok(name) => name,
            Err(err) => panic!("selection mapper broke its contract: {err}"),
        };
        self.render();

        let outcome = if self.registry.len() > 1 {
            info!("{eliminated} eliminated, {} left", self.registry.len());
            Outcome::Eliminated { name: eliminated }
        } else {
            match self.registry.names().first() {
                Some(winner) => Outcome::Winner {
                    winner: winner.clone(),
                    eliminated: Some(eliminated),
                },
                // Last name drawn by the spin itself
                None => Outcome::Winner {
                    winner: eliminated,
                    eliminated: None,
                },
            }
        };

        match &outcome {
            Outcome::Eliminated { name } => self.view.present_eliminated(name),
            Outcome::Winner { winner, eliminated } => {
                info!("{winner} wins");
                self.view.present_winner(winner, eliminated.as_deref());
            }
        }
        self.state = State::PresentingOutcome(outcome);
    }

    fn render(&mut self) {
        let frame = WheelFrame::new(self.registry.names(), self.rotation, self.config.palette_len);
        self.view.render(&frame);
    }
}

fn sample(rng: &mut StdRng, range: &Range<f64>) -> f64 {
    if range.is_empty() {
        range.start
    } else {
        rng.gen_range(range.clone())
    }
}
