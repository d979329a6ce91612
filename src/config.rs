//! Spin timing and rule configuration

use std::ops::Range;

/// Number of distinct slice colors before the palette repeats
pub const PALETTE_LEN: usize = 8;

/// Timing and rule settings for a wheel
#[derive(Debug, Clone, PartialEq)]
pub struct SpinConfig {
    /// Fixed simulation step (ms)
    pub tick_ms: f64,

    /// Range the initial per-tick step is drawn from (degrees)
    pub step_degrees: Range<f64>,

    /// Range the total spin duration is drawn from (ms)
    pub duration_ms: Range<f64>,

    /// Fewest names the wheel accepts a spin with
    pub min_participants: usize,

    /// Slice colors cycle through this many entries
    pub palette_len: usize,
}

impl SpinConfig {
    /// Full-length spins
    pub fn normal() -> Self {
        Self {
            tick_ms: 30.0,
            step_degrees: 10.0..20.0,
            duration_ms: 4000.0..7000.0,
            min_participants: 2,
            palette_len: PALETTE_LEN,
        }
    }

    /// Shorter spins for demos and crowded rooms
    pub fn quick() -> Self {
        Self {
            duration_ms: 1500.0..2500.0,
            ..Self::normal()
        }
    }

    pub fn with_min_participants(mut self, min: usize) -> Self {
        self.min_participants = min.max(1);
        self
    }
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self::normal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let normal = SpinConfig::normal();
        let quick = SpinConfig::quick();

        assert_eq!(normal, SpinConfig::default());
        assert!(quick.duration_ms.end < normal.duration_ms.start);
        assert_eq!(quick.step_degrees, normal.step_degrees);
        assert_eq!(quick.tick_ms, normal.tick_ms);
    }

    #[test]
    fn test_min_participants_floor() {
        assert_eq!(SpinConfig::normal().with_min_participants(0).min_participants, 1);
        assert_eq!(SpinConfig::normal().with_min_participants(3).min_participants, 3);
    }
}
