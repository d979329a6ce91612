use std::time::{Duration, Instant};

use rustwheel::{OutcomeSink, RenderSink, WheelFrame};

/// Number of sparkle bursts behind the winner banner
pub const CELEBRATION_BURSTS: u32 = 6;
pub const BURST_INTERVAL: Duration = Duration::from_millis(400);

/// Result overlay waiting to be dismissed
pub enum Overlay {
    Eliminated {
        name: String,
    },
    Winner {
        winner: String,
        eliminated: Option<String>,
        since: Instant,
    },
}

impl Overlay {
    /// Bursts fired so far, `None` once the celebration is over
    pub fn burst(&self) -> Option<u32> {
        match self {
            Overlay::Winner { since, .. } => {
                let n = (since.elapsed().as_millis() / BURST_INTERVAL.as_millis()) as u32;
                (n < CELEBRATION_BURSTS).then_some(n)
            }
            Overlay::Eliminated { .. } => None,
        }
    }
}

/// Terminal-side copy of what the wheel last told us to draw
#[derive(Default)]
pub struct Screen {
    pub slices: Vec<(String, usize)>,
    pub rotation: f64,
    pub pointer_angle: f64,
    pub overlay: Option<Overlay>,
}

impl Screen {
    pub fn dismiss(&mut self) {
        self.overlay = None;
    }
}

impl RenderSink for Screen {
    fn render(&mut self, frame: &WheelFrame<'_>) {
        self.slices.clear();
        self.slices
            .extend(frame.slices.iter().map(|s| (s.name.to_string(), s.color_index)));
        self.rotation = frame.rotation;
        self.pointer_angle = frame.pointer.angle;
    }
}

impl OutcomeSink for Screen {
    fn present_eliminated(&mut self, name: &str) {
        self.overlay = Some(Overlay::Eliminated {
            name: name.to_string(),
        });
    }

    fn present_winner(&mut self, winner: &str, eliminated: Option<&str>) {
        self.overlay = Some(Overlay::Winner {
            winner: winner.to_string(),
            eliminated: eliminated.map(str::to_string),
            since: Instant::now(),
        });
    }
}
