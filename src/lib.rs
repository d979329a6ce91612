//! Headless engine for the elimination wheel.
//!
//! A [`Wheel`] owns the participant [`Registry`], the accumulated rotation
//! and the spin state machine. Presentation is delegated to a
//! [`WheelView`], so the same engine drives the terminal front-end and the
//! tests.

pub mod config;
pub mod error;
pub mod mapper;
pub mod registry;
pub mod view;
pub mod wheel;

pub use config::SpinConfig;
pub use error::WheelError;
pub use registry::{BatchAdd, Registry};
pub use view::{NullView, OutcomeSink, Pointer, RenderSink, Slice, WheelFrame, WheelView};
pub use wheel::{Outcome, Phase, SpinRequest, SpinSession, Wheel};
