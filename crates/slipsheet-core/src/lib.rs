//! Core logic for Slipsheet: a draggable bottom-sheet panel.
//!
//! This crate owns numbers and decisions only. It converts a continuous
//! vertical drag into a live, clamped/elastic sheet frame and a
//! velocity-aware settle decision on release. Rendering the frame,
//! recognising gestures, and ticking animations are the host's job
//! (see `slipsheet-controller`).

pub mod color;
pub mod config;
pub mod engine;
pub mod frame;
pub mod velocity;

pub use color::{Color, OverlayStyle};
pub use config::{Config, ConfigDelta, ConfigError};
pub use engine::{DragHeightEngine, SettleDecision};
pub use frame::SheetFrame;
pub use velocity::VelocityTracker;
