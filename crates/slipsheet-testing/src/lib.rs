//! Test hosts and gesture scripting for Slipsheet.
//!
//! `RecordingHost` captures every command the controller sends to its
//! layout collaborator so tests can assert on the exact stream;
//! `NullHost` swallows them for benchmarks. The `script` helpers drive a
//! controller through whole gestures with synthetic timestamps.

use std::cell::RefCell;
use std::rc::Rc;

use slipsheet_controller::{LayoutHost, PanelController, PointerEvent, SurfaceId};
use slipsheet_core::{OverlayStyle, SheetFrame};
use web_time::{Duration, Instant};

/// One command the controller issued to its layout host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostCommand {
    Frame(SheetFrame),
    Overlay(OverlayStyle),
    CornerRadius(f32),
    Teardown,
}

/// A [`LayoutHost`] that appends every command to a shared log.
///
/// Clone it before handing it to the controller; both clones see the same
/// log (single-threaded `Rc<RefCell>` sharing, so a test keeps a reader
/// while the controller owns its copy).
#[derive(Clone, Default)]
pub struct RecordingHost {
    commands: Rc<RefCell<Vec<HostCommand>>>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> Vec<HostCommand> {
        self.commands.borrow().clone()
    }

    pub fn command_count(&self) -> usize {
        self.commands.borrow().len()
    }

    pub fn clear(&self) {
        self.commands.borrow_mut().clear();
    }

    /// All frames pushed so far, in order.
    pub fn frames(&self) -> Vec<SheetFrame> {
        self.commands
            .borrow()
            .iter()
            .filter_map(|c| match c {
                HostCommand::Frame(frame) => Some(*frame),
                _ => None,
            })
            .collect()
    }

    pub fn last_frame(&self) -> Option<SheetFrame> {
        self.frames().last().copied()
    }

    /// The most recently applied overlay alpha.
    pub fn overlay_alpha(&self) -> Option<f32> {
        self.commands
            .borrow()
            .iter()
            .rev()
            .find_map(|c| match c {
                HostCommand::Overlay(style) => Some(style.alpha),
                _ => None,
            })
    }

    pub fn teardown_count(&self) -> usize {
        self.commands
            .borrow()
            .iter()
            .filter(|c| matches!(c, HostCommand::Teardown))
            .count()
    }

    pub fn torn_down(&self) -> bool {
        self.teardown_count() > 0
    }
}

impl LayoutHost for RecordingHost {
    fn set_sheet_frame(&mut self, frame: SheetFrame) {
        self.commands.borrow_mut().push(HostCommand::Frame(frame));
    }

    fn set_overlay(&mut self, style: OverlayStyle) {
        self.commands.borrow_mut().push(HostCommand::Overlay(style));
    }

    fn set_corner_radius(&mut self, radius: f32) {
        self.commands
            .borrow_mut()
            .push(HostCommand::CornerRadius(radius));
    }

    fn teardown(&mut self) {
        self.commands.borrow_mut().push(HostCommand::Teardown);
    }
}

/// A [`LayoutHost`] that does nothing. For benchmarks.
#[derive(Default, Clone, Copy)]
pub struct NullHost;

impl LayoutHost for NullHost {
    fn set_sheet_frame(&mut self, _frame: SheetFrame) {}
    fn set_overlay(&mut self, _style: OverlayStyle) {}
    fn set_corner_radius(&mut self, _radius: f32) {}
    fn teardown(&mut self) {}
}

/// Gesture scripting: whole drags in one call, with synthetic 10 ms
/// pointer cadence.
pub mod script {
    use super::*;

    /// Interval between scripted pointer samples.
    pub const SAMPLE_INTERVAL_MS: i64 = 10;

    /// Drives a full drag: begin, evenly-timed moves through each
    /// translation, then release with `release_velocity`.
    pub fn drag<H: LayoutHost>(
        controller: &mut PanelController<H>,
        surface: SurfaceId,
        translations: &[f32],
        release_velocity: Option<f32>,
    ) {
        controller.handle_pointer(surface, PointerEvent::Began);
        for (i, &translation_y) in translations.iter().enumerate() {
            controller.handle_pointer(
                surface,
                PointerEvent::Moved {
                    translation_y,
                    velocity_y: None,
                    time_ms: (i as i64 + 1) * SAMPLE_INTERVAL_MS,
                },
            );
        }
        controller.handle_pointer(surface, PointerEvent::Ended {
            velocity_y: release_velocity,
        });
    }

    /// Ticks the controller every `step_ms` until `total_ms` has elapsed
    /// from `base`, inclusive of the final instant.
    pub fn run_animations<H: LayoutHost>(
        controller: &mut PanelController<H>,
        base: Instant,
        total_ms: u64,
        step_ms: u64,
    ) {
        let mut elapsed = 0;
        while elapsed < total_ms {
            controller.tick(base + Duration::from_millis(elapsed));
            elapsed += step_ms;
        }
        controller.tick(base + Duration::from_millis(total_ms));
    }
}
