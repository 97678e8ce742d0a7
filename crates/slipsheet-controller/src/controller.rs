//! Lifecycle and event routing for one sheet panel.

use log::debug;
use web_time::Instant;

use slipsheet_animation::{Animatable, AnimationSpec, Tick};
use slipsheet_core::{
    Config, ConfigDelta, ConfigError, DragHeightEngine, OverlayStyle, SettleDecision, SheetFrame,
    VelocityTracker,
};

use crate::host::LayoutHost;
use crate::pointer::PointerEvent;
use crate::registry::{DragTargetRegistry, SurfaceId};

/// Controller lifecycle state. Distinct from the engine's Idle/Dragging:
/// `Hidden` is a terminal state that makes repeated `dismiss` calls
/// provable no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    /// Not on screen. `present` is the only way out.
    Hidden,
    /// On screen and interactive.
    Presented,
    /// Exit animations running; teardown happens when the overlay fade
    /// (the gating animation) finishes.
    Dismissing,
}

/// Owns the engine, the animation tracks, and the drag-target registry;
/// mediates between the gesture/layout collaborators and the height state
/// machine.
pub struct PanelController<H: LayoutHost> {
    config: Config,
    engine: DragHeightEngine,
    registry: DragTargetRegistry,
    tracker: VelocityTracker,
    /// Animation track for the sheet box frame.
    box_anim: Animatable<SheetFrame>,
    /// Animation track for the overlay appearance. Its completion gates
    /// teardown during dismissal.
    overlay_anim: Animatable<OverlayStyle>,
    /// Last frame pushed to the host, drag-driven or animated.
    live_frame: SheetFrame,
    state: PanelState,
    host: H,
}

impl<H: LayoutHost> PanelController<H> {
    /// Validates the configuration, applies the initial (hidden) layout,
    /// and wires the configured drag targets.
    pub fn new(config: Config, mut host: H) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut registry = DragTargetRegistry::new();
        if config.content_dragable {
            registry.add(SurfaceId::Content);
        }
        if config.overlay_background_dragable {
            registry.add(SurfaceId::Overlay);
        }

        let hidden = SheetFrame::hidden(config.default_height, &config);
        host.set_corner_radius(config.corner_radius);
        host.set_overlay(OverlayStyle::transparent(config.background_overlay_color));
        host.set_sheet_frame(hidden);

        Ok(Self {
            engine: DragHeightEngine::new(config.clone()),
            registry,
            tracker: VelocityTracker::new(),
            box_anim: Animatable::new(hidden),
            overlay_anim: Animatable::new(OverlayStyle::transparent(
                config.background_overlay_color,
            )),
            live_frame: hidden,
            state: PanelState::Hidden,
            host,
            config,
        })
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn is_drag_target(&self, surface: SurfaceId) -> bool {
        self.registry.contains(surface)
    }

    /// Slides the sheet in to its default height while the overlay fades
    /// up. No-op unless currently hidden.
    pub fn present(&mut self) {
        if self.state != PanelState::Hidden {
            debug!("present while {:?} ignored", self.state);
            return;
        }
        debug!("presenting at height {}", self.config.default_height);

        self.engine.settle(self.config.default_height);

        let hidden = SheetFrame::hidden(self.config.default_height, &self.config);
        self.box_anim.snap_to(hidden);
        self.box_anim.animate_to(
            SheetFrame::map(self.config.default_height, &self.config),
            AnimationSpec::sheet_slide(),
        );

        self.overlay_anim.snap_to(OverlayStyle::transparent(
            self.config.background_overlay_color,
        ));
        self.overlay_anim
            .animate_to(self.config.overlay_style(), AnimationSpec::overlay_fade());

        self.state = PanelState::Presented;
    }

    /// Starts the exit sequence: overlay fades out (gating teardown), box
    /// slides off-screen. Idempotent: a no-op unless currently presented.
    pub fn dismiss(&mut self) {
        if self.state != PanelState::Presented {
            debug!("dismiss while {:?} ignored", self.state);
            return;
        }
        debug!("dismissing");

        if self.engine.is_dragging() {
            self.engine.cancel_drag();
        }

        self.box_anim.snap_to(self.live_frame);
        self.box_anim.animate_to(
            SheetFrame::hidden(self.engine.resting_height(), &self.config),
            AnimationSpec::sheet_slide(),
        );

        self.overlay_anim.animate_to(
            OverlayStyle::transparent(self.config.background_overlay_color),
            AnimationSpec::overlay_fade(),
        );

        self.state = PanelState::Dismissing;
    }

    /// Replaces the configuration, applying only the changed facets:
    /// overlay appearance animates, corner radius applies immediately,
    /// dragable toggles rewire the registry. Height thresholds take
    /// effect on the next drag/settle cycle.
    pub fn reconfigure(&mut self, new_config: Config) -> Result<(), ConfigError> {
        new_config.validate()?;
        let delta = ConfigDelta::diff(&self.config, &new_config);

        if delta.overlay_changed {
            match self.state {
                PanelState::Presented => self
                    .overlay_anim
                    .animate_to(new_config.overlay_style(), AnimationSpec::overlay_fade()),
                PanelState::Hidden => self.overlay_anim.snap_to(OverlayStyle::transparent(
                    new_config.background_overlay_color,
                )),
                // Mid-dismissal the fade to transparent stays in charge.
                PanelState::Dismissing => {}
            }
        }
        if delta.corner_radius_changed {
            self.host.set_corner_radius(new_config.corner_radius);
        }
        if delta.content_dragable_toggled {
            if new_config.content_dragable {
                self.registry.add(SurfaceId::Content);
            } else {
                self.registry.remove(SurfaceId::Content);
            }
        }
        if delta.overlay_dragable_toggled {
            if new_config.overlay_background_dragable {
                self.registry.add(SurfaceId::Overlay);
            } else {
                self.registry.remove(SurfaceId::Overlay);
            }
        }

        self.engine.set_config(new_config.clone());
        self.config = new_config;
        Ok(())
    }

    /// Wires an extra surface into the shared height engine.
    pub fn add_drag_target(&mut self, surface: SurfaceId) {
        self.registry.add(surface);
    }

    /// Unwires a surface. Unknown surfaces are a no-op.
    pub fn remove_drag_target(&mut self, surface: SurfaceId) {
        self.registry.remove(surface);
    }

    /// Routes one pointer phase signal observed on `surface`. Events from
    /// unregistered surfaces, or while the sheet is not presented, are
    /// ignored.
    pub fn handle_pointer(&mut self, surface: SurfaceId, event: PointerEvent) {
        if self.state != PanelState::Presented {
            debug!("pointer event while {:?} ignored", self.state);
            return;
        }
        if !self.registry.contains(surface) {
            debug!("pointer event on unregistered surface {surface:?} ignored");
            return;
        }

        match event {
            PointerEvent::Began => {
                // A re-drag mid-settle takes over from the animation;
                // cancelling here keeps a single value stream flowing to
                // the host.
                self.box_anim.cancel();
                self.tracker.reset();
                self.engine.begin_drag();
            }
            PointerEvent::Moved {
                translation_y,
                velocity_y,
                time_ms,
            } => {
                self.tracker.add_sample(time_ms, translation_y);
                let frame = self.engine.update_drag(translation_y, velocity_y);
                self.push_frame(frame);
            }
            PointerEvent::Ended { velocity_y } => {
                let velocity = velocity_y.or_else(|| {
                    let estimate = self.tracker.velocity();
                    (estimate != 0.0).then_some(estimate)
                });
                match self.engine.end_drag(velocity) {
                    Some(SettleDecision::Dismiss) => self.dismiss(),
                    Some(SettleDecision::SettleAt(height)) => self.settle_at(height),
                    None => {}
                }
            }
            PointerEvent::Cancelled => {
                // Snap straight back to the pre-drag frame, no animation.
                let frame = self.engine.cancel_drag();
                self.push_frame(frame);
                self.box_anim.snap_to(frame);
                self.tracker.reset();
            }
        }
    }

    /// A tap (not drag) on the overlay surface.
    pub fn handle_overlay_tap(&mut self) {
        if !self.config.overlay_background_tap_dismiss {
            return;
        }
        self.dismiss();
    }

    /// Advances animations to `now` and forwards their values to the
    /// host. Performs teardown when the gating overlay fade finishes.
    pub fn tick(&mut self, now: Instant) {
        match self.box_anim.tick(now) {
            Tick::Running(frame) | Tick::Finished(frame) => self.push_frame(frame),
            Tick::Idle => {}
        }

        match self.overlay_anim.tick(now) {
            Tick::Running(style) => self.host.set_overlay(style),
            Tick::Finished(style) => {
                self.host.set_overlay(style);
                if self.state == PanelState::Dismissing {
                    debug!("overlay fade finished, tearing down");
                    self.host.teardown();
                    self.state = PanelState::Hidden;
                }
            }
            Tick::Idle => {}
        }
    }

    /// Whether `tick` needs to keep being called.
    pub fn is_animating(&self) -> bool {
        self.box_anim.is_running() || self.overlay_anim.is_running()
    }

    /// Earliest completion time among the running animations, once known.
    /// Coarse scheduling only; a running tween still wants a tick per
    /// frame for its intermediate values.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.box_anim.next_deadline(), self.overlay_anim.next_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    fn settle_at(&mut self, height: f32) {
        self.engine.settle(height);
        self.box_anim.snap_to(self.live_frame);
        self.box_anim.animate_to(
            SheetFrame::map(height, &self.config),
            AnimationSpec::settle(),
        );
    }

    fn push_frame(&mut self, frame: SheetFrame) {
        self.live_frame = frame;
        self.host.set_sheet_frame(frame);
    }
}
