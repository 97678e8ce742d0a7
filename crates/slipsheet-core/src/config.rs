//! Sheet configuration: thresholds, behavior flags, and the facet diff
//! used when a new configuration is assigned at runtime.

use crate::color::Color;

/// Margin kept above a full-height sheet, in logical pixels.
const TOP_MARGIN: f32 = 64.0;

/// Reference screen height used by [`Config::default`].
const DEFAULT_SCREEN_HEIGHT: f32 = 800.0;

/// Tunable thresholds and behavior flags for a sheet.
///
/// Immutable per assignment: the controller takes a whole new `Config` on
/// reconfigure and diffs it against the previous one (see [`ConfigDelta`]).
/// Height thresholds must satisfy
/// `dismissed_height < default_height <= maximum_height`; construction
/// surfaces validate this via [`Config::validate`].
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Dimming overlay color behind the sheet.
    pub background_overlay_color: Color,
    /// Dimming overlay alpha at rest, in `[0, 1]`.
    pub background_overlay_alpha: f32,
    /// Primary resting height. The sheet presents at this height.
    pub default_height: f32,
    /// Releasing a drag below this height dismisses the sheet.
    pub dismissed_height: f32,
    /// Hard ceiling before elastic resistance begins.
    pub maximum_height: f32,
    /// Elastic-overshoot scale beyond `maximum_height`. The visual
    /// overshoot asymptotically approaches this value.
    pub stretchable_height: f32,
    /// Floor below which the sheet box no longer shrinks; the shortfall
    /// pushes its bottom edge off-screen instead.
    pub minimum_content_compress_height: f32,
    /// Corner radius of the sheet box. Visual only, passed through.
    pub corner_radius: f32,
    /// Whether the sheet's content surface is a drag target.
    pub content_dragable: bool,
    /// Whether the dimming overlay is also a drag target.
    pub overlay_background_dragable: bool,
    /// Whether a tap (not drag) on the overlay dismisses the sheet.
    pub overlay_background_tap_dismiss: bool,
}

impl Config {
    /// Defaults for a given screen height: the maximum height leaves a
    /// fixed margin at the top of the screen.
    pub fn new(screen_height: f32) -> Self {
        Self {
            background_overlay_color: Color::DARK_GRAY,
            background_overlay_alpha: 0.6,
            default_height: 300.0,
            dismissed_height: 200.0,
            maximum_height: screen_height - TOP_MARGIN,
            stretchable_height: 10.0,
            minimum_content_compress_height: 300.0,
            corner_radius: 16.0,
            content_dragable: true,
            overlay_background_dragable: false,
            overlay_background_tap_dismiss: true,
        }
    }

    pub fn with_overlay_color(mut self, color: Color) -> Self {
        self.background_overlay_color = color;
        self
    }

    pub fn with_overlay_alpha(mut self, alpha: f32) -> Self {
        self.background_overlay_alpha = alpha;
        self
    }

    pub fn with_default_height(mut self, height: f32) -> Self {
        self.default_height = height;
        self
    }

    pub fn with_dismissed_height(mut self, height: f32) -> Self {
        self.dismissed_height = height;
        self
    }

    pub fn with_maximum_height(mut self, height: f32) -> Self {
        self.maximum_height = height;
        self
    }

    pub fn with_stretchable_height(mut self, height: f32) -> Self {
        self.stretchable_height = height;
        self
    }

    pub fn with_minimum_content_compress_height(mut self, height: f32) -> Self {
        self.minimum_content_compress_height = height;
        self
    }

    pub fn with_corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn with_content_dragable(mut self, dragable: bool) -> Self {
        self.content_dragable = dragable;
        self
    }

    pub fn with_overlay_background_dragable(mut self, dragable: bool) -> Self {
        self.overlay_background_dragable = dragable;
        self
    }

    pub fn with_overlay_background_tap_dismiss(mut self, dismiss: bool) -> Self {
        self.overlay_background_tap_dismiss = dismiss;
        self
    }

    /// Checks the threshold invariants. Called by the controller on
    /// construction and on every reconfigure, failing fast instead of
    /// producing an inconsistent settle decision later.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let heights = [
            self.default_height,
            self.dismissed_height,
            self.maximum_height,
            self.stretchable_height,
            self.minimum_content_compress_height,
            self.corner_radius,
            self.background_overlay_alpha,
        ];
        if heights.iter().any(|v| !v.is_finite()) {
            return Err(ConfigError::NonFinite);
        }
        if self.dismissed_height >= self.default_height {
            return Err(ConfigError::DismissedNotBelowDefault {
                dismissed: self.dismissed_height,
                default: self.default_height,
            });
        }
        if self.default_height > self.maximum_height {
            return Err(ConfigError::DefaultAboveMaximum {
                default: self.default_height,
                maximum: self.maximum_height,
            });
        }
        if self.stretchable_height <= 0.0 {
            return Err(ConfigError::NonPositiveStretch(self.stretchable_height));
        }
        if self.minimum_content_compress_height < 0.0 {
            return Err(ConfigError::NegativeCompressFloor(
                self.minimum_content_compress_height,
            ));
        }
        if !(0.0..=1.0).contains(&self.background_overlay_alpha) {
            return Err(ConfigError::AlphaOutOfRange(self.background_overlay_alpha));
        }
        Ok(())
    }

    /// The resting overlay appearance for this configuration.
    pub fn overlay_style(&self) -> crate::color::OverlayStyle {
        crate::color::OverlayStyle::new(
            self.background_overlay_color,
            self.background_overlay_alpha,
        )
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_SCREEN_HEIGHT)
    }
}

/// Invalid configuration, reported at assignment time.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("dismissed_height ({dismissed}) must be below default_height ({default})")]
    DismissedNotBelowDefault { dismissed: f32, default: f32 },
    #[error("default_height ({default}) must not exceed maximum_height ({maximum})")]
    DefaultAboveMaximum { default: f32, maximum: f32 },
    #[error("stretchable_height must be positive, got {0}")]
    NonPositiveStretch(f32),
    #[error("minimum_content_compress_height must not be negative, got {0}")]
    NegativeCompressFloor(f32),
    #[error("background_overlay_alpha must be within [0, 1], got {0}")]
    AlphaOutOfRange(f32),
    #[error("configuration contains a non-finite value")]
    NonFinite,
}

/// Which reactive facets changed between two configurations.
///
/// Only the facets listed here are applied immediately on reconfigure.
/// Height thresholds are deliberately absent: they take effect on the next
/// drag/settle cycle and are never applied retroactively to an animation
/// in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfigDelta {
    /// Overlay color or alpha changed; animate to the new appearance.
    pub overlay_changed: bool,
    /// Corner radius changed; apply immediately, no animation.
    pub corner_radius_changed: bool,
    /// The content surface's drag attachment must be added or removed.
    pub content_dragable_toggled: bool,
    /// The overlay surface's drag attachment must be added or removed.
    pub overlay_dragable_toggled: bool,
}

impl ConfigDelta {
    /// Field-by-field comparison of the reactive facets.
    pub fn diff(old: &Config, new: &Config) -> Self {
        Self {
            overlay_changed: old.background_overlay_color != new.background_overlay_color
                || old.background_overlay_alpha != new.background_overlay_alpha,
            corner_radius_changed: old.corner_radius != new.corner_radius,
            content_dragable_toggled: old.content_dragable != new.content_dragable,
            overlay_dragable_toggled: old.overlay_background_dragable
                != new.overlay_background_dragable,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
