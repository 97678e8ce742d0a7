//! Color payload for the dimming overlay.
//!
//! The controller never interprets colors; it only hands them to the
//! layout host, animated or not.

/// Plain rgba color with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Default overlay dimming color.
    pub const DARK_GRAY: Color = Color::rgb(0.33, 0.33, 0.33);

    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// Overlay appearance: dimming color plus the alpha applied over content.
///
/// Animated as one unit so a reconfigure that changes both color and alpha
/// produces a single transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayStyle {
    pub color: Color,
    pub alpha: f32,
}

impl OverlayStyle {
    pub const fn new(color: Color, alpha: f32) -> Self {
        Self { color, alpha }
    }

    /// The same color faded out completely. Used as the start of the
    /// entrance fade and the end of the dismissal fade.
    pub const fn transparent(color: Color) -> Self {
        Self { color, alpha: 0.0 }
    }
}
