//! The height-mapping function: raw candidate height in, renderable
//! sheet frame out.
//!
//! Three zones, keyed off the configuration:
//!
//! * below the compress floor the box stops shrinking and slides
//!   off-screen instead;
//! * between the floor and the maximum the box tracks the raw height;
//! * beyond the maximum a decay curve turns further drag into a bounded
//!   rubber-band overshoot.

use crate::config::Config;

/// A renderable sheet rectangle: box height plus how far the bottom edge
/// is pushed below the screen edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetFrame {
    /// Height of the sheet box, always at least the compress floor while
    /// anything is visible.
    pub box_height: f32,
    /// Downward offset of the box's bottom edge. Zero while the sheet
    /// rests fully on-screen.
    pub bottom_offset: f32,
}

impl SheetFrame {
    /// Maps a raw candidate height to the frame to render.
    ///
    /// Pure function of `(raw_height, config)`; callable at pointer-move
    /// frequency.
    pub fn map(raw_height: f32, config: &Config) -> Self {
        let floor = config.minimum_content_compress_height;
        let max = config.maximum_height;

        if raw_height < floor {
            // Below the floor, shrinkage becomes off-screen travel. This
            // is what lets the raw height approach the dismissal
            // threshold while something is still rendered.
            Self {
                box_height: floor,
                bottom_offset: floor - raw_height,
            }
        } else if raw_height < max {
            Self {
                box_height: raw_height,
                bottom_offset: 0.0,
            }
        } else {
            Self {
                box_height: max + stretch(raw_height - max, config.stretchable_height),
                bottom_offset: 0.0,
            }
        }
    }

    /// The fully hidden frame for a sheet whose resting height is
    /// `resting_height`: box unchanged, bottom edge pushed completely
    /// off-screen. Start of the entrance animation and end of the exit.
    pub fn hidden(resting_height: f32, config: &Config) -> Self {
        let box_height = resting_height.max(config.minimum_content_compress_height);
        Self {
            box_height,
            bottom_offset: box_height,
        }
    }
}

/// Decay curve `s·offset / (offset + s²)`.
///
/// Monotonically increasing, `s/2` at `offset = s²`, asymptotically
/// approaching `s` without ever reaching it. Bounds the visual overshoot
/// regardless of how far the pointer travels.
fn stretch(offset: f32, s: f32) -> f32 {
    s * offset / (offset + s * s)
}
