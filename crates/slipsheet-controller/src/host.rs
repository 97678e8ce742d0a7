//! The layout collaborator contract.

use slipsheet_core::{OverlayStyle, SheetFrame};

/// What the controller needs from the rendering side: apply numbers,
/// report nothing back.
///
/// Every call is fire-and-forget and must complete synchronously; the
/// controller invokes `set_sheet_frame` at pointer-move frequency during
/// a drag and once per tick during animations.
pub trait LayoutHost {
    /// Renders the sheet box at the given height and bottom offset.
    fn set_sheet_frame(&mut self, frame: SheetFrame);

    /// Applies the dimming overlay appearance.
    fn set_overlay(&mut self, style: OverlayStyle);

    /// Applies the sheet's corner radius. Visual only.
    fn set_corner_radius(&mut self, radius: f32);

    /// Removes the panel from the view hierarchy. Called exactly once per
    /// dismissal, after the overlay fade completes.
    fn teardown(&mut self);
}
