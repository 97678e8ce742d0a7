//! The panel controller: orchestrates the drag/height engine against the
//! host's rendering surface.
//!
//! The controller owns the configuration, one drag/height engine, two
//! animation tracks (sheet frame and overlay style), and the drag-target
//! registry. Pointer and tap events come in; frame/overlay commands go
//! out through the [`LayoutHost`] trait. Everything runs on one event
//! thread; the host calls [`PanelController::tick`] once per frame while
//! an animation is in flight.

pub mod controller;
pub mod host;
pub mod pointer;
pub mod registry;

pub use controller::{PanelController, PanelState};
pub use host::LayoutHost;
pub use pointer::PointerEvent;
pub use registry::{AttachmentId, DragTargetRegistry, SurfaceId};
