//! The drag-target registry.
//!
//! An explicit ownership model for "which surfaces feed the height
//! engine": a plain association list from surface identity to the
//! attachment handle representing its gesture wiring. The set is tiny
//! (two entries in practice), so no hashing is involved.

use log::debug;
use smallvec::SmallVec;

/// Identity of a surface that can carry a drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceId {
    /// The sheet's main content surface.
    Content,
    /// The dimming overlay behind the sheet.
    Overlay,
    /// A host-defined extra surface (e.g. a grabber handle).
    Custom(u32),
}

/// Handle for one surface's gesture attachment. Hosts that mirror the
/// registry into platform gesture recognisers can key them by this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttachmentId(u64);

/// Surface → attachment association list. No surface ever holds more
/// than one attachment; removing a non-member is a no-op.
#[derive(Debug, Default)]
pub struct DragTargetRegistry {
    entries: SmallVec<[(SurfaceId, AttachmentId); 2]>,
    next_attachment: u64,
}

impl DragTargetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches a surface. Returns the new attachment handle, or `None`
    /// if the surface was already attached (the existing attachment is
    /// kept).
    pub fn add(&mut self, surface: SurfaceId) -> Option<AttachmentId> {
        if self.contains(surface) {
            debug!("registry: {surface:?} already attached");
            return None;
        }
        let attachment = AttachmentId(self.next_attachment);
        self.next_attachment += 1;
        self.entries.push((surface, attachment));
        Some(attachment)
    }

    /// Detaches a surface, returning its attachment handle. `None` for a
    /// non-member (no-op, not an error).
    pub fn remove(&mut self, surface: SurfaceId) -> Option<AttachmentId> {
        let position = self.entries.iter().position(|(s, _)| *s == surface)?;
        Some(self.entries.remove(position).1)
    }

    pub fn contains(&self, surface: SurfaceId) -> bool {
        self.entries.iter().any(|(s, _)| *s == surface)
    }

    pub fn attachment(&self, surface: SurfaceId) -> Option<AttachmentId> {
        self.entries
            .iter()
            .find(|(s, _)| *s == surface)
            .map(|(_, a)| *a)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_remove_round_trip() {
        let mut registry = DragTargetRegistry::new();
        let attachment = registry.add(SurfaceId::Content).expect("fresh surface");
        assert!(registry.contains(SurfaceId::Content));
        assert_eq!(registry.attachment(SurfaceId::Content), Some(attachment));
        assert_eq!(registry.remove(SurfaceId::Content), Some(attachment));
        assert!(registry.is_empty());
    }

    #[test]
    fn duplicate_add_keeps_existing_attachment() {
        let mut registry = DragTargetRegistry::new();
        let first = registry.add(SurfaceId::Overlay);
        assert!(registry.add(SurfaceId::Overlay).is_none());
        assert_eq!(registry.attachment(SurfaceId::Overlay), first);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn removing_non_member_is_noop() {
        let mut registry = DragTargetRegistry::new();
        registry.add(SurfaceId::Content);
        assert_eq!(registry.remove(SurfaceId::Custom(3)), None);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn attachments_are_distinct_per_surface() {
        let mut registry = DragTargetRegistry::new();
        let a = registry.add(SurfaceId::Content).unwrap();
        let b = registry.add(SurfaceId::Overlay).unwrap();
        assert_ne!(a, b);
    }
}
