//! The presentation capability surface.

use thiserror::Error;

use crate::events::PointerId;
use crate::geom::{Point, Rect, Size, Vec2};
use crate::panel::PanelId;

/// Failure to obtain exclusive pointer delivery.
///
/// Capture is best-effort everywhere: the router logs the error and keeps
/// dragging through ambient move events, only with reduced robustness
/// against the pointer leaving the handle.
#[derive(Debug, Error)]
pub enum CaptureError {
    /// The platform has no pointer-capture facility.
    #[error("pointer capture unsupported")]
    Unsupported,
    /// The platform rejected the capture request.
    #[error("pointer capture rejected: {0}")]
    Rejected(String),
}

/// Minimal mutation surface the engine drives presentation through.
///
/// A page adapter implements this over element styles; tests implement it
/// with plain recorded state. The engine never touches presentation any
/// other way, so everything above this trait runs without a live page.
pub trait PanelSurface {
    /// Live on-screen rectangle of the panel.
    fn rect(&self, id: PanelId) -> Rect;

    /// Live viewport size.
    fn viewport(&self) -> Size;

    /// Persist the panel's position (left/top).
    fn set_base_position(&mut self, id: PanelId, position: Point);

    /// Render a transient visual offset relative to the base position,
    /// typically as a transform so no layout is recomputed per frame.
    fn set_offset(&mut self, id: PanelId, offset: Vec2);

    /// Apply a stacking value determining front-to-back order.
    fn set_stacking(&mut self, id: PanelId, stacking: u64);

    /// Reparent the panel to the page root and pin it viewport-relative
    /// at its current on-screen rect, clearing any layout offsets
    /// (right/bottom/margin, inherited transforms) that would make the
    /// frozen position jump.
    fn promote_to_root(&mut self, id: PanelId);

    /// Ask the host for one frame callback; the page answers by calling
    /// [`DeskManager::on_frame`](crate::DeskManager::on_frame).
    fn request_frame(&mut self);

    /// Route subsequent events for `pointer` to the panel regardless of
    /// where the pointer physically moves. Optional capability; the
    /// default declines.
    fn capture_pointer(&mut self, _id: PanelId, _pointer: PointerId) -> Result<(), CaptureError> {
        Err(CaptureError::Unsupported)
    }

    /// Styling hook toggled while a drag session is open; pages usually
    /// map it to a `dragging` class on the root element.
    fn set_drag_active(&mut self, _active: bool) {}
}

impl<T: PanelSurface + ?Sized> PanelSurface for &mut T {
    fn rect(&self, id: PanelId) -> Rect {
        (**self).rect(id)
    }

    fn viewport(&self) -> Size {
        (**self).viewport()
    }

    fn set_base_position(&mut self, id: PanelId, position: Point) {
        (**self).set_base_position(id, position)
    }

    fn set_offset(&mut self, id: PanelId, offset: Vec2) {
        (**self).set_offset(id, offset)
    }

    fn set_stacking(&mut self, id: PanelId, stacking: u64) {
        (**self).set_stacking(id, stacking)
    }

    fn promote_to_root(&mut self, id: PanelId) {
        (**self).promote_to_root(id)
    }

    fn request_frame(&mut self) {
        (**self).request_frame()
    }

    fn capture_pointer(&mut self, id: PanelId, pointer: PointerId) -> Result<(), CaptureError> {
        (**self).capture_pointer(id, pointer)
    }

    fn set_drag_active(&mut self, active: bool) {
        (**self).set_drag_active(active)
    }
}
