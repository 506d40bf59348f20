//! The singleton record of an in-progress drag.

use crate::events::PointerId;
use crate::geom::{Point, Vec2};
use crate::panel::PanelId;

/// Ephemeral state captured when a drag opens and discarded when it
/// commits. At most one session exists at any instant; it acts as an
/// exclusive lock keyed by the pointer identity that opened it.
#[derive(Debug, Clone, Copy)]
pub struct DragSession {
    /// Panel being dragged.
    pub panel: PanelId,
    /// Pointer that opened the session; the only one allowed to move or
    /// close it.
    pub pointer: PointerId,
    /// Pointer position minus panel origin at grab time, so the panel
    /// doesn't jump under the cursor.
    pub grab: Vec2,
    /// Panel base position frozen at grab time. Every offset rendered
    /// during the drag is relative to this.
    pub base: Point,
}

impl DragSession {
    pub fn new(panel: PanelId, pointer: PointerId, grab: Vec2, base: Point) -> Self {
        Self {
            panel,
            pointer,
            grab,
            base,
        }
    }

    /// Whether an event from `pointer` may drive this session.
    pub fn accepts(&self, pointer: PointerId) -> bool {
        self.pointer == pointer
    }

    /// Unclamped top-left the panel would move to for a pointer at
    /// `position`.
    pub fn desired_origin(&self, position: Point) -> Point {
        Point::new(position.x - self.grab.dx, position.y - self.grab.dy)
    }

    /// Fold a rendered offset into the frozen base, yielding the position
    /// to persist when the drag ends.
    pub fn commit(&self, offset: Vec2) -> Point {
        self.base + offset
    }
}
