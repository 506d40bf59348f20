//! Pointer input model and routing results.

use serde::{Deserialize, Serialize};

use crate::geom::Point;
use crate::panel::PanelId;

/// Identity of a pointer as reported by the host page.
///
/// Matches the platform's signed pointer id; a plain mouse is typically
/// id 1 while touches get per-contact values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PointerId(pub i32);

/// Lifecycle phase of one pointer sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    /// Platform-initiated loss of the pointer. Handled identically to
    /// [`PointerPhase::Up`].
    Cancel,
}

/// One pointer event, already translated into viewport coordinates by the
/// page adapter.
#[derive(Debug, Clone, Copy)]
pub struct PointerInput {
    pub pointer: PointerId,
    pub phase: PointerPhase,
    pub position: Point,
}

impl PointerInput {
    pub fn down(pointer: PointerId, position: Point) -> Self {
        Self {
            pointer,
            phase: PointerPhase::Down,
            position,
        }
    }

    pub fn moved(pointer: PointerId, position: Point) -> Self {
        Self {
            pointer,
            phase: PointerPhase::Move,
            position,
        }
    }

    pub fn up(pointer: PointerId, position: Point) -> Self {
        Self {
            pointer,
            phase: PointerPhase::Up,
            position,
        }
    }

    pub fn cancel(pointer: PointerId, position: Point) -> Self {
        Self {
            pointer,
            phase: PointerPhase::Cancel,
            position,
        }
    }
}

/// Hit-testing mode selected from the live viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportMode {
    /// Wide viewport: drags start only from a panel's own titlebar.
    Desktop,
    /// Narrow viewport: the whole panel body is a drag handle.
    Mobile,
}

/// Outcome of routing one pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Nothing under the pointer, or the event did not belong to the
    /// active drag session.
    Ignored,
    /// A panel was brought to front but no drag began.
    Focused(PanelId),
    /// A drag session opened on this panel.
    DragStarted(PanelId),
    /// The sample was queued for the next frame render.
    DragMoved(PanelId),
    /// The session committed its offset and closed.
    DragEnded(PanelId),
}

impl InputResult {
    /// Whether the page must cancel the event's native default behavior.
    ///
    /// True for the down that opens a session (stops text selection) and
    /// for every move while a session is open (stops touch scrolling and
    /// pull-to-refresh near the viewport edges). Everything else leaves
    /// the default untouched.
    pub fn prevent_default(&self) -> bool {
        matches!(self, Self::DragStarted(_) | Self::DragMoved(_))
    }
}
