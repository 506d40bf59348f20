//! Pointer-driven drag, stacking, and clamping for floating desktop
//! panels.
//!
//! The engine owns every piece of interaction state — the panel
//! registry, the monotonic stacking counter, the single [`DragSession`],
//! and the frame-coalescing [`RenderScheduler`] — and drives
//! presentation through the [`PanelSurface`] capability trait. Nothing
//! here touches a live page directly, so the whole state machine runs
//! deterministically under test with a fake surface.
//!
//! ## Flow
//!
//! A pointer-down is hit-tested against the registry; a hit always
//! raises the panel, and a qualifying hit (titlebar in desktop mode,
//! anywhere on the body in mobile mode, never on an interactive control)
//! opens the drag session and freezes the panel's base position.
//! Move samples from the session's pointer are coalesced to at most one
//! render per frame callback, each render clamping the target into the
//! live viewport and applying it as an offset from the frozen base.
//! Pointer-up or -cancel folds the rendered offset into a new base and
//! closes the session.
//!
//! ```rust
//! use desk_wm::{DeskManager, PanelConfig, PanelId, Rect};
//!
//! let mut desk = DeskManager::new();
//! desk.insert_panel(
//!     PanelId(1),
//!     PanelConfig {
//!         rect: Rect::new(50.0, 50.0, 300.0, 200.0),
//!         titlebar: Some(Rect::new(50.0, 50.0, 300.0, 30.0)),
//!         ..PanelConfig::default()
//!     },
//! );
//! assert!(desk.dragging().is_none());
//! ```

pub mod clamp;
pub mod config;
pub mod constants;
pub mod events;
pub mod geom;
pub mod manager;
pub mod panel;
pub mod scheduler;
pub mod session;
pub mod stacking;
pub mod surface;

pub use config::DeskConfig;
pub use events::{InputResult, PointerId, PointerInput, PointerPhase, ViewportMode};
pub use geom::{Point, Rect, Size, Vec2};
pub use manager::DeskManager;
pub use panel::{Panel, PanelConfig, PanelId};
pub use scheduler::{CoalesceStats, RenderScheduler};
pub use session::DragSession;
pub use stacking::StackingOrder;
pub use surface::{CaptureError, PanelSurface};
