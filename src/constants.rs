//! Shared crate-wide constants.
//!
//! These back [`DeskConfig::default`](crate::DeskConfig); embedders that
//! need different tuning override the config fields rather than these.

/// Minimum number of horizontal pixels of a panel that must remain inside
/// the viewport so the user can grab it again after dragging it mostly
/// off-screen.
///
/// Applied symmetrically: a panel may hang off either edge, but at least
/// this much of it stays reachable.
pub const MIN_VISIBLE_MARGIN: f64 = 40.0;

/// Fallback titlebar height (in pixels) used by the vertical clamp for
/// panels that declare no titlebar of their own.
pub const DEFAULT_TITLEBAR_HEIGHT: f64 = 32.0;

/// Viewport width (in pixels) at or below which hit-testing switches to
/// mobile mode.
///
/// Above the breakpoint only a panel's own direct-child titlebar starts a
/// drag. At or below it the whole panel body is a drag handle: a narrow
/// titlebar is impractical to hit precisely with touch.
pub const MOBILE_BREAKPOINT: f64 = 900.0;

/// Floor for the stacking counter. Values at or below this are left to
/// static page chrome; the first focused panel lands just above it.
pub const INITIAL_STACKING: u64 = 10;
