//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_TITLEBAR_HEIGHT, MIN_VISIBLE_MARGIN, MOBILE_BREAKPOINT};

/// Tunables for hit-testing and clamping.
///
/// The defaults match the page conventions documented in
/// [`constants`](crate::constants); embedders override fields
/// selectively:
///
/// ```rust
/// use desk_wm::{DeskConfig, DeskManager};
///
/// let manager = DeskManager::with_config(DeskConfig {
///     mobile_breakpoint: 768.0,
///     ..DeskConfig::default()
/// });
/// assert_eq!(manager.config().min_visible_margin, 40.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeskConfig {
    /// Viewport width at or below which the whole panel body drags.
    pub mobile_breakpoint: f64,
    /// Horizontal pixels of a panel that must stay reachable.
    pub min_visible_margin: f64,
    /// Vertical-clamp fallback for panels without a titlebar.
    pub default_titlebar_height: f64,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: MOBILE_BREAKPOINT,
            min_visible_margin: MIN_VISIBLE_MARGIN,
            default_titlebar_height: DEFAULT_TITLEBAR_HEIGHT,
        }
    }
}
