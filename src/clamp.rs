//! Pure position clamping against the live viewport.

use crate::config::DeskConfig;
use crate::geom::{Point, Size};

/// Bound a desired top-left position so the panel stays reachable.
///
/// Horizontally, at least `config.min_visible_margin` pixels of the panel
/// remain inside the viewport on either side. Vertically, the titlebar
/// stays fully on-screen and never crosses the top edge.
///
/// Callers pass the live panel width and viewport size on every call, so
/// a viewport resize mid-drag is respected on the next move. The lower
/// bound is applied before the upper bound; on a viewport too small to
/// satisfy both, the upper bound wins.
pub fn clamp_position(
    config: &DeskConfig,
    desired: Point,
    panel_width: f64,
    titlebar_height: f64,
    viewport: Size,
) -> Point {
    let min_left = -panel_width + config.min_visible_margin;
    let max_left = viewport.width - config.min_visible_margin;
    let max_top = viewport.height - titlebar_height;
    Point::new(
        desired.x.max(min_left).min(max_left),
        desired.y.max(0.0).min(max_top),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Size = Size::new(1000.0, 800.0);

    fn clamp(desired: Point) -> Point {
        clamp_position(&DeskConfig::default(), desired, 300.0, 30.0, VIEWPORT)
    }

    #[test]
    fn in_bounds_position_is_untouched() {
        let desired = Point::new(120.0, 340.0);
        assert_eq!(clamp(desired), desired);
    }

    #[test]
    fn far_right_keeps_a_grabbable_sliver() {
        assert_eq!(clamp(Point::new(1990.0, 0.0)), Point::new(960.0, 0.0));
    }

    #[test]
    fn far_left_keeps_a_grabbable_sliver() {
        assert_eq!(clamp(Point::new(-5010.0, 100.0)), Point::new(-260.0, 100.0));
    }

    #[test]
    fn top_edge_is_a_hard_wall() {
        assert_eq!(clamp(Point::new(50.0, -5010.0)), Point::new(50.0, 0.0));
    }

    #[test]
    fn bottom_keeps_the_titlebar_visible() {
        assert_eq!(clamp(Point::new(50.0, 4000.0)), Point::new(50.0, 770.0));
    }

    #[test]
    fn missing_titlebar_uses_caller_fallback_height() {
        // the manager substitutes the configured default before calling
        let clamped = clamp_position(
            &DeskConfig::default(),
            Point::new(0.0, 4000.0),
            300.0,
            32.0,
            VIEWPORT,
        );
        assert_eq!(clamped.y, 768.0);
    }

    #[test]
    fn degenerate_viewport_resolves_toward_upper_bound() {
        // a 10px viewport puts max_left (-30) below min_left (-260);
        // the upper bound is applied last and wins
        let tiny = Size::new(10.0, 800.0);
        let clamped = clamp_position(
            &DeskConfig::default(),
            Point::new(500.0, 0.0),
            300.0,
            30.0,
            tiny,
        );
        assert_eq!(clamped.x, -30.0);
    }
}
