//! Frame-coalescing render scheduler.
//!
//! Pointer-move events arrive far more often than the display can
//! usefully repaint. The scheduler keeps only the newest sample and
//! admits at most one render per frame callback; samples superseded
//! before their frame fires are dropped on purpose.

use serde::Serialize;

use crate::geom::Point;

/// Counters describing how heavily move samples were coalesced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CoalesceStats {
    /// Raw move samples accepted for an open session.
    pub samples_in: u64,
    /// Frame renders actually performed.
    pub frames_rendered: u64,
    /// Samples superseded or abandoned before a frame fired.
    pub samples_dropped: u64,
}

#[derive(Debug, Default)]
pub struct RenderScheduler {
    pending: Option<Point>,
    stats: CoalesceStats,
}

impl RenderScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the newest sample. Returns `true` exactly when the caller
    /// must request a frame callback: a render is not already pending.
    pub fn submit(&mut self, position: Point) -> bool {
        self.stats.samples_in += 1;
        let need_frame = self.pending.is_none();
        if !need_frame {
            self.stats.samples_dropped += 1;
        }
        self.pending = Some(position);
        need_frame
    }

    /// Latest sample at the frame boundary, clearing the pending flag.
    pub fn take(&mut self) -> Option<Point> {
        let sample = self.pending.take();
        if sample.is_some() {
            self.stats.frames_rendered += 1;
        }
        sample
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Abandon any sample left over when a session closes before its
    /// frame fires.
    pub fn cancel(&mut self) {
        if self.pending.take().is_some() {
            self.stats.samples_dropped += 1;
        }
    }

    pub fn stats(&self) -> CoalesceStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sample_requests_a_frame_followers_coalesce() {
        let mut scheduler = RenderScheduler::new();
        assert!(scheduler.submit(Point::new(1.0, 1.0)));
        assert!(!scheduler.submit(Point::new(2.0, 2.0)));
        assert!(!scheduler.submit(Point::new(3.0, 3.0)));
        assert_eq!(scheduler.take(), Some(Point::new(3.0, 3.0)));
        assert_eq!(scheduler.take(), None);
        // pending cleared: the next sample needs a fresh frame
        assert!(scheduler.submit(Point::new(4.0, 4.0)));
    }

    #[test]
    fn stats_count_renders_and_drops() {
        let mut scheduler = RenderScheduler::new();
        for i in 0..5 {
            scheduler.submit(Point::new(i as f64, 0.0));
        }
        scheduler.take();
        scheduler.submit(Point::new(9.0, 9.0));
        scheduler.cancel();
        let stats = scheduler.stats();
        assert_eq!(stats.samples_in, 6);
        assert_eq!(stats.frames_rendered, 1);
        assert_eq!(stats.samples_dropped, 5);
    }

    #[test]
    fn cancel_without_pending_is_a_no_op() {
        let mut scheduler = RenderScheduler::new();
        scheduler.cancel();
        assert_eq!(scheduler.stats(), CoalesceStats::default());
    }
}
