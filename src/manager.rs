//! Top-level pointer router and drag state machine.

use crate::clamp::clamp_position;
use crate::config::DeskConfig;
use crate::events::{InputResult, PointerInput, PointerPhase, ViewportMode};
use crate::geom::{Rect, Vec2};
use crate::panel::{Panel, PanelConfig, PanelId, PanelRegistry};
use crate::scheduler::{CoalesceStats, RenderScheduler};
use crate::session::DragSession;
use crate::stacking::StackingOrder;
use crate::surface::PanelSurface;

/// Owns all interaction state for one page's panels: the registry, the
/// stacking counter, the single drag session, and the frame scheduler.
///
/// Every state transition happens synchronously inside
/// [`handle_pointer`](Self::handle_pointer); the only deferred work is
/// the render applied in [`on_frame`](Self::on_frame) after the surface
/// grants a frame callback. Handlers are serialized by the host event
/// loop, so no reentrant mutation can occur.
#[derive(Debug, Default)]
pub struct DeskManager {
    config: DeskConfig,
    panels: PanelRegistry,
    stacking: StackingOrder,
    session: Option<DragSession>,
    scheduler: RenderScheduler,
}

impl DeskManager {
    pub fn new() -> Self {
        Self::with_config(DeskConfig::default())
    }

    pub fn with_config(config: DeskConfig) -> Self {
        Self {
            config,
            panels: PanelRegistry::default(),
            stacking: StackingOrder::new(),
            session: None,
            scheduler: RenderScheduler::new(),
        }
    }

    pub fn config(&self) -> &DeskConfig {
        &self.config
    }

    /// Declare a panel the page has constructed. Replaces any existing
    /// declaration under the same id.
    pub fn insert_panel(&mut self, id: PanelId, config: PanelConfig) {
        self.panels.insert(id, config);
    }

    /// Forget a panel the page has destroyed. If it owned the active
    /// session the drag closes without a commit; there is nothing left
    /// to write a position to.
    pub fn remove_panel<S: PanelSurface>(&mut self, surface: &mut S, id: PanelId) {
        if self.session.is_some_and(|session| session.panel == id) {
            tracing::debug!(panel = id.0, "panel removed mid-drag");
            self.session = None;
            self.scheduler.cancel();
            surface.set_drag_active(false);
        }
        self.panels.remove(id);
    }

    /// Sync a panel's on-screen rect after a page-side layout change.
    pub fn set_panel_rect(&mut self, id: PanelId, rect: Rect) {
        if let Some(panel) = self.panels.get_mut(id) {
            panel.rect = rect;
            panel.base = rect.origin();
        }
    }

    /// Sync a panel's direct-child titlebar region.
    pub fn set_titlebar(&mut self, id: PanelId, titlebar: Option<Rect>) {
        if let Some(panel) = self.panels.get_mut(id) {
            panel.titlebar = titlebar;
        }
    }

    /// Sync the interactive-control regions excluded from drag starts.
    pub fn set_controls(&mut self, id: PanelId, controls: Vec<Rect>) {
        if let Some(panel) = self.panels.get_mut(id) {
            panel.controls = controls;
        }
    }

    pub fn panel(&self, id: PanelId) -> Option<&Panel> {
        self.panels.get(id)
    }

    /// Iterate over every declared panel.
    pub fn panels(&self) -> impl Iterator<Item = (PanelId, &Panel)> {
        self.panels.iter()
    }

    /// Panel currently being dragged, if any.
    pub fn dragging(&self) -> Option<PanelId> {
        self.session.map(|session| session.panel)
    }

    /// While a session is open, page-level touch-scroll gestures must be
    /// cancelled so dragging near an edge cannot scroll the page or
    /// trigger pull-to-refresh.
    pub fn suppress_touch_scroll(&self) -> bool {
        self.session.is_some()
    }

    pub fn coalesce_stats(&self) -> CoalesceStats {
        self.scheduler.stats()
    }

    /// Hit-testing mode for the given viewport width.
    pub fn viewport_mode(&self, width: f64) -> ViewportMode {
        if width > self.config.mobile_breakpoint {
            ViewportMode::Desktop
        } else {
            ViewportMode::Mobile
        }
    }

    /// Route one pointer event through the state machine.
    pub fn handle_pointer<S: PanelSurface>(
        &mut self,
        surface: &mut S,
        input: PointerInput,
    ) -> InputResult {
        match input.phase {
            PointerPhase::Down => self.on_down(surface, input),
            PointerPhase::Move => self.on_move(surface, input),
            // up and cancel terminate the session identically
            PointerPhase::Up | PointerPhase::Cancel => self.on_stop(surface, input),
        }
    }

    /// Raise a panel above everything else. Applied synchronously, never
    /// deferred to a frame.
    pub fn bring_to_front<S: PanelSurface>(&mut self, surface: &mut S, id: PanelId) {
        let Some(panel) = self.panels.get_mut(id) else {
            return;
        };
        let stacking = self.stacking.assign_top();
        panel.stacking = stacking;
        surface.set_stacking(id, stacking);
        tracing::trace!(panel = id.0, stacking, "raised panel");
    }

    fn on_down<S: PanelSurface>(&mut self, surface: &mut S, input: PointerInput) -> InputResult {
        let Some(id) = self.panels.hit_test(input.position) else {
            return InputResult::Ignored;
        };
        // any click or tap on a panel raises it, drag or not
        self.bring_to_front(surface, id);
        // the open session is an exclusive lock; other pointers may
        // focus but never open a second drag
        if self.session.is_some() {
            return InputResult::Focused(id);
        }
        if !self.drag_qualifies(surface, id, input) {
            return InputResult::Focused(id);
        }
        self.start_drag(surface, id, input);
        InputResult::DragStarted(id)
    }

    fn drag_qualifies<S: PanelSurface>(
        &self,
        surface: &S,
        id: PanelId,
        input: PointerInput,
    ) -> bool {
        let Some(panel) = self.panels.get(id) else {
            return false;
        };
        // interactive controls never start a drag in either mode
        if panel
            .controls
            .iter()
            .any(|control| control.contains(input.position))
        {
            return false;
        }
        match self.viewport_mode(surface.viewport().width) {
            // only the panel's own direct-child titlebar counts: a point
            // inside a nested panel hit-tests to the nested panel, so an
            // embedded panel can never hijack its parent's drag
            ViewportMode::Desktop => panel
                .titlebar
                .is_some_and(|bar| bar.contains(input.position)),
            ViewportMode::Mobile => true,
        }
    }

    fn start_drag<S: PanelSurface>(&mut self, surface: &mut S, id: PanelId, input: PointerInput) {
        // freeze layout: read the live rect, escape any transformed
        // ancestor, and pin the panel viewport-relative where it sits
        let rect = surface.rect(id);
        surface.promote_to_root(id);
        surface.set_base_position(id, rect.origin());
        surface.set_offset(id, Vec2::ZERO);
        let Some(panel) = self.panels.get_mut(id) else {
            return;
        };
        panel.parent = None;
        panel.rect = rect;
        panel.base = rect.origin();
        panel.offset = Vec2::ZERO;

        let grab = input.position - rect.origin();
        self.session = Some(DragSession::new(id, input.pointer, grab, rect.origin()));
        surface.set_drag_active(true);

        if let Err(error) = surface.capture_pointer(id, input.pointer) {
            // dragging still works through ambient move events
            tracing::debug!(panel = id.0, %error, "pointer capture unavailable");
        }
        tracing::debug!(
            panel = id.0,
            pointer = input.pointer.0,
            x = rect.x,
            y = rect.y,
            "drag started"
        );
    }

    fn on_move<S: PanelSurface>(&mut self, surface: &mut S, input: PointerInput) -> InputResult {
        let Some(session) = self.session else {
            return InputResult::Ignored;
        };
        if !session.accepts(input.pointer) {
            return InputResult::Ignored;
        }
        if self.scheduler.submit(input.position) {
            surface.request_frame();
        }
        InputResult::DragMoved(session.panel)
    }

    /// Apply the latest coalesced sample as a clamped visual offset from
    /// the session base. The page calls this from the frame callback it
    /// granted for [`PanelSurface::request_frame`]; with no session or no
    /// pending sample it does nothing.
    pub fn on_frame<S: PanelSurface>(&mut self, surface: &mut S) {
        let Some(session) = self.session else {
            return;
        };
        let Some(sample) = self.scheduler.take() else {
            return;
        };
        let Some(panel) = self.panels.get_mut(session.panel) else {
            return;
        };
        let titlebar_height = panel
            .titlebar_height()
            .unwrap_or(self.config.default_titlebar_height);
        let clamped = clamp_position(
            &self.config,
            session.desired_origin(sample),
            panel.rect.width,
            titlebar_height,
            surface.viewport(),
        );
        let offset = clamped - session.base;
        panel.offset = offset;
        surface.set_offset(session.panel, offset);
    }

    fn on_stop<S: PanelSurface>(&mut self, surface: &mut S, input: PointerInput) -> InputResult {
        let Some(session) = self.session else {
            return InputResult::Ignored;
        };
        if !session.accepts(input.pointer) {
            return InputResult::Ignored;
        }
        let id = session.panel;
        self.stop_drag(surface);
        InputResult::DragEnded(id)
    }

    /// Commit the rendered offset into the base position and return to
    /// idle. Idempotent: with no session open this is a no-op.
    pub fn stop_drag<S: PanelSurface>(&mut self, surface: &mut S) {
        let Some(session) = self.session.take() else {
            return;
        };
        // a sample that never reached a frame is dropped; the commit
        // reads the last offset actually rendered
        self.scheduler.cancel();
        surface.set_drag_active(false);
        let Some(panel) = self.panels.get_mut(session.panel) else {
            return;
        };
        let delta = panel.offset;
        let committed = session.commit(delta);
        panel.base = committed;
        panel.rect.x = committed.x;
        panel.rect.y = committed.y;
        // titlebar and controls are direct children; they moved with
        // the panel and their hit regions must follow
        if let Some(bar) = panel.titlebar.as_mut() {
            bar.x += delta.dx;
            bar.y += delta.dy;
        }
        for control in &mut panel.controls {
            control.x += delta.dx;
            control.y += delta.dy;
        }
        panel.offset = Vec2::ZERO;
        surface.set_base_position(session.panel, committed);
        surface.set_offset(session.panel, Vec2::ZERO);
        tracing::debug!(
            panel = session.panel.0,
            x = committed.x,
            y = committed.y,
            "drag committed"
        );
    }
}
