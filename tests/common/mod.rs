#![allow(dead_code)]

use std::collections::HashMap;

use desk_wm::{
    CaptureError, DeskManager, PanelConfig, PanelId, PanelSurface, Point, PointerId, Rect, Size,
    Vec2,
};

/// Surface double that records every presentation write the engine makes.
pub struct RecordingSurface {
    pub rects: HashMap<PanelId, Rect>,
    pub viewport: Size,
    pub base_writes: Vec<(PanelId, Point)>,
    pub offset_writes: Vec<(PanelId, Vec2)>,
    pub stacking: HashMap<PanelId, u64>,
    pub promoted: Vec<PanelId>,
    pub frame_requests: usize,
    pub captures: Vec<(PanelId, PointerId)>,
    pub fail_capture: bool,
    pub drag_active: bool,
}

impl RecordingSurface {
    pub fn new(viewport: Size) -> Self {
        Self {
            rects: HashMap::new(),
            viewport,
            base_writes: Vec::new(),
            offset_writes: Vec::new(),
            stacking: HashMap::new(),
            promoted: Vec::new(),
            frame_requests: 0,
            captures: Vec::new(),
            fail_capture: false,
            drag_active: false,
        }
    }

    pub fn last_offset(&self, id: PanelId) -> Option<Vec2> {
        self.offset_writes
            .iter()
            .rev()
            .find(|(panel, _)| *panel == id)
            .map(|(_, offset)| *offset)
    }

    pub fn last_base(&self, id: PanelId) -> Option<Point> {
        self.base_writes
            .iter()
            .rev()
            .find(|(panel, _)| *panel == id)
            .map(|(_, position)| *position)
    }
}

impl PanelSurface for RecordingSurface {
    fn rect(&self, id: PanelId) -> Rect {
        self.rects.get(&id).copied().unwrap_or_default()
    }

    fn viewport(&self) -> Size {
        self.viewport
    }

    fn set_base_position(&mut self, id: PanelId, position: Point) {
        if let Some(rect) = self.rects.get_mut(&id) {
            rect.x = position.x;
            rect.y = position.y;
        }
        self.base_writes.push((id, position));
    }

    fn set_offset(&mut self, id: PanelId, offset: Vec2) {
        self.offset_writes.push((id, offset));
    }

    fn set_stacking(&mut self, id: PanelId, stacking: u64) {
        self.stacking.insert(id, stacking);
    }

    fn promote_to_root(&mut self, id: PanelId) {
        self.promoted.push(id);
    }

    fn request_frame(&mut self) {
        self.frame_requests += 1;
    }

    fn capture_pointer(&mut self, id: PanelId, pointer: PointerId) -> Result<(), CaptureError> {
        if self.fail_capture {
            return Err(CaptureError::Rejected("denied by test".into()));
        }
        self.captures.push((id, pointer));
        Ok(())
    }

    fn set_drag_active(&mut self, active: bool) {
        self.drag_active = active;
    }
}

/// The standard fixture most tests use: a 1000x800 desktop viewport and
/// one 300x200 panel at (50, 50) with a 30px titlebar.
pub const DESKTOP_VIEWPORT: Size = Size::new(1000.0, 800.0);
pub const PANEL: PanelId = PanelId(1);

pub fn desk_with_panel() -> (DeskManager, RecordingSurface) {
    let mut desk = DeskManager::new();
    let mut surface = RecordingSurface::new(DESKTOP_VIEWPORT);
    add_panel(&mut desk, &mut surface, PANEL, Rect::new(50.0, 50.0, 300.0, 200.0));
    (desk, surface)
}

/// Register a panel with a 30px titlebar spanning its top edge.
pub fn add_panel(desk: &mut DeskManager, surface: &mut RecordingSurface, id: PanelId, rect: Rect) {
    surface.rects.insert(id, rect);
    desk.insert_panel(
        id,
        PanelConfig {
            rect,
            titlebar: Some(Rect::new(rect.x, rect.y, rect.width, 30.0)),
            ..PanelConfig::default()
        },
    );
}
