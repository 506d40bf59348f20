//! Panel records and the registry that hit-tests against them.
//!
//! Panels are created and destroyed by the surrounding page; the engine
//! only mirrors their geometry and mutates position, stacking, and the
//! transient drag offset.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::geom::{Point, Rect, Vec2};

/// Stable identity of a panel, minted by the page when it declares the
/// element.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct PanelId(pub u64);

/// Geometry the page declares when inserting a panel.
///
/// All rects are in viewport coordinates. The page keeps them in sync as
/// its layout changes; the engine never derives them on its own.
#[derive(Debug, Clone, Default)]
pub struct PanelConfig {
    pub rect: Rect,
    /// The panel's direct-child drag-handle region, if it has one.
    pub titlebar: Option<Rect>,
    /// Enclosing panel, for panels embedded inside another panel's body.
    pub parent: Option<PanelId>,
    /// Regions of interactive controls (links, buttons, inputs) that must
    /// never start a drag.
    pub controls: Vec<Rect>,
}

/// Engine-side record of one panel.
#[derive(Debug, Clone)]
pub struct Panel {
    pub(crate) rect: Rect,
    pub(crate) titlebar: Option<Rect>,
    pub(crate) parent: Option<PanelId>,
    pub(crate) controls: Vec<Rect>,
    pub(crate) stacking: u64,
    pub(crate) base: Point,
    pub(crate) offset: Vec2,
}

impl Panel {
    fn new(config: PanelConfig) -> Self {
        let base = config.rect.origin();
        Self {
            rect: config.rect,
            titlebar: config.titlebar,
            parent: config.parent,
            controls: config.controls,
            stacking: 0,
            base,
            offset: Vec2::ZERO,
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn stacking(&self) -> u64 {
        self.stacking
    }

    /// Committed position; the last drag's end point, or the declared
    /// origin if the panel has never been dragged.
    pub fn base(&self) -> Point {
        self.base
    }

    /// Transient visual offset. Identity except mid-drag.
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn titlebar_height(&self) -> Option<f64> {
        self.titlebar.map(|bar| bar.height)
    }
}

#[derive(Debug, Default)]
pub(crate) struct PanelRegistry {
    panels: BTreeMap<PanelId, Panel>,
}

impl PanelRegistry {
    pub(crate) fn insert(&mut self, id: PanelId, config: PanelConfig) {
        self.panels.insert(id, Panel::new(config));
    }

    pub(crate) fn remove(&mut self, id: PanelId) -> Option<Panel> {
        self.panels.remove(&id)
    }

    pub(crate) fn get(&self, id: PanelId) -> Option<&Panel> {
        self.panels.get(&id)
    }

    pub(crate) fn get_mut(&mut self, id: PanelId) -> Option<&mut Panel> {
        self.panels.get_mut(&id)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (PanelId, &Panel)> {
        self.panels.iter().map(|(id, panel)| (*id, panel))
    }

    /// Length of the parent chain; root panels have depth zero. The walk
    /// is capped at the registry size so a malformed parent cycle cannot
    /// hang the engine.
    fn depth(&self, id: PanelId) -> usize {
        let mut depth = 0;
        let mut current = self.panels.get(&id).and_then(|panel| panel.parent);
        while let Some(parent) = current
            && depth < self.panels.len()
        {
            depth += 1;
            current = self.panels.get(&parent).and_then(|panel| panel.parent);
        }
        depth
    }

    /// Innermost panel under `point`: the deepest nested panel whose rect
    /// contains it, with the stacking value breaking ties among siblings.
    pub(crate) fn hit_test(&self, point: Point) -> Option<PanelId> {
        self.panels
            .iter()
            .filter(|(_, panel)| panel.rect.contains(point))
            .max_by_key(|(id, panel)| (self.depth(**id), panel.stacking))
            .map(|(id, _)| *id)
    }
}
