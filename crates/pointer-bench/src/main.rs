use std::io;
use std::time::{Duration, Instant};

use clap::Parser;
use desk_wm::{
    CaptureError, DeskManager, PanelConfig, PanelId, PanelSurface, Point, PointerId, PointerInput,
    Rect, Size, Vec2,
};

#[derive(Parser, Debug)]
#[command(
    name = "pointer-bench",
    version = env!("CARGO_PKG_VERSION"),
    about = "Pointer-storm benchmark for drag scheduling throughput"
)]
struct BenchCli {
    /// Number of panels laid out on the synthetic desktop; each is
    /// dragged once.
    #[arg(short = 'p', long = "panels", value_name = "COUNT", default_value_t = 8)]
    panels: u32,

    /// Move samples delivered between consecutive frame callbacks.
    /// Real pointer hardware commonly reports 4-16 samples per display
    /// frame; crank this up to stress coalescing.
    #[arg(
        short = 'm',
        long = "moves-per-frame",
        value_name = "COUNT",
        default_value_t = 12
    )]
    moves_per_frame: u32,

    /// Frame callbacks simulated per drag.
    #[arg(short = 'f', long = "frames", value_name = "COUNT", default_value_t = 600)]
    frames: u32,
}

struct BenchConfig {
    panels: u32,
    moves_per_frame: u32,
    frames: u32,
}

impl TryFrom<&BenchCli> for BenchConfig {
    type Error = String;

    fn try_from(cli: &BenchCli) -> Result<Self, Self::Error> {
        if !(1..=256).contains(&cli.panels) {
            return Err("panels must be between 1 and 256".to_string());
        }
        if !(1..=10_000).contains(&cli.moves_per_frame) {
            return Err("moves-per-frame must be between 1 and 10000".to_string());
        }
        if !(1..=1_000_000).contains(&cli.frames) {
            return Err("frames must be between 1 and 1000000".to_string());
        }
        Ok(Self {
            panels: cli.panels,
            moves_per_frame: cli.moves_per_frame,
            frames: cli.frames,
        })
    }
}

const VIEWPORT: Size = Size::new(1920.0, 1080.0);
const TITLEBAR_HEIGHT: f64 = 20.0;

/// Home slot for a panel on a 16-column grid. Slots never overlap, so a
/// grab aimed at a parked panel's titlebar always lands on that panel.
fn slot_rect(index: u32) -> Rect {
    Rect::new(
        f64::from(index % 16) * 90.0 + 20.0,
        f64::from(index / 16) * 60.0 + 20.0,
        80.0,
        50.0,
    )
}

fn slot_titlebar(index: u32) -> Rect {
    let slot = slot_rect(index);
    Rect::new(slot.x, slot.y, slot.width, TITLEBAR_HEIGHT)
}

/// Surface sink that only counts writes; the benchmark measures the
/// engine, not a renderer.
#[derive(Default)]
struct NullSurface {
    rects: Vec<(PanelId, Rect)>,
    style_writes: u64,
    frame_requests: u64,
}

impl NullSurface {
    fn set_rect(&mut self, id: PanelId, rect: Rect) {
        if let Some((_, existing)) = self.rects.iter_mut().find(|(panel, _)| *panel == id) {
            *existing = rect;
        } else {
            self.rects.push((id, rect));
        }
    }
}

impl PanelSurface for NullSurface {
    fn rect(&self, id: PanelId) -> Rect {
        self.rects
            .iter()
            .find(|(panel, _)| *panel == id)
            .map(|(_, rect)| *rect)
            .unwrap_or_default()
    }

    fn viewport(&self) -> Size {
        VIEWPORT
    }

    fn set_base_position(&mut self, id: PanelId, position: Point) {
        if let Some((_, rect)) = self.rects.iter_mut().find(|(panel, _)| *panel == id) {
            rect.x = position.x;
            rect.y = position.y;
        }
        self.style_writes += 1;
    }

    fn set_offset(&mut self, _id: PanelId, _offset: Vec2) {
        self.style_writes += 1;
    }

    fn set_stacking(&mut self, _id: PanelId, _stacking: u64) {
        self.style_writes += 1;
    }

    fn promote_to_root(&mut self, _id: PanelId) {}

    fn request_frame(&mut self) {
        self.frame_requests += 1;
    }

    fn capture_pointer(&mut self, _id: PanelId, _pointer: PointerId) -> Result<(), CaptureError> {
        Ok(())
    }
}

/// Deterministic pseudo-random walk so runs are comparable.
struct Walk {
    state: u64,
}

impl Walk {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_point(&mut self) -> Point {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let x = (self.state >> 33) % 2400;
        let y = (self.state >> 11) % 1400;
        Point::new(x as f64 - 200.0, y as f64 - 100.0)
    }
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_target(false)
        .init();

    let args = BenchCli::parse();
    let config = BenchConfig::try_from(&args)
        .map_err(|msg| io::Error::new(io::ErrorKind::InvalidInput, msg))?;

    let mut desk = DeskManager::new();
    let mut surface = NullSurface::default();
    for index in 0..config.panels {
        let id = PanelId(u64::from(index) + 1);
        surface.set_rect(id, slot_rect(index));
        desk.insert_panel(
            id,
            PanelConfig {
                rect: slot_rect(index),
                titlebar: Some(slot_titlebar(index)),
                ..PanelConfig::default()
            },
        );
    }

    let pointer = PointerId(1);
    let mut walk = Walk::new(0x5eed);
    let mut events: u64 = 0;
    let mut dead_drags: u32 = 0;
    let started = Instant::now();

    for index in 0..config.panels {
        let id = PanelId(u64::from(index) + 1);
        let slot = slot_rect(index);
        let grab = Point::new(slot.x + 5.0, slot.y + 5.0);
        let down = desk.handle_pointer(&mut surface, PointerInput::down(pointer, grab));
        events += 1;
        if desk.dragging() != Some(id) {
            // should not happen on the non-overlapping grid; counted so
            // a skew never goes unnoticed in the report
            dead_drags += 1;
            tracing::warn!(panel = id.0, ?down, "grab missed its panel");
        }

        for _ in 0..config.frames {
            for _ in 0..config.moves_per_frame {
                let at = walk.next_point();
                desk.handle_pointer(&mut surface, PointerInput::moved(pointer, at));
                events += 1;
            }
            desk.on_frame(&mut surface);
        }

        desk.handle_pointer(&mut surface, PointerInput::up(pointer, walk.next_point()));
        events += 1;

        // park the panel back on its slot so later grabs stay unobstructed
        desk.set_panel_rect(id, slot);
        desk.set_titlebar(id, Some(slot_titlebar(index)));
        surface.set_rect(id, slot);
    }

    let elapsed = started.elapsed().max(Duration::from_nanos(1));
    let stats = desk.coalesce_stats();
    let coalesce_ratio = if stats.frames_rendered == 0 {
        0.0
    } else {
        stats.samples_in as f64 / stats.frames_rendered as f64
    };

    let report = serde_json::json!({
        "panels": config.panels,
        "frames_per_drag": config.frames,
        "moves_per_frame": config.moves_per_frame,
        "events_routed": events,
        "events_per_sec": events as f64 / elapsed.as_secs_f64(),
        "elapsed_ms": elapsed.as_secs_f64() * 1000.0,
        "style_writes": surface.style_writes,
        "frame_requests": surface.frame_requests,
        "dead_drags": dead_drags,
        "coalesce": stats,
        "coalesce_ratio": coalesce_ratio,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
