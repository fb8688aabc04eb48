//! Grid-to-pixel geometry.
//!
//! Everything here works in pixels with the origin at the bottom-left corner
//! of the window and y growing upward. The organizer grid is scaled to fit
//! the window while preserving its aspect ratio; the text field and result
//! list take whichever strip of the window the grid leaves free.

use gaveta_core::config::LayoutConfig;
use gaveta_core::{Cabinet, DrawerId, Organizer};

/// Axis-aligned rectangle anchored at its bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    /// Inclusive on all four edges.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.top()
    }
}

/// Geometry of one drawer: its face and the handle decoration.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawerLayout {
    pub rect: Rect,
    /// Handle triangle list, three vertices per triangle.
    pub handle: Vec<[f32; 2]>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CabinetLayout {
    pub rect: Rect,
    pub drawers: Vec<DrawerLayout>,
}

/// Full pixel geometry derived from one window size.
#[derive(Debug, Clone, PartialEq)]
pub struct OrganizerLayout {
    /// Scaled grid area.
    pub organizer: Rect,
    /// Text field backdrop; the height is the field's fixed height.
    pub text_field: Rect,
    pub list_x: f32,
    /// Top edge of the result list; rows grow downward from here.
    pub list_top: f32,
    pub list_width: f32,
    pub list_max_height: f32,
    pub cabinets: Vec<CabinetLayout>,
}

impl OrganizerLayout {
    /// Drawer whose face contains the pixel, if any.
    pub fn drawer_at(&self, x: f32, y: f32) -> Option<DrawerId> {
        for (c, cabinet) in self.cabinets.iter().enumerate() {
            for (d, drawer) in cabinet.drawers.iter().enumerate() {
                if drawer.rect.contains(x, y) {
                    return Some(DrawerId::new(c, d));
                }
            }
        }
        None
    }

    pub fn drawer(&self, id: DrawerId) -> Option<&DrawerLayout> {
        self.cabinets.get(id.cabinet)?.drawers.get(id.drawer)
    }
}

/// Computes the full layout for a window size.
///
/// Returns `None` on degenerate input (a zero window dimension, a zero grid
/// axis, or a cabinet without drawers); the caller keeps its previous layout
/// in that case.
pub fn compute_layout(
    organizer: &Organizer,
    window_w: f32,
    window_h: f32,
    field_height: f32,
    config: &LayoutConfig,
) -> Option<OrganizerLayout> {
    if window_w <= 0.0 || window_h <= 0.0 {
        return None;
    }
    let grid_w = organizer.width() as f32;
    let grid_h = organizer.height() as f32;
    if grid_w == 0.0 || grid_h == 0.0 {
        return None;
    }
    if organizer
        .cabinets()
        .iter()
        .any(|cabinet| cabinet.drawers().is_empty())
    {
        return None;
    }

    let margin = config.window_margin;
    let organizer_rect;
    let text_x;
    let text_y;
    let text_w;
    let list_top;
    if window_w / window_h >= grid_w / grid_h {
        // Height-constrained: the grid fills the window height and the text
        // column takes the strip to its right.
        let height = window_h * (1.0 - 2.0 * margin);
        let width = height * grid_w / grid_h;
        let origin = window_h * margin;
        organizer_rect = Rect::new(origin, origin, width, height);
        text_x = width + 2.0 * origin;
        text_y = window_h * (1.0 - margin) - field_height;
        text_w = (window_w - text_x - origin).max(0.0);
        list_top = text_y - window_h * config.list_offset;
    } else {
        // Width-constrained: the grid fills the window width at the top and
        // the text field sits underneath.
        let width = window_w * (1.0 - 2.0 * margin);
        let height = width * grid_h / grid_w;
        let origin = window_w * margin;
        organizer_rect = Rect::new(origin, window_h - height - origin, width, height);
        text_x = origin;
        text_y = window_h - height - 2.0 * origin - field_height;
        text_w = width;
        list_top = text_y - window_w * config.list_offset;
    }
    let list_max_height = (list_top - window_h * margin).max(0.0);

    let block = organizer_rect.width / grid_w;
    let cabinet_margin = block * config.box_margin;
    let drawer_margin = block * config.drawer_margin;
    let handle_height = block * config.handle_height;
    let handle_thickness = block * config.handle_thickness;

    let cabinets = organizer
        .cabinets()
        .iter()
        .map(|cabinet| {
            let rect = Rect::new(
                cabinet.x as f32 * block + organizer_rect.x,
                cabinet.y as f32 * block + organizer_rect.y,
                cabinet.w as f32 * block,
                cabinet.h as f32 * block,
            );
            let drawers = drawer_layouts(
                cabinet,
                rect,
                cabinet_margin,
                drawer_margin,
                config.handle_width,
                handle_height,
                handle_thickness,
            );
            CabinetLayout { rect, drawers }
        })
        .collect();

    Some(OrganizerLayout {
        organizer: organizer_rect,
        text_field: Rect::new(text_x, text_y, text_w, field_height),
        list_x: text_x,
        list_top,
        list_width: text_w,
        list_max_height,
        cabinets,
    })
}

fn drawer_layouts(
    cabinet: &Cabinet,
    rect: Rect,
    cabinet_margin: f32,
    drawer_margin: f32,
    handle_width: f32,
    handle_height: f32,
    handle_thickness: f32,
) -> Vec<DrawerLayout> {
    let count = cabinet.drawers().len();
    let module_h = (rect.height - 2.0 * cabinet_margin) / count as f32;
    let drawer_w = rect.width - 2.0 * (cabinet_margin + drawer_margin);
    let drawer_h = module_h - 2.0 * drawer_margin;
    let drawer_x = rect.x + cabinet_margin + drawer_margin;
    let module_y = rect.y + cabinet_margin + drawer_margin;

    (0..count)
        .map(|i| {
            // Drawer 0 is the top of the stack, so it takes the highest module.
            let drawer_y = module_y + (count - 1 - i) as f32 * module_h;
            let rect = Rect::new(drawer_x, drawer_y, drawer_w, drawer_h);
            let handle = handle_triangles(rect, handle_width, handle_height, handle_thickness);
            DrawerLayout { rect, handle }
        })
        .collect()
}

/// Handle silhouette: four triangles forming a trapezoid hanging under the
/// drawer's bottom edge plus two forming a thin bar along it.
fn handle_triangles(rect: Rect, width_frac: f32, height: f32, thickness: f32) -> Vec<[f32; 2]> {
    let hw = rect.width * width_frac;
    let hh = height;
    let ht = thickness;
    let ox = rect.x + (rect.width - hw) / 2.0;
    let y = rect.y;

    vec![
        [ox, y],
        [ox + hh, y],
        [ox + hh, y - hh],
        [ox + hh, y - hh],
        [ox + hh, y],
        [ox + hw - hh, y],
        [ox + hh, y - hh],
        [ox + hw - hh, y],
        [ox + hw - hh, y - hh],
        [ox + hw, y],
        [ox + hw - hh, y],
        [ox + hw - hh, y - hh],
        [ox, y],
        [ox, y + ht],
        [ox + hw, y],
        [ox + hw, y],
        [ox, y + ht],
        [ox + hw, y + ht],
    ]
}
