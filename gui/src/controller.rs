//! Selection and navigation state machine.
//!
//! The controller owns the organizer tree plus all transient UI state and
//! consumes [`InputEvent`]s one at a time. Frontends never mutate state
//! directly; they feed events in and read the scene, widgets and highlights
//! back out.

use crate::event::{InputEvent, Motion};
use crate::layout::{self, OrganizerLayout};
use crate::scene::{Group, Label, Mesh, Scene, SceneRect};
use crate::theme::Palette;
use crate::widgets::{ResultList, TextField};
use gaveta_core::config::LayoutConfig;
use gaveta_core::{AppConfig, DrawerId, Item, ItemName, Organizer};
use gaveta_search::{QueryOutcome, SearchConfig, SearchEngine, SearchHit};

/// Highlight flavor a drawer can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    /// Matched by the current search, or under keyboard focus.
    Found,
    /// Actively chosen.
    Selected,
}

/// Discrete UI state, derived from the controller's fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiState {
    Idle,
    DrawerHighlighted,
    DrawerSelected,
    Renaming,
    SearchMode,
}

pub struct Controller {
    organizer: Organizer,
    layout_config: LayoutConfig,
    palette: Palette,
    engine: SearchEngine,
    field: TextField,
    list: ResultList,
    layout: Option<OrganizerLayout>,
    prev_w: f32,
    prev_h: f32,
    active: Option<DrawerId>,
    drawer_selected: bool,
    renaming: bool,
    searching: bool,
    /// Raw text field content while no drawer is selected; non-empty means
    /// motions go to the result list even when the query was too short.
    search_text: String,
    /// One hit per result-list row while searching.
    search_hits: Vec<SearchHit>,
    /// Drawers carrying the found highlight.
    found: Vec<DrawerId>,
}

impl Controller {
    /// Builds a controller around a loaded organizer.
    ///
    /// `font_height` comes from the frontend's font metrics and fixes the
    /// text field and result list row heights.
    pub fn new(organizer: Organizer, config: &AppConfig, font_height: f32) -> Self {
        let margin_frac = config.layout.text_field_margin;
        Self {
            field: TextField::new(font_height, margin_frac),
            list: ResultList::new(font_height, margin_frac),
            engine: SearchEngine::new(SearchConfig {
                min_query_len: config.search.min_query_len,
            }),
            palette: Palette::from_config(&config.colors),
            layout_config: config.layout,
            organizer,
            layout: None,
            prev_w: 0.0,
            prev_h: 0.0,
            active: None,
            drawer_selected: false,
            renaming: false,
            searching: false,
            search_text: String::new(),
            search_hits: Vec::new(),
            found: Vec::new(),
        }
    }
}

/// Read operations.
impl Controller {
    pub fn organizer(&self) -> &Organizer {
        &self.organizer
    }

    pub fn layout(&self) -> Option<&OrganizerLayout> {
        self.layout.as_ref()
    }

    pub fn text_field(&self) -> &TextField {
        &self.field
    }

    pub fn result_list(&self) -> &ResultList {
        &self.list
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn active_drawer(&self) -> Option<DrawerId> {
        self.active
    }

    pub fn state(&self) -> UiState {
        if self.renaming {
            UiState::Renaming
        } else if self.drawer_selected {
            UiState::DrawerSelected
        } else if self.active.is_some() {
            UiState::DrawerHighlighted
        } else if self.searching {
            UiState::SearchMode
        } else {
            UiState::Idle
        }
    }

    /// Highlight the given drawer currently carries, if any.
    ///
    /// At most one drawer carries [`Highlight::Selected`]: either the active
    /// drawer while drilled in, or the owner of the result-list cursor row
    /// while searching.
    pub fn drawer_highlight(&self, id: DrawerId) -> Option<Highlight> {
        if let Some(row) = self.list.selected() {
            if self.search_hits.get(row).map(|hit| hit.drawer) == Some(id) {
                return Some(Highlight::Selected);
            }
        }
        if self.active == Some(id) {
            return Some(if self.drawer_selected {
                Highlight::Selected
            } else {
                Highlight::Found
            });
        }
        if self.found.contains(&id) {
            return Some(Highlight::Found);
        }
        None
    }
}

/// Event handling.
impl Controller {
    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::Click { x, y } => self.on_click(x, y),
            InputEvent::Enter => self.on_enter(),
            InputEvent::Motion(motion) => self.on_motion(motion),
            InputEvent::TextChanged(text) => self.on_text_changed(text),
            InputEvent::Cancel => self.on_cancel(),
            InputEvent::Resize { width, height } => self.on_resize(width, height),
        }
    }

    fn on_resize(&mut self, width: f32, height: f32) {
        if width == self.prev_w && height == self.prev_h {
            return;
        }
        self.prev_w = width;
        self.prev_h = height;
        // Degenerate sizes leave the previous geometry in place.
        if let Some(layout) = layout::compute_layout(
            &self.organizer,
            width,
            height,
            self.field.height(),
            &self.layout_config,
        ) {
            self.field.set_position(
                layout.text_field.x,
                layout.text_field.y,
                layout.text_field.width,
            );
            self.list.set_region(
                layout.list_x,
                layout.list_top,
                layout.list_width,
                layout.list_max_height,
            );
            self.layout = Some(layout);
        }
    }

    fn on_click(&mut self, x: f32, y: f32) {
        let target = self
            .layout
            .as_ref()
            .and_then(|layout| layout.drawer_at(x, y));
        if target == self.active {
            return;
        }
        self.renaming = false;
        self.field.clear();
        self.activate(target, true);
    }

    fn on_enter(&mut self) {
        let text = self.field.text().trim().to_string();
        let selected = self.list.selected();
        self.field.clear();

        if !text.is_empty() {
            if self.drawer_selected {
                if self.renaming {
                    self.commit_rename(selected, &text);
                    self.renaming = false;
                } else if let Some(id) = self.active {
                    // Names past the length cap are dropped, not truncated.
                    if let Ok(name) = ItemName::try_new(text) {
                        if let Some(drawer) = self.organizer.drawer_mut(id) {
                            drawer.add_item(Item::new(name, None));
                        }
                    }
                }
                if let Some(id) = self.active {
                    self.refresh_list(id);
                }
            } else if let Some(row) = selected {
                // Commit the search cursor: jump into the row's drawer.
                if let Some(id) = self.search_hits.get(row).map(|hit| hit.drawer) {
                    self.activate(Some(id), true);
                }
            } else {
                self.clear_state();
                self.engine.reset();
            }
        } else if let Some(id) = self.active {
            if self.drawer_selected {
                if let Some(row) = selected {
                    if self.renaming {
                        // Leaving rename without text discards the edit.
                        self.renaming = false;
                    } else if let Some(name) = self.item_name(id, row) {
                        self.renaming = true;
                        self.field.set_text(name);
                    }
                } else {
                    self.drawer_selected = false;
                }
            } else {
                self.drawer_selected = true;
                self.refresh_list(id);
            }
        }
    }

    fn on_motion(&mut self, motion: Motion) {
        if self.renaming {
            return;
        }
        if self.drawer_selected || !self.search_text.is_empty() {
            self.list_motion(motion);
        } else if self.active.is_none() {
            // First motion enters the grid at the origin cabinet.
            if let Some(id) = self.origin_drawer() {
                self.activate(Some(id), false);
            }
        } else {
            self.spatial_motion(motion);
        }
    }

    fn on_text_changed(&mut self, text: String) {
        self.field.set_text(text.clone());
        // While drilled into a drawer the field holds item names, not queries.
        if self.drawer_selected {
            return;
        }
        self.run_search(text);
    }

    fn on_cancel(&mut self) {
        self.clear_state();
        self.engine.reset();
        self.field.clear();
        self.renaming = false;
    }
}

/// Internal transitions.
impl Controller {
    /// Drops every selection, highlight and search artifact.
    fn clear_state(&mut self) {
        self.found.clear();
        self.search_hits.clear();
        self.list.clear();
        self.active = None;
        self.drawer_selected = false;
        self.searching = false;
        self.search_text.clear();
    }

    /// Makes `target` the active drawer, either merely highlighted or
    /// drilled into its item list.
    fn activate(&mut self, target: Option<DrawerId>, selected: bool) {
        self.clear_state();
        self.engine.reset();
        match target {
            Some(id) => {
                self.active = Some(id);
                self.drawer_selected = selected;
                self.refresh_list(id);
            }
            None => self.field.clear(),
        }
    }

    /// Reloads the list with the active drawer's item names.
    fn refresh_list(&mut self, id: DrawerId) {
        let names: Vec<String> = self
            .organizer
            .drawer(id)
            .map(|drawer| {
                drawer
                    .items()
                    .iter()
                    .map(|item| item.name().to_string())
                    .collect()
            })
            .unwrap_or_default();
        self.list.set_entries(names);
    }

    fn item_name(&self, id: DrawerId, row: usize) -> Option<String> {
        self.organizer
            .drawer(id)
            .and_then(|drawer| drawer.items().get(row))
            .map(|item| item.name().to_string())
    }

    fn commit_rename(&mut self, row: Option<usize>, text: &str) {
        let (Some(row), Some(id)) = (row, self.active) else {
            return;
        };
        if let Ok(name) = ItemName::try_new(text.to_string()) {
            if let Some(item) = self
                .organizer
                .drawer_mut(id)
                .and_then(|drawer| drawer.item_mut(row))
            {
                item.rename(name);
            }
        }
    }

    fn run_search(&mut self, text: String) {
        match self.engine.query(&self.organizer, &text) {
            QueryOutcome::Unchanged => {}
            QueryOutcome::Cleared => {
                self.clear_state();
                self.search_text = text;
            }
            QueryOutcome::Matched(results) => {
                self.clear_state();
                self.search_text = text;
                self.searching = true;
                self.found = results.drawers();
                let names: Vec<String> = results
                    .hits()
                    .iter()
                    .filter_map(|hit| {
                        self.organizer
                            .drawer(hit.drawer)
                            .and_then(|drawer| drawer.items().get(hit.item))
                            .map(|item| item.name().to_string())
                    })
                    .collect();
                self.search_hits = results.hits().to_vec();
                self.list.set_entries(names);
            }
        }
    }

    fn list_motion(&mut self, motion: Motion) {
        match motion {
            Motion::Down => self.list.select_down(),
            Motion::Up => self.list.select_up(),
            Motion::Delete => self.delete_selected(),
            Motion::Left | Motion::Right => {}
        }
    }

    /// Removes the item under the cursor from its owning drawer and
    /// re-clamps the cursor.
    fn delete_selected(&mut self) {
        let Some(row) = self.list.selected() else {
            return;
        };
        if self.drawer_selected {
            let Some(id) = self.active else {
                return;
            };
            if let Some(drawer) = self.organizer.drawer_mut(id) {
                drawer.remove_item(row);
            }
            self.refresh_list(id);
            self.list.select_clamped(Some(row));
        } else if let Some(hit) = self.search_hits.get(row).copied() {
            if let Some(drawer) = self.organizer.drawer_mut(hit.drawer) {
                drawer.remove_item(hit.item);
            }
            // Re-run the query so hits and highlights match the tree again.
            let text = self.search_text.clone();
            self.engine.reset();
            self.run_search(text);
            self.list.select_clamped(Some(row));
        }
    }

    fn origin_drawer(&self) -> Option<DrawerId> {
        let cabinet = self.organizer.cabinet_at(0, 0)?;
        let count = self.organizer.cabinet(cabinet)?.drawers().len();
        (count > 0).then(|| DrawerId::new(cabinet, count - 1))
    }

    fn spatial_motion(&mut self, motion: Motion) {
        let Some(current) = self.active else {
            return;
        };
        let Some(cabinet) = self.organizer.cabinet(current.cabinet) else {
            return;
        };
        let count = cabinet.drawers().len();
        let (x, y, w, h) = (cabinet.x, cabinet.y, cabinet.w, cabinet.h);

        let target = match motion {
            Motion::Down => {
                if current.drawer + 1 < count {
                    Some(DrawerId::new(current.cabinet, current.drawer + 1))
                } else {
                    // Below the stack: enter the top drawer of the cabinet
                    // underneath.
                    y.checked_sub(1)
                        .and_then(|below| self.organizer.cabinet_at(x, below))
                        .map(|c| DrawerId::new(c, 0))
                }
            }
            Motion::Up => {
                if current.drawer > 0 {
                    Some(DrawerId::new(current.cabinet, current.drawer - 1))
                } else {
                    // Above the stack: enter the bottom drawer of the cabinet
                    // overhead.
                    self.organizer.cabinet_at(x, y + h).and_then(|c| {
                        let n = self.organizer.cabinet(c)?.drawers().len();
                        (n > 0).then(|| DrawerId::new(c, n - 1))
                    })
                }
            }
            Motion::Left => x
                .checked_sub(1)
                .and_then(|left| self.neighbor(left, y, current.drawer, count)),
            Motion::Right => self.neighbor(x + w, y, current.drawer, count),
            Motion::Delete => None,
        };

        // Boundaries are no-ops, not errors.
        if let Some(id) = target {
            self.activate(Some(id), false);
        }
    }

    /// Proportionally maps the drawer index into the neighbor cabinet's
    /// stack.
    fn neighbor(&self, x: u32, y: u32, index: usize, count: usize) -> Option<DrawerId> {
        let cabinet = self.organizer.cabinet_at(x, y)?;
        let n = self.organizer.cabinet(cabinet)?.drawers().len();
        (n > 0 && count > 0).then(|| DrawerId::new(cabinet, index * n / count))
    }
}

/// Scene assembly.
impl Controller {
    /// Builds the draw list for the current state.
    pub fn scene(&self) -> Scene {
        let mut scene = Scene::new(self.palette.background);
        let Some(layout) = &self.layout else {
            return scene;
        };

        scene.rects.push(SceneRect {
            rect: layout.organizer,
            color: self.palette.cabinet,
            group: Group::Background,
        });

        for (c, cabinet) in layout.cabinets.iter().enumerate() {
            for (d, drawer) in cabinet.drawers.iter().enumerate() {
                let id = DrawerId::new(c, d);
                let (face, handle) = match self.drawer_highlight(id) {
                    Some(Highlight::Selected) => (
                        self.palette.drawer.add(self.palette.select_mask),
                        self.palette.handle.add(self.palette.select_mask),
                    ),
                    Some(Highlight::Found) => (
                        self.palette.drawer.add(self.palette.highlight_mask),
                        self.palette.handle.add(self.palette.highlight_mask),
                    ),
                    None => (self.palette.drawer, self.palette.handle),
                };
                scene.rects.push(SceneRect {
                    rect: drawer.rect,
                    color: face,
                    group: Group::Mid,
                });
                scene.meshes.push(Mesh {
                    vertices: drawer.handle.clone(),
                    color: handle,
                    group: Group::Front,
                });
            }
        }

        // Field backdrop; the field text itself is drawn by the frontend.
        scene.rects.push(SceneRect {
            rect: self.field.rect(),
            color: self.palette.text_input,
            group: Group::Background,
        });

        let list_bg = self.list.background_rect();
        if list_bg.height > 0.0 {
            scene.rects.push(SceneRect {
                rect: list_bg,
                color: self.palette.item_list,
                group: Group::Background,
            });
        }
        if let Some(row) = self.list.selected() {
            scene.rects.push(SceneRect {
                rect: self.list.row_rect(row),
                color: self.palette.item_select,
                group: Group::Mid,
            });
        }
        let text = self.list.label_text();
        if !text.is_empty() {
            let (x, y) = self.list.label_origin();
            scene.labels.push(Label {
                text,
                x,
                y,
                width: self.list.label_width(),
                color: self.palette.item_font,
                group: Group::Front,
            });
        }

        scene
    }
}
