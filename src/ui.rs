// ui.rs - egui front-end driving a Session
// Rendering, clicks, Start/Stop, Reset and delay control; all game logic stays behind SimulationBackend.

use std::time::{Duration, Instant};

use egui::{Color32, Pos2, Rect, Stroke, Vec2};
use log::warn;

use crate::backend::SimulationBackend;
use crate::config::{InitialField, RANDOM_DENSITY, SessionConfig};
use crate::error::GridResult;
use crate::grid::{Coord, GridEngine};
use crate::patterns::PATTERNS;
use crate::session::{MAX_DELAY, MIN_DELAY, Session};

const SPACING: f32 = 2.0;
const MAX_BOX_SIZE: f32 = 28.0;
const MIN_BOX_SIZE: f32 = 4.0;
const FIELD_PIXELS: f32 = 720.0;

pub struct LifeApp<B: SimulationBackend> {
    session: Session<B>,
    live_color: Color32,
    dead_color: Color32,
    selected_pattern: usize,
    next_seed: u64,
}

impl LifeApp<GridEngine> {
    /// Builds the engine and its starting field from a validated config.
    pub fn from_config(config: &SessionConfig) -> GridResult<Self> {
        let mut session = Session::new(GridEngine::new(config.size)?, config.delay);
        let mut next_seed = 0;
        match config.initial {
            InitialField::Empty => {}
            InitialField::Pattern(pattern, origin) => session.apply_pattern(pattern, origin)?,
            InitialField::Random { seed, density } => {
                session.randomize(seed, density)?;
                next_seed = seed.wrapping_add(1);
            }
        }
        Ok(Self::new(session, next_seed))
    }
}

impl<B: SimulationBackend> LifeApp<B> {
    pub fn new(session: Session<B>, next_seed: u64) -> Self {
        Self {
            session,
            live_color: Color32::from_rgb(255, 200, 0),
            dead_color: Color32::LIGHT_GRAY,
            selected_pattern: 0,
            next_seed,
        }
    }

    /// Side length of one cell on screen for a field of `size`
    pub fn box_size(size: usize) -> f32 {
        (FIELD_PIXELS / size as f32 - SPACING).clamp(MIN_BOX_SIZE, MAX_BOX_SIZE)
    }

    /// Inner window size that fits the field plus the control rows
    pub fn window_size(size: usize) -> [f32; 2] {
        let field = (Self::box_size(size) + SPACING) * size as f32;
        [field.max(640.0) + 32.0, field + 180.0]
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("Next Generation").clicked() {
                self.session.step();
            }

            let button_text = if self.session.is_running() { "⏸ Stop" } else { "▶ Start" };
            if ui.button(button_text).clicked() {
                self.session.toggle_running();
            }

            if ui.button("⏹ Reset").clicked() {
                self.session.reset();
            }

            if ui.button("🎲 Random").clicked() {
                if let Err(e) = self.session.randomize(self.next_seed, RANDOM_DENSITY) {
                    warn!("Random fill failed: {}", e);
                }
                self.next_seed = self.next_seed.wrapping_add(1);
            }

            ui.separator();

            ui.label("Pattern:");
            egui::ComboBox::from_id_source("pattern_selector")
                .selected_text(PATTERNS[self.selected_pattern].name)
                .show_ui(ui, |ui| {
                    for (i, pattern) in PATTERNS.iter().enumerate() {
                        ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                    }
                });

            if ui.button("Apply Pattern").clicked() {
                let pattern = &PATTERNS[self.selected_pattern];
                let origin = pattern.centred_origin(self.session.backend().size());
                if let Err(e) = self.session.apply_pattern(pattern, origin) {
                    warn!("Cannot place {}: {}", pattern.name, e);
                }
            }
        });

        ui.horizontal(|ui| {
            ui.label("Delay:");
            let mut delay_ms = self.session.delay().as_millis() as u64;
            let range = MIN_DELAY.as_millis() as u64..=MAX_DELAY.as_millis() as u64;
            if ui.add(egui::Slider::new(&mut delay_ms, range).suffix(" ms")).changed() {
                self.session.set_delay(Duration::from_millis(delay_ms));
            }

            ui.separator();

            ui.label("Live:");
            ui.color_edit_button_srgba(&mut self.live_color);
            ui.label("Dead:");
            ui.color_edit_button_srgba(&mut self.dead_color);
        });
    }

    fn field(&mut self, ui: &mut egui::Ui) {
        let size = self.session.backend().size();
        let box_size = Self::box_size(size);
        let pitch = box_size + SPACING;
        let total_size = Vec2::splat(pitch * size as f32 - SPACING);

        let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());
        let origin = response.rect.min;

        painter.rect_filled(response.rect, 0.0, Color32::from_gray(40));

        // Rows run down the screen, columns across.
        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                if let Some(coord) = cell_at(origin, pos, pitch, box_size, size) {
                    if let Err(e) = self.session.toggle_cell(coord) {
                        warn!("Ignoring click: {}", e);
                    }
                }
            }
        }

        for row in 0..size {
            for col in 0..size {
                let rect = Rect::from_min_size(
                    egui::pos2(origin.x + col as f32 * pitch, origin.y + row as f32 * pitch),
                    Vec2::splat(box_size),
                );
                let alive = cell_alive(&self.session, Coord::new(row as i32, col as i32));
                let cell_color = if alive { self.live_color } else { self.dead_color };

                painter.rect_filled(rect, 1.0, cell_color);
                painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(60)));
            }
        }
    }
}

/// State of a cell to draw; a failed query is logged and drawn as dead.
fn cell_alive<B: SimulationBackend>(session: &Session<B>, coord: Coord) -> bool {
    session.is_alive(coord).unwrap_or_else(|e| {
        warn!("Cannot draw cell: {}", e);
        false
    })
}

/// Maps a pointer position to the cell under it, ignoring the gaps between cells.
fn cell_at(origin: Pos2, pos: Pos2, pitch: f32, box_size: f32, size: usize) -> Option<Coord> {
    let local = pos - origin;
    if local.x < 0.0 || local.y < 0.0 {
        return None;
    }
    let (row, col) = ((local.y / pitch) as usize, (local.x / pitch) as usize);
    let inside_box = local.y - row as f32 * pitch <= box_size && local.x - col as f32 * pitch <= box_size;
    (row < size && col < size && inside_box).then(|| Coord::new(row as i32, col as i32))
}

impl<B: SimulationBackend> eframe::App for LifeApp<B> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.session.tick(now);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");
            self.controls(ui);
            ui.separator();
            self.field(ui);
            ui.separator();

            let size = self.session.backend().size();
            let live_cells = self.session.backend().live_cells();
            let total = size * size;
            ui.horizontal(|ui| {
                ui.label(format!("Generation: {}", self.session.generation()));
                ui.label(format!("Live cells: {}", live_cells));
                ui.label(format!("Population: {:.1}%", live_cells as f32 / total as f32 * 100.0));
            });
        });

        if let Some(wait) = self.session.time_to_next_tick(now) {
            ctx.request_repaint_after(wait);
        }
    }
}
