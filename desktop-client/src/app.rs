use std::time::{Duration, Instant};

use common::game::{ControlEvent, Direction, GameSession};
use common::render::{Drawable, RenderOptions, Renderer};
use eframe::egui;

use crate::colors::{to_color32, BANNER_TEXT_COLOR, INFO_TEXT_COLOR};

// Driver cadence; actual moves are gated by the session's tick interval.
const FRAME_INTERVAL: Duration = Duration::from_millis(10);

const INFO_TEXT: &str = "Use Arrow Keys to Move";
const TEXT_MARGIN: f32 = 6.0;

pub struct GameApp {
    session: GameSession,
    options: RenderOptions,
    last_frame: Instant,
}

impl GameApp {
    pub fn new(session: GameSession, options: RenderOptions) -> Self {
        Self {
            session,
            options,
            last_frame: Instant::now(),
        }
    }

    fn handle_input(&mut self, ctx: &egui::Context) {
        ctx.input(|i| {
            let mut direction = None;

            if i.key_pressed(egui::Key::ArrowUp) {
                direction = Some(Direction::Up);
            } else if i.key_pressed(egui::Key::ArrowDown) {
                direction = Some(Direction::Down);
            } else if i.key_pressed(egui::Key::ArrowLeft) {
                direction = Some(Direction::Left);
            } else if i.key_pressed(egui::Key::ArrowRight) {
                direction = Some(Direction::Right);
            }

            if let Some(direction) = direction {
                self.session.handle_event(ControlEvent::Direction(direction));
            }
            if i.key_pressed(egui::Key::Escape) {
                self.session.handle_event(ControlEvent::TogglePause);
            }
            if i.key_pressed(egui::Key::Space) {
                self.session.handle_event(ControlEvent::Restart);
            }
        });
    }

    fn info_text(&self) -> String {
        if self.session.score() > 0 || self.session.has_interacted() {
            format!("score:  {}", self.session.score())
        } else {
            INFO_TEXT.to_string()
        }
    }
}

impl eframe::App for GameApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        let elapsed = now - self.last_frame;
        self.last_frame = now;

        self.handle_input(ctx);
        self.session.advance(elapsed);

        egui::CentralPanel::default().show(ctx, |ui| {
            let settings = self.session.settings();
            let canvas = egui::vec2(
                self.options.canvas_extent(settings.grid_width),
                self.options.canvas_extent(settings.grid_height),
            );

            let (response, painter) = ui.allocate_painter(canvas, egui::Sense::hover());
            let rect = response.rect;
            painter.rect_filled(rect, 0.0, to_color32(self.options.background));

            let mut renderer = CanvasRenderer {
                painter: &painter,
                origin: rect.min,
                options: &self.options,
            };
            renderer.render(&self.session.drawables());

            if let Some(text) = self.session.status_text() {
                painter.text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    text,
                    egui::FontId::monospace(42.0),
                    BANNER_TEXT_COLOR,
                );
            }

            painter.text(
                rect.right_bottom() - egui::vec2(TEXT_MARGIN, TEXT_MARGIN),
                egui::Align2::RIGHT_BOTTOM,
                self.info_text(),
                egui::FontId::monospace(12.0),
                INFO_TEXT_COLOR,
            );
        });

        ctx.request_repaint_after(FRAME_INTERVAL);
    }
}

struct CanvasRenderer<'a> {
    painter: &'a egui::Painter,
    origin: egui::Pos2,
    options: &'a RenderOptions,
}

impl Renderer for CanvasRenderer<'_> {
    fn render(&mut self, drawables: &[Drawable]) {
        for drawable in drawables {
            let min = egui::pos2(
                self.origin.x + self.options.pixel(drawable.grid_x),
                self.origin.y + self.options.pixel(drawable.grid_y),
            );
            let rect = egui::Rect::from_min_size(min, egui::vec2(drawable.width, drawable.height));
            self.painter.rect_filled(rect, 0.0, to_color32(drawable.color));
        }
    }
}
