// SPDX-License-Identifier: MIT OR Apache-2.0
//! Carousel rendering with egui.
//!
//! Features:
//! - Banner area with per-slide placeholder artwork
//! - Title/subtitle/call-to-action overlay for the active slide
//! - Indicator dot row (direct slide selection)
//! - Play/pause control
//!
//! The widget is a pure rendering of carousel state plus event routing:
//! pointer press/release and hover transitions inside the banner feed the
//! carousel's handlers, matching the behavior of handlers attached to a
//! single container. Controls are only rendered for multi-slide decks.

use crate::carousel::Carousel;
use crate::slide::Slide;
use egui::{Align2, Color32, FontId, Pos2, Rect, RichText, Sense, Stroke, Vec2};
use std::time::Duration;

const BANNER_HEIGHT: f32 = 340.0;
const OVERLAY_INSET: f32 = 32.0;
const DOT_RADIUS: f32 = 6.0;
const DOT_SPACING: f32 = 20.0;
const DOT_ROW_BOTTOM_MARGIN: f32 = 22.0;
const CONTROL_SIZE: f32 = 30.0;
const CONTROL_MARGIN: f32 = 18.0;

const TITLE_COLOR: Color32 = Color32::from_rgb(0xba, 0x9a, 0x71);
const SUBTITLE_COLOR: Color32 = Color32::from_gray(235);
const ACTIVE_DOT_COLOR: Color32 = Color32::from_rgb(0xf9, 0x73, 0x16);
const IDLE_DOT_COLOR: Color32 = Color32::from_gray(150);

/// Renders a [`Carousel`] and routes egui input back into it.
#[derive(Debug, Default)]
pub struct CarouselWidget {
    /// Hover state from the previous frame, for enter/leave edge detection
    hovering: bool,
}

impl CarouselWidget {
    /// Create a new widget
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the carousel and route input.
    ///
    /// `now` is the elapsed time from the host's epoch; the widget polls
    /// the carousel's advance task before drawing.
    pub fn ui(&mut self, ui: &mut egui::Ui, carousel: &mut Carousel, now: Duration) {
        carousel.tick(now);

        let width = ui.available_width();
        let (rect, _response) =
            ui.allocate_exact_size(Vec2::new(width, BANNER_HEIGHT), Sense::click_and_drag());

        self.route_input(ui, rect, carousel, now);

        let slide = carousel.current_slide().clone();
        self.draw_banner(ui, rect, &slide);

        if carousel.is_multi_slide() {
            self.draw_dots(ui, rect, carousel, now);
            self.draw_play_pause(ui, rect, carousel, now);
        }
    }

    /// Feed hover transitions and pointer press/release into the carousel.
    fn route_input(&mut self, ui: &egui::Ui, rect: Rect, carousel: &mut Carousel, now: Duration) {
        // Hover tracks the banner rect itself, not widget focus, so the
        // overlaid dots and play/pause control count as "inside" exactly
        // like children of one container would.
        let hovered = ui.input(|input| {
            input
                .pointer
                .latest_pos()
                .is_some_and(|pos| rect.contains(pos))
        });
        if hovered && !self.hovering {
            carousel.hover_enter(now);
        }
        if !hovered && self.hovering {
            carousel.hover_leave(now);
        }
        self.hovering = hovered;

        let (pressed_at, released_at) = ui.input(|input| {
            let pressed = input
                .pointer
                .any_pressed()
                .then(|| input.pointer.interact_pos())
                .flatten();
            let released = input
                .pointer
                .any_released()
                .then(|| input.pointer.latest_pos())
                .flatten();
            (pressed, released)
        });

        if let Some(pos) = pressed_at {
            if rect.contains(pos) {
                carousel.pointer_down(pos.x, now);
            }
        }
        // A release closes the bracket wherever it lands; releases with
        // no bracket open are no-ops inside the carousel.
        if let Some(pos) = released_at {
            carousel.pointer_up(pos.x, now);
        }
    }

    /// Draw the banner artwork placeholder and the content overlay.
    fn draw_banner(&self, ui: &mut egui::Ui, rect: Rect, slide: &Slide) {
        let painter = ui.painter();
        painter.rect_filled(rect, 4.0, placeholder_color(slide));
        painter.rect_stroke(rect, 4.0, Stroke::new(1.0, Color32::from_gray(60)));

        // Artwork reference, faint, bottom-left corner.
        painter.text(
            rect.left_bottom() + Vec2::new(8.0, -6.0),
            Align2::LEFT_BOTTOM,
            &slide.image_url,
            FontId::monospace(10.0),
            Color32::from_gray(120),
        );

        let mut cursor = rect.left_top() + Vec2::new(OVERLAY_INSET, OVERLAY_INSET * 2.0);

        if let Some(title) = &slide.title {
            painter.text(
                cursor,
                Align2::LEFT_TOP,
                title,
                FontId::proportional(34.0),
                TITLE_COLOR,
            );
            cursor.y += 46.0;
        }

        if let Some(subtitle) = &slide.subtitle {
            painter.text(
                cursor,
                Align2::LEFT_TOP,
                subtitle,
                FontId::proportional(18.0),
                SUBTITLE_COLOR,
            );
            cursor.y += 32.0;
        }

        if let (Some(text), Some(link)) = (&slide.button_text, &slide.link) {
            let fill = slide
                .button_color
                .map_or(ACTIVE_DOT_COLOR, |[r, g, b]| Color32::from_rgb(r, g, b));
            let button_rect = Rect::from_min_size(
                Pos2::new(cursor.x, cursor.y + 8.0),
                Vec2::new(140.0, 32.0),
            );
            let button = egui::Button::new(RichText::new(text).color(Color32::WHITE)).fill(fill);
            if ui.put(button_rect, button).clicked() {
                let new_tab = slide.target.as_deref() == Some("_blank");
                ui.ctx().open_url(egui::OpenUrl {
                    url: link.clone(),
                    new_tab,
                });
            }
        }
    }

    /// Draw the indicator dot row; clicking dot `k` selects slide `k`.
    fn draw_dots(&self, ui: &mut egui::Ui, rect: Rect, carousel: &mut Carousel, now: Duration) {
        let count = carousel.deck().len();
        let row_width = (count as f32 - 1.0) * DOT_SPACING;
        let origin = Pos2::new(
            rect.center().x - row_width / 2.0,
            rect.bottom() - DOT_ROW_BOTTOM_MARGIN,
        );

        let mut selected = None;
        for index in 0..count {
            let center = Pos2::new(origin.x + index as f32 * DOT_SPACING, origin.y);
            let dot_rect = Rect::from_center_size(center, Vec2::splat(DOT_RADIUS * 2.5));
            let dot_response = ui.interact(
                dot_rect,
                ui.id().with(("carousel_dot", index)),
                Sense::click(),
            );

            let color = if index == carousel.current_index() {
                ACTIVE_DOT_COLOR
            } else if dot_response.hovered() {
                Color32::from_gray(220)
            } else {
                IDLE_DOT_COLOR
            };
            ui.painter().circle_filled(center, DOT_RADIUS, color);

            if dot_response.clicked() {
                selected = Some(index);
            }
        }

        if let Some(index) = selected {
            carousel.select(index, now);
        }
    }

    /// Draw the play/pause control reflecting the derived playing flag.
    fn draw_play_pause(
        &self,
        ui: &mut egui::Ui,
        rect: Rect,
        carousel: &mut Carousel,
        now: Duration,
    ) {
        let control_rect = Rect::from_center_size(
            Pos2::new(
                rect.right() - CONTROL_MARGIN - CONTROL_SIZE / 2.0,
                rect.bottom() - CONTROL_MARGIN - CONTROL_SIZE / 2.0,
            ),
            Vec2::splat(CONTROL_SIZE),
        );

        let icon = if carousel.is_playing() { "⏸" } else { "▶" };
        let button = egui::Button::new(icon).rounding(CONTROL_SIZE / 2.0);
        if ui
            .put(control_rect, button)
            .on_hover_text("Play/Pause")
            .clicked()
        {
            carousel.toggle_playback(now);
        }
    }
}

/// Deterministic placeholder color derived from the slide identity, used
/// in place of the banner artwork.
fn placeholder_color(slide: &Slide) -> Color32 {
    let bytes = slide.id.0.as_bytes();
    Color32::from_rgb(
        30 + bytes[0] % 60,
        30 + bytes[1] % 60,
        40 + bytes[2] % 70,
    )
}
