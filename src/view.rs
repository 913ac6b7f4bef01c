use raylib::core::text::measure_text;
use raylib::prelude::*;
use tracing::debug;

use crate::controller::Renderer;
use crate::layout::{Layout, Rect};
use crate::slide::Slide;

const ACCENT_START: Color = Color::new(0x66, 0x7e, 0xea, 255);
const ACCENT_END: Color = Color::new(0x76, 0x4b, 0xa2, 255);
const BACKGROUND: Color = Color::new(18, 18, 28, 255);
const MUTED: Color = Color::new(255, 255, 255, 77);
const PANEL: Color = Color::new(255, 255, 255, 26);
const SHADE: Color = Color::new(0, 0, 0, 230);

pub const HELP_ROWS: [(&str, &str); 7] = [
    ("Right / Down / Space", "Next slide"),
    ("Left / Up", "Previous slide"),
    ("Home", "First slide"),
    ("End", "Last slide"),
    ("F", "Toggle fullscreen"),
    ("H / ?", "Show this help"),
    ("Esc", "Close help"),
];

fn to_rectangle(rect: &Rect) -> Rectangle {
    Rectangle::new(rect.x, rect.y, rect.width, rect.height)
}

/// raylib window surface: the slides plus the widgets drawn over them.
pub struct SlideView {
    slides: Vec<Slide>,
    visible: Option<usize>,
    counter: String,
    progress: f32,
    indicator: Option<usize>,
    prev_enabled: bool,
    next_enabled: bool,
    help_visible: bool,
}

impl SlideView {
    pub fn new(slides: Vec<Slide>) -> Self {
        Self {
            slides,
            visible: None,
            counter: String::new(),
            progress: 0.0,
            indicator: None,
            prev_enabled: false,
            next_enabled: false,
            help_visible: false,
        }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn layout(&self, screen_width: f32, screen_height: f32) -> Layout {
        Layout::compute(screen_width, screen_height, self.slides.len(), self.indicator)
    }

    pub fn update(&mut self, dt: f32) {
        if let Some(slide) = self.visible.and_then(|i| self.slides.get_mut(i)) {
            slide.update(dt);
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        d.clear_background(BACKGROUND);

        let layout = self.layout(d.get_screen_width() as f32, d.get_screen_height() as f32);

        match self.visible.and_then(|i| self.slides.get(i)) {
            Some(slide) => slide.draw(d),
            None => {
                let screen = Rect::new(0.0, 0.0, layout.screen_width, layout.screen_height);
                draw_centered_text(d, &screen, "No slides loaded", 24, Color::RED);
            }
        }

        let bar = layout.progress_bar(self.progress);
        d.draw_rectangle_gradient_h(
            bar.x as i32,
            bar.y as i32,
            bar.width as i32,
            bar.height as i32,
            ACCENT_START,
            ACCENT_END,
        );

        for (i, dot) in layout.dots.iter().enumerate() {
            let color = if Some(i) == self.indicator {
                ACCENT_START
            } else {
                MUTED
            };
            d.draw_rectangle_rounded(to_rectangle(dot), 1.0, 8, color);
        }

        self.draw_button(d, &layout.previous_button, "<", self.prev_enabled);
        self.draw_button(d, &layout.next_button, ">", self.next_enabled);
        draw_centered_text(d, &layout.counter, &self.counter, 20, Color::WHITE);

        if self.help_visible {
            self.draw_help(d, &layout);
        }
    }

    fn draw_button(&self, d: &mut RaylibDrawHandle, rect: &Rect, label: &str, enabled: bool) {
        let (fill, text) = if enabled {
            (PANEL, Color::WHITE)
        } else {
            (Color::new(255, 255, 255, 10), MUTED)
        };
        d.draw_rectangle_rounded(to_rectangle(rect), 0.4, 8, fill);
        draw_centered_text(d, rect, label, 20, text);
    }

    fn draw_help(&self, d: &mut RaylibDrawHandle, layout: &Layout) {
        d.draw_rectangle(0, 0, layout.screen_width as i32, layout.screen_height as i32, SHADE);

        let panel = layout.help_panel;
        d.draw_rectangle_rounded(to_rectangle(&panel), 0.08, 12, PANEL);

        let left = panel.x as i32 + 40;
        let mut y = panel.y as i32 + 40;
        d.draw_text("Keyboard Shortcuts", left, y, 32, Color::WHITE);
        y += 60;

        let column = left + (panel.width as i32 - 80) / 3;
        for (keys, action) in HELP_ROWS {
            d.draw_text(keys, left, y, 16, Color::WHITE);
            d.draw_text(action, column, y, 16, Color::LIGHTGRAY);
            y += 31;
        }

        let footer = Rect::new(panel.x, y as f32 + 10.0, panel.width, 20.0);
        draw_centered_text(d, &footer, "Press any key to close", 16, Color::GRAY);
    }
}

fn draw_centered_text(d: &mut RaylibDrawHandle, rect: &Rect, text: &str, size: i32, color: Color) {
    let width = measure_text(text, size);
    let x = rect.x as i32 + (rect.width as i32 - width) / 2;
    let y = rect.y as i32 + (rect.height as i32 - size) / 2;
    d.draw_text(text, x, y, size, color);
}

impl Renderer for SlideView {
    fn show(&mut self, index: usize) {
        for (i, slide) in self.slides.iter_mut().enumerate() {
            slide.visible = i == index;
        }
        if let Some(slide) = self.slides.get_mut(index) {
            debug!(path = %slide.path.display(), "showing slide");
            slide.start_entrance();
        }
        self.visible = Some(index);
    }

    fn set_counter(&mut self, label: &str) {
        self.counter = label.to_string();
    }

    fn set_progress(&mut self, percent: f32) {
        self.progress = percent;
    }

    fn set_indicator(&mut self, active: usize) {
        self.indicator = Some(active);
    }

    fn set_button_states(&mut self, prev_enabled: bool, next_enabled: bool) {
        self.prev_enabled = prev_enabled;
        self.next_enabled = next_enabled;
    }

    fn set_help_visible(&mut self, visible: bool) {
        self.help_visible = visible;
    }
}
