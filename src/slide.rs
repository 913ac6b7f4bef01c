use std::path::PathBuf;

use raylib::prelude::*;

use crate::constants::*;
use crate::layout::fit_scale;

/// Fade-in-scale played when a slide becomes the visible one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entrance {
    timer: f32,
    pub is_animating: bool,
}

impl Entrance {
    pub fn new() -> Self {
        Self {
            timer: ANIMATION_DURATION,
            is_animating: false,
        }
    }

    pub fn start(&mut self) {
        self.timer = 0.0;
        self.is_animating = true;
    }

    pub fn update(&mut self, dt: f32) {
        if !self.is_animating {
            return;
        }
        self.timer += dt;
        if self.timer >= ANIMATION_DURATION {
            self.timer = ANIMATION_DURATION;
            self.is_animating = false;
        }
    }

    fn progress(&self) -> f32 {
        let t = (self.timer / ANIMATION_DURATION).min(1.0);
        1.0 - (1.0 - t).powi(3) // easeOutCubic
    }

    pub fn opacity(&self) -> f32 {
        self.progress()
    }

    pub fn scale(&self) -> f32 {
        raylib::core::math::lerp(ENTRANCE_START_SCALE, 1.0, self.progress())
    }
}

impl Default for Entrance {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Slide {
    image: Texture2D,
    pub path: PathBuf,
    pub visible: bool,
    entrance: Entrance,
}

impl Slide {
    pub fn new(image: Texture2D, path: PathBuf) -> Self {
        Self {
            image,
            path,
            visible: false,
            entrance: Entrance::new(),
        }
    }

    pub fn start_entrance(&mut self) {
        self.entrance.start();
    }

    pub fn update(&mut self, dt: f32) {
        self.entrance.update(dt);
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        if !self.visible {
            return;
        }

        let screen_width = d.get_screen_width() as f32;
        let screen_height = d.get_screen_height() as f32;

        let tex_width = self.image.width() as f32;
        let tex_height = self.image.height() as f32;

        let scale =
            fit_scale(tex_width, tex_height, screen_width, screen_height) * self.entrance.scale();
        let scaled_width = tex_width * scale;
        let scaled_height = tex_height * scale;

        let origin = Vector2::new(scaled_width / 2.0, scaled_height / 2.0);
        let alpha = (self.entrance.opacity() * 255.0) as u8;

        d.draw_texture_pro(
            &self.image,
            Rectangle::new(0.0, 0.0, tex_width, tex_height),
            Rectangle::new(screen_width * 0.5, screen_height * 0.5, scaled_width, scaled_height),
            origin,
            0.0,
            Color::new(255, 255, 255, alpha),
        );
    }
}
