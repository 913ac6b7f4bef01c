use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use raylib::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod app;
mod config;
mod constants;
mod controller;
mod error;
mod input;
mod layout;
mod slide;
mod state;
mod store;
mod texture_loader;
mod view;
mod window;

use crate::app::{Presentation, toggle_fullscreen};
use crate::config::{Settings, load_settings};
use crate::controller::PresentationController;
use crate::error::SlidedeckError;
use crate::input::SwipeTracker;
use crate::slide::Slide;
use crate::store::{FileStore, MemoryStore, PositionStore};
use crate::texture_loader::{load_sorted_slide_paths, load_textures};
use crate::view::SlideView;
use crate::window::pressed_keys;

/// Present a directory of slide images.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Directory holding the slides, shown in file-name order
    slides_dir: PathBuf,
    /// Config file (defaults to ./slidedeck.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Where the last shown slide is remembered
    #[arg(long)]
    state_dir: Option<PathBuf>,
    /// Name of the remembered position
    #[arg(long)]
    key: Option<String>,
    /// Do not remember the position between runs
    #[arg(long)]
    no_persist: bool,
    /// Start in fullscreen
    #[arg(long)]
    fullscreen: bool,
    #[arg(long)]
    width: Option<i32>,
    #[arg(long)]
    height: Option<i32>,
}

impl Args {
    fn apply(&self, settings: &mut Settings) {
        if let Some(dir) = &self.state_dir {
            settings.state_dir = dir.clone();
        }
        if let Some(key) = &self.key {
            settings.position_key = key.clone();
        }
        if let Some(width) = self.width {
            settings.window_width = width;
        }
        if let Some(height) = self.height {
            settings.window_height = height;
        }
        settings.fullscreen |= self.fullscreen;
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let mut settings = load_settings(args.config.as_deref()).context("failed to load settings")?;
    args.apply(&mut settings);

    // A directory without slides still opens, navigation is then a no-op
    let paths = match load_sorted_slide_paths(&args.slides_dir) {
        Ok(paths) => paths,
        Err(e @ SlidedeckError::NoSlides(_)) => {
            warn!("{e}");
            Vec::new()
        }
        Err(e) => return Err(e).context("failed to read slides"),
    };
    info!(slides = paths.len(), dir = %args.slides_dir.display(), "found slides");

    let (mut rl, thread) = raylib::init()
        .size(settings.window_width, settings.window_height)
        .title(&settings.title)
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(settings.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);
    rl.set_exit_key(None); // Escape closes the help overlay

    let slides: Vec<Slide> = load_textures(&mut rl, &thread, paths)
        .into_iter()
        .map(|(path, texture)| Slide::new(texture, path))
        .collect();
    let view = SlideView::new(slides);
    let total = view.len();

    let store: Box<dyn PositionStore> = if args.no_persist {
        Box::new(MemoryStore::new())
    } else {
        info!(dir = %settings.state_dir.display(), "persisting position");
        Box::new(FileStore::new(&settings.state_dir))
    };

    let mut controller = PresentationController::new(view, store, settings.position_key.as_str())
        .with_default_observers();
    controller.restore(total);
    let mut presentation = Presentation::new(controller);

    if settings.fullscreen {
        toggle_fullscreen(&mut rl);
    }

    info!("press H or ? for keyboard shortcuts");

    let mut swipe = SwipeTracker::new(settings.swipe_threshold);

    // --- Main Loop ---
    while !rl.window_should_close() {
        for key in pressed_keys(&mut rl) {
            presentation.handle_key(key, &mut rl);
        }

        let pointer = rl.get_mouse_position();
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            swipe.press(pointer.x);
        }
        if rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT) {
            if let Some(gesture) = swipe.release(pointer.x, pointer.y) {
                let layout = presentation
                    .controller()
                    .renderer()
                    .layout(rl.get_screen_width() as f32, rl.get_screen_height() as f32);
                presentation.handle_gesture(gesture, |x, y| layout.hit_test(x, y), &mut rl);
            }
        }

        let dt = rl.get_frame_time();
        presentation.controller_mut().renderer_mut().update(dt);

        let mut d = rl.begin_drawing(&thread);
        presentation.controller().renderer().draw(&mut d);
    }

    Ok(())
}
