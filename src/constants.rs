pub const WINDOW_WIDTH: i32 = 1280;           // Default window width
pub const WINDOW_HEIGHT: i32 = 720;           // Default window height
pub const FPS: u32 = 60;                      // Frames per second

pub const ANIMATION_DURATION: f32 = 0.5;      // Slide entrance animation (seconds)
pub const ENTRANCE_START_SCALE: f32 = 0.8;    // Scale a slide enters at
pub const SLIDE_FIT: f32 = 0.9;               // Share of the screen a slide may cover

pub const SWIPE_THRESHOLD: f32 = 50.0;        // Horizontal drag distance for a swipe (pixels)

pub const PROGRESS_HEIGHT: f32 = 4.0;
pub const DOT_SIZE: f32 = 8.0;
pub const DOT_ACTIVE_WIDTH: f32 = 24.0;
pub const DOT_GAP: f32 = 8.0;
pub const DOT_MARGIN: f32 = 20.0;

pub const BUTTON_WIDTH: f32 = 48.0;
pub const BUTTON_HEIGHT: f32 = 36.0;
pub const COUNTER_WIDTH: f32 = 110.0;
pub const CONTROLS_MARGIN: f32 = 24.0;

pub const HELP_MAX_WIDTH: f32 = 600.0;
pub const HELP_HEIGHT: f32 = 440.0;

pub const POSITION_KEY: &str = "currentSlide";
pub const STATE_DIR: &str = ".slidedeck";
pub const CONFIG_FILE: &str = "slidedeck.toml";
