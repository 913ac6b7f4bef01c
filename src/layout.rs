use crate::constants::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }

    fn inflate(&self, by: f32) -> Rect {
        Rect::new(self.x - by, self.y - by, self.width + by * 2.0, self.height + by * 2.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Indicator(usize),
    PreviousButton,
    NextButton,
}

/// Where the overlay widgets sit for a given screen and deck.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub screen_width: f32,
    pub screen_height: f32,
    pub dots: Vec<Rect>,
    pub previous_button: Rect,
    pub counter: Rect,
    pub next_button: Rect,
    pub help_panel: Rect,
}

impl Layout {
    pub fn compute(
        screen_width: f32,
        screen_height: f32,
        total: usize,
        active: Option<usize>,
    ) -> Self {
        let dot_width = |i: usize| {
            if Some(i) == active {
                DOT_ACTIVE_WIDTH
            } else {
                DOT_SIZE
            }
        };

        let dots_width: f32 = (0..total).map(dot_width).sum::<f32>()
            + DOT_GAP * total.saturating_sub(1) as f32;
        let mut x = screen_width - DOT_MARGIN - dots_width;
        let dots = (0..total)
            .map(|i| {
                let rect = Rect::new(x, DOT_MARGIN, dot_width(i), DOT_SIZE);
                x += rect.width + DOT_GAP;
                rect
            })
            .collect();

        // Previous, counter, next, centred along the bottom edge
        let controls_width = BUTTON_WIDTH * 2.0 + COUNTER_WIDTH + DOT_GAP * 2.0;
        let controls_x = (screen_width - controls_width) / 2.0;
        let controls_y = screen_height - CONTROLS_MARGIN - BUTTON_HEIGHT;
        let previous_button = Rect::new(controls_x, controls_y, BUTTON_WIDTH, BUTTON_HEIGHT);
        let counter = Rect::new(
            controls_x + BUTTON_WIDTH + DOT_GAP,
            controls_y,
            COUNTER_WIDTH,
            BUTTON_HEIGHT,
        );
        let next_button = Rect::new(
            counter.x + COUNTER_WIDTH + DOT_GAP,
            controls_y,
            BUTTON_WIDTH,
            BUTTON_HEIGHT,
        );

        let help_width = HELP_MAX_WIDTH.min(screen_width - DOT_MARGIN * 2.0).max(0.0);
        let help_height = HELP_HEIGHT.min(screen_height - DOT_MARGIN * 2.0).max(0.0);
        let help_panel = Rect::new(
            (screen_width - help_width) / 2.0,
            (screen_height - help_height) / 2.0,
            help_width,
            help_height,
        );

        Self {
            screen_width,
            screen_height,
            dots,
            previous_button,
            counter,
            next_button,
            help_panel,
        }
    }

    pub fn progress_bar(&self, percent: f32) -> Rect {
        let width = self.screen_width * percent.clamp(0.0, 100.0) / 100.0;
        Rect::new(0.0, 0.0, width, PROGRESS_HEIGHT)
    }

    pub fn hit_test(&self, x: f32, y: f32) -> Option<Hit> {
        if self.previous_button.contains(x, y) {
            return Some(Hit::PreviousButton);
        }
        if self.next_button.contains(x, y) {
            return Some(Hit::NextButton);
        }
        // Dots are tiny, accept clicks slightly outside them
        self.dots
            .iter()
            .position(|dot| dot.inflate(DOT_GAP / 2.0).contains(x, y))
            .map(Hit::Indicator)
    }
}

/// Scale that fits an image inside the usable share of the screen, never enlarging it.
pub fn fit_scale(
    image_width: f32,
    image_height: f32,
    screen_width: f32,
    screen_height: f32,
) -> f32 {
    if image_width <= 0.0 || image_height <= 0.0 {
        return 1.0;
    }
    let max_width = screen_width * SLIDE_FIT;
    let max_height = screen_height * SLIDE_FIT;
    (max_width / image_width).min(max_height / image_height).min(1.0)
}
