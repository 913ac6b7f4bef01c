use crate::layout::Hit;

/// Keys the viewer distinguishes, independent of the window backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Up,
    Right,
    Down,
    Space,
    Home,
    End,
    Escape,
    Char(char),
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Previous,
    Next,
    First,
    Last,
    GoTo(usize),
    ToggleFullscreen,
    ShowHelp,
    CloseHelp,
}

pub fn map_key(key: Key, help_open: bool) -> Option<Command> {
    if help_open {
        return Some(Command::CloseHelp);
    }

    match key {
        Key::Left | Key::Up => Some(Command::Previous),
        Key::Right | Key::Down | Key::Space => Some(Command::Next),
        Key::Home => Some(Command::First),
        Key::End => Some(Command::Last),
        Key::Char('f' | 'F') => Some(Command::ToggleFullscreen),
        Key::Char('h' | 'H' | '?') => Some(Command::ShowHelp),
        Key::Escape | Key::Char(_) | Key::Other => None,
    }
}

pub fn map_click(hit: Option<Hit>, help_open: bool) -> Option<Command> {
    if help_open {
        return Some(Command::CloseHelp);
    }

    match hit? {
        Hit::Indicator(index) => Some(Command::GoTo(index)),
        Hit::PreviousButton => Some(Command::Previous),
        Hit::NextButton => Some(Command::Next),
    }
}

/// What a pointer release turned out to be.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    Swipe(Command),
    Click { x: f32, y: f32 },
}

/// Tracks one press/release pair of the pointer (mouse or touch).
pub struct SwipeTracker {
    threshold: f32,
    start_x: Option<f32>,
}

impl SwipeTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            start_x: None,
        }
    }

    pub fn press(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    /// `None` if there was no matching press.
    pub fn release(&mut self, x: f32, y: f32) -> Option<Gesture> {
        let start_x = self.start_x.take()?;
        let diff = start_x - x;

        if diff.abs() > self.threshold {
            // Leftward drag moves forward
            let command = if diff > 0.0 {
                Command::Next
            } else {
                Command::Previous
            };
            Some(Gesture::Swipe(command))
        } else {
            Some(Gesture::Click { x, y })
        }
    }
}
