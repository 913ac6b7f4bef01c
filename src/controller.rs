use tracing::{debug, warn};

use crate::store::PositionStore;

/// Display surface driven by the controller.
pub trait Renderer {
    /// Make `index` the only visible slide.
    fn show(&mut self, index: usize);
    fn set_counter(&mut self, label: &str);
    fn set_progress(&mut self, percent: f32);
    fn set_indicator(&mut self, active: usize);
    fn set_button_states(&mut self, prev_enabled: bool, next_enabled: bool);
    fn set_help_visible(&mut self, visible: bool);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub index: usize,
    pub total: usize,
}

impl Position {
    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 == self.total
    }

    pub fn percent(&self) -> f32 {
        (self.index + 1) as f32 / self.total as f32 * 100.0
    }

    pub fn label(&self) -> String {
        format!("{} / {}", self.index + 1, self.total)
    }
}

/// Runs after every applied transition.
pub trait Observer<R> {
    fn on_transition(&mut self, position: Position, renderer: &mut R);
}

impl<R, F> Observer<R> for F
where
    F: FnMut(Position, &mut R),
{
    fn on_transition(&mut self, position: Position, renderer: &mut R) {
        self(position, renderer)
    }
}

pub struct CounterObserver;

impl<R: Renderer> Observer<R> for CounterObserver {
    fn on_transition(&mut self, position: Position, renderer: &mut R) {
        renderer.set_counter(&position.label());
    }
}

pub struct ProgressObserver;

impl<R: Renderer> Observer<R> for ProgressObserver {
    fn on_transition(&mut self, position: Position, renderer: &mut R) {
        renderer.set_progress(position.percent());
    }
}

pub struct IndicatorObserver;

impl<R: Renderer> Observer<R> for IndicatorObserver {
    fn on_transition(&mut self, position: Position, renderer: &mut R) {
        renderer.set_indicator(position.index);
    }
}

pub struct ButtonStateObserver;

impl<R: Renderer> Observer<R> for ButtonStateObserver {
    fn on_transition(&mut self, position: Position, renderer: &mut R) {
        renderer.set_button_states(!position.is_first(), !position.is_last());
    }
}

/// Owns "which slide is shown" and fans every change out to its observers.
pub struct PresentationController<R, S> {
    renderer: R,
    store: S,
    key: String,
    current: Option<usize>,
    total: usize,
    observers: Vec<Box<dyn Observer<R>>>,
}

impl<R: Renderer, S: PositionStore> PresentationController<R, S> {
    pub fn new(renderer: R, store: S, key: impl Into<String>) -> Self {
        Self {
            renderer,
            store,
            key: key.into(),
            current: None,
            total: 0,
            observers: Vec::new(),
        }
    }

    /// Counter, progress, indicators, then boundary buttons.
    pub fn with_default_observers(mut self) -> Self {
        self.register(Box::new(CounterObserver));
        self.register(Box::new(ProgressObserver));
        self.register(Box::new(IndicatorObserver));
        self.register(Box::new(ButtonStateObserver));
        self
    }

    pub fn register(&mut self, observer: Box<dyn Observer<R>>) {
        self.observers.push(observer);
    }

    /// Seeds the index from the store and shows it.
    pub fn restore(&mut self, slide_count: usize) {
        let persisted = self.store.load(&self.key);
        self.initialize(slide_count, persisted.as_deref());
    }

    pub fn initialize(&mut self, slide_count: usize, persisted: Option<&str>) {
        self.total = slide_count;
        self.current = None;
        if slide_count == 0 {
            return;
        }

        let start = persisted
            .and_then(|value| value.trim().parse::<usize>().ok())
            .filter(|&index| index < slide_count)
            .unwrap_or(0);
        self.go_to(start);
    }

    /// Returns `false` when `index` is out of range and nothing changed.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.total {
            return false;
        }

        self.current = Some(index);
        self.renderer.show(index);

        if let Err(e) = self.store.save(&self.key, &index.to_string()) {
            warn!("could not persist slide position: {e}");
        }

        let position = Position {
            index,
            total: self.total,
        };
        debug!(slide = position.index, total = position.total, "transition");
        for observer in self.observers.iter_mut() {
            observer.on_transition(position, &mut self.renderer);
        }
        true
    }

    pub fn next(&mut self) -> bool {
        match self.current {
            Some(index) if index + 1 < self.total => self.go_to(index + 1),
            _ => false,
        }
    }

    pub fn previous(&mut self) -> bool {
        match self.current {
            Some(index) if index > 0 => self.go_to(index - 1),
            _ => false,
        }
    }

    pub fn go_to_first(&mut self) -> bool {
        self.go_to(0)
    }

    pub fn go_to_last(&mut self) -> bool {
        match self.total.checked_sub(1) {
            Some(last) => self.go_to(last),
            None => false,
        }
    }

    #[cfg(test)]
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::{Result, SlidedeckError};
    use crate::store::MemoryStore;

    /// Records what the controller asked for.
    #[derive(Default, Debug)]
    pub(crate) struct RecordingRenderer {
        pub visible: Vec<bool>,
        pub counter: String,
        pub progress: f32,
        pub indicator: Option<usize>,
        pub prev_enabled: bool,
        pub next_enabled: bool,
        pub help_visible: bool,
        pub shows: usize,
    }

    impl RecordingRenderer {
        pub(crate) fn with_slides(count: usize) -> Self {
            Self {
                visible: vec![false; count],
                ..Self::default()
            }
        }

        pub(crate) fn visible_slides(&self) -> Vec<usize> {
            self.visible
                .iter()
                .enumerate()
                .filter(|(_, v)| **v)
                .map(|(i, _)| i)
                .collect()
        }
    }

    impl Renderer for RecordingRenderer {
        fn show(&mut self, index: usize) {
            for (i, visible) in self.visible.iter_mut().enumerate() {
                *visible = i == index;
            }
            self.shows += 1;
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

    struct BrokenStore;

    impl PositionStore for BrokenStore {
        fn load(&self, _key: &str) -> Option<String> {
            None
        }

        fn save(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(SlidedeckError::io(
                "/unavailable",
                std::io::Error::other("storage unavailable"),
            ))
        }
    }

    type Controller = PresentationController<RecordingRenderer, MemoryStore>;

    pub(crate) fn controller(total: usize, persisted: Option<&str>) -> Controller {
        let mut controller = PresentationController::new(
            RecordingRenderer::with_slides(total),
            MemoryStore::new(),
            "currentSlide",
        )
        .with_default_observers();
        controller.initialize(total, persisted);
        controller
    }

    fn persisted(controller: &Controller) -> Option<String> {
        controller.store().load("currentSlide")
    }

    #[test]
    fn go_to_shows_exactly_one_slide_with_counter() {
        let mut c = controller(5, None);
        for i in 0..5 {
            assert!(c.go_to(i));
            assert_eq!(c.current_index(), Some(i));
            assert_eq!(c.renderer().visible_slides(), vec![i]);
            assert_eq!(c.renderer().counter, format!("{} / 5", i + 1));
            assert_eq!(c.renderer().indicator, Some(i));
        }
    }

    #[test]
    fn go_to_out_of_range_changes_nothing() {
        let mut c = controller(5, Some("3"));
        let shows = c.renderer().shows;

        assert!(!c.go_to(5));
        assert!(!c.go_to(usize::MAX));

        assert_eq!(c.current_index(), Some(3));
        assert_eq!(c.renderer().shows, shows);
        assert_eq!(persisted(&c).as_deref(), Some("3"));
    }

    #[test]
    fn restores_valid_persisted_position() {
        let c = controller(5, Some("2"));
        assert_eq!(c.current_index(), Some(2));
        assert_eq!(c.renderer().counter, "3 / 5");
        assert!(c.renderer().prev_enabled);
        assert!(c.renderer().next_enabled);
    }

    #[test]
    fn out_of_range_persisted_position_falls_back_to_first() {
        let c = controller(5, Some("9"));
        assert_eq!(c.current_index(), Some(0));
        assert_eq!(c.renderer().counter, "1 / 5");
    }

    #[test]
    fn malformed_persisted_position_falls_back_to_first() {
        for value in ["", "abc", "-1", "2.5", "2abc"] {
            let c = controller(5, Some(value));
            assert_eq!(c.current_index(), Some(0), "value {value:?}");
        }
        let c = controller(5, Some(" 4\n"));
        assert_eq!(c.current_index(), Some(4));
    }

    #[test]
    fn previous_at_first_slide_is_a_noop() {
        let mut c = controller(5, None);
        assert!(!c.previous());
        assert_eq!(c.current_index(), Some(0));
        assert!(!c.renderer().prev_enabled);
        assert!(c.renderer().next_enabled);
    }

    #[test]
    fn next_at_last_slide_is_a_noop() {
        let mut c = controller(5, Some("4"));
        assert!(!c.next());
        assert_eq!(c.current_index(), Some(4));
        assert!(!c.renderer().next_enabled);
        assert!(c.renderer().prev_enabled);
    }

    #[test]
    fn next_and_previous_step_by_one() {
        let mut c = controller(3, None);
        assert!(c.next());
        assert!(c.next());
        assert_eq!(c.current_index(), Some(2));
        assert!(c.previous());
        assert_eq!(c.current_index(), Some(1));
    }

    #[test]
    fn first_and_last_jump_to_bounds() {
        let mut c = controller(7, Some("3"));
        assert!(c.go_to_last());
        assert_eq!(c.current_index(), Some(6));
        assert!(c.go_to_first());
        assert_eq!(c.current_index(), Some(0));
    }

    #[test]
    fn every_transition_is_persisted_and_restorable() {
        let mut c = controller(6, None);
        c.go_to(4);
        c.previous();
        let saved = persisted(&c);
        assert_eq!(saved.as_deref(), Some("3"));

        let restored = controller(6, saved.as_deref());
        assert_eq!(restored.current_index(), c.current_index());
    }

    #[test]
    fn restore_reads_from_store() {
        let mut c = PresentationController::new(
            RecordingRenderer::with_slides(4),
            MemoryStore::with_value("deck", "3"),
            "deck",
        )
        .with_default_observers();
        c.restore(4);
        assert_eq!(c.current_index(), Some(3));
    }

    #[test]
    fn progress_is_monotonic_and_bounded() {
        let mut c = controller(8, None);
        assert_eq!(c.renderer().progress, 100.0 / 8.0);

        let mut last = 0.0;
        for i in 0..8 {
            c.go_to(i);
            assert!(c.renderer().progress >= last);
            last = c.renderer().progress;
        }
        assert_eq!(last, 100.0);
    }

    #[test]
    fn empty_deck_makes_navigation_a_noop() {
        let mut c = controller(0, Some("0"));
        assert_eq!(c.current_index(), None);
        assert!(!c.next());
        assert!(!c.previous());
        assert!(!c.go_to_first());
        assert!(!c.go_to_last());
        assert!(!c.go_to(0));
        assert_eq!(c.renderer().shows, 0);
        assert_eq!(persisted(&c), None);
    }

    #[test]
    fn single_slide_disables_both_buttons() {
        let c = controller(1, None);
        assert_eq!(c.renderer().progress, 100.0);
        assert!(!c.renderer().prev_enabled);
        assert!(!c.renderer().next_enabled);
    }

    #[test]
    fn store_failure_does_not_abort_navigation() {
        let mut c = PresentationController::new(
            RecordingRenderer::with_slides(3),
            BrokenStore,
            "currentSlide",
        )
        .with_default_observers();
        c.initialize(3, None);

        assert!(c.next());
        assert_eq!(c.current_index(), Some(1));
        assert_eq!(c.renderer().counter, "2 / 3");
    }

    #[test]
    fn observers_run_in_registration_order() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut c = PresentationController::new(
            RecordingRenderer::with_slides(3),
            MemoryStore::new(),
            "currentSlide",
        );
        for name in ["first", "second"] {
            let calls = Rc::clone(&calls);
            c.register(Box::new(move |p: Position, _: &mut RecordingRenderer| {
                calls.borrow_mut().push((name, p.index));
            }));
        }

        c.initialize(3, None);
        c.next();

        assert_eq!(
            *calls.borrow(),
            vec![("first", 0), ("second", 0), ("first", 1), ("second", 1)]
        );
    }
}
