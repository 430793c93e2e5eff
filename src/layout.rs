//! Mobile/desktop classification of the viewport width.
//!
//! [`LayoutDetector`] is plain state so it can be driven by tests. The
//! [`provide_layout`] hook wires it to the window `resize` event and exposes
//! the result as a single `is_mobile` signal.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::*;

pub const DEFAULT_MOBILE_BREAKPOINT: u32 = 768;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutMode {
    Mobile,
    Desktop,
}

impl LayoutMode {
    pub fn classify(width: u32, breakpoint: u32) -> Self {
        if width < breakpoint {
            LayoutMode::Mobile
        } else {
            LayoutMode::Desktop
        }
    }

    pub fn is_mobile(&self) -> bool {
        matches!(self, LayoutMode::Mobile)
    }
}

pub struct LayoutDetector {
    breakpoint: u32,
    current: LayoutMode,
    subscribers: Vec<Box<dyn Fn(LayoutMode)>>,
}

impl LayoutDetector {
    pub fn new(breakpoint: u32, initial_width: u32) -> Self {
        Self {
            breakpoint,
            current: LayoutMode::classify(initial_width, breakpoint),
            subscribers: Vec::new(),
        }
    }

    pub fn mode(&self) -> LayoutMode {
        self.current
    }

    pub fn subscribe(&mut self, callback: impl Fn(LayoutMode) + 'static) {
        self.subscribers.push(Box::new(callback));
    }

    /// Feed a new width. Returns the new mode only when it changed, after
    /// every subscriber has been called.
    pub fn observe(&mut self, width: u32) -> Option<LayoutMode> {
        let mode = LayoutMode::classify(width, self.breakpoint);
        if mode == self.current {
            return None;
        }
        self.current = mode;
        tracing::debug!(width, ?mode, "layout mode changed");
        for subscriber in &self.subscribers {
            subscriber(mode);
        }
        Some(mode)
    }
}

/// Context wrapper so pages can't confuse this with other bool signals.
#[derive(Clone, Copy)]
pub struct IsMobile(pub ReadSignal<bool>);

pub fn window_width() -> u32 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .map(|w| w.max(0.0) as u32)
        .unwrap_or(0)
}

pub fn provide_layout(breakpoint: u32) -> ReadSignal<bool> {
    let mut detector = LayoutDetector::new(breakpoint, window_width());
    let (is_mobile, set_is_mobile) = create_signal(detector.mode().is_mobile());
    detector.subscribe(move |mode| set_is_mobile.set(mode.is_mobile()));

    let detector = Rc::new(RefCell::new(detector));
    let handle = window_event_listener(ev::resize, move |_| {
        detector.borrow_mut().observe(window_width());
    });
    on_cleanup(move || handle.remove());

    provide_context(IsMobile(is_mobile));
    is_mobile
}

pub fn use_is_mobile() -> ReadSignal<bool> {
    use_context::<IsMobile>()
        .map(|m| m.0)
        .unwrap_or_else(|| create_signal(false).0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn classify_uses_strict_less_than() {
        assert_eq!(LayoutMode::classify(767, 768), LayoutMode::Mobile);
        assert_eq!(LayoutMode::classify(768, 768), LayoutMode::Desktop);
        assert_eq!(LayoutMode::classify(0, 768), LayoutMode::Mobile);
    }

    #[test]
    fn initial_width_sets_mode_without_notifying() {
        let calls = Rc::new(Cell::new(0));
        let mut detector = LayoutDetector::new(768, 400);
        let counter = calls.clone();
        detector.subscribe(move |_| counter.set(counter.get() + 1));

        assert_eq!(detector.mode(), LayoutMode::Mobile);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn toggles_once_per_crossing() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut detector = LayoutDetector::new(768, 1280);
        let sink = seen.clone();
        detector.subscribe(move |mode| sink.borrow_mut().push(mode));

        let widths = [1280, 1024, 800, 700, 700, 500, 767, 768, 768, 2000, 300];
        let changes: Vec<_> = widths.iter().filter_map(|&w| detector.observe(w)).collect();

        let expected = vec![LayoutMode::Mobile, LayoutMode::Desktop, LayoutMode::Mobile];
        assert_eq!(changes, expected);
        assert_eq!(*seen.borrow(), expected);
    }

    #[test]
    fn repeated_width_is_silent() {
        let mut detector = LayoutDetector::new(768, 1000);
        assert_eq!(detector.observe(500), Some(LayoutMode::Mobile));
        for _ in 0..5 {
            assert_eq!(detector.observe(500), None);
        }
    }

    #[test]
    fn every_subscriber_is_notified() {
        let a = Rc::new(Cell::new(0));
        let b = Rc::new(Cell::new(0));
        let mut detector = LayoutDetector::new(600, 1000);
        let (ca, cb) = (a.clone(), b.clone());
        detector.subscribe(move |_| ca.set(ca.get() + 1));
        detector.subscribe(move |_| cb.set(cb.get() + 1));

        detector.observe(100);
        detector.observe(900);
        assert_eq!((a.get(), b.get()), (2, 2));
    }
}
