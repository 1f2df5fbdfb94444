//! Scroll-derived UI state and the animated scroll used by fragment links
//! and the scroll-to-top control.

use std::cell::Cell;
use std::rc::Rc;

use chrono::Utc;
use gloo_timers::future::TimeoutFuture;
use web_sys::window;
use yew::Reducible;

use crate::config::UiConfig;

const FRAME_MS: u32 = 16;

thread_local! {
    static SCROLL_ANIMATIONS: ScrollAnimations = ScrollAnimations::default();
}

/// Hands out one ticket per smooth scroll. Starting a new scroll retires
/// every earlier ticket, so only the latest animation keeps moving the page.
#[derive(Debug, Default)]
pub struct ScrollAnimations {
    latest: Cell<u64>,
}

impl ScrollAnimations {
    pub fn begin(&self) -> u64 {
        let ticket = self.latest.get().wrapping_add(1);
        self.latest.set(ticket);
        ticket
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest.get() == ticket
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollState {
    pub nav_background_active: bool,
    pub floating_control_visible: bool,
    pub parallax_offset_px: f64,
}

impl ScrollState {
    pub fn from_offset(scroll_top: f64, cfg: &UiConfig) -> Self {
        Self {
            nav_background_active: scroll_top > cfg.nav_background_threshold,
            floating_control_visible: scroll_top > cfg.floating_control_threshold,
            parallax_offset_px: scroll_top * cfg.parallax_factor,
        }
    }

    pub fn parallax_transform(&self) -> String {
        format!("transform: translateY({}px);", self.parallax_offset_px)
    }
}

/// Cubic in/out easing over normalized time `t` in `[0, 1]`.
pub fn ease_in_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Scroll offset `elapsed_ms` into an eased scroll from `start` to `target`.
pub fn eased_position(start: f64, target: f64, elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return target;
    }
    start + (target - start) * ease_in_out_cubic(elapsed_ms / duration_ms)
}

/// Lifecycle of the floating scroll-to-top button. It only exists in the DOM
/// while above the threshold, plus the length of its exit fade.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FloatingControl {
    #[default]
    Absent,
    Entering(u32),
    Visible(u32),
    Leaving(u32),
}

impl FloatingControl {
    fn generation(self) -> u32 {
        match self {
            FloatingControl::Absent => 0,
            FloatingControl::Entering(g) | FloatingControl::Visible(g) | FloatingControl::Leaving(g) => g,
        }
    }

    pub fn on_scroll(self, visible: bool) -> Self {
        let next = self.generation().wrapping_add(1);
        match (self, visible) {
            (FloatingControl::Absent | FloatingControl::Leaving(_), true) => FloatingControl::Entering(next),
            (FloatingControl::Entering(_) | FloatingControl::Visible(_), false) => FloatingControl::Leaving(next),
            (unchanged, _) => unchanged,
        }
    }

    /// Completes the fade that `generation` started.
    pub fn transition_done(self, generation: u32) -> Self {
        match self {
            FloatingControl::Entering(g) if g == generation => FloatingControl::Visible(g),
            FloatingControl::Leaving(g) if g == generation => FloatingControl::Absent,
            other => other,
        }
    }

    pub fn is_rendered(self) -> bool {
        self != FloatingControl::Absent
    }

    pub fn is_opaque(self) -> bool {
        matches!(self, FloatingControl::Visible(_))
    }

    /// The fade still to be awaited, as `(generation, delay_ms)`.
    pub fn pending(self, cfg: &UiConfig) -> Option<(u32, u32)> {
        match self {
            FloatingControl::Entering(g) => Some((g, cfg.floating_control_enter_delay_ms)),
            FloatingControl::Leaving(g) => Some((g, cfg.floating_control_exit_ms)),
            _ => None,
        }
    }
}

pub enum FloatingAction {
    Scrolled(bool),
    TransitionDone(u32),
}

impl Reducible for FloatingControl {
    type Action = FloatingAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            FloatingAction::Scrolled(visible) => self.on_scroll(visible),
            FloatingAction::TransitionDone(generation) => self.transition_done(generation),
        };
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

pub fn scroll_top() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Document offset of the element with `id`, less the fixed header height.
pub fn anchor_offset(id: &str, header_offset: f64) -> Option<f64> {
    let element = window()?.document()?.get_element_by_id(id)?;
    Some(element.get_bounding_client_rect().top() + scroll_top() - header_offset)
}

/// Animates the window scroll to `target`, resolving when it arrives or
/// when a newer smooth scroll takes over.
pub async fn smooth_scroll_to(target: f64, duration_ms: u32) {
    let Some(window) = window() else {
        return;
    };
    let ticket = SCROLL_ANIMATIONS.with(ScrollAnimations::begin);
    let start = scroll_top();
    let duration = f64::from(duration_ms);
    let started = Utc::now();
    loop {
        if !SCROLL_ANIMATIONS.with(|animations| animations.is_current(ticket)) {
            log::debug!("smooth scroll {} superseded", ticket);
            return;
        }
        let elapsed = (Utc::now() - started).num_milliseconds() as f64;
        window.scroll_to_with_x_and_y(0.0, eased_position(start, target, elapsed, duration));
        if elapsed >= duration {
            break;
        }
        TimeoutFuture::new(FRAME_MS).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_over_synthetic_scroll_sequence() {
        let cfg = UiConfig::default();
        let expected = [
            (0.0, false, false),
            (49.0, false, false),
            (50.0, false, false),
            (51.0, true, false),
            (300.0, true, false),
            (301.0, true, true),
            (0.0, false, false),
        ];
        for (offset, nav, floating) in expected {
            let state = ScrollState::from_offset(offset, &cfg);
            assert_eq!(state.nav_background_active, nav, "nav at {offset}");
            assert_eq!(state.floating_control_visible, floating, "floating at {offset}");
            assert_eq!(state.parallax_offset_px, offset * 0.5);
        }
    }

    #[test]
    fn easing_is_symmetric_and_pinned_at_ends() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(0.5), 0.5);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
        assert_eq!(ease_in_out_cubic(0.25), 4.0 * 0.25f64.powi(3));
        let a = ease_in_out_cubic(0.2);
        let b = ease_in_out_cubic(0.8);
        assert!((a + b - 1.0).abs() < 1e-12);
    }

    #[test]
    fn eased_position_reaches_target() {
        assert_eq!(eased_position(1200.0, 0.0, 0.0, 800.0), 1200.0);
        assert_eq!(eased_position(1200.0, 0.0, 400.0, 800.0), 600.0);
        assert_eq!(eased_position(1200.0, 0.0, 900.0, 800.0), 0.0);
    }

    #[test]
    fn floating_control_is_created_and_removed_across_threshold() {
        let cfg = UiConfig::default();
        let mut control = FloatingControl::default();
        assert!(!control.is_rendered());

        control = control.on_scroll(true);
        let (generation, delay) = control.pending(&cfg).unwrap();
        assert_eq!(delay, 100);
        assert!(control.is_rendered() && !control.is_opaque());
        control = control.transition_done(generation);
        assert!(control.is_opaque());
        assert_eq!(control.on_scroll(true), control);

        control = control.on_scroll(false);
        let (generation, delay) = control.pending(&cfg).unwrap();
        assert_eq!(delay, 300);
        control = control.transition_done(generation);
        assert_eq!(control, FloatingControl::Absent);
    }

    #[test]
    fn scrolling_back_down_during_exit_keeps_control() {
        let mut control = FloatingControl::default().on_scroll(true);
        let (generation, _) = control.pending(&UiConfig::default()).unwrap();
        control = control.transition_done(generation).on_scroll(false);
        let (leaving, _) = control.pending(&UiConfig::default()).unwrap();
        control = control.on_scroll(true);
        control = control.transition_done(leaving);
        assert!(control.is_rendered());
    }

    #[test]
    fn newer_scroll_retires_earlier_ones() {
        let animations = ScrollAnimations::default();
        let first = animations.begin();
        assert!(animations.is_current(first));

        let second = animations.begin();
        assert!(!animations.is_current(first));
        assert!(animations.is_current(second));

        let third = animations.begin();
        assert!(!animations.is_current(second));
        assert!(animations.is_current(third));
    }
}
