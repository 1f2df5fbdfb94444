//! Single-slot toast model. Showing a notification evicts whatever was on
//! screen, so at most one is ever rendered.

use std::rc::Rc;

use chrono::{DateTime, Duration, Utc};
use yew::Reducible;

use crate::config::{self, UiConfig};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    #[allow(dead_code)]
    Warning,
    Error,
}

impl Severity {
    /// Unrecognized names fall back to `Info`.
    #[cfg(test)]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "success" => Severity::Success,
            "warning" => Severity::Warning,
            "error" => Severity::Error,
            _ => Severity::Info,
        }
    }

    pub fn accent(self) -> &'static str {
        match self {
            Severity::Success => "bg-green-500",
            Severity::Error => "bg-red-500",
            Severity::Warning => "bg-yellow-500",
            Severity::Info => "bg-blue-500",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Severity::Success => "check",
            Severity::Error => "exclamation-circle",
            Severity::Warning => "exclamation-triangle",
            Severity::Info => "info-circle",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Entering,
    Shown,
    Leaving,
    Gone,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NotificationTimings {
    pub enter_delay: Duration,
    pub display: Duration,
    pub exit: Duration,
}

impl From<&UiConfig> for NotificationTimings {
    fn from(cfg: &UiConfig) -> Self {
        Self {
            enter_delay: Duration::milliseconds(cfg.notification_enter_delay_ms.into()),
            display: Duration::milliseconds(cfg.notification_display_ms.into()),
            exit: Duration::milliseconds(cfg.notification_exit_ms.into()),
        }
    }
}

impl Default for NotificationTimings {
    fn default() -> Self {
        Self::from(&config::ui())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(id: u64, message: impl Into<String>, severity: Severity, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            message: message.into(),
            severity,
            created_at,
        }
    }
}

/// Phase changes are driven by timers, each tagged with the id it was armed
/// for. A tag that no longer matches the slot is ignored.
pub enum NotificationAction {
    Show(Notification),
    Enter { id: u64 },
    BeginExit { id: u64 },
    Dismiss { id: u64, at: DateTime<Utc> },
    Remove { id: u64 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct NotificationSlot {
    current: Option<Notification>,
    phase: Phase,
    timings: NotificationTimings,
}

impl Default for NotificationSlot {
    fn default() -> Self {
        Self::new(NotificationTimings::default())
    }
}

impl NotificationSlot {
    pub fn new(timings: NotificationTimings) -> Self {
        Self {
            current: None,
            phase: Phase::Gone,
            timings,
        }
    }

    pub fn timings(&self) -> &NotificationTimings {
        &self.timings
    }

    /// The notification currently in the slot, with its phase.
    pub fn current(&self) -> Option<(&Notification, Phase)> {
        self.current.as_ref().map(|n| (n, self.phase))
    }

    fn phase_of(&self, id: u64) -> Option<Phase> {
        self.current.as_ref().filter(|n| n.id == id).map(|_| self.phase)
    }

    pub fn show(&mut self, notification: Notification) {
        self.current = Some(notification);
        self.phase = Phase::Entering;
    }

    pub fn enter(&mut self, id: u64) {
        if self.phase_of(id) == Some(Phase::Entering) {
            self.phase = Phase::Shown;
        }
    }

    /// Starts the automatic exit. A toast already leaving keeps its exit.
    pub fn begin_exit(&mut self, id: u64) {
        if matches!(self.phase_of(id), Some(Phase::Entering | Phase::Shown)) {
            self.phase = Phase::Leaving;
        }
    }

    /// Starts the exit early. The caller arms its own `remove`; whichever
    /// removal fires first takes the toast off screen.
    pub fn dismiss(&mut self, id: u64, at: DateTime<Utc>) {
        if let Some(current) = self.current.as_ref().filter(|n| n.id == id) {
            log::debug!(
                "notification {} dismissed after {} ms",
                id,
                (at - current.created_at).num_milliseconds()
            );
            self.begin_exit(id);
        }
    }

    /// Drops the toast once its exit transition has run.
    pub fn remove(&mut self, id: u64) {
        if self.phase_of(id) == Some(Phase::Leaving) {
            self.current = None;
            self.phase = Phase::Gone;
        }
    }
}

impl Reducible for NotificationSlot {
    type Action = NotificationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            NotificationAction::Show(notification) => next.show(notification),
            NotificationAction::Enter { id } => next.enter(id),
            NotificationAction::BeginExit { id } => next.begin_exit(id),
            NotificationAction::Dismiss { id, at } => next.dismiss(id, at),
            NotificationAction::Remove { id } => next.remove(id),
        }
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    fn ms(n: i64) -> Duration {
        Duration::milliseconds(n)
    }

    #[test]
    fn unknown_severity_maps_to_info() {
        assert_eq!(Severity::parse("fatal"), Severity::Info);
        assert_eq!(Severity::parse("error").icon(), "exclamation-circle");
        assert_eq!(Severity::parse("warning").icon(), "exclamation-triangle");
        assert_eq!(Severity::parse("success").icon(), "check");
        assert_eq!(Severity::Info.accent(), "bg-blue-500");
    }

    #[test]
    fn second_notification_replaces_first() {
        let mut slot = NotificationSlot::default();
        slot.show(Notification::new(1, "first", Severity::Info, t0()));
        slot.show(Notification::new(2, "second", Severity::Success, t0() + ms(10)));

        let (current, phase) = slot.current().unwrap();
        assert_eq!(current.message, "second");
        assert_eq!(phase, Phase::Entering);

        // Timers armed for the evicted notification change nothing.
        slot.enter(1);
        slot.begin_exit(1);
        slot.dismiss(1, t0() + ms(20));
        slot.remove(1);
        assert_eq!(slot.current().unwrap().0.id, 2);
        assert_eq!(slot.current().unwrap().1, Phase::Entering);
    }

    #[test]
    fn auto_dismiss_timeline() {
        let mut slot = NotificationSlot::default();
        slot.show(Notification::new(1, "hello", Severity::Info, t0()));

        slot.enter(1);
        assert_eq!(slot.current().unwrap().1, Phase::Shown);
        slot.begin_exit(1);
        assert_eq!(slot.current().unwrap().1, Phase::Leaving);
        slot.remove(1);
        assert!(slot.current().is_none());
    }

    #[test]
    fn timers_advance_phases_even_when_the_clock_lags() {
        let mut slot = NotificationSlot::default();
        slot.show(Notification::new(1, "hello", Severity::Info, t0()));

        // Each stage fires regardless of what the wall clock reports, so a
        // tick landing a millisecond early still slides the toast in and out.
        let mut reduced = Rc::new(slot);
        reduced = reduced.reduce(NotificationAction::Enter { id: 1 });
        assert_eq!(reduced.current().unwrap().1, Phase::Shown);
        reduced = reduced.reduce(NotificationAction::BeginExit { id: 1 });
        reduced = reduced.reduce(NotificationAction::Remove { id: 1 });
        assert!(reduced.current().is_none());
    }

    #[test]
    fn remove_before_exit_is_ignored() {
        let mut slot = NotificationSlot::default();
        slot.show(Notification::new(3, "hi", Severity::Info, t0()));
        slot.remove(3);
        assert_eq!(slot.current().unwrap().1, Phase::Entering);
        slot.enter(3);
        slot.remove(3);
        assert_eq!(slot.current().unwrap().1, Phase::Shown);
    }

    #[test]
    fn user_dismiss_short_circuits_to_exit() {
        let mut slot = NotificationSlot::default();
        slot.show(Notification::new(4, "bye", Severity::Warning, t0()));
        slot.enter(4);
        slot.dismiss(4, t0() + ms(1000));
        assert_eq!(slot.current().unwrap().1, Phase::Leaving);

        // The automatic exit timer no longer moves it back.
        slot.enter(4);
        slot.begin_exit(4);
        assert_eq!(slot.current().unwrap().1, Phase::Leaving);

        slot.remove(4);
        assert!(slot.current().is_none());
    }

    #[test]
    fn dismiss_during_automatic_exit_keeps_the_earlier_removal() {
        let mut slot = NotificationSlot::default();
        slot.show(Notification::new(5, "late", Severity::Success, t0()));
        slot.enter(5);
        slot.begin_exit(5);
        slot.dismiss(5, t0() + ms(5200));
        assert_eq!(slot.current().unwrap().1, Phase::Leaving);

        // The automatic removal armed at +5000 fires at +5300.
        slot.remove(5);
        assert!(slot.current().is_none());

        // The removal armed by the dismiss at +5500 finds nothing to do.
        slot.show(Notification::new(6, "next", Severity::Info, t0() + ms(5400)));
        slot.remove(5);
        assert_eq!(slot.current().unwrap().0.id, 6);
    }
}
