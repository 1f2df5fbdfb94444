use serde_json::{json, Map, Value};

pub type EventAttributes = Map<String, Value>;

/// Receives `(event, attributes)` pairs. Fire and forget: nothing is
/// reported back to the caller.
pub trait AnalyticsSink {
    fn record(&self, event: &str, attributes: &EventAttributes);
}

/// Writes events to the console under the `analytics` log target.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink;

impl AnalyticsSink for ConsoleSink {
    fn record(&self, event: &str, attributes: &EventAttributes) {
        let payload = serde_json::to_string(attributes).unwrap_or_default();
        log::info!(target: "analytics", "Track Event: {} {}", event, payload);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum TrackedEvent {
    CtaClick {
        button_text: String,
        page_section: Option<String>,
    },
    ProductTrialClick {
        product_name: String,
    },
    PageHidden,
    PageVisible,
}

impl TrackedEvent {
    pub fn name(&self) -> &'static str {
        match self {
            TrackedEvent::CtaClick { .. } => "cta_click",
            TrackedEvent::ProductTrialClick { .. } => "product_trial_click",
            TrackedEvent::PageHidden => "page_hidden",
            TrackedEvent::PageVisible => "page_visible",
        }
    }

    pub fn attributes(&self) -> EventAttributes {
        let value = match self {
            TrackedEvent::CtaClick { button_text, page_section } => json!({
                "button_text": button_text.trim(),
                "page_section": page_section.as_deref().unwrap_or("unknown"),
            }),
            TrackedEvent::ProductTrialClick { product_name } => json!({
                "product_name": product_name,
            }),
            TrackedEvent::PageHidden | TrackedEvent::PageVisible => json!({}),
        };
        match value {
            Value::Object(map) => map,
            _ => EventAttributes::new(),
        }
    }

    pub fn visibility(hidden: bool) -> Self {
        if hidden {
            TrackedEvent::PageHidden
        } else {
            TrackedEvent::PageVisible
        }
    }
}

pub fn track_with(sink: &impl AnalyticsSink, event: &TrackedEvent) {
    sink.record(event.name(), &event.attributes());
}

pub fn track(event: TrackedEvent) {
    track_with(&ConsoleSink, &event);
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    struct RecordingSink {
        events: RefCell<Vec<(String, EventAttributes)>>,
    }

    impl AnalyticsSink for RecordingSink {
        fn record(&self, event: &str, attributes: &EventAttributes) {
            self.events
                .borrow_mut()
                .push((event.to_string(), attributes.clone()));
        }
    }

    #[test]
    fn cta_click_without_section_reports_unknown() {
        let sink = RecordingSink::default();
        track_with(
            &sink,
            &TrackedEvent::CtaClick {
                button_text: "  Start Free Trial ".into(),
                page_section: None,
            },
        );
        let events = sink.events.borrow();
        assert_eq!(events[0].0, "cta_click");
        assert_eq!(events[0].1["button_text"], "Start Free Trial");
        assert_eq!(events[0].1["page_section"], "unknown");
    }

    #[test]
    fn product_trial_click_carries_product_name() {
        let attributes = TrackedEvent::ProductTrialClick {
            product_name: "Noise Cancelling Headphones".into(),
        }
        .attributes();
        assert_eq!(attributes["product_name"], "Noise Cancelling Headphones");
    }

    #[test]
    fn visibility_events_have_no_attributes() {
        assert_eq!(TrackedEvent::visibility(true).name(), "page_hidden");
        assert_eq!(TrackedEvent::visibility(false).name(), "page_visible");
        assert!(TrackedEvent::PageHidden.attributes().is_empty());
    }
}
