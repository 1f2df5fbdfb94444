use std::cell::Cell;
use std::rc::Rc;

use chrono::{Duration, Utc};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::notification::{
    Notification, NotificationAction, NotificationSlot, NotificationTimings, Phase, Severity,
};

fn millis(duration: Duration) -> u32 {
    u32::try_from(duration.num_milliseconds().max(0)).unwrap_or(u32::MAX)
}

/// Handle any component can use to put a toast on screen.
#[derive(Clone, Default)]
pub struct Notifier {
    dispatcher: Option<UseReducerDispatcher<NotificationSlot>>,
    next_id: Rc<Cell<u64>>,
    timings: NotificationTimings,
}

impl PartialEq for Notifier {
    fn eq(&self, other: &Self) -> bool {
        self.dispatcher == other.dispatcher && Rc::ptr_eq(&self.next_id, &other.next_id)
    }
}

impl Notifier {
    /// Replaces whatever is on screen and schedules the automatic dismissal.
    pub fn notify(&self, message: impl Into<String>, severity: Severity) {
        let message = message.into();
        let Some(dispatcher) = self.dispatcher.clone() else {
            log::debug!("notification dropped, no provider mounted: {}", message);
            return;
        };
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        dispatcher.dispatch(NotificationAction::Show(Notification::new(id, message, severity, Utc::now())));

        let timings = self.timings;
        spawn_local(async move {
            let enter = millis(timings.enter_delay);
            let display = millis(timings.display);
            TimeoutFuture::new(enter).await;
            dispatcher.dispatch(NotificationAction::Enter { id });
            TimeoutFuture::new(display.saturating_sub(enter)).await;
            dispatcher.dispatch(NotificationAction::BeginExit { id });
            TimeoutFuture::new(millis(timings.exit)).await;
            dispatcher.dispatch(NotificationAction::Remove { id });
        });
    }

    pub fn dismiss(&self, id: u64) {
        let Some(dispatcher) = self.dispatcher.clone() else {
            return;
        };
        dispatcher.dispatch(NotificationAction::Dismiss { id, at: Utc::now() });
        let exit = millis(self.timings.exit);
        spawn_local(async move {
            TimeoutFuture::new(exit).await;
            dispatcher.dispatch(NotificationAction::Remove { id });
        });
    }
}

#[hook]
pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().unwrap_or_default()
}

#[derive(Properties, PartialEq)]
pub struct NotificationProviderProps {
    pub children: Children,
}

/// Owns the single notification slot and renders it above the page.
#[function_component(NotificationProvider)]
pub fn notification_provider(props: &NotificationProviderProps) -> Html {
    let slot = use_reducer(NotificationSlot::default);
    let next_id = use_state(|| Rc::new(Cell::new(0u64)));

    let notifier = Notifier {
        dispatcher: Some(slot.dispatcher()),
        next_id: (*next_id).clone(),
        timings: *slot.timings(),
    };

    let toast = match slot.current() {
        Some((notification, phase)) => {
            let id = notification.id;
            let on_dismiss = {
                let notifier = notifier.clone();
                Callback::from(move |_: MouseEvent| notifier.dismiss(id))
            };
            let offscreen = matches!(phase, Phase::Entering | Phase::Leaving | Phase::Gone);
            html! {
                <div class={classes!("notification", notification.severity.accent(), offscreen.then_some("translate-x-full"))}>
                    <div class="notification-body">
                        <i class={classes!("fas", format!("fa-{}", notification.severity.icon()))}></i>
                        <span>{ &notification.message }</span>
                        <button class="notification-close" onclick={on_dismiss}>
                            <i class="fas fa-times"></i>
                        </button>
                    </div>
                </div>
            }
        }
        None => html! {},
    };

    html! {
        <ContextProvider<Notifier> context={notifier}>
            { for props.children.iter() }
            { toast }
            <style>
                {r#"
                    .notification {
                        position: fixed;
                        top: 5rem;
                        right: 1rem;
                        z-index: 50;
                        color: #fff;
                        padding: 0.75rem 1.5rem;
                        border-radius: 0.5rem;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.2);
                        transition: transform 300ms ease;
                    }
                    .notification.translate-x-full {
                        transform: translateX(calc(100% + 1rem));
                    }
                    .notification-body {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                    }
                    .notification-close {
                        margin-left: 1rem;
                        background: none;
                        border: none;
                        color: inherit;
                        cursor: pointer;
                    }
                    .bg-green-500 { background: #22c55e; }
                    .bg-red-500 { background: #ef4444; }
                    .bg-yellow-500 { background: #eab308; }
                    .bg-blue-500 { background: #3b82f6; }
                "#}
            </style>
        </ContextProvider<Notifier>>
    }
}
