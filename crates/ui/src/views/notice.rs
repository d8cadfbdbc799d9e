use std::time::Duration;

use dioxus::prelude::*;

use coach_core::effects::NOTIFICATION_DISMISS_MS;
use coach_core::{Clock, Severity};
use services::Notifier;

fn severity_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "notice notice--info",
        Severity::Success => "notice notice--success",
        Severity::Warning => "notice notice--warning",
    }
}

/// Adds a toast and wakes the stack again once it has expired, so the entry
/// leaves the screen without user interaction.
pub fn push_notice(
    mut notifier: Signal<Notifier>,
    clock: Clock,
    text: String,
    severity: Severity,
) {
    notifier.write().push(text, severity, clock.now());
    spawn(async move {
        tokio::time::sleep(Duration::from_millis(NOTIFICATION_DISMISS_MS as u64)).await;
        notifier.write().visible(clock.now());
    });
}

/// The stacked transient notifications in the page corner.
#[component]
pub fn NotificationStack(notifier: Signal<Notifier>, clock: Clock) -> Element {
    let items = notifier.read().snapshot(clock.now());
    rsx! {
        div { class: "notice-stack",
            for note in items {
                div { key: "{note.id}", class: severity_class(note.severity),
                    span { class: "notice-icon", "{note.icon()}" }
                    span { class: "notice-text", "{note.text}" }
                }
            }
        }
    }
}
