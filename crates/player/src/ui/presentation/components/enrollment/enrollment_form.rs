//! Enrollment form section
//!
//! Submitting validates everything; a valid form is handed to the
//! enrollment service while the button shows a busy label. On success the
//! form clears and the confirmation overlay opens, closing itself after a
//! timeout unless the user closes it first.

use dioxus::prelude::*;

use crate::infrastructure::spawn_task;
use crate::ui::presentation::services::{use_enrollment_service, use_landing_config};
use crate::ui::presentation::state::{EnrollmentState, PageState};
use crate::use_platform;

use super::{FormField, SuccessOverlay};

#[component]
pub fn EnrollmentFormView() -> Element {
    let mut state = use_context::<EnrollmentState>();
    let mut page = use_context::<PageState>();
    let service = use_enrollment_service();
    let config = use_landing_config();
    let platform = use_platform();

    let fields: Vec<_> = service
        .schema()
        .fields
        .iter()
        .map(|field| (field.id.to_string(), field.clone()))
        .collect();
    let (submit_label, submit_disabled, submit_error) = {
        let form = state.form.read();
        (
            form.submit_label(),
            form.is_submit_disabled(),
            form.submit_error().map(str::to_string),
        )
    };
    let busy_class = if submit_disabled { "submit-btn loading" } else { "submit-btn" };

    let dismiss_ms = config.timings.overlay_dismiss_ms;
    let on_submit = move |e: FormEvent| {
        e.prevent_default();
        let Some(request) = state.form.write().begin_submit(&service) else {
            return;
        };

        let service = service.clone();
        let platform = platform.clone();
        spawn_task(async move {
            let result = service.send(request).await;
            let ticket = state.form.write().complete_submit(result);
            if let Some(ticket) = ticket {
                platform.sleep_ms(dismiss_ms).await;
                if state.form.write().auto_dismiss(ticket) {
                    tracing::debug!("Confirmation overlay closed by timer");
                }
            }
        });
    };

    rsx! {
        div { class: "enrollment-form-container",
            form {
                id: "enrollmentForm",
                class: "enrollment-form",
                novalidate: true,
                onsubmit: on_submit,
                div { class: "form-grid",
                    for (key, field) in fields {
                        FormField { key: "{key}", field }
                    }
                }
                if let Some(message) = submit_error {
                    div { class: "form-error", role: "alert", "{message}" }
                }
                button {
                    r#type: "submit",
                    class: "{busy_class}",
                    disabled: submit_disabled,
                    onmouseenter: move |_| page.set_pointer_over_interactive(true),
                    onmouseleave: move |_| page.set_pointer_over_interactive(false),
                    if submit_disabled {
                        span { class: "spinner" }
                    }
                    span { "{submit_label}" }
                }
            }
        }
        SuccessOverlay {}
    }
}
