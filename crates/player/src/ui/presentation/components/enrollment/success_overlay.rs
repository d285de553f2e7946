use dioxus::prelude::*;

use crate::ui::presentation::state::EnrollmentState;

/// Confirmation shown after a successful enrollment
#[component]
pub fn SuccessOverlay() -> Element {
    let mut state = use_context::<EnrollmentState>();
    let reference = state
        .form
        .read()
        .overlay()
        .map(|receipt| receipt.short_reference());

    let Some(reference) = reference else {
        return rsx! {};
    };

    rsx! {
        div { class: "success-modal", role: "dialog", "aria-modal": "true",
            div { class: "success-modal-content",
                div { class: "success-icon", "✓" }
                h3 { "Success!" }
                p { "Thank you for your interest! Our team will contact you within 24 hours." }
                p { class: "success-reference", "Reference: {reference}" }
                button {
                    class: "success-close",
                    onclick: move |_| state.form.write().dismiss_overlay(),
                    "Close"
                }
            }
        }
    }
}
