//! One labelled control of the enrollment form with its inline error
//!
//! Errors appear on blur (required check) or submit (all checks) and are
//! removed as soon as the user types into the field again.

use dioxus::prelude::*;
use landing_domain::{field_ids, FieldId, FieldKind, FieldSpec, SelectOption};

use crate::application::services::CITY_PLACEHOLDER;
use crate::ui::presentation::services::{use_enrollment_service, use_landing_config};
use crate::ui::presentation::state::{EnrollmentState, PageState};

#[component]
pub fn FormField(field: FieldSpec) -> Element {
    let mut state = use_context::<EnrollmentState>();
    let mut page = use_context::<PageState>();
    let service = use_enrollment_service();
    let config = use_landing_config();

    let id = field.id.clone();
    let dom_id = id.to_string();
    let is_country = id.as_str() == field_ids::COUNTRY;
    let is_city = id.as_str() == field_ids::CITY;

    let form = state.form.read();
    let value = form.value(&id).to_string();
    let error = form.error(&id);
    let (options, disabled) = if is_city {
        let cities = form.city_selection();
        (cities.with_placeholder(CITY_PLACEHOLDER), !cities.is_enabled())
    } else {
        let placeholder = field.placeholder.clone().unwrap_or_default();
        let options = std::iter::once(SelectOption::placeholder(placeholder))
            .chain(field.options.iter().cloned())
            .collect::<Vec<_>>();
        (options, false)
    };
    drop(form);

    // (value, label, selected) for each <option>
    let option_rows: Vec<(String, String, bool)> = options
        .into_iter()
        .map(|opt| {
            let selected = opt.value == value;
            (opt.value, opt.label, selected)
        })
        .collect();

    let group_class = if error.is_some() { "form-group has-error" } else { "form-group" };
    let control_class = if error.is_some() { "error" } else { "" };
    let label = if field.required {
        format!("{} *", field.label)
    } else {
        field.label.clone()
    };
    let placeholder = field.placeholder.clone().unwrap_or_default();

    let input_id = id.clone();
    let on_input = move |e: FormEvent| {
        state.form.write().set_value(&input_id, e.value());
    };
    let change_id = id.clone();
    let on_change = move |e: FormEvent| {
        let value = e.value();
        let mut form = state.form.write();
        if is_country {
            form.select_country(&config.country_cities, &value);
        } else {
            form.set_value(&change_id, value);
        }
    };
    let blur_id: FieldId = id;
    let on_blur = move |_| {
        state.form.write().blur(&service, &blur_id);
    };

    rsx! {
        div { class: "{group_class}",
            label { r#for: "{dom_id}", "{label}" }
            match field.kind {
                FieldKind::Select => rsx! {
                    select {
                        id: "{dom_id}",
                        name: "{dom_id}",
                        class: "{control_class}",
                        disabled,
                        onchange: on_change,
                        onblur: on_blur,
                        onmouseenter: move |_| page.set_pointer_over_interactive(true),
                        onmouseleave: move |_| page.set_pointer_over_interactive(false),
                        for (opt_value, opt_label, selected) in option_rows {
                            option {
                                key: "{opt_value}",
                                value: "{opt_value}",
                                selected,
                                "{opt_label}"
                            }
                        }
                    }
                },
                FieldKind::TextArea => rsx! {
                    textarea {
                        id: "{dom_id}",
                        name: "{dom_id}",
                        class: "{control_class}",
                        rows: 4,
                        placeholder: "{placeholder}",
                        value: "{value}",
                        oninput: on_input,
                        onblur: on_blur,
                    }
                },
                kind => rsx! {
                    input {
                        id: "{dom_id}",
                        name: "{dom_id}",
                        r#type: kind.input_type(),
                        class: "{control_class}",
                        placeholder: "{placeholder}",
                        value: "{value}",
                        oninput: on_input,
                        onblur: on_blur,
                        onmouseenter: move |_| page.set_pointer_over_interactive(true),
                        onmouseleave: move |_| page.set_pointer_over_interactive(false),
                    }
                },
            }
            if let Some(error) = error {
                div { class: "field-error", "{error}" }
            }
        }
    }
}
