//! Interaction model of the enrollment form
//!
//! Holds everything the form component renders: values, inline errors, the
//! dependent city options, the pending flag and the confirmation overlay.
//! The component owns one of these inside a signal and forwards DOM events.

use std::collections::BTreeMap;

use landing_domain::{
    field_ids, CitySelection, CountryCityTable, FieldError, FieldId, FormState, TimerGate,
    TimerTicket,
};

use crate::application::dto::{EnrollmentRequest, SubmissionReceipt};
use crate::ports::outbound::SubmissionError;

use super::EnrollmentService;

pub const SUBMIT_LABEL: &str = "Enroll Now";
pub const SUBMIT_BUSY_LABEL: &str = "Processing...";
pub const CITY_PLACEHOLDER: &str = "Select City";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Pending,
}

#[derive(Debug, Clone, Default)]
pub struct EnrollmentForm {
    values: FormState,
    errors: BTreeMap<FieldId, FieldError>,
    cities: CitySelection,
    phase: SubmitPhase,
    overlay: Option<SubmissionReceipt>,
    overlay_timer: TimerGate,
    submit_error: Option<String>,
}

impl EnrollmentForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, id: &FieldId) -> &str {
        self.values.value(id)
    }

    pub fn values(&self) -> &FormState {
        &self.values
    }

    pub fn error(&self, id: &FieldId) -> Option<FieldError> {
        self.errors.get(id).copied()
    }

    pub fn city_selection(&self) -> &CitySelection {
        &self.cities
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn overlay(&self) -> Option<&SubmissionReceipt> {
        self.overlay.as_ref()
    }

    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    /// Input event: store the value and drop any error shown for the field
    pub fn set_value(&mut self, id: &FieldId, value: impl Into<String>) {
        self.values.set(id, value);
        self.errors.remove(id);
    }

    /// Country change: rebuild the city options and reset the chosen city
    pub fn select_country(&mut self, table: &CountryCityTable, country_key: &str) {
        let country = FieldId::from_static(field_ids::COUNTRY);
        let city = FieldId::from_static(field_ids::CITY);

        self.set_value(&country, country_key);
        self.set_value(&city, "");
        self.cities = table.city_selection(country_key);
        tracing::debug!(
            country = country_key,
            cities = self.cities.options().len(),
            "City options updated"
        );
    }

    /// Blur event: required check only, format errors wait for submit
    pub fn blur(&mut self, service: &EnrollmentService, id: &FieldId) {
        match service.check_field(id, self.values.value(id)) {
            Ok(()) => {
                self.errors.remove(id);
            }
            Err(err) => {
                self.errors.insert(id.clone(), err);
            }
        }
    }

    /// Submit event. Returns the request to send, or `None` when the form is
    /// invalid or a submission is already in flight.
    pub fn begin_submit(&mut self, service: &EnrollmentService) -> Option<EnrollmentRequest> {
        if self.phase == SubmitPhase::Pending {
            return None;
        }
        self.submit_error = None;

        match service.prepare(&self.values) {
            Ok(request) => {
                self.errors.clear();
                self.phase = SubmitPhase::Pending;
                Some(request)
            }
            Err(report) => {
                tracing::debug!(errors = report.len(), "Enrollment form invalid");
                self.errors = report.iter().map(|(id, err)| (id.clone(), err)).collect();
                None
            }
        }
    }

    /// Settle a pending submission. On success the form is cleared and the
    /// overlay shown; the returned ticket is for the auto-dismiss timer.
    pub fn complete_submit(
        &mut self,
        result: Result<SubmissionReceipt, SubmissionError>,
    ) -> Option<TimerTicket> {
        self.phase = SubmitPhase::Idle;
        match result {
            Ok(receipt) => {
                self.values.clear();
                self.errors.clear();
                self.cities = CitySelection::Disabled;
                self.overlay = Some(receipt);
                Some(self.overlay_timer.arm())
            }
            Err(err) => {
                self.submit_error = Some(err.to_string());
                None
            }
        }
    }

    pub fn dismiss_overlay(&mut self) {
        self.overlay = None;
        self.overlay_timer.disarm();
    }

    /// Timer callback. Only the timer started for the visible overlay closes it.
    pub fn auto_dismiss(&mut self, ticket: TimerTicket) -> bool {
        if self.overlay_timer.fire(ticket) {
            self.overlay = None;
            true
        } else {
            false
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.phase {
            SubmitPhase::Idle => SUBMIT_LABEL,
            SubmitPhase::Pending => SUBMIT_BUSY_LABEL,
        }
    }

    pub fn is_submit_disabled(&self) -> bool {
        self.phase == SubmitPhase::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::testing::fixtures;
    use crate::ports::outbound::MockEnrollmentSubmissionPort;

    fn id(raw: &str) -> FieldId {
        FieldId::new(raw).unwrap()
    }

    fn filled_form(table: &CountryCityTable) -> EnrollmentForm {
        let values = fixtures::valid_form();
        let mut form = EnrollmentForm::new();
        // Country first, selecting it resets the city
        form.select_country(table, values.value(&id(field_ids::COUNTRY)));
        for (field, value) in values.iter() {
            if field.as_str() != field_ids::COUNTRY {
                form.set_value(field, value);
            }
        }
        form
    }

    #[test]
    fn typing_clears_the_field_error() {
        let service = fixtures::enrollment_service(MockEnrollmentSubmissionPort::new());
        let mut form = EnrollmentForm::new();
        let first = id(field_ids::FIRST_NAME);

        form.blur(&service, &first);
        assert_eq!(form.error(&first), Some(FieldError::Required));

        form.set_value(&first, "A");
        assert_eq!(form.error(&first), None);
    }

    #[test]
    fn country_change_resets_city() {
        let table = CountryCityTable::default();
        let mut form = EnrollmentForm::new();
        let city = id(field_ids::CITY);

        form.select_country(&table, "guyana");
        form.set_value(&city, "linden");
        form.select_country(&table, "zambia");

        assert_eq!(form.value(&city), "");
        assert_eq!(form.city_selection().options().len(), 10);

        form.select_country(&table, "atlantis");
        assert!(!form.city_selection().is_enabled());
    }

    #[test]
    fn country_change_clears_stale_city_error() {
        let table = CountryCityTable::default();
        let service = fixtures::enrollment_service(MockEnrollmentSubmissionPort::new());
        let mut form = EnrollmentForm::new();
        let city = id(field_ids::CITY);

        form.select_country(&table, "guyana");
        form.blur(&service, &city);
        assert_eq!(form.error(&city), Some(FieldError::Required));

        form.select_country(&table, "zambia");
        assert_eq!(form.error(&city), None);

        // Reappears on the next blur
        form.blur(&service, &city);
        assert_eq!(form.error(&city), Some(FieldError::Required));
    }

    #[test]
    fn invalid_submit_shows_errors_and_stays_idle() {
        let service = fixtures::enrollment_service(MockEnrollmentSubmissionPort::new());
        let mut form = EnrollmentForm::new();
        form.set_value(&id(field_ids::EMAIL), "user@");

        assert!(form.begin_submit(&service).is_none());
        assert_eq!(form.phase(), SubmitPhase::Idle);
        assert_eq!(
            form.error(&id(field_ids::EMAIL)),
            Some(FieldError::InvalidEmail)
        );
        assert_eq!(form.error(&id(field_ids::PHONE)), Some(FieldError::Required));
    }

    #[test]
    fn pending_submit_blocks_a_second_one() {
        let table = CountryCityTable::default();
        let service = fixtures::enrollment_service(MockEnrollmentSubmissionPort::new());
        let mut form = filled_form(&table);

        assert!(form.begin_submit(&service).is_some());
        assert_eq!(form.submit_label(), SUBMIT_BUSY_LABEL);
        assert!(form.is_submit_disabled());
        assert!(form.begin_submit(&service).is_none());
    }

    #[test]
    fn success_clears_form_and_shows_overlay() {
        let table = CountryCityTable::default();
        let service = fixtures::enrollment_service(MockEnrollmentSubmissionPort::new());
        let mut form = filled_form(&table);
        form.begin_submit(&service);

        let ticket = form.complete_submit(Ok(fixtures::receipt()));
        assert!(ticket.is_some());
        assert!(form.values().is_empty());
        assert!(form.overlay().is_some());
        assert_eq!(form.submit_label(), SUBMIT_LABEL);
        assert!(!form.is_submit_disabled());
    }

    #[test]
    fn failure_keeps_values_and_reports() {
        let table = CountryCityTable::default();
        let service = fixtures::enrollment_service(MockEnrollmentSubmissionPort::new());
        let mut form = filled_form(&table);
        form.begin_submit(&service);

        let ticket = form.complete_submit(Err(SubmissionError::Unavailable("offline".into())));
        assert!(ticket.is_none());
        assert_eq!(form.value(&id(field_ids::FIRST_NAME)), "Ada");
        assert!(form.submit_error().is_some());
        assert_eq!(form.phase(), SubmitPhase::Idle);
    }

    #[test]
    fn stale_timer_leaves_newer_overlay_open() {
        let mut form = EnrollmentForm::new();
        let first = form.complete_submit(Ok(fixtures::receipt())).unwrap();
        form.dismiss_overlay();
        let second = form.complete_submit(Ok(fixtures::receipt())).unwrap();

        assert!(!form.auto_dismiss(first));
        assert!(form.overlay().is_some());
        assert!(form.auto_dismiss(second));
        assert!(form.overlay().is_none());
    }
}
