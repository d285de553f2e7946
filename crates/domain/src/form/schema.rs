//! The ordered set of fields making up a form

use serde::{Deserialize, Serialize};

use super::field::{field_ids, FieldId, FieldKind, FieldSpec, SelectOption};
use crate::location::CountryCityTable;

/// Courses offered on the enrollment form
const COURSES: &[&str] = &[
    "Web Development",
    "Data Analytics",
    "Digital Marketing",
    "Cloud Computing",
    "Cyber Security",
];

/// Ordered field list of a form
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FormSchema {
    pub fields: Vec<FieldSpec>,
}

impl FormSchema {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    /// The enrollment form. Country options are taken from `table`.
    pub fn enrollment(table: &CountryCityTable) -> Self {
        let course_options = COURSES
            .iter()
            .map(|course| SelectOption::new(crate::location::slugify(course), *course))
            .collect();

        Self::new(vec![
            FieldSpec::new(
                FieldId::from_static(field_ids::FIRST_NAME),
                "First Name",
                FieldKind::Text,
            )
            .required()
            .with_placeholder("Enter your first name"),
            FieldSpec::new(
                FieldId::from_static(field_ids::LAST_NAME),
                "Last Name",
                FieldKind::Text,
            )
            .required()
            .with_placeholder("Enter your last name"),
            FieldSpec::new(
                FieldId::from_static(field_ids::EMAIL),
                "Email Address",
                FieldKind::Email,
            )
            .required()
            .with_placeholder("you@example.com"),
            FieldSpec::new(
                FieldId::from_static(field_ids::PHONE),
                "Phone Number",
                FieldKind::Phone,
            )
            .required()
            .with_placeholder("+592 000 0000"),
            FieldSpec::new(
                FieldId::from_static(field_ids::COUNTRY),
                "Country",
                FieldKind::Select,
            )
            .required()
            .with_placeholder("Select Country")
            .with_options(table.country_options()),
            FieldSpec::new(FieldId::from_static(field_ids::CITY), "City", FieldKind::Select)
                .required()
                .with_placeholder("Select City"),
            FieldSpec::new(
                FieldId::from_static(field_ids::COURSE),
                "Course of Interest",
                FieldKind::Select,
            )
            .required()
            .with_placeholder("Select Course")
            .with_options(course_options),
            FieldSpec::new(
                FieldId::from_static(field_ids::MESSAGE),
                "Additional Comments",
                FieldKind::TextArea,
            )
            .with_placeholder("Tell us about your goals"),
        ])
    }

    /// Look up a field by id
    pub fn field(&self, id: &FieldId) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| &f.id == id)
    }

    /// Fields marked as required, in form order
    pub fn required_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|f| f.required)
    }

    /// Fields of the given kind, in form order
    pub fn fields_of_kind(&self, kind: FieldKind) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(move |f| f.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enrollment_form_marks_message_optional() {
        let schema = FormSchema::enrollment(&CountryCityTable::default());
        let message = schema
            .field(&FieldId::new(field_ids::MESSAGE).unwrap())
            .unwrap();
        assert!(!message.required);
        assert_eq!(schema.required_fields().count(), 7);
    }

    #[test]
    fn enrollment_country_options_come_from_table() {
        let schema = FormSchema::enrollment(&CountryCityTable::default());
        let country = schema
            .field(&FieldId::new(field_ids::COUNTRY).unwrap())
            .unwrap();
        let values: Vec<_> = country.options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["guyana", "zambia", "other"]);
    }

    #[test]
    fn course_values_are_slugs() {
        let schema = FormSchema::enrollment(&CountryCityTable::default());
        let course = schema
            .field(&FieldId::new(field_ids::COURSE).unwrap())
            .unwrap();
        assert_eq!(course.options[0].value, "web-development");
        assert_eq!(course.options[0].label, "Web Development");
    }
}
