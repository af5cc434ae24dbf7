use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::config::contact_options::{is_budget_tier, is_service_category};

/// Contact form exactly as the browser sent it. Missing keys default to
/// empty values so they are reported per field instead of failing to parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactForm {
    #[validate(length(min = 2, code = "too_short", message = "Name must be at least 2 characters"))]
    pub name: String,
    #[validate(email(code = "invalid_format", message = "Please enter a valid email address"))]
    pub email: String,
    #[validate(custom(function = "validate_phone"))]
    pub phone: String,
    pub company_name: Option<String>,
    pub website: Option<String>,
    #[validate(custom(function = "validate_budget"))]
    pub budget: String,
    #[validate(custom(function = "validate_services"))]
    pub services: Vec<String>,
    #[validate(length(min = 10, code = "too_short", message = "Message must be at least 10 characters"))]
    pub message: String,
}

/// A lead that passed every field rule. Only `validate_contact_form` builds one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactLead {
    name: String,
    email: String,
    phone: String,
    company_name: String,
    website: String,
    budget: String,
    services: Vec<String>,
    message: String,
}

impl ContactLead {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    pub fn website(&self) -> &str {
        &self.website
    }

    pub fn budget(&self) -> &str {
        &self.budget
    }

    pub fn services(&self) -> &[String] {
        &self.services
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    #[cfg(test)]
    pub fn to_form(&self) -> ContactForm {
        ContactForm {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            company_name: Some(self.company_name.clone()),
            website: Some(self.website.clone()),
            budget: self.budget.clone(),
            services: self.services.clone(),
            message: self.message.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Budget,
    Services,
    Message,
}

impl ContactField {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(Self::Name),
            "email" => Some(Self::Email),
            "phone" => Some(Self::Phone),
            "budget" => Some(Self::Budget),
            "services" => Some(Self::Services),
            "message" => Some(Self::Message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorKind {
    TooShort,
    InvalidFormat,
    InvalidPhoneNumber,
    RequiredSelection,
}

impl FieldErrorKind {
    fn from_code(code: &str) -> Self {
        match code {
            "too_short" => Self::TooShort,
            "invalid_phone_number" => Self::InvalidPhoneNumber,
            "required_selection" => Self::RequiredSelection,
            _ => Self::InvalidFormat,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub code: FieldErrorKind,
    pub message: String,
}

/// Every rule violation found in one form, keyed by field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<ContactField, FieldError>);

impl FieldErrors {
    #[cfg(test)]
    pub fn get(&self, field: ContactField) -> Option<&FieldError> {
        self.0.get(&field)
    }

    #[cfg(test)]
    pub fn fields(&self) -> impl Iterator<Item = ContactField> + '_ {
        self.0.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let fields = errors
            .field_errors()
            .into_iter()
            .filter_map(|(name, errors)| {
                let field = ContactField::from_name(name)?;
                let first = errors.first()?;
                Some((
                    field,
                    FieldError {
                        code: FieldErrorKind::from_code(&first.code),
                        message: first.message.as_deref().unwrap_or_default().to_string(),
                    },
                ))
            })
            .collect();
        FieldErrors(fields)
    }
}

fn rule_error(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

/// National numbers are read as US numbers; anything else needs its `+` country code.
fn is_valid_phone_number(phone: &str) -> bool {
    phonenumber::parse(Some(phonenumber::country::Id::US), phone)
        .map(|number| phonenumber::is_valid(&number))
        .unwrap_or(false)
}

fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if is_valid_phone_number(phone) {
        Ok(())
    } else {
        Err(rule_error("invalid_phone_number", "Please enter a valid phone number"))
    }
}

fn validate_budget(budget: &str) -> Result<(), ValidationError> {
    if is_budget_tier(budget) {
        Ok(())
    } else {
        Err(rule_error("required_selection", "Please select a budget range"))
    }
}

fn validate_services(services: &[String]) -> Result<(), ValidationError> {
    if !services.is_empty() && services.iter().all(|s| is_service_category(s)) {
        Ok(())
    } else {
        Err(rule_error("required_selection", "You have to select at least one item."))
    }
}

fn dedup_services(services: Vec<String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(services.len());
    for service in services {
        if !unique.contains(&service) {
            unique.push(service);
        }
    }
    unique
}

/// Checks every field independently and either returns the lead or all
/// of the violations at once.
pub fn validate_contact_form(form: ContactForm) -> Result<ContactLead, FieldErrors> {
    form.validate().map_err(FieldErrors::from)?;

    Ok(ContactLead {
        name: form.name,
        email: form.email,
        phone: form.phone,
        company_name: form.company_name.unwrap_or_default(),
        website: form.website.unwrap_or_default(),
        budget: form.budget,
        services: dedup_services(form.services),
        message: form.message,
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sample_form() -> ContactForm {
        ContactForm {
            name: "Al".to_string(),
            email: "a@b.com".to_string(),
            phone: "+14155552671".to_string(),
            company_name: None,
            website: None,
            budget: "5k-10k".to_string(),
            services: vec!["product".to_string()],
            message: "We need a new website built.".to_string(),
        }
    }

    pub(crate) fn sample_lead() -> ContactLead {
        validate_contact_form(sample_form()).expect("sample form is valid")
    }

    #[test]
    fn accepts_valid_form_and_defaults_optional_fields() {
        let lead = validate_contact_form(sample_form()).unwrap();

        assert_eq!(lead.name(), "Al");
        assert_eq!(lead.email(), "a@b.com");
        assert_eq!(lead.phone(), "+14155552671");
        assert_eq!(lead.company_name(), "");
        assert_eq!(lead.website(), "");
        assert_eq!(lead.budget(), "5k-10k");
        assert_eq!(lead.services(), ["product".to_string()]);
        assert_eq!(lead.message(), "We need a new website built.");
    }

    #[test]
    fn revalidating_a_lead_is_a_no_op() {
        let lead = sample_lead();
        let again = validate_contact_form(lead.to_form()).unwrap();
        assert_eq!(again, lead);
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let errors = validate_contact_form(ContactForm::default()).unwrap_err();

        let fields: Vec<_> = errors.fields().collect();
        assert_eq!(
            fields,
            vec![
                ContactField::Name,
                ContactField::Email,
                ContactField::Phone,
                ContactField::Budget,
                ContactField::Services,
                ContactField::Message,
            ]
        );
        assert_eq!(errors.get(ContactField::Name).unwrap().code, FieldErrorKind::TooShort);
        assert_eq!(errors.get(ContactField::Email).unwrap().code, FieldErrorKind::InvalidFormat);
        assert_eq!(
            errors.get(ContactField::Phone).unwrap().code,
            FieldErrorKind::InvalidPhoneNumber
        );
        assert_eq!(
            errors.get(ContactField::Budget).unwrap().code,
            FieldErrorKind::RequiredSelection
        );
        assert_eq!(
            errors.get(ContactField::Services).unwrap().code,
            FieldErrorKind::RequiredSelection
        );
        assert_eq!(errors.get(ContactField::Message).unwrap().code, FieldErrorKind::TooShort);
    }

    #[test]
    fn collects_only_the_failing_fields() {
        let form = ContactForm {
            name: "A".to_string(),
            message: "too short".to_string(),
            ..sample_form()
        };

        let errors = validate_contact_form(form).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.get(ContactField::Name).unwrap().message,
            "Name must be at least 2 characters"
        );
        assert_eq!(
            errors.get(ContactField::Message).unwrap().message,
            "Message must be at least 10 characters"
        );
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        let form = ContactForm {
            name: "Ö".to_string(),
            ..sample_form()
        };
        assert!(validate_contact_form(form).is_err());

        let form = ContactForm {
            name: "Öz".to_string(),
            message: "ääääääääää".to_string(),
            ..sample_form()
        };
        assert!(validate_contact_form(form).is_ok());
    }

    #[test]
    fn rejects_malformed_email() {
        for email in ["", "plainaddress", "a@", "@b.com", "a b@c.com"] {
            let form = ContactForm {
                email: email.to_string(),
                ..sample_form()
            };
            let errors = validate_contact_form(form).unwrap_err();
            assert!(errors.get(ContactField::Email).is_some(), "{email} should fail");
        }
    }

    #[test]
    fn phone_must_be_a_valid_number() {
        for phone in ["", "+1", "+1415555", "555-2671", "not a number"] {
            let form = ContactForm {
                phone: phone.to_string(),
                ..sample_form()
            };
            let errors = validate_contact_form(form).unwrap_err();
            assert_eq!(
                errors.get(ContactField::Phone).map(|e| e.code),
                Some(FieldErrorKind::InvalidPhoneNumber),
                "{phone} should fail"
            );
            assert_eq!(
                errors.get(ContactField::Phone).unwrap().message,
                "Please enter a valid phone number"
            );
        }
    }

    #[test]
    fn national_numbers_default_to_the_us() {
        for phone in ["4155552671", "(415) 555-2671", "415-555-2671", "+358401234567"] {
            let form = ContactForm {
                phone: phone.to_string(),
                ..sample_form()
            };
            assert!(validate_contact_form(form).is_ok(), "{phone} should pass");
        }
    }

    #[test]
    fn budget_must_be_a_configured_tier() {
        let form = ContactForm {
            budget: "1M+".to_string(),
            ..sample_form()
        };
        let errors = validate_contact_form(form).unwrap_err();
        assert_eq!(
            errors.get(ContactField::Budget).unwrap().code,
            FieldErrorKind::RequiredSelection
        );
    }

    #[test]
    fn services_need_a_known_selection() {
        let unknown = ContactForm {
            services: vec!["product".to_string(), "astrology".to_string()],
            ..sample_form()
        };
        assert!(validate_contact_form(unknown).is_err());

        let empty = ContactForm {
            services: Vec::new(),
            ..sample_form()
        };
        let errors = validate_contact_form(empty).unwrap_err();
        assert_eq!(
            errors.get(ContactField::Services).unwrap().message,
            "You have to select at least one item."
        );
    }

    #[test]
    fn duplicate_services_collapse() {
        let form = ContactForm {
            services: vec!["ai".to_string(), "devops".to_string(), "ai".to_string()],
            ..sample_form()
        };
        let lead = validate_contact_form(form).unwrap();
        assert_eq!(lead.services(), ["ai".to_string(), "devops".to_string()]);
    }

    #[test]
    fn keeps_optional_fields_when_given() {
        let form = ContactForm {
            company_name: Some("Acme".to_string()),
            website: Some("not even a url".to_string()),
            ..sample_form()
        };
        let lead = validate_contact_form(form).unwrap();
        assert_eq!(lead.company_name(), "Acme");
        assert_eq!(lead.website(), "not even a url");
    }

    #[test]
    fn missing_json_keys_become_field_errors() {
        let form: ContactForm = serde_json::from_str(r#"{"name": "Al"}"#).unwrap();
        let errors = validate_contact_form(form).unwrap_err();
        assert!(errors.get(ContactField::Name).is_none());
        assert_eq!(errors.len(), 5);
    }

    #[test]
    fn errors_serialize_by_field_name() {
        let form = ContactForm {
            name: String::new(),
            ..sample_form()
        };
        let errors = validate_contact_form(form).unwrap_err();
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": { "code": "too_short", "message": "Name must be at least 2 characters" }
            })
        );
    }
}
