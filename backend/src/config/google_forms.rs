// The spreadsheet-backed Google Form that receives a copy of every lead.
// Leaving the action url empty turns the forwarding off.
pub const GOOGLE_FORM_ACTION_URL: &str =
    "https://docs.google.com/forms/u/0/d/1dTHEPA7uNKSBaYhF-YwQUtjCZObcYnYvJ0EKfB77_JM/formResponse";

/// `entry.<id>` identifier of the form question each lead field is posted to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoogleFormsFieldMap {
    pub name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub company_name: &'static str,
    pub website: &'static str,
    pub budget: &'static str,
    pub services: &'static str,
    pub message: &'static str,
}

pub const GOOGLE_FORM_FIELDS: GoogleFormsFieldMap = GoogleFormsFieldMap {
    name: "entry.2083985832",
    email: "entry.1983861747",
    phone: "entry.1848601088",
    company_name: "entry.126735824",
    website: "entry.510163513",
    budget: "entry.1198400802",
    services: "entry.1614712088",
    message: "entry.61400844",
};
