use async_trait::async_trait;

use crate::config::google_forms::GoogleFormsFieldMap;
use crate::utils::lead_intake::{LeadForwarder, SinkError};
use crate::utils::lead_validation::ContactLead;

/// Posts leads to a Google Form the way a browser form submit would.
/// The response is opaque to us, so only transport errors count as failures.
pub struct GoogleFormsClient {
    http: reqwest::Client,
    action_url: String,
    fields: GoogleFormsFieldMap,
}

impl GoogleFormsClient {
    pub fn new(action_url: impl Into<String>, fields: GoogleFormsFieldMap) -> Self {
        Self {
            http: reqwest::Client::new(),
            action_url: action_url.into(),
            fields,
        }
    }

    pub fn is_enabled(&self) -> bool {
        !self.action_url.trim().is_empty()
    }

    fn form_body(&self, lead: &ContactLead) -> Vec<(&'static str, String)> {
        vec![
            (self.fields.name, lead.name().to_string()),
            (self.fields.email, lead.email().to_string()),
            (self.fields.phone, lead.phone().to_string()),
            (self.fields.company_name, lead.company_name().to_string()),
            (self.fields.website, lead.website().to_string()),
            (self.fields.budget, lead.budget().to_string()),
            (self.fields.services, lead.services().join(", ")),
            (self.fields.message, lead.message().to_string()),
        ]
    }
}

#[async_trait]
impl LeadForwarder for GoogleFormsClient {
    async fn forward(&self, lead: &ContactLead) -> Result<(), SinkError> {
        if !self.is_enabled() {
            tracing::debug!("Google Forms action url not set, skipping forward");
            return Ok(());
        }

        // status and body are never read
        let _ = self
            .http
            .post(&self.action_url)
            .form(&self.form_body(lead))
            .send()
            .await?;
        Ok(())
    }
}
