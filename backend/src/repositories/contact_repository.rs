use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
#[cfg(test)]
use crate::models::contact_models::Contact;
use crate::{
    models::contact_models::NewContact,
    schema::contacts,
    utils::lead_intake::{LeadStore, SinkError},
    utils::lead_validation::ContactLead,
    DbPool,
};

pub struct ContactRepository {
    pool: DbPool
}

impl ContactRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    // Insert one submitted lead
    pub fn create_contact(&self, new_contact: &NewContact) -> Result<(), SinkError> {
        let mut conn = self.pool.get()?;
        diesel::insert_into(contacts::table)
            .values(new_contact)
            .execute(&mut conn)?;
        Ok(())
    }

    #[cfg(test)]
    pub fn count(&self) -> Result<i64, SinkError> {
        let mut conn = self.pool.get()?;
        let total = contacts::table
            .count()
            .get_result(&mut conn)?;
        Ok(total)
    }

    // Most recently stored lead, if any
    #[cfg(test)]
    pub fn latest(&self) -> Result<Option<Contact>, SinkError> {
        let mut conn = self.pool.get()?;
        let contact = contacts::table
            .order(contacts::id.desc())
            .select(Contact::as_select())
            .first::<Contact>(&mut conn)
            .optional()?;
        Ok(contact)
    }
}

fn to_new_contact(lead: &ContactLead, submitted_at: DateTime<Utc>) -> Result<NewContact, SinkError> {
    Ok(NewContact {
        name: lead.name().to_string(),
        email: lead.email().to_string(),
        phone: lead.phone().to_string(),
        company_name: lead.company_name().to_string(),
        website: lead.website().to_string(),
        budget: lead.budget().to_string(),
        services: serde_json::to_string(lead.services())?,
        message: lead.message().to_string(),
        submitted_at: submitted_at.timestamp(),
    })
}

#[async_trait]
impl LeadStore for ContactRepository {
    async fn persist(&self, lead: &ContactLead, submitted_at: DateTime<Utc>) -> Result<(), SinkError> {
        let new_contact = to_new_contact(lead, submitted_at)?;
        self.create_contact(&new_contact)
    }
}
