use diesel::prelude::*;
use crate::schema::contacts;

#[cfg(test)]
#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = contacts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Contact {
    pub id: Option<i32>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company_name: String, // empty when not given
    pub website: String, // empty when not given, never validated
    pub budget: String, // one of the budget tier values
    pub services: String, // json array of service category values
    pub message: String,
    pub submitted_at: i64, // int timestamp utc epoch, set by the server
}

#[derive(Insertable)]
#[diesel(table_name = contacts)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company_name: String,
    pub website: String,
    pub budget: String,
    pub services: String,
    pub message: String,
    pub submitted_at: i64,
}
