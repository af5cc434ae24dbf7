use std::sync::Arc;
use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use serde_json::json;

use crate::AppState;
use crate::config::contact_options::{contact_options, ContactOptions};
use crate::utils::lead_validation::{validate_contact_form, ContactForm};

pub async fn get_contact_options() -> Json<ContactOptions> {
    Json(contact_options())
}

pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    Json(form): Json<ContactForm>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    let lead = match validate_contact_form(form) {
        Ok(lead) => lead,
        Err(errors) => {
            tracing::info!("Rejected contact form with {} invalid field(s)", errors.len());
            return Err((
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({"errors": errors}))
            ));
        }
    };

    match state.lead_intake.submit(lead).await {
        Ok(receipt) => Ok(Json(json!({
            "message": "Message sent successfully!",
            "submittedAt": receipt.submitted_at.to_rfc3339(),
        }))),
        Err(e) => {
            tracing::error!("Contact submission failed: {}", e);
            Err((
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({"error": "Failed to send message. Please try again or contact us directly."}))
            ))
        }
    }
}
