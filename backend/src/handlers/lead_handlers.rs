use std::sync::Arc;
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::error::LeadError;
use crate::mailer::OutgoingEmail;
use crate::AppState;

/// Body of `POST /api/send`. Only `name` and `email` are required; the rest
/// is relayed into the operator email as-is. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
pub struct LeadRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub message: String,
    /// Pre-serialized quiz answer block, one "title: value" line per step.
    #[serde(default)]
    pub quiz: String,
    #[serde(default, rename = "submittedAt")]
    pub submitted_at: String,
}

fn or_dash(value: &str) -> &str {
    if value.trim().is_empty() {
        "—"
    } else {
        value
    }
}

fn format_operator_email(lead: &LeadRequest) -> OutgoingEmail {
    let mut text = format!(
        "Name: {}\nEmail: {}\nCompany: {}\nWebsite: {}\nMessage: {}\n",
        lead.name,
        lead.email,
        or_dash(&lead.company),
        or_dash(&lead.website),
        or_dash(&lead.message),
    );
    if !lead.submitted_at.trim().is_empty() {
        text.push_str(&format!("Submitted: {}\n", lead.submitted_at));
    }
    text.push_str(&format!("Data:\n{}", or_dash(&lead.quiz)));

    OutgoingEmail {
        subject: format!("New lead: {}", lead.name),
        text,
    }
}

pub async fn send_lead(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<LeadRequest>, JsonRejection>,
) -> Result<Json<serde_json::Value>, LeadError> {
    // A body that doesn't parse counts as a failed delivery, not bad input;
    // only absent name/email gets the 400.
    let Json(lead) = payload.map_err(|e| LeadError::DeliveryFailed(anyhow::Error::new(e)))?;

    if lead.name.trim().is_empty() {
        return Err(LeadError::MissingRequiredField("name"));
    }
    if lead.email.trim().is_empty() {
        return Err(LeadError::MissingRequiredField("email"));
    }

    tracing::info!("Lead received from {}", lead.email);

    state.mailer.send(format_operator_email(&lead)).await?;

    Ok(Json(json!({"success": true})))
}
