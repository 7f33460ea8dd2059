use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::funnel::catalog::QuizStep;
use crate::funnel::state::{Answer, QuizFunnel};
use crate::funnel::validate::is_valid_email;

/// Placeholder for a step the visitor skipped past or emptied again.
const EMPTY_ANSWER: &str = "—";

/// Contact fields collected after the last quiz step. Created empty when
/// the form mounts, consumed once at submission time.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LeadContact {
    pub name: String,
    pub email: String,
    pub company: String,
    pub website: String,
    pub message: String,
    pub consent: bool,
}

impl LeadContact {
    /// The submit button stays disabled until this holds, so invalid input
    /// never reaches the network layer.
    pub fn can_submit(&self) -> bool {
        !self.name.is_empty() && is_valid_email(&self.email) && self.consent
    }
}

/// One "title: value" line per catalog step, in catalog order.
pub fn serialize_answers(steps: &[QuizStep], funnel: &QuizFunnel) -> String {
    steps
        .iter()
        .map(|step| {
            let value = match funnel.answer(&step.key) {
                Some(Answer::Single(v)) if !v.is_empty() => v.clone(),
                Some(Answer::Multi(vs)) if !vs.is_empty() => vs.join(", "),
                _ => EMPTY_ANSWER.to_string(),
            };
            format!("{}: {}", step.title, value)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Wire body for `POST /api/send`. Built once, sent once, not retained.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeadSubmission {
    pub name: String,
    pub email: String,
    pub company: String,
    pub website: String,
    pub message: String,
    #[serde(rename = "submittedAt")]
    pub submitted_at: String,
    pub quiz: String,
}

pub fn build_submission(
    contact: &LeadContact,
    steps: &[QuizStep],
    funnel: &QuizFunnel,
) -> LeadSubmission {
    LeadSubmission {
        name: contact.name.clone(),
        email: contact.email.clone(),
        company: contact.company.clone(),
        website: contact.website.clone(),
        message: contact.message.clone(),
        submitted_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        quiz: serialize_answers(steps, funnel),
    }
}

/// Result of the one-shot submission. `Unconfirmed` covers both transport
/// failures and non-success statuses; whether that still counts as done for
/// the visitor is decided by `config::mask_unconfirmed_submission`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Delivered,
    Unconfirmed,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::funnel::catalog::{quiz_steps, SelectionMode};

    fn filled_contact() -> LeadContact {
        LeadContact {
            name: "Jane".to_string(),
            email: "jane@x.com".to_string(),
            consent: true,
            ..LeadContact::default()
        }
    }

    #[test]
    fn submit_requires_name_email_and_consent() {
        assert!(filled_contact().can_submit());

        let mut no_name = filled_contact();
        no_name.name.clear();
        assert!(!no_name.can_submit());

        let mut bad_email = filled_contact();
        bad_email.email = "a@b".to_string();
        assert!(!bad_email.can_submit());

        let mut no_consent = filled_contact();
        no_consent.consent = false;
        assert!(!no_consent.can_submit());
    }

    #[test]
    fn unanswered_steps_serialize_as_em_dash() {
        let steps = quiz_steps();
        let funnel = QuizFunnel::new();
        let block = serialize_answers(steps, &funnel);

        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(lines.len(), steps.len());
        for (line, step) in lines.iter().zip(steps) {
            assert_eq!(*line, format!("{}: —", step.title));
        }
    }

    #[test]
    fn answered_steps_serialize_values_in_catalog_order() {
        let steps = quiz_steps();
        let mut funnel = QuizFunnel::new();
        funnel.select("projectType", "webapp", SelectionMode::Single);
        funnel.select("scope", "design", SelectionMode::Multi);
        funnel.select("scope", "backend", SelectionMode::Multi);

        let block = serialize_answers(steps, &funnel);
        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(lines[0], "What are you building?: webapp");
        assert_eq!(lines[1], "Which capabilities do you need?: design, backend");
        assert_eq!(lines[2], "Working budget range: —");
    }

    #[test]
    fn submission_carries_contact_fields_and_a_parseable_timestamp() {
        let contact = LeadContact {
            company: "Acme".to_string(),
            ..filled_contact()
        };
        let submission = build_submission(&contact, quiz_steps(), &QuizFunnel::new());

        assert_eq!(submission.name, "Jane");
        assert_eq!(submission.company, "Acme");
        assert!(submission.quiz.contains("Timeline: —"));
        assert!(chrono::DateTime::parse_from_rfc3339(&submission.submitted_at).is_ok());
    }

    #[test]
    fn submission_serializes_with_the_wire_field_names() {
        let submission = build_submission(&filled_contact(), quiz_steps(), &QuizFunnel::new());
        let json = serde_json::to_value(&submission).unwrap();

        assert!(json.get("submittedAt").is_some());
        assert!(json.get("quiz").is_some());
        assert_eq!(json["email"], "jane@x.com");
    }
}
