//! Form submission model and input validation.
//!
//! The front-end posts a flat JSON object keyed by form-field ids. Known keys are
//! lifted into typed optional fields; the raw object is kept for the facts dump.

use serde_json::{Map, Value};

use crate::errors::AppError;

pub const EMPTY_SUBMISSION_MESSAGE: &str = "Nenhum dado recebido do formulário.";

/// The value the front-end sends for "yes" on radio questions.
pub const YES: &str = "sim";

/// One intake form, as received. Absent means missing, `null` or blank.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormSubmission {
    pub problem_type: Option<String>,
    pub author_name: Option<String>,
    pub author_cpf: Option<String>,
    pub author_address: Option<String>,
    pub author_email: Option<String>,
    pub author_phone: Option<String>,
    pub action_city_state: Option<String>,
    pub company_name: Option<String>,
    pub company_details: Option<String>,
    pub moral_damages_requested: Option<String>,
    pub moral_value: Option<String>,
    pub material_value: Option<String>,
    pub urgent_decision: Option<String>,
    /// Every submitted key, including ones not lifted above.
    pub raw: Map<String, Value>,
}

impl FormSubmission {
    /// Builds a submission from a JSON object. Never fails; non-string values are
    /// kept as their compact JSON text.
    pub fn from_map(raw: Map<String, Value>) -> Self {
        let field = |key: &str| raw.get(key).and_then(field_text);

        FormSubmission {
            problem_type: field("problem-type"),
            author_name: field("author-name"),
            author_cpf: field("author-cpf"),
            author_address: field("author-address"),
            author_email: field("author-email"),
            author_phone: field("author-phone"),
            action_city_state: field("action-city-state"),
            company_name: field("company-name"),
            company_details: field("company-details"),
            moral_damages_requested: field("dano-moral-pergunta"),
            moral_value: field("moral-value"),
            material_value: field("material-value"),
            urgent_decision: field("urgent-decision"),
            raw,
        }
    }

    pub fn wants_urgent_relief(&self) -> bool {
        self.urgent_decision.as_deref() == Some(YES)
    }

    pub fn wants_moral_damages(&self) -> bool {
        self.moral_damages_requested.as_deref() == Some(YES)
    }

    /// Raw submission as indented JSON, keys in sorted order. `null` entries are
    /// dropped, the same as any other absent field.
    pub fn to_pretty_json(&self) -> String {
        let present: Map<String, Value> = self
            .raw
            .iter()
            .filter(|(_, value)| !value.is_null())
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        serde_json::to_string_pretty(&present).unwrap_or_default()
    }
}

fn field_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Parses and validates a raw request body.
///
/// Rejects an empty body, invalid JSON, anything that is not an object, an empty
/// object, and objects missing `problem-type` or `author-name`. Field contents (CPF,
/// e-mail, amounts) are not checked.
pub fn validate_submission(body: &[u8]) -> Result<FormSubmission, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(AppError::Validation(EMPTY_SUBMISSION_MESSAGE.to_string()));
    }

    let value: Value = serde_json::from_slice(body)
        .map_err(|e| AppError::Validation(format!("JSON inválido no corpo da requisição: {e}")))?;

    let raw = match value {
        Value::Object(map) => map,
        Value::Null => return Err(AppError::Validation(EMPTY_SUBMISSION_MESSAGE.to_string())),
        _ => {
            return Err(AppError::Validation(
                "O corpo da requisição deve ser um objeto JSON.".to_string(),
            ))
        }
    };

    if raw.is_empty() {
        return Err(AppError::Validation(EMPTY_SUBMISSION_MESSAGE.to_string()));
    }

    let submission = FormSubmission::from_map(raw);

    let missing: Vec<&str> = [
        ("problem-type", &submission.problem_type),
        ("author-name", &submission.author_name),
    ]
    .into_iter()
    .filter(|(_, value)| value.is_none())
    .map(|(key, _)| key)
    .collect();

    if !missing.is_empty() {
        return Err(AppError::Validation(format!(
            "Campos obrigatórios ausentes: {}.",
            missing.join(", ")
        )));
    }

    Ok(submission)
}
