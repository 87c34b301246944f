use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A contact-form submission as posted by the frontend.
///
/// Nothing is rejected at this boundary: every known field is optional, and
/// any field the frontend sends beyond these is kept verbatim in `extra` so
/// it reaches storage unchanged. Known fields of a non-text JSON shape are
/// coerced to their text rendering instead of failing the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactSubmission {
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub email: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub phone: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub subject: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub enquery: Option<String>,
    #[serde(
        rename = "editionalInfo",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub editional_info: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Accepts any JSON scalar where text is expected; `null` counts as absent.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Integer(i64),
        Float(f64),
        Boolean(bool),
        Other(Value),
    }

    let value = Option::<Scalar>::deserialize(deserializer)?;
    Ok(value.map(|scalar| match scalar {
        Scalar::Text(text) => text,
        Scalar::Integer(number) => number.to_string(),
        Scalar::Float(number) => number.to_string(),
        Scalar::Boolean(flag) => flag.to_string(),
        Scalar::Other(other) => other.to_string(),
    }))
}
