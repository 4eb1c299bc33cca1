//! Stock input validation.
//!
//! Request payloads are decoded into [`CreateStock`] with every field
//! optional, so that a missing field surfaces as a validation failure
//! rather than a decode failure.

use serde::Deserialize;
use validator::{Validate, ValidationErrors};

use crate::error::CoreError;

/// Maximum length of a stock name, in characters.
pub const NAME_MAX_LEN: usize = 200;

/// Default records inserted into an empty store at startup.
pub const DEFAULT_STOCKS: [(&str, u32); 2] = [("Apple", 17780), ("Alphabet Inc Class A", 102140)];

/// Candidate stock as submitted by a client (JSON body or form fields).
///
/// Client-supplied `id` and timestamp fields are not part of this type and
/// are dropped during deserialization.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateStock {
    #[validate(
        required(message = "name is required"),
        length(min = 1, max = 200, message = "name must be between 1 and 200 characters")
    )]
    pub name: Option<String>,

    /// Value in EUR cent.
    #[validate(required(message = "value is required"))]
    pub value: Option<u32>,
}

/// Validate a candidate stock, returning its name and value on success.
pub fn validate_create_stock(input: &CreateStock) -> Result<(String, u32), CoreError> {
    input
        .validate()
        .map_err(|errors| CoreError::Validation(describe(&errors)))?;

    match (&input.name, input.value) {
        (Some(name), Some(value)) => Ok((name.clone(), value)),
        _ => Err(CoreError::Validation("name and value are required".into())),
    }
}

/// Flatten validator output into a single deterministic message.
fn describe(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = field.to_string();
            errs.iter().map(move |e| match &e.message {
                Some(msg) => msg.to_string(),
                None => format!("{field} is invalid"),
            })
        })
        .collect();
    messages.sort();
    messages.join("; ")
}
