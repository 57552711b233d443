use std::collections::BTreeMap;

use axum::{
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::server::error::AppError;

/// JSON body extractor that also runs the body's `validator` rules.
///
/// Malformed JSON, a missing body and failed field rules are all reported as
/// 400 with per-field messages before the handler runs.
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;

        value
            .validate()
            .map_err(|errors| AppError::Validation(field_messages(&errors)))?;

        Ok(Self(value))
    }
}

/// Query string extractor reporting malformed parameters as a 400 validation body.
#[derive(FromRequestParts)]
#[from_request(via(Query), rejection(AppError))]
pub struct ValidatedQuery<T>(pub T);

/// Path extractor reporting unparsable segments, such as a bad id, as a 400
/// validation body.
#[derive(FromRequestParts)]
#[from_request(via(Path), rejection(AppError))]
pub struct ValidatedPath<T>(pub T);

/// Collects messages per field, keyed by the camelCase wire name.
fn field_messages(errors: &ValidationErrors) -> BTreeMap<String, Vec<String>> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errors)| {
            let messages = errors
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid value ({})", e.code))
                })
                .collect();

            (to_camel_case(&field), messages)
        })
        .collect()
}

fn to_camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;

    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }

    out
}
