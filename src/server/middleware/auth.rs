use axum::{extract::FromRequestParts, http::header::AUTHORIZATION, http::request::Parts};

use crate::server::{
    error::{auth::AuthError, AppError},
    service::token::Claims,
    state::AppState,
};

/// Caller authenticated by a valid `Authorization: Bearer <jwt>` header.
///
/// Adding this extractor to a handler makes the endpoint reject requests without
/// a token, or with one that fails signature, issuer, audience or expiry checks,
/// with 401 before the handler body runs.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub claims: Claims,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts).ok_or(AuthError::MissingToken)?;

        let claims = state.tokens.verify(token)?;

        Ok(Self { claims })
    }
}

/// Extracts the token from an `Authorization` header using the `Bearer` scheme.
fn bearer_token(parts: &Parts) -> Option<&str> {
    let header = parts.headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = header.split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn parts(header: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri("/api/regions");
        if let Some(value) = header {
            builder = builder.header(AUTHORIZATION, value);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[test]
    fn reads_bearer_token_in_any_scheme_case() {
        assert_eq!(bearer_token(&parts(Some("Bearer abc.def"))), Some("abc.def"));
        assert_eq!(bearer_token(&parts(Some("bearer abc.def"))), Some("abc.def"));
    }

    #[test]
    fn ignores_missing_or_foreign_schemes() {
        assert_eq!(bearer_token(&parts(None)), None);
        assert_eq!(bearer_token(&parts(Some("Basic dXNlcjpwYXNz"))), None);
        assert_eq!(bearer_token(&parts(Some("Bearer "))), None);
    }
}
