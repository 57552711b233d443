//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction. It holds:
//! - Database connection pool for data persistence
//! - Token service for issuing and verifying JWTs
//! - bcrypt cost used when hashing new passwords

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use super::service::token::TokenService;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `Arc<TokenService>` is a reference-counted pointer to the signing keys
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// JWT issuer and verifier configured with the signing key, issuer and audience.
    pub tokens: Arc<TokenService>,

    /// bcrypt cost passed to the auth service.
    pub hash_cost: u32,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `tokens` - Configured token service
    /// - `hash_cost` - bcrypt cost for new password hashes
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, tokens: TokenService, hash_cost: u32) -> Self {
        Self {
            db,
            tokens: Arc::new(tokens),
            hash_cost,
        }
    }
}
