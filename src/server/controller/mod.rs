//! HTTP handlers for the public API.
//!
//! Handlers extract request data, call into the service layer, and map domain
//! models to DTOs. Mutating region endpoints take an
//! [`AuthUser`](crate::server::middleware::auth::AuthUser) argument so that the
//! bearer check runs before any work is done.

pub mod auth;
pub mod difficulty;
pub mod health;
pub mod region;
pub mod walk;

#[cfg(test)]
mod test;
