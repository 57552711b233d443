//! Request extractors and layers shared by all controllers.
//!
//! - `auth` - Bearer token extractor guarding mutations
//! - `failure` - Panic recovery producing the opaque 500 body
//! - `validation` - JSON body extractor that runs field validation

pub mod auth;
pub mod failure;
pub mod validation;
