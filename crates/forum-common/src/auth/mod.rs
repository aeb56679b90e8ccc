//! Access-token verification
//!
//! Token issuance lives in the upstream auth service; this module only
//! verifies bearer tokens and exposes their claims.

mod jwt;

pub use jwt::{AccessClaims, JwtService};
