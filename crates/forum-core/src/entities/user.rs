//! User entity - author display projection
//!
//! Users are owned by the external auth system; only the fields the forum
//! joins into responses (plus the subscription tier the gate reads) appear
//! here.

use crate::value_objects::EntityId;

/// User projection for author display and tier gating
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: EntityId,
    pub username: String,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    /// Raw subscription tier label as stored by the auth system
    pub tier: String,
}

impl User {
    /// Name shown beside the user's content
    pub fn display_label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.username)
    }
}
