//! User database model (display projection)

use sqlx::FromRow;

/// Database model for the users table, restricted to the columns the forum
/// reads
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: String,
    pub username: String,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    pub tier: String,
}
