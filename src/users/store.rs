/**
 * User Model and Database Operations
 *
 * This module handles user data and database operations.
 *
 * `create_user` is generic over the executor so signup can run it inside
 * the same transaction as the account creation; the lookup and update
 * helpers take the pool directly.
 */

use chrono::{DateTime, Utc};
use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;

/// User row as stored in the database
///
/// Deliberately does not derive `Serialize`: the password hash must never
/// end up in a response body. Handlers map rows to the response types in
/// `handlers::types` instead.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID, generated server-side)
    pub id: Uuid,
    /// Username (unique, email-shaped)
    pub username: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Partial field replacement for a profile update
///
/// `None` fields are left unchanged; `password_hash`, when present, must
/// already be a bcrypt hash.
#[derive(Debug, Default)]
pub struct UserChanges {
    pub password_hash: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Create a new user
///
/// # Arguments
/// * `executor` - Pool, connection, or open transaction
/// * `username` - Unique email-shaped username
/// * `password_hash` - Already-hashed password
/// * `first_name` / `last_name` - Profile names
///
/// # Returns
/// Created user or error; a unique-index violation on `username` surfaces
/// as `sqlx::Error::Database`.
pub async fn create_user<'e, E>(
    executor: E,
    username: &str,
    password_hash: &str,
    first_name: &str,
    last_name: &str,
) -> Result<User, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, username, password_hash, first_name, last_name, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, username, password_hash, first_name, last_name, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(username)
    .bind(password_hash)
    .bind(first_name)
    .bind(last_name)
    .bind(now)
    .bind(now)
    .fetch_one(executor)
    .await
}

/// Get user by username
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_username(
    pool: &PgPool,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, password_hash, first_name, last_name, created_at, updated_at
        FROM users
        WHERE username = $1
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await
}

/// Get user by ID
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_id(pool: &PgPool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, password_hash, first_name, last_name, created_at, updated_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Apply a partial update to a user's row
///
/// Only the row matching `id` is touched; absent fields keep their stored
/// values.
///
/// # Returns
/// Updated user, or None if no such user exists
pub async fn update_user(
    pool: &PgPool,
    id: Uuid,
    changes: UserChanges,
) -> Result<Option<User>, sqlx::Error> {
    let now = Utc::now();

    sqlx::query_as::<_, User>(
        r#"
        UPDATE users
        SET password_hash = COALESCE($1, password_hash),
            first_name = COALESCE($2, first_name),
            last_name = COALESCE($3, last_name),
            updated_at = $4
        WHERE id = $5
        RETURNING id, username, password_hash, first_name, last_name, created_at, updated_at
        "#,
    )
    .bind(changes.password_hash)
    .bind(changes.first_name)
    .bind(changes.last_name)
    .bind(now)
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Escape LIKE/ILIKE metacharacters so a filter matches literally
///
/// Without this, `%`, `_`, and `\` in user input act as pattern syntax and
/// `a_b` would match "aXb".
fn escape_like(filter: &str) -> String {
    filter
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// Search users by name
///
/// Case-insensitive substring match against first name or last name.
/// An empty filter matches every user.
pub async fn search_users(pool: &PgPool, filter: &str) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, password_hash, first_name, last_name, created_at, updated_at
        FROM users
        WHERE first_name ILIKE '%' || $1 || '%' ESCAPE '\'
           OR last_name ILIKE '%' || $1 || '%' ESCAPE '\'
        ORDER BY created_at
        "#,
    )
    .bind(escape_like(filter))
    .fetch_all(pool)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like_passes_plain_text_through() {
        assert_eq!(escape_like("anna"), "anna");
        assert_eq!(escape_like(""), "");
    }

    #[test]
    fn test_escape_like_neutralizes_wildcards() {
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
        // Backslash is escaped first, so escaped wildcards stay escaped
        assert_eq!(escape_like("\\%"), "\\\\\\%");
    }
}
