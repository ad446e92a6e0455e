/**
 * Account Model and Database Operations
 *
 * One account per user, created in the same transaction as the user at
 * signup. The starting balance is seeded uniformly at random in
 * [1, 10001).
 */

use chrono::{DateTime, Utc};
use rand::Rng;
use sqlx::PgExecutor;
use uuid::Uuid;

/// Account row as stored in the database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Account {
    /// Unique account ID
    pub id: Uuid,
    /// Owning user (one-to-one)
    pub user_id: Uuid,
    /// Current balance; non-negative at creation
    pub balance: f64,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Seed a starting balance, uniform in [1, 10001)
pub fn seed_balance() -> f64 {
    rand::thread_rng().gen_range(1.0..10001.0)
}

/// Create an account for a user
///
/// # Arguments
/// * `executor` - Pool, connection, or open transaction (signup passes the
///   transaction that also created the user)
/// * `user_id` - Owning user
///
/// # Returns
/// Created account or error
pub async fn create_account<'e, E>(executor: E, user_id: Uuid) -> Result<Account, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    let id = Uuid::new_v4();
    let balance = seed_balance();
    let now = Utc::now();

    sqlx::query_as::<_, Account>(
        r#"
        INSERT INTO accounts (id, user_id, balance, created_at)
        VALUES ($1, $2, $3, $4)
        RETURNING id, user_id, balance, created_at
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(balance)
    .bind(now)
    .fetch_one(executor)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_balance_range() {
        for _ in 0..1000 {
            let balance = seed_balance();
            assert!(balance >= 1.0);
            assert!(balance < 10001.0);
        }
    }
}
