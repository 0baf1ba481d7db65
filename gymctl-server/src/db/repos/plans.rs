//! Membership plan lookups
//!
//! Plans are read-only here; they're referenced by name in payloads and
//! resolved to an id inside the caller's transaction.

use sqlx::{PgConnection, PgPool, Row};

use crate::models::Plan;
use super::DbError;

/// Plan repository
#[derive(Clone)]
pub struct PlanRepo {
    pool: PgPool,
}

impl PlanRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List every plan ordered by name.
    pub async fn list(&self) -> Result<Vec<Plan>, DbError> {
        let rows = sqlx::query("SELECT id::bigint AS id, name FROM membership_plans ORDER BY name")
            .fetch_all(&self.pool)
            .await?;

        let plans = rows
            .into_iter()
            .map(|r| {
                Ok::<_, sqlx::Error>(Plan {
                    id: r.try_get("id")?,
                    name: r.try_get("name")?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(plans)
    }
}

/// Resolve a plan name to its id on an open connection or transaction.
///
/// An unmatched name is `DbError::UnknownPlan`, which callers surface as a
/// client error.
pub(crate) async fn resolve_plan_id(conn: &mut PgConnection, name: &str) -> Result<i64, DbError> {
    sqlx::query_scalar::<_, i64>("SELECT id::bigint FROM membership_plans WHERE name = $1")
        .bind(name)
        .fetch_optional(conn)
        .await
        .map_err(DbError::step("looking up membership plan"))?
        .ok_or_else(|| DbError::UnknownPlan {
            name: name.to_owned(),
        })
}
