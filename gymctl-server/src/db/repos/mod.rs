//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Owns a clone of the shared pool, built once at startup
//! - Multi-statement writes run inside one `sqlx::Transaction`; an early
//!   return drops the transaction, which rolls it back
//! - Every statement is parameterized

pub mod members;
pub mod plans;

pub use members::MemberRepo;
pub use plans::PlanRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// A statement inside a multi-step operation failed
    #[error("error {action}: {source}")]
    Step {
        action: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("invalid membership plan: '{name}'")]
    UnknownPlan { name: String },
}

impl DbError {
    /// Tag a sqlx error with the step that produced it.
    ///
    /// ```ignore
    /// sqlx::query("...").execute(&mut *tx).await.map_err(DbError::step("deleting member"))?;
    /// ```
    pub fn step(action: &'static str) -> impl FnOnce(sqlx::Error) -> DbError {
        move |source| DbError::Step { action, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_error_names_the_action() {
        let err = DbError::step("creating member")(sqlx::Error::RowNotFound);
        assert!(err.to_string().starts_with("error creating member: "));
    }

    #[test]
    fn unknown_plan_display() {
        let err = DbError::UnknownPlan { name: "Platinum".into() };
        assert_eq!(err.to_string(), "invalid membership plan: 'Platinum'");
    }
}
