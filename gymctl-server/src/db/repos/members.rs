//! Member repository
//!
//! A member is stored across three tables (members, emergency_contacts,
//! memberships). Register, update and delete touch all three inside one
//! transaction; reads use LEFT JOINs so a member with missing related rows
//! still comes back with empty fields.

use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::models::{EmergencyContact, FieldUpdate, FieldValue, Member, MemberSummary, Membership};
use super::plans::resolve_plan_id;
use super::DbError;

/// Member repository
#[derive(Clone)]
pub struct MemberRepo {
    pool: PgPool,
}

impl MemberRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert member, emergency contact and membership atomically.
    ///
    /// The plan is resolved after the member and contact rows exist; an
    /// unknown plan rolls all of it back.
    pub async fn register(&self, member: &Member) -> Result<i64, DbError> {
        let mut tx = self.pool.begin().await.map_err(DbError::step("starting transaction"))?;

        let member_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO members (full_name, gender, date_of_birth, phone_number, email,
                                 address, height_cm, weight_kg, medical_conditions, fitness_goal)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id::bigint
            "#,
        )
        .bind(&member.full_name)
        .bind(&member.gender)
        .bind(member.date_of_birth)
        .bind(&member.phone_number)
        .bind(&member.email)
        .bind(&member.address)
        .bind(member.height_cm)
        .bind(member.weight_kg)
        .bind(&member.medical_conditions)
        .bind(&member.fitness_goal)
        .fetch_one(&mut *tx)
        .await
        .map_err(DbError::step("creating member"))?;

        let contact = &member.emergency_contact;
        sqlx::query(
            r#"
            INSERT INTO emergency_contacts (member_id, name, relation, phone_number)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(member_id)
        .bind(&contact.name)
        .bind(&contact.relation)
        .bind(&contact.phone_number)
        .execute(&mut *tx)
        .await
        .map_err(DbError::step("adding emergency contact"))?;

        let membership = &member.membership;
        let plan_id = resolve_plan_id(&mut *tx, &membership.plan).await?;

        sqlx::query(
            r#"
            INSERT INTO memberships (member_id, plan_id, joining_date, expiry_date, fee_amount, fee_status)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(member_id)
        .bind(plan_id)
        .bind(membership.joining_date)
        .bind(membership.expiry_date)
        .bind(membership.fee_amount)
        .bind(&membership.fee_status)
        .execute(&mut *tx)
        .await
        .map_err(DbError::step("creating membership"))?;

        tx.commit().await.map_err(DbError::step("committing transaction"))?;
        Ok(member_id)
    }

    /// Get one member joined with contact, membership and plan name.
    pub async fn get(&self, id: i64) -> Result<Member, DbError> {
        let row = sqlx::query(
            r#"
            SELECT m.id::bigint AS id, m.full_name, m.gender, m.date_of_birth, m.phone_number,
                   m.email, m.address, m.height_cm::float8 AS height_cm,
                   m.weight_kg::float8 AS weight_kg, m.medical_conditions, m.fitness_goal,
                   ec.name AS contact_name, ec.relation AS contact_relation,
                   ec.phone_number AS contact_phone,
                   mp.name AS plan_name, ms.joining_date, ms.expiry_date,
                   ms.fee_amount::float8 AS fee_amount, ms.fee_status
            FROM members m
            LEFT JOIN emergency_contacts ec ON m.id = ec.member_id
            LEFT JOIN memberships ms ON m.id = ms.member_id
            LEFT JOIN membership_plans mp ON ms.plan_id = mp.id
            WHERE m.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "member",
            id: id.to_string(),
        })?;

        Ok(member_from_row(&row)?)
    }

    /// List every member as a summary, ordered by id.
    pub async fn list(&self) -> Result<Vec<MemberSummary>, DbError> {
        let rows = sqlx::query(
            r#"
            SELECT m.id::bigint AS id, m.full_name, m.phone_number, m.email,
                   mp.name AS plan_name, ms.fee_status
            FROM members m
            LEFT JOIN memberships ms ON m.id = ms.member_id
            LEFT JOIN membership_plans mp ON ms.plan_id = mp.id
            ORDER BY m.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let members = rows
            .iter()
            .map(|r| {
                Ok::<_, sqlx::Error>(MemberSummary {
                    id: r.try_get("id")?,
                    full_name: text(r, "full_name")?,
                    phone_number: text(r, "phone_number")?,
                    email: text(r, "email")?,
                    plan: text(r, "plan_name")?,
                    fee_status: text(r, "fee_status")?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(members)
    }

    /// Replace member, contact and membership fields atomically.
    ///
    /// No existence check: an unknown id updates nothing and still succeeds.
    /// Returns the number of member rows touched.
    pub async fn update(&self, id: i64, member: &Member) -> Result<u64, DbError> {
        let mut tx = self.pool.begin().await.map_err(DbError::step("starting transaction"))?;

        let updated = sqlx::query(
            r#"
            UPDATE members
            SET full_name = $1, gender = $2, date_of_birth = $3, phone_number = $4,
                email = $5, address = $6, height_cm = $7, weight_kg = $8,
                medical_conditions = $9, fitness_goal = $10
            WHERE id = $11
            "#,
        )
        .bind(&member.full_name)
        .bind(&member.gender)
        .bind(member.date_of_birth)
        .bind(&member.phone_number)
        .bind(&member.email)
        .bind(&member.address)
        .bind(member.height_cm)
        .bind(member.weight_kg)
        .bind(&member.medical_conditions)
        .bind(&member.fitness_goal)
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(DbError::step("updating member"))?
        .rows_affected();

        let contact = &member.emergency_contact;
        sqlx::query(
            r#"
            UPDATE emergency_contacts
            SET name = $1, relation = $2, phone_number = $3
            WHERE member_id = $4
            "#,
        )
        .bind(&contact.name)
        .bind(&contact.relation)
        .bind(&contact.phone_number)
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(DbError::step("updating emergency contact"))?;

        let membership = &member.membership;
        let plan_id = resolve_plan_id(&mut *tx, &membership.plan).await?;

        sqlx::query(
            r#"
            UPDATE memberships
            SET plan_id = $1, joining_date = $2, expiry_date = $3, fee_amount = $4, fee_status = $5
            WHERE member_id = $6
            "#,
        )
        .bind(plan_id)
        .bind(membership.joining_date)
        .bind(membership.expiry_date)
        .bind(membership.fee_amount)
        .bind(&membership.fee_status)
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(DbError::step("updating membership"))?;

        tx.commit().await.map_err(DbError::step("committing transaction"))?;
        Ok(updated)
    }

    /// Delete membership, contact and member, in that order.
    ///
    /// Deleting a missing id is not an error. Returns the number of member
    /// rows removed.
    pub async fn delete(&self, id: i64) -> Result<u64, DbError> {
        let mut tx = self.pool.begin().await.map_err(DbError::step("starting transaction"))?;

        sqlx::query("DELETE FROM memberships WHERE member_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(DbError::step("deleting membership"))?;

        sqlx::query("DELETE FROM emergency_contacts WHERE member_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(DbError::step("deleting emergency contact"))?;

        let deleted = sqlx::query("DELETE FROM members WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(DbError::step("deleting member"))?
            .rows_affected();

        tx.commit().await.map_err(DbError::step("committing transaction"))?;
        Ok(deleted)
    }

    /// Set one member column. A single statement, so no explicit transaction.
    pub async fn update_field(&self, id: i64, update: &FieldUpdate) -> Result<u64, DbError> {
        let query = sqlx::query(update.field.update_sql());
        let query = match &update.value {
            FieldValue::Text(s) => query.bind(s),
            FieldValue::Date(d) => query.bind(*d),
            FieldValue::Number(n) => query.bind(*n),
        };

        let updated = query
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(DbError::step("updating field"))?
            .rows_affected();

        Ok(updated)
    }
}

/// Nullable text column, empty when NULL (LEFT JOIN misses).
fn text(row: &PgRow, column: &str) -> Result<String, sqlx::Error> {
    Ok(row.try_get::<Option<String>, _>(column)?.unwrap_or_default())
}

fn number(row: &PgRow, column: &str) -> Result<f64, sqlx::Error> {
    Ok(row.try_get::<Option<f64>, _>(column)?.unwrap_or_default())
}

fn member_from_row(row: &PgRow) -> Result<Member, sqlx::Error> {
    Ok(Member {
        id: row.try_get("id")?,
        full_name: text(row, "full_name")?,
        gender: text(row, "gender")?,
        date_of_birth: row.try_get("date_of_birth")?,
        phone_number: text(row, "phone_number")?,
        email: text(row, "email")?,
        address: text(row, "address")?,
        height_cm: number(row, "height_cm")?,
        weight_kg: number(row, "weight_kg")?,
        medical_conditions: text(row, "medical_conditions")?,
        fitness_goal: text(row, "fitness_goal")?,
        emergency_contact: EmergencyContact {
            name: text(row, "contact_name")?,
            relation: text(row, "contact_relation")?,
            phone_number: text(row, "contact_phone")?,
        },
        membership: Membership {
            plan: text(row, "plan_name")?,
            joining_date: row.try_get("joining_date")?,
            expiry_date: row.try_get("expiry_date")?,
            fee_amount: number(row, "fee_amount")?,
            fee_status: text(row, "fee_status")?,
        },
    })
}
