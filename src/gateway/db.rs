//! Gateway to the relational profile store (Postgres via sqlx).
//!
//! Scalar writes are COALESCE-merging upserts so a null never clobbers an
//! existing value; skills and needs are append-only inserts. Each call
//! acquires a pooled connection, runs its statements in one transaction where
//! more than one is involved, and commits before returning.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use tracing::debug;

use crate::error::Result;
use crate::state::ProfilePatch;

/// Last-known profile row set for one user, as read back from the store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoredProfile {
    pub name: Option<String>,
    pub role: Option<String>,
    pub location: Option<String>,
    pub day_rate: Option<String>,
    pub availability: Option<String>,
    pub work_style: Option<String>,
    pub skills: Vec<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Persistence for profile fields, skills, and needs, keyed by user id.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Merge-upsert the scalar profile fields. `None` fields preserve
    /// whatever the store already holds.
    async fn upsert_profile(&self, user_id: &str, patch: &ProfilePatch) -> Result<()>;

    /// Append one skill row.
    async fn insert_skill(&self, user_id: &str, skill: &str) -> Result<()>;

    /// Append one need row.
    async fn insert_need(&self, user_id: &str, need: &str) -> Result<()>;

    /// Read back the last-known record, or `None` when the user has never
    /// been persisted.
    async fn load_profile(&self, user_id: &str) -> Result<Option<StoredProfile>>;
}

/// Postgres-backed [`ProfileStore`].
#[derive(Debug, Clone)]
pub struct PgProfileStore {
    pool: PgPool,
}

impl PgProfileStore {
    /// Connect a small pool against `database_url`.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;
        Ok(Self { pool })
    }

    /// Wrap an existing pool (useful for sharing one with the host).
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileStore for PgProfileStore {
    async fn upsert_profile(&self, user_id: &str, patch: &ProfilePatch) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO profiles (id, name)
            VALUES ($1, $2)
            ON CONFLICT (id) DO UPDATE SET
                name = COALESCE(EXCLUDED.name, profiles.name),
                updated_at = NOW()
            "#,
        )
        .bind(user_id)
        .bind(patch.name.as_deref())
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO current_state (user_id, role, location, day_rate, availability, work_style)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (user_id) DO UPDATE SET
                role = COALESCE(EXCLUDED.role, current_state.role),
                location = COALESCE(EXCLUDED.location, current_state.location),
                day_rate = COALESCE(EXCLUDED.day_rate, current_state.day_rate),
                availability = COALESCE(EXCLUDED.availability, current_state.availability),
                work_style = COALESCE(EXCLUDED.work_style, current_state.work_style),
                updated_at = NOW()
            "#,
        )
        .bind(user_id)
        .bind(patch.role.as_deref())
        .bind(patch.location.as_deref())
        .bind(patch.day_rate.as_deref())
        .bind(patch.availability.as_deref())
        .bind(patch.work_style.as_deref())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        debug!(user_id, "upserted profile");
        Ok(())
    }

    async fn insert_skill(&self, user_id: &str, skill: &str) -> Result<()> {
        sqlx::query("INSERT INTO skills (user_id, name) VALUES ($1, $2)")
            .bind(user_id)
            .bind(skill)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn insert_need(&self, user_id: &str, need: &str) -> Result<()> {
        sqlx::query("INSERT INTO needs (user_id, description) VALUES ($1, $2)")
            .bind(user_id)
            .bind(need)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn load_profile(&self, user_id: &str) -> Result<Option<StoredProfile>> {
        let profile_row = sqlx::query("SELECT name, updated_at FROM profiles WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        let state_row = sqlx::query(
            "SELECT role, location, day_rate, availability, work_style \
             FROM current_state WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        let skill_rows = sqlx::query("SELECT name FROM skills WHERE user_id = $1 ORDER BY id")
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;

        if profile_row.is_none() && state_row.is_none() && skill_rows.is_empty() {
            return Ok(None);
        }

        let mut stored = StoredProfile::default();
        if let Some(row) = profile_row {
            stored.name = row.try_get("name")?;
            stored.updated_at = row.try_get("updated_at")?;
        }
        if let Some(row) = state_row {
            stored.role = row.try_get("role")?;
            stored.location = row.try_get("location")?;
            stored.day_rate = row.try_get("day_rate")?;
            stored.availability = row.try_get("availability")?;
            stored.work_style = row.try_get("work_style")?;
        }
        stored.skills = skill_rows
            .into_iter()
            .map(|row| row.try_get("name"))
            .collect::<std::result::Result<_, _>>()?;

        Ok(Some(stored))
    }
}
