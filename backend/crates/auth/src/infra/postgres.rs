//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::ProfileId;
use kernel::query::{Listing, contains_pattern};
use platform::password::HashedPassword;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{credential::Credential, profile::Profile};
use crate::domain::repository::{
    AccountRepository, CredentialRepository, ProfileFilter, ProfileRepository,
};
use crate::domain::value_object::{email::Email, user_name::UserName, user_role::UserRole};
use crate::error::{AuthError, AuthResult};

/// PostgreSQL-backed auth repository
#[derive(Clone)]
pub struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Credential Repository Implementation
// ============================================================================

impl CredentialRepository for PgAuthRepository {
    async fn find_credential(&self, user_name: &UserName) -> AuthResult<Option<Credential>> {
        let row = sqlx::query_as::<_, CredentialRow>(
            r#"
            SELECT user_name, password
            FROM credential
            WHERE user_name = $1
            "#,
        )
        .bind(user_name.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_credential()).transpose()
    }

    async fn count_credentials(&self) -> AuthResult<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM credential")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// ============================================================================
// Profile Repository Implementation
// ============================================================================

impl ProfileRepository for PgAuthRepository {
    async fn find_profile(&self, user_name: &UserName) -> AuthResult<Option<Profile>> {
        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
            SELECT
                id,
                user_name,
                name,
                address,
                email,
                phone_number,
                avatar,
                note,
                role,
                is_active,
                create_date,
                create_by,
                update_date,
                update_by
            FROM user_profile
            WHERE user_name = $1
            "#,
        )
        .bind(user_name.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_profile()).transpose()
    }

    async fn update_profile(&self, profile: &Profile) -> AuthResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE user_profile SET
                name = $2,
                address = $3,
                email = $4,
                phone_number = $5,
                note = $6,
                role = $7,
                is_active = $8,
                update_date = $9,
                update_by = $10
            WHERE user_name = $1
            "#,
        )
        .bind(profile.user_name.as_str())
        .bind(&profile.name)
        .bind(&profile.address)
        .bind(profile.email.as_ref().map(Email::as_str))
        .bind(&profile.phone_number)
        .bind(profile.note.as_deref())
        .bind(profile.role.id())
        .bind(profile.is_active)
        .bind(profile.update_date)
        .bind(&profile.update_by)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_profiles(&self, filter: &ProfileFilter) -> AuthResult<Listing<Profile>> {
        let keyword = filter.keyword.as_deref().map(contains_pattern);
        let role = filter.role.map(|r| r.id());
        let active = filter.active.as_option();

        let rows = sqlx::query_as::<_, ProfileRow>(
            r#"
            SELECT
                id,
                user_name,
                name,
                address,
                email,
                phone_number,
                avatar,
                note,
                role,
                is_active,
                create_date,
                create_by,
                update_date,
                update_by
            FROM user_profile
            WHERE ($1::text IS NULL
                   OR user_name ILIKE $1
                   OR name ILIKE $1
                   OR phone_number ILIKE $1)
              AND ($2::smallint IS NULL OR role = $2)
              AND ($3::boolean IS NULL OR is_active = $3)
            ORDER BY user_name ASC
            LIMIT $4 OFFSET $5
            "#,
        )
        .bind(keyword.as_deref())
        .bind(role)
        .bind(active)
        .bind(filter.page.limit)
        .bind(filter.page.offset())
        .fetch_all(&self.pool)
        .await?;

        // total honours every filter; total_active ignores the isActive one
        let (total, total_active): (i64, i64) = sqlx::query_as(
            r#"
            SELECT
                COUNT(*) FILTER (WHERE $3::boolean IS NULL OR is_active = $3),
                COUNT(*) FILTER (WHERE is_active)
            FROM user_profile
            WHERE ($1::text IS NULL
                   OR user_name ILIKE $1
                   OR name ILIKE $1
                   OR phone_number ILIKE $1)
              AND ($2::smallint IS NULL OR role = $2)
            "#,
        )
        .bind(keyword.as_deref())
        .bind(role)
        .bind(active)
        .fetch_one(&self.pool)
        .await?;

        let data = rows
            .into_iter()
            .map(|r| r.into_profile())
            .collect::<AuthResult<Vec<_>>>()?;

        Ok(Listing {
            data,
            total,
            total_active,
            limit: filter.page.limit,
        })
    }
}

// ============================================================================
// Account Repository Implementation
// ============================================================================

impl AccountRepository for PgAuthRepository {
    async fn create_account(
        &self,
        credential: &Credential,
        profile: &Profile,
    ) -> AuthResult<bool> {
        let mut tx = self.pool.begin().await?;

        let inserted = sqlx::query(
            r#"
            INSERT INTO credential (user_name, password)
            VALUES ($1, $2)
            ON CONFLICT (user_name) DO NOTHING
            "#,
        )
        .bind(credential.user_name.as_str())
        .bind(credential.password_hash.as_phc_string())
        .execute(&mut *tx)
        .await?
        .rows_affected();

        if inserted == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        sqlx::query(
            r#"
            INSERT INTO user_profile (
                id,
                user_name,
                name,
                address,
                email,
                phone_number,
                avatar,
                note,
                role,
                is_active,
                create_date,
                create_by,
                update_date,
                update_by
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            "#,
        )
        .bind(profile.id.as_uuid())
        .bind(profile.user_name.as_str())
        .bind(&profile.name)
        .bind(&profile.address)
        .bind(profile.email.as_ref().map(Email::as_str))
        .bind(&profile.phone_number)
        .bind(&profile.avatar)
        .bind(profile.note.as_deref())
        .bind(profile.role.id())
        .bind(profile.is_active)
        .bind(profile.create_date)
        .bind(&profile.create_by)
        .bind(profile.update_date)
        .bind(&profile.update_by)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(true)
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct CredentialRow {
    user_name: String,
    password: String,
}

impl CredentialRow {
    fn into_credential(self) -> AuthResult<Credential> {
        let password_hash = HashedPassword::from_phc_string(self.password)
            .map_err(|e| AuthError::Internal(format!("Stored hash for {}: {}", self.user_name, e)))?;

        Ok(Credential::new(UserName::from_db(self.user_name), password_hash))
    }
}

#[derive(sqlx::FromRow)]
struct ProfileRow {
    id: Uuid,
    user_name: String,
    name: String,
    address: String,
    email: Option<String>,
    phone_number: String,
    avatar: String,
    note: Option<String>,
    role: i16,
    is_active: bool,
    create_date: DateTime<Utc>,
    create_by: String,
    update_date: DateTime<Utc>,
    update_by: String,
}

impl ProfileRow {
    fn into_profile(self) -> AuthResult<Profile> {
        let role = UserRole::from_id(self.role)
            .ok_or_else(|| AuthError::Internal(format!("Invalid role id: {}", self.role)))?;

        Ok(Profile {
            id: ProfileId::from_uuid(self.id),
            user_name: UserName::from_db(self.user_name),
            name: self.name,
            address: self.address,
            email: self.email.map(Email::from_db),
            phone_number: self.phone_number,
            avatar: self.avatar,
            note: self.note,
            role,
            is_active: self.is_active,
            create_date: self.create_date,
            create_by: self.create_by,
            update_date: self.update_date,
            update_by: self.update_by,
        })
    }
}
