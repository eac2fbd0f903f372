use crate::database::{model::user::UserRow, ConnectionPool};
use async_trait::async_trait;
use bcrypt::{hash, verify, DEFAULT_COST};
use chrono::NaiveDate;
use derive_new::new;
use kernel::model::{
    id::UserId,
    user::{
        event::{CreateUser, DeleteUser, UpdateUserPassword},
        User,
    },
};
use kernel::repository::user::UserRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct UserRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn create(&self, event: CreateUser) -> AppResult<()> {
        let exists: bool =
            sqlx::query_scalar(r#"SELECT EXISTS (SELECT 1 FROM users WHERE email = $1)"#)
                .bind(&event.email)
                .fetch_one(self.db.inner_ref())
                .await
                .map_err(AppError::DbQueryError)?;

        if exists {
            return Err(AppError::EmailAlreadyExistsError(event.email));
        }

        let user_id = UserId::new();
        let password_hash = hash_password(&event.password)?;

        sqlx::query(
            r#"
                INSERT INTO users (user_id, name, email, password_hash, birth_date)
                VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(user_id)
        .bind(&event.name)
        .bind(&event.email)
        .bind(&password_hash)
        .bind(event.birth_date)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::DbQueryError)?;

        Ok(())
    }

    async fn verify_credentials(&self, email: &str, password: &str) -> AppResult<User> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
                SELECT user_id, name, email, password_hash, birth_date
                FROM users
                WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::DbQueryError)?;

        // An unknown email and a wrong password must be indistinguishable.
        let Some(row) = row else {
            return Err(AppError::UnauthenticatedError);
        };
        verify_password(password, &row.password_hash)?;

        Ok(User::from(row))
    }

    async fn find_by_email_and_birth_date(
        &self,
        email: &str,
        birth_date: NaiveDate,
    ) -> AppResult<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
                SELECT user_id, name, email, password_hash, birth_date
                FROM users
                WHERE email = $1 AND birth_date = $2
            "#,
        )
        .bind(email)
        .bind(birth_date)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::DbQueryError)?;

        Ok(row.map(User::from))
    }

    async fn update_password(&self, event: UpdateUserPassword) -> AppResult<()> {
        let password_hash = hash_password(&event.new_password)?;

        let res = sqlx::query(
            r#"
                UPDATE users
                SET password_hash = $2, updated_at = CURRENT_TIMESTAMP
                WHERE user_id = $1
            "#,
        )
        .bind(event.user_id)
        .bind(&password_hash)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::DbQueryError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "user ({}) was not found",
                event.user_id
            )));
        }

        Ok(())
    }

    async fn delete(&self, event: DeleteUser) -> AppResult<()> {
        let mut tx = self.db.begin().await?;

        // The password has to match the stored hash before anything is removed.
        {
            let row: Option<UserRow> = sqlx::query_as(
                r#"
                    SELECT user_id, name, email, password_hash, birth_date
                    FROM users
                    WHERE user_id = $1
                "#,
            )
            .bind(event.user_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

            let Some(row) = row else {
                return Err(AppError::EntityNotFound(format!(
                    "user ({}) was not found",
                    event.user_id
                )));
            };

            verify_password(&event.password, &row.password_hash)?;
        }

        // Owned events go first, then the account record itself.
        sqlx::query(r#"DELETE FROM events WHERE owner_user_id = $1"#)
            .bind(event.user_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

        let res = sqlx::query(r#"DELETE FROM users WHERE user_id = $1"#)
            .bind(event.user_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "no user record has been deleted".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(())
    }
}

fn hash_password(raw: &str) -> AppResult<String> {
    hash(raw, DEFAULT_COST).map_err(AppError::from)
}

fn verify_password(raw: &str, hashed: &str) -> AppResult<()> {
    let valid = verify(raw, hashed)?;
    if !valid {
        return Err(AppError::UnauthenticatedError);
    }
    Ok(())
}
