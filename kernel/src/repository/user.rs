use crate::model::user::{
    event::{CreateUser, DeleteUser, UpdateUserPassword},
    User,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use shared::error::AppResult;

#[async_trait]
pub trait UserRepository: Send + Sync {
    // Register a new account. Fails when the email is already taken.
    async fn create(&self, event: CreateUser) -> AppResult<()>;
    // Look up the account by email and check the password against the stored hash.
    // A missing account and a wrong password surface as the same error.
    async fn verify_credentials(&self, email: &str, password: &str) -> AppResult<User>;
    // Identity check used as the password-reset precondition.
    async fn find_by_email_and_birth_date(
        &self,
        email: &str,
        birth_date: NaiveDate,
    ) -> AppResult<Option<User>>;
    async fn update_password(&self, event: UpdateUserPassword) -> AppResult<()>;
    // Delete the account together with every event it owns.
    async fn delete(&self, event: DeleteUser) -> AppResult<()>;
}
