use chrono::NaiveDate;
use kernel::model::{id::UserId, user::User};

#[derive(sqlx::FromRow)]
pub struct UserRow {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub birth_date: NaiveDate,
}

// The stored hash never leaves the adapter layer.
impl From<UserRow> for User {
    fn from(value: UserRow) -> Self {
        let UserRow {
            user_id,
            name,
            email,
            password_hash: _,
            birth_date,
        } = value;
        User {
            user_id,
            name,
            email,
            birth_date,
        }
    }
}
