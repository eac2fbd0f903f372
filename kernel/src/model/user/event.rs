use crate::model::id::UserId;
use chrono::NaiveDate;

pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub birth_date: NaiveDate,
}

pub struct UpdateUserPassword {
    pub user_id: UserId,
    pub new_password: String,
}

pub struct DeleteUser {
    pub user_id: UserId,
    pub password: String,
}
