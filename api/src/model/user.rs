use chrono::NaiveDate;
use derive_new::new;
use garde::Validate;
use kernel::model::{
    id::UserId,
    user::{
        event::{CreateUser, DeleteUser, UpdateUserPassword},
        User,
    },
};
use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult};

/// Parses a birth date written as day/month/year, e.g. "4/7/2002".
///
/// Out-of-range components (month 13, day 32) are rejected rather than
/// rolled over into the next unit.
pub fn parse_birth_date(raw: &str) -> AppResult<NaiveDate> {
    let parts: Vec<&str> = raw.split('/').collect();
    let [day, month, year] = parts.as_slice() else {
        return Err(AppError::InvalidDateFormatError(raw.into()));
    };

    let (Ok(day), Ok(month), Ok(year)) = (
        day.parse::<u32>(),
        month.parse::<u32>(),
        year.parse::<i32>(),
    ) else {
        return Err(AppError::InvalidDateFormatError(raw.into()));
    };

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| AppError::InvalidDateFormatError(raw.into()))
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[garde(length(min = 1))]
    pub name: String,
    #[garde(email)]
    pub email: String,
    #[garde(length(min = 1))]
    pub password: String,
    #[garde(length(min = 1))]
    pub birth_date: String,
}

#[derive(new)]
pub struct CreateUserRequestWithBirthDate(CreateUserRequest, NaiveDate);

impl From<CreateUserRequestWithBirthDate> for CreateUser {
    fn from(value: CreateUserRequestWithBirthDate) -> Self {
        let CreateUserRequestWithBirthDate(
            CreateUserRequest {
                name,
                email,
                password,
                birth_date: _,
            },
            birth_date,
        ) = value;
        CreateUser {
            name,
            email,
            password,
            birth_date,
        }
    }
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[garde(length(min = 1))]
    pub email: String,
    #[garde(length(min = 1))]
    pub password: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

impl From<User> for LoginResponse {
    fn from(value: User) -> Self {
        let User {
            user_id,
            name,
            email,
            birth_date: _,
        } = value;
        Self {
            id: user_id,
            name,
            email,
        }
    }
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VerifyIdentityRequest {
    #[garde(length(min = 1))]
    pub email: String,
    #[garde(length(min = 1))]
    pub birth_date: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyIdentityResponse {
    pub user_id: UserId,
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    #[garde(skip)]
    user_id: UserId,
    #[garde(length(min = 1))]
    new_password: String,
}

impl From<ResetPasswordRequest> for UpdateUserPassword {
    fn from(value: ResetPasswordRequest) -> Self {
        let ResetPasswordRequest {
            user_id,
            new_password,
        } = value;
        UpdateUserPassword {
            user_id,
            new_password,
        }
    }
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAccountRequest {
    #[garde(length(min = 1))]
    password: String,
}

#[derive(new)]
pub struct DeleteAccountRequestWithUserId(UserId, DeleteAccountRequest);

impl From<DeleteAccountRequestWithUserId> for DeleteUser {
    fn from(value: DeleteAccountRequestWithUserId) -> Self {
        let DeleteAccountRequestWithUserId(user_id, DeleteAccountRequest { password }) = value;
        DeleteUser { user_id, password }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_birth_date_accepts_day_month_year() {
        let date = parse_birth_date("4/7/2002").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2002, 7, 4).unwrap());
    }

    #[test]
    fn parse_birth_date_rejects_wrong_segment_count() {
        assert!(matches!(
            parse_birth_date("4/7"),
            Err(AppError::InvalidDateFormatError(_))
        ));
        assert!(matches!(
            parse_birth_date("4/7/2002/1"),
            Err(AppError::InvalidDateFormatError(_))
        ));
        assert!(matches!(
            parse_birth_date(""),
            Err(AppError::InvalidDateFormatError(_))
        ));
    }

    #[test]
    fn parse_birth_date_rejects_non_numeric_segments() {
        assert!(matches!(
            parse_birth_date("a/b/c"),
            Err(AppError::InvalidDateFormatError(_))
        ));
        assert!(matches!(
            parse_birth_date("4/July/2002"),
            Err(AppError::InvalidDateFormatError(_))
        ));
    }

    #[test]
    fn parse_birth_date_rejects_out_of_range_components() {
        assert!(matches!(
            parse_birth_date("4/13/2002"),
            Err(AppError::InvalidDateFormatError(_))
        ));
        assert!(matches!(
            parse_birth_date("32/1/2002"),
            Err(AppError::InvalidDateFormatError(_))
        ));
        // 2002 was not a leap year.
        assert!(matches!(
            parse_birth_date("29/2/2002"),
            Err(AppError::InvalidDateFormatError(_))
        ));
    }
}
