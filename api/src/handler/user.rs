use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::id::UserId;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::{
    user::{
        parse_birth_date, CreateUserRequest, CreateUserRequestWithBirthDate, DeleteAccountRequest,
        DeleteAccountRequestWithUserId, LoginRequest, LoginResponse, ResetPasswordRequest,
        VerifyIdentityRequest, VerifyIdentityResponse,
    },
    MessageResponse,
};

pub async fn register_user(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    req.validate(&())?;

    let birth_date = parse_birth_date(&req.birth_date)?;
    registry
        .user_repository()
        .create(CreateUserRequestWithBirthDate::new(req, birth_date).into())
        .await
        .map(|_| {
            (
                StatusCode::CREATED,
                Json(MessageResponse {
                    message: "user created successfully".into(),
                }),
            )
        })
}

pub async fn login_user(
    State(registry): State<AppRegistry>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    req.validate(&())?;

    registry
        .user_repository()
        .verify_credentials(&req.email, &req.password)
        .await
        .map(LoginResponse::from)
        .map(Json)
}

pub async fn verify_identity(
    State(registry): State<AppRegistry>,
    Json(req): Json<VerifyIdentityRequest>,
) -> AppResult<Json<VerifyIdentityResponse>> {
    req.validate(&())?;

    let birth_date = parse_birth_date(&req.birth_date)?;
    registry
        .user_repository()
        .find_by_email_and_birth_date(&req.email, birth_date)
        .await
        .and_then(|user| match user {
            Some(user) => Ok(Json(VerifyIdentityResponse {
                user_id: user.user_id,
            })),
            None => Err(AppError::EntityNotFound("no matching user found".into())),
        })
}

pub async fn reset_password(
    State(registry): State<AppRegistry>,
    Json(req): Json<ResetPasswordRequest>,
) -> AppResult<Json<MessageResponse>> {
    req.validate(&())?;

    registry
        .user_repository()
        .update_password(req.into())
        .await
        .map(|_| {
            Json(MessageResponse {
                message: "password reset successfully".into(),
            })
        })
}

pub async fn delete_account(
    Path(user_id): Path<UserId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<DeleteAccountRequest>,
) -> AppResult<Json<MessageResponse>> {
    req.validate(&())?;

    let delete_user = DeleteAccountRequestWithUserId::new(user_id, req);
    registry
        .user_repository()
        .delete(delete_user.into())
        .await
        .map(|_| {
            Json(MessageResponse {
                message: "account deleted successfully".into(),
            })
        })
}
