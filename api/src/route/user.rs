use axum::{
    routing::{delete, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::user::{
    delete_account, login_user, register_user, reset_password, verify_identity,
};

pub fn build_user_routers() -> Router<AppRegistry> {
    let users_routers = Router::new()
        .route("/register", post(register_user))
        .route("/login", post(login_user))
        .route("/verify-identity", post(verify_identity))
        .route("/reset-password", post(reset_password))
        .route("/me/:user_id", delete(delete_account));

    Router::new().nest("/users", users_routers)
}
