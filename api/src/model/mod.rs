use serde::Serialize;

pub mod event;
pub mod user;

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}
