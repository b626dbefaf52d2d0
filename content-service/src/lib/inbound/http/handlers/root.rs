use axum::http::StatusCode;

use super::ApiSuccess;
use super::MessageData;

pub async fn root() -> ApiSuccess<MessageData> {
    ApiSuccess::new(
        StatusCode::OK,
        MessageData {
            message: "Hello World".to_string(),
        },
    )
}
