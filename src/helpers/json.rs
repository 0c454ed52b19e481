use actix_web::error::{Error, InternalError};
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;

/// Error envelope for requests rejected before they reach the review service.
#[derive(Serialize, Debug)]
pub struct JsonResponse {
    pub status: String,
    pub message: String,
    pub code: u16,
}

#[derive(Default)]
pub struct JsonResponseBuilder {
    message: String,
}

impl JsonResponse {
    pub fn build() -> JsonResponseBuilder {
        JsonResponseBuilder::default()
    }
}

impl JsonResponseBuilder {
    pub fn set_msg<I: Into<String>>(mut self, message: I) -> Self {
        self.message = message.into();
        self
    }

    fn into_error(self, status: StatusCode, fallback: &str) -> Error {
        let message = if self.message.trim().is_empty() {
            fallback.to_string()
        } else {
            self.message
        };

        let body = JsonResponse {
            status: "Error".to_string(),
            message: message.clone(),
            code: status.as_u16(),
        };
        InternalError::from_response(message, HttpResponse::build(status).json(body)).into()
    }

    /// 400 for a body that deserialized but failed validation.
    pub fn form_error<I: Into<String>>(self, message: I) -> Error {
        self.set_msg(message)
            .into_error(StatusCode::BAD_REQUEST, "Validation error")
    }

    /// 400 for a body or query that could not be read at all.
    pub fn bad_request<I: Into<String>>(self, message: I) -> Error {
        self.set_msg(message)
            .into_error(StatusCode::BAD_REQUEST, "Bad request")
    }
}
