use actix_web::body::EitherBody;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder};
use serde::Deserialize;
use serde::Serialize;

/// Standard response structure for all REST API endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub success: bool,
    /// Human-readable message (mutations and errors; absent on plain reads)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Optional payload data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// HTTP status to respond with; not part of the JSON body
    #[serde(skip)]
    status: StatusCode,
}

impl<T> ApiResponse<T> {
    /// Create a success response with data
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
            status: StatusCode::OK,
        }
    }

    /// Create a success response with message and data
    pub fn ok_with_message(message: &str, data: T) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
            status: StatusCode::OK,
        }
    }

    /// Create a `201 Created` response with message and data
    pub fn created_with_message(message: &str, data: T) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
            status: StatusCode::CREATED,
        }
    }
}

impl ApiResponse<()> {
    /// Create a success response with a message only (no data)
    pub fn ok_message(message: &str) -> Self {
        ApiResponse {
            success: true,
            message: Some(message.into()),
            data: None,
            status: StatusCode::OK,
        }
    }
}

/// Implement Responder for ApiResponse<T> so it can be returned from actix-web handlers
impl<T> Responder for ApiResponse<T>
where
    T: Serialize,
{
    type Body = EitherBody<String>;

    fn respond_to(self, _req: &actix_web::HttpRequest) -> HttpResponse<EitherBody<String>> {
        HttpResponse::build(self.status)
            .content_type("application/json")
            .body(serde_json::to_string(&self).unwrap())
            .map_into_right_body()
    }
}
