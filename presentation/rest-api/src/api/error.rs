use poem::http::StatusCode;
use poem::{Endpoint, EndpointExt, IntoEndpoint, IntoResponse, Response};
use poem_openapi::error::{ParseParamError, ParseRequestPayloadError};
use poem_openapi::{Object, payload::Json};

#[derive(Object, Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
    /// Product ids the error refers to (missing or not found)
    #[oai(skip_serializing_if_is_none)]
    pub ids: Option<Vec<i32>>,
}

impl ErrorResponse {
    pub fn new(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            message: message.to_string(),
            ids: None,
        }
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

/// Answers requests rejected by parameter or payload validation with an
/// [`ErrorResponse`] body instead of poem's plain-text message.
pub fn with_json_rejections<E>(endpoint: E) -> impl Endpoint
where
    E: IntoEndpoint + 'static,
    E::Endpoint: 'static,
{
    endpoint
        .into_endpoint()
        .catch_error(|err: ParseParamError| async move {
            rejection("request.invalid_parameter", &err)
        })
        .catch_error(|err: ParseRequestPayloadError| async move {
            rejection("request.invalid_payload", &err)
        })
}

fn rejection(message: &str, err: &dyn std::error::Error) -> Response {
    tracing::debug!("Rejected request: {}", err);
    Json(ErrorResponse::new("ValidationError", message))
        .with_status(StatusCode::BAD_REQUEST)
        .into_response()
}
