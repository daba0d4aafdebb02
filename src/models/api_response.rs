use http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::{ListmonkError, ListmonkResult};

/// Standard envelope wrapping every successful Listmonk response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// The actual data returned.
    pub data: T,
}

/// Body of a non-success response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorBody {
    /// The `message` field, when the body is the usual `{"message": ...}`
    /// object.
    pub message: Option<String>,

    /// The body exactly as received.
    pub raw: String,
}

impl ErrorBody {
    pub(crate) fn from_bytes(bytes: &[u8]) -> Self {
        #[derive(Deserialize)]
        struct Message {
            message: Option<String>,
        }

        let message = serde_json::from_slice::<Message>(bytes)
            .ok()
            .and_then(|m| m.message);

        Self {
            message,
            raw: String::from_utf8_lossy(bytes).into_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Outcome<T> {
    Success(ApiResponse<T>),
    Failure(ErrorBody),
}

/// The answer to a single API call.
///
/// A reply is either a decoded [`ApiResponse`] (2xx) or an [`ErrorBody`]
/// (anything else), always together with the HTTP status. Non-success
/// statuses are ordinary values here, so callers can branch on e.g. 404 vs
/// 400 without going through the error path.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply<T> {
    status: StatusCode,
    outcome: Outcome<T>,
}

impl<T> Reply<T> {
    pub(crate) fn success(status: StatusCode, envelope: ApiResponse<T>) -> Self {
        Self {
            status,
            outcome: Outcome::Success(envelope),
        }
    }

    pub(crate) fn failure(status: StatusCode, body: ErrorBody) -> Self {
        Self {
            status,
            outcome: Outcome::Failure(body),
        }
    }

    /// HTTP status of the response.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns true for 2xx responses.
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Success(_))
    }

    /// The decoded envelope, if the call succeeded.
    pub fn envelope(&self) -> Option<&ApiResponse<T>> {
        match &self.outcome {
            Outcome::Success(envelope) => Some(envelope),
            Outcome::Failure(_) => None,
        }
    }

    /// The envelope's `data`, if the call succeeded.
    pub fn data(&self) -> Option<&T> {
        self.envelope().map(|envelope| &envelope.data)
    }

    /// The error body, if the call did not succeed.
    pub fn error(&self) -> Option<&ErrorBody> {
        match &self.outcome {
            Outcome::Success(_) => None,
            Outcome::Failure(body) => Some(body),
        }
    }

    /// Converts the reply into a `Result`, turning non-success statuses into
    /// [`ListmonkError::ApiError`].
    pub fn into_result(self) -> ListmonkResult<ApiResponse<T>> {
        match self.outcome {
            Outcome::Success(envelope) => Ok(envelope),
            Outcome::Failure(body) => Err(ListmonkError::ApiError {
                status: self.status,
                message: body.message.unwrap_or(body.raw),
            }),
        }
    }

    /// Like [`Reply::into_result`], unwrapping the envelope.
    pub fn into_data(self) -> ListmonkResult<T> {
        self.into_result().map(|envelope| envelope.data)
    }
}
