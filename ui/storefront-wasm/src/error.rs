use std::cell::{BorrowError, BorrowMutError};
use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failure of a single catalog request.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("{status} {status_text}")]
    Status { status: u16, status_text: String },
    #[error("JSON parse error: {0}")]
    Decode(String),
}

/// Failures that escape a loader's own error handling.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("ui state is already in use")]
    StateBusy,
    #[error("no `document` on window")]
    NoDocument,
    #[error("storefront has not been started")]
    NotStarted,
}

impl From<BorrowError> for AppError {
    fn from(_: BorrowError) -> Self {
        AppError::StateBusy
    }
}

impl From<BorrowMutError> for AppError {
    fn from(_: BorrowMutError) -> Self {
        AppError::StateBusy
    }
}

impl From<AppError> for JsValue {
    fn from(err: AppError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
