use shared_types::AppError;

/// Convert a transport failure talking to the case-data platform into an AppError.
pub fn reqwest_to_app_error(err: reqwest::Error) -> AppError {
    let message = if err.is_timeout() {
        "Case data service timed out"
    } else if err.is_connect() {
        "Case data service is unreachable"
    } else if err.is_decode() {
        "Case data service returned an unreadable response"
    } else {
        "Case data service request failed"
    };
    AppError::upstream(message).with_cause(err.to_string())
}

/// Convert a case data (de)serialization failure into an AppError.
pub fn serde_to_app_error(err: serde_json::Error) -> AppError {
    AppError::bad_request("Case data does not match the expected shape").with_cause(err.to_string())
}

/// Extension trait providing `.into_app_error()` on reqwest::Error.
pub trait ReqwestErrorExt {
    fn into_app_error(self) -> AppError;
}

impl ReqwestErrorExt for reqwest::Error {
    fn into_app_error(self) -> AppError {
        reqwest_to_app_error(self)
    }
}

/// Extension trait providing `.into_app_error()` on serde_json::Error.
pub trait SerdeErrorExt {
    fn into_app_error(self) -> AppError;
}

impl SerdeErrorExt for serde_json::Error {
    fn into_app_error(self) -> AppError {
        serde_to_app_error(self)
    }
}
