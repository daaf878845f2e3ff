pub mod api;
pub mod init;
pub mod invalid_req;
pub mod runtime;

/// `type` field reported for user errors, mirroring the `OpenAI`-style error
/// envelope clients already parse.
pub const INVALID_REQUEST_ERROR_TYPE: &str = "invalid_request_error";
/// `type` field reported for failures on our side.
pub const SERVER_ERROR_TYPE: &str = "server_error";
