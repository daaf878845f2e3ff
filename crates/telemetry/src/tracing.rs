use http::{HeaderValue, Request};
use tower_http::request_id::{MakeRequestId as MakeRequestIdTrait, RequestId};
use uuid::Uuid;

/// Header carrying the per-request id, both inbound and outbound.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Generates time-ordered (v7) request ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestId;

impl MakeRequestIdTrait for MakeRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Span factory for `tower_http::trace::TraceLayer` that records the
/// request id assigned by [`MakeRequestId`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SpanFactory;

impl<B> tower_http::trace::MakeSpan<B> for SpanFactory {
    fn make_span(&mut self, request: &Request<B>) -> ::tracing::Span {
        let request_id = request
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();
        ::tracing::info_span!(
            "request",
            method = %request.method(),
            uri = %request.uri(),
            request_id = %request_id,
        )
    }
}
