//! Request spans and access logging.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::Level;

pub type HttpTraceLayer = TraceLayer<SharedClassifier<ServerErrorsAsFailures>>;

/// Wraps every request in an `INFO` span carrying method, URI and version.
///
/// Resolution requests include the politeness delay, so the start of each
/// request is logged as well as its completion. Latency is reported in
/// milliseconds; 5xx answers (failed upstream fetches) are logged at `WARN`.
///
/// ```text
/// INFO request{method=GET uri=/resolve?url=https://dir.example/member/1 version=HTTP/1.1}: started processing request
/// INFO request{method=GET uri=/resolve?url=https://dir.example/member/1 version=HTTP/1.1}: finished processing request latency=2143 ms status=200
/// ```
pub fn layer() -> HttpTraceLayer {
    let span = DefaultMakeSpan::new().level(Level::INFO);
    let started = DefaultOnRequest::new().level(Level::INFO);
    let finished = DefaultOnResponse::new()
        .level(Level::INFO)
        .latency_unit(LatencyUnit::Millis);
    let failed = DefaultOnFailure::new()
        .level(Level::WARN)
        .latency_unit(LatencyUnit::Millis);

    TraceLayer::new_for_http()
        .make_span_with(span)
        .on_request(started)
        .on_response(finished)
        .on_failure(failed)
}
