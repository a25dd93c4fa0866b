//! Per-request tracing.

use std::future::Future;
use std::time::Instant;

use tracing::{Instrument, info, info_span};

use crate::response::Response;

/// Runs `fut` inside a `request` span and logs its outcome.
///
/// Every event a handler or resolver emits while the future runs inherits
/// the span's `method` and `path` fields.
pub(crate) async fn traced<F>(method: &str, path: &str, fut: F) -> Response
where
    F: Future<Output = Response>,
{
    let span = info_span!("request", method, path);
    async move {
        let start = Instant::now();
        let res = fut.await;
        info!(
            status = u16::from(res.status_code()),
            latency_us = u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX),
            "request completed"
        );
        res
    }
    .instrument(span)
    .await
}
