//! Request-timing middleware.
//!
//! Wraps every request, measures wall time from entry to response
//! completion, and records it against the [`HttpMetrics`] collectors.
//! Measurement fires on normal responses and on errors escaping the
//! inner service; a connection dropped mid-request drops the future and
//! records nothing.

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error,
};
use futures_util::future::{ready, LocalBoxFuture, Ready};
use std::time::Instant;

use crate::metrics::HttpMetrics;

/// Label value used when no registered route pattern matched the request.
/// Raw paths are deliberately not used here: arbitrary 404 paths would grow
/// label cardinality without bound.
pub const UNMATCHED_ROUTE: &str = "unmatched";

/// Middleware factory; wrap with `App::wrap(RequestMetrics::new(handle))`.
#[derive(Clone)]
pub struct RequestMetrics {
    metrics: HttpMetrics,
}

impl RequestMetrics {
    pub fn new(metrics: HttpMetrics) -> Self {
        Self { metrics }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequestMetrics
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = RequestMetricsMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestMetricsMiddleware {
            service,
            metrics: self.metrics.clone(),
        }))
    }
}

pub struct RequestMetricsMiddleware<S> {
    service: S,
    metrics: HttpMetrics,
}

impl<S, B> Service<ServiceRequest> for RequestMetricsMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let start = Instant::now();
        let method = req.method().to_string();
        let metrics = self.metrics.clone();
        let fut = self.service.call(req);

        Box::pin(async move {
            match fut.await {
                Ok(res) => {
                    let route = res
                        .request()
                        .match_pattern()
                        .unwrap_or_else(|| UNMATCHED_ROUTE.to_string());
                    let status = res.status().as_u16();
                    metrics.record(&method, &route, status, start.elapsed().as_secs_f64());
                    Ok(res)
                }
                Err(err) => {
                    // The request is gone with the inner service, so the
                    // matched pattern is no longer reachable.
                    let status = err.error_response().status().as_u16();
                    metrics.record(&method, UNMATCHED_ROUTE, status, start.elapsed().as_secs_f64());
                    Err(err)
                }
            }
        })
    }
}
