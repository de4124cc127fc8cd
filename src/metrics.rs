//! Prometheus registry and the per-request collectors.
//!
//! The registry is an explicit value handed to the middleware and the
//! `/metrics` handler through `web::Data` — there is no process-global
//! lookup, which keeps tests isolated from each other.

use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder,
};

/// Histogram buckets for request durations, in seconds.
const DURATION_BUCKETS: &[f64] = &[
    0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
];

/// Thin wrapper over [`prometheus::Registry`]. Clones share the underlying
/// collector set, so a handle can be given to every worker.
#[derive(Clone, Default)]
pub struct MetricsRegistry {
    registry: Registry,
}

impl MetricsRegistry {
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
        }
    }

    /// Create and register a labeled histogram. Fails if `name` is already
    /// taken in this registry.
    pub fn register_histogram(
        &self,
        name: &str,
        help: &str,
        label_names: &[&str],
        buckets: Vec<f64>,
    ) -> Result<HistogramVec, prometheus::Error> {
        let histogram = HistogramVec::new(HistogramOpts::new(name, help).buckets(buckets), label_names)?;
        self.registry.register(Box::new(histogram.clone()))?;
        Ok(histogram)
    }

    /// Create and register a labeled counter. Fails if `name` is already
    /// taken in this registry.
    pub fn register_counter(
        &self,
        name: &str,
        help: &str,
        label_names: &[&str],
    ) -> Result<IntCounterVec, prometheus::Error> {
        let counter = IntCounterVec::new(Opts::new(name, help), label_names)?;
        self.registry.register(Box::new(counter.clone()))?;
        Ok(counter)
    }

    /// Register the platform default collectors (process memory, CPU, fds).
    /// Only available on Linux; a no-op elsewhere.
    pub fn collect_defaults(&self) -> Result<(), prometheus::Error> {
        #[cfg(target_os = "linux")]
        self.registry.register(Box::new(
            prometheus::process_collector::ProcessCollector::for_self(),
        ))?;
        Ok(())
    }

    /// Serialize every registered collector to the text exposition format.
    pub fn render(&self) -> Result<String, prometheus::Error> {
        let mut buf = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buf)?;
        String::from_utf8(buf).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }

    /// Content type of [`MetricsRegistry::render`] output.
    pub fn content_type() -> &'static str {
        "text/plain; version=0.0.4"
    }
}

/// The two request collectors every finished request feeds: a duration
/// histogram and a total counter, labeled identically.
#[derive(Clone)]
pub struct HttpMetrics {
    registry: MetricsRegistry,
    duration: HistogramVec,
    total: IntCounterVec,
}

impl HttpMetrics {
    /// Build a registry with the default process collectors plus the two
    /// request collectors. Duplicate names surface as `Err`, which `main`
    /// treats as fatal.
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = MetricsRegistry::new();
        registry.collect_defaults()?;

        let duration = registry.register_histogram(
            "http_request_duration_seconds",
            "Duration of HTTP requests in seconds",
            &["method", "route", "status_code"],
            DURATION_BUCKETS.to_vec(),
        )?;

        let total = registry.register_counter(
            "http_requests_total",
            "Total number of HTTP requests",
            &["method", "route", "status_code"],
        )?;

        Ok(Self {
            registry,
            duration,
            total,
        })
    }

    /// Record one finished request: exactly one observation and one
    /// increment, with identical label values.
    pub fn record(&self, method: &str, route: &str, status: u16, seconds: f64) {
        let status = status.to_string();
        let labels = [method, route, status.as_str()];

        self.duration.with_label_values(&labels).observe(seconds);
        self.total.with_label_values(&labels).inc();
    }

    pub fn render(&self) -> Result<String, prometheus::Error> {
        self.registry.render()
    }
}
