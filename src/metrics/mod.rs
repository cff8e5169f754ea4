// Private module declaration
mod server;

use prometheus::{HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry};
use std::time::Duration;

// Re-export for public API
pub use server::{health_handler, metrics_handler};

// ============================================================================
// Metrics Module - Prometheus metrics for observability
// ============================================================================
//
// Provides metrics for:
// - Customer service operations (count by outcome)
// - Customer service operation latency
//
// All metrics are registered with Prometheus and can be scraped via /metrics
// ============================================================================

/// Central metrics registry for the service
pub struct Metrics {
    registry: Registry,

    pub customer_operations: IntCounterVec,
    pub customer_operation_duration: HistogramVec,
}

impl Metrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let customer_operations = IntCounterVec::new(
            Opts::new("customer_operations_total", "Total customer service operations"),
            &["operation", "outcome"],
        )?;
        registry.register(Box::new(customer_operations.clone()))?;

        let customer_operation_duration = HistogramVec::new(
            HistogramOpts::new(
                "customer_operation_duration_seconds",
                "Customer service operation duration",
            )
            .buckets(vec![0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0]),
            &["operation"],
        )?;
        registry.register(Box::new(customer_operation_duration.clone()))?;

        Ok(Self {
            registry,
            customer_operations,
            customer_operation_duration,
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Record one finished operation; `outcome` is "ok" or an error kind
    pub fn record_operation(&self, operation: &str, outcome: &str, elapsed: Duration) {
        self.customer_operations
            .with_label_values(&[operation, outcome])
            .inc();
        self.customer_operation_duration
            .with_label_values(&[operation])
            .observe(elapsed.as_secs_f64());
    }
}
