use prometheus_client::{
    encoding::{EncodeLabelSet, EncodeLabelValue},
    metrics::{
        counter::Counter,
        family::Family,
        histogram::{Histogram, exponential_buckets},
    },
    registry::Registry,
};

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Method {
    Get,
    Post,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Status {
    Success,
    Error,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
struct MethodLabels {
    method: Method,
    status: Status,
}

/// Request counters and latency shared by every service; clones point at the same series.
#[derive(Clone, Debug)]
pub struct Metrics {
    requests: Family<MethodLabels, Counter>,
    duration: Histogram,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            requests: Family::default(),
            duration: Histogram::new(exponential_buckets(0.0005, 2.0, 14)),
        }
    }

    pub fn register(&self, registry: &mut Registry) {
        registry.register(
            "loan_requests",
            "Number of loan service operations",
            self.requests.clone(),
        );
        registry.register(
            "loan_request_duration_seconds",
            "Loan service operation latency",
            self.duration.clone(),
        );
    }

    pub fn record(&self, method: Method, status: Status, elapsed_secs: f64) {
        self.requests
            .get_or_create(&MethodLabels { method, status })
            .inc();
        self.duration.observe(elapsed_secs);
    }

    pub fn count(&self, method: Method, status: Status) -> u64 {
        self.requests
            .get_or_create(&MethodLabels { method, status })
            .get()
    }
}
