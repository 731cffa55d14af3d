//! Prometheus metrics for the service.
//!
//! Each `ApiMetrics` owns its registry, so several apps (tests) can live in
//! one process without clashing registrations.

use prometheus::{
    Encoder, Histogram, HistogramOpts, IntCounter, IntCounterVec, Opts, Registry, TextEncoder,
};

/// Buckets for the 1-100 copy score
const SCORE_BUCKETS: [f64; 9] = [10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0];

pub struct ApiMetrics {
    registry: Registry,
    generations: IntCounterVec,
    fallbacks: IntCounter,
    copy_score: Histogram,
}

impl ApiMetrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let generations = IntCounterVec::new(
            Opts::new(
                "adcopy_generations_total",
                "Generated copy artifacts by kind and engine used",
            ),
            &["kind", "engine"],
        )?;
        let fallbacks = IntCounter::new(
            "adcopy_engine_fallbacks_total",
            "Requests that fell back to the rule-based engine",
        )?;
        let copy_score = Histogram::with_opts(
            HistogramOpts::new("adcopy_copy_score", "Total score of scored copy")
                .buckets(SCORE_BUCKETS.to_vec()),
        )?;

        registry.register(Box::new(generations.clone()))?;
        registry.register(Box::new(fallbacks.clone()))?;
        registry.register(Box::new(copy_score.clone()))?;

        Ok(Self {
            registry,
            generations,
            fallbacks,
            copy_score,
        })
    }

    pub fn record_generation(&self, kind: &str, engine: &str, fell_back: bool) {
        self.generations.with_label_values(&[kind, engine]).inc();
        if fell_back {
            self.fallbacks.inc();
        }
    }

    pub fn observe_score(&self, total: f64) {
        self.copy_score.observe(total);
    }

    pub fn encode(&self) -> Result<String, prometheus::Error> {
        encode(&self.registry)
    }
}

pub fn encode(registry: &Registry) -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();
    encoder.encode(&registry.gather(), &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).to_string())
}
