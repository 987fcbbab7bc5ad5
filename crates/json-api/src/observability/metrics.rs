//! Prometheus metrics and the `/metrics` exposition endpoint.
//!
//! Metrics live in one process-wide registry, built on first use. When the
//! registry cannot be built every recording call is a no-op and `/metrics`
//! answers 500.

use std::sync::OnceLock;

use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounter, IntCounterVec, IntGauge, Opts, Registry,
    TextEncoder, core::Collector,
};
use salvo::{
    Request, Response, handler,
    http::{
        StatusCode,
        header::{CONTENT_TYPE, HeaderValue},
    },
};
use tracing::error;

const DURATION_BUCKETS: [f64; 13] = [
    0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
];

#[derive(Debug)]
struct Metrics {
    registry: Registry,
    http_requests: IntCounterVec,
    http_duration: HistogramVec,
    http_in_flight: IntGauge,
    cart_mutations: IntCounterVec,
    orders_placed: IntCounter,
}

impl Metrics {
    fn build() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let http_requests = register(
            &registry,
            IntCounterVec::new(
                Opts::new(
                    "storefront_json_http_requests_total",
                    "HTTP requests by method, route, status class and status code.",
                ),
                &["method", "route", "status_class", "status_code"],
            )?,
        )?;

        let http_duration = register(
            &registry,
            HistogramVec::new(
                HistogramOpts::new(
                    "storefront_json_http_request_duration_seconds",
                    "HTTP request duration in seconds by method and route.",
                )
                .buckets(DURATION_BUCKETS.to_vec()),
                &["method", "route"],
            )?,
        )?;

        let http_in_flight = register(
            &registry,
            IntGauge::new(
                "storefront_json_http_requests_in_flight",
                "HTTP requests currently being served.",
            )?,
        )?;

        let cart_mutations = register(
            &registry,
            IntCounterVec::new(
                Opts::new(
                    "storefront_cart_mutations_total",
                    "Cart changes by operation.",
                ),
                &["operation"],
            )?,
        )?;

        let orders_placed = register(
            &registry,
            IntCounter::new(
                "storefront_orders_placed_total",
                "Orders placed through checkout.",
            )?,
        )?;

        Ok(Self {
            registry,
            http_requests,
            http_duration,
            http_in_flight,
            cart_mutations,
            orders_placed,
        })
    }
}

fn register<C>(registry: &Registry, collector: C) -> Result<C, prometheus::Error>
where
    C: Collector + Clone + 'static,
{
    registry.register(Box::new(collector.clone()))?;

    Ok(collector)
}

static METRICS: OnceLock<Option<Metrics>> = OnceLock::new();

fn metrics() -> Option<&'static Metrics> {
    METRICS
        .get_or_init(|| {
            Metrics::build()
                .inspect_err(|source| error!("failed to build metrics registry: {source}"))
                .ok()
        })
        .as_ref()
}

/// Counts a request as in flight until dropped.
#[derive(Debug)]
pub(super) struct InFlightRequestGuard {
    gauge: Option<&'static IntGauge>,
}

impl InFlightRequestGuard {
    pub(super) fn track() -> Self {
        let gauge = metrics().map(|metrics| &metrics.http_in_flight);

        if let Some(gauge) = gauge {
            gauge.inc();
        }

        Self { gauge }
    }
}

impl Drop for InFlightRequestGuard {
    fn drop(&mut self) {
        if let Some(gauge) = self.gauge {
            gauge.dec();
        }
    }
}

pub(super) fn observe_request(method: &str, route: &str, status_code: u16, duration_seconds: f64) {
    let Some(metrics) = metrics() else {
        return;
    };

    let code = status_code.to_string();

    metrics
        .http_requests
        .with_label_values(&[method, route, status_class(status_code), code.as_str()])
        .inc();

    metrics
        .http_duration
        .with_label_values(&[method, route])
        .observe(duration_seconds);
}

/// Count one change to a customer's cart.
pub(crate) fn record_cart_mutation(operation: &str) {
    if let Some(metrics) = metrics() {
        metrics
            .cart_mutations
            .with_label_values(&[operation])
            .inc();
    }
}

/// Count one successfully placed order.
pub(crate) fn record_order_placed() {
    if let Some(metrics) = metrics() {
        metrics.orders_placed.inc();
    }
}

fn encode(metrics: &Metrics) -> Result<(HeaderValue, String), String> {
    let encoder = TextEncoder::new();
    let mut body = Vec::new();

    encoder
        .encode(&metrics.registry.gather(), &mut body)
        .map_err(|source| format!("failed to encode metrics: {source}"))?;

    let content_type = HeaderValue::from_str(encoder.format_type())
        .map_err(|source| format!("failed to encode metrics content type: {source}"))?;

    let body = String::from_utf8(body)
        .map_err(|source| format!("metrics output is not utf-8: {source}"))?;

    Ok((content_type, body))
}

#[handler]
pub(crate) async fn metrics_handler(_req: &mut Request, res: &mut Response) {
    let encoded = metrics()
        .ok_or_else(|| "metrics registry unavailable".to_string())
        .and_then(encode);

    match encoded {
        Ok((content_type, body)) => {
            res.headers_mut().insert(CONTENT_TYPE, content_type);
            res.render(body);
        }
        Err(message) => {
            error!("{message}");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}

fn status_class(status_code: u16) -> &'static str {
    match status_code {
        100..=199 => "1xx",
        200..=299 => "2xx",
        300..=399 => "3xx",
        400..=499 => "4xx",
        500..=599 => "5xx",
        _ => "other",
    }
}
