/// HTTP endpoint for the county happiness dataset
///
/// Serves the read-only query API over a small worker pool. The store is
/// fully loaded before the listener starts, so request handling never
/// takes a lock and never mutates anything. Every response body is JSON.
///
/// Endpoints:
/// - GET /api/v1/county - Count of stored counties
/// - GET /api/v1/county/{zip} - Single county record
/// - GET /api/v1/county/happiness_stats/{action} - Statistic over the zips
///   named by the query parameter values
/// - GET /health - Service health check

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use threadpool::ThreadPool;
use tiny_http::Method;

use crate::query::QueryHandler;

// ---------------------------------------------------------------------------
// Response Types
// ---------------------------------------------------------------------------

/// Body for GET /api/v1/county. The quoted key is the published contract.
#[derive(Debug, Serialize, Deserialize)]
pub struct CountResponse {
    #[serde(rename = "Number of stored counties")]
    pub count: usize,
}

/// Body for every rejected request.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Body for GET /health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub started_at: DateTime<Utc>,
}

/// Static facts the health route reports about this process.
#[derive(Debug, Clone)]
pub struct ServiceInfo {
    pub started_at: DateTime<Utc>,
}

impl ServiceInfo {
    pub fn starting_now() -> Self {
        Self {
            started_at: Utc::now(),
        }
    }
}

// ---------------------------------------------------------------------------
// Routing
// ---------------------------------------------------------------------------

/// Statistic routes live one level below the county collection.
const STATS_PREFIX: &str = "/api/v1/county/happiness_stats/";
/// Everything else under the collection is a zip lookup.
const COUNTY_PREFIX: &str = "/api/v1/county/";

/// Routes one request to its handler.
///
/// Pure: takes the method and the raw URL (path plus query string), returns
/// the status code and JSON body. The server loop wraps the pair into a
/// tiny_http response; tests call this directly.
///
/// Route precedence matters: the happiness_stats prefix is itself under the
/// county prefix, so it must be checked first or every statistic request
/// would be treated as a zip lookup.
pub fn route(
    handler: &QueryHandler,
    info: &ServiceInfo,
    method: &Method,
    raw_url: &str,
) -> (u16, serde_json::Value) {
    if *method != Method::Get {
        return (405, error_body("Method not allowed"));
    }

    let (path, raw_query) = split_url(raw_url);

    if path == "/health" {
        handle_health(info)
    } else if path == "/api/v1/county" {
        handle_count(handler)
    } else if path.starts_with(STATS_PREFIX) {
        let action = path.trim_start_matches(STATS_PREFIX);
        handle_stats(handler, action, raw_query)
    } else if path.starts_with(COUNTY_PREFIX) {
        let raw_zip = path.trim_start_matches(COUNTY_PREFIX);
        handle_show(handler, raw_zip)
    } else {
        (
            404,
            serde_json::json!({
                "error": "Not found",
                "available_endpoints": [
                    "/health",
                    "/api/v1/county",
                    "/api/v1/county/{zip}",
                    "/api/v1/county/happiness_stats/{action}"
                ]
            }),
        )
    }
}

/// Handle /api/v1/county
fn handle_count(handler: &QueryHandler) -> (u16, serde_json::Value) {
    let body = CountResponse {
        count: handler.count_all(),
    };
    (200, serde_json::to_value(&body).unwrap())
}

/// Handle /api/v1/county/{zip}
fn handle_show(handler: &QueryHandler, raw_zip: &str) -> (u16, serde_json::Value) {
    let zip = decode_component(raw_zip);
    match handler.get_by_zip(&zip) {
        Ok(record) => (200, serde_json::to_value(&record).unwrap()),
        Err(e) => (400, error_body(&e.to_string())),
    }
}

/// Handle /api/v1/county/happiness_stats/{action}
fn handle_stats(handler: &QueryHandler, raw_action: &str, raw_query: &str) -> (u16, serde_json::Value) {
    let action = decode_component(raw_action);
    let params = parse_query(raw_query);
    match handler.compute_statistic(&action, &params) {
        Ok(result) => (200, serde_json::to_value(&result).unwrap()),
        Err(e) => (400, error_body(&e.to_string())),
    }
}

/// Handle /health
fn handle_health(info: &ServiceInfo) -> (u16, serde_json::Value) {
    let body = HealthResponse {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        started_at: info.started_at,
    };
    (200, serde_json::to_value(&body).unwrap())
}

fn error_body(message: &str) -> serde_json::Value {
    serde_json::to_value(ErrorResponse {
        error: message.to_string(),
    })
    .unwrap()
}

// ---------------------------------------------------------------------------
// URL parsing
// ---------------------------------------------------------------------------

/// Splits a raw request URL at the first '?'. No '?' means an empty query
/// string.
fn split_url(raw_url: &str) -> (&str, &str) {
    match raw_url.split_once('?') {
        Some((path, query)) => (path, query),
        None => (raw_url, ""),
    }
}

/// Parses a query string into ordered (name, value) pairs.
///
/// Order and duplicates are preserved exactly as received; the validator
/// counts pairs and reads every value, so nothing may be collapsed here.
/// A token without '=' becomes a pair with an empty value; empty segments
/// ("a=1&&b=2") are skipped. Names and values are both decoded.
pub fn parse_query(raw_query: &str) -> Vec<(String, String)> {
    raw_query
        .split('&')
        .filter(|segment| !segment.is_empty())
        .map(|segment| match segment.split_once('=') {
            Some((name, value)) => (decode_component(name), decode_component(value)),
            None => (decode_component(segment), String::new()),
        })
        .collect()
}

/// Decodes one form-style URL component: '+' as space, then
/// percent-escapes. Input whose escapes do not decode to UTF-8 is kept
/// as-is; the store lookup will reject it as unknown.
fn decode_component(raw: &str) -> String {
    let plus_decoded = raw.replace('+', " ");
    match urlencoding::decode(&plus_decoded) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => plus_decoded,
    }
}

// ---------------------------------------------------------------------------
// HTTP Server
// ---------------------------------------------------------------------------

/// Binds the HTTP endpoint to `bind` and serves until the process exits.
pub fn start_endpoint_server(
    bind: &str,
    workers: usize,
    handler: QueryHandler,
    info: ServiceInfo,
) -> Result<(), String> {
    let server = tiny_http::Server::http(bind)
        .map_err(|e| format!("Failed to start HTTP server on {}: {}", bind, e))?;

    println!("📡 HTTP endpoint listening on http://{}", bind);
    println!("   GET /api/v1/county - Count stored counties");
    println!("   GET /api/v1/county/{{zip}} - Query one county");
    println!("   GET /api/v1/county/happiness_stats/{{action}} - Compute a statistic");
    println!("   GET /health - Service health check\n");

    serve(server, workers, handler, info)
}

/// Accept loop: hands each incoming request to the worker pool. Split from
/// [`start_endpoint_server`] so tests can bind an ephemeral port first.
pub fn serve(
    server: tiny_http::Server,
    workers: usize,
    handler: QueryHandler,
    info: ServiceInfo,
) -> Result<(), String> {
    let pool = ThreadPool::new(workers);

    for request in server.incoming_requests() {
        let handler = handler.clone();
        let info = info.clone();
        pool.execute(move || {
            let (status, body) = route(&handler, &info, request.method(), request.url());
            if let Err(e) = request.respond(create_response(status, body)) {
                eprintln!("Failed to send response: {}", e);
            }
        });
    }

    Ok(())
}

/// Create HTTP response with JSON body
fn create_response(status_code: u16, json: serde_json::Value) -> tiny_http::Response<std::io::Cursor<Vec<u8>>> {
    let body = serde_json::to_string(&json).unwrap();

    tiny_http::Response::from_data(body.into_bytes())
        .with_status_code(tiny_http::StatusCode::from(status_code))
        .with_header(
            tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).unwrap(),
        )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
