use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue, Method, StatusCode, Uri},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use futures_util::StreamExt;
use serde::Serialize;
use std::{
    cmp::Ordering,
    sync::atomic::{AtomicU64, Ordering as AtomicOrdering},
    sync::Arc,
    time::{Duration, SystemTime, UNIX_EPOCH},
};
use tokio::{sync::RwLock, time::Instant};
use tower_http::services::{ServeDir, ServeFile};
use url::Url;

use crate::site::RepoSummary;

const DEFAULT_GITHUB_USERNAME: &str = "sarveshraam55";
const GITHUB_API_ROOT: &str = "https://api.github.com";
const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

const DEFAULT_REPOS_CACHE_TTL_SECONDS: u64 = 300;
const DEFAULT_REPOS_REQUEST_TIMEOUT_MS: u64 = 6_000;
const DEFAULT_REPOS_CONNECT_TIMEOUT_MS: u64 = 3_000;
const DEFAULT_REPOS_RESPONSE_MAX_BYTES: usize = 512 * 1024;
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const REPOS_CACHE_TTL_SECONDS_BOUNDS: (u64, u64) = (1, 86_400);
const REPOS_REQUEST_TIMEOUT_MS_BOUNDS: (u64, u64) = (100, 120_000);
const REPOS_CONNECT_TIMEOUT_MS_BOUNDS: (u64, u64) = (100, 30_000);
const REPOS_RESPONSE_MAX_BYTES_BOUNDS: (usize, usize) = (1_024, 10 * 1024 * 1024);

const USER_AGENT: &str = "portfolio-site/1.0";
const REQUEST_ID_HEADER: &str = "x-request-id";

static REQUEST_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Copy, PartialEq, Eq)]
enum LogLevel {
    Debug,
    Info,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        fn rank(level: LogLevel) -> u8 {
            match level {
                LogLevel::Debug => 0,
                LogLevel::Info => 1,
            }
        }

        rank(*self).cmp(&rank(*other))
    }
}

impl LogLevel {
    fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
        }
    }
}

#[derive(Clone)]
struct ReposRuntimeConfig {
    github_username: String,
    cache_ttl_seconds: u64,
    response_max_bytes: usize,
    request_timeout: Duration,
    connect_timeout: Duration,
    log_level: LogLevel,
}

impl ReposRuntimeConfig {
    fn from_env() -> Self {
        let github_username = parse_env_non_empty_string("GITHUB_USERNAME")
            .unwrap_or_else(|| DEFAULT_GITHUB_USERNAME.to_string());
        let cache_ttl_seconds = parse_env_u64_with_bounds(
            "REPOS_CACHE_TTL_SECONDS",
            DEFAULT_REPOS_CACHE_TTL_SECONDS,
            REPOS_CACHE_TTL_SECONDS_BOUNDS,
        );
        let request_timeout_ms = parse_env_u64_with_bounds(
            "REPOS_REQUEST_TIMEOUT_MS",
            DEFAULT_REPOS_REQUEST_TIMEOUT_MS,
            REPOS_REQUEST_TIMEOUT_MS_BOUNDS,
        );
        let connect_timeout_ms = parse_env_u64_with_bounds(
            "REPOS_CONNECT_TIMEOUT_MS",
            DEFAULT_REPOS_CONNECT_TIMEOUT_MS,
            REPOS_CONNECT_TIMEOUT_MS_BOUNDS,
        );
        let response_max_bytes = parse_env_usize_with_bounds(
            "REPOS_RESPONSE_MAX_BYTES",
            DEFAULT_REPOS_RESPONSE_MAX_BYTES,
            REPOS_RESPONSE_MAX_BYTES_BOUNDS,
        );
        let log_level = parse_log_level("LOG_LEVEL", DEFAULT_LOG_LEVEL);

        Self {
            github_username,
            cache_ttl_seconds,
            response_max_bytes,
            request_timeout: Duration::from_millis(request_timeout_ms),
            connect_timeout: Duration::from_millis(connect_timeout_ms),
            log_level,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    cache: Arc<RwLock<Option<CacheEntry>>>,
    config: ReposRuntimeConfig,
}

#[derive(Clone)]
struct CacheEntry {
    expires_at: Instant,
    repos: Vec<RepoSummary>,
}

#[derive(Serialize)]
struct ReposFailure {
    ok: bool,
    error: &'static str,
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let port = std::env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);
    let bind_address = format!("0.0.0.0:{port}");

    let state = AppState {
        cache: Arc::new(RwLock::new(None)),
        config: ReposRuntimeConfig::from_env(),
    };

    let static_service = ServeDir::new("dist").not_found_service(ServeFile::new("dist/index.html"));

    let app = Router::new()
        .route("/api/repos", get(get_repos))
        .fallback_service(static_service)
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    println!("server listening on http://127.0.0.1:{port}");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn get_repos(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> impl IntoResponse {
    let request_started_at = Instant::now();
    let request_id = resolve_request_id(&headers);

    log_event(
        &state.config,
        LogLevel::Info,
        "repos_request_start",
        serde_json::json!({
            "request_id": request_id.as_str(),
            "method": method.as_str(),
            "path": uri.path(),
            "github_user": state.config.github_username.as_str(),
        }),
    );

    let cached = read_cached_repos(&state).await;
    log_event(
        &state.config,
        LogLevel::Info,
        "repos_cache_decision",
        serde_json::json!({
            "request_id": request_id.as_str(),
            "memory_cache": if cached.is_some() { "hit" } else { "miss" },
        }),
    );

    if let Some(repos) = cached {
        log_event(
            &state.config,
            LogLevel::Info,
            "repos_request_complete",
            serde_json::json!({
                "request_id": request_id.as_str(),
                "status": StatusCode::OK.as_u16(),
                "duration_ms": request_started_at.elapsed().as_millis(),
                "count": repos.len(),
                "cache": "memory_hit",
            }),
        );
        return repos_response(
            StatusCode::OK,
            Json(repos),
            cache_control(&format!("public, max-age={}", state.config.cache_ttl_seconds)),
            &request_id,
        );
    }

    match fetch_github_repos(&state.config).await {
        Ok(repos) => {
            write_cached_repos(&state, repos.clone()).await;
            log_event(
                &state.config,
                LogLevel::Info,
                "repos_request_complete",
                serde_json::json!({
                    "request_id": request_id.as_str(),
                    "status": StatusCode::OK.as_u16(),
                    "duration_ms": request_started_at.elapsed().as_millis(),
                    "count": repos.len(),
                    "cache": "memory_miss",
                }),
            );
            repos_response(
                StatusCode::OK,
                Json(repos),
                cache_control(&format!("public, max-age={}", state.config.cache_ttl_seconds)),
                &request_id,
            )
        }
        Err(error_class) => {
            log_event(
                &state.config,
                LogLevel::Info,
                "repos_request_failed",
                serde_json::json!({
                    "request_id": request_id.as_str(),
                    "status": StatusCode::BAD_GATEWAY.as_u16(),
                    "duration_ms": request_started_at.elapsed().as_millis(),
                    "error_class": error_class,
                }),
            );
            repos_response(
                StatusCode::BAD_GATEWAY,
                Json(ReposFailure {
                    ok: false,
                    error: error_class,
                }),
                cache_control("no-store"),
                &request_id,
            )
        }
    }
}

fn repos_response(
    status: StatusCode,
    payload: impl IntoResponse,
    cache_control: HeaderValue,
    request_id: &str,
) -> axum::response::Response {
    let mut headers = HeaderMap::new();
    headers.insert(header::CACHE_CONTROL, cache_control);
    headers.insert(header::VARY, HeaderValue::from_static("Accept-Encoding"));

    if let Ok(request_id_header) = HeaderValue::from_str(request_id) {
        headers.insert(REQUEST_ID_HEADER, request_id_header);
    }

    (status, headers, payload).into_response()
}

fn cache_control(value: &str) -> HeaderValue {
    HeaderValue::from_str(value).unwrap_or_else(|_| HeaderValue::from_static("no-store"))
}

async fn read_cached_repos(state: &AppState) -> Option<Vec<RepoSummary>> {
    let now = Instant::now();
    {
        let cache = state.cache.read().await;
        match cache.as_ref() {
            Some(entry) if entry_is_fresh(entry, now) => return Some(entry.repos.clone()),
            Some(_) => {}
            None => return None,
        }
    }

    let mut cache = state.cache.write().await;
    if cache.as_ref().is_some_and(|entry| !entry_is_fresh(entry, now)) {
        *cache = None;
    }
    None
}

fn entry_is_fresh(entry: &CacheEntry, now: Instant) -> bool {
    entry.expires_at > now
}

async fn write_cached_repos(state: &AppState, repos: Vec<RepoSummary>) {
    let entry = CacheEntry {
        expires_at: Instant::now() + Duration::from_secs(state.config.cache_ttl_seconds),
        repos,
    };
    *state.cache.write().await = Some(entry);
}

fn github_repos_url(username: &str) -> Result<Url, &'static str> {
    let trimmed = username.trim();
    let valid_shape = !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|character| character.is_ascii_alphanumeric() || character == '-');
    if !valid_shape {
        return Err("invalid_username");
    }

    Url::parse(&format!("{GITHUB_API_ROOT}/users/{trimmed}/repos")).map_err(|_| "invalid_username")
}

async fn fetch_github_repos(config: &ReposRuntimeConfig) -> Result<Vec<RepoSummary>, &'static str> {
    let endpoint = github_repos_url(&config.github_username)?;

    let client = reqwest::Client::builder()
        .timeout(config.request_timeout)
        .connect_timeout(config.connect_timeout)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|_| "client_build_failed")?;

    let response = client
        .get(endpoint)
        .header(reqwest::header::ACCEPT, GITHUB_ACCEPT)
        .send()
        .await
        .map_err(|_| "upstream_unreachable")?;

    if !response.status().is_success() {
        return Err("upstream_status");
    }

    let body = read_limited_body(response, config.response_max_bytes).await?;
    serde_json::from_str::<Vec<RepoSummary>>(&body).map_err(|_| "upstream_body_invalid")
}

async fn read_limited_body(
    response: reqwest::Response,
    max_response_bytes: usize,
) -> Result<String, &'static str> {
    let mut stream = response.bytes_stream();
    let mut body: Vec<u8> = Vec::with_capacity(8192);

    while let Some(chunk_result) = stream.next().await {
        let chunk = chunk_result.map_err(|_| "upstream_body_unreadable")?;

        if body.len() + chunk.len() > max_response_bytes {
            return Err("upstream_body_too_large");
        }

        body.extend_from_slice(&chunk);
    }

    Ok(String::from_utf8_lossy(&body).to_string())
}

fn parse_env_u64_with_bounds(name: &str, default: u64, bounds: (u64, u64)) -> u64 {
    std::env::var(name)
        .ok()
        .and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_env_usize_with_bounds(name: &str, default: usize, bounds: (usize, usize)) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_env_non_empty_string(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_log_level(name: &str, default: LogLevel) -> LogLevel {
    match parse_env_non_empty_string(name)
        .unwrap_or_else(|| default.as_str().to_string())
        .to_ascii_lowercase()
        .as_str()
    {
        "debug" => LogLevel::Debug,
        "info" => LogLevel::Info,
        _ => default,
    }
}

fn now_unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_secs())
        .unwrap_or(0)
}

fn now_unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis())
        .unwrap_or(0)
}

fn generate_request_id() -> String {
    let counter = REQUEST_ID_COUNTER.fetch_add(1, AtomicOrdering::Relaxed);
    format!("req-{}-{counter}", now_unix_millis())
}

fn resolve_request_id(headers: &HeaderMap) -> String {
    let value = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|raw| raw.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string);

    value.unwrap_or_else(generate_request_id)
}

fn log_event(config: &ReposRuntimeConfig, level: LogLevel, event: &str, fields: serde_json::Value) {
    if level < config.log_level {
        return;
    }

    let mut payload = serde_json::Map::new();
    payload.insert(
        "ts".to_string(),
        serde_json::Value::Number(serde_json::Number::from(now_unix_seconds())),
    );
    payload.insert(
        "level".to_string(),
        serde_json::Value::String(level.as_str().to_string()),
    );
    payload.insert(
        "event".to_string(),
        serde_json::Value::String(event.to_string()),
    );

    if let serde_json::Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    println!("{}", serde_json::Value::Object(payload));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_runtime_config() -> ReposRuntimeConfig {
        ReposRuntimeConfig {
            github_username: DEFAULT_GITHUB_USERNAME.to_string(),
            cache_ttl_seconds: DEFAULT_REPOS_CACHE_TTL_SECONDS,
            response_max_bytes: DEFAULT_REPOS_RESPONSE_MAX_BYTES,
            request_timeout: Duration::from_millis(DEFAULT_REPOS_REQUEST_TIMEOUT_MS),
            connect_timeout: Duration::from_millis(DEFAULT_REPOS_CONNECT_TIMEOUT_MS),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }

    fn test_state() -> AppState {
        AppState {
            cache: Arc::new(RwLock::new(None)),
            config: test_runtime_config(),
        }
    }

    fn sample_repo(name: &str) -> RepoSummary {
        RepoSummary {
            name: name.to_string(),
            fork: false,
            archived: false,
            description: Some("sample".to_string()),
            language: Some("Python".to_string()),
            updated_at: "2024-05-12T10:04:00Z".to_string(),
            html_url: format!("https://github.com/{DEFAULT_GITHUB_USERNAME}/{name}"),
        }
    }

    #[test]
    fn repos_url_builds_the_public_listing_path() {
        let url = github_repos_url("sarveshraam55").expect("valid username");
        assert_eq!(
            url.as_str(),
            "https://api.github.com/users/sarveshraam55/repos"
        );
    }

    #[test]
    fn repos_url_rejects_malformed_usernames() {
        assert!(github_repos_url("").is_err());
        assert!(github_repos_url("   ").is_err());
        assert!(github_repos_url("../etc/passwd").is_err());
        assert!(github_repos_url("a b").is_err());
    }

    #[test]
    fn cache_entry_freshness_follows_expiry() {
        let now = Instant::now();
        let fresh = CacheEntry {
            expires_at: now + Duration::from_secs(10),
            repos: Vec::new(),
        };
        let expired = CacheEntry {
            expires_at: now - Duration::from_secs(10),
            repos: Vec::new(),
        };

        assert!(entry_is_fresh(&fresh, now));
        assert!(!entry_is_fresh(&expired, now));
    }

    #[tokio::test]
    async fn cached_repos_round_trip_while_fresh() {
        let state = test_state();
        write_cached_repos(&state, vec![sample_repo("STOCK-PREDICTION")]).await;

        let cached = read_cached_repos(&state).await.expect("fresh entry");
        assert_eq!(cached.len(), 1);
        assert_eq!(cached[0].name, "STOCK-PREDICTION");
    }

    #[tokio::test]
    async fn expired_cache_entry_is_dropped_on_read() {
        let state = test_state();
        {
            let mut cache = state.cache.write().await;
            *cache = Some(CacheEntry {
                expires_at: Instant::now() - Duration::from_secs(1),
                repos: vec![sample_repo("STOCK-PREDICTION")],
            });
        }

        assert!(read_cached_repos(&state).await.is_none());
        assert!(state.cache.read().await.is_none());
    }

    #[test]
    fn request_id_honors_inbound_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            REQUEST_ID_HEADER,
            HeaderValue::from_static("req-from-upstream"),
        );

        assert_eq!(resolve_request_id(&headers), "req-from-upstream");
    }

    #[test]
    fn request_id_is_generated_when_absent_or_blank() {
        let generated = resolve_request_id(&HeaderMap::new());
        assert!(generated.starts_with("req-"));

        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("   "));
        assert!(resolve_request_id(&headers).starts_with("req-"));
    }

    #[test]
    fn failure_payload_serializes_error_class() {
        let failure = ReposFailure {
            ok: false,
            error: "upstream_status",
        };
        let encoded = serde_json::to_string(&failure).expect("serializes");
        assert_eq!(encoded, r#"{"ok":false,"error":"upstream_status"}"#);
    }
}
