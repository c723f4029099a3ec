//! HTTP server for the browser front end.
//!
//! Serves the page, exposes the session as JSON, and runs the tick task for
//! as long as the server is up.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{bail, Context};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use crate::protocol::{DirectionRequest, ErrorCode, ErrorMessage, StateMessage};
use crate::session::{run_ticker, SharedSession};
use crate::types::TICK_MS;

const INDEX_HTML: &str = include_str!("../assets/index.html");

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub tick_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            tick_ms: TICK_MS as u64,
        }
    }
}

impl ServerConfig {
    /// Parse startup arguments (program name already stripped).
    ///
    /// Accepts `--host <addr>`, `--port <n>` and their `--flag=value` forms.
    pub fn from_args<I>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let (flag, inline) = match arg.split_once('=') {
                Some((f, v)) => (f.to_string(), Some(v.to_string())),
                None => (arg, None),
            };

            match flag.as_str() {
                "--host" => {
                    let value = match inline {
                        Some(v) => v,
                        None => args.next().context("--host needs a value")?,
                    };
                    if value.trim().is_empty() {
                        bail!("--host must not be empty");
                    }
                    config.host = value;
                }
                "--port" => {
                    let value = match inline {
                        Some(v) => v,
                        None => args.next().context("--port needs a value")?,
                    };
                    config.port = value
                        .parse()
                        .with_context(|| format!("invalid port: {value}"))?;
                }
                other => bail!("unknown argument: {other}"),
            }
        }

        Ok(config)
    }
}

pub fn router(session: SharedSession) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/state", get(get_state))
        .route("/api/direction", post(post_direction))
        .route("/api/start", post(post_start))
        .with_state(session)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn get_state(State(session): State<SharedSession>) -> Json<StateMessage> {
    Json(session.lock().await.state_message())
}

async fn post_direction(
    State(session): State<SharedSession>,
    payload: Result<Json<DirectionRequest>, JsonRejection>,
) -> Response {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            log::warn!("rejected direction body: {rejection}");
            return bad_request(ErrorCode::InvalidBody, rejection.body_text());
        }
    };

    let Some(dir) = req.parse() else {
        log::warn!("unknown direction: {:?}", req.direction);
        return bad_request(
            ErrorCode::InvalidDirection,
            format!("unknown direction: {}", req.direction),
        );
    };

    let mut s = session.lock().await;
    s.set_direction(dir);
    Json(s.state_message()).into_response()
}

async fn post_start(State(session): State<SharedSession>) -> Json<StateMessage> {
    let mut s = session.lock().await;
    s.restart();
    Json(s.state_message())
}

fn bad_request(code: ErrorCode, message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorMessage::new(code, message)),
    )
        .into_response()
}

/// Bind, start the tick task and serve until the listener fails.
///
/// `ready_tx` receives the bound address once the socket is listening, which
/// lets callers bind port 0.
pub async fn run_server(
    config: ServerConfig,
    session: SharedSession,
    ready_tx: Option<oneshot::Sender<SocketAddr>>,
) -> anyhow::Result<()> {
    let listener = TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("failed to bind {}:{}", config.host, config.port))?;
    let addr = listener.local_addr()?;
    log::info!("serving snake on http://{addr}");

    let period = Duration::from_millis(config.tick_ms.max(1));
    let ticker = tokio::spawn(run_ticker(session.clone(), period));

    if let Some(tx) = ready_tx {
        let _ = tx.send(addr);
    }

    let result = axum::serve(listener, router(session)).await;
    ticker.abort();
    result.context("http server failed")
}
