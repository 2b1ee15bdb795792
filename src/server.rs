use std::{net::SocketAddr, path::Path, sync::Arc};

use anyhow::Result;
use axum::{
    extract::{FromRequest, Request, State},
    http::{header, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::post,
    Form, Json, Router,
};
use secrecy::{ExposeSecret, SecretString};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::{
    services::ServeDir, set_header::SetResponseHeaderLayer, trace::TraceLayer,
};

use crate::{
    breach::{self, BreachLookup},
    digest,
    error::CheckError,
    report,
    strength::StrengthEstimator,
    types::{CheckResult, PasswordSubmission},
};

/// Immutable per-process state: the two external capabilities.
#[derive(Clone)]
pub struct AppState {
    estimator: Arc<dyn StrengthEstimator>,
    breach: Arc<dyn BreachLookup>,
}

impl AppState {
    pub fn new(estimator: Arc<dyn StrengthEstimator>, breach: Arc<dyn BreachLookup>) -> Self {
        Self { estimator, breach }
    }
}

/// Build the application router. `ui_dir` is served at `/`.
pub fn router(state: AppState, ui_dir: impl AsRef<Path>) -> Router {
    let static_svc = ServeDir::new(ui_dir.as_ref()).append_index_html_on_directories(true);

    Router::new()
        .route("/check-password", post(check_password))
        .with_state(state)
        .fallback_service(static_svc)
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(TraceLayer::new_for_http())
}

/// The process-wide HTTP server, bound once at startup.
pub struct Server {
    listener: TcpListener,
    app: Router,
}

impl Server {
    pub async fn bind(addr: SocketAddr, app: Router) -> Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        Ok(Self { listener, app })
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Serve until `shutdown` is cancelled, then drain in-flight requests.
    pub async fn run(self, shutdown: CancellationToken) -> Result<()> {
        tracing::info!("listening on http://{}", self.local_addr()?);
        axum::serve(self.listener, self.app)
            .with_graceful_shutdown(async move { shutdown.cancelled().await })
            .await?;
        Ok(())
    }
}

impl<S> FromRequest<S> for PasswordSubmission
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("application/json") {
            let Json(sub) = Json::<PasswordSubmission>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            Ok(sub)
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(sub) = Form::<PasswordSubmission>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            Ok(sub)
        } else {
            Ok(PasswordSubmission::default())
        }
    }
}

async fn check_password(
    State(app): State<AppState>,
    submission: PasswordSubmission,
) -> Result<Response, CheckError> {
    let Some(password) = submission.password else {
        return Ok(Html(report::PASSWORD_REQUIRED).into_response());
    };

    let range = digest::hash_range(password.expose_secret());

    let estimator = app.estimator.clone();
    let owned = SecretString::new(password.expose_secret().into());
    let estimate_task = tokio::task::spawn_blocking(move || estimator.estimate(&owned));

    let (estimate, breach_count) = tokio::join!(
        estimate_task,
        breach::breach_count(app.breach.as_ref(), &range)
    );
    let estimate = estimate?;

    let breach_count = match breach_count {
        Ok(count) => count,
        Err(err) => {
            tracing::warn!(error = %err, "breach lookup failed");
            return Ok(Html(report::LOOKUP_FAILED).into_response());
        }
    };

    let result = CheckResult::from_parts(estimate, breach_count);
    tracing::info!(
        score = result.score,
        breach_count = result.breach_count,
        "password checked"
    );
    Ok((StatusCode::OK, Html(report::render_report(&result))).into_response())
}
