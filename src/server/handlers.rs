//! Request handlers

use crate::analyzer::AnalysisResult;
use crate::output::{render_form_page, render_result_page};
use crate::server::validate::validate_url;
use crate::server::AppState;
use crate::DownloadError;
use axum::extract::{Form, State};
use axum::http::{Method, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;

/// Form body of an analysis request
#[derive(Debug, Deserialize)]
pub struct AnalyzeForm {
    #[serde(default)]
    pub url: String,
}

/// Error answered to the client: a status and a plain-text message
#[derive(Debug)]
pub struct HttpError {
    pub status: StatusCode,
    pub message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        (self.status, self.message).into_response()
    }
}

/// Why processing an analysis request failed
#[derive(Debug)]
pub(crate) enum PageFailure {
    NotFound,
    Download(DownloadError),
    Analysis(crate::AnalysisError),
}

impl PageFailure {
    fn status(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Download(_) | Self::Analysis(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            Self::NotFound => "page doesn't exist",
            Self::Download(_) => {
                "An error occurred while downloading the Page. Please try again later."
            }
            Self::Analysis(_) => {
                "An error occurred while analyzing the page. Please try again later."
            }
        }
    }

    fn cause(&self) -> Option<String> {
        match self {
            Self::NotFound => None,
            Self::Download(e) => Some(format!("download page failed: {}", e)),
            Self::Analysis(e) => Some(format!("analyze page failed: {}", e)),
        }
    }
}

/// Logs a failed request with its scope and builds the client answer
fn http_error(
    method: &Method,
    uri: &Uri,
    status: StatusCode,
    message: &str,
    cause: Option<String>,
) -> HttpError {
    tracing::error!(
        path = %uri.path(),
        method = %method,
        response_code = status.as_u16(),
        response_msg = message,
        cause = cause.as_deref().unwrap_or(""),
        "request failed"
    );

    HttpError {
        status,
        message: message.to_string(),
    }
}

/// Downloads and analyzes one page
pub(crate) async fn process_page(
    state: &AppState,
    url: &str,
) -> Result<AnalysisResult, PageFailure> {
    let content = match state.downloader.download(url).await {
        Ok(content) => content,
        Err(DownloadError::NotFound { .. }) => return Err(PageFailure::NotFound),
        Err(e) => return Err(PageFailure::Download(e)),
    };

    state
        .analyzer
        .analyze_with_deadline(url, &content, &state.shutdown)
        .await
        .map_err(PageFailure::Analysis)
}

/// `GET /`: the URL form
pub async fn show_form() -> Html<String> {
    Html(render_form_page())
}

/// `POST /`: validates the URL, then downloads, analyzes and renders the page
pub async fn analyze_url(
    method: Method,
    uri: Uri,
    State(state): State<AppState>,
    Form(form): Form<AnalyzeForm>,
) -> Result<Html<String>, HttpError> {
    let Some(url) = validate_url(&form.url) else {
        return Err(http_error(
            &method,
            &uri,
            StatusCode::BAD_REQUEST,
            "Invalid URL: invalid URL format",
            None,
        ));
    };

    tracing::info!("Analyzing {}", url);

    match process_page(&state, url).await {
        Ok(result) => Ok(Html(render_result_page(url, &result))),
        Err(failure) => Err(http_error(
            &method,
            &uri,
            failure.status(),
            failure.message(),
            failure.cause(),
        )),
    }
}

/// `GET /health`: liveness probe
pub async fn health() -> &'static str {
    "ok"
}
