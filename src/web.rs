pub mod pages;

#[derive(Clone)]
pub struct AppState {
    watson: std::sync::Arc<crate::watson::Client>,
    pages: std::sync::Arc<pages::Pages>,
}

impl AppState {
    pub fn new(watson: crate::watson::Client) -> Result<Self, anyhow::Error> {
        Ok(Self {
            watson: std::sync::Arc::new(watson),
            pages: std::sync::Arc::new(pages::Pages::new()?),
        })
    }
}

pub fn router(state: AppState) -> axum::Router {
    axum::Router::new()
        .route("/", axum::routing::get(index))
        .route("/emotionDetector", axum::routing::get(analyze))
        .with_state(state)
}

pub async fn serve(listener: tokio::net::TcpListener, state: AppState) -> Result<(), anyhow::Error> {
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

async fn index(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> axum::response::Html<String> {
    axum::response::Html(state.pages.index())
}

#[derive(serde::Deserialize, Debug)]
struct AnalyzeParams {
    #[serde(rename = "textToAnalyze")]
    text_to_analyze: Option<String>,
}

// Input errors come back as a 200 with an error page in the body; the remote
// failure taxonomy is already collapsed by the client.
async fn analyze(
    axum::extract::State(state): axum::extract::State<AppState>,
    axum::extract::Query(params): axum::extract::Query<AnalyzeParams>,
) -> axum::response::Html<String> {
    let text = params.text_to_analyze.as_deref().unwrap_or("");
    if text.trim().is_empty() {
        return axum::response::Html(state.pages.invalid_input());
    }

    axum::response::Html(match state.watson.classify(text).await {
        Some(scores) => state.pages.analysis_result(text, &response_sentence(&scores)),
        None => state.pages.analysis_failed(text),
    })
}

/// Scores are always rendered at four decimal places.
pub fn response_sentence(scores: &crate::watson::EmotionScores) -> String {
    format!(
        "For the given statement, the system response is 'anger': {:.4}, 'disgust': {:.4}, \
         'fear': {:.4}, 'joy': {:.4} and 'sadness': {:.4}. The dominant emotion is {}.",
        scores.anger,
        scores.disgust,
        scores.fear,
        scores.joy,
        scores.sadness,
        scores.dominant(),
    )
}
