pub mod emotion;

pub const SERVICE_URL: &str =
    "https://sn-watson-emotion.labs.skills.network/v1/watson.runtime.nlp.v1/NlpService/EmotionPredict";
pub const MODEL_ID: &str = "emotion_aggregated-workflow_lang_en_stock";

const MODEL_ID_HEADER: &str = "grpc-metadata-mm-model-id";

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("transport: {0}")]
    Transport(reqwest::Error),

    #[error("service rejected the request (400)")]
    BadRequest,

    #[error("service internal error (500)")]
    ServerError,

    #[error("unexpected status: {0}")]
    UnexpectedStatus(reqwest::StatusCode),

    #[error("malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("response contained no predictions")]
    MissingPrediction,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Emotion {
    Anger,
    Disgust,
    Fear,
    Joy,
    Sadness,
}

impl Emotion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Anger => "anger",
            Emotion::Disgust => "disgust",
            Emotion::Fear => "fear",
            Emotion::Joy => "joy",
            Emotion::Sadness => "sadness",
        }
    }
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(serde::Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct EmotionScores {
    pub anger: f64,
    pub disgust: f64,
    pub fear: f64,
    pub joy: f64,
    pub sadness: f64,
}

impl EmotionScores {
    // Stable scan in declaration order: the first of any tied maxima wins.
    pub fn dominant(&self) -> Emotion {
        let mut best = (Emotion::Anger, self.anger);
        for (emotion, score) in [
            (Emotion::Disgust, self.disgust),
            (Emotion::Fear, self.fear),
            (Emotion::Joy, self.joy),
            (Emotion::Sadness, self.sadness),
        ] {
            if score > best.1 {
                best = (emotion, score);
            }
        }
        best.0
    }
}

fn service_url_default() -> String {
    SERVICE_URL.to_string()
}

fn model_id_default() -> String {
    MODEL_ID.to_string()
}

const fn timeout_secs_default() -> u64 {
    5
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct Config {
    #[serde(default = "service_url_default")]
    pub service_url: String,

    #[serde(default = "model_id_default")]
    pub model_id: String,

    #[serde(default = "timeout_secs_default")]
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_url: service_url_default(),
            model_id: model_id_default(),
            timeout_secs: timeout_secs_default(),
        }
    }
}

pub struct Client {
    client: reqwest::Client,
    url: String,
}

impl Client {
    pub fn new(config: &Config) -> Result<Self, anyhow::Error> {
        Ok(Self {
            client: reqwest::ClientBuilder::new()
                .default_headers({
                    let mut headers = reqwest::header::HeaderMap::new();
                    headers.insert(reqwest::header::CONTENT_TYPE, "application/json".parse().unwrap());
                    headers.insert(MODEL_ID_HEADER, config.model_id.parse()?);
                    headers
                })
                .timeout(std::time::Duration::from_secs(config.timeout_secs))
                .build()?,
            url: config.service_url.clone(),
        })
    }

    /// Classifies `text`, collapsing every failure into `None`. Blank input
    /// short-circuits without touching the network.
    pub async fn classify(&self, text: &str) -> Option<EmotionScores> {
        if text.trim().is_empty() {
            return None;
        }

        match self.predict(text).await {
            Ok(scores) => Some(scores),
            Err(e) => {
                log::warn!("emotion predict failed: {}", e);
                None
            }
        }
    }

    async fn predict(&self, text: &str) -> Result<EmotionScores, Error> {
        let resp = self
            .client
            .post(&self.url)
            .json(&emotion::PredictRequest::new(text))
            .send()
            .await
            .map_err(|e| Error::Transport(e.without_url()))?;

        match resp.status() {
            reqwest::StatusCode::OK => {
                let body = resp.text().await.map_err(|e| Error::Transport(e.without_url()))?;
                let resp = serde_json::from_str::<emotion::PredictResponse>(&body)?;
                Ok(resp
                    .emotion_predictions
                    .into_iter()
                    .next()
                    .ok_or(Error::MissingPrediction)?
                    .emotion)
            }
            reqwest::StatusCode::BAD_REQUEST => Err(Error::BadRequest),
            reqwest::StatusCode::INTERNAL_SERVER_ERROR => Err(Error::ServerError),
            status => Err(Error::UnexpectedStatus(status)),
        }
    }
}
