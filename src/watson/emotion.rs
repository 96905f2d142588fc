#[derive(serde::Serialize, Clone, Debug)]
pub struct RawDocument<'a> {
    pub text: &'a str,
}

#[derive(serde::Serialize, Clone, Debug)]
pub struct PredictRequest<'a> {
    pub raw_document: RawDocument<'a>,
}

impl<'a> PredictRequest<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            raw_document: RawDocument { text },
        }
    }
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct EmotionPrediction {
    pub emotion: super::EmotionScores,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct PredictResponse {
    #[serde(rename = "emotionPredictions")]
    pub emotion_predictions: Vec<EmotionPrediction>,
}
