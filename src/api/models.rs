use serde::{Deserialize, Serialize};

/// Body of `POST /submit`: the drawn land polygon as `[lon, lat]` pairs
#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitRequest {
    #[serde(default)]
    pub coordinates: Option<Vec<[f64; 2]>>,
}

/// Informational outcome, e.g. when the composite had no usable data
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
