use serde::Deserialize;

/// Body of `GET /health`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
        }
    }

    /// The backend reports `"ok"` when it is able to serve requests.
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
