use serde::{Deserialize, Serialize};

/// Ответ `GET /health` RAG-бэкенда
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// "healthy" или "unhealthy"
    pub status: String,

    pub vector_store: String,

    #[serde(default)]
    pub vector_store_available: bool,
}

impl HealthResponse {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy" && self.vector_store_available
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_healthy() {
        let json = r#"{"status":"healthy","vector_store":"pinecone","vector_store_available":true}"#;
        let health: HealthResponse = serde_json::from_str(json).unwrap();
        assert!(health.is_healthy());
        assert_eq!(health.vector_store, "pinecone");
    }

    #[test]
    fn test_store_unavailable_is_not_healthy() {
        let json = r#"{"status":"healthy","vector_store":"weaviate","vector_store_available":false}"#;
        let health: HealthResponse = serde_json::from_str(json).unwrap();
        assert!(!health.is_healthy());
    }

    #[test]
    fn test_missing_availability_defaults_to_false() {
        let json = r#"{"status":"unhealthy","vector_store":"faiss"}"#;
        let health: HealthResponse = serde_json::from_str(json).unwrap();
        assert!(!health.vector_store_available);
        assert!(!health.is_healthy());
    }
}
