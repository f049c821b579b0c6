use serde::{Deserialize, Serialize};

/// Запрос к RAG-бэкенду: `POST /afp-query`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    /// Текст вопроса (уже без пробелов по краям)
    pub question: String,
}

impl QueryRequest {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_has_only_question() {
        let body = serde_json::to_value(QueryRequest::new("¿Qué documentos necesito?")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "question": "¿Qué documentos necesito?" })
        );
    }
}
