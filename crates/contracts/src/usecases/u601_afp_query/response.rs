use serde::{Deserialize, Serialize};

/// Ответ RAG-бэкенда на `POST /afp-query`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResponse {
    /// Текст ответа, строки разделены `\n`
    pub answer: String,

    /// Вопрос в том виде, в каком его получил бэкенд
    pub question: String,

    /// Откуда взята информация (бэкенд может не прислать)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Тип векторного хранилища: faiss, pinecone, weaviate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vector_store: Option<String>,
}

impl QueryResponse {
    /// Строки ответа для отображения абзацами. Пустые строки сохраняются.
    pub fn answer_lines(&self) -> Vec<&str> {
        self.answer.split('\n').collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_minimal_response() {
        let json = r#"{"question":"¿Qué documentos necesito?","answer":"Línea1\nLínea2"}"#;
        let resp: QueryResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.question, "¿Qué documentos necesito?");
        assert_eq!(resp.answer_lines(), vec!["Línea1", "Línea2"]);
        assert!(resp.source.is_none());
        assert!(resp.vector_store.is_none());
    }

    #[test]
    fn test_decode_full_response() {
        let json = r#"{
            "answer": "No se encontró información.",
            "question": "hola",
            "source": "No se encontraron documentos relevantes",
            "vector_store": "faiss"
        }"#;
        let resp: QueryResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            resp.source.as_deref(),
            Some("No se encontraron documentos relevantes")
        );
        assert_eq!(resp.vector_store.as_deref(), Some("faiss"));
    }

    #[test]
    fn test_answer_lines_keeps_blank_lines() {
        let resp = QueryResponse {
            answer: "a\n\nb\n".to_string(),
            question: "q".to_string(),
            source: None,
            vector_store: None,
        };
        assert_eq!(resp.answer_lines(), vec!["a", "", "b", ""]);
    }
}
