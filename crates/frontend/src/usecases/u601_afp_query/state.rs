//! Состояние формы вопроса.
//!
//! Чистая структура без реактивных типов: view держит её в одном
//! `RwSignal`, а все переходы проверяются обычными тестами.

use contracts::usecases::u601_afp_query::{QueryRequest, QueryResponse};

use crate::shared::api_utils::ApiError;

/// Единственное сообщение об ошибке, которое видит пользователь
pub const ERROR_MESSAGE: &str = "Error al procesar la consulta. Por favor, inténtalo de nuevo.";

pub const SUBMIT_LABEL: &str = "Consultar";
pub const SUBMIT_LABEL_LOADING: &str = "Consultando...";

pub const EXAMPLE_QUESTIONS: [&str; 5] = [
    "¿Cuál es el procedimiento para el cuarto retiro de AFP?",
    "¿Hasta cuándo tengo para retirar mi cuarto retiro?",
    "¿Qué documentos necesito para el cuarto retiro?",
    "¿Cuánto dinero puedo retirar en el cuarto retiro?",
    "¿Cómo solicito mi cuarto retiro de AFP?",
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryFormState {
    pub question: String,
    pub response: Option<QueryResponse>,
    pub loading: bool,
    pub error: Option<String>,
}

impl QueryFormState {
    pub fn set_question(&mut self, text: String) {
        self.question = text;
    }

    /// Only fills the input; response and error stay as they are.
    pub fn select_example(&mut self, example: &str) {
        self.question = example.to_string();
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn can_submit(&self) -> bool {
        !self.loading && !self.question.trim().is_empty()
    }

    /// Переход в состояние загрузки.
    ///
    /// Возвращает запрос с обрезанным вопросом, либо `None` (и ничего не
    /// меняет), если вопрос пустой или предыдущий запрос ещё выполняется.
    pub fn begin_submit(&mut self) -> Option<QueryRequest> {
        if !self.can_submit() {
            return None;
        }

        self.loading = true;
        self.error = None;
        self.response = None;

        Some(QueryRequest::new(self.question.trim()))
    }

    pub fn complete(&mut self, result: Result<QueryResponse, ApiError>) {
        match result {
            Ok(response) => {
                log::info!(
                    "u601: answer received ({} lines)",
                    response.answer_lines().len()
                );
                self.response = Some(response);
                self.error = None;
            }
            Err(e) => {
                log::error!("u601: query failed: {}", e);
                self.response = None;
                self.error = Some(ERROR_MESSAGE.to_string());
            }
        }
        self.loading = false;
    }

    pub fn answer_lines(&self) -> Vec<String> {
        self.response
            .as_ref()
            .map(|r| r.answer_lines().into_iter().map(str::to_string).collect())
            .unwrap_or_default()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.loading {
            SUBMIT_LABEL_LOADING
        } else {
            SUBMIT_LABEL
        }
    }
}
