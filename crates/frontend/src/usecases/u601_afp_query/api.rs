use contracts::usecases::u601_afp_query::{QueryRequest, QueryResponse};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, ApiError};

pub const QUERY_PATH: &str = "/afp-query";

/// Отправить вопрос RAG-бэкенду. Один запрос, без повторов.
pub async fn ask_question(request: &QueryRequest) -> Result<QueryResponse, ApiError> {
    let response = Request::post(&api_url(QUERY_PATH))
        .json(request)
        .map_err(|e| ApiError::Serialize(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    response
        .json::<QueryResponse>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
