use contracts::system::health::HealthResponse;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api_utils::{api_url, ApiError};

/// Интервал повторной проверки бэкенда, мс
const HEALTH_POLL_MS: u32 = 30_000;

#[derive(Clone, Debug, PartialEq, Eq)]
enum ServerStatus {
    Checking,
    Online { vector_store: String },
    Degraded { vector_store: String },
    Offline,
}

impl ServerStatus {
    fn from_probe(result: Result<HealthResponse, ApiError>) -> Self {
        match result {
            Ok(health) if health.is_healthy() => ServerStatus::Online {
                vector_store: health.vector_store,
            },
            Ok(health) => ServerStatus::Degraded {
                vector_store: health.vector_store,
            },
            Err(e) => {
                log::warn!("health check failed: {}", e);
                ServerStatus::Offline
            }
        }
    }

    fn display_text(&self) -> String {
        match self {
            ServerStatus::Checking => "Servidor: comprobando...".to_string(),
            ServerStatus::Online { vector_store } => {
                format!("Servidor: en línea ({})", vector_store)
            }
            ServerStatus::Degraded { vector_store } => {
                format!("Servidor: sin índice ({})", vector_store)
            }
            ServerStatus::Offline => "Servidor: sin conexión".to_string(),
        }
    }

    fn css_class(&self) -> &'static str {
        match self {
            ServerStatus::Checking => "status-checking",
            ServerStatus::Online { .. } => "status-online",
            ServerStatus::Degraded { .. } => "status-degraded",
            ServerStatus::Offline => "status-offline",
        }
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let status = RwSignal::new(ServerStatus::Checking);

    // Проверка при монтировании, дальше по таймеру
    Effect::new(move |_| {
        spawn_local(async move {
            loop {
                let result = fetch_health().await;
                status.set(ServerStatus::from_probe(result));
                TimeoutFuture::new(HEALTH_POLL_MS).await;
            }
        });
    });

    view! {
        <footer data-zone="footer" class="footer">
            <p>
                "ℹ️ Esta información es de carácter general. Para consultas específicas, "
                "contacta directamente con tu AFP o la Superintendencia de Pensiones."
            </p>
            <span class=move || status.with(ServerStatus::css_class)>
                {move || status.with(ServerStatus::display_text)}
            </span>
        </footer>
    }
}

async fn fetch_health() -> Result<HealthResponse, ApiError> {
    let response = Request::get(&api_url("/health"))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    response
        .json::<HealthResponse>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn health(status: &str, available: bool) -> HealthResponse {
        HealthResponse {
            status: status.to_string(),
            vector_store: "faiss".to_string(),
            vector_store_available: available,
        }
    }

    #[test]
    fn test_healthy_backend_is_online() {
        let status = ServerStatus::from_probe(Ok(health("healthy", true)));
        assert_eq!(
            status,
            ServerStatus::Online {
                vector_store: "faiss".to_string()
            }
        );
        assert_eq!(status.css_class(), "status-online");
        assert_eq!(status.display_text(), "Servidor: en línea (faiss)");
    }

    #[test]
    fn test_unavailable_store_is_degraded() {
        let status = ServerStatus::from_probe(Ok(health("unhealthy", false)));
        assert_eq!(status.css_class(), "status-degraded");

        let status = ServerStatus::from_probe(Ok(health("healthy", false)));
        assert_eq!(status.css_class(), "status-degraded");
    }

    #[test]
    fn test_probe_error_is_offline() {
        let status = ServerStatus::from_probe(Err(ApiError::Status(502)));
        assert_eq!(status, ServerStatus::Offline);
        assert_eq!(status.css_class(), "status-offline");
    }
}
