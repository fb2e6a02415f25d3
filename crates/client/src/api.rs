use models::records::{
    ClassGroup, DeleteConfirmation, Discipline, Laboratory, Professor, Reservation,
    ReservationDetails, ReservationInput,
};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Default API location when nothing else is configured
pub const DEFAULT_API_URL: &str = "http://localhost:3001";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    /// The server answered with a non-2xx status. `message` is the server's
    /// own explanation when it sent one.
    #[error("{message}")]
    Status { status: StatusCode, message: String },
}

/// Typed access to the LabFácil HTTP API
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response.json().await?);
        }

        let body: Value = response.json().await.unwrap_or(Value::Null);
        let message = body
            .get("message")
            .or_else(|| body.get("error"))
            .and_then(Value::as_str)
            .unwrap_or("Erro desconhecido.")
            .to_string();

        Err(ApiError::Status { status, message })
    }

    pub async fn laboratories(&self) -> Result<Vec<Laboratory>, ApiError> {
        Self::send(self.http.get(self.url("/laboratorios"))).await
    }

    pub async fn professors(&self) -> Result<Vec<Professor>, ApiError> {
        Self::send(self.http.get(self.url("/professores"))).await
    }

    pub async fn disciplines(&self) -> Result<Vec<Discipline>, ApiError> {
        Self::send(self.http.get(self.url("/disciplinas"))).await
    }

    pub async fn class_groups(&self) -> Result<Vec<ClassGroup>, ApiError> {
        Self::send(self.http.get(self.url("/turmas"))).await
    }

    pub async fn reservations(&self) -> Result<Vec<ReservationDetails>, ApiError> {
        Self::send(self.http.get(self.url("/reservas"))).await
    }

    pub async fn create_reservation(
        &self,
        input: &ReservationInput,
    ) -> Result<Reservation, ApiError> {
        Self::send(self.http.post(self.url("/reservas")).json(input)).await
    }

    pub async fn update_reservation(
        &self,
        code: i32,
        input: &ReservationInput,
    ) -> Result<Reservation, ApiError> {
        Self::send(
            self.http
                .put(self.url(&format!("/reservas/{code}")))
                .json(input),
        )
        .await
    }

    pub async fn cancel_reservation(&self, code: i32) -> Result<Reservation, ApiError> {
        Self::send(self.http.put(self.url(&format!("/reservas/{code}/cancelar")))).await
    }

    pub async fn delete_reservation(&self, code: i32) -> Result<DeleteConfirmation, ApiError> {
        Self::send(self.http.delete(self.url(&format!("/reservas/{code}")))).await
    }
}
