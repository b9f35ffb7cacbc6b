//! HTTP client for the booking service REST API

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::de::DeserializeOwned;
use shared::{datetime, Booking, BookingPayload, SlotQueryResponse};

use crate::error::{ClientError, ClientResult};
use crate::service::BookingService;
use crate::ClientConfig;

/// HTTP client for making network requests to the booking service
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Make a GET request
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with JSON body
    async fn put<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.client.put(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a DELETE request; a 2xx with any (or no) body is success
    async fn delete(&self, path: &str) -> ClientResult<()> {
        let response = self.client.delete(self.url(path)).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Self::error_from_body(status, response.text().await?));
        }
        Ok(())
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            return Err(Self::error_from_body(status, response.text().await?));
        }

        response.json().await.map_err(Into::into)
    }

    /// Extract the service's `{ "error": "..." }` message, falling back
    /// to a status-derived one when the body is not in that shape.
    fn error_from_body(status: reqwest::StatusCode, body: String) -> ClientError {
        #[derive(serde::Deserialize)]
        struct ErrorBody {
            error: String,
        }

        match serde_json::from_str::<ErrorBody>(&body) {
            Ok(parsed) => ClientError::Service(parsed.error),
            Err(_) => ClientError::Service(format!("Request failed with status {status}")),
        }
    }
}

#[async_trait]
impl BookingService for HttpClient {
    async fn list_bookings(&self) -> ClientResult<Vec<Booking>> {
        self.get("/bookings").await
    }

    async fn create_booking(&self, payload: &BookingPayload) -> ClientResult<Booking> {
        self.post("/bookings", payload).await
    }

    async fn update_booking(&self, id: &str, payload: &BookingPayload) -> ClientResult<Booking> {
        self.put(&format!("/bookings/{id}"), payload).await
    }

    async fn delete_booking(&self, id: &str) -> ClientResult<()> {
        self.delete(&format!("/bookings/{id}")).await
    }

    async fn available_slots(&self, date: NaiveDate) -> ClientResult<Vec<String>> {
        let response: SlotQueryResponse = self
            .get(&format!(
                "/available-slots?date={}",
                datetime::transport_date(date)
            ))
            .await?;
        Ok(response.available_slots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let client = ClientConfig::new("http://localhost:5000/").build_http_client();
        assert_eq!(client.url("/bookings"), "http://localhost:5000/bookings");
        assert_eq!(client.url("bookings"), "http://localhost:5000/bookings");
    }

    #[test]
    fn test_error_body_parsing() {
        let err = HttpClient::error_from_body(
            reqwest::StatusCode::BAD_REQUEST,
            r#"{"error":"Slot already taken"}"#.into(),
        );
        assert_eq!(err.to_string(), "Slot already taken");

        let err = HttpClient::error_from_body(
            reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            "<html>oops</html>".into(),
        );
        assert!(err.to_string().contains("500"));
    }
}
