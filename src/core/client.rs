use crate::config::ClientConfig;
use crate::core::query::{inquiries_query, portfolio_query, testimonials_query};
use crate::domain::model::{
    ContactInquiry, ContactSubmission, HealthStatus, InquiryStatus, PortfolioItem, Stat,
    Testimonial,
};
use crate::domain::ports::{ContentApi, InquiryAdmin};
use crate::utils::error::{extract_detail, ApiError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_range};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Applied to every call. A call that runs past it fails as `ApiError::NoResponse`.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub const MAX_INQUIRY_LIMIT: u32 = 100;

/// reqwest-backed access layer. Cloning shares the connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: ClientConfig,
    client: Client,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::with_timeout(config, REQUEST_TIMEOUT)
    }

    pub(crate) fn with_timeout(config: ClientConfig, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        tracing::debug!("API client ready for {}", config.api_base());
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder, action: &str) -> Result<T> {
        let outcome = match request.send().await {
            Ok(response) => Self::read_json(response).await,
            Err(e) => Err(ApiError::from(e)),
        };

        if let Err(e) = &outcome {
            tracing::error!("❌ Error {}: {}", action, e);
        }
        outcome
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if status.is_success() {
            let body = response.bytes().await?;
            serde_json::from_slice(&body).map_err(|e| ApiError::InvalidResponse {
                reason: e.to_string(),
            })
        } else {
            // A body that never finishes arriving is a connectivity failure, not a rejection.
            let body = response.text().await?;
            Err(ApiError::ServerRejected {
                status: status.as_u16(),
                detail: extract_detail(&body),
            })
        }
    }

    fn inquiry_status_url(&self, id: &str) -> Result<url::Url> {
        let mut url = url::Url::parse(&self.config.api_base()).map_err(|e| ApiError::Config {
            field: "backend_url".to_string(),
            message: e.to_string(),
        })?;
        url.path_segments_mut()
            .map_err(|_| ApiError::Config {
                field: "backend_url".to_string(),
                message: "URL cannot carry a path".to_string(),
            })?
            .extend(&["contact", id, "status"]);
        Ok(url)
    }
}

#[async_trait::async_trait]
impl ContentApi for ApiClient {
    async fn get_portfolio_items(
        &self,
        type_filter: Option<&str>,
        active: Option<bool>,
    ) -> Result<Vec<PortfolioItem>> {
        let params = portfolio_query(type_filter, active);
        tracing::debug!("📡 Fetching portfolio items {:?}", params);
        let request = self
            .client
            .get(self.config.endpoint("portfolio"))
            .query(&params);
        self.execute(request, "fetching portfolio items").await
    }

    async fn get_testimonials(&self, active_only: bool) -> Result<Vec<Testimonial>> {
        let params = testimonials_query(active_only);
        tracing::debug!("📡 Fetching testimonials {:?}", params);
        let request = self
            .client
            .get(self.config.endpoint("testimonials"))
            .query(&params);
        self.execute(request, "fetching testimonials").await
    }

    async fn get_stats(&self) -> Result<Vec<Stat>> {
        tracing::debug!("📡 Fetching stats");
        let request = self.client.get(self.config.endpoint("stats"));
        self.execute(request, "fetching stats").await
    }

    async fn submit_contact_form(&self, submission: &ContactSubmission) -> Result<ContactInquiry> {
        tracing::debug!("📨 Submitting contact form for service {}", submission.service);
        let request = self
            .client
            .post(self.config.endpoint("contact"))
            .json(submission);
        let inquiry: ContactInquiry = self.execute(request, "submitting contact form").await?;
        tracing::info!("✅ Contact inquiry {} accepted", inquiry.id);
        Ok(inquiry)
    }

    async fn check_health(&self) -> Result<HealthStatus> {
        let request = self.client.get(self.config.endpoint(""));
        self.execute(request, "checking API health").await
    }
}

#[async_trait::async_trait]
impl InquiryAdmin for ApiClient {
    async fn list_contact_inquiries(
        &self,
        status: Option<InquiryStatus>,
        limit: u32,
    ) -> Result<Vec<ContactInquiry>> {
        validate_range("limit", limit, 1, MAX_INQUIRY_LIMIT)?;
        let params = inquiries_query(status, limit);
        tracing::debug!("📡 Fetching contact inquiries {:?}", params);
        let request = self
            .client
            .get(self.config.endpoint("contact"))
            .query(&params);
        self.execute(request, "fetching contact inquiries").await
    }

    async fn update_inquiry_status(
        &self,
        id: &str,
        status: InquiryStatus,
    ) -> Result<ContactInquiry> {
        validate_non_empty_string("id", id)?;
        let url = self.inquiry_status_url(id)?;
        tracing::debug!("📝 Setting inquiry {} to {}", id, status);
        let request = self
            .client
            .put(url)
            .json(&serde_json::json!({ "status": status }));
        self.execute(request, "updating inquiry status").await
    }
}
