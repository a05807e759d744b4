use crate::domain::model::{
    ContactInquiry, ContactSubmission, HealthStatus, InquiryStatus, PortfolioItem, Stat,
    Testimonial,
};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn backend_url(&self) -> &str;
}

/// Read and write operations the public site needs from the backend.
#[async_trait]
pub trait ContentApi: Send + Sync {
    /// `type_filter` is dropped when absent or empty; `active` is dropped only when `None`.
    async fn get_portfolio_items(
        &self,
        type_filter: Option<&str>,
        active: Option<bool>,
    ) -> Result<Vec<PortfolioItem>>;

    async fn get_testimonials(&self, active_only: bool) -> Result<Vec<Testimonial>>;

    async fn get_stats(&self) -> Result<Vec<Stat>>;

    /// One attempt, no retry.
    async fn submit_contact_form(&self, submission: &ContactSubmission) -> Result<ContactInquiry>;

    async fn check_health(&self) -> Result<HealthStatus>;
}

#[async_trait]
pub trait InquiryAdmin: Send + Sync {
    async fn list_contact_inquiries(
        &self,
        status: Option<InquiryStatus>,
        limit: u32,
    ) -> Result<Vec<ContactInquiry>>;

    async fn update_inquiry_status(&self, id: &str, status: InquiryStatus)
        -> Result<ContactInquiry>;
}
