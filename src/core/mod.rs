pub mod client;
pub mod query;

pub use crate::domain::model::{
    ContactInquiry, ContactSubmission, HealthStatus, InquiryStatus, PortfolioItem, PortfolioType,
    Stat, Testimonial,
};
pub use crate::domain::ports::{ConfigProvider, ContentApi, InquiryAdmin};
pub use crate::utils::error::Result;
