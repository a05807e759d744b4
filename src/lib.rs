pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;
pub use crate::config::{toml_config::TomlConfig, ClientConfig};

pub use crate::app::contact_form::{ContactForm, ContactFormInput, Notice, SubmitOutcome};
pub use crate::app::sections::{
    fallback_stats, load_landing, load_portfolio, load_stats, load_testimonials, Landing,
    SectionState,
};
pub use crate::core::client::{ApiClient, REQUEST_TIMEOUT};
pub use crate::domain::model::{
    ContactInquiry, ContactSubmission, HealthStatus, InquiryStatus, PortfolioItem, PortfolioType,
    Stat, Testimonial,
};
pub use crate::domain::ports::{ConfigProvider, ContentApi, InquiryAdmin};
pub use crate::utils::error::{handle_api_error, ApiError, ErrorClass, Result};
