use crate::utils::validation::{
    validate_email, validate_max_length, validate_non_empty_string, Validate,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Portfolio categories the backend knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PortfolioType {
    #[serde(rename = "Video Scripts")]
    VideoScripts,
    #[serde(rename = "Content Package")]
    ContentPackage,
    #[serde(rename = "Channel Copy")]
    ChannelCopy,
    #[serde(rename = "Lead Magnet")]
    LeadMagnet,
    #[serde(rename = "Email Marketing")]
    EmailMarketing,
    #[serde(rename = "Thumbnail Copy")]
    ThumbnailCopy,
}

impl PortfolioType {
    pub const ALL: [PortfolioType; 6] = [
        PortfolioType::VideoScripts,
        PortfolioType::ContentPackage,
        PortfolioType::ChannelCopy,
        PortfolioType::LeadMagnet,
        PortfolioType::EmailMarketing,
        PortfolioType::ThumbnailCopy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PortfolioType::VideoScripts => "Video Scripts",
            PortfolioType::ContentPackage => "Content Package",
            PortfolioType::ChannelCopy => "Channel Copy",
            PortfolioType::LeadMagnet => "Lead Magnet",
            PortfolioType::EmailMarketing => "Email Marketing",
            PortfolioType::ThumbnailCopy => "Thumbnail Copy",
        }
    }
}

impl fmt::Display for PortfolioType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PortfolioType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PortfolioType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown portfolio type: {}", s))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub id: String,
    pub title: String,
    pub client: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub results: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl PortfolioItem {
    /// `None` when the backend sent a category this client does not know.
    pub fn portfolio_type(&self) -> Option<PortfolioType> {
        self.kind.parse().ok()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub channel: String,
    pub subscribers: String,
    pub testimonial: String,
    pub rating: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub number: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
}

impl Stat {
    pub fn new(number: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: None,
            number: number.into(),
            label: label.into(),
            order: None,
        }
    }
}

/// Body of `POST /contact`. Optional fields serialize as `null`, never omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub channel: Option<String>,
    pub subscribers: Option<String>,
    pub service: String,
    pub project: Option<String>,
    pub budget: Option<String>,
    pub message: String,
}

impl Validate for ContactSubmission {
    /// Mirrors the backend's field limits.
    fn validate(&self) -> crate::utils::error::Result<()> {
        validate_non_empty_string("name", &self.name)?;
        validate_max_length("name", &self.name, 100)?;
        validate_email("email", &self.email)?;
        validate_non_empty_string("service", &self.service)?;
        validate_max_length("service", &self.service, 50)?;
        validate_non_empty_string("message", &self.message)?;
        validate_max_length("message", &self.message, 2000)?;

        let optional = [
            ("channel", &self.channel, 100),
            ("subscribers", &self.subscribers, 20),
            ("project", &self.project, 50),
            ("budget", &self.budget, 20),
        ];
        for (field, value, max) in optional {
            if let Some(value) = value {
                validate_max_length(field, value, max)?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InquiryStatus {
    New,
    Contacted,
    InProgress,
    Completed,
    Closed,
}

impl InquiryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InquiryStatus::New => "new",
            InquiryStatus::Contacted => "contacted",
            InquiryStatus::InProgress => "in-progress",
            InquiryStatus::Completed => "completed",
            InquiryStatus::Closed => "closed",
        }
    }
}

impl fmt::Display for InquiryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InquiryStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(InquiryStatus::New),
            "contacted" => Ok(InquiryStatus::Contacted),
            "in-progress" => Ok(InquiryStatus::InProgress),
            "completed" => Ok(InquiryStatus::Completed),
            "closed" => Ok(InquiryStatus::Closed),
            other => Err(format!("unknown inquiry status: {}", other)),
        }
    }
}

/// What the backend hands back for a stored contact submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInquiry {
    pub id: String,
    #[serde(flatten)]
    pub submission: ContactSubmission,
    pub status: InquiryStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
