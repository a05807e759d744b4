use crate::utils::error::{ApiError, Result};
use regex::Regex;
use std::sync::OnceLock;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, reason: impl Into<String>) -> ApiError {
    ApiError::Validation {
        field: field_name.to_string(),
        message: reason.into(),
    }
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    let config_error = |message: String| ApiError::Config {
        field: field_name.to_string(),
        message,
    };

    if url_str.is_empty() {
        return Err(config_error("URL cannot be empty".to_string()));
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(config_error(format!("Unsupported URL scheme: {}", scheme))),
        },
        Err(e) => Err(config_error(format!("Invalid URL format: {}", e))),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(field_name, "Value cannot be empty or whitespace-only"));
    }
    Ok(())
}

/// Length is counted in characters, not bytes.
pub fn validate_max_length(field_name: &str, value: &str, max: usize) -> Result<()> {
    let length = value.chars().count();
    if length > max {
        return Err(invalid(
            field_name,
            format!("Value is {} characters, maximum is {}", length, max),
        ));
    }
    Ok(())
}

pub fn validate_email(field_name: &str, value: &str) -> Result<()> {
    static EMAIL: OnceLock<Option<Regex>> = OnceLock::new();
    let pattern = EMAIL.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").ok());

    match pattern {
        Some(re) if re.is_match(value) => Ok(()),
        Some(_) => Err(invalid(field_name, "Not a valid email address")),
        None => Err(invalid(field_name, "Email pattern unavailable")),
    }
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(invalid(
            field_name,
            format!("Value {} must be between {} and {}", value, min, max),
        ));
    }
    Ok(())
}
