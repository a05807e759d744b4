use crate::domain::model::InquiryStatus;

pub type QueryPairs = Vec<(&'static str, String)>;

/// `type` is skipped when missing or empty, `active` only when `None`.
pub fn portfolio_query(type_filter: Option<&str>, active: Option<bool>) -> QueryPairs {
    let mut params = Vec::new();
    if let Some(kind) = type_filter.filter(|kind| !kind.is_empty()) {
        params.push(("type", kind.to_string()));
    }
    if let Some(active) = active {
        params.push(("active", active.to_string()));
    }
    params
}

pub fn testimonials_query(active_only: bool) -> QueryPairs {
    if active_only {
        vec![("active", "true".to_string())]
    } else {
        Vec::new()
    }
}

pub fn inquiries_query(status: Option<InquiryStatus>, limit: u32) -> QueryPairs {
    let mut params = Vec::new();
    if let Some(status) = status {
        params.push(("status", status.as_str().to_string()));
    }
    params.push(("limit", limit.to_string()));
    params
}
