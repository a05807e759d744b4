use crate::domain::model::{PortfolioItem, Stat, Testimonial};
use crate::domain::ports::ContentApi;
use crate::utils::error::{handle_api_error, Result};

/// Label the portfolio filter bar uses for "no filter".
pub const ALL_CATEGORIES: &str = "All";

/// What a list section renders.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionState<T> {
    Loading,
    Loaded(Vec<T>),
    Empty,
    /// Normalized message for the error banner.
    Failed(String),
}

impl<T> SectionState<T> {
    pub fn from_result(result: Result<Vec<T>>) -> Self {
        match result {
            Ok(items) if items.is_empty() => SectionState::Empty,
            Ok(items) => SectionState::Loaded(items),
            Err(e) => SectionState::Failed(handle_api_error(&e)),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SectionState::Loading)
    }

    pub fn items(&self) -> &[T] {
        match self {
            SectionState::Loaded(items) => items,
            _ => &[],
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            SectionState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> Default for SectionState<T> {
    fn default() -> Self {
        SectionState::Loading
    }
}

/// Headline numbers shown when the stats endpoint cannot be used.
pub fn fallback_stats() -> Vec<Stat> {
    vec![
        Stat::new("150+", "YouTube Channels Helped"),
        Stat::new("2M+", "Words Written"),
        Stat::new("45%", "Average Engagement Increase"),
        Stat::new("$250K+", "Revenue Generated for Clients"),
    ]
}

/// `None` and `"All"` both mean no type filter.
pub async fn load_portfolio<A: ContentApi + ?Sized>(
    api: &A,
    filter: Option<&str>,
) -> SectionState<PortfolioItem> {
    let type_filter = filter.filter(|f| *f != ALL_CATEGORIES);
    SectionState::from_result(api.get_portfolio_items(type_filter, Some(true)).await)
}

pub async fn load_testimonials<A: ContentApi + ?Sized>(api: &A) -> SectionState<Testimonial> {
    SectionState::from_result(api.get_testimonials(true).await)
}

/// Stats never surface an error; failures and empty lists degrade to [`fallback_stats`].
pub async fn load_stats<A: ContentApi + ?Sized>(api: &A) -> Vec<Stat> {
    match api.get_stats().await {
        Ok(stats) if !stats.is_empty() => stats,
        Ok(_) => {
            tracing::warn!("Stats endpoint returned nothing, using defaults");
            fallback_stats()
        }
        Err(e) => {
            tracing::warn!("⚠️ Using default stats: {}", e);
            fallback_stats()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Landing {
    pub stats: Vec<Stat>,
    pub portfolio: SectionState<PortfolioItem>,
    pub testimonials: SectionState<Testimonial>,
}

/// Loads every data-backed section at once. The fetches share nothing and finish in any order.
pub async fn load_landing<A: ContentApi + ?Sized>(api: &A) -> Landing {
    let (stats, portfolio, testimonials) = tokio::join!(
        load_stats(api),
        load_portfolio(api, None),
        load_testimonials(api)
    );

    Landing {
        stats,
        portfolio,
        testimonials,
    }
}
