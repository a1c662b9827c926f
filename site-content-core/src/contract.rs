//! # contract: interface to the remote structured-content service
//!
//! This module defines the single trait ([`ContentSource`]) through which every
//! resolver reads content, plus the query type it accepts.
//!
//! ## Interface & Extensibility
//! - Implement [`ContentSource`] to plug in a concrete backend (the Contentstack
//!   delivery client in the `site-content` crate, an in-memory table, a mock).
//! - All calls are async and return boxed errors; resolvers decide what a failure
//!   means for the page, never the source.
//!
//! ## Mocking & Testing
//! - The trait is annotated for `mockall` so both crates can script responses
//!   and failures deterministically.

use async_trait::async_trait;
use serde_json::Value;

use mockall::automock;

/// A raw entry as returned by the content service. Field shapes vary per
/// content type and per entry, so records stay untyped until a resolver maps them.
pub type Record = Value;

/// Error type for [`ContentSource`] (simple boxed error, like every other seam).
pub type SourceError = Box<dyn std::error::Error + Send + Sync>;

/// Direction of the server-side sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    pub field: String,
    pub direction: SortDirection,
}

/// A query scoped to one content type, with equality filters and an optional sort.
///
/// Built fluently:
///
/// ```
/// use site_content_core::contract::ContentQuery;
///
/// let query = ContentQuery::new("hero_slide")
///     .where_eq("is_active", true)
///     .ascending("display_order");
/// assert_eq!(query.content_type, "hero_slide");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ContentQuery {
    pub content_type: String,
    pub filters: Vec<(String, Value)>,
    pub sort: Option<Sort>,
}

impl ContentQuery {
    pub fn new(content_type: impl Into<String>) -> Self {
        Self {
            content_type: content_type.into(),
            filters: Vec::new(),
            sort: None,
        }
    }

    /// Adds an equality filter. Filters are combined with AND.
    pub fn where_eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filters.push((field.into(), value.into()));
        self
    }

    pub fn ascending(mut self, field: impl Into<String>) -> Self {
        self.sort = Some(Sort {
            field: field.into(),
            direction: SortDirection::Ascending,
        });
        self
    }

    pub fn descending(mut self, field: impl Into<String>) -> Self {
        self.sort = Some(Sort {
            field: field.into(),
            direction: SortDirection::Descending,
        });
        self
    }

    /// The filters as a single JSON object, the shape the delivery API expects
    /// in its `query` parameter. `None` when the query is unfiltered.
    pub fn filter_object(&self) -> Option<Value> {
        if self.filters.is_empty() {
            return None;
        }
        let map = self
            .filters
            .iter()
            .map(|(field, value)| (field.clone(), value.clone()))
            .collect::<serde_json::Map<_, _>>();
        Some(Value::Object(map))
    }
}

/// Read-only access to the remote content service.
///
/// The trait is `Send` + `Sync` so one handle can be shared process-wide and
/// across spawned section tasks.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Run `query` and return the matching entries in the order the service
    /// produced them.
    async fn find(&self, query: &ContentQuery) -> Result<Vec<Record>, SourceError>;
}
