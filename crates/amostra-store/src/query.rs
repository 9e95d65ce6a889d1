//! Query types for sample repository lookups.

use serde::{Deserialize, Serialize};

use amostra_types::SampleStatus;

/// Filtering and pagination for sample queries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SampleQuery {
    /// Substring filter matched against `codigo`, `fabricante` and
    /// `categoria`. Empty or whitespace-only text matches all records.
    pub text: Option<String>,
    /// Filter by status.
    pub status: Option<SampleStatus>,
    /// Maximum results to return.
    pub limit: Option<u32>,
    /// Offset for pagination.
    pub offset: Option<u32>,
}

impl SampleQuery {
    /// Creates a query that matches all samples.
    pub fn all() -> Self {
        Self::default()
    }

    /// Sets the text filter. Empty or whitespace-only text is treated
    /// as no filter.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        if text.trim().is_empty() {
            self.text = None;
        } else {
            self.text = Some(text);
        }
        self
    }

    /// Sets the status filter.
    pub fn with_status(mut self, status: SampleStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the limit.
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the offset.
    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_has_no_filters() {
        let q = SampleQuery::all();
        assert!(q.text.is_none());
        assert!(q.status.is_none());
        assert!(q.limit.is_none());
    }

    #[test]
    fn empty_text_is_no_filter() {
        let q = SampleQuery::all().with_text("");
        assert!(q.text.is_none());
        let q = SampleQuery::all().with_text("   ");
        assert!(q.text.is_none());
    }

    #[test]
    fn text_filter_kept_verbatim() {
        let q = SampleQuery::all().with_text("S-100");
        assert_eq!(q.text.as_deref(), Some("S-100"));
    }

    #[test]
    fn builders_chain() {
        let q = SampleQuery::all()
            .with_status(SampleStatus::Processed)
            .with_limit(10)
            .with_offset(20);
        assert_eq!(q.status, Some(SampleStatus::Processed));
        assert_eq!(q.limit, Some(10));
        assert_eq!(q.offset, Some(20));
    }
}
