//! Search session: the state one open dialog keeps between renders.

use crate::catalog::PictogramRecord;
use crate::error::ValidationError;
use crate::paginate::{page_count, page_view, paginate, PageView};

/// Trim `raw` and reject it when nothing is left.
pub fn validate_query(raw: &str) -> Result<&str, ValidationError> {
    let query = raw.trim();
    if query.is_empty() {
        return Err(ValidationError::EmptyQuery);
    }
    if matches!(query, "." | "..") {
        return Err(ValidationError::DotSegment(query.to_string()));
    }
    Ok(query)
}

/// Query, language, results and page of one dialog instance.
///
/// `page` stays in `1..=page_count` while there are results and is 1
/// otherwise. Replacing the results always resets it to 1.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSession {
    query: String,
    language: String,
    results: Vec<PictogramRecord>,
    page: usize,
    page_size: usize,
}

impl SearchSession {
    pub fn new(language: impl Into<String>, page_size: usize) -> Self {
        Self {
            query: String::new(),
            language: language.into(),
            results: Vec::new(),
            page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Query of the last search, empty before the first one.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn results(&self) -> &[PictogramRecord] {
        &self.results
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn has_searched(&self) -> bool {
        !self.query.is_empty()
    }

    /// Change the language. Fetched records are kept; only their labels
    /// and the next request change.
    pub fn set_language(&mut self, language: impl Into<String>) {
        self.language = language.into();
    }

    /// Replace the whole result sequence and go back to page 1.
    pub fn replace_results(&mut self, query: impl Into<String>, results: Vec<PictogramRecord>) {
        self.query = query.into();
        self.results = results;
        self.page = 1;
    }

    /// Empty the result sequence after a failed search.
    pub fn clear_results(&mut self, query: impl Into<String>) {
        self.replace_results(query, Vec::new());
    }

    pub fn page_count(&self) -> usize {
        page_count(self.results.len(), self.page_size)
    }

    /// Advance one page. Returns false at the last page.
    pub fn next_page(&mut self) -> bool {
        if self.page < self.page_count() {
            self.page += 1;
            return true;
        }
        false
    }

    /// Go back one page. Returns false at the first page.
    pub fn previous_page(&mut self) -> bool {
        if self.page > 1 {
            self.page -= 1;
            return true;
        }
        false
    }

    pub fn view(&self) -> PageView<'_, PictogramRecord> {
        page_view(&self.results, self.page, self.page_size)
    }

    pub fn page_items(&self) -> &[PictogramRecord] {
        paginate(&self.results, self.page, self.page_size)
    }

    /// Display name of `record` in the session language.
    pub fn resolve_label<'a>(&self, record: &'a PictogramRecord) -> &'a str {
        record.label_for(&self.language)
    }
}
