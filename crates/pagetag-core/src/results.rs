/// Per-page extraction results for one document.
///
/// Holds exactly one entry per page, in page order: `Some(code)` for pages
/// whose primary code decoded, `None` for pages without a readable code.
/// Absent pages keep their slot so that later indices never shift.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageResults {
    entries: Vec<Option<String>>,
}

impl PageResults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(pages: usize) -> Self {
        Self {
            entries: Vec::with_capacity(pages),
        }
    }

    /// Record the result for the next page in order.
    pub fn push(&mut self, code: Option<String>) {
        self.entries.push(code);
    }

    /// Number of pages recorded.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Result for a single page, if that page was recorded.
    pub fn get(&self, page: usize) -> Option<Option<&str>> {
        self.entries.get(page).map(|e| e.as_deref())
    }

    /// Iterate over per-page entries in page order.
    pub fn iter(&self) -> impl Iterator<Item = Option<&str>> {
        self.entries.iter().map(|e| e.as_deref())
    }

    /// The ordered sequence of decoded codes, excluding absent pages.
    ///
    /// This is what downstream alignment consumes; it may be shorter than
    /// the page count.
    pub fn output_sequence(&self) -> Vec<String> {
        self.entries.iter().flatten().cloned().collect()
    }
}
