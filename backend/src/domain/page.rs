//! Offset pagination for peak listings.

/// Records skipped when the caller gives no offset.
pub const DEFAULT_OFFSET: u32 = 0;
/// Records returned when the caller gives no limit.
pub const DEFAULT_LIMIT: u32 = 100;

/// A window over the id-ordered peak listing.
///
/// # Examples
/// ```
/// use peak_service::domain::PageRequest;
///
/// let page = PageRequest::new(None, Some(5));
/// assert_eq!((page.offset(), page.limit()), (0, 5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    offset: u32,
    limit: u32,
}

impl PageRequest {
    /// Build a page, filling in defaults for missing values.
    #[must_use]
    pub fn new(offset: Option<u32>, limit: Option<u32>) -> Self {
        Self {
            offset: offset.unwrap_or(DEFAULT_OFFSET),
            limit: limit.unwrap_or(DEFAULT_LIMIT),
        }
    }

    /// Number of records to skip.
    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// Maximum number of records to return.
    pub fn limit(&self) -> u32 {
        self.limit
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}
