/// Service layer for OrgPad
///
/// Each request handler calls exactly one service function; the service
/// owns the full check sequence for its operation, so the ordering
/// existence → organization → role → mutation lives in one place per
/// entity. Services receive the store handle and the authenticated
/// caller explicitly; there is no process-wide session state.
///
/// # Modules
///
/// - `auth`: signup, login, token authentication
/// - `notes`: organization-scoped note CRUD
/// - `todos`: organization-scoped todo CRUD

pub mod auth;
pub mod notes;
pub mod todos;

/// Default page size when the caller does not supply a limit
pub const DEFAULT_PAGE_SIZE: i64 = 100;

/// Hard ceiling on page size
pub const MAX_PAGE_SIZE: i64 = 500;

/// Offset/limit pagination window
///
/// `limit` is clamped to `MAX_PAGE_SIZE` and negative values clamp to
/// zero, so a hostile `limit=9999999` cannot drag an entire tenant's data
/// through one response.
#[derive(Debug, Clone, Copy)]
pub struct Page {
    /// Rows to skip
    pub skip: i64,

    /// Maximum rows to return
    pub limit: i64,
}

impl Page {
    /// Builds a clamped page from raw caller input
    pub fn new(skip: Option<i64>, limit: Option<i64>) -> Self {
        Self {
            skip: skip.unwrap_or(0).max(0),
            limit: limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(0, MAX_PAGE_SIZE),
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_defaults() {
        let page = Page::new(None, None);
        assert_eq!(page.skip, 0);
        assert_eq!(page.limit, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_page_clamps_oversized_limit() {
        let page = Page::new(None, Some(1_000_000));
        assert_eq!(page.limit, MAX_PAGE_SIZE);
    }

    #[test]
    fn test_page_clamps_negative_input() {
        let page = Page::new(Some(-5), Some(-10));
        assert_eq!(page.skip, 0);
        assert_eq!(page.limit, 0);
    }

    #[test]
    fn test_page_passes_reasonable_values() {
        let page = Page::new(Some(20), Some(50));
        assert_eq!(page.skip, 20);
        assert_eq!(page.limit, 50);
    }
}
