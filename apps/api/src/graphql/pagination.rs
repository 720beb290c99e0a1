//! Page-number pagination shared by every list query
//!
//! Queries take a 1-based `page` and a `pageSize`. `PageRequest` validates
//! them and yields the offset/limit pair for SQL, and `Connection` wraps a
//! page of nodes with its `PageInfo`.

use async_graphql::{OutputType, SimpleObject};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use content_shared_config::{PaginationConfig, MAX_PAGE_SIZE};

use crate::error::{ApiError, ApiResult};
use crate::graphql::types::{BlogPost, CommunityComment, CommunityPost};

/// Default page number for list queries
pub const DEFAULT_PAGE: i32 = 1;

/// Default page size for list queries
pub const DEFAULT_PAGE_SIZE: i32 = 10;

const CURSOR_PREFIX: &str = "offset:";

/// Validated page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i32,
    page_size: i32,
}

impl PageRequest {
    /// Validate `page` and `page_size` against the default maximum
    pub fn new(page: i32, page_size: i32) -> ApiResult<Self> {
        Self::bounded(page, page_size, MAX_PAGE_SIZE)
    }

    /// Validate `page` and `page_size` against configured limits
    pub fn with_limits(page: i32, page_size: i32, limits: &PaginationConfig) -> ApiResult<Self> {
        Self::bounded(page, page_size, limits.max_page_size)
    }

    fn bounded(page: i32, page_size: i32, max_page_size: u32) -> ApiResult<Self> {
        if page < 1 {
            return Err(ApiError::BadRequest(format!(
                "page must be at least 1 (got {})",
                page
            )));
        }
        if page_size < 1 {
            return Err(ApiError::BadRequest(format!(
                "pageSize must be at least 1 (got {})",
                page_size
            )));
        }

        let max = i32::try_from(max_page_size).unwrap_or(i32::MAX);
        Ok(Self {
            page,
            page_size: page_size.min(max),
        })
    }

    pub fn page(&self) -> i32 {
        self.page
    }

    pub fn page_size(&self) -> i32 {
        self.page_size
    }

    /// Rows to skip: `(page - 1) * page_size`
    pub fn skip(&self) -> i64 {
        (i64::from(self.page) - 1) * i64::from(self.page_size)
    }

    /// Rows to take
    pub fn take(&self) -> i64 {
        i64::from(self.page_size)
    }
}

/// Pagination metadata returned alongside every page
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
#[graphql(shareable)]
pub struct PageInfo {
    pub has_next_page: bool,
    pub has_previous_page: bool,
    /// Opaque cursor of the first node on this page
    pub start_cursor: Option<String>,
    /// Opaque cursor of the last node on this page
    pub end_cursor: Option<String>,
    pub total_count: i32,
    pub total_pages: i32,
    pub current_page: i32,
    pub page_size: i32,
}

impl PageInfo {
    /// Build page metadata for `node_count` nodes out of `total_count` rows
    pub fn new(total_count: i64, request: &PageRequest, node_count: usize) -> Self {
        let total_count = total_count.max(0);
        let page_size = i64::from(request.page_size());
        let total_pages = (total_count + page_size - 1) / page_size;
        let current_page = request.page();

        let (start_cursor, end_cursor) = if node_count == 0 {
            (None, None)
        } else {
            let first = request.skip();
            let last = first + node_count as i64 - 1;
            (Some(encode_cursor(first)), Some(encode_cursor(last)))
        };

        Self {
            has_next_page: i64::from(current_page) < total_pages,
            has_previous_page: current_page > 1,
            start_cursor,
            end_cursor,
            total_count: saturating_i32(total_count),
            total_pages: saturating_i32(total_pages),
            current_page,
            page_size: request.page_size(),
        }
    }
}

fn saturating_i32(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

/// Encode an absolute row offset as an opaque cursor
pub fn encode_cursor(offset: i64) -> String {
    STANDARD.encode(format!("{}{}", CURSOR_PREFIX, offset))
}

/// One page of items plus the total row count, before GraphQL conversion
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: i64,
    pub request: PageRequest,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total_count: i64, request: PageRequest) -> Self {
        Self {
            items,
            total_count,
            request,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
            request: self.request,
        }
    }
}

/// `{ nodes, pageInfo }` envelope returned by list queries
#[derive(SimpleObject)]
#[graphql(
    concrete(name = "BlogPostsConnection", params(BlogPost)),
    concrete(name = "CommunityPostsConnection", params(CommunityPost)),
    concrete(name = "CommunityCommentsConnection", params(CommunityComment))
)]
pub struct Connection<T: OutputType> {
    pub nodes: Vec<T>,
    pub page_info: PageInfo,
}

impl<T: OutputType> From<Page<T>> for Connection<T> {
    fn from(page: Page<T>) -> Self {
        let page_info = PageInfo::new(page.total_count, &page.request, page.items.len());
        Self {
            nodes: page.items,
            page_info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use rstest::rstest;

    fn decode_cursor(cursor: &str) -> Option<i64> {
        let bytes = STANDARD.decode(cursor).ok()?;
        let text = String::from_utf8(bytes).ok()?;
        text.strip_prefix(CURSOR_PREFIX)?.parse().ok()
    }

    #[rstest]
    #[case(1, 10, 0)]
    #[case(2, 10, 10)]
    #[case(3, 25, 50)]
    #[case(7, 1, 6)]
    fn test_skip_and_take(#[case] page: i32, #[case] page_size: i32, #[case] skip: i64) {
        let request = PageRequest::new(page, page_size).unwrap();
        assert_eq!(request.skip(), skip);
        assert_eq!(request.take(), i64::from(page_size));
        assert_eq!(request.page(), page);
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 1)]
    #[case(10, 1)]
    #[case(11, 2)]
    #[case(95, 10)]
    fn test_total_pages(#[case] total_count: i64, #[case] total_pages: i32) {
        let request = PageRequest::new(1, 10).unwrap();
        let info = PageInfo::new(total_count, &request, 0);
        assert_eq!(info.total_pages, total_pages);
        assert_eq!(info.total_count as i64, total_count);
    }

    #[test]
    fn test_zero_page_size_fails_fast() {
        assert_matches!(PageRequest::new(1, 0), Err(ApiError::BadRequest(_)));
        assert_matches!(PageRequest::new(1, -3), Err(ApiError::BadRequest(_)));
    }

    #[test]
    fn test_zero_page_fails_fast() {
        assert_matches!(PageRequest::new(0, 10), Err(ApiError::BadRequest(_)));
    }

    #[test]
    fn test_page_size_clamped_to_limit() {
        let request = PageRequest::new(1, 10_000).unwrap();
        assert_eq!(request.page_size(), 100);

        let limits = PaginationConfig {
            default_page_size: 5,
            max_page_size: 20,
        };
        let request = PageRequest::with_limits(2, 50, &limits).unwrap();
        assert_eq!(request.page_size(), 20);
        assert_eq!(request.skip(), 20);
    }

    #[test]
    fn test_middle_page_info() {
        let request = PageRequest::new(2, 10).unwrap();
        let info = PageInfo::new(35, &request, 10);

        assert!(info.has_next_page);
        assert!(info.has_previous_page);
        assert_eq!(info.current_page, 2);
        assert_eq!(info.page_size, 10);
        assert_eq!(info.total_pages, 4);
        assert_eq!(info.start_cursor.as_deref().and_then(decode_cursor), Some(10));
        assert_eq!(info.end_cursor.as_deref().and_then(decode_cursor), Some(19));
    }

    #[test]
    fn test_last_page_info() {
        let request = PageRequest::new(4, 10).unwrap();
        let info = PageInfo::new(35, &request, 5);

        assert!(!info.has_next_page);
        assert!(info.has_previous_page);
        assert_eq!(info.end_cursor.as_deref().and_then(decode_cursor), Some(34));
    }

    #[test]
    fn test_page_beyond_last_is_empty() {
        let request = PageRequest::new(9, 10).unwrap();
        let info = PageInfo::new(35, &request, 0);

        assert!(!info.has_next_page);
        assert_eq!(info.current_page, 9);
        assert!(info.start_cursor.is_none());
        assert!(info.end_cursor.is_none());
    }

    #[test]
    fn test_first_page_of_empty_listing() {
        let request = PageRequest::new(1, 10).unwrap();
        let info = PageInfo::new(0, &request, 0);

        assert!(!info.has_next_page);
        assert!(!info.has_previous_page);
        assert_eq!(info.total_pages, 0);
    }

    #[test]
    fn test_decode_rejects_foreign_cursors() {
        assert_eq!(decode_cursor("not base64!"), None);
        assert_eq!(decode_cursor(&STANDARD.encode("page:3")), None);
        assert_eq!(decode_cursor(&encode_cursor(42)), Some(42));
    }

    #[test]
    fn test_page_map_keeps_totals() {
        let request = PageRequest::new(1, 2).unwrap();
        let page = Page::new(vec![1, 2], 5, request).map(|n| n * 10);
        assert_eq!(page.items, vec![10, 20]);
        assert_eq!(page.total_count, 5);
        assert_eq!(page.request, request);
    }
}
