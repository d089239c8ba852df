//! Pagination value types shared by the service and the storage port.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Column a page of future devices can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Order by serial number.
    SerialNumber,
    /// Order by product id.
    ProductId,
    /// Order by customer id.
    CustomerId,
}

/// Sort direction, ascending by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Ascending.
    #[default]
    Asc,
    /// Descending.
    Desc,
}

/// Parameters describing one requested page.
///
/// `page` is a zero-based index; the storage query skips `page × per_page`
/// records. When no sort key is given the store's insertion order is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Zero-based page index.
    pub page: u32,
    /// Maximum number of records in the page.
    pub per_page: u32,
    /// Column to order by, if any.
    pub sort: Option<SortKey>,
    /// Sort direction.
    pub order: SortOrder,
}

impl PageRequest {
    /// Page size used when the caller does not specify one.
    pub const DEFAULT_PER_PAGE: u32 = 50;

    /// Check the request invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ZeroPageSize`] when `per_page` is zero.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.per_page == 0 {
            return Err(ValidationError::ZeroPageSize);
        }
        Ok(())
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            per_page: Self::DEFAULT_PER_PAGE,
            sort: None,
            order: SortOrder::Asc,
        }
    }
}

/// One page of results plus the paging metadata the caller asked for.
///
/// `total` is the full record count, independent of the requested window, so
/// clients can derive the number of pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    /// Records within the requested window.
    pub items: Vec<T>,
    /// Zero-based page index that was requested.
    pub page: u32,
    /// Page size that was requested.
    pub per_page: u32,
    /// Total number of records across all pages.
    pub total: u64,
}

impl<T> Page<T> {
    /// Convert every item while keeping the paging metadata.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            per_page: self.per_page,
            total: self.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_first_page_with_default_size() {
        let request = PageRequest::default();
        assert_eq!(request.page, 0);
        assert_eq!(request.per_page, PageRequest::DEFAULT_PER_PAGE);
        assert!(request.sort.is_none());
        assert_eq!(request.order, SortOrder::Asc);
    }

    #[test]
    fn should_reject_zero_page_size() {
        let request = PageRequest {
            per_page: 0,
            ..PageRequest::default()
        };
        assert_eq!(request.validate(), Err(ValidationError::ZeroPageSize));
    }

    #[test]
    fn should_accept_default_request() {
        assert!(PageRequest::default().validate().is_ok());
    }

    #[test]
    fn should_keep_paging_metadata_when_mapping() {
        let page = Page {
            items: vec![1, 2, 3],
            page: 2,
            per_page: 3,
            total: 9,
        };
        let mapped = page.map(|n| n.to_string());
        assert_eq!(mapped.items, vec!["1", "2", "3"]);
        assert_eq!(mapped.page, 2);
        assert_eq!(mapped.per_page, 3);
        assert_eq!(mapped.total, 9);
    }

    #[test]
    fn should_deserialize_sort_key_from_snake_case() {
        let key: SortKey = serde_json::from_str("\"serial_number\"").unwrap();
        assert_eq!(key, SortKey::SerialNumber);
        let key: SortKey = serde_json::from_str("\"customer_id\"").unwrap();
        assert_eq!(key, SortKey::CustomerId);
    }

    #[test]
    fn should_reject_unknown_sort_key() {
        let result: Result<SortKey, _> = serde_json::from_str("\"color\"");
        assert!(result.is_err());
    }

    #[test]
    fn should_serialize_page_with_metadata() {
        let page = Page {
            items: vec!["a", "b"],
            page: 1,
            per_page: 2,
            total: 5,
        };
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["items"], serde_json::json!(["a", "b"]));
        assert_eq!(json["page"], 1);
        assert_eq!(json["per_page"], 2);
        assert_eq!(json["total"], 5);
    }
}
