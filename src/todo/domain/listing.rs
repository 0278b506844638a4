//! Listing rules: status filtering, ordering and pagination.
//!
//! These are pure functions over an id-ordered snapshot of the collection.
//! Unrecognised filter values and out-of-range paging parameters are
//! tolerated rather than rejected: an unknown status disables filtering and
//! a page beyond the end yields an empty window.

use super::{TodoItem, TodoStatus};
use serde::Serialize;

/// Listing parameters supplied by a caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListQuery {
    status: Option<TodoStatus>,
    page: usize,
    limit: usize,
}

impl ListQuery {
    /// Page used when none (or an invalid one) is supplied.
    pub const DEFAULT_PAGE: usize = 1;
    /// Page size used when none (or an invalid one) is supplied.
    pub const DEFAULT_LIMIT: usize = 10;

    /// Creates a query for the first page with the default page size and no
    /// status filter.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            status: None,
            page: Self::DEFAULT_PAGE,
            limit: Self::DEFAULT_LIMIT,
        }
    }

    /// Builds a query from raw request parameters.
    ///
    /// A `status` that is not exactly one of the known statuses is ignored.
    /// `page` and `limit` fall back to their defaults when missing, not
    /// numeric, or below one.
    #[must_use]
    pub fn from_params(status: Option<&str>, page: Option<&str>, limit: Option<&str>) -> Self {
        Self {
            status: status.and_then(TodoStatus::from_wire),
            page: parse_positive(page).unwrap_or(Self::DEFAULT_PAGE),
            limit: parse_positive(limit).unwrap_or(Self::DEFAULT_LIMIT),
        }
    }

    /// Restricts the listing to one status.
    #[must_use]
    pub const fn with_status(mut self, status: TodoStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the 1-based page number. Zero selects the default page.
    #[must_use]
    pub const fn with_page(mut self, page: usize) -> Self {
        self.page = if page == 0 { Self::DEFAULT_PAGE } else { page };
        self
    }

    /// Sets the page size. Zero selects the default page size.
    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = if limit == 0 { Self::DEFAULT_LIMIT } else { limit };
        self
    }

    /// Returns the status filter, if any.
    #[must_use]
    pub const fn status(&self) -> Option<TodoStatus> {
        self.status
    }

    /// Returns the 1-based page number.
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Returns the page size.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Returns the 0-based offset of the first item on the page.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }
}

impl Default for ListQuery {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_positive(raw: Option<&str>) -> Option<usize> {
    raw.and_then(|value| value.parse::<usize>().ok())
        .filter(|value| *value >= 1)
}

/// Ordering applied to a listing before pagination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListOrder {
    /// Ascending identifier, i.e. creation order.
    Insertion,
    /// Completed items last; otherwise by ascending due date, undated items
    /// after dated ones.
    #[default]
    CompletedLastByDueDate,
}

/// One page of a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoPage {
    /// 1-based page number.
    pub page: usize,
    /// Page size.
    pub limit: usize,
    /// Number of items matching the filter, before pagination.
    pub total: usize,
    /// Items on this page.
    #[serde(rename = "tasks")]
    pub items: Vec<TodoItem>,
}

/// Applies filter, order and pagination to an id-ordered snapshot.
#[must_use]
pub fn apply(items: Vec<TodoItem>, query: &ListQuery, order: ListOrder) -> TodoPage {
    let mut filtered = filter_by_status(items, query.status());
    sort_items(&mut filtered, order);
    let total = filtered.len();
    let items = paginate(filtered, query.offset(), query.limit());
    TodoPage {
        page: query.page(),
        limit: query.limit(),
        total,
        items,
    }
}

/// Keeps only items with exactly `status`; `None` keeps everything.
#[must_use]
pub fn filter_by_status(items: Vec<TodoItem>, status: Option<TodoStatus>) -> Vec<TodoItem> {
    match status {
        Some(wanted) => items
            .into_iter()
            .filter(|item| item.status() == wanted)
            .collect(),
        None => items,
    }
}

/// Sorts items in place. The sort is stable.
pub fn sort_items(items: &mut [TodoItem], order: ListOrder) {
    match order {
        ListOrder::Insertion => items.sort_by_key(TodoItem::id),
        ListOrder::CompletedLastByDueDate => items.sort_by_key(|item| {
            (
                item.status() == TodoStatus::Completed,
                item.due().is_none(),
                item.due(),
            )
        }),
    }
}

/// Returns the window `[offset, offset + limit)` clamped to the sequence.
#[must_use]
pub fn paginate(items: Vec<TodoItem>, offset: usize, limit: usize) -> Vec<TodoItem> {
    items.into_iter().skip(offset).take(limit).collect()
}
