// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pagination walker.
//!
//! The store returns result sets one page at a time with an optional `next`
//! cursor. The revert engine and most read paths need complete result sets,
//! so reads run through [`fetch_all`], which merges every page into one
//! logical [`Page`].

use serde::{Deserialize, Serialize};

/// One page of a store result set, or a fully merged result set
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub items: Vec<serde_json::Value>,
    #[serde(default)]
    pub size: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

/// Fetch every page of a result set and merge it into one.
///
/// `fetch` is called with `None` for the first page and with the current
/// page's `next` cursor afterwards. The walk stops when a page has no `next`
/// cursor, when the current page's `size` is zero, or when a follow-up page
/// reports a non-positive `size` (that page is not merged).
///
/// Termination relies on the store's cursor chain ending; a cursor loop on
/// the store side would walk forever.
pub fn fetch_all<E, F>(mut fetch: F) -> Result<Page, E>
where
    F: FnMut(Option<&str>) -> Result<Page, E>,
{
    let first = fetch(None)?;
    let mut merged = first.clone();
    let mut current = first;

    while let Some(url) = current.next.clone() {
        if current.size == 0 {
            break;
        }
        let page = fetch(Some(&url))?;
        if page.size <= 0 {
            break;
        }
        merged.items.extend(page.items.iter().cloned());
        merged.size += page.size;
        current = page;
    }

    Ok(merged)
}

#[cfg(test)]
#[path = "pages_tests.rs"]
mod tests;
