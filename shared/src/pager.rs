//! ==============================================================================
//! pager.rs - current page and load bookkeeping for the mappings table
//! ==============================================================================
//!
//! purpose:
//!     owns the current page of the mappings tab and decides which responses
//!     are allowed to reach the table.
//!
//! stale responses:
//!     every load gets a ticket with a sequence number. only the response for
//!     the most recently issued ticket is accepted; anything older is dropped,
//!     so clicking "2" then "3" quickly always ends on page 3 even if the
//!     page-2 response arrives last.
//!
//! ==============================================================================

use crate::error::ApiError;
use crate::mapping::MappingPage;
use crate::pagination::{pagination_view, PaginationView};
use crate::table::{table_body, TableBody, ERROR_LOADING, LOADING_MAPPINGS, SESSION_EXPIRED};

// ==============================================================================
// types
// ==============================================================================

/// handle for one in-flight page load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    seq: u64,
    page: u32,
}

/// what the mappings tab currently shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappingsView {
    Loading,
    Loaded(MappingPage),
    Failed(ApiError),
}

#[derive(Debug, Clone)]
pub struct MappingsPager {
    current_page: u32,
    page_size: u32,
    issued: u64,
    /// total from the last successful load; survives loading and failures
    total_count: Option<u64>,
}

impl LoadTicket {
    pub fn page(&self) -> u32 {
        self.page
    }
}

// ==============================================================================
// pager
// ==============================================================================

impl MappingsPager {
    pub fn new(page_size: u32) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
            issued: 0,
            total_count: None,
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// total url count as last reported by the server
    pub fn total_count(&self) -> Option<u64> {
        self.total_count
    }

    /// start loading `page`; it becomes the current page immediately
    pub fn begin_load(&mut self, page: u32) -> LoadTicket {
        self.issued += 1;
        self.current_page = page.max(1);
        LoadTicket {
            seq: self.issued,
            page: self.current_page,
        }
    }

    /// whether `ticket` belongs to the latest load
    pub fn is_latest(&self, ticket: LoadTicket) -> bool {
        ticket.seq == self.issued
    }

    /// settle a load. returns the new view, or `None` for a stale ticket.
    ///
    /// on success the current page follows the page the server reports,
    /// clamped into [1, total_pages].
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<MappingPage, ApiError>,
    ) -> Option<MappingsView> {
        if !self.is_latest(ticket) {
            return None;
        }

        let view = match result {
            Ok(mut page) => {
                page.page = page.page.clamp(1, page.total_pages.max(1));
                self.current_page = page.page;
                self.total_count = Some(page.total_count);
                MappingsView::Loaded(page)
            }
            Err(err) => MappingsView::Failed(err),
        };
        Some(view)
    }
}

// ==============================================================================
// view
// ==============================================================================

impl MappingsView {
    pub fn table_body(&self) -> TableBody {
        match self {
            MappingsView::Loading => TableBody::Placeholder(LOADING_MAPPINGS),
            MappingsView::Loaded(page) => table_body(&page.mappings),
            MappingsView::Failed(err) if err.is_unauthorized() => {
                TableBody::Placeholder(SESSION_EXPIRED)
            }
            MappingsView::Failed(_) => TableBody::Placeholder(ERROR_LOADING),
        }
    }

    /// pagination controls; none while loading or after a failure
    pub fn pagination(&self) -> Option<PaginationView> {
        match self {
            MappingsView::Loaded(page) => Some(pagination_view(page.page, page.total_pages)),
            MappingsView::Loading | MappingsView::Failed(_) => None,
        }
    }

    pub fn total_count(&self) -> Option<u64> {
        match self {
            MappingsView::Loaded(page) => Some(page.total_count),
            MappingsView::Loading | MappingsView::Failed(_) => None,
        }
    }
}

// ==============================================================================
// tests
// ==============================================================================
