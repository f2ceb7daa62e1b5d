//! ==============================================================================
//! lib.rs - shared types and view logic for the link admin dashboard
//! ==============================================================================
//!
//! purpose:
//!     everything the dashboard needs that does not touch the browser:
//!     wire types for the mappings and shorten apis, the page-window
//!     algorithm, table view-models, the pager that owns the current page,
//!     error types and user-facing notification texts.
//!
//! relationships:
//!     - used by: dashboard (api client, mappings tab, shorten tab)
//!     - talks to: nothing; all functions here are pure or plain state
//!
//! layout:
//!     - mapping     MappingRecord / MappingPage as served by /mappings-api
//!     - table       rows and placeholder rows for the mappings table
//!     - pagination  previous / page window / next controls
//!     - pager       current page + stale response guard
//!     - shorten     form encoding and ShortenResult
//!     - response    status + body -> typed result
//!     - error       ApiError / ClipboardError / ConfigError
//!     - notice      notification texts shown to the user
//!     - config      endpoints and page size
//!
//! ==============================================================================

pub mod config;
pub mod error;
pub mod mapping;
pub mod notice;
pub mod pager;
pub mod pagination;
pub mod response;
pub mod shorten;
pub mod table;

pub use config::DashboardConfig;
pub use error::{ApiError, ClipboardError, ConfigError};
pub use mapping::{MappingPage, MappingRecord};
pub use notice::Notice;
pub use pager::{LoadTicket, MappingsPager, MappingsView};
pub use pagination::{pagination_view, NavControl, PageControl, PaginationView};
pub use shorten::{ShortenForm, ShortenResult};
pub use table::{table_body, MappingRow, TableBody};
