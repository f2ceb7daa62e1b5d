//! ==============================================================================
//! components/mod.rs - UI Components
//! ==============================================================================

mod header;
mod mappings;
mod mappings_table;
mod pagination;
mod shorten_form;
mod tabs;

pub use header::Header;
pub use mappings::MappingsTab;
pub use shorten_form::ShortenTab;
pub use tabs::{Tab, TabNav};
