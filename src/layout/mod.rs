//! Envdash Layout
//!
//! Composition of the page: the `Dashboard` holds one controller per
//! widget, and `Page` renders them into the two-column HTML shell. Neither
//! owns chart logic.

mod dashboard;
mod page;

pub use dashboard::Dashboard;
pub use page::{DropdownSpec, Page, SectionSpec, HEADING, PAGE_TITLE};
