//! API Routes
//!
//! Route handlers organized by functionality.

pub mod columns;
pub mod health;
pub mod page;
pub mod widgets;
