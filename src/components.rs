//! Reusable HTML components for page generation
//!
//! This module provides Maud component functions shared across page types
//! (index, post, standalone page, tags). Components handle specific UI
//! elements with consistent styling, eliminating duplication across page
//! generators.

pub mod footer;
pub mod layout;
pub mod nav;
pub mod post_list;
pub mod post_meta;
