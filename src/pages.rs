//! Page generation modules for different view types
//!
//! This module organizes HTML page generators by page type (home index,
//! post, standalone page, tags). Each page module handles its specific view
//! logic and utilizes shared components from the components module.

pub mod index;
pub mod page;
pub mod post;
pub mod tags;
