//! Renderers for run history views.
//!
//! The core hands over plain data ([`OverviewRow`](crate::models::OverviewRow)s,
//! a [`ResolvedRun`](crate::resolver::ResolvedRun), a
//! [`NavigationList`](crate::models::NavigationList)); this module turns them
//! into terminal tables or JSON. Formatting primitives come from a
//! [`ViewHelpers`] implementation passed in by the caller.

pub mod helpers;
pub mod json;
pub mod table;

pub use helpers::{StandardHelpers, ViewHelpers};
