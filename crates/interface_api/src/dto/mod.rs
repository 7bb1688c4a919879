//! Request and response bodies
//!
//! Submissions travel as the domain's own serde types; only the shapes the
//! domain has no type for live here.

pub mod incorporation;
