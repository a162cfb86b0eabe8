//! Problem domain.
//!
//! - [`entities::ProblemRecord`]: a validated practice problem
//! - [`entities::Candidate`]: a ranked search hit
//! - [`ranking`]: matching and tie-break ordering for searches
//! - [`markup::strip_markup`]: description markup removal

pub mod entities;
pub mod markup;
pub mod query;
pub mod ranking;
