//! Problem catalog adapters
//!
//! Implements [`ProblemCatalog`](leetbud_application::ProblemCatalog) for LeetCode.

pub mod leetcode;
pub mod protocol;
