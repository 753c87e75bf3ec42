//! Command implementations

pub mod check;
pub mod simple;
pub mod solutions;

pub use check::{CheckResult, check_word};
pub use simple::run_simple;
pub use solutions::{SolutionsResult, find_solutions};
