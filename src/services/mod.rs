pub mod crossing_search;
pub mod crossing_solver;
pub mod report;

pub use crossing_search::*;
pub use crossing_solver::*;
pub use report::*;
