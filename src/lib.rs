pub mod cli;
pub mod error;
pub mod git;
pub mod graph;
pub mod model;
pub mod scan;
pub mod stats;
pub mod store;
