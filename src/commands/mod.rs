pub mod config;
mod generate;
mod search;

pub use generate::{GenerateOptions, generate, run};
pub use search::{NO_RESULTS, print_hits, search, search_with};
