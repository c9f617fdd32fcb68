pub mod benchmark_config;
pub mod benchmark_result;

pub use benchmark_config::*;
pub use benchmark_result::*;
