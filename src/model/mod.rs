pub mod task;
pub mod filter;
pub mod config;

pub use task::*;
pub use filter::*;
pub use config::*;
