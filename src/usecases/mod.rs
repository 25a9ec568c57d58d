//! Application use cases. Orchestrate domain logic via ports.

pub mod fan_out;
pub mod fetcher;

pub use fan_out::fan_out;
pub use fetcher::ActionFetcher;
