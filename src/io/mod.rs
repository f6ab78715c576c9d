pub mod client;
pub mod worker;

pub use client::{AnalysisClient, FetchError};
pub use worker::{spawn_worker, IoCommand, IoResult};
