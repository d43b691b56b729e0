#![doc = include_str!("../README.md")]

mod alloc;
mod digest;
mod drain;
mod error;
mod service;
mod sleep;
mod stats;
mod store;

pub use alloc::IdAllocator;
pub use digest::digest;
pub use drain::DrainCoordinator;
pub use error::{Error, Result};
pub use service::HashService;
pub use sleep::{FixedSleeper, Sleeper};
pub use stats::{RequestStats, StatsSnapshot};
pub use store::DigestStore;
