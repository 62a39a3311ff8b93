//! Client library for chefday.
//!
//! Provides the JSON fetcher, the two-hop birthday pipeline built on top of
//! it, and a small adapter that turns a lookup into a [`ViewState`].
//!
//! # Example
//!
//! ```rust,no_run
//! use chefday_client::{BirthdayPipeline, ClientConfig};
//! use chefday_core::RecipeId;
//!
//! async fn lookup() -> Result<(), chefday_core::DomainError> {
//!     let pipeline = BirthdayPipeline::from_config(&ClientConfig::default());
//!     let birthday = pipeline.get_chef_birthday(RecipeId::new(1)).await?;
//!     println!("{}", birthday);
//!     Ok(())
//! }
//! ```
//!
//! [`ViewState`]: chefday_core::ViewState

pub mod adapter;
pub mod config;
pub mod error;
pub mod http;
pub mod pipeline;

#[cfg(test)]
mod testing;

pub use adapter::BirthdayView;
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::FetchError;
pub use http::{HttpFetcher, JsonFetcher};
pub use pipeline::BirthdayPipeline;
