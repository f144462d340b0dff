//! # Chat Gateway SDK
//!
//! A Rust client for the Chat Gateway.
//!
//! ## Features
//!
//! - Async-first design with full `tokio` support
//! - Chat exchanges that always yield something to render
//! - Markdown rendering and error formatting for display
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gateway_sdk::{render_markdown, Client};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), gateway_sdk::Error> {
//!     let client = Client::builder()
//!         .base_url("http://localhost:3000")
//!         .build()?;
//!
//!     let outcome = client.send_message("Hello, world!", None).await;
//!     if let Some(reply) = outcome.reply() {
//!         println!("{}", render_markdown(reply));
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod client;
mod config;
mod error;
mod render;
mod response;

pub use client::{Client, ClientBuilder};
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use render::{format_error_message, render_markdown};
pub use response::{ChatOutcome, FailureReply, HealthResponse};

// Re-export core types for convenience
pub use gateway_core::{ChatRequest, ErrorCode};
