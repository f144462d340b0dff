//! # Gateway Providers
//!
//! Generative provider implementations for the Chat Gateway.
//!
//! - Google AI Studio (Gemini) via the `generateContent` REST endpoint

#![forbid(unsafe_code)]
#![warn(missing_docs)]

#[cfg(feature = "google")]
pub mod google;

#[cfg(feature = "google")]
pub use google::{GoogleConfig, GoogleProvider};
