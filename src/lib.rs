//! Oppsum - YouTube captions and AI summaries
//!
//! Search YouTube videos, read a video's captions as a normalized timeline,
//! and generate structured AI summaries of them.
//!
//! The name comes from the Norwegian "oppsummere", to sum up.
//!
//! # Overview
//!
//! Oppsum lets you:
//! - Search YouTube and page through results
//! - Fetch a video's captions, normalized to seconds and sorted by start time
//! - Fall back to a secondary caption language when the default has none
//! - Generate an AI summary (overview, key points, timestamps) of the captions
//! - Serve all of the above as a small HTTP API
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - `config` - Configuration and environment-provided API keys
//! - `youtube` - Video search through the YouTube Data API
//! - `captions` - Caption fetching, normalization, and lookups
//! - `summary` - AI summarization of caption text
//! - `server` - HTTP API routes and validation
//! - `player` - Periodic caption sampling for playback
//! - `session` - Session-scoped cache of the last search
//!
//! # Example
//!
//! ```rust,no_run
//! use oppsum::captions::{CaptionFetcher, InnerTubeProvider};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let fetcher = CaptionFetcher::new(Arc::new(InnerTubeProvider::new()), "ko", "en");
//!
//!     let result = fetcher.fetch("dQw4w9WgXcQ", "ko").await?;
//!     if result.available {
//!         println!("{} captions in {}", result.captions.len(), result.language);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod captions;
pub mod cli;
pub mod config;
pub mod error;
pub mod openai;
pub mod player;
pub mod server;
pub mod session;
pub mod summary;
pub mod youtube;

pub use error::{OppsumError, Result};
