//! # listwise
//!
//! Asynchronous client for the ListWise "deep clean" email-validation HTTP
//! API: submit an address, get back a structured verdict saying whether it
//! is deliverable, hosted by a free provider, typo-corrected, or otherwise
//! classified.
//!
//! ## Behavior to know about
//! - A [`EmailStatus::Processing`] result means the service has not finished
//!   checking the address; it is a normal result, not an error. Poll by
//!   calling [`DeepCleanClient::deep_clean`] again after a few minutes — the
//!   client never retries on its own.
//! - ListWise reports a syntactically invalid input address through
//!   `error_code` 1 rather than a status; the client converts that into a
//!   regular [`EmailResult`] with [`EmailStatus::Invalid`].
//! - Every other `error_code` is an unrecoverable [`ClientError::Api`] for
//!   that input.
//!
//! ## Out of scope
//! Not a mail sender or a local syntax checker. The crate only wraps the
//! remote service and inherits its availability and rate limits.
//!
//! ## Example
//! ```no_run
//! use listwise::{ConfigBuilder, DeepCleanClient, EmailStatus};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), listwise::ClientError> {
//!     let config = ConfigBuilder::new().api_key("my-api-key").build()?;
//!     let client = DeepCleanClient::new(config)?;
//!
//!     let result = client.deep_clean("user@example.com").await?;
//!     if result.status == EmailStatus::Processing {
//!         // Check back in 5-10 minutes.
//!         return Ok(());
//!     }
//!     println!("{}: {}", result.email, result.status.description());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod core;

pub use crate::client::transport::{HttpTransport, Transport};
pub use crate::client::DeepCleanClient;
pub use crate::core::config::{Config, ConfigBuilder, ConfigFile, DEFAULT_API_BASE_URL};
pub use crate::core::error::{ClientError, Result};
pub use crate::core::models::{EmailResult, EmailStatus};
