//! Typed Rust client for the Akismet anti-spam HTTP API.
//!
//! The crate has a domain layer of strong types ([`Credentials`], [`Params`],
//! [`Comment`], [`SpamStatus`]), a transport layer for the wire format, a
//! pluggable [`http`] layer, and a small client layer, [`Checker`], that
//! verifies the API key once and then checks or reports content.
//!
//! ```rust,no_run
//! use akismet::{Checker, Comment, Credentials, SpamStatus};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), akismet::AkismetError> {
//!     let checker = Checker::new(Credentials::new("YOUR-API-KEY", "http://your-website.com")?);
//!     let comment = Comment {
//!         user_ip: "203.0.113.7".to_owned(),
//!         content: "Buy cheap watches".to_owned(),
//!         ..Default::default()
//!     };
//!     match checker.check(&comment.to_params()).await? {
//!         SpamStatus::DefiniteSpam => println!("discard"),
//!         SpamStatus::ProbableSpam => println!("hold for review"),
//!         _ => println!("publish"),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Requests can be intercepted by wrapping the transport in decorators:
//!
//! ```rust,no_run
//! use std::sync::{Arc, Mutex};
//!
//! use akismet::http::{header_map, with_dump, with_headers};
//! use akismet::{Checker, Credentials};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let checker = Checker::builder(Credentials::new("YOUR-API-KEY", "http://your-website.com")?)
//!     .user_agent("YourApp/1.0")
//!     .adapter(with_headers(header_map([("Cache-Control", "no-cache")])?))
//!     .adapter(with_dump(Arc::new(Mutex::new(std::io::stderr()))))
//!     .build()?;
//! # let _ = checker;
//! # Ok(())
//! # }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
pub mod http;
mod transport;

pub use client::{AkismetError, CallError, Checker, CheckerBuilder, KeyError, USER_AGENT};
pub use domain::{ApiKey, Comment, Credentials, Params, SiteUrl, SpamStatus, ValidationError};
pub use transport::{ApiEndpoint, Method};
