#![deny(unsafe_code)]
#![no_std]
#![warn(missing_docs, missing_debug_implementations)]
//! Resource type classification for HTTP services.
//!
//! This crate classifies a resource into a semantic [`ResourceType`] (JSON,
//! HTML, PNG, plain text, ...) from one of three independent signals:
//!
//! - **File-path extension** - for picking a `Content-Type` when serving
//!   static files
//! - **Content-type string** - for recognizing what a request or response
//!   carries, tolerating parameters like `charset`
//! - **Value shape** (with the `json` feature) - for deciding how to encode
//!   a dynamic value into a response body
//!
//! The type set is closed and small by design. This is not a MIME-sniffing
//! engine (resource bytes are never inspected) and not a full MIME registry;
//! it covers the formats an HTTP serving layer actually branches on, and
//! everything else classifies as [`ResourceType::None`].
//!
//! Classification never fails: absent, empty, and malformed inputs all map
//! to [`ResourceType::None`] rather than an error.
//!
//! # Optional Features
//!
//! - `json` - Value-shape classification via serde_json (enabled by default)
//! - `mime` - Canonical content types as [`mime::Mime`] values (enabled by default)
//! - `std` - Standard library support, adds `std::path::Path` conveniences (enabled by default)
//!
//! # Examples
//!
//! ## Serving a static file
//!
//! ```rust
//! use resource_kit::ResourceType;
//!
//! let resource = ResourceType::from_file_extension("assets/app/index.html");
//! assert_eq!(resource, ResourceType::Html);
//! assert!(resource.is_html());
//! assert_eq!(resource.content_type(), Some("text/html"));
//! ```
//!
//! ## Recognizing a content-type header
//!
//! ```rust
//! use resource_kit::ResourceType;
//!
//! let resource = ResourceType::from_content_type("application/json; charset=utf-8");
//! assert_eq!(resource, ResourceType::Json);
//!
//! // Unknown content types are a normal outcome, not an error.
//! let resource = ResourceType::from_content_type("multipart/form-data");
//! assert_eq!(resource, ResourceType::None);
//! ```
//!
//! ## Choosing an encoding for a dynamic value
//!
//! ```rust
//! # #[cfg(feature = "json")]
//! # {
//! use resource_kit::ResourceType;
//! use serde_json::json;
//!
//! assert_eq!(ResourceType::from_value(&json!({"a": 1})), ResourceType::Json);
//! assert_eq!(ResourceType::from_value(&json!("hello")), ResourceType::Text);
//! assert_eq!(ResourceType::from_value(&json!(42)), ResourceType::None);
//! # }
//! ```
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod extension;

mod resource_type;
pub use resource_type::ResourceType;

#[cfg(feature = "mime")]
pub use mime;

pub use http::{header, HeaderValue};
