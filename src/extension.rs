//! The file-extension index.
//!
//! This module maps lowercase file extensions to their owning
//! [`ResourceType`]. The index is fixed at compile time and derived from the
//! per-variant extension sets; extensions outside the closed set resolve to
//! [`ResourceType::None`].
//!
//! Most callers want [`ResourceType::from_file_extension`], which extracts
//! and normalizes the extension from a full path before consulting this
//! index.
//!
//! # Examples
//!
//! ```rust
//! use resource_kit::extension::lookup;
//! use resource_kit::ResourceType;
//!
//! assert_eq!(lookup(b"json"), ResourceType::Json);
//! assert_eq!(lookup(b"png"), ResourceType::Png);
//! assert_eq!(lookup(b"unknown"), ResourceType::None);
//! ```

use crate::ResourceType;

/// Looks up the resource type owning a file extension.
///
/// The matching is case-sensitive and expects lowercase extensions without
/// the leading dot; [`ResourceType::from_file_extension`] performs that
/// normalization. Unrecognized extensions return [`ResourceType::None`].
///
/// # Examples
///
/// ```rust
/// use resource_kit::extension::lookup;
/// use resource_kit::ResourceType;
///
/// // Web assets
/// assert_eq!(lookup(b"js"), ResourceType::Js);
/// assert_eq!(lookup(b"css"), ResourceType::Css);
/// assert_eq!(lookup(b"html"), ResourceType::Html);
/// assert_eq!(lookup(b"htm"), ResourceType::Html);
///
/// // Images
/// assert_eq!(lookup(b"ico"), ResourceType::Ico);
/// assert_eq!(lookup(b"jpg"), ResourceType::Jpeg);
/// assert_eq!(lookup(b"jpeg"), ResourceType::Jpeg);
/// assert_eq!(lookup(b"gif"), ResourceType::Gif);
///
/// // Data and text
/// assert_eq!(lookup(b"json"), ResourceType::Json);
/// assert_eq!(lookup(b"xml"), ResourceType::Xml);
/// assert_eq!(lookup(b"txt"), ResourceType::Text);
///
/// // Case-sensitive: callers lowercase first
/// assert_eq!(lookup(b"JSON"), ResourceType::None);
/// ```
pub const fn lookup(extension: &[u8]) -> ResourceType {
    match extension {
        b"js" => ResourceType::Js,
        b"json" => ResourceType::Json,
        b"css" => ResourceType::Css,
        b"ico" => ResourceType::Ico,
        b"png" => ResourceType::Png,
        b"gif" => ResourceType::Gif,
        b"jpeg" | b"jpg" => ResourceType::Jpeg,
        b"html" | b"htm" => ResourceType::Html,
        b"xml" => ResourceType::Xml,
        b"txt" => ResourceType::Text,
        _ => ResourceType::None,
    }
}
