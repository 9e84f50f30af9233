//! The resource type enumeration and its classification entry points.
//!
//! [`ResourceType`] is a closed set of semantic resource types, each carrying
//! static classification data:
//!
//! - A **canonical content type** suitable for a `Content-Type` header
//! - **Matchers** - lowercase substrings used to loosely recognize
//!   content-type strings
//! - **Extensions** - the lowercase file extensions that map to it
//!
//! Three independent signals classify into this set: a file-path extension
//! ([`ResourceType::from_file_extension`]), a content-type string
//! ([`ResourceType::from_content_type`]), or a value's shape
//! ([`ResourceType::from_value`]). All three are total: any input that does
//! not match classifies as [`ResourceType::None`].

use http::HeaderValue;
#[cfg(feature = "mime")]
use mime::Mime;

use crate::extension;

/// A semantic resource type, as used by an HTTP serving layer.
///
/// The set is closed: it enumerates the formats such a layer branches on
/// when picking a response content type or deciding whether a body is text
/// or binary. [`ResourceType::None`] is the sentinel for "could not
/// classify" and is the default result of every classification function -
/// it is a normal outcome, not an error.
///
/// Variant order is part of the contract: [`ResourceType::from_content_type`]
/// scans variants in declaration order, which deterministically resolves
/// content-type strings whose text could match several variants.
///
/// # Examples
///
/// ```rust
/// use resource_kit::ResourceType;
///
/// assert_eq!(ResourceType::from_file_extension("report.JSON"), ResourceType::Json);
/// assert_eq!(ResourceType::from_content_type("text/html; charset=utf-8"), ResourceType::Html);
///
/// let png = ResourceType::Png;
/// assert!(png.is_binary());
/// assert_eq!(png.content_type(), Some("image/png"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceType {
    /// JavaScript source, `text/javascript`.
    Js,
    /// JSON, `application/json`.
    Json,
    /// CSS stylesheets, `text/css`.
    Css,
    /// Icon images, `image/x-icon`.
    Ico,
    /// PNG images, `image/png`.
    Png,
    /// GIF images, `image/gif`.
    Gif,
    /// JPEG images, `image/jpeg`.
    Jpeg,
    /// HTML documents, `text/html`.
    Html,
    /// XML documents, `application/xml`.
    Xml,
    /// Plain text, `text/plain`.
    Text,
    /// Could not classify. Carries no content type, matchers, or extensions.
    None,
}

impl ResourceType {
    /// Every variant, in declaration order.
    ///
    /// This is the iteration source for [`ResourceType::from_content_type`];
    /// the order is a tie-break contract and must not be rearranged.
    pub const ALL: [ResourceType; 11] = [
        ResourceType::Js,
        ResourceType::Json,
        ResourceType::Css,
        ResourceType::Ico,
        ResourceType::Png,
        ResourceType::Gif,
        ResourceType::Jpeg,
        ResourceType::Html,
        ResourceType::Xml,
        ResourceType::Text,
        ResourceType::None,
    ];

    /// Returns the canonical content type, or `None` for
    /// [`ResourceType::None`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resource_kit::ResourceType;
    ///
    /// assert_eq!(ResourceType::Json.content_type(), Some("application/json"));
    /// assert_eq!(ResourceType::None.content_type(), None);
    /// ```
    pub const fn content_type(self) -> Option<&'static str> {
        match self {
            Self::Js => Some("text/javascript"),
            Self::Json => Some("application/json"),
            Self::Css => Some("text/css"),
            Self::Ico => Some("image/x-icon"),
            Self::Png => Some("image/png"),
            Self::Gif => Some("image/gif"),
            Self::Jpeg => Some("image/jpeg"),
            Self::Html => Some("text/html"),
            Self::Xml => Some("application/xml"),
            Self::Text => Some("text/plain"),
            Self::None => None,
        }
    }

    /// Returns the lowercase substrings that recognize this variant in a
    /// content-type string.
    pub const fn content_matchers(self) -> &'static [&'static str] {
        match self {
            Self::Js => &["javascript"],
            Self::Json => &["json"],
            Self::Css => &["css"],
            Self::Ico => &["x-icon"],
            Self::Png => &["png"],
            Self::Gif => &["gif"],
            Self::Jpeg => &["jpeg", "jpg"],
            Self::Html => &["html"],
            Self::Xml => &["xml"],
            Self::Text => &["plain"],
            Self::None => &[],
        }
    }

    /// Returns the lowercase file extensions (without the leading dot) that
    /// map to this variant.
    pub const fn extensions(self) -> &'static [&'static str] {
        match self {
            Self::Js => &["js"],
            Self::Json => &["json"],
            Self::Css => &["css"],
            Self::Ico => &["ico"],
            Self::Png => &["png"],
            Self::Gif => &["gif"],
            Self::Jpeg => &["jpeg", "jpg"],
            Self::Html => &["html", "htm"],
            Self::Xml => &["xml"],
            Self::Text => &["txt"],
            Self::None => &[],
        }
    }

    /// Classifies a resource by the extension of its file path.
    ///
    /// The extension is the segment after the last `.` in the path,
    /// whitespace-trimmed and lowercased before lookup. A missing path, a
    /// path without a `.`, or a path ending in `.` classifies as
    /// [`ResourceType::None`]; no input is an error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resource_kit::ResourceType;
    ///
    /// assert_eq!(ResourceType::from_file_extension("app/main.js"), ResourceType::Js);
    /// assert_eq!(ResourceType::from_file_extension("archive.tar.GZ"), ResourceType::None);
    /// assert_eq!(ResourceType::from_file_extension("a.b.JSON"), ResourceType::Json);
    ///
    /// assert_eq!(ResourceType::from_file_extension(None), ResourceType::None);
    /// assert_eq!(ResourceType::from_file_extension("noext"), ResourceType::None);
    /// assert_eq!(ResourceType::from_file_extension("trailing."), ResourceType::None);
    /// ```
    pub fn from_file_extension<'a>(path: impl Into<Option<&'a str>>) -> Self {
        let Some(path) = path.into() else {
            return Self::None;
        };
        let Some(pos) = path.rfind('.') else {
            return Self::None;
        };
        if pos + 1 == path.len() {
            return Self::None;
        }
        let ext = path[pos + 1..].trim().to_lowercase();
        extension::lookup(ext.as_bytes())
    }

    /// Classifies a resource by a content-type string.
    ///
    /// The input is lowercased and each variant's matchers are tested for a
    /// substring match, in declaration order; the first variant with a
    /// matching substring wins. Substring matching tolerates parameters and
    /// vendor prefixes (`application/json; charset=utf-8`,
    /// `application/hal+json`), and the declaration order resolves inputs
    /// whose text contains several variants' matchers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resource_kit::ResourceType;
    ///
    /// assert_eq!(
    ///     ResourceType::from_content_type("application/json; charset=utf-8"),
    ///     ResourceType::Json,
    /// );
    ///
    /// // Matchers, not prefixes: "text/javascript" is Js, not Text.
    /// assert_eq!(ResourceType::from_content_type("text/javascript"), ResourceType::Js);
    ///
    /// assert_eq!(ResourceType::from_content_type("multipart/form-data"), ResourceType::None);
    /// assert_eq!(ResourceType::from_content_type(None), ResourceType::None);
    /// ```
    pub fn from_content_type<'a>(content_type: impl Into<Option<&'a str>>) -> Self {
        let Some(content_type) = content_type.into() else {
            return Self::None;
        };
        let content_type = content_type.to_lowercase();
        for variant in Self::ALL {
            for matcher in variant.content_matchers() {
                if content_type.contains(matcher) {
                    return variant;
                }
            }
        }
        Self::None
    }

    /// Classifies a resource by a `Content-Type` header value.
    ///
    /// Header values containing opaque (non-ASCII) bytes classify as
    /// [`ResourceType::None`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resource_kit::{HeaderValue, ResourceType};
    ///
    /// let value = HeaderValue::from_static("image/png");
    /// assert_eq!(ResourceType::from_header_value(Some(&value)), ResourceType::Png);
    /// assert_eq!(ResourceType::from_header_value(None), ResourceType::None);
    /// ```
    pub fn from_header_value(value: Option<&HeaderValue>) -> Self {
        Self::from_content_type(value.and_then(|value| value.to_str().ok()))
    }

    /// Classifies a value by its shape: arrays and objects are
    /// [`ResourceType::Json`], strings are [`ResourceType::Text`], and
    /// everything else (numbers, booleans, null) is [`ResourceType::None`].
    ///
    /// Only the shape is considered; the value's contents are never parsed
    /// or inspected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resource_kit::ResourceType;
    /// use serde_json::json;
    ///
    /// assert_eq!(ResourceType::from_value(&json!([1, 2, 3])), ResourceType::Json);
    /// assert_eq!(ResourceType::from_value(&json!({"a": 1})), ResourceType::Json);
    /// assert_eq!(ResourceType::from_value(&json!("hello")), ResourceType::Text);
    /// assert_eq!(ResourceType::from_value(&json!(42)), ResourceType::None);
    /// ```
    #[cfg(feature = "json")]
    pub fn from_value(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => Self::Json,
            serde_json::Value::String(_) => Self::Text,
            _ => Self::None,
        }
    }

    /// Classifies a resource by a filesystem path.
    ///
    /// Paths that are not valid UTF-8 classify as [`ResourceType::None`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resource_kit::ResourceType;
    /// use std::path::Path;
    ///
    /// assert_eq!(ResourceType::from_path(Path::new("static/logo.png")), ResourceType::Png);
    /// assert_eq!(ResourceType::from_path("README"), ResourceType::None);
    /// ```
    #[cfg(feature = "std")]
    pub fn from_path(path: impl AsRef<std::path::Path>) -> Self {
        Self::from_file_extension(path.as_ref().to_str())
    }

    /// Returns `true` if classification succeeded, i.e. this is any variant
    /// except [`ResourceType::None`].
    pub const fn is_static(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Returns `true` only for [`ResourceType::Html`].
    pub const fn is_html(self) -> bool {
        matches!(self, Self::Html)
    }

    /// Returns `true` only for [`ResourceType::Json`].
    pub const fn is_json(self) -> bool {
        matches!(self, Self::Json)
    }

    /// Returns `true` for the raster and icon image formats
    /// ([`ResourceType::Ico`], [`ResourceType::Png`], [`ResourceType::Gif`],
    /// [`ResourceType::Jpeg`]), whose bodies must be handled as binary
    /// rather than text.
    pub const fn is_binary(self) -> bool {
        matches!(self, Self::Ico | Self::Png | Self::Gif | Self::Jpeg)
    }

    /// Returns the canonical content type as a header value, or `None` for
    /// [`ResourceType::None`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resource_kit::ResourceType;
    ///
    /// let value = ResourceType::Css.header_value().unwrap();
    /// assert_eq!(value, "text/css");
    /// ```
    pub fn header_value(self) -> Option<HeaderValue> {
        self.content_type().map(HeaderValue::from_static)
    }

    /// Returns the canonical content type as a parsed [`Mime`], or `None`
    /// for [`ResourceType::None`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resource_kit::ResourceType;
    ///
    /// let mime = ResourceType::Html.mime().unwrap();
    /// assert_eq!(mime.type_(), mime::TEXT);
    /// assert_eq!(mime.subtype(), mime::HTML);
    /// ```
    #[cfg(feature = "mime")]
    pub fn mime(self) -> Option<Mime> {
        self.content_type()
            .map(|value| value.parse().expect("canonical content types are valid MIME"))
    }
}

/// The default resource type is the [`ResourceType::None`] sentinel.
impl Default for ResourceType {
    fn default() -> Self {
        Self::None
    }
}
