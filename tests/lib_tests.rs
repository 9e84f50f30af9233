use resource_kit::{extension, HeaderValue, ResourceType};

#[test]
fn test_extension_round_trip() {
    // Every extension a variant owns must classify back to that variant,
    // with no cross-mapping between variants.
    for variant in ResourceType::ALL {
        for ext in variant.extensions() {
            let name = format!("file.{ext}");
            assert_eq!(ResourceType::from_file_extension(name.as_str()), variant);
            assert_eq!(extension::lookup(ext.as_bytes()), variant);
        }
    }

    // The sentinel owns no extensions, so the index can never produce it
    // from a real entry.
    assert!(ResourceType::None.extensions().is_empty());
}

#[test]
fn test_extension_normalization() {
    // Case-insensitive
    assert_eq!(
        ResourceType::from_file_extension("INDEX.HTML"),
        ResourceType::Html
    );
    assert_eq!(
        ResourceType::from_file_extension("photo.JpEg"),
        ResourceType::Jpeg
    );

    // Whitespace around the extension is trimmed
    assert_eq!(
        ResourceType::from_file_extension("notes.txt "),
        ResourceType::Text
    );
    assert_eq!(
        ResourceType::from_file_extension("data. json"),
        ResourceType::Json
    );

    // Only the segment after the last dot counts
    assert_eq!(
        ResourceType::from_file_extension("a.b.JSON"),
        ResourceType::Json
    );
    assert_eq!(
        ResourceType::from_file_extension("archive.tar.gz"),
        ResourceType::None
    );
}

#[test]
fn test_extension_absent_or_malformed() {
    assert_eq!(ResourceType::from_file_extension(None), ResourceType::None);
    assert_eq!(
        ResourceType::from_file_extension("noext"),
        ResourceType::None
    );
    assert_eq!(
        ResourceType::from_file_extension("trailing."),
        ResourceType::None
    );
    assert_eq!(ResourceType::from_file_extension(""), ResourceType::None);
    assert_eq!(ResourceType::from_file_extension("."), ResourceType::None);
    assert_eq!(
        ResourceType::from_file_extension("file.xyz"),
        ResourceType::None
    );
}

#[test]
fn test_extension_lookup_is_exact() {
    // The raw index is case-sensitive; normalization happens in
    // from_file_extension.
    assert_eq!(extension::lookup(b"json"), ResourceType::Json);
    assert_eq!(extension::lookup(b"JSON"), ResourceType::None);
    assert_eq!(extension::lookup(b"htm"), ResourceType::Html);
    assert_eq!(extension::lookup(b""), ResourceType::None);
    assert_eq!(extension::lookup(b"exe"), ResourceType::None);
}

#[test]
fn test_content_type_classification() {
    // Substring match tolerates parameters and structured suffixes
    assert_eq!(
        ResourceType::from_content_type("application/json; charset=utf-8"),
        ResourceType::Json
    );
    assert_eq!(
        ResourceType::from_content_type("application/hal+json"),
        ResourceType::Json
    );
    assert_eq!(
        ResourceType::from_content_type("Text/HTML; charset=ISO-8859-1"),
        ResourceType::Html
    );
    assert_eq!(
        ResourceType::from_content_type("image/x-icon"),
        ResourceType::Ico
    );
    assert_eq!(
        ResourceType::from_content_type("text/plain"),
        ResourceType::Text
    );

    // Matcher-driven, not prefix-driven: "text/javascript" is Js even
    // though the string starts with "text".
    assert_eq!(
        ResourceType::from_content_type("text/javascript"),
        ResourceType::Js
    );

    // Unmatched and absent inputs are a normal None outcome
    assert_eq!(
        ResourceType::from_content_type("multipart/form-data"),
        ResourceType::None
    );
    assert_eq!(ResourceType::from_content_type(""), ResourceType::None);
    assert_eq!(ResourceType::from_content_type(None), ResourceType::None);
}

#[test]
fn test_content_type_round_trip() {
    // Each canonical content type classifies back to its own variant.
    for variant in ResourceType::ALL {
        if let Some(content_type) = variant.content_type() {
            assert_eq!(ResourceType::from_content_type(content_type), variant);
        }
    }
    assert_eq!(ResourceType::None.content_type(), None);
}

#[test]
fn test_content_type_declaration_order() {
    assert_eq!(
        ResourceType::ALL,
        [
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
        ]
    );

    // A string containing both "json" and "xml" resolves to Json because
    // Json is declared first.
    assert_eq!(
        ResourceType::from_content_type("application/json+xml"),
        ResourceType::Json
    );
}

#[cfg(feature = "json")]
#[test]
fn test_value_classification() {
    use serde_json::json;

    assert_eq!(
        ResourceType::from_value(&json!([1, 2, 3])),
        ResourceType::Json
    );
    assert_eq!(
        ResourceType::from_value(&json!({"a": 1})),
        ResourceType::Json
    );
    assert_eq!(ResourceType::from_value(&json!({})), ResourceType::Json);
    assert_eq!(ResourceType::from_value(&json!("hello")), ResourceType::Text);
    assert_eq!(ResourceType::from_value(&json!(42)), ResourceType::None);
    assert_eq!(ResourceType::from_value(&json!(1.5)), ResourceType::None);
    assert_eq!(ResourceType::from_value(&json!(true)), ResourceType::None);
    assert_eq!(ResourceType::from_value(&json!(null)), ResourceType::None);
}

#[test]
fn test_predicates() {
    let binary = [
        ResourceType::Ico,
        ResourceType::Png,
        ResourceType::Gif,
        ResourceType::Jpeg,
    ];

    for variant in ResourceType::ALL {
        assert_eq!(variant.is_binary(), binary.contains(&variant));
        assert_eq!(variant.is_static(), variant != ResourceType::None);
        assert_eq!(variant.is_html(), variant == ResourceType::Html);
        assert_eq!(variant.is_json(), variant == ResourceType::Json);
    }
}

#[test]
fn test_header_value_interop() {
    let value = HeaderValue::from_static("application/json; charset=utf-8");
    assert_eq!(
        ResourceType::from_header_value(Some(&value)),
        ResourceType::Json
    );
    assert_eq!(ResourceType::from_header_value(None), ResourceType::None);

    // Opaque header bytes cannot be classified
    let opaque = HeaderValue::from_bytes(b"\xfftext/html").unwrap();
    assert_eq!(
        ResourceType::from_header_value(Some(&opaque)),
        ResourceType::None
    );

    assert_eq!(
        ResourceType::Png.header_value().unwrap(),
        HeaderValue::from_static("image/png")
    );
    assert_eq!(ResourceType::None.header_value(), None);
}

#[cfg(feature = "mime")]
#[test]
fn test_mime_interop() {
    let mime = ResourceType::Json.mime().unwrap();
    assert_eq!(mime.essence_str(), "application/json");

    let mime = ResourceType::Ico.mime().unwrap();
    assert_eq!(mime.essence_str(), "image/x-icon");

    // Every classifiable variant has a parseable canonical content type
    for variant in ResourceType::ALL {
        assert_eq!(variant.mime().is_some(), variant.is_static());
    }
}

#[cfg(feature = "std")]
#[test]
fn test_path_classification() {
    use std::path::Path;

    assert_eq!(
        ResourceType::from_path(Path::new("static/css/site.css")),
        ResourceType::Css
    );
    assert_eq!(
        ResourceType::from_path("static/img/favicon.ico"),
        ResourceType::Ico
    );
    assert_eq!(ResourceType::from_path("README"), ResourceType::None);
}

#[test]
fn test_default_is_sentinel() {
    assert_eq!(ResourceType::default(), ResourceType::None);
    assert!(!ResourceType::default().is_static());
}
