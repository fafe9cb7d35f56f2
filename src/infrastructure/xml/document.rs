use roxmltree::{Document, Node, ParsingOptions};

use crate::application::errors::ParseError;

/// Root element tag of every Live Set document
pub const PROJECT_ROOT_TAG: &str = "Ableton";

const UTF8_BOM: &str = "\u{feff}";

/// Parse decompressed bytes into a navigable tree.
///
/// DTDs are rejected, so entity declarations (external or recursive) never expand.
pub fn parse_document(bytes: &[u8]) -> Result<Document<'_>, ParseError> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| ParseError::MalformedXml(format!("document is not valid UTF-8: {}", e)))?;
    let text = text.strip_prefix(UTF8_BOM).unwrap_or(text);

    let options = ParsingOptions {
        allow_dtd: false,
        ..ParsingOptions::default()
    };

    Document::parse_with_options(text, options).map_err(|e| ParseError::MalformedXml(e.to_string()))
}

/// Return the root element if it is a Live Set root
pub fn ensure_project_root<'a, 'input>(
    doc: &'a Document<'input>,
) -> Result<Node<'a, 'input>, ParseError> {
    let root = doc.root_element();
    let tag = root.tag_name().name();

    if tag != PROJECT_ROOT_TAG {
        return Err(ParseError::InvalidFormat(format!(
            "Expected root element {}, found {}",
            PROJECT_ROOT_TAG, tag
        )));
    }

    Ok(root)
}
