use serde_json::Value;

use crate::error::Error;
use crate::model::Page;

/// Which layout an export document used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportShape {
    /// `{ "pages": [...] }`
    PagesEnvelope,
    /// An object whose values are pages.
    PageMap,
    /// A bare array of pages.
    PageList,
}

impl ExportShape {
    pub fn describe(&self) -> &'static str {
        match self {
            ExportShape::PagesEnvelope => "object with pages",
            ExportShape::PageMap => "map of pages",
            ExportShape::PageList => "page list",
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Decode a parsed export document into its pages.
///
/// Accepts a `pages` envelope, a bare array, or an object whose values are
/// pages. Pages of a map come out in the order their keys appear in the
/// document.
pub fn pages_from_document(document: Value) -> Result<(ExportShape, Vec<Page>), Error> {
    let (shape, values) = match document {
        Value::Object(mut object) => match object.remove("pages") {
            Some(pages) => (ExportShape::PagesEnvelope, pages),
            None => (
                ExportShape::PageMap,
                Value::Array(object.into_iter().map(|(_, page)| page).collect()),
            ),
        },
        Value::Array(items) => (ExportShape::PageList, Value::Array(items)),
        other => return Err(Error::UnrecognizedShape(json_kind(&other))),
    };

    let pages: Vec<Page> = serde_json::from_value(values)?;
    Ok((shape, pages))
}

/// Encode merged pages as an import-ready document: always a bare array.
pub fn pages_to_document(pages: &[Page]) -> Result<Value, Error> {
    Ok(serde_json::to_value(pages)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn titles(pages: &[Page]) -> Vec<&str> {
        pages.iter().map(|p| p.title.as_str()).collect()
    }

    // ============================================================================
    // pages_from_document tests
    // ============================================================================

    #[test]
    fn test_pages_envelope() {
        let document = json!({
            "pages": [
                { "title": "One", "children": [{ "string": "a" }] },
                { "title": "Two" }
            ],
            "version": 3
        });

        let (shape, pages) = pages_from_document(document).unwrap();

        assert_eq!(shape, ExportShape::PagesEnvelope);
        assert_eq!(titles(&pages), vec!["One", "Two"]);
        assert_eq!(pages[0].children[0].text, "a");
        assert!(pages[1].children.is_empty());
    }

    #[test]
    fn test_page_map_keeps_document_order() {
        let document: Value = serde_json::from_str(
            r#"{ "z": { "title": "Zed" }, "a": { "title": "Ay" }, "m": { "title": "Em" } }"#,
        )
        .unwrap();

        let (shape, pages) = pages_from_document(document).unwrap();

        assert_eq!(shape, ExportShape::PageMap);
        assert_eq!(titles(&pages), vec!["Zed", "Ay", "Em"]);
    }

    #[test]
    fn test_page_list() {
        let document = json!([{ "title": "Only", "uid": "abc" }]);

        let (shape, pages) = pages_from_document(document).unwrap();

        assert_eq!(shape, ExportShape::PageList);
        assert_eq!(titles(&pages), vec!["Only"]);
        assert_eq!(pages[0].uid, "abc");
    }

    #[test]
    fn test_unrecognized_shape() {
        let err = pages_from_document(json!("not an export")).unwrap_err();
        assert!(matches!(err, Error::UnrecognizedShape("a string")));

        let err = pages_from_document(json!(42)).unwrap_err();
        assert!(matches!(err, Error::UnrecognizedShape("a number")));
    }

    #[test]
    fn test_page_without_title_is_an_error() {
        let err = pages_from_document(json!([{ "children": [] }])).unwrap_err();
        assert!(matches!(err, Error::InvalidPage(_)));
        assert!(err.to_string().contains("title"));
    }

    #[test]
    fn test_pages_field_that_is_not_a_list_is_an_error() {
        let err = pages_from_document(json!({ "pages": "nope" })).unwrap_err();
        assert!(matches!(err, Error::InvalidPage(_)));
    }

    // ============================================================================
    // pages_to_document tests
    // ============================================================================

    #[test]
    fn test_output_is_a_bare_array() {
        let pages = vec![Page::new("One", vec![])];

        let document = pages_to_document(&pages).unwrap();

        assert!(document.is_array());
        assert_eq!(document[0]["title"], "One");
        assert_eq!(document[0]["children"], json!([]));
    }

    #[test]
    fn test_output_of_envelope_input_has_no_pages_key() {
        let (_, pages) = pages_from_document(json!({ "pages": [{ "title": "One" }] })).unwrap();

        let document = pages_to_document(&pages).unwrap();

        assert!(document.as_object().is_none());
        assert_eq!(document.as_array().map(Vec::len), Some(1));
    }
}
