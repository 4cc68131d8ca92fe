// Core data structures for the seedex indexer

use serde::{Deserialize, Serialize};

/// A single unit of indexing, as accepted by the index server's add endpoint
///
/// The document key is the source URL: `id` always equals `url`, which makes
/// re-indexing a seed an idempotent upsert on the server side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub url: String,
    pub title: String,
    pub content: String,
}

impl Document {
    /// Build the document for a fetched page
    ///
    /// Substitutes the URL when the page has no usable title, so `title`
    /// is never empty.
    pub fn from_page(url: &str, page: PageText) -> Self {
        let title = if page.title.is_empty() {
            url.to_string()
        } else {
            page.title
        };

        Self {
            id: url.to_string(),
            url: url.to_string(),
            title,
            content: page.content,
        }
    }
}

/// Extracted page text: a trimmed (possibly empty) title and the bounded
/// visible content
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageText {
    pub title: String,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_id_equals_url() {
        let page = PageText {
            title: "Example".to_string(),
            content: "Body text".to_string(),
        };
        let doc = Document::from_page("http://a.test/page", page);

        assert_eq!(doc.id, doc.url);
        assert_eq!(doc.id, "http://a.test/page");
    }

    #[test]
    fn test_title_falls_back_to_url() {
        let page = PageText {
            title: String::new(),
            content: "Body text".to_string(),
        };
        let doc = Document::from_page("http://b.test", page);

        assert_eq!(doc.title, "http://b.test");
    }

    #[test]
    fn test_title_kept_when_present() {
        let page = PageText {
            title: "A".to_string(),
            content: String::new(),
        };
        let doc = Document::from_page("http://b.test", page);

        assert_eq!(doc.title, "A");
    }

    #[test]
    fn test_document_json_shape() {
        let page = PageText {
            title: "T".to_string(),
            content: "C".to_string(),
        };
        let doc = Document::from_page("http://a.test", page);
        let value = serde_json::to_value(&doc).unwrap();

        assert_eq!(value["id"], "http://a.test");
        assert_eq!(value["url"], "http://a.test");
        assert_eq!(value["title"], "T");
        assert_eq!(value["content"], "C");
        assert_eq!(value.as_object().unwrap().len(), 4);
    }

    #[test]
    fn test_document_roundtrip() {
        let doc = Document {
            id: "http://a.test".to_string(),
            url: "http://a.test".to_string(),
            title: "T".to_string(),
            content: "C".to_string(),
        };

        let json = serde_json::to_string(&doc).unwrap();
        let restored: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, doc);
    }
}
