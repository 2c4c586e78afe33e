//! Entity mapping between the wire [`Blog`] and the persisted [`BlogDocument`].

use bson::oid::ObjectId;
use bson::Document;

use blog_types::{Blog, BlogDraft};

use crate::document::{BlogDocument, BlogFields};
use crate::error::{StoreError, StoreResult};

/// The store's native identifier.
pub type NativeId = ObjectId;

/// Parse a 24-hex-digit id string.
pub fn parse_id(id: &str) -> StoreResult<NativeId> {
    ObjectId::parse_str(id).map_err(|e| StoreError::InvalidIdentifier {
        id: id.to_string(),
        reason: e.to_string(),
    })
}

/// Encode a native id as 24 lowercase hex digits. Total.
pub fn encode_id(id: &NativeId) -> String {
    id.to_hex()
}

/// Build an unsaved document. The store assigns `_id`.
pub fn to_document(draft: &BlogDraft) -> BlogDocument {
    BlogDocument {
        id: None,
        author_id: draft.author_id.clone(),
        content: draft.content.clone(),
        title: draft.title.clone(),
    }
}

/// Build the full-replacement payload from a blog. The id is ignored.
pub fn to_fields(blog: &Blog) -> BlogFields {
    BlogFields {
        author_id: blog.author_id.clone(),
        content: blog.content.clone(),
        title: blog.title.clone(),
    }
}

/// Rebuild the wire form, using `id` as given rather than the stored `_id`.
pub fn to_blog(document: BlogDocument, id: &str) -> Blog {
    Blog {
        id: id.to_string(),
        author_id: document.author_id,
        title: document.title,
        content: document.content,
    }
}

/// Map a raw record onto the blog shape.
pub fn decode_document(raw: Document, id: &NativeId) -> StoreResult<BlogDocument> {
    bson::from_document(raw).map_err(|e| StoreError::DecodeFailure {
        id: encode_id(id),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;
    use proptest::prelude::*;

    #[test]
    fn parse_valid_id() {
        let id = parse_id("5eb9309c7ade23cccb8c797f").unwrap();
        assert_eq!(encode_id(&id), "5eb9309c7ade23cccb8c797f");
    }

    #[test]
    fn parse_rejects_malformed() {
        let malformed = [
            "",
            "not-an-id",
            "5eb9309c7ade23cccb8c797",
            "5eb9309c7ade23cccb8c797fz",
            "zzzzzzzzzzzzzzzzzzzzzzzz",
        ];
        for bad in malformed {
            let err = parse_id(bad).unwrap_err();
            assert!(matches!(err, StoreError::InvalidIdentifier { ref id, .. } if id == bad));
        }
    }

    #[test]
    fn to_document_has_no_id() {
        let doc = to_document(&BlogDraft::new("Hennie", "My First Blog", "The sunshine..."));
        assert!(doc.id.is_none());
        assert_eq!(doc.author_id, "Hennie");
        assert_eq!(doc.title, "My First Blog");
    }

    #[test]
    fn to_fields_ignores_id() {
        let blog = Blog::new("5eb9309c7ade23cccb8c797f", "Ronald", "T", "");
        let fields = to_fields(&blog);
        assert_eq!(fields.author_id, "Ronald");
        assert_eq!(fields.title, "T");
        assert_eq!(fields.content, "");
    }

    #[test]
    fn to_blog_uses_given_id() {
        let stored = ObjectId::new();
        let doc = BlogDocument {
            id: Some(stored),
            author_id: "a".into(),
            content: "c".into(),
            title: "t".into(),
        };
        let blog = to_blog(doc, "caller-id");
        assert_eq!(blog.id, "caller-id");
        assert_eq!(blog.content, "c");
    }

    #[test]
    fn decode_failure_reports_id() {
        let id = ObjectId::new();
        let err = decode_document(doc! { "_id": id, "author_id": 7 }, &id).unwrap_err();
        match err {
            StoreError::DecodeFailure { id: reported, .. } => assert_eq!(reported, id.to_hex()),
            other => panic!("unexpected error: {other}"),
        }
    }

    proptest! {
        #[test]
        fn native_id_roundtrip(bytes in any::<[u8; 12]>()) {
            let id = ObjectId::from_bytes(bytes);
            prop_assert_eq!(parse_id(&encode_id(&id)).unwrap(), id);
        }

        #[test]
        fn encoded_id_roundtrip(s in "[0-9a-f]{24}") {
            prop_assert_eq!(encode_id(&parse_id(&s).unwrap()), s);
        }
    }
}
