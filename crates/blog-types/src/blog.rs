use std::fmt;

use serde::{Deserialize, Serialize};

/// Input for creating a blog. The store assigns the id.
///
/// Fields are free text and are never validated; missing fields
/// deserialize as empty strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogDraft {
    #[serde(default)]
    pub author_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

impl BlogDraft {
    pub fn new(
        author_id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            author_id: author_id.into(),
            title: title.into(),
            content: content.into(),
        }
    }

    /// Attach a store-assigned id, producing the external form.
    pub fn with_id(self, id: impl Into<String>) -> Blog {
        Blog {
            id: id.into(),
            author_id: self.author_id,
            title: self.title,
            content: self.content,
        }
    }
}

/// A stored blog as seen on the wire.
///
/// `id` is the 24-hex-digit encoding of the store's native identifier.
/// It is assigned on creation and never changes afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blog {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub author_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

impl Blog {
    pub fn new(
        id: impl Into<String>,
        author_id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            author_id: author_id.into(),
            title: title.into(),
            content: content.into(),
        }
    }

    /// The mutable fields, without the id.
    pub fn draft(&self) -> BlogDraft {
        BlogDraft {
            author_id: self.author_id.clone(),
            title: self.title.clone(),
            content: self.content.clone(),
        }
    }
}

impl fmt::Display for Blog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "id: {} author_id: {} title: {:?} content: {:?}",
            self.id, self.author_id, self.title, self.content
        )
    }
}
