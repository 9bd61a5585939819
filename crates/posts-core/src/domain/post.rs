use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ModelError;

/// Opaque post identifier, assigned by the persistence layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(String);

impl PostId {
    /// Generate a fresh identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for PostId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for PostId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// Post entity - a single blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: PostId,
    pub author: String,
    pub title: String,
    pub content: String,
    pub date: DateTime<Utc>,
}

impl Post {
    /// Create a post from validated fields, assigning a new id and the creation date.
    pub fn new(new_post: NewPost) -> Self {
        Self {
            id: PostId::generate(),
            author: new_post.author,
            title: new_post.title,
            content: new_post.content,
            date: Utc::now(),
        }
    }

    /// Replace the supplied fields. `id` and `date` never change.
    ///
    /// Nothing is modified when any supplied field is blank.
    pub fn apply(&mut self, fields: PostFields) -> Result<(), ModelError> {
        for (name, value) in fields.supplied() {
            if value.trim().is_empty() {
                return Err(ModelError::Validation(format!("{name} must not be blank")));
            }
        }

        if let Some(author) = fields.author {
            self.author = author;
        }
        if let Some(title) = fields.title {
            self.title = title;
        }
        if let Some(content) = fields.content {
            self.content = content;
        }
        Ok(())
    }
}

/// Partial post record, as carried by a request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl PostFields {
    pub fn new(
        author: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            author: Some(author.into()),
            title: Some(title.into()),
            content: Some(content.into()),
        }
    }

    fn supplied(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("author", self.author.as_deref()),
            ("title", self.title.as_deref()),
            ("content", self.content.as_deref()),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, v)))
    }
}

/// Fields required to create a post, all present and non-blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub author: String,
    pub title: String,
    pub content: String,
}

impl TryFrom<PostFields> for NewPost {
    type Error = ModelError;

    fn try_from(fields: PostFields) -> Result<Self, Self::Error> {
        fn required(name: &str, value: Option<String>) -> Result<String, ModelError> {
            match value {
                Some(v) if !v.trim().is_empty() => Ok(v),
                _ => Err(ModelError::Validation(format!("{name} is required"))),
            }
        }

        Ok(Self {
            author: required("author", fields.author)?,
            title: required("title", fields.title)?,
            content: required("content", fields.content)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Post {
        Post::new(NewPost {
            author: "stswenguser".to_string(),
            title: "My first test post".to_string(),
            content: "Random content".to_string(),
        })
    }

    #[test]
    fn test_new_post_requires_every_field() {
        let fields = PostFields {
            author: Some("stswenguser".to_string()),
            title: Some("   ".to_string()),
            content: None,
        };

        let err = NewPost::try_from(fields).unwrap_err();
        assert!(matches!(err, ModelError::Validation(msg) if msg.contains("title")));
    }

    #[test]
    fn test_apply_keeps_id_and_date() {
        let mut post = sample();
        let (id, date) = (post.id.clone(), post.date);

        post.apply(PostFields::new("newuser", "just updated", "new content"))
            .unwrap();

        assert_eq!(post.id, id);
        assert_eq!(post.date, date);
        assert_eq!(post.title, "just updated");
        assert_eq!(post.content, "new content");
        assert_eq!(post.author, "newuser");
    }

    #[test]
    fn test_apply_only_touches_supplied_fields() {
        let mut post = sample();

        post.apply(PostFields {
            title: Some("Renamed".to_string()),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(post.title, "Renamed");
        assert_eq!(post.author, "stswenguser");
        assert_eq!(post.content, "Random content");
    }

    #[test]
    fn test_apply_rejects_blank_without_partial_update() {
        let mut post = sample();
        let before = post.clone();

        let result = post.apply(PostFields {
            title: Some("Renamed".to_string()),
            content: Some(String::new()),
            ..Default::default()
        });

        assert!(matches!(result, Err(ModelError::Validation(_))));
        assert_eq!(post, before);
    }

    #[test]
    fn test_serializes_id_as_underscore_id() {
        let post = sample();
        let json = serde_json::to_value(&post).unwrap();

        assert_eq!(json["_id"], post.id.as_str());
        assert_eq!(json["author"], "stswenguser");
        assert!(json.get("id").is_none());
        assert!(json["date"].is_string());
    }
}
