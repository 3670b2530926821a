use super::like::{LikeState, LikeTarget, Likeable};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Comment authors come back either as a nested profile or as the bare
/// username string, depending on the serializer in use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CommentAuthor {
    Profile { id: i64, username: String },
    Name(String),
}

impl CommentAuthor {
    pub fn id(&self) -> Option<i64> {
        match self {
            CommentAuthor::Profile { id, .. } => Some(*id),
            CommentAuthor::Name(_) => None,
        }
    }

    pub fn username(&self) -> &str {
        match self {
            CommentAuthor::Profile { username, .. } => username,
            CommentAuthor::Name(name) => name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    #[serde(default)]
    pub post: Option<i64>,
    #[serde(alias = "text")]
    pub body: String,
    pub user: CommentAuthor,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub like_count: u32,
    #[serde(default)]
    pub is_liked: bool,
}

impl Likeable for Comment {
    fn like_target(&self) -> LikeTarget {
        LikeTarget::Comment(self.id)
    }

    fn like_state(&self) -> LikeState {
        LikeState::new(self.is_liked, self.like_count)
    }
}
