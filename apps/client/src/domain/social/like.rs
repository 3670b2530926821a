use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one likeable entity. Posts and comments are separate
/// collections, so the same numeric id can appear under both kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LikeTarget {
    Post(i64),
    Comment(i64),
}

impl LikeTarget {
    pub fn id(&self) -> i64 {
        match self {
            LikeTarget::Post(id) | LikeTarget::Comment(id) => *id,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            LikeTarget::Post(_) => "post",
            LikeTarget::Comment(_) => "comment",
        }
    }
}

impl fmt::Display for LikeTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.kind(), self.id())
    }
}

/// The viewer-relative like state of an entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeState {
    pub is_liked: bool,
    pub like_count: u32,
}

impl LikeState {
    pub fn new(is_liked: bool, like_count: u32) -> Self {
        Self {
            is_liked,
            like_count,
        }
    }

    /// Inverts `is_liked` and moves `like_count` by exactly one in the matching
    /// direction. The count saturates at zero.
    pub fn toggled(self) -> Self {
        if self.is_liked {
            Self::new(false, self.like_count.saturating_sub(1))
        } else {
            Self::new(true, self.like_count.saturating_add(1))
        }
    }
}

pub trait Likeable {
    fn like_target(&self) -> LikeTarget;
    fn like_state(&self) -> LikeState;
}
