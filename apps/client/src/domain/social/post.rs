use super::like::{LikeState, LikeTarget, Likeable};
use super::value_objects::Coordinates;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostAuthor {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub city: String,
    pub user: PostAuthor,
    #[serde(deserialize_with = "decimal_degrees")]
    pub latitude: f64,
    #[serde(deserialize_with = "decimal_degrees")]
    pub longitude: f64,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub like_count: u32,
    #[serde(default)]
    pub is_liked: bool,
}

impl Likeable for Post {
    fn like_target(&self) -> LikeTarget {
        LikeTarget::Post(self.id)
    }

    fn like_state(&self) -> LikeState {
        LikeState::new(self.is_liked, self.like_count)
    }
}

/// A post as submitted from the compose form.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPost {
    pub title: String,
    pub body: String,
    pub location: Coordinates,
    pub image: Option<ImageUpload>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageUpload {
    pub file_name: String,
    pub data: Vec<u8>,
}

// Decimal model fields arrive either as JSON numbers or as strings.
fn decimal_degrees<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Degrees {
        Number(f64),
        Text(String),
    }

    match Degrees::deserialize(deserializer)? {
        Degrees::Number(value) => Ok(value),
        Degrees::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}
