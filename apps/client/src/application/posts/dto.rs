use crate::domain::social::value_objects::not_blank;
use std::path::PathBuf;
use validator::Validate;

/// Raw input of the compose form. The location comes from a map pick and may
/// still be missing when the form is submitted.
#[derive(Debug, Clone, Default, Validate)]
pub struct PostForm {
    #[validate(custom(function = "not_blank"), length(max = 200))]
    pub title: String,
    #[validate(custom(function = "not_blank"))]
    pub body: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub image: Option<PathBuf>,
}
