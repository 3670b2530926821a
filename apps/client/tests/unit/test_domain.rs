use client::domain::{
    shared::{
        errors::DomainError,
        notice::{Action, Notice},
    },
    social::{
        like::{LikeState, LikeTarget},
        value_objects::{CommentBody, Coordinates},
    },
};

#[test]
fn toggling_twice_restores_the_original_state() {
    let original = LikeState::new(false, 3);
    assert_eq!(original.toggled(), LikeState::new(true, 4));
    assert_eq!(original.toggled().toggled(), original);
}

#[test]
fn unliking_with_zero_count_stays_at_zero() {
    assert_eq!(
        LikeState::new(true, 0).toggled(),
        LikeState::new(false, 0)
    );
}

#[test]
fn like_targets_of_different_kinds_are_distinct() {
    assert_ne!(LikeTarget::Post(7), LikeTarget::Comment(7));
    assert_eq!(LikeTarget::Comment(7).to_string(), "comment#7");
}

#[test]
fn coordinates_enforce_map_bounds() {
    assert!(Coordinates::new(35.68, 139.76).is_ok());
    assert!(Coordinates::new(-90.0, 180.0).is_ok());
    assert!(Coordinates::new(90.5, 0.0).is_err());
    assert!(Coordinates::new(0.0, -181.0).is_err());
}

#[test]
fn comment_body_is_trimmed_and_never_blank() {
    let body = CommentBody::new("  nice photo \n").expect("body should be valid");
    assert_eq!(body.value, "nice photo");

    let blank = CommentBody::new(" \t ").map_err(DomainError::from);
    assert!(matches!(blank, Err(DomainError::ValidationError(_))));
}

#[test]
fn notices_read_as_user_messages() {
    assert_eq!(
        Notice::LoginRequired(Action::Like).to_string(),
        "You need to log in to like"
    );
    assert!(Notice::LikeFailed.is_error());
    assert!(!Notice::LoginSucceeded.is_error());
}
