use crate::application::like_toggle::dto::ToggleOutcome;
use crate::domain::auth::user::UserProfile;
use crate::domain::social::comment::Comment;
use crate::domain::social::like::{LikeState, LikeTarget};
use crate::domain::social::post::Post;

pub fn like_badge(state: LikeState) -> String {
    let heart = if state.is_liked { "♥" } else { "♡" };
    format!("{} {}", heart, state.like_count)
}

pub fn post_line(post: &Post, image_url: Option<&str>) -> String {
    let mut line = format!(
        "#{} {} [{}] @{} {} {}\n    {}\n    ({:.6}, {:.6})",
        post.id,
        post.title,
        post.city,
        post.user.username,
        post.created_at.format("%Y-%m-%d"),
        like_badge(LikeState::new(post.is_liked, post.like_count)),
        post.body,
        post.latitude,
        post.longitude,
    );
    if let Some(url) = image_url {
        line.push_str(&format!("\n    image: {}", url));
    }
    line
}

pub fn comment_line(comment: &Comment, deletable: bool) -> String {
    format!(
        "#{} @{} {} {}{}\n    {}",
        comment.id,
        comment.user.username(),
        comment.created_at.format("%m-%d %H:%M"),
        like_badge(LikeState::new(comment.is_liked, comment.like_count)),
        if deletable { " (yours)" } else { "" },
        comment.body,
    )
}

pub fn profile_lines(profile: &UserProfile) -> String {
    format!(
        "{} <{}>\nlives in {} {}",
        profile.username, profile.email, profile.residence_prefecture, profile.residence_city
    )
}

pub fn toggle_line(target: LikeTarget, outcome: &ToggleOutcome) -> String {
    match outcome {
        ToggleOutcome::Confirmed(state) => format!("{} {}", target, like_badge(*state)),
        ToggleOutcome::RolledBack { restored, .. } => {
            format!("{} unchanged {}", target, like_badge(*restored))
        }
        ToggleOutcome::Ignored => format!("{} already being updated", target),
        ToggleOutcome::Unauthenticated => format!("{} not updated, log in first", target),
        ToggleOutcome::Untracked => format!("{} not found", target),
    }
}
