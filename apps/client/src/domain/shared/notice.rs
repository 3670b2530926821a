//! User-facing notices.
//!
//! Use cases never bubble transport errors up to the person at the keyboard;
//! they translate them into a [`Notice`] and hand it to a [`NoticeSink`].

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Like,
    Comment,
    Post,
    DeleteComment,
    DeletePost,
    ViewProfile,
}

impl Action {
    fn describe(self) -> &'static str {
        match self {
            Action::Like => "like",
            Action::Comment => "comment",
            Action::Post => "create a post",
            Action::DeleteComment => "delete a comment",
            Action::DeletePost => "delete a post",
            Action::ViewProfile => "view your profile",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    LoginRequired(Action),
    LikeFailed,
    CommentFailed,
    CommentDeleteFailed,
    CommentsUnavailable,
    PostsUnavailable,
    PostFailed(String),
    PostDeleteFailed,
    SignupFailed(String),
    SignupSucceeded,
    LoginFailed,
    LoginSucceeded,
    LoggedOut,
    ProfileUnavailable,
}

impl Notice {
    pub fn is_error(&self) -> bool {
        !matches!(
            self,
            Notice::SignupSucceeded | Notice::LoginSucceeded | Notice::LoggedOut
        )
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::LoginRequired(action) => {
                write!(f, "You need to log in to {}", action.describe())
            }
            Notice::LikeFailed => write!(f, "Could not update the like. Please try again."),
            Notice::CommentFailed => write!(f, "Could not post the comment"),
            Notice::CommentDeleteFailed => write!(f, "Could not delete the comment"),
            Notice::CommentsUnavailable => write!(f, "Could not load comments"),
            Notice::PostsUnavailable => write!(f, "Could not load posts"),
            Notice::PostFailed(reason) => write!(f, "Could not create the post: {}", reason),
            Notice::PostDeleteFailed => write!(f, "Could not delete the post"),
            Notice::SignupFailed(reason) => write!(f, "Registration failed: {}", reason),
            Notice::SignupSucceeded => write!(f, "Registration complete, you can now log in"),
            Notice::LoginFailed => write!(f, "Incorrect email address or password"),
            Notice::LoginSucceeded => write!(f, "Logged in"),
            Notice::LoggedOut => write!(f, "Logged out"),
            Notice::ProfileUnavailable => write!(f, "Could not load your profile"),
        }
    }
}

pub trait NoticeSink: Send + Sync {
    fn notify(&self, notice: Notice);
}
