use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "community-board")]
#[command(about = "Browse, post and react on the local community board", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Register a new account
    Signup {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        /// Password; prompted for when omitted
        #[arg(long)]
        password: Option<String>,
        #[arg(long)]
        password_confirm: Option<String>,
        #[arg(long)]
        prefecture: String,
        #[arg(long)]
        city: String,
    },
    /// Log in and remember the session
    Login {
        #[arg(long)]
        email: String,
        /// Password; prompted for when omitted
        #[arg(long)]
        password: Option<String>,
    },
    /// Forget the stored session
    Logout,
    /// Show the logged-in profile
    Me,
    /// List posts, optionally searching
    Posts {
        #[arg(short, long)]
        query: Option<String>,
    },
    /// List your own posts
    MyPosts,
    /// Publish a post at a map location
    CreatePost {
        #[arg(long)]
        title: String,
        #[arg(long)]
        body: String,
        #[arg(long, allow_negative_numbers = true)]
        lat: Option<f64>,
        #[arg(long, allow_negative_numbers = true)]
        lng: Option<f64>,
        #[arg(long)]
        image: Option<PathBuf>,
    },
    DeletePost {
        id: i64,
    },
    /// Like or unlike a post
    LikePost {
        id: i64,
    },
    /// Show the comments under a post
    Comments {
        post_id: i64,
    },
    /// Comment on a post
    Comment {
        post_id: i64,
        body: String,
    },
    DeleteComment {
        post_id: i64,
        comment_id: i64,
    },
    /// Like or unlike a comment
    LikeComment {
        post_id: i64,
        comment_id: i64,
    },
}
