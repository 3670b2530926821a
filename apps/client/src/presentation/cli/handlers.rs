use super::args::Command;
use super::render;
use super::state::AppContext;
use crate::application::auth::dto::{LoginForm, SignupForm};
use crate::application::like_toggle::dto::ToggleOutcome;
use crate::application::posts::dto::PostForm;
use crate::domain::social::like::LikeTarget;
use crate::domain::social::post::Post;
use anyhow::{Context, bail};

/// Runs one subcommand against the API. Notices have already been shown to
/// the user by the time an error comes back, so the error only sets the exit
/// status.
pub async fn run(command: Command, ctx: &AppContext) -> anyhow::Result<()> {
    if needs_session(&command) {
        // An expired session is cleared; the command then runs anonymously.
        if let Err(error) = ctx.auth().ensure_fresh(chrono::Utc::now()).await {
            tracing::debug!(error = %error, "continuing without a session");
        }
    }

    match command {
        Command::Signup {
            username,
            email,
            password,
            password_confirm,
            prefecture,
            city,
        } => {
            let password = password_or_prompt(password, "Password: ")?;
            let password_confirm = password_or_prompt(password_confirm, "Confirm password: ")?;
            let form = SignupForm {
                username,
                email,
                password,
                password_confirm,
                residence_prefecture: prefecture,
                residence_city: city,
            };
            ctx.auth().signup(form).await?;
        }
        Command::Login { email, password } => {
            let password = password_or_prompt(password, "Password: ")?;
            ctx.auth().login(LoginForm { email, password }).await?;
        }
        Command::Logout => ctx.auth().logout()?,
        Command::Me => {
            let profile = ctx.auth().me().await?;
            println!("{}", render::profile_lines(&profile));
        }
        Command::Posts { query } => {
            let posts = ctx.posts().list(query.as_deref()).await?;
            print_posts(ctx, &posts);
        }
        Command::MyPosts => {
            let posts = ctx.posts().my_posts().await?;
            print_posts(ctx, &posts);
        }
        Command::CreatePost {
            title,
            body,
            lat,
            lng,
            image,
        } => {
            let form = PostForm {
                title,
                body,
                latitude: lat,
                longitude: lng,
                image,
            };
            let post = ctx.posts().create(form).await?;
            print_posts(ctx, std::slice::from_ref(&post));
        }
        Command::DeletePost { id } => {
            ctx.posts().delete(id).await?;
            println!("post#{} deleted", id);
        }
        Command::LikePost { id } => {
            let posts = ctx.posts();
            posts
                .list(None)
                .await
                .context("could not load posts to like")?;
            let outcome = posts.toggle_like(id).await;
            report_toggle(LikeTarget::Post(id), outcome)?;
        }
        Command::Comments { post_id } => {
            let mut section = ctx.comment_section(post_id);
            section.load().await?;
            if section.comments().is_empty() {
                println!("no comments yet");
            }
            for comment in section.comments() {
                println!("{}", render::comment_line(comment, section.can_delete(comment)));
            }
        }
        Command::Comment { post_id, body } => {
            let mut section = ctx.comment_section(post_id);
            section.submit(&body).await?;
            println!("comment added ({} total)", section.comments().len());
        }
        Command::DeleteComment {
            post_id,
            comment_id,
        } => {
            let mut section = ctx.comment_section(post_id);
            section.load().await?;
            let Some(comment) = section.comments().iter().find(|c| c.id == comment_id) else {
                bail!("comment#{} not found under post#{}", comment_id, post_id);
            };
            if !section.can_delete(comment) {
                bail!("comment#{} belongs to someone else", comment_id);
            }
            section.delete(comment_id).await?;
            println!("comment#{} deleted", comment_id);
        }
        Command::LikeComment {
            post_id,
            comment_id,
        } => {
            let mut section = ctx.comment_section(post_id);
            section.load().await?;
            let outcome = section.toggle_like(comment_id).await;
            report_toggle(LikeTarget::Comment(comment_id), outcome)?;
        }
    }
    Ok(())
}

fn needs_session(command: &Command) -> bool {
    !matches!(
        command,
        Command::Signup { .. } | Command::Login { .. } | Command::Logout
    )
}

/// Passwords given on the command line leak into `ps` and shell history, so
/// the flag is optional and the terminal is asked instead.
fn password_or_prompt(given: Option<String>, prompt: &str) -> anyhow::Result<String> {
    match given {
        Some(password) => Ok(password),
        None => rpassword::prompt_password(prompt).context("could not read password"),
    }
}

fn print_posts(ctx: &AppContext, posts: &[Post]) {
    if posts.is_empty() {
        println!("no posts found");
    }
    for post in posts {
        let image = post
            .image
            .as_deref()
            .and_then(|path| ctx.api.media_url(path));
        println!("{}", render::post_line(post, image.as_deref()));
    }
}

fn report_toggle(target: LikeTarget, outcome: ToggleOutcome) -> anyhow::Result<()> {
    println!("{}", render::toggle_line(target, &outcome));
    match outcome {
        ToggleOutcome::Confirmed(_) | ToggleOutcome::Ignored => Ok(()),
        ToggleOutcome::RolledBack { error, .. } => Err(error.into()),
        ToggleOutcome::Unauthenticated => bail!("login required to like"),
        ToggleOutcome::Untracked => bail!("{} is not on the board", target),
    }
}
