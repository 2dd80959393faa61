//! Plain-text projection of the feed and the creation modal.

use crate::types::{FeedState, Post};
use crate::view::ViewState;
use std::fmt::Write;

/// Render the whole screen for the given store and view state
#[must_use]
pub fn render_feed(feed: &FeedState, ui: &ViewState) -> String {
    let mut out = String::from("Create Post\n===========\n");

    if feed.is_empty() {
        out.push_str("No posts\n");
    } else {
        for post in feed.posts() {
            render_post(&mut out, feed, ui, post);
        }
    }

    if ui.is_creating_post {
        render_modal(&mut out, ui);
    } else {
        out.push_str("\n[Create Post]\n");
    }

    out
}

fn render_post(out: &mut String, feed: &FeedState, ui: &ViewState, post: &Post) {
    let _ = writeln!(out, "\n## {}", post.title);
    if let Some(image) = &post.image {
        let _ = writeln!(out, "image: {image}");
    }
    let _ = writeln!(
        out,
        "likes: {} | comments: {} | shares: {}",
        post.likes,
        post.comments.len(),
        post.shares
    );

    if ui.expanded_comments == Some(post.id) {
        let _ = writeln!(out, "> {}_ [send]", feed.comment_input(&post.id));
        for comment in &post.comments {
            let _ = writeln!(out, "  - {comment}");
        }
    }

    let _ = writeln!(out, "{}", post.content);
}

fn render_modal(out: &mut String, ui: &ViewState) {
    let form = &ui.form;
    let errors = &ui.form_errors;

    out.push_str("\n-- Upload --\n");

    let _ = writeln!(out, "Title: {}", form.title);
    if let Some(message) = errors.get("title") {
        let _ = writeln!(out, "  ! {message}");
    }

    let _ = writeln!(out, "Content: {}", form.content);
    if let Some(message) = errors.get("content") {
        let _ = writeln!(out, "  ! {message}");
    }

    match &form.image {
        Some(file) => {
            let _ = writeln!(out, "Image: {}", file.path().display());
        },
        None => out.push_str("Image: (none)\n"),
    }
    if let Some(message) = errors.get("image") {
        let _ = writeln!(out, "  ! {message}");
    }

    out.push_str("[Post] [Cancel]\n");
}
