//! Reducer logic for the feed store.
//!
//! Five transitions, none of which can fail. A transition that names a
//! post the feed does not contain leaves the state untouched.

use crate::types::{FeedAction, FeedState, PostId};
use postboard_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};

/// Reducer for the feed store
#[derive(Clone, Copy, Debug, Default)]
pub struct FeedReducer;

impl FeedReducer {
    /// Creates a new `FeedReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn unknown_post(transition: &'static str, post_id: &PostId) {
        tracing::debug!(transition, %post_id, "Ignoring transition for unknown post");
    }
}

impl Reducer for FeedReducer {
    type State = FeedState;
    type Action = FeedAction;
    type Environment = ();

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            FeedAction::CreatePost(post) => {
                state.posts.push(post);
            },

            FeedAction::LikePost { post_id } => match state.get_mut(&post_id) {
                Some(post) => post.likes = post.likes.saturating_add(1),
                None => Self::unknown_post("like_post", &post_id),
            },

            FeedAction::AddComment { post_id, comment } => match state.get_mut(&post_id) {
                Some(post) => post.comments.push(comment),
                None => Self::unknown_post("add_comment", &post_id),
            },

            FeedAction::UpdateCommentInput { post_id, value } => {
                if !state.exists(&post_id) {
                    Self::unknown_post("update_comment_input", &post_id);
                } else if value.is_empty() {
                    state.drafts.remove(&post_id);
                } else {
                    state.drafts.insert(post_id, value);
                }
            },

            FeedAction::SharePost { post_id } => match state.get_mut(&post_id) {
                Some(post) => post.shares = post.shares.saturating_add(1),
                None => Self::unknown_post("share_post", &post_id),
            },
        }

        smallvec![Effect::None]
    }
}
