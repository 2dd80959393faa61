//! The feed view: turns user gestures into store transitions.
//!
//! `FeedView` owns only transient UI state (is the modal open, whose
//! comment box is expanded, what is typed in the form). Everything about
//! posts goes through the shared [`FeedStore`].

use crate::form::{FormErrors, PostForm};
use crate::image::{ImageError, ImageFile, ImageResolver, LocalFileResolver};
use crate::reducer::FeedReducer;
use crate::render::render_feed;
use crate::types::{FeedAction, FeedState, Post, PostId};
use postboard_core::environment::{Clock, IdGenerator, SystemClock, UuidGenerator};
use postboard_runtime::{Store, StoreError};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::broadcast;

/// The store every view of the feed shares
pub type FeedStore = Store<FeedState, FeedAction, (), FeedReducer>;

/// Errors a gesture can surface to the user
#[derive(Error, Debug)]
pub enum ViewError {
    /// A form gesture arrived while the modal was closed
    #[error("the post form is not open")]
    ComposerClosed,

    /// Required fields are missing; messages are shown inline
    #[error("invalid post: {0}")]
    Validation(FormErrors),

    /// The picked image could not be attached
    #[error(transparent)]
    Image(#[from] ImageError),

    /// The store refused the transition
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Dependencies the view needs to build new posts
#[derive(Clone)]
pub struct ViewEnvironment {
    /// Timestamps for `created_at`
    pub clock: Arc<dyn Clock>,
    /// Source of post ids
    pub ids: Arc<dyn IdGenerator>,
    /// Turns picked files into displayable references
    pub images: Arc<dyn ImageResolver>,
}

impl ViewEnvironment {
    /// Creates a new `ViewEnvironment`
    #[must_use]
    pub fn new(
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
        images: Arc<dyn ImageResolver>,
    ) -> Self {
        Self { clock, ids, images }
    }

    /// Wall clock, random ids, local files
    #[must_use]
    pub fn production() -> Self {
        Self::new(
            Arc::new(SystemClock),
            Arc::new(UuidGenerator),
            Arc::new(LocalFileResolver),
        )
    }
}

/// Transient UI state; never shared, never persisted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    /// Whether the "Upload" modal is visible
    pub is_creating_post: bool,
    /// Post whose comment input is open, if any
    pub expanded_comments: Option<PostId>,
    /// Values typed into the modal
    pub form: PostForm,
    /// Inline messages from the last rejected submission
    pub form_errors: FormErrors,
}

/// Headless form + feed component
pub struct FeedView {
    store: FeedStore,
    env: ViewEnvironment,
    ui: ViewState,
}

impl FeedView {
    /// Attach a view to a store
    #[must_use]
    pub fn new(store: FeedStore, env: ViewEnvironment) -> Self {
        Self {
            store,
            env,
            ui: ViewState::default(),
        }
    }

    /// Current UI state
    #[must_use]
    pub const fn ui(&self) -> &ViewState {
        &self.ui
    }

    /// The store this view dispatches to
    #[must_use]
    pub const fn store(&self) -> &FeedStore {
        &self.store
    }

    /// Actions applied to the store, for re-rendering
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<FeedAction> {
        self.store.subscribe_actions()
    }

    /// Render the current screen
    pub async fn render(&self) -> String {
        let ui = &self.ui;
        self.store.state(|feed| render_feed(feed, ui)).await
    }

    // ========== Creation modal ==========

    /// "Create Post" button; returns `false` if the modal was already open
    pub fn open_composer(&mut self) -> bool {
        if self.ui.is_creating_post {
            return false;
        }
        tracing::debug!("Opening post composer");
        self.ui.is_creating_post = true;
        true
    }

    /// Edit the title field
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::ComposerClosed`] if the modal is not open.
    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), ViewError> {
        self.form_mut()?.title = title.into();
        Ok(())
    }

    /// Edit the content field
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::ComposerClosed`] if the modal is not open.
    pub fn set_content(&mut self, content: impl Into<String>) -> Result<(), ViewError> {
        self.form_mut()?.content = content.into();
        Ok(())
    }

    /// Pick (or clear) the image file
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::ComposerClosed`] if the modal is not open.
    pub fn set_image(&mut self, image: Option<ImageFile>) -> Result<(), ViewError> {
        self.form_mut()?.image = image;
        Ok(())
    }

    /// "Post" button
    ///
    /// Validates the form, attaches the image, and appends the new post.
    /// On success the form is cleared and the modal closes.
    ///
    /// # Errors
    ///
    /// - [`ViewError::ComposerClosed`] if the modal is not open
    /// - [`ViewError::Validation`] if title or content is empty
    /// - [`ViewError::Image`] if the picked image cannot be attached
    /// - [`ViewError::Store`] if the store is shutting down
    ///
    /// Validation and image failures leave the modal open with inline messages.
    pub async fn submit_post(&mut self) -> Result<PostId, ViewError> {
        if !self.ui.is_creating_post {
            return Err(ViewError::ComposerClosed);
        }

        if let Err(errors) = self.ui.form.check() {
            tracing::debug!(%errors, "Post form rejected");
            self.ui.form_errors = errors.clone();
            return Err(ViewError::Validation(errors));
        }

        let image = match self.ui.form.image.as_ref() {
            Some(file) => match self.env.images.resolve(file) {
                Ok(image) => Some(image),
                Err(error) => {
                    tracing::warn!(%error, "Could not attach image");
                    self.ui.form_errors = FormErrors::single("image", error.to_string());
                    return Err(error.into());
                },
            },
            None => None,
        };

        let post = Post::new(
            PostId::from_uuid(self.env.ids.next_id()),
            self.ui.form.title.clone(),
            self.ui.form.content.clone(),
            image,
            self.env.clock.now(),
        );
        let post_id = post.id;

        self.store.send(FeedAction::CreatePost(post)).await?;
        tracing::info!(%post_id, "Post created");

        self.ui.form = PostForm::default();
        self.ui.form_errors = FormErrors::default();
        self.ui.is_creating_post = false;

        Ok(post_id)
    }

    /// "Cancel" button: close the modal and discard what was typed
    pub fn cancel(&mut self) {
        tracing::debug!("Post composer cancelled");
        self.ui.is_creating_post = false;
        self.ui.form = PostForm::default();
        self.ui.form_errors = FormErrors::default();
    }

    fn form_mut(&mut self) -> Result<&mut PostForm, ViewError> {
        if self.ui.is_creating_post {
            Ok(&mut self.ui.form)
        } else {
            Err(ViewError::ComposerClosed)
        }
    }

    // ========== Post actions ==========

    /// Like icon
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Store`] if the store is shutting down.
    pub async fn like(&self, post_id: PostId) -> Result<(), ViewError> {
        tracing::debug!(%post_id, "Like");
        self.store.send(FeedAction::LikePost { post_id }).await?;
        Ok(())
    }

    /// Share icon
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Store`] if the store is shutting down.
    pub async fn share(&self, post_id: PostId) -> Result<(), ViewError> {
        tracing::debug!(%post_id, "Share");
        self.store.send(FeedAction::SharePost { post_id }).await?;
        Ok(())
    }

    /// Comment icon
    ///
    /// Opens this post's comment input, moving it away from any other
    /// post. Clicking the icon of the open post closes it.
    pub fn toggle_comments(&mut self, post_id: PostId) {
        self.ui.expanded_comments = if self.ui.expanded_comments == Some(post_id) {
            None
        } else {
            Some(post_id)
        };
        tracing::debug!(%post_id, expanded = ?self.ui.expanded_comments, "Toggled comments");
    }

    /// Keystroke in a comment input
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Store`] if the store is shutting down.
    pub async fn edit_comment(
        &self,
        post_id: PostId,
        value: impl Into<String>,
    ) -> Result<(), ViewError> {
        self.store
            .send(FeedAction::UpdateCommentInput {
                post_id,
                value: value.into(),
            })
            .await?;
        Ok(())
    }

    /// Send button next to a comment input
    ///
    /// Returns `false` without dispatching anything when the draft is blank.
    /// Otherwise adds the trimmed comment, clears the draft, and closes
    /// the comment input.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Store`] if the store is shutting down.
    pub async fn send_comment(&mut self, post_id: PostId) -> Result<bool, ViewError> {
        let comment = self
            .store
            .state(|feed| feed.comment_input(&post_id).trim().to_string())
            .await;

        if comment.is_empty() {
            tracing::debug!(%post_id, "Ignoring blank comment");
            return Ok(false);
        }

        self.store
            .send(FeedAction::AddComment { post_id, comment })
            .await?;
        self.store
            .send(FeedAction::UpdateCommentInput {
                post_id,
                value: String::new(),
            })
            .await?;

        if self.ui.expanded_comments == Some(post_id) {
            self.ui.expanded_comments = None;
        }
        Ok(true)
    }
}
