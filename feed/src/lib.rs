//! # Postboard Feed
//!
//! A small social feed: create posts, like, comment on and share them.
//!
//! The feed is split the usual way:
//!
//! - [`types`]: `FeedState`, `Post` and the five `FeedAction`s
//! - [`reducer`]: `FeedReducer`, the only code that mutates the feed
//! - [`view`]: `FeedView`, which owns transient UI state and turns
//!   gestures into actions
//! - [`form`] and [`image`]: what the creation modal validates and attaches
//! - [`render`]: a plain-text rendering of the whole screen
//!
//! ## Example
//!
//! ```ignore
//! use postboard_feed::{FeedReducer, FeedState, FeedView, ViewEnvironment};
//! use postboard_runtime::Store;
//!
//! let store = Store::new(FeedState::new(), FeedReducer::new(), ());
//! let mut view = FeedView::new(store, ViewEnvironment::production());
//!
//! view.open_composer();
//! view.set_title("Hello")?;
//! view.set_content("First post")?;
//! let id = view.submit_post().await?;
//!
//! view.like(id).await?;
//! println!("{}", view.render().await);
//! ```

pub mod form;
pub mod image;
pub mod reducer;
pub mod render;
pub mod types;
pub mod view;

pub use form::{FormErrors, PostForm};
pub use image::{ImageError, ImageFile, ImageResolver, LocalFileResolver};
pub use reducer::FeedReducer;
pub use render::render_feed;
pub use types::{FeedAction, FeedState, ImageRef, Post, PostId};
pub use view::{FeedStore, FeedView, ViewEnvironment, ViewError, ViewState};
