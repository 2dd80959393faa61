//! Domain types for the post feed.
//!
//! A feed is an ordered list of posts plus the comment drafts users are
//! typing. Posts are only ever appended and their counters only grow.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use url::Url;
use uuid::Uuid;

/// Unique identifier for a post
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PostId(Uuid);

impl PostId {
    /// Creates a `PostId` from a UUID
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the inner UUID
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Displayable reference to a locally selected image
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef(Url);

impl ImageRef {
    /// Wraps a URL that points at the image
    #[must_use]
    pub const fn new(url: Url) -> Self {
        Self(url)
    }

    /// The URL to display
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.0
    }
}

impl std::fmt::Display for ImageRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single post in the feed
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Unique identifier
    pub id: PostId,
    /// Headline
    pub title: String,
    /// Body text
    pub content: String,
    /// Optional attached image
    pub image: Option<ImageRef>,
    /// Number of likes
    pub likes: u64,
    /// Comments in the order they were added
    pub comments: Vec<String>,
    /// Number of shares
    pub shares: u64,
    /// When the post was created
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Creates a post with no likes, comments or shares
    #[must_use]
    pub const fn new(
        id: PostId,
        title: String,
        content: String,
        image: Option<ImageRef>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            content,
            image,
            likes: 0,
            comments: Vec::new(),
            shares: 0,
            created_at,
        }
    }
}

/// State of the feed store
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedState {
    /// All posts, oldest first
    pub posts: Vec<Post>,
    /// Comment drafts keyed by post; absent means empty
    pub drafts: HashMap<PostId, String>,
    /// Reserved for a loading indicator; nothing sets it yet
    pub is_loading: bool,
    /// Reserved for a feed-level error; nothing sets it yet
    pub error: Option<String>,
}

impl FeedState {
    /// Creates an empty feed
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All posts in creation order
    #[must_use]
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Returns the number of posts
    #[must_use]
    pub fn count(&self) -> usize {
        self.posts.len()
    }

    /// Returns `true` if no post has been created yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Returns the first post with the given id
    #[must_use]
    pub fn get(&self, id: &PostId) -> Option<&Post> {
        self.posts.iter().find(|post| post.id == *id)
    }

    /// Mutable lookup, first match
    pub(crate) fn get_mut(&mut self, id: &PostId) -> Option<&mut Post> {
        self.posts.iter_mut().find(|post| post.id == *id)
    }

    /// Checks if a post exists
    #[must_use]
    pub fn exists(&self, id: &PostId) -> bool {
        self.get(id).is_some()
    }

    /// The comment draft for a post, empty if none
    #[must_use]
    pub fn comment_input(&self, id: &PostId) -> &str {
        self.drafts.get(id).map_or("", String::as_str)
    }
}

/// Every transition the feed store accepts
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedAction {
    /// Append a fully formed post to the end of the feed
    CreatePost(Post),

    /// Add one like
    LikePost {
        /// Post to like
        post_id: PostId,
    },

    /// Append a comment
    AddComment {
        /// Post to comment on
        post_id: PostId,
        /// Comment text, already trimmed by the caller
        comment: String,
    },

    /// Replace the comment draft
    UpdateCommentInput {
        /// Post whose draft changes
        post_id: PostId,
        /// New draft text
        value: String,
    },

    /// Add one share
    SharePost {
        /// Post to share
        post_id: PostId,
    },
}

impl FeedAction {
    /// The post this action creates or targets
    #[must_use]
    pub const fn post_id(&self) -> PostId {
        match self {
            Self::CreatePost(post) => post.id,
            Self::LikePost { post_id }
            | Self::AddComment { post_id, .. }
            | Self::UpdateCommentInput { post_id, .. }
            | Self::SharePost { post_id } => *post_id,
        }
    }
}
