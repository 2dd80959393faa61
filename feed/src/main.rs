//! Postboard demo binary
//!
//! Walks through the feed the way a user would: create posts, like,
//! comment and share, printing the screen after each step.
//!
//! Pass an image path as the first argument to attach it to the first post.

use postboard_feed::{FeedReducer, FeedState, FeedView, ImageFile, ViewEnvironment, ViewError};
use postboard_runtime::{Store, StoreConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "postboard=info,postboard_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    postboard_runtime::metrics::describe();

    let image = std::env::args().nth(1).map(ImageFile::new);

    let store = Store::with_config(
        FeedState::new(),
        FeedReducer::new(),
        (),
        StoreConfig::default().with_broadcast_capacity(64),
    );

    let mut actions = store.subscribe_actions();
    let observer = tokio::spawn(async move {
        while let Ok(action) = actions.recv().await {
            tracing::info!(post_id = %action.post_id(), ?action, "Feed changed");
        }
    });

    let mut view = FeedView::new(store.clone(), ViewEnvironment::production());

    println!("=== Postboard ===\n");
    println!("{}", view.render().await);

    // An empty submission is rejected inline
    println!(">>> Post with an empty form");
    view.open_composer();
    if let Err(ViewError::Validation(errors)) = view.submit_post().await {
        println!("Rejected: {errors}");
    }
    println!("{}", view.render().await);

    println!(">>> Post \"Hello\"");
    view.set_title("Hello")?;
    view.set_content("First post on the board")?;
    view.set_image(image)?;
    let first = match view.submit_post().await {
        Ok(id) => id,
        Err(ViewError::Image(error)) => {
            println!("Could not attach image ({error}), posting without it");
            view.set_image(None)?;
            view.submit_post().await?
        },
        Err(error) => return Err(error.into()),
    };

    println!(">>> Post \"Second\"");
    view.open_composer();
    view.set_title("Second")?;
    view.set_content("Another one")?;
    let second = view.submit_post().await?;

    println!(">>> Like the first post twice, share the second");
    view.like(first).await?;
    view.like(first).await?;
    view.share(second).await?;

    println!(">>> Comment on the first post");
    view.toggle_comments(first);
    view.edit_comment(first, "nice").await?;
    println!("{}", view.render().await);
    view.send_comment(first).await?;

    println!(">>> Blank comments are ignored");
    view.toggle_comments(first);
    view.edit_comment(first, "   ").await?;
    let sent = view.send_comment(first).await?;
    println!("Sent: {sent}\n");

    println!("{}", view.render().await);

    store.close().await?;
    drop(view);
    drop(store);
    observer.await?;

    println!("=== Done ===");
    Ok(())
}
