use log::{error, info};

use crate::builder::{watch_index, PostSummary, SharedIndex};
use crate::config::Config;
use crate::utils::error::BoxResult;

/// Watch the content directory and keep an in-memory index current
pub fn handle_watch_command(config: &Config, print: bool) -> BoxResult<()> {
    let index = SharedIndex::default();

    watch_index(config, &index, |posts: &[PostSummary]| {
        info!("Index swapped: {} posts", posts.len());
        if print {
            match serde_json::to_string(posts) {
                Ok(json) => println!("{}", json),
                Err(e) => error!("Failed to serialize index: {}", e),
            }
        }
    })?;

    Ok(())
}
