use std::sync::mpsc::{channel, Receiver, RecvTimeoutError};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use log::{debug, error, info};
use notify::{Event, EventKind, RecursiveMode, Result as NotifyResult, Watcher};

use crate::builder::index::{build_index, rebuild_lenient, PostSummary};
use crate::config::Config;
use crate::utils::error::SiteResult;
use crate::utils::path::{file_name_str, has_content_extension};

/// The live post index. Readers take a snapshot; a re-scan replaces the
/// whole index at once so no reader sees a partial one.
#[derive(Debug, Default)]
pub struct SharedIndex {
    current: RwLock<Arc<Vec<PostSummary>>>,
}

impl SharedIndex {
    pub fn snapshot(&self) -> Arc<Vec<PostSummary>> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    /// Swap in a freshly built index and return it
    pub fn replace(&self, posts: Vec<PostSummary>) -> Arc<Vec<PostSummary>> {
        let next = Arc::new(posts);
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::clone(&next);
        next
    }
}

/// Build the index, then watch the content directory and re-scan after
/// each burst of changes. Blocks until the watcher shuts down.
pub fn watch_index<F>(config: &Config, index: &SharedIndex, on_swap: F) -> SiteResult<()>
where
    F: FnMut(&[PostSummary]),
{
    let content_dir = config.content_path();
    info!("Watching content directory: {}", content_dir.display());

    // Initial build is strict: a broken site should not start watching
    index.replace(build_index(config)?);

    let (tx, rx) = channel();
    let extension = config.content_extension.clone();

    let mut watcher = notify::recommended_watcher(move |res: NotifyResult<Event>| match res {
        Ok(event) => {
            if is_content_change(&event, &extension) {
                tx.send(event).unwrap_or_else(|e| {
                    error!("Error sending file event: {}", e);
                });
            }
        }
        Err(e) => error!("Watch error: {}", e),
    })?;

    watcher.watch(&content_dir, RecursiveMode::NonRecursive)?;
    info!("Watching for changes. Press Ctrl+C to stop.");

    run_rebuild_loop(&rx, config, index, on_swap);
    Ok(())
}

/// Consume change events until the sender goes away. Each event waits for
/// a quiet period of `watch_debounce_ms`, then triggers one lenient re-scan.
pub fn run_rebuild_loop<F>(rx: &Receiver<Event>, config: &Config, index: &SharedIndex, mut on_swap: F)
where
    F: FnMut(&[PostSummary]),
{
    let debounce = config.watch_debounce();

    loop {
        match rx.recv_timeout(Duration::from_secs(1)) {
            Ok(event) => {
                debug!("File event: {:?}", event);

                // Drain the rest of the burst
                while rx.recv_timeout(debounce).is_ok() {}

                info!("Content change detected, re-scanning posts...");
                let previous = index.snapshot();
                let swapped = index.replace(rebuild_lenient(config, &previous));
                on_swap(swapped.as_slice());
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                debug!("File event channel closed, stopping watcher");
                break;
            }
        }
    }
}

/// Creation, modification or removal of a content file
fn is_content_change(event: &Event, extension: &str) -> bool {
    let relevant_kind = matches!(
        event.kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
    );

    relevant_kind
        && event.paths.iter().any(|path| {
            file_name_str(path).map_or(false, |name| has_content_extension(name, extension))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{AccessKind, CreateKind, ModifyKind};
    use std::fs;

    fn post(title: &str) -> String {
        format!(
            "---\ntitle: {}\ndate: 2023-03-01\nid: x\ntags: a\nlang: en\n---\nbody",
            title
        )
    }

    #[test]
    fn test_content_change_filter() {
        let modified = Event::new(EventKind::Modify(ModifyKind::Any)).add_path("blog/a.mdx".into());
        let created_txt = Event::new(EventKind::Create(CreateKind::File)).add_path("blog/a.txt".into());
        let accessed = Event::new(EventKind::Access(AccessKind::Any)).add_path("blog/a.mdx".into());

        assert!(is_content_change(&modified, "mdx"));
        assert!(!is_content_change(&created_txt, "mdx"));
        assert!(!is_content_change(&accessed, "mdx"));
    }

    #[test]
    fn test_shared_index_swaps_whole_snapshots() {
        let index = SharedIndex::default();
        let before = index.snapshot();
        assert!(before.is_empty());

        index.replace(Vec::new());
        // an old snapshot stays valid after the swap
        assert!(before.is_empty());
        assert!(!Arc::ptr_eq(&before, &index.snapshot()));
    }

    #[test]
    fn test_rebuild_loop_rescans_after_events() {
        let dir = tempfile::tempdir().unwrap();
        let content = dir.path().join("pages/blog");
        fs::create_dir_all(&content).unwrap();
        fs::write(content.join("a.mdx"), post("First")).unwrap();

        let config = Config {
            source: dir.path().to_path_buf(),
            watch_debounce_ms: 10,
            ..Config::default()
        };
        let index = SharedIndex::default();
        index.replace(build_index(&config).unwrap());

        fs::write(content.join("a.mdx"), post("Edited")).unwrap();
        fs::write(content.join("b.mdx"), post("Second")).unwrap();

        let (tx, rx) = channel();
        tx.send(Event::new(EventKind::Modify(ModifyKind::Any)).add_path(content.join("a.mdx"))).unwrap();
        tx.send(Event::new(EventKind::Create(CreateKind::File)).add_path(content.join("b.mdx"))).unwrap();
        drop(tx);

        let mut swaps = Vec::new();
        run_rebuild_loop(&rx, &config, &index, |posts| swaps.push(posts.len()));

        // both events land in one debounced burst
        assert_eq!(swaps, vec![2]);
        let snapshot = index.snapshot();
        let a = snapshot.iter().find(|p| p.slug == "a").unwrap();
        assert_eq!(a.data.get_str("title"), Some("Edited"));
    }
}
