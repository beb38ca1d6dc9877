//! Debounced watcher over a single theme file.

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};
use tracing::{debug, error, info, warn};
use usertour_common::ThemeError;

const DEBOUNCE: Duration = Duration::from_millis(500);

/// Watches a theme file for changes and sends notifications.
pub struct ThemeFileWatcher {
    path: PathBuf,
}

impl ThemeFileWatcher {
    /// Create a watcher for `path`. The file does not have to exist yet.
    pub fn new(path: PathBuf) -> Result<Self, ThemeError> {
        if !path.exists() {
            warn!(
                "theme file {} does not exist yet, will watch for creation",
                path.display()
            );
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Watch the file, sending `()` on `tx` once per burst of changes.
    ///
    /// Editors that save atomically (write + rename) produce several events
    /// per save; events within 500ms are coalesced. Runs until the
    /// notify channel closes.
    pub async fn watch(&self, tx: broadcast::Sender<()>) -> Result<(), ThemeError> {
        let watch_dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let file_name = self.path.file_name().map(|n| n.to_os_string()).unwrap_or_default();

        info!("starting theme file watcher for {}", self.path.display());

        let (notify_tx, mut notify_rx) = mpsc::channel::<()>(16);

        let mut watcher = RecommendedWatcher::new(
            move |result: Result<Event, notify::Error>| match result {
                Ok(event) => {
                    if !matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_)) {
                        return;
                    }
                    let ours = event
                        .paths
                        .iter()
                        .any(|p| p.file_name().map(|n| n == file_name).unwrap_or(false));
                    if ours {
                        debug!("theme file change detected");
                        let _ = notify_tx.try_send(());
                    }
                }
                Err(e) => error!("file watcher error: {e}"),
            },
            notify::Config::default(),
        )
        .map_err(|e| ThemeError::Watch(format!("failed to create watcher: {e}")))?;

        watcher
            .watch(&watch_dir, RecursiveMode::NonRecursive)
            .map_err(|e| {
                ThemeError::Watch(format!("failed to watch {}: {e}", watch_dir.display()))
            })?;

        while notify_rx.recv().await.is_some() {
            let debounce = tokio::time::sleep(DEBOUNCE);
            tokio::pin!(debounce);

            loop {
                tokio::select! {
                    _ = &mut debounce => break,
                    msg = notify_rx.recv() => {
                        if msg.is_none() {
                            return Ok(());
                        }
                    }
                }
            }

            info!("theme file changed, sending reload signal");
            if tx.send(()).is_err() {
                debug!("no receivers for theme reload signal");
            }
        }

        drop(watcher);
        Ok(())
    }
}
