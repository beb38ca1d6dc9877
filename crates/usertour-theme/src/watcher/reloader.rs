//! Reloads a theme file into a preview pipeline whenever it changes.

use std::path::{Path, PathBuf};
use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;
use tracing::{error, info, warn};
use usertour_common::ThemeError;

use super::file_watcher::ThemeFileWatcher;
use crate::css::SurfaceType;
use crate::preview::{PreviewFrame, PreviewPipeline};
use crate::schema::ThemeSettings;
use crate::store;
use crate::validation;

/// Live preview of a theme file on disk.
pub struct ThemeReloader {
    path: PathBuf,
}

impl ThemeReloader {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the file once and start watching it.
    ///
    /// Returns the initial frame and a receiver that sees a new frame every
    /// time the file changes in a way that alters the surface's CSS. If the
    /// file cannot be loaded, the defaults are rendered until it can.
    pub async fn start(self, surface: SurfaceType) -> (PreviewFrame, watch::Receiver<PreviewFrame>) {
        let (frame, rx, _task) = self.spawn(surface).await;
        (frame, rx)
    }

    /// [`start`](Self::start), also returning the reload task. The task ends
    /// once every receiver has been dropped.
    pub(crate) async fn spawn(
        self,
        surface: SurfaceType,
    ) -> (PreviewFrame, watch::Receiver<PreviewFrame>, JoinHandle<()>) {
        let initial = match load(&self.path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("failed to load theme: {e}, using defaults");
                ThemeSettings::default()
            }
        };

        let pipeline = PreviewPipeline::with_settings(initial, surface);
        let frame = pipeline.current();
        let rx = pipeline.subscribe();

        let task = tokio::spawn(async move {
            self.run_watch_loop(pipeline).await;
        });

        (frame, rx, task)
    }

    async fn run_watch_loop(&self, mut pipeline: PreviewPipeline) {
        let watcher = match ThemeFileWatcher::new(self.path.clone()) {
            Ok(w) => w,
            Err(e) => {
                error!("failed to create theme watcher: {e}");
                return;
            }
        };

        let (change_tx, mut change_rx) = broadcast::channel::<()>(16);
        let watch_task = tokio::spawn(async move {
            if let Err(e) = watcher.watch(change_tx).await {
                error!("theme watcher error: {e}");
            }
        });

        loop {
            let event = tokio::select! {
                () = pipeline.closed() => {
                    info!("all preview receivers dropped, stopping reloader");
                    break;
                }
                event = change_rx.recv() => event,
            };
            match event {
                Ok(()) => {
                    info!("reloading theme from {}", self.path.display());
                    match load(&self.path) {
                        Ok(settings) => {
                            pipeline.update(&settings);
                        }
                        Err(e) => warn!("theme reload failed: {e}"),
                    }
                }
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    warn!("theme watcher lagged by {n} events");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    info!("theme watcher channel closed");
                    break;
                }
            }
        }

        watch_task.abort();
    }
}

fn load(path: &Path) -> Result<ThemeSettings, ThemeError> {
    let settings = store::load_settings_from_path(path)?;
    if let Err(e) = validation::validate_settings(&settings) {
        warn!("{e}");
    }
    Ok(settings)
}
