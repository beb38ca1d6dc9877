use serde_json::Value;
use tokio::sync::watch;
use tracing::debug;

use crate::css::{to_style_tokens, SurfaceType};
use crate::resolve::resolve;
use crate::schema::ThemeSettings;

/// One rendered preview: the resolved tree and its style tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFrame {
    pub surface: SurfaceType,
    pub resolved: ThemeSettings,
    pub css: String,
}

impl PreviewFrame {
    fn render(settings: &ThemeSettings, surface: SurfaceType) -> Self {
        let resolved = resolve(settings);
        let css = to_style_tokens(&resolved, Some(surface));
        Self {
            surface,
            resolved,
            css,
        }
    }
}

/// Keeps the latest settings and publishes preview frames for one surface.
pub struct PreviewPipeline {
    settings: ThemeSettings,
    tx: watch::Sender<PreviewFrame>,
}

impl PreviewPipeline {
    /// Start a pipeline rendering the default settings on `surface`.
    pub fn new(surface: SurfaceType) -> Self {
        Self::with_settings(ThemeSettings::default(), surface)
    }

    pub fn with_settings(settings: ThemeSettings, surface: SurfaceType) -> Self {
        let frame = PreviewFrame::render(&settings, surface);
        let (tx, _rx) = watch::channel(frame);
        Self { settings, tx }
    }

    pub fn subscribe(&self) -> watch::Receiver<PreviewFrame> {
        self.tx.subscribe()
    }

    /// The most recently published frame.
    pub fn current(&self) -> PreviewFrame {
        self.tx.borrow().clone()
    }

    pub fn surface(&self) -> SurfaceType {
        self.tx.borrow().surface
    }

    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }

    /// Resolves once every subscriber has been dropped.
    pub async fn closed(&self) {
        self.tx.closed().await
    }

    pub fn settings(&self) -> &ThemeSettings {
        &self.settings
    }

    /// Render `settings` and publish if the CSS changed.
    ///
    /// The stored frame always tracks the latest resolved tree; subscribers
    /// are only notified when the CSS or surface differs. Returns whether
    /// they were notified.
    pub fn update(&mut self, settings: &ThemeSettings) -> bool {
        self.settings = settings.clone();
        self.publish(self.surface())
    }

    /// Merge a partial settings document over the defaults, then [`update`](Self::update).
    pub fn update_partial(&mut self, partial: &Value) -> bool {
        let settings = ThemeSettings::from_partial(partial);
        self.update(&settings)
    }

    /// Switch the mock surface and re-publish.
    pub fn set_surface(&mut self, surface: SurfaceType) -> bool {
        self.publish(surface)
    }

    fn publish(&self, surface: SurfaceType) -> bool {
        let frame = PreviewFrame::render(&self.settings, surface);
        let changed = self.tx.send_if_modified(|current| {
            let visible = current.css != frame.css || current.surface != frame.surface;
            *current = frame;
            visible
        });
        if changed {
            debug!(surface = %surface, "preview frame published");
        }
        changed
    }
}
