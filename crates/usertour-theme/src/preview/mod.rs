//! Live preview pipeline.
//!
//! Settings flow through merge, resolve and serialize, and the resulting
//! frame is published on a [`tokio::sync::watch`] channel. Subscribers are
//! only woken when the generated CSS actually changes.

mod pipeline;


pub use pipeline::{PreviewFrame, PreviewPipeline};
