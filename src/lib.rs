pub mod adapters;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub mod config;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{IoSink, VecSink};
pub use core::engine::{RenderEngine, RenderMode};
pub use core::renderer::{list_recent_photos, recent_date_cutoff, render_person};
pub use domain::model::{Person, Photo};
pub use domain::ports::MarkupSink;
pub use utils::error::{RenderError, Result};
