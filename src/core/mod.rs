pub mod engine;
pub mod renderer;

pub use crate::domain::model::{Person, Photo};
pub use crate::domain::ports::MarkupSink;
pub use crate::utils::error::Result;
