use crate::core::renderer::{list_recent_photos, render_person};
use crate::domain::model::{Person, Photo};
use crate::domain::ports::MarkupSink;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum RenderMode {
    /// Render one person's profile fragment
    Person,
    /// Render the recent-photos listing
    Recent,
}

/// Drives a render run end to end: reads a JSON input file, decodes it
/// per the requested mode, and streams the markup into the sink.
pub struct RenderEngine<S: MarkupSink> {
    sink: S,
}

// Counts chunks on their way into the real sink so `run` can report
// how many writes a render produced.
struct CountingSink<'a, S: MarkupSink + ?Sized> {
    inner: &'a mut S,
    chunks: usize,
}

impl<S: MarkupSink + ?Sized> MarkupSink for CountingSink<'_, S> {
    fn write_chunk(&mut self, chunk: &str) -> Result<()> {
        self.inner.write_chunk(chunk)?;
        self.chunks += 1;
        Ok(())
    }
}

impl<S: MarkupSink> RenderEngine<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Returns the number of chunks written to the sink.
    pub fn run(&mut self, mode: RenderMode, input_path: &Path) -> Result<usize> {
        tracing::info!("Reading input from {}", input_path.display());
        let raw = fs::read_to_string(input_path)?;

        let mut counting = CountingSink {
            inner: &mut self.sink,
            chunks: 0,
        };

        match mode {
            RenderMode::Person => {
                let person: Person = serde_json::from_str(&raw)?;
                tracing::info!("Rendering profile for {}", person.name);
                render_person(&mut counting, &person)?;
            }
            RenderMode::Recent => {
                let photos: Vec<Photo> = serde_json::from_str(&raw)?;
                tracing::info!("Rendering recent photos from {} candidates", photos.len());
                list_recent_photos(&mut counting, &photos)?;
            }
        }

        let written = counting.chunks;
        tracing::info!("Wrote {} markup chunks", written);
        Ok(written)
    }
}
