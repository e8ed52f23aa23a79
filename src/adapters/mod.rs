// Adapters layer: concrete MarkupSink implementations for external destinations.

use crate::domain::ports::MarkupSink;
use crate::utils::error::Result;
use std::io::Write;

/// Forwards markup chunks to any `io::Write` destination (file, stdout,
/// in-memory buffer). Flushing and closing remain the caller's job.
pub struct IoSink<W: Write> {
    writer: W,
}

impl<W: Write> IoSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> MarkupSink for IoSink<W> {
    fn write_chunk(&mut self, chunk: &str) -> Result<()> {
        self.writer.write_all(chunk.as_bytes())?;
        Ok(())
    }
}

/// Captures chunks in memory, one entry per write, so tests can assert
/// on call count and call order.
#[derive(Debug, Default)]
pub struct VecSink {
    chunks: Vec<String>,
}

impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn chunks(&self) -> &[String] {
        &self.chunks
    }
}

impl MarkupSink for VecSink {
    fn write_chunk(&mut self, chunk: &str) -> Result<()> {
        self.chunks.push(chunk.to_string());
        Ok(())
    }
}
