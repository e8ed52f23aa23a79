use crate::utils::error::Result;

/// Destination for ordered markup writes. Implementations own the
/// underlying resource; the renderer only issues sequential chunks and
/// never closes the sink.
pub trait MarkupSink {
    fn write_chunk(&mut self, chunk: &str) -> Result<()>;
}
