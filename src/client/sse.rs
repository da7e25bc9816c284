//! Incremental `text/event-stream` decoder
//!
//! Bytes arrive in arbitrary chunks; the decoder keeps the partial line and
//! the pending `data` buffer between calls and returns the payload of every
//! frame completed by the chunk. Only the `data` field matters to the
//! consumer, so `event`, `id`, `retry` and comment lines are skipped.
//!
//! Buffered bytes are capped: a line or a frame's data that outgrows the
//! limit fails the stream as a malformed element.

use crate::client::ClientError;

/// Largest frame accepted by default
pub const DEFAULT_MAX_FRAME_BYTES: usize = 64 * 1024;

#[derive(Debug)]
pub struct SseDecoder {
    line: Vec<u8>,
    data: Option<String>,
    // Last chunk ended in '\r'; a leading '\n' in the next one belongs to it
    skip_lf: bool,
    max_frame: usize,
}

impl SseDecoder {
    pub fn new() -> Self {
        Self::with_max_frame(DEFAULT_MAX_FRAME_BYTES)
    }

    /// Decoder that rejects lines or frame data larger than `max_frame` bytes
    pub fn with_max_frame(max_frame: usize) -> Self {
        Self {
            line: Vec::new(),
            data: None,
            skip_lf: false,
            max_frame,
        }
    }

    fn too_large(&self) -> ClientError {
        ClientError::malformed(format!("frame exceeds {} bytes", self.max_frame))
    }

    /// Feed one chunk, returning the data of each frame it completes
    pub fn decode(&mut self, chunk: &[u8]) -> Result<Vec<String>, ClientError> {
        let mut frames = Vec::new();

        for &byte in chunk {
            if self.skip_lf {
                self.skip_lf = false;
                if byte == b'\n' {
                    continue;
                }
            }

            match byte {
                b'\n' => self.end_line(&mut frames)?,
                b'\r' => {
                    self.end_line(&mut frames)?;
                    self.skip_lf = true;
                }
                _ => {
                    if self.line.len() >= self.max_frame {
                        return Err(self.too_large());
                    }
                    self.line.push(byte);
                }
            }
        }

        Ok(frames)
    }

    fn end_line(&mut self, frames: &mut Vec<String>) -> Result<(), ClientError> {
        let line = std::mem::take(&mut self.line);

        if line.is_empty() {
            // Blank line dispatches; frames without data are dropped
            if let Some(data) = self.data.take() {
                frames.push(data);
            }
            return Ok(());
        }

        let line = String::from_utf8(line)
            .map_err(|e| ClientError::malformed(format!("invalid UTF-8 in stream: {e}")))?;

        if line.starts_with(':') {
            return Ok(());
        }

        let (field, value) = match line.split_once(':') {
            Some((field, value)) => (field, value.strip_prefix(' ').unwrap_or(value)),
            None => (line.as_str(), ""),
        };

        if field == "data" {
            let buffered = self.data.as_ref().map_or(0, |data| data.len() + 1);
            if buffered + value.len() > self.max_frame {
                return Err(self.too_large());
            }
            match &mut self.data {
                Some(data) => {
                    data.push('\n');
                    data.push_str(value);
                }
                None => self.data = Some(value.to_string()),
            }
        }

        Ok(())
    }
}

impl Default for SseDecoder {
    fn default() -> Self {
        Self::new()
    }
}
