//! Ordered primitive stream contract used for map persistence
//!
//! Persistence only needs to write and read signed integers in order. Any
//! `std::io::Write`/`std::io::Read` implementor satisfies the contract with
//! 4-byte little-endian integers, so files, sockets and in-memory buffers all
//! work without adapters.

use std::io::{Read, Write};

use crate::io::error::Result;

/// Sink accepting integers in order
pub trait OutputSerialStream {
    /// Append one integer to the stream
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error when the write fails
    fn write_int(&mut self, value: i32) -> std::io::Result<()>;
}

/// Source yielding integers in the order they were written
pub trait InputSerialStream {
    /// Read the next integer from the stream
    ///
    /// # Errors
    ///
    /// Returns `UnexpectedEof` when the stream ends mid-integer or before it
    fn read_int(&mut self) -> std::io::Result<i32>;
}

impl<W: Write> OutputSerialStream for W {
    fn write_int(&mut self, value: i32) -> std::io::Result<()> {
        self.write_all(&value.to_le_bytes())
    }
}

impl<R: Read> InputSerialStream for R {
    fn read_int(&mut self) -> std::io::Result<i32> {
        let mut buffer = [0_u8; 4];
        self.read_exact(&mut buffer)?;
        Ok(i32::from_le_bytes(buffer))
    }
}

/// State that round-trips through an ordered integer stream
pub trait Serializable {
    /// Write this value to the stream
    ///
    /// # Errors
    ///
    /// Returns [`crate::MapError::Stream`] when the stream rejects a write
    fn serialize(&self, stream: &mut dyn OutputSerialStream) -> Result<()>;

    /// Restore this value from the stream
    ///
    /// # Errors
    ///
    /// Returns [`crate::MapError::Stream`] when the stream is truncated or
    /// unreadable, or a validation error when the data is inconsistent
    fn unserialize(&mut self, stream: &mut dyn InputSerialStream) -> Result<()>;
}
