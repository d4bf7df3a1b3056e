//! Streaming records through `std::io`.

use std::io::{self, Read, Write};

use tracing::trace;

use crate::{PackError, Result, Schema, Value};

/// Packs records against a schema and writes them to `W`.
pub struct PackWriter<'s, W: Write> {
    schema: &'s Schema,
    writer: W,
    records: usize,
}

impl<'s, W: Write> PackWriter<'s, W> {
    pub fn new(schema: &'s Schema, writer: W) -> Self {
        Self {
            schema,
            writer,
            records: 0,
        }
    }

    /// Pack and write one record. Nothing is written if packing fails.
    pub fn write(&mut self, args: &[Value]) -> Result<()> {
        let bytes = self.schema.pack(args)?;
        self.writer.write_all(&bytes)?;
        self.records += 1;
        Ok(())
    }

    pub fn write_batch<'a, I>(&mut self, records: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a [Value]>,
    {
        for args in records {
            self.write(args)?;
        }
        Ok(())
    }

    /// Records written so far.
    pub fn records(&self) -> usize {
        self.records
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    /// Flush and hand back the writer.
    pub fn into_inner(mut self) -> Result<W> {
        self.writer.flush()?;
        trace!(records = self.records, format = %self.schema.format(), "closed pack writer");
        Ok(self.writer)
    }
}

/// Reads schema-sized records from `R` and unpacks them.
pub struct UnpackReader<'s, R: Read> {
    schema: &'s Schema,
    reader: R,
    buf: Vec<u8>,
}

impl<'s, R: Read> UnpackReader<'s, R> {
    pub fn new(schema: &'s Schema, reader: R) -> Self {
        Self {
            schema,
            reader,
            buf: vec![0u8; schema.size()],
        }
    }

    /// Next record, or `Ok(None)` at a clean end of input.
    ///
    /// A stream ending partway through a record is an
    /// [`UnexpectedEof`](io::ErrorKind::UnexpectedEof) IO error.
    pub fn read(&mut self) -> Result<Option<Vec<Value>>> {
        if self.buf.is_empty() {
            return Err(PackError::ZeroSizedRecord);
        }
        let mut filled = 0;
        while filled < self.buf.len() {
            match self.reader.read(&mut self.buf[filled..]) {
                Ok(0) if filled == 0 => return Ok(None),
                Ok(0) => {
                    return Err(io::Error::new(
                        io::ErrorKind::UnexpectedEof,
                        format!("record truncated after {filled} of {} bytes", self.buf.len()),
                    )
                    .into());
                }
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e.into()),
            }
        }
        self.schema.unpack(&self.buf).map(Some)
    }

    /// Read up to `count` records, stopping early at end of input.
    pub fn read_batch(&mut self, count: usize) -> Result<Vec<Vec<Value>>> {
        let mut records = Vec::with_capacity(count);
        while records.len() < count {
            match self.read()? {
                Some(record) => records.push(record),
                None => break,
            }
        }
        Ok(records)
    }
}
