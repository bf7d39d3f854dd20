//! Split a large CSV file into fixed-size chunks.
//!
//! Every chunk repeats the header row, so each one can be processed on its
//! own.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::{Error, Result};

/// Where and how to write chunks.
#[derive(Debug, Clone)]
pub struct SplitOptions {
    /// Maximum data rows per chunk, header excluded
    pub rows_per_chunk: usize,
    /// Directory chunks are written to; created if missing
    pub output_dir: PathBuf,
    /// Chunk file names are `<prefix>_<n>.csv`, counting from 1
    pub prefix: String,
}

impl SplitOptions {
    /// Options with the default `chunk` prefix.
    pub fn new(rows_per_chunk: usize, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            rows_per_chunk,
            output_dir: output_dir.into(),
            prefix: "chunk".to_string(),
        }
    }

    /// Set the file name prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    fn chunk_path(&self, index: usize) -> PathBuf {
        self.output_dir.join(format!("{}_{}.csv", self.prefix, index))
    }
}

/// Split `input` into chunks and return the written paths in order.
///
/// The first row is the header. Records are streamed, so the input is never
/// held in memory. An input with no data rows writes nothing.
pub fn split_csv<R: Read>(input: R, options: &SplitOptions) -> Result<Vec<PathBuf>> {
    if options.rows_per_chunk == 0 {
        return Err(Error::InvalidInput(
            "rows_per_chunk must be greater than zero".to_string(),
        ));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);
    let header = reader.byte_headers()?.clone();

    fs::create_dir_all(&options.output_dir)?;

    let mut written = Vec::new();
    let mut writer: Option<csv::Writer<fs::File>> = None;
    let mut rows_in_chunk = 0;

    for record in reader.byte_records() {
        let record = record?;

        if writer.is_none() || rows_in_chunk == options.rows_per_chunk {
            if let Some(mut full) = writer.take() {
                full.flush()?;
            }
            let path = options.chunk_path(written.len() + 1);
            debug!(path = %path.display(), "starting chunk");

            let mut next = csv::WriterBuilder::new().flexible(true).from_path(&path)?;
            next.write_byte_record(&header)?;
            writer = Some(next);
            written.push(path);
            rows_in_chunk = 0;
        }

        if let Some(ref mut current) = writer {
            current.write_byte_record(&record)?;
            rows_in_chunk += 1;
        }
    }

    if let Some(mut last) = writer {
        last.flush()?;
    }

    info!(chunks = written.len(), dir = %options.output_dir.display(), "split complete");
    Ok(written)
}

/// [`split_csv`] reading from a file.
pub fn split_csv_file(path: impl AsRef<Path>, options: &SplitOptions) -> Result<Vec<PathBuf>> {
    let file = fs::File::open(path.as_ref())?;
    split_csv(file, options)
}
