//! Buffered input and output with transparent decompression
//!
//! Anchor and BED files are often shipped gzip or bzip2 compressed. The
//! format is detected by extension first, then by magic bytes:
//! - `.gz` or `1f 8b`
//! - `.bz2` or `BZh` (`42 5a 68`)
//! - plain text otherwise

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Read};
use std::path::Path;

/// Default buffer size for readers and writers (128KB)
pub const DEFAULT_BUFFER_SIZE: usize = 128 * 1024;

/// Compression format of an input file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionFormat {
    /// Plain text (uncompressed)
    Plain,
    /// Gzip compressed (.gz)
    Gzip,
    /// Bzip2 compressed (.bz2)
    Bzip2,
}

/// Detect compression format from file path and/or content
///
/// The extension decides when it is `.gz` or `.bz2`; the file is only
/// opened otherwise. Files shorter than a magic number are plain text.
pub fn detect_compression(path: &Path) -> io::Result<CompressionFormat> {
    // Extension first, no I/O needed
    match path.extension().and_then(|e| e.to_str()) {
        Some("gz") => return Ok(CompressionFormat::Gzip),
        Some("bz2") => return Ok(CompressionFormat::Bzip2),
        _ => {}
    }

    // Then the leading magic bytes
    let mut magic = [0u8; 3];
    let bytes_read = File::open(path)?.read(&mut magic)?;

    let format = match &magic[..bytes_read] {
        [0x1f, 0x8b, ..] => CompressionFormat::Gzip,
        [b'B', b'Z', b'h'] => CompressionFormat::Bzip2,
        _ => CompressionFormat::Plain,
    };
    log::trace!("{}: detected {:?}", path.display(), format);
    Ok(format)
}

/// Open a text file for buffered line reading, decompressing if needed
pub fn open_reader(path: &Path) -> io::Result<Box<dyn BufRead>> {
    let format = detect_compression(path)?;
    let file = File::open(path)?;

    let reader: Box<dyn BufRead> = match format {
        CompressionFormat::Gzip => Box::new(BufReader::with_capacity(
            DEFAULT_BUFFER_SIZE,
            flate2::read::MultiGzDecoder::new(file),
        )),
        CompressionFormat::Bzip2 => Box::new(BufReader::with_capacity(
            DEFAULT_BUFFER_SIZE,
            bzip2::read::BzDecoder::new(file),
        )),
        CompressionFormat::Plain => Box::new(BufReader::with_capacity(DEFAULT_BUFFER_SIZE, file)),
    };
    Ok(reader)
}

/// Create a buffered writer, truncating any existing file
pub fn create_writer(path: &Path) -> io::Result<BufWriter<File>> {
    let file = File::create(path)?;
    Ok(BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file))
}
