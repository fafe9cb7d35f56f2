use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};

use flate2::read::MultiGzDecoder;
use tracing::debug;

use crate::application::errors::FileError;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Read a gzip-compressed file and return the fully decompressed bytes.
///
/// Concatenated gzip members are decoded as one stream.
pub fn read_compressed(path: &Path) -> Result<Vec<u8>, FileError> {
    if !path.exists() {
        return Err(FileError::NotFound(path.to_path_buf()));
    }

    let compressed = std::fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => FileError::NotFound(path.to_path_buf()),
        _ => FileError::Io(e),
    })?;

    decompress(path, &compressed)
}

/// [`read_compressed`] on the blocking thread pool
pub async fn read_compressed_async(path: &Path) -> Result<Vec<u8>, FileError> {
    let owned: PathBuf = path.to_path_buf();
    tokio::task::spawn_blocking(move || read_compressed(&owned))
        .await
        .map_err(|e| FileError::Io(std::io::Error::other(e)))?
}

fn decompress(path: &Path, compressed: &[u8]) -> Result<Vec<u8>, FileError> {
    // MultiGzDecoder yields an empty stream for empty input, so check the header ourselves
    if compressed.len() < GZIP_MAGIC.len() || compressed[..2] != GZIP_MAGIC {
        return Err(FileError::InvalidGzip {
            path: path.to_path_buf(),
            message: "missing gzip header".to_string(),
        });
    }

    let mut decoder = MultiGzDecoder::new(compressed);
    let mut decompressed = Vec::with_capacity(compressed.len() * 4);
    decoder
        .read_to_end(&mut decompressed)
        .map_err(|e| match e.kind() {
            ErrorKind::UnexpectedEof => FileError::Truncated(path.to_path_buf()),
            ErrorKind::InvalidInput | ErrorKind::InvalidData => FileError::InvalidGzip {
                path: path.to_path_buf(),
                message: e.to_string(),
            },
            _ => FileError::Io(e),
        })?;

    debug!(
        path = %path.display(),
        compressed = compressed.len(),
        decompressed = decompressed.len(),
        "Decompressed project file"
    );

    Ok(decompressed)
}
