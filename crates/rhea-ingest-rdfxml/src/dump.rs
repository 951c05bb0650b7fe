//! Reading the dump file (`rhea.rdf` or `rhea.rdf.gz`).

use crate::error::DecodeError;
use flate2::read::GzDecoder;
use std::io::Read;
use std::path::Path;

pub const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Read a dump, gunzipping it when it starts with the gzip magic bytes.
pub fn read_dump(path: &Path) -> Result<Vec<u8>, DecodeError> {
    let bytes = std::fs::read(path)?;
    let compressed = bytes.starts_with(&GZIP_MAGIC);
    let bytes = decompress_if_gzip(bytes)?;
    tracing::debug!(
        path = %path.display(),
        compressed,
        bytes = bytes.len(),
        "read rhea dump"
    );
    Ok(bytes)
}

pub fn decompress_if_gzip(bytes: Vec<u8>) -> Result<Vec<u8>, DecodeError> {
    if !bytes.starts_with(&GZIP_MAGIC) {
        return Ok(bytes);
    }
    let mut out = Vec::new();
    GzDecoder::new(bytes.as_slice()).read_to_end(&mut out)?;
    Ok(out)
}
