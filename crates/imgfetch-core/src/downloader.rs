//! Single-stream HTTP GET downloader.
//!
//! Streams the response body into a freshly created file in bounded
//! chunks. No ranges, no retries; one URL maps to one GET.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Receive buffer cap so the body lands in writes of at most 1 KiB.
const CHUNK_SIZE: usize = 1024;
/// Bound on connect time.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
/// Abort when the transfer drops below one byte/sec for this long
/// (read-timeout equivalent for a streamed response).
const STALL_TIMEOUT: Duration = Duration::from_secs(10);

/// Error from a single body download: curl failure, non-2xx status, or
/// disk write failure. Typed so callers can tell transport from I/O.
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    #[error(transparent)]
    Curl(#[from] curl::Error),
    #[error("GET returned HTTP {0}")]
    Http(u32),
    #[error("write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Downloads `url` into a new file at `path`, streaming the body in
/// chunks of at most `CHUNK_SIZE` bytes. Fails if the file already
/// exists. Returns the number of bytes written.
///
/// Follows redirects. A failed transfer leaves any partially written
/// file in place; nothing is cleaned up or retried.
pub fn download_to_file(url: &str, path: &Path) -> Result<u64, DownloadError> {
    let mut file = File::options()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| DownloadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

    let mut written: u64 = 0;
    let mut write_err: Option<io::Error> = None;

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.buffer_size(CHUNK_SIZE)?;
    easy.connect_timeout(CONNECT_TIMEOUT)?;
    easy.low_speed_limit(1)?;
    easy.low_speed_time(STALL_TIMEOUT)?;

    let performed = {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| match file.write_all(data) {
            Ok(()) => {
                written += data.len() as u64;
                Ok(data.len())
            }
            Err(e) => {
                write_err = Some(e);
                Ok(0) // abort transfer
            }
        })?;
        transfer.perform()
    };

    // A write failure surfaces through curl as an aborted transfer;
    // report the underlying I/O error instead.
    if let Some(e) = write_err {
        return Err(DownloadError::Io {
            path: path.to_path_buf(),
            source: e,
        });
    }
    performed?;

    let code = easy.response_code()?;
    if code < 200 || code >= 300 {
        return Err(DownloadError::Http(code));
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refuses_to_overwrite_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("cat.png");
        std::fs::write(&target, b"original").unwrap();

        let err = download_to_file("http://127.0.0.1:1/cat.png", &target).unwrap_err();
        match err {
            DownloadError::Io { source, .. } => {
                assert_eq!(source.kind(), io::ErrorKind::AlreadyExists);
            }
            other => panic!("expected Io error, got {:?}", other),
        }
        // The existing bytes are untouched.
        assert_eq!(std::fs::read(&target).unwrap(), b"original");
    }
}
