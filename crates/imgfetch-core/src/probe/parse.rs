//! Parse HTTP response header lines into ProbeResult.

use super::ProbeResult;

/// Parse collected header lines into ProbeResult.
///
/// A followed redirect yields one header block per hop, each introduced by
/// an `HTTP/` status line; only the final block counts.
pub(crate) fn parse_headers(lines: &[String]) -> ProbeResult {
    let mut content_type = None;
    let mut content_length = None;

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with("HTTP/") {
            content_type = None;
            content_length = None;
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            let name = name.trim();
            let value = value.trim();
            if name.eq_ignore_ascii_case("content-type") {
                content_type = Some(value.to_string());
            }
            if name.eq_ignore_ascii_case("content-length") {
                content_length = value.parse::<u64>().ok();
            }
        }
    }

    ProbeResult {
        content_type,
        content_length,
    }
}
