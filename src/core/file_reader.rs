//! Best-effort text reading
//!
//! Files are decoded as UTF-8 with invalid byte sequences dropped entirely,
//! so a stray binary run never aborts a scan and never leaves replacement
//! characters in the output. A file that cannot be opened at all is an error
//! for the caller to report and skip.

use std::fs;
use std::io;
use std::path::Path;

/// Read a file as text, dropping undecodable byte sequences
pub fn read_text(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(decode_dropping_invalid(&bytes))
}

/// Decode UTF-8, skipping invalid sequences instead of replacing them
fn decode_dropping_invalid(mut bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());

    loop {
        match std::str::from_utf8(bytes) {
            Ok(valid) => {
                out.push_str(valid);
                break;
            }
            Err(err) => {
                let valid_up_to = err.valid_up_to();
                if let Ok(valid) = std::str::from_utf8(&bytes[..valid_up_to]) {
                    out.push_str(valid);
                }

                // error_len is None for a truncated sequence at the end of input
                let skip = match err.error_len() {
                    Some(len) => len,
                    None => break,
                };
                bytes = &bytes[valid_up_to + skip..];
            }
        }
    }

    out
}
