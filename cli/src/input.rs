//! Stdin handling.

use std::io::{self, IsTerminal, Read};

use tracing::debug;

/// Read everything piped into stdin as text.
///
/// Returns `None` when stdin is an interactive terminal, since there is
/// nothing to wait for.
pub fn read_piped_input() -> io::Result<Option<String>> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }

    let mut input = Vec::new();
    stdin.lock().read_to_end(&mut input)?;
    debug!(bytes = input.len(), "read piped input");

    Ok(Some(decode(input)))
}

/// Invalid UTF-8 sequences become U+FFFD.
fn decode(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_keeps_valid_text() {
        assert_eq!(decode(b"hello\n".to_vec()), "hello\n");
        assert_eq!(decode("héllo █".as_bytes().to_vec()), "héllo █");
    }

    #[test]
    fn test_decode_replaces_invalid_utf8() {
        assert_eq!(decode(vec![b'a', 0xff, b'b']), "a\u{FFFD}b");
        assert_eq!(decode(vec![0xe2, 0x96]), "\u{FFFD}");
    }
}
