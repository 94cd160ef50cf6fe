use std::io::{self, BufRead};

/// Read one line of input, without the trailing newline. Bytes that are not
/// valid UTF-8 are replaced instead of failing the read. Returns None at EOF.
pub fn read_command_line<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    if reader.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    let line = String::from_utf8_lossy(&buf);
    if let std::borrow::Cow::Owned(_) = line {
        log::warn!("Input line was not valid UTF-8; invalid bytes replaced");
    }
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}
