//! Message framing for newline-delimited JSON.

/// The message carried by one input line, or `None` for a blank line.
pub fn message_in(line: &[u8]) -> Option<&[u8]> {
    let start = line.iter().position(|b| !b.is_ascii_whitespace())?;
    let end = line.iter().rposition(|b| !b.is_ascii_whitespace())?;
    Some(&line[start..=end])
}

/// Terminate a rendered line with a newline.
pub fn frame_line(mut text: String) -> String {
    text.push('\n');
    text
}
