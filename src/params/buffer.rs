use std::io;

use crate::http::Payload;

/// Drains `payload` into memory by letting it write itself once into a buffer.
///
/// The payload is only borrowed, so it can still be written when the request
/// is sent.
pub fn body_buffer(payload: &Payload) -> io::Result<Vec<u8>> {
    let mut buffer = Vec::new();
    payload.write_to(&mut buffer)?;
    Ok(buffer)
}

/// Text of drained bytes. Invalid UTF-8 sequences become U+FFFD.
pub fn utf8(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    }
}
