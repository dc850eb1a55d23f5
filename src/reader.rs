//! Reads the first line of an input stream.

use crate::error::ReadLineError;
use bytes::{BufMut, BytesMut};
use std::io::{ErrorKind, Read};

const CHUNK_SIZE: usize = 1024;

/// Reads `reader` until the first `\n` (or end of stream) and returns the
/// text before it. The newline itself is not included.
///
/// Reading stops after the chunk that contains the newline, so bytes past
/// it may already be consumed from the stream.
///
/// # Examples
///
/// ```
/// use argv_split::reader::read_first_line;
///
/// let line = read_first_line("echo \"a b\"\nnext".as_bytes()).unwrap();
/// assert_eq!(line, "echo \"a b\"");
/// ```
pub fn read_first_line<R: Read>(mut reader: R) -> Result<String, ReadLineError> {
    let mut buf = BytesMut::with_capacity(CHUNK_SIZE);
    let mut chunk = [0u8; CHUNK_SIZE];

    loop {
        let n = match reader.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        buf.put_slice(&chunk[..n]);
        if chunk[..n].contains(&b'\n') {
            break;
        }
    }

    let end = buf.iter().position(|&b| b == b'\n').unwrap_or(buf.len());
    // Decode the whole line at once so a character split across reads stays intact.
    let line = std::str::from_utf8(&buf[..end])?;
    Ok(line.to_string())
}
