//! External character-source abstraction. The lexer itself works over a
//! fully materialized `&[u8]` (bumpalo-backed AST nodes borrow directly from
//! it for the lifetime of a parse), but a host that streams source text from
//! a file or socket implements `CharSource` and slurps it once up front via
//! [`read_to_end`].

use std::io;

/// Pull-based byte source. `read` fills `buffer[..]` starting at `offset`
/// within the source (not within `buffer`) and returns the number of bytes
/// written, or `0` at end of input. Mirrors a `Read`-like contract but keeps
/// the lexer decoupled from `std::io` so a caller can back it with anything
/// (a mapped file, a rope, a network stream).
pub trait CharSource {
    fn read(&mut self, buffer: &mut [u8], offset: usize, max: usize) -> io::Result<usize>;
}

impl<R: io::Read> CharSource for R {
    fn read(&mut self, buffer: &mut [u8], _offset: usize, max: usize) -> io::Result<usize> {
        let n = max.min(buffer.len());
        io::Read::read(self, &mut buffer[..n])
    }
}

/// Drains a `CharSource` into a single owned buffer. The lexer needs the
/// whole unit up front (PHP's grammar requires unbounded lookahead for
/// heredocs and nested interpolation), so every host eventually funnels
/// through this before constructing a `Lexer`.
pub fn read_to_end<S: CharSource>(source: &mut S) -> io::Result<std::vec::Vec<u8>> {
    let mut out = std::vec::Vec::new();
    let mut chunk = [0u8; 8192];
    let mut offset = 0usize;
    loop {
        let len = chunk.len();
        let n = source.read(&mut chunk, offset, len)?;
        if n == 0 {
            break;
        }
        out.extend_from_slice(&chunk[..n]);
        offset += n;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_a_slice_source_to_end() {
        let mut cursor = io::Cursor::new(b"<?php echo 1;".to_vec());
        let bytes = read_to_end(&mut cursor).unwrap();
        assert_eq!(bytes, b"<?php echo 1;");
    }
}
