// crates/engine/src/formatter.rs
use std::io::{self, Write};

/// Split a line on its first `:` into `(prefix, remainder)`.
///
/// A single space right after the colon belongs to the separator, so
/// `a@b.com: x` yields `x`, not ` x`. This is deliberate: `email: rest`
/// records come out as `email<TAB>rest`. Any further whitespace is kept.
#[must_use]
pub fn split_record(line: &[u8]) -> Option<(&[u8], &[u8])> {
    let colon = line.iter().position(|&b| b == b':')?;
    let prefix = &line[..colon];
    let rest = &line[colon + 1..];
    let rest = rest.strip_prefix(b" ").unwrap_or(rest);
    Some((prefix, rest))
}

/// Write one output record: `prefix\tremainder\n`, or the line verbatim plus
/// `\n` when it has no colon.
///
/// # Errors
/// Propagates write errors from `out`.
pub fn write_record<W: Write + ?Sized>(out: &mut W, line: &[u8]) -> io::Result<()> {
    match split_record(line) {
        Some((prefix, rest)) => {
            out.write_all(prefix)?;
            out.write_all(b"\t")?;
            out.write_all(rest)?;
        }
        None => out.write_all(line)?,
    }
    out.write_all(b"\n")
}
