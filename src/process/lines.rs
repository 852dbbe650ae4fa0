use std::io::{self, BufRead, Read};

/// Makes blank input lines visible to the csv reader.
///
/// `csv::Reader` skips empty lines, but every line of the input is a row. A
/// blank line outside a quoted field is rewritten as `""`, which parses as a
/// single empty field. Blank lines inside a quoted field are left alone.
pub struct KeepBlankLines<R> {
    inner: R,
    line: Vec<u8>,
    pos: usize,
    in_quotes: bool,
}

impl<R: BufRead> KeepBlankLines<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            line: Vec::new(),
            pos: 0,
            in_quotes: false,
        }
    }

    fn fill_line(&mut self) -> io::Result<bool> {
        self.line.clear();
        self.pos = 0;
        if self.inner.read_until(b'\n', &mut self.line)? == 0 {
            return Ok(false);
        }
        let blank = matches!(self.line.as_slice(), b"\n" | b"\r\n");
        if blank && !self.in_quotes {
            let mut quoted = b"\"\"".to_vec();
            quoted.extend_from_slice(&self.line);
            self.line = quoted;
        } else {
            self.in_quotes = ends_in_quotes(&self.line, self.in_quotes);
        }
        Ok(true)
    }
}

impl<R: BufRead> Read for KeepBlankLines<R> {
    fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
        if self.pos >= self.line.len() && !self.fill_line()? {
            return Ok(0);
        }
        let rest = &self.line[self.pos..];
        let n = rest.len().min(out.len());
        out[..n].copy_from_slice(&rest[..n]);
        self.pos += n;
        Ok(n)
    }
}

/// Whether a quoted field is still open after `line`.
///
/// A quote only opens a field at the start of that field; `""` inside quotes
/// is an escaped quote.
fn ends_in_quotes(line: &[u8], mut in_quotes: bool) -> bool {
    let mut field_start = !in_quotes;
    let mut bytes = line.iter().peekable();
    while let Some(&b) = bytes.next() {
        if in_quotes {
            if b == b'"' {
                if bytes.peek() == Some(&&b'"') {
                    bytes.next();
                } else {
                    in_quotes = false;
                    field_start = false;
                }
            }
        } else {
            match b {
                b'"' if field_start => in_quotes = true,
                b',' | b'\r' | b'\n' => field_start = true,
                _ => field_start = false,
            }
        }
    }
    in_quotes
}
