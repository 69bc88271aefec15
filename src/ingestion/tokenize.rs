//! Line tokenizer.
//!
//! Works on raw bytes: lines split on `\n`, fields split strictly on a single delimiter byte,
//! and only then is each field decoded as UTF-8 (invalid sequences become U+FFFD). Quoting and
//! escaping are not interpreted: a delimiter inside quotes is still a separator.

/// Line-terminator convention, detected once per source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    /// Lines end with `\n` only.
    #[default]
    Lf,
    /// Lines end with `\r\n`; lines split on `\n` keep a trailing `\r`.
    CrLf,
}

impl LineEnding {
    /// Detects the convention from the first line of a source (split on `\n`, terminator
    /// remnant still attached).
    pub fn detect(first_line: &[u8]) -> Self {
        if first_line.contains(&b'\r') {
            Self::CrLf
        } else {
            Self::Lf
        }
    }

    /// Removes the terminator remnant from the end of `line`, if this convention leaves one.
    pub fn strip(self, line: &[u8]) -> &[u8] {
        match self {
            Self::Lf => line,
            Self::CrLf => line.strip_suffix(b"\r").unwrap_or(line),
        }
    }
}

/// Splits a whole source into raw lines on `\n`. A single trailing `\n` does not start a line.
pub fn split_lines(source: &[u8]) -> impl Iterator<Item = &[u8]> {
    let body = source.strip_suffix(b"\n").unwrap_or(source);
    body.split(|&b| b == b'\n')
}

/// Returns true if `line` holds no data once the terminator remnant is removed.
pub fn is_blank_line(line: &[u8], ending: LineEnding) -> bool {
    ending.strip(line).is_empty()
}

/// Splits one raw line into fields.
///
/// Only the final token is affected by `ending`. An empty line yields no tokens; callers skip
/// empty data lines before splitting.
pub fn split_line(line: &[u8], delimiter: u8, ending: LineEnding) -> Vec<String> {
    let line = ending.strip(line);
    if line.is_empty() {
        return Vec::new();
    }
    line.split(|&b| b == delimiter)
        .map(|field| String::from_utf8_lossy(field).into_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{LineEnding, is_blank_line, split_line, split_lines};

    #[test]
    fn detects_line_ending_from_first_line() {
        assert_eq!(LineEnding::detect(b"a\tb"), LineEnding::Lf);
        assert_eq!(LineEnding::detect(b"a\tb\r"), LineEnding::CrLf);
    }

    #[test]
    fn splits_source_into_lines() {
        let lines: Vec<&[u8]> = split_lines(b"a\n\nb\n").collect();
        assert_eq!(lines, vec![&b"a"[..], &b""[..], &b"b"[..]]);
        let lines: Vec<&[u8]> = split_lines(b"").collect();
        assert_eq!(lines, vec![&b""[..]]);
    }

    #[test]
    fn splits_on_every_delimiter() {
        assert_eq!(split_line(b"a\tb\tc", b'\t', LineEnding::Lf), vec!["a", "b", "c"]);
        assert_eq!(split_line(b"a,,c,", b',', LineEnding::Lf), vec!["a", "", "c", ""]);
        assert_eq!(split_line(b"single", b'\t', LineEnding::Lf), vec!["single"]);
    }

    #[test]
    fn quotes_are_not_interpreted() {
        assert_eq!(
            split_line(b"\"x,y\",z", b',', LineEnding::Lf),
            vec!["\"x", "y\"", "z"]
        );
    }

    #[test]
    fn crlf_only_touches_the_last_token() {
        assert_eq!(
            split_line(b"a\r\tb\tc\r", b'\t', LineEnding::CrLf),
            vec!["a\r", "b", "c"]
        );
        // Last line of a file often has no terminator at all.
        assert_eq!(split_line(b"a\tc", b'\t', LineEnding::CrLf), vec!["a", "c"]);
        assert_eq!(split_line(b"a\tc\r", b'\t', LineEnding::Lf), vec!["a", "c\r"]);
    }

    #[test]
    fn empty_lines() {
        assert!(split_line(b"", b'\t', LineEnding::Lf).is_empty());
        assert!(is_blank_line(b"", LineEnding::Lf));
        assert!(is_blank_line(b"\r", LineEnding::CrLf));
        assert!(!is_blank_line(b"\r", LineEnding::Lf));
        assert!(!is_blank_line(b"\t", LineEnding::Lf));
    }

    #[test]
    fn multibyte_text_survives_byte_splitting() {
        assert_eq!(
            split_line("héllo\twörld".as_bytes(), b'\t', LineEnding::Lf),
            vec!["héllo", "wörld"]
        );
    }

    #[test]
    fn non_ascii_delimiter_splits_before_decoding() {
        // Latin-1 section sign as the separator, with a Latin-1 e-acute in the data.
        assert_eq!(
            split_line(b"caf\xe9\xa71\xa7x", 0xA7, LineEnding::Lf),
            vec!["caf\u{fffd}", "1", "x"]
        );
    }
}
