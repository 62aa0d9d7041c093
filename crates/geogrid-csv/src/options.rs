//! CSV options

/// How fields are separated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delimiter {
    /// Sniff tab, semicolon or comma from the first line
    #[default]
    Auto,
    /// Fixed separator byte
    Byte(u8),
}

impl Delimiter {
    /// Pick the separator for some input
    ///
    /// The first line decides: tab wins over semicolon, semicolon over comma,
    /// as long as it occurs at all.
    pub fn resolve(&self, input: &[u8]) -> u8 {
        match *self {
            Delimiter::Byte(b) => b,
            Delimiter::Auto => {
                let first_line = input
                    .split(|&b| b == b'\n')
                    .next()
                    .unwrap_or_default();
                [b'\t', b';', b',']
                    .into_iter()
                    .find(|d| first_line.contains(d))
                    .unwrap_or(b',')
            }
        }
    }
}

impl From<u8> for Delimiter {
    fn from(b: u8) -> Self {
        Delimiter::Byte(b)
    }
}

/// Options for reading delimited text
#[derive(Debug, Clone)]
pub struct CsvReadOptions {
    /// Field delimiter (default: sniffed)
    pub delimiter: Delimiter,
    /// Quote character (default: double quote)
    pub quote: u8,
    /// Whether first row is header
    pub has_header: bool,
    /// Trim whitespace around fields while reading
    pub trim: bool,
}

impl Default for CsvReadOptions {
    fn default() -> Self {
        Self {
            delimiter: Delimiter::Auto,
            quote: b'"',
            has_header: true,
            trim: false,
        }
    }
}

/// Which value of a cell is written out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueSource {
    /// Value as imported
    Raw,
    /// Correction when present, imported value otherwise
    #[default]
    Effective,
}

/// Options for writing delimited text
#[derive(Debug, Clone)]
pub struct CsvWriteOptions {
    /// Field delimiter (default: comma)
    pub delimiter: u8,
    /// Quote character (default: double quote)
    pub quote: u8,
    /// Write header row
    pub write_header: bool,
    /// Raw or corrected values
    pub values: ValueSource,
    /// Line terminator
    pub line_terminator: LineTerminator,
}

impl Default for CsvWriteOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            write_header: true,
            values: ValueSource::Effective,
            line_terminator: LineTerminator::LF,
        }
    }
}

/// Line terminator type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineTerminator {
    /// Unix-style (LF)
    LF,
    /// Windows-style (CRLF)
    CRLF,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delimiter_sniffing() {
        assert_eq!(Delimiter::Auto.resolve(b"a\tb,c\n1\t2"), b'\t');
        assert_eq!(Delimiter::Auto.resolve(b"a;b;c\n1,5;2;3"), b';');
        assert_eq!(Delimiter::Auto.resolve(b"a,b\n1;2"), b',');
        assert_eq!(Delimiter::Auto.resolve(b"single"), b',');
        assert_eq!(Delimiter::Auto.resolve(b""), b',');
        assert_eq!(Delimiter::Byte(b'|').resolve(b"a\tb"), b'|');
    }
}
