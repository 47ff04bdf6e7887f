use core::fmt;

/// Detailed cause of a [`ParseError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// Illegal scheme: empty, not starting with a letter, or containing
    /// a character other than letters, digits, `+`, `-` and `.`.
    ///
    /// The error index points to the offending character, or to the `:`
    /// if the scheme is empty.
    InvalidScheme,
    /// Invalid percent-encoded octet that is either non-hexadecimal or incomplete.
    ///
    /// The error index points to the percent character "%" of the octet.
    InvalidOctet,
    /// Unexpected character that is not allowed in the component.
    ///
    /// The error index points to the character.
    UnexpectedChar,
    /// Invalid dotted-quad IPv4 address embedded in an IPv6 literal.
    ///
    /// The error index points to the first byte of the IPv4 address.
    InvalidIpv4Addr,
    /// Invalid IPv6 or IPvFuture literal, or a missing right square bracket.
    ///
    /// The error index points to the preceding left square bracket "[".
    InvalidIpLiteral,
    /// Port that is non-numeric, negative, has a leading zero or exceeds 65535.
    ///
    /// The error index points to the first byte of the port.
    InvalidPort,
}

/// An error occurred when parsing a URI reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ParseError {
    pub(crate) index: usize,
    pub(crate) kind: ParseErrorKind,
}

impl ParseError {
    pub(crate) fn new(index: usize, kind: ParseErrorKind) -> Self {
        Self { index, kind }
    }

    /// Shifts the error index by the offset of a component in the input.
    pub(crate) fn offset(self, offset: usize) -> Self {
        Self::new(self.index + offset, self.kind)
    }

    /// Returns the index at which the error occurred.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the detailed cause of the error.
    #[must_use]
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self.kind {
            ParseErrorKind::InvalidScheme => "invalid scheme at index ",
            ParseErrorKind::InvalidOctet => "invalid percent-encoded octet at index ",
            ParseErrorKind::UnexpectedChar => "unexpected character at index ",
            ParseErrorKind::InvalidIpv4Addr => "invalid IPv4 address at index ",
            ParseErrorKind::InvalidIpLiteral => "invalid IP literal at index ",
            ParseErrorKind::InvalidPort => "invalid port at index ",
        };
        write!(f, "{}{}", msg, self.index)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

pub(crate) type Result<T, E = ParseError> = core::result::Result<T, E>;

/// Returns immediately with an error.
macro_rules! err {
    ($index:expr, $kind:ident) => {
        return Err(crate::error::ParseError::new(
            $index,
            crate::error::ParseErrorKind::$kind,
        ))
    };
}

pub(crate) use err;
