//! Percent-encoding utilities.

pub mod table;

pub use table::Table;

use crate::error::{ParseError, ParseErrorKind};
use alloc::{string::String, vec::Vec};
use core::{fmt, str};

const fn gen_octet_table(hi: bool) -> [u8; 256] {
    let mut out = [0xff; 256];
    let shift = if hi { 4 } else { 0 };

    let mut i = 0;
    while i < 10 {
        out[(i + b'0') as usize] = i << shift;
        i += 1;
    }
    while i < 16 {
        out[(i - 10 + b'A') as usize] = i << shift;
        out[(i - 10 + b'a') as usize] = i << shift;
        i += 1;
    }
    out
}

const OCTET_TABLE_LO: &[u8; 256] = &gen_octet_table(false);

/// Returns the value of a hexadecimal digit, or `None` if `x` is not one.
#[inline]
pub(crate) fn decode_hexdigit(x: u8) -> Option<u8> {
    let v = OCTET_TABLE_LO[x as usize];
    (v != 0xff).then_some(v)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    ExpectFirstHexDigit,
    ExpectSecondHexDigit,
    Done,
}

/// A decoder for a single percent-encoded octet.
///
/// Feed it the two bytes following a `%`. A decoder handles exactly one
/// octet; create a new one for every `%` encountered.
///
/// # Examples
///
/// ```
/// use uri_value::pct_enc::Decoder;
///
/// let mut dec = Decoder::new();
/// assert!(dec.feed(b'4'));
/// assert!(!dec.is_done());
/// assert!(dec.feed(b'a'));
/// assert_eq!(dec.decoded_byte(), Some(b'J'));
/// ```
#[derive(Clone, Debug)]
pub struct Decoder {
    state: State,
    value: u8,
}

impl Decoder {
    /// Creates a decoder expecting the first hexadecimal digit.
    pub fn new() -> Self {
        Self {
            state: State::ExpectFirstHexDigit,
            value: 0,
        }
    }

    /// Feeds the next byte of the octet to the decoder.
    ///
    /// Returns `false` if the byte is not a hexadecimal digit or if the
    /// decoder is already done. The decoder must not be used after a
    /// `false` return.
    pub fn feed(&mut self, x: u8) -> bool {
        let Some(v) = decode_hexdigit(x) else {
            return false;
        };
        self.state = match self.state {
            State::ExpectFirstHexDigit => State::ExpectSecondHexDigit,
            State::ExpectSecondHexDigit => State::Done,
            State::Done => return false,
        };
        self.value = (self.value << 4) | v;
        true
    }

    /// Returns `true` once both digits have been fed.
    pub fn is_done(&self) -> bool {
        self.state == State::Done
    }

    /// Returns the decoded byte, or `None` if the decoder is not done.
    pub fn decoded_byte(&self) -> Option<u8> {
        self.is_done().then_some(self.value)
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Decodes a percent-encoded string, allowing unencoded bytes in the table.
///
/// # Errors
///
/// Returns `Err` with [`InvalidOctet`] pointing at the `%` if a
/// percent-encoded octet is non-hexadecimal or incomplete, or with
/// [`UnexpectedChar`] pointing at the first byte not allowed by the table.
///
/// [`InvalidOctet`]: ParseErrorKind::InvalidOctet
/// [`UnexpectedChar`]: ParseErrorKind::UnexpectedChar
///
/// # Examples
///
/// ```
/// use uri_value::pct_enc::{decode, table::PCHAR};
///
/// assert_eq!(decode("hello,%20w%6Frld", PCHAR).unwrap(), b"hello, world");
/// assert_eq!(decode("%bc", PCHAR).unwrap(), [0xbc_u8]);
/// assert!(decode("100%", PCHAR).is_err());
/// ```
pub fn decode(s: &str, table: Table) -> Result<Vec<u8>, ParseError> {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        let x = bytes[i];
        if x == b'%' {
            let mut dec = Decoder::new();
            for j in 1..=2 {
                match bytes.get(i + j) {
                    Some(&y) if dec.feed(y) => {}
                    _ => return Err(ParseError::new(i, ParseErrorKind::InvalidOctet)),
                }
            }
            out.extend(dec.decoded_byte());
            i += 3;
        } else if table.allows(x) {
            out.push(x);
            i += 1;
        } else {
            return Err(ParseError::new(i, ParseErrorKind::UnexpectedChar));
        }
    }
    Ok(out)
}

pub(crate) fn encode_byte(x: u8) -> &'static str {
    const TABLE: &[u8; 256 * 3] = &{
        const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

        let mut i = 0;
        let mut table = [0; 256 * 3];
        while i < 256 {
            table[i * 3] = b'%';
            table[i * 3 + 1] = HEX_DIGITS[i >> 4];
            table[i * 3 + 2] = HEX_DIGITS[i & 0b1111];
            i += 1;
        }
        table
    };

    const TABLE_STR: &str = match str::from_utf8(TABLE) {
        Ok(s) => s,
        Err(_) => unreachable!(),
    };

    &TABLE_STR[x as usize * 3..x as usize * 3 + 3]
}

/// Percent-encodes a byte sequence, appending the output to a string.
///
/// ASCII bytes allowed by the table are copied verbatim; every other byte is
/// written as `%` followed by two uppercase hexadecimal digits.
pub fn encode_to(bytes: &[u8], table: Table, buf: &mut String) {
    buf.reserve(bytes.len());
    for &x in bytes {
        if x.is_ascii() && table.allows(x) {
            buf.push(x as char);
        } else {
            buf.push_str(encode_byte(x));
        }
    }
}

/// Percent-encodes a byte sequence.
///
/// Encoding is total: every input yields a valid output.
///
/// # Examples
///
/// ```
/// use uri_value::pct_enc::{encode, table::PCHAR};
///
/// assert_eq!(encode(b"hello, world", PCHAR), "hello,%20world");
/// assert_eq!(encode(&[0x0a, 0xbc], PCHAR), "%0A%BC");
/// ```
#[must_use]
pub fn encode(bytes: &[u8], table: Table) -> String {
    let mut buf = String::new();
    encode_to(bytes, table, &mut buf);
    buf
}

/// Percent-encodes a byte sequence into a formatter.
pub(crate) fn write_encoded<W: fmt::Write>(w: &mut W, bytes: &[u8], table: Table) -> fmt::Result {
    for &x in bytes {
        if x.is_ascii() && table.allows(x) {
            w.write_char(x as char)?;
        } else {
            w.write_str(encode_byte(x))?;
        }
    }
    Ok(())
}
