//! Byte tables from RFC 3986.
//!
//! The predefined table constants in this module are documented with
//! the ABNF notation of [RFC 5234].
//!
//! [RFC 5234]: https://datatracker.ietf.org/doc/html/rfc5234

/// An immutable set of byte values.
///
/// Tables are built in `const` context from single bytes, inclusive ranges,
/// and unions of other tables. There is no removal operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Table(u128, u128);

impl Table {
    /// An empty table that allows no bytes.
    pub const EMPTY: Self = Self(0, 0);

    /// Creates a table that only allows the given bytes.
    #[must_use]
    pub const fn new(mut bytes: &[u8]) -> Self {
        let mut table = Self::EMPTY;
        while let [cur, rem @ ..] = bytes {
            table = table.or(Self::byte(*cur));
            bytes = rem;
        }
        table
    }

    /// Creates a table that only allows a single byte.
    #[must_use]
    pub const fn byte(x: u8) -> Self {
        if x < 128 {
            Self(1 << x, 0)
        } else {
            Self(0, 1 << (x - 128))
        }
    }

    /// Creates a table that allows every byte in the inclusive range `lo..=hi`.
    ///
    /// The table is empty if `lo > hi`.
    #[must_use]
    pub const fn range(lo: u8, hi: u8) -> Self {
        let mut table = Self::EMPTY;
        let mut x = lo as u32;
        while x <= hi as u32 {
            table = table.or(Self::byte(x as u8));
            x += 1;
        }
        table
    }

    /// Combines two tables into one.
    ///
    /// Returns a new table that allows all the bytes allowed
    /// by `self` or by `other`.
    #[must_use]
    pub const fn or(self, other: Self) -> Self {
        Self(self.0 | other.0, self.1 | other.1)
    }

    /// Checks whether the table is a subset of another, i.e., `other`
    /// allows at least all the bytes allowed by `self`.
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & other.0 == self.0 && self.1 & other.1 == self.1
    }

    /// Checks whether the given byte is allowed by the table.
    #[inline]
    #[must_use]
    pub const fn allows(self, x: u8) -> bool {
        if x < 128 {
            self.0 & (1 << x) != 0
        } else {
            self.1 & (1 << (x - 128)) != 0
        }
    }

    /// Checks whether every byte of `s` is allowed by the table.
    #[must_use]
    pub fn allows_all(self, s: &[u8]) -> bool {
        s.iter().all(|&x| self.allows(x))
    }
}

const fn new(bytes: &[u8]) -> Table {
    Table::new(bytes)
}

/// `ALPHA = %x41-5A / %x61-7A`
pub const ALPHA: Table = Table::range(b'A', b'Z').or(Table::range(b'a', b'z'));

/// `DIGIT = %x30-39`
pub const DIGIT: Table = Table::range(b'0', b'9');

/// `HEXDIG = DIGIT / "A" / "B" / "C" / "D" / "E" / "F"`
///
/// Lowercase letters are allowed as well, as ABNF strings are case-insensitive.
pub const HEXDIG: Table = DIGIT
    .or(Table::range(b'A', b'F'))
    .or(Table::range(b'a', b'f'));

/// `unreserved = ALPHA / DIGIT / "-" / "." / "_" / "~"`
pub const UNRESERVED: Table = ALPHA.or(DIGIT).or(new(b"-._~"));

/// `gen-delims = ":" / "/" / "?" / "#" / "[" / "]" / "@"`
pub const GEN_DELIMS: Table = new(b":/?#[]@");

/// `sub-delims = "!" / "$" / "&" / "'" / "(" / ")"
///             / "*" / "+" / "," / ";" / "="`
pub const SUB_DELIMS: Table = new(b"!$&'()*+,;=");

/// `reserved = gen-delims / sub-delims`
pub const RESERVED: Table = GEN_DELIMS.or(SUB_DELIMS);

/// The characters allowed after the first one in
/// `scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`.
pub const SCHEME: Table = ALPHA.or(DIGIT).or(new(b"+-."));

/// `userinfo = *( unreserved / pct-encoded / sub-delims / ":" )`, unencoded part.
pub const USERINFO: Table = UNRESERVED.or(SUB_DELIMS).or(Table::byte(b':'));

/// `reg-name = *( unreserved / pct-encoded / sub-delims )`, unencoded part.
pub const REG_NAME: Table = UNRESERVED.or(SUB_DELIMS);

/// `IPvFuture = "v" 1*HEXDIG "." 1*( unreserved / sub-delims / ":" )`, last part.
pub const IPV_FUTURE: Table = UNRESERVED.or(SUB_DELIMS).or(Table::byte(b':'));

/// `pchar = unreserved / pct-encoded / sub-delims / ":" / "@"`, unencoded part.
pub const PCHAR: Table = UNRESERVED.or(SUB_DELIMS).or(new(b":@"));

/// `query = *( pchar / "/" / "?" )`, unencoded part.
pub const QUERY: Table = PCHAR.or(new(b"/?"));

/// `fragment = *( pchar / "/" / "?" )`, unencoded part.
pub const FRAGMENT: Table = QUERY;
