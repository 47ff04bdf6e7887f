use crate::{
    component::Path,
    error::ParseError,
    ip,
    pct_enc::{
        table::{FRAGMENT, PCHAR, QUERY, REG_NAME, USERINFO},
        write_encoded,
    },
    Uri,
};
use alloc::string::{String, ToString};
use core::{
    fmt::{self, Write},
    str::FromStr,
};

#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

impl Uri {
    /// Generates the string form of the URI.
    ///
    /// This is the same as [`to_string`](ToString::to_string).
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_value::Uri;
    ///
    /// let uri = Uri::parse("HTTP://[2001:DB8::7]:8080/a%2fb?q=1+2#%E2%82%AC")?;
    /// assert_eq!(uri.generate_string(), "http://[2001:db8::7]:8080/a%2Fb?q=1+2#%E2%82%AC");
    /// # Ok::<_, uri_value::ParseError>(())
    /// ```
    #[must_use]
    pub fn generate_string(&self) -> String {
        self.to_string()
    }

    fn generate<W: Write>(&self, w: &mut W) -> fmt::Result {
        if !self.scheme.is_empty() {
            w.write_str(&self.scheme)?;
            w.write_char(':')?;
        }

        let has_authority = self.has_authority();
        if has_authority {
            w.write_str("//")?;
            if !self.user_info.is_empty() {
                write_encoded(w, &self.user_info, USERINFO)?;
                w.write_char('@')?;
            }
            if ip::parse_v6(&self.host).is_ok() {
                // Only ASCII bytes get here.
                w.write_char('[')?;
                for &x in &self.host {
                    w.write_char(x.to_ascii_lowercase() as char)?;
                }
                w.write_char(']')?;
            } else {
                write_encoded(w, &self.host, REG_NAME)?;
            }
            if let Some(port) = self.port {
                write!(w, ":{port}")?;
            }
        }

        match &self.path[..] {
            [root] if root.is_empty() => w.write_char('/')?,
            path => {
                if !has_authority {
                    match path {
                        // Would otherwise be read back as an authority.
                        [a, b, ..] if a.is_empty() && b.is_empty() => w.write_str("/.")?,
                        // Would otherwise be read back as a scheme.
                        [first, ..] if self.scheme.is_empty() && first.contains(&b':') => {
                            w.write_str("./")?
                        }
                        _ => {}
                    }
                }
                for (i, seg) in path.iter().enumerate() {
                    if i > 0 {
                        w.write_char('/')?;
                    }
                    write_encoded(w, seg, PCHAR)?;
                }
            }
        }

        if let Some(query) = &self.query {
            w.write_char('?')?;
            write_encoded(w, query, QUERY)?;
        }
        if let Some(fragment) = &self.fragment {
            w.write_char('#')?;
            write_encoded(w, fragment, FRAGMENT)?;
        }
        Ok(())
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.generate(f)
    }
}

/// Shows a byte string the way `b"..."` literals are written.
struct Bytes<'a>(&'a [u8]);

impl fmt::Debug for Bytes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "b\"{}\"", self.0.escape_ascii())
    }
}

impl fmt::Debug for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Uri")
            .field("scheme", &self.scheme())
            .field("user_info", &Bytes(&self.user_info))
            .field("host", &Bytes(&self.host))
            .field("port", &self.port)
            .field("path", &self.path())
            .field("query", &self.query().map(Bytes))
            .field("fragment", &self.fragment().map(Bytes))
            .finish()
    }
}

impl fmt::Debug for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.segments().map(Bytes)).finish()
    }
}

impl FromStr for Uri {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uri::parse(s)
    }
}

#[cfg(feature = "serde")]
impl Serialize for Uri {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Uri {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Uri::parse(&s).map_err(|e| {
            de::Error::custom(format_args!("failed to parse {s:?} as URI reference: {e}"))
        })
    }
}
