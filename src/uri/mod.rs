mod parser;

use crate::{
    component::{Host, Path},
    error::ParseError,
    normalize,
};
use alloc::{string::String, vec::Vec};
use core::str;

/// A [URI reference] defined in RFC 3986, held as an owned structured value.
///
/// [URI reference]: https://datatracker.ietf.org/doc/html/rfc3986/#section-4.1
///
/// All components are stored percent-decoded. They are encoded again on
/// output by the [`Display`] implementation.
///
/// # Comparison
///
/// `Uri`s are compared component-wise. A port, query or fragment is equal
/// to another only when both are absent, or both are present and equal.
/// A present-but-empty query (`?` with nothing after it) is not equal to
/// an absent one.
///
/// # Examples
///
/// Parse and extract components from a URI:
///
/// ```
/// use uri_value::Uri;
///
/// let uri = Uri::parse("http://user@www.EXAMPLE.com:8080/foo/bar?baz#qux")?;
///
/// assert_eq!(uri.scheme(), Some("http"));
/// assert_eq!(uri.user_info(), b"user");
/// assert_eq!(uri.host(), b"www.example.com");
/// assert_eq!(uri.port(), Some(8080));
/// assert_eq!(uri.path(), &["", "foo", "bar"]);
/// assert_eq!(uri.query(), Some(&b"baz"[..]));
/// assert_eq!(uri.fragment(), Some(&b"qux"[..]));
/// # Ok::<_, uri_value::ParseError>(())
/// ```
///
/// Resolve a relative reference against a base and generate the result:
///
/// ```
/// use uri_value::Uri;
///
/// let base = Uri::parse("http://a/b/c/d;p?q")?;
/// let target = base.resolve(&Uri::parse("../g")?);
/// assert_eq!(target.to_string(), "http://a/b/g");
/// # Ok::<_, uri_value::ParseError>(())
/// ```
///
/// [`Display`]: core::fmt::Display
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Uri {
    // Empty when absent.
    pub(crate) scheme: String,
    pub(crate) user_info: Vec<u8>,
    pub(crate) host: Vec<u8>,
    pub(crate) port: Option<u16>,
    pub(crate) path: Vec<Vec<u8>>,
    pub(crate) query: Option<Vec<u8>>,
    pub(crate) fragment: Option<Vec<u8>>,
}

impl Uri {
    /// Creates an empty relative reference.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a URI reference from a string.
    ///
    /// The scheme and registered names are lowercased, and every
    /// component is percent-decoded.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the string does not match the [`URI-reference`]
    /// ABNF rule from RFC 3986, or if the port is out of range.
    ///
    /// [`URI-reference`]: https://datatracker.ietf.org/doc/html/rfc3986/#section-4.1
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        parser::parse(s)
    }

    /// Parses a URI reference from a string into `self`.
    ///
    /// Parsing is atomic: on success every component of `self` is replaced,
    /// and on failure `self` is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns `Err` on the same conditions as [`parse`](Self::parse).
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_value::Uri;
    ///
    /// let mut uri = Uri::parse("http://www.example.com:8080/foo/bar")?;
    /// uri.parse_from_str("http://www.example.com/foo/bar")?;
    /// assert_eq!(uri.port(), None);
    ///
    /// assert!(uri.parse_from_str("http://www.example.com:-1/").is_err());
    /// assert_eq!(uri.to_string(), "http://www.example.com/foo/bar");
    /// # Ok::<_, uri_value::ParseError>(())
    /// ```
    pub fn parse_from_str(&mut self, s: &str) -> Result<(), ParseError> {
        *self = parser::parse(s)?;
        Ok(())
    }

    /// Returns the scheme, or `None` for a relative reference.
    #[must_use]
    pub fn scheme(&self) -> Option<&str> {
        (!self.scheme.is_empty()).then_some(self.scheme.as_str())
    }

    /// Returns the percent-decoded user information.
    ///
    /// An empty user information is indistinguishable from an absent one.
    #[must_use]
    pub fn user_info(&self) -> &[u8] {
        &self.user_info
    }

    /// Returns the user information as a string slice if it is valid UTF-8.
    #[must_use]
    pub fn user_info_str(&self) -> Option<&str> {
        str::from_utf8(&self.user_info).ok()
    }

    /// Returns the host, percent-decoded and without brackets.
    ///
    /// An empty host is indistinguishable from an absent one.
    #[must_use]
    pub fn host(&self) -> &[u8] {
        &self.host
    }

    /// Returns the host as a string slice if it is valid UTF-8.
    #[must_use]
    pub fn host_str(&self) -> Option<&str> {
        str::from_utf8(&self.host).ok()
    }

    /// Returns the host classified as an IP address or registered name,
    /// or `None` if the host is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::net::{Ipv4Addr, Ipv6Addr};
    /// use uri_value::{component::Host, Uri};
    ///
    /// let uri = Uri::parse("//127.0.0.1/")?;
    /// assert_eq!(uri.host_kind(), Some(Host::Ipv4(Ipv4Addr::LOCALHOST)));
    ///
    /// let uri = Uri::parse("//[::1]/")?;
    /// assert_eq!(uri.host_kind(), Some(Host::Ipv6(Ipv6Addr::LOCALHOST)));
    ///
    /// let uri = Uri::parse("//localhost/")?;
    /// assert_eq!(uri.host_kind(), Some(Host::RegName(b"localhost")));
    ///
    /// assert_eq!(Uri::parse("/")?.host_kind(), None);
    /// # Ok::<_, uri_value::ParseError>(())
    /// ```
    #[must_use]
    pub fn host_kind(&self) -> Option<Host<'_>> {
        (!self.host.is_empty()).then(|| Host::classify(&self.host))
    }

    /// Returns the port, if any.
    #[must_use]
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// Returns the path.
    #[must_use]
    pub fn path(&self) -> &Path {
        Path::new(&self.path)
    }

    /// Returns the percent-decoded query, if any.
    #[must_use]
    pub fn query(&self) -> Option<&[u8]> {
        self.query.as_deref()
    }

    /// Returns the query as a string slice if it is present and valid UTF-8.
    #[must_use]
    pub fn query_str(&self) -> Option<&str> {
        self.query().and_then(|q| str::from_utf8(q).ok())
    }

    /// Returns the percent-decoded fragment, if any.
    #[must_use]
    pub fn fragment(&self) -> Option<&[u8]> {
        self.fragment.as_deref()
    }

    /// Returns the fragment as a string slice if it is present and valid UTF-8.
    #[must_use]
    pub fn fragment_str(&self) -> Option<&str> {
        self.fragment().and_then(|f| str::from_utf8(f).ok())
    }

    /// Returns `true` if the URI has no scheme.
    #[must_use]
    pub fn is_relative_reference(&self) -> bool {
        self.scheme.is_empty()
    }

    /// Returns `true` if the path is not absolute.
    #[must_use]
    pub fn contains_relative_path(&self) -> bool {
        self.path().is_rootless()
    }

    /// Returns `true` if any of user information, host or port is present.
    #[must_use]
    pub fn has_authority(&self) -> bool {
        !self.user_info.is_empty() || !self.host.is_empty() || self.port.is_some()
    }

    /// Sets the scheme. An empty scheme makes the URI a relative reference.
    ///
    /// The scheme is not validated.
    pub fn set_scheme(&mut self, scheme: impl Into<String>) {
        self.scheme = scheme.into();
    }

    /// Sets the decoded user information. It is not validated.
    pub fn set_user_info(&mut self, user_info: impl Into<Vec<u8>>) {
        self.user_info = user_info.into();
    }

    /// Sets the decoded host, without brackets. It is not validated.
    pub fn set_host(&mut self, host: impl Into<Vec<u8>>) {
        self.host = host.into();
    }

    /// Sets the port.
    pub fn set_port(&mut self, port: u16) {
        self.port = Some(port);
    }

    /// Sets the path from decoded segments. They are not validated.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_value::Uri;
    ///
    /// let mut uri = Uri::new();
    /// uri.set_scheme("http");
    /// uri.set_host("example.com");
    /// uri.set_path(["", "a b", "c"]);
    /// assert_eq!(uri.to_string(), "http://example.com/a%20b/c");
    /// ```
    pub fn set_path<I>(&mut self, segments: I)
    where
        I: IntoIterator,
        I::Item: Into<Vec<u8>>,
    {
        self.path = segments.into_iter().map(Into::into).collect();
    }

    /// Sets the decoded query, marking it as present. It is not validated.
    pub fn set_query(&mut self, query: impl Into<Vec<u8>>) {
        self.query = Some(query.into());
    }

    /// Sets the decoded fragment, marking it as present. It is not validated.
    pub fn set_fragment(&mut self, fragment: impl Into<Vec<u8>>) {
        self.fragment = Some(fragment.into());
    }

    /// Removes the scheme.
    pub fn clear_scheme(&mut self) {
        self.scheme.clear();
    }

    /// Removes the user information.
    pub fn clear_user_info(&mut self) {
        self.user_info.clear();
    }

    /// Removes the host.
    pub fn clear_host(&mut self) {
        self.host.clear();
    }

    /// Removes the port.
    pub fn clear_port(&mut self) {
        self.port = None;
    }

    /// Removes the path.
    pub fn clear_path(&mut self) {
        self.path.clear();
    }

    /// Removes the query.
    pub fn clear_query(&mut self) {
        self.query = None;
    }

    /// Removes the fragment.
    pub fn clear_fragment(&mut self) {
        self.fragment = None;
    }

    /// Removes dot segments from the path in place.
    ///
    /// See [`Path::normalized`] for the exact behavior.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_value::Uri;
    ///
    /// let mut uri = Uri::parse("http://a/b/c/./../../g")?;
    /// uri.normalize_path();
    /// assert_eq!(uri.to_string(), "http://a/g");
    /// # Ok::<_, uri_value::ParseError>(())
    /// ```
    pub fn normalize_path(&mut self) {
        self.path = normalize::remove_dot_segments(&self.path);
    }
}

#[cfg(test)]
mod tests;
