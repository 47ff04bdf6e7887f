//! Views into URI components.

use crate::{ip, normalize};
use alloc::vec::Vec;
use core::{
    net::{Ipv4Addr, Ipv6Addr},
    slice,
};
use ref_cast::{ref_cast_custom, RefCastCustom};

/// A classified host component.
///
/// The host field of a [`Uri`] is stored without brackets, so an IPvFuture
/// literal such as `v1.x` cannot be told apart from a registered name and is
/// reported as [`RegName`].
///
/// [`Uri`]: crate::Uri
/// [`RegName`]: Host::RegName
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Host<'a> {
    /// An IPv4 address.
    Ipv4(Ipv4Addr),
    /// An IPv6 address.
    Ipv6(Ipv6Addr),
    /// A registered name, percent-decoded.
    ///
    /// Registered names produced by parsing are lowercase.
    RegName(&'a [u8]),
}

impl<'a> Host<'a> {
    pub(crate) fn classify(host: &'a [u8]) -> Self {
        if let Ok(segs) = ip::parse_v6(host) {
            Host::Ipv6(segs.into())
        } else if let Some(octets) = ip::parse_v4(host) {
            Host::Ipv4(octets.into())
        } else {
            Host::RegName(host)
        }
    }
}

/// The [path] component of a URI reference, as a sequence of
/// percent-decoded segments.
///
/// An absolute path starts with an empty segment, so `/a/b` is
/// `["", "a", "b"]` and `/` alone is `[""]`. An empty sequence means
/// no path was supplied.
///
/// [path]: https://datatracker.ietf.org/doc/html/rfc3986/#section-3.3
#[derive(RefCastCustom, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Path {
    inner: [Vec<u8>],
}

impl Path {
    #[ref_cast_custom]
    pub(crate) fn new(segments: &[Vec<u8>]) -> &Path;

    /// Returns `true` if the path is absolute, i.e., starts with an empty segment.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_value::Uri;
    ///
    /// assert!(Uri::parse("/foo")?.path().is_absolute());
    /// assert!(!Uri::parse("foo")?.path().is_absolute());
    /// assert!(!Uri::parse("")?.path().is_absolute());
    /// # Ok::<_, uri_value::ParseError>(())
    /// ```
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        matches!(self.inner.first(), Some(seg) if seg.is_empty())
    }

    /// Returns `true` if the path is not absolute.
    #[must_use]
    pub fn is_rootless(&self) -> bool {
        !self.is_absolute()
    }

    /// Returns `true` if no path was supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of segments, including the leading empty
    /// segment of an absolute path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns the segments as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Vec<u8>] {
        &self.inner
    }

    /// Returns an iterator over the segments as byte slices.
    pub fn segments(&self) -> Segments<'_> {
        Segments {
            inner: self.inner.iter(),
        }
    }

    /// Returns a copy of the segments with dot segments removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_value::Uri;
    ///
    /// let uri = Uri::parse("/a/b/c/./../../g")?;
    /// assert_eq!(uri.path().normalized(), ["", "a", "g"].map(|s| s.as_bytes().to_vec()));
    /// # Ok::<_, uri_value::ParseError>(())
    /// ```
    #[must_use]
    pub fn normalized(&self) -> Vec<Vec<u8>> {
        normalize::remove_dot_segments(&self.inner)
    }
}

/// Compares the segments with string slices, byte for byte.
impl<const N: usize> PartialEq<[&str; N]> for Path {
    fn eq(&self, other: &[&str; N]) -> bool {
        self.inner.len() == N && self.segments().zip(other).all(|(a, b)| a == b.as_bytes())
    }
}

/// An iterator over the segments of a [`Path`].
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Segments<'a> {
    inner: slice::Iter<'a, Vec<u8>>,
}

impl<'a> Iterator for Segments<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Vec::as_slice)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Segments<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(Vec::as_slice)
    }
}

impl ExactSizeIterator for Segments<'_> {}
