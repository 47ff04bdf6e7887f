use crate::{normalize::remove_dot_segments, Uri};
use alloc::vec::Vec;

impl Uri {
    /// Resolves a URI reference against this URI as the base.
    ///
    /// This follows the algorithm in [Section 5.2.2 of RFC 3986] with the
    /// following differences:
    ///
    /// - The reference is taken to carry an authority only if its host is non-empty.
    /// - When the reference has an empty path, its query is used only if it is
    ///   non-empty. Otherwise the query of the base is kept.
    /// - A `..` segment that would climb above the root is dropped.
    ///
    /// The fragment of the result is always that of the reference.
    /// Neither input is modified.
    ///
    /// [Section 5.2.2 of RFC 3986]: https://datatracker.ietf.org/doc/html/rfc3986/#section-5.2.2
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_value::Uri;
    ///
    /// let base = Uri::parse("http://example.com/foo/bar#top")?;
    ///
    /// let target = base.resolve(&Uri::parse("baz?x")?);
    /// assert_eq!(target.to_string(), "http://example.com/foo/baz?x");
    ///
    /// let target = base.resolve(&Uri::parse("../qux")?);
    /// assert_eq!(target.to_string(), "http://example.com/qux");
    ///
    /// let target = base.resolve(&Uri::parse("")?);
    /// assert_eq!(target.to_string(), "http://example.com/foo/bar");
    /// # Ok::<_, uri_value::ParseError>(())
    /// ```
    #[must_use]
    pub fn resolve(&self, reference: &Uri) -> Uri {
        let mut target = Uri::new();

        if !reference.scheme.is_empty() {
            target.scheme.clone_from(&reference.scheme);
            target.copy_authority(reference);
            target.path = remove_dot_segments(&reference.path);
            target.query.clone_from(&reference.query);
        } else {
            if !reference.host.is_empty() {
                target.copy_authority(reference);
                target.path = remove_dot_segments(&reference.path);
                target.query.clone_from(&reference.query);
            } else {
                if reference.path.is_empty() {
                    target.path.clone_from(&self.path);
                    target.query = match &reference.query {
                        Some(q) if !q.is_empty() => Some(q.clone()),
                        _ => self.query.clone(),
                    };
                } else {
                    if reference.path().is_absolute() {
                        target.path = remove_dot_segments(&reference.path);
                    } else {
                        target.path = remove_dot_segments(&self.merge(&reference.path));
                    }
                    target.query.clone_from(&reference.query);
                }
                target.copy_authority(self);
            }
            target.scheme.clone_from(&self.scheme);
        }

        target.fragment.clone_from(&reference.fragment);
        target
    }

    /// Merges a relative-path reference with the path of `self`.
    fn merge(&self, ref_path: &[Vec<u8>]) -> Vec<Vec<u8>> {
        let mut path = Vec::with_capacity(self.path.len() + ref_path.len());

        if self.path.is_empty() {
            if self.has_authority() {
                path.push(Vec::new());
            }
        } else {
            path.extend_from_slice(&self.path);
            // Keep a lone absolute root.
            if path.len() > 1 || !path[0].is_empty() {
                path.pop();
            }
        }

        path.extend_from_slice(ref_path);
        path
    }

    fn copy_authority(&mut self, other: &Uri) {
        self.user_info.clone_from(&other.user_info);
        self.host.clone_from(&other.host);
        self.port = other.port;
    }
}
