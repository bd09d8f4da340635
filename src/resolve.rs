//! Reference resolution and relativization.

use crate::{error::FormatError, log::debug, Uri};
use alloc::{format, string::String, vec::Vec};

/// Removes dot segments from a path, as described in
/// [Section 5.2.4 of RFC 3986](https://datatracker.ietf.org/doc/html/rfc3986/#section-5.2.4).
///
/// # Examples
///
/// ```
/// use generic_uri::remove_dot_segments;
///
/// assert_eq!(remove_dot_segments("/a/b/c/./../../g"), "/a/g");
/// assert_eq!(remove_dot_segments("mid/content=5/../6"), "mid/6");
/// assert_eq!(remove_dot_segments("../x"), "x");
/// ```
#[must_use]
pub fn remove_dot_segments(path: &str) -> String {
    let mut output = String::with_capacity(path.len());
    let mut input = path;

    while !input.is_empty() {
        if input == "." || input == ".." {
            break;
        } else if input == "/." {
            input = "/";
        } else if input == "/.." {
            input = "/";
            pop_segment(&mut output);
        } else if input.starts_with("/../") {
            input = &input[3..];
            pop_segment(&mut output);
        } else if input.starts_with("/./") {
            input = &input[2..];
        } else if let Some(rest) = input.strip_prefix("./") {
            input = rest;
        } else if let Some(rest) = input.strip_prefix("../") {
            input = rest;
        } else {
            let end = input.as_bytes()[1..]
                .iter()
                .position(|&x| x == b'/')
                .map_or(input.len(), |i| i + 1);
            output.push_str(&input[..end]);
            input = &input[end..];
        }
    }
    output
}

/// Prefixes `"/."` to a path starting with `"//"`, which would otherwise
/// be read as an authority when no host is present.
pub(crate) fn guard_leading_slashes(path: &mut String) {
    if path.starts_with("//") {
        path.insert_str(0, "/.");
    }
}

/// Removes the last segment and its preceding `'/'`, if any.
fn pop_segment(output: &mut String) {
    output.truncate(output.rfind('/').unwrap_or(0));
}

impl Uri {
    /// Resolves the URI reference against a base URI in place, as described in
    /// [Section 5.2 of RFC 3986](https://datatracker.ietf.org/doc/html/rfc3986/#section-5.2).
    ///
    /// An absolute URI is left unchanged. Otherwise the scheme is taken from
    /// `base`, and so is the authority unless a host is present. Components
    /// taken from `base` go through the setters of `self`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a component taken from `base` is rejected by the
    /// policy of `self`, in which case `self` is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use generic_uri::Uri;
    ///
    /// let base = Uri::parse("http://a/b/c/d;p?q")?;
    ///
    /// let mut uri = Uri::parse("../g?y")?;
    /// uri.resolve(&base)?;
    /// assert_eq!(uri.to_string(), "http://a/b/g?y");
    /// # Ok::<_, generic_uri::FormatError>(())
    /// ```
    pub fn resolve(&mut self, base: &Uri) -> Result<&mut Self, FormatError> {
        if self.is_absolute() {
            return Ok(self);
        }

        let mut target = self.clone();

        if target.host.is_some() {
            if let Some(path) = &mut target.path {
                *path = remove_dot_segments(path);
            }
        } else {
            let path = target.path.take().unwrap_or_default();
            if path.is_empty() {
                target.path = base.path.clone();
                if target.query.is_none() {
                    target.query = base.query.clone();
                }
            } else if path.starts_with('/') {
                target.path = Some(remove_dot_segments(&path));
            } else {
                let base_path = base.path().unwrap_or_default();
                let merged = if base.host.is_some() && base_path.is_empty() {
                    format!("/{path}")
                } else {
                    let dir_end = base_path.rfind('/').map_or(0, |i| i + 1);
                    format!("{}{path}", &base_path[..dir_end])
                };
                target.path = Some(remove_dot_segments(&merged));
            }

            target
                .set_user_info(base.user_info())
                .set_host(base.host())?
                .set_port(base.explicit_port())?;

            if target.host.is_none() {
                if let Some(path) = &mut target.path {
                    guard_leading_slashes(path);
                }
            }
        }

        target.set_scheme(base.scheme.as_deref())?;
        *self = target;
        Ok(self)
    }

    /// Resolves a relative reference against a base URI, returning a new `Uri`
    /// under the policy of `base`.
    ///
    /// The reference is parsed without the post-processing of the policy,
    /// so that an empty path stays empty until resolution.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `relative` fails to parse or a component is rejected
    /// by the policy of `base`.
    ///
    /// # Examples
    ///
    /// ```
    /// use generic_uri::{Policy, Uri};
    ///
    /// let base = Uri::parse_with(Policy::HTTP, "http://a/b/c/d;p?q")?;
    /// assert_eq!(Uri::merge(&base, "?y")?.to_string(), "http://a/b/c/d;p?y");
    /// assert_eq!(Uri::merge(&base, "g")?.to_string(), "http://a/b/c/g");
    /// # Ok::<_, generic_uri::FormatError>(())
    /// ```
    pub fn merge(base: &Uri, relative: &str) -> Result<Uri, FormatError> {
        let mut uri = Uri::from_uri(base.policy, &Uri::parse(relative)?)?;
        uri.resolve(base)?;
        Ok(uri)
    }

    /// Turns the URI into a reference relative to a base URI, in place.
    ///
    /// Both URIs are [normalized](Self::normalize) first, `self` in place.
    /// If both specify a host, a port or a scheme and they differ,
    /// nothing else changes. Ports are compared after the default port
    /// fallback of each policy. Otherwise the scheme and the authority are
    /// removed, and the path is replaced with the shortest relative path
    /// that [resolves](Self::resolve) against `base` to the original one.
    ///
    /// # Examples
    ///
    /// ```
    /// use generic_uri::Uri;
    ///
    /// let base = Uri::parse("http://example.com/a/b/c")?;
    ///
    /// let mut uri = Uri::parse("http://example.com/a/x/y?q")?;
    /// uri.make_relative(&base);
    /// assert_eq!(uri.to_string(), "../x/y?q");
    ///
    /// uri.resolve(&base)?;
    /// assert_eq!(uri.to_string(), "http://example.com/a/x/y?q");
    ///
    /// let mut other = Uri::parse("https://example.com/a/x")?;
    /// other.make_relative(&base);
    /// assert_eq!(other.to_string(), "https://example.com/a/x");
    /// # Ok::<_, generic_uri::FormatError>(())
    /// ```
    pub fn make_relative(&mut self, base: &Uri) -> &mut Self {
        let mut base = base.clone();
        base.normalize();
        self.normalize();

        if conflicts(&self.host, &base.host)
            || conflicts(&self.port(), &base.port())
            || conflicts(&self.scheme, &base.scheme)
        {
            debug!("not relativizing: authority or scheme differs from base");
            return self;
        }

        self.scheme = None;
        self.user_info = None;
        self.host = None;
        self.port = None;

        let path = self.path.take().unwrap_or_default();
        let base_path = base.path().unwrap_or_default();

        if path == base_path && (self.query.is_some() || base.query.is_none()) {
            self.path = Some(String::new());
            return self;
        }

        self.path = Some(relative_path(&path, base_path));
        self
    }
}

fn conflicts<T: PartialEq>(a: &Option<T>, b: &Option<T>) -> bool {
    matches!((a, b), (Some(a), Some(b)) if a != b)
}

/// Computes the relative path that resolves against `base` to `target`.
fn relative_path(target: &str, base: &str) -> String {
    let target: Vec<&str> = target.split('/').collect();
    let base: Vec<&str> = base.split('/').collect();

    // Segments before the last one are the directories.
    let target_dirs = &target[..target.len() - 1];
    let base_dirs = &base[..base.len() - 1];

    let common = target_dirs
        .iter()
        .zip(base_dirs)
        .take_while(|(a, b)| a == b)
        .count();

    let mut buf = "../".repeat(base_dirs.len() - common);
    let rest = target[common..].join("/");

    if buf.is_empty() {
        let first = rest.split('/').next().unwrap_or_default();
        if first.is_empty() || first.contains(':') {
            buf.push_str("./");
        }
    }
    buf.push_str(&rest);
    buf
}
