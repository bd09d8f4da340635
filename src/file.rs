//! Construction of `file` URIs from native filesystem paths.

use crate::{policy::Policy, Uri};
use alloc::{borrow::ToOwned, string::String};

impl Uri {
    /// Creates a `file` URI from a POSIX path.
    ///
    /// An absolute path gets an empty host, yielding the `file:///` form.
    /// Characters not allowed in a path are percent-encoded on serialization.
    ///
    /// # Examples
    ///
    /// ```
    /// use generic_uri::Uri;
    ///
    /// assert_eq!(Uri::from_unix_path("/etc/passwd").to_string(), "file:///etc/passwd");
    /// assert_eq!(Uri::from_unix_path("docs/read me.txt").to_string(), "file:docs/read%20me.txt");
    /// ```
    #[must_use]
    pub fn from_unix_path(path: &str) -> Uri {
        file_uri(path.starts_with('/'), path.to_owned())
    }

    /// Creates a `file` URI from a Windows path.
    ///
    /// Backslashes become path separators and forward slashes are
    /// percent-encoded. A path that is rooted, with or without a drive letter,
    /// gets an empty host.
    ///
    /// # Examples
    ///
    /// ```
    /// use generic_uri::Uri;
    ///
    /// assert_eq!(Uri::from_windows_path("C:\\Users").to_string(), "file:///C:/Users");
    /// assert_eq!(Uri::from_windows_path("\\temp\\a/b").to_string(), "file:///temp/a%2Fb");
    /// assert_eq!(Uri::from_windows_path("docs\\x.txt").to_string(), "file:docs/x.txt");
    /// ```
    #[must_use]
    pub fn from_windows_path(path: &str) -> Uri {
        let mut buf = String::with_capacity(path.len());
        for ch in path.chars() {
            match ch {
                '/' => buf.push_str("%2F"),
                '\\' => buf.push('/'),
                ch => buf.push(ch),
            }
        }

        let drive = matches!(buf.as_bytes(), [x, b':', b'/', ..] if x.is_ascii_alphabetic());
        if drive {
            buf.insert(0, '/');
        }
        file_uri(drive || buf.starts_with('/'), buf)
    }
}

fn file_uri(absolute: bool, path: String) -> Uri {
    let mut uri = Uri::with_policy(Policy::FILE);
    uri.scheme = Some("file".to_owned());
    if absolute {
        uri.host = Some(String::new());
    }
    uri.path = Some(path);
    uri
}
