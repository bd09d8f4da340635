use super::Uri;
use crate::{
    error::{FormatError, SerializeError},
    pct_enc,
};
use alloc::string::{String, ToString};
use core::{fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};

impl Uri {
    /// Recomposes the components into a URI string.
    ///
    /// Path, query and fragment are percent-encoded for the characters they
    /// may not contain; existing percent-encoded octets are kept. When the
    /// host is present, the path is empty and a query or fragment follows,
    /// a `'/'` is inserted as the path.
    ///
    /// See also the [`Display`](fmt::Display) implementation, which writes
    /// nothing when this method fails.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the components do not form a
    /// [valid URI reference](Self::is_valid).
    ///
    /// # Examples
    ///
    /// ```
    /// use generic_uri::{SerializeError, Uri};
    ///
    /// let mut uri = Uri::parse("http://example.com?q=a b")?;
    /// assert_eq!(uri.serialize().unwrap(), "http://example.com/?q=a%20b");
    ///
    /// uri.set_host(None)?.set_port(Some(8080))?;
    /// assert_eq!(uri.serialize(), Err(SerializeError::AuthorityWithoutHost));
    /// # Ok::<_, generic_uri::FormatError>(())
    /// ```
    pub fn serialize(&self) -> Result<String, SerializeError> {
        self.check()?;

        let mut buf = String::new();

        if let Some(scheme) = &self.scheme {
            buf.push_str(scheme);
            buf.push(':');
        }

        if let Some(host) = &self.host {
            buf.push_str("//");
            if let Some(user_info) = &self.user_info {
                buf.push_str(&pct_enc::encode_user_info(user_info));
                buf.push('@');
            }
            buf.push_str(host);
            if let Some(port) = self.port {
                buf.push(':');
                buf.push_str(&port.to_string());
            }
        }

        match self.path.as_deref() {
            Some(path) if !path.is_empty() => buf.push_str(&pct_enc::encode_path(path)),
            _ => {
                let has_suffix = [&self.query, &self.fragment]
                    .into_iter()
                    .any(|s| s.as_deref().is_some_and(|s| !s.is_empty()));
                if self.host.is_some() && has_suffix {
                    buf.push('/');
                }
            }
        }

        if let Some(query) = &self.query {
            buf.push('?');
            buf.push_str(&pct_enc::encode_query_fragment(query));
        }

        if let Some(fragment) = &self.fragment {
            buf.push('#');
            buf.push_str(&pct_enc::encode_query_fragment(fragment));
        }

        Ok(buf)
    }
}

impl fmt::Display for Uri {
    /// Writes the [serialized](Uri::serialize) URI, or nothing if serialization fails.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.serialize() {
            Ok(s) => f.write_str(&s),
            Err(_) => Ok(()),
        }
    }
}

impl fmt::Debug for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Uri")
            .field("scheme", &self.scheme())
            .field("user_info", &self.user_info())
            .field("host", &self.host())
            .field("port", &self.explicit_port())
            .field("path", &self.path())
            .field("query", &self.query())
            .field("fragment", &self.fragment())
            .finish()
    }
}

impl FromStr for Uri {
    type Err = FormatError;

    /// Equivalent to [`Uri::parse`].
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
        match Uri::serialize(self) {
            Ok(s) => serializer.serialize_str(&s),
            Err(e) => Err(ser::Error::custom(e)),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Uri {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Uri::parse(&s).map_err(|e| de::Error::custom(format_args!("failed to parse {s:?} as URI: {e}")))
    }
}
