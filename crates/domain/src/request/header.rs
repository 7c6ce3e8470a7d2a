//! HTTP header collection with case-insensitive lookup

use serde::{Deserialize, Serialize};

/// Name of the header carrying the bearer credential.
pub const AUTHORIZATION: &str = "Authorization";

/// A single HTTP header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Header name as it will be sent.
    pub name: String,
    /// Header value.
    pub value: String,
}

impl Header {
    /// Creates a header.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

/// Ordered header collection.
///
/// Names compare case-insensitively, as HTTP requires.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Headers {
    items: Vec<Header>,
}

impl Headers {
    /// Creates an empty header collection.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Appends a header, keeping any existing header of the same name.
    pub fn add(&mut self, header: Header) {
        self.items.push(header);
    }

    /// Sets a header, replacing every existing header of the same name.
    ///
    /// The new header takes the position of the first replaced one so the
    /// order of unrelated headers is preserved.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let header = Header::new(name, value);
        match self.items.iter().position(|h| h.is_named(&header.name)) {
            Some(index) => {
                let name = header.name.clone();
                self.items[index] = header;
                let mut seen = 0usize;
                self.items.retain(|h| {
                    if h.is_named(&name) {
                        seen += 1;
                        seen == 1
                    } else {
                        true
                    }
                });
            }
            None => self.items.push(header),
        }
    }

    /// Returns the value of the first header with the given name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|h| h.is_named(name))
            .map(|h| h.value.as_str())
    }

    /// Returns true if a header with the given name is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|h| h.is_named(name))
    }

    /// Returns an iterator over all headers in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Header> {
        self.items.iter()
    }

    /// Returns the number of headers.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Vec::len is not const in stable
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if there are no headers.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Vec::is_empty is not const in stable
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<Header> for Headers {
    fn from_iter<T: IntoIterator<Item = Header>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_lookup_ignores_case() {
        let mut headers = Headers::new();
        headers.add(Header::new("Content-Type", "application/json"));

        assert_eq!(headers.get("content-type"), Some("application/json"));
        assert!(headers.contains("CONTENT-TYPE"));
        assert!(!headers.contains("Accept"));
    }

    #[test]
    fn test_set_replaces_in_place() {
        let mut headers: Headers = [
            Header::new("Accept", "application/json"),
            Header::new("authorization", "Basic old"),
            Header::new("X-Trace", "1"),
            Header::new("AUTHORIZATION", "Basic older"),
        ]
        .into_iter()
        .collect();

        headers.set(AUTHORIZATION, "Bearer new");

        let names: Vec<_> = headers.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["Accept", "Authorization", "X-Trace"]);
        assert_eq!(headers.get(AUTHORIZATION), Some("Bearer new"));
    }

    #[test]
    fn test_set_appends_when_absent() {
        let mut headers = Headers::new();
        headers.set("Accept", "text/plain");
        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get("accept"), Some("text/plain"));
    }
}
