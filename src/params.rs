//! Transformation parameters.
//!
//! [`Params`] is a multimap from parameter name to one or more values. Keys
//! are kept in a `BTreeMap`, so iteration is always in byte-wise key order no
//! matter how the parameters were inserted. That ordering is what makes the
//! encoded query, and therefore the signature, reproducible.

use std::collections::BTreeMap;

/// Parameter multimap used to build a URL query.
///
/// # Example
///
/// ```
/// use imgix_url::Params;
///
/// let params = Params::new()
///     .with("w", "320")
///     .with_values("auto", ["format", "compress"]);
///
/// assert_eq!(params.get("w"), Some("320"));
/// assert_eq!(params.values("auto"), Some(&["format".to_string(), "compress".to_string()][..]));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    inner: BTreeMap<String, Vec<String>>,
}

impl Params {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`Params::add`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.add(key, value);
        self
    }

    /// Builder-style variant that appends several values under one key.
    pub fn with_values<I, V>(mut self, key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let entry = self.inner.entry(key.into()).or_default();
        entry.extend(values.into_iter().map(Into::into));
        self
    }

    /// Append a value to a key, keeping any existing values.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.inner.entry(key.into()).or_default().push(value.into());
    }

    /// Replace all values of a key with a single value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.inner.insert(key.into(), vec![value.into()]);
    }

    /// Remove a key, returning its values.
    pub fn remove(&mut self, key: &str) -> Option<Vec<String>> {
        self.inner.remove(key)
    }

    /// First value of a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.inner
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// All values of a key.
    pub fn values(&self, key: &str) -> Option<&[String]> {
        self.inner.get(key).map(Vec::as_slice)
    }

    /// Whether a key is present with a non-empty first value.
    ///
    /// An empty string counts as absent, so `w=` does not make an image
    /// fixed-width.
    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some_and(|value| !value.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Iterate over keys and their values in sorted key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.inner
            .iter()
            .map(|(key, values)| (key.as_str(), values.as_slice()))
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut params = Params::new();
        for (key, value) in iter {
            params.add(key, value);
        }
        params
    }
}

impl<K, V> Extend<(K, V)> for Params
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.add(key, value);
        }
    }
}
