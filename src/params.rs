//! Endpoint parameters and their normalization into query-string form.
//!
//! Every endpoint accepts a flat set of `key=value` pairs. Callers build a
//! [`Params`] bag (usually through one of the typed records in
//! [`types`](crate::types) and the [`IntoParams`] trait), and the
//! [`RequestBuilder`](crate::RequestBuilder) normalizes it before encoding.
//!
//! Normalization never percent-encodes. Encoding happens once, when the
//! normalized pairs are written into a URL or form body.

/// A single parameter value as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// Already textual, sent as is.
    Text(String),
    /// Rendered as plain decimal text.
    Number(u64),
    /// Joined with commas into one value (e.g. several addresses).
    List(Vec<String>),
    /// Not set. Dropped during normalization.
    Absent,
}

impl ParamValue {
    /// Canonical text of this value, or `None` when it must not be sent.
    fn render(&self) -> Option<String> {
        match self {
            Self::Text(s) => Some(s.clone()),
            Self::Number(n) => Some(n.to_string()),
            Self::List(items) => Some(items.join(",")),
            Self::Absent => None,
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

macro_rules! number_param {
    ($($t:ty),*) => {
        $(
            impl From<$t> for ParamValue {
                fn from(value: $t) -> Self {
                    Self::Number(u64::from(value))
                }
            }
        )*
    };
}

number_param!(u8, u16, u32, u64);

impl From<usize> for ParamValue {
    fn from(value: usize) -> Self {
        u64::try_from(value).map_or_else(|_| Self::Text(value.to_string()), Self::Number)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

impl From<&[String]> for ParamValue {
    fn from(value: &[String]) -> Self {
        Self::List(value.to_vec())
    }
}

impl From<&[&str]> for ParamValue {
    fn from(value: &[&str]) -> Self {
        Self::List(value.iter().map(|s| (*s).to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for ParamValue {
    fn from(value: [&str; N]) -> Self {
        Self::from(&value[..])
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

/// How parameter keys are transformed before they go on the wire.
///
/// Pick one policy per explorer and use it for every request. The typed
/// records in this crate already emit the exact names Etherscan documents,
/// so [`KeyCase::Preserve`] is the default. [`KeyCase::Lowercase`] exists for
/// compatible explorers that only accept lowercase names; it lowercases every
/// key, including `fromBlock` and `toBlock`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyCase {
    /// Keys are sent exactly as supplied.
    #[default]
    Preserve,
    /// Every key is lowercased.
    Lowercase,
}

impl KeyCase {
    fn apply(self, key: &str) -> String {
        match self {
            Self::Preserve => key.to_string(),
            Self::Lowercase => key.to_lowercase(),
        }
    }
}

/// Ordered mapping from parameter name to value.
///
/// Setting a key that is already present replaces its value but keeps its
/// original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    entries: Vec<(String, ParamValue)>,
}

impl Params {
    /// Creates an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`, replacing any previous value for that key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> &mut Self {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
        self
    }

    /// Builder-style variant of [`Params::set`].
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Removes `key`, returning its value if it was present.
    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        let pos = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(pos).1)
    }

    /// Appends every entry of `other`, with the same replace semantics as `set`.
    pub fn extend(&mut self, other: Params) -> &mut Self {
        for (key, value) in other.entries {
            self.set(key, value);
        }
        self
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Produces the canonical form of this bag.
    ///
    /// Numbers become decimal text, lists are comma-joined, absent values
    /// are dropped and keys are transformed by `key_case`. Every value in the
    /// result is [`ParamValue::Text`], so normalizing twice is a no-op.
    #[must_use]
    pub fn normalize(&self, key_case: KeyCase) -> Params {
        let mut out = Params::new();
        for (key, value) in &self.entries {
            if let Some(text) = value.render() {
                out.set(key_case.apply(key), ParamValue::Text(text));
            }
        }
        out
    }

    /// Textual pairs of a bag produced by [`Params::normalize`], which holds
    /// nothing but [`ParamValue::Text`].
    pub(crate) fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().filter_map(|(k, v)| match v {
            ParamValue::Text(text) => Some((k.as_str(), text.as_str())),
            _ => None,
        })
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (k, v) in iter {
            params.set(k, v);
        }
        params
    }
}

/// Conversion of a typed parameter record into a [`Params`] bag.
pub trait IntoParams {
    /// Consumes the record and returns its wire parameters.
    fn into_params(self) -> Params;
}

impl IntoParams for Params {
    fn into_params(self) -> Params {
        self
    }
}
