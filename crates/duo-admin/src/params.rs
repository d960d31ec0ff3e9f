//! Request parameter sets.
//!
//! Operations describe their inputs as plain serde structs: required inputs
//! are ordinary fields, optional inputs are `Option` fields marked
//! `skip_serializing_if = "Option::is_none"`. [`Params::from_serialize`] is
//! the single assembler that turns any such struct into wire-ready pairs:
//!
//! - absent values are never sent,
//! - booleans become `"1"` / `"0"`,
//! - numbers become their decimal string,
//! - strings (and string-serialized enums) pass through untouched.

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::error::{Error, Result};

/// Ordered mapping of parameter names to wire-form string values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    pairs: Vec<(String, String)>,
}

impl Params {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble a parameter set from a serializable description.
    ///
    /// `()` and `None` produce an empty set. Nested arrays or objects are
    /// rejected because they have no form encoding.
    pub fn from_serialize<T>(value: &T) -> Result<Self>
    where
        T: Serialize + ?Sized,
    {
        let value = serde_json::to_value(value)
            .map_err(|e| Error::Precondition(format!("unserializable parameters: {e}")))?;

        let mut params = Self::new();
        match value {
            Value::Null => {}
            Value::Object(map) => {
                for (name, value) in map {
                    if let Some(value) = wire_value(&name, value)? {
                        params.insert(name, value);
                    }
                }
            }
            other => {
                return Err(Error::Precondition(format!(
                    "parameters must be named fields, got `{other}`"
                )));
            }
        }
        Ok(params)
    }

    /// Insert a parameter.
    ///
    /// # Panics
    ///
    /// Panics if `name` is already present. Operations never declare the same
    /// name twice, so a collision is a bug in the caller.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        assert!(
            !self.contains(&name),
            "duplicate request parameter `{name}`"
        );
        self.pairs.push((name, value.into()));
    }

    /// Insert a parameter unless one with the same name exists.
    ///
    /// Returns `true` if the value was inserted.
    pub fn insert_if_absent(&mut self, name: &str, value: &str) -> bool {
        if self.contains(name) {
            return false;
        }
        self.pairs.push((name.to_string(), value.to_string()));
        true
    }

    /// Look up a parameter value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Check whether a parameter is present.
    pub fn contains(&self, name: &str) -> bool {
        self.pairs.iter().any(|(n, _)| n == name)
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Parameter names in insertion order.
    pub fn names(&self) -> Vec<&str> {
        self.pairs.iter().map(|(n, _)| n.as_str()).collect()
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (name, value) in iter {
            params.insert(name, value);
        }
        params
    }
}

fn wire_value(name: &str, value: Value) -> Result<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::Bool(flag) => Ok(Some(if flag { "1" } else { "0" }.to_string())),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::String(s) => Ok(Some(s)),
        Value::Array(_) | Value::Object(_) => Err(Error::Precondition(format!(
            "parameter `{name}` must be a scalar value"
        ))),
    }
}

/// Serialize a present option as `"1"` whatever it holds.
///
/// For flags where sending the parameter at all triggers the action.
pub(crate) fn presence_flag<T, S>(value: &Option<T>, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(_) => serializer.serialize_str("1"),
        None => serializer.serialize_none(),
    }
}
