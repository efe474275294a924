//! Strategy parameter mapping.
//!
//! String keys to scalar values, as written in a `[params]` TOML table.
//! Uses `BTreeMap` for deterministic key ordering during serialization and
//! fingerprinting. Variants look keys up with a default; unknown keys are
//! carried but ignored.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One scalar parameter value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl ParamValue {
    /// Numeric view. Integers widen to f64.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(v) => Some(*v as f64),
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Non-negative whole number, including floats such as `14.0`.
    /// Floats beyond `usize::MAX` are rejected rather than saturated.
    pub fn as_usize(&self) -> Option<usize> {
        match self {
            Self::Int(v) => usize::try_from(*v).ok(),
            Self::Float(v)
                if v.is_finite() && *v >= 0.0 && v.fract() == 0.0 && *v < usize::MAX as f64 =>
            {
                Some(*v as usize)
            }
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v),
            _ => None,
        }
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for ParamValue {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<usize> for ParamValue {
    fn from(v: usize) -> Self {
        Self::Int(i64::try_from(v).unwrap_or(i64::MAX))
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StrategyParams(BTreeMap<String, ParamValue>);

impl StrategyParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Whole-number parameter, falling back to `default` when absent or not
    /// representable.
    pub fn get_usize(&self, key: &str, default: usize) -> usize {
        self.get(key).and_then(ParamValue::as_usize).unwrap_or(default)
    }

    /// Numeric parameter, falling back to `default`.
    pub fn get_f64(&self, key: &str, default: f64) -> f64 {
        self.get(key).and_then(ParamValue::as_f64).unwrap_or(default)
    }

    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.get(key).and_then(ParamValue::as_bool).unwrap_or(default)
    }

    /// True when `key` is absent or holds a non-negative whole number.
    /// Lets `validate()` reject e.g. `rsi_period = -3` that `get_usize` would
    /// silently replace by the default.
    pub fn is_usize_or_absent(&self, key: &str) -> bool {
        self.get(key).map_or(true, |v| v.as_usize().is_some())
    }

    /// True when `key` is absent or holds a finite number.
    pub fn is_number_or_absent(&self, key: &str) -> bool {
        self.get(key)
            .map_or(true, |v| v.as_f64().is_some_and(f64::is_finite))
    }

    /// Keys not listed in `known`.
    pub fn unknown_keys<'a>(&'a self, known: &[&str]) -> Vec<&'a str> {
        self.0
            .keys()
            .map(String::as_str)
            .filter(|k| !known.contains(k))
            .collect()
    }

    /// `defaults` overlaid with every entry of `self`.
    pub fn merged_over(&self, defaults: StrategyParams) -> StrategyParams {
        let mut merged = defaults;
        for (k, v) in &self.0 {
            merged.0.insert(k.clone(), v.clone());
        }
        merged
    }

    /// Copy with every integer widened to a float, so `30` and `30.0`
    /// compare and hash alike.
    pub fn normalized(&self) -> StrategyParams {
        self.0
            .iter()
            .map(|(k, v)| {
                let v = match v {
                    ParamValue::Int(i) => ParamValue::Float(*i as f64),
                    other => other.clone(),
                };
                (k.clone(), v)
            })
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for StrategyParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
