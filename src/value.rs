//! Values a named option can carry.
//!
//! A named option's value is either a scalar string, one of the reserved
//! literals, or a composite set of `name[:value]` pairs. Pair order is kept as
//! encountered so consumers that care about order can iterate it.
use std::fmt;

use crate::parse::escape_value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    /// Plain text after unescaping.
    Str(String),
    /// `true` or `false` literal.
    Bool(bool),
    /// `null` literal, or a named option that never received a value.
    Null,
    /// `undefined` literal.
    Undefined,
    Composite(CompositeValue),
}

impl OptionValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            OptionValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_composite(&self) -> Option<&CompositeValue> {
        match self {
            OptionValue::Composite(c) => Some(c),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, OptionValue::Null)
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            OptionValue::Str(_) => "string",
            OptionValue::Bool(_) => "bool",
            OptionValue::Null => "null",
            OptionValue::Undefined => "undefined",
            OptionValue::Composite(_) => "composite",
        }
    }
}

/// Renders the escaped text form, which parses back to the same value.
impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OptionValue::Str(s) => write!(f, "{}", escape_value(s)),
            OptionValue::Bool(b) => write!(f, "{b}"),
            OptionValue::Null => write!(f, "null"),
            OptionValue::Undefined => write!(f, "undefined"),
            OptionValue::Composite(c) => write!(f, "{c}"),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Str(value.to_string())
    }
}

/// One `name[:value]` entry of a composite value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    pub name: String,
    pub value: Option<String>,
}

impl Pair {
    pub fn new(name: impl Into<String>, value: Option<String>) -> Self {
        Pair {
            name: name.into(),
            value,
        }
    }
}

/// Ordered set of pairs keyed by name.
///
/// Inserting an existing name replaces its value but keeps its original
/// position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompositeValue {
    pairs: Vec<Pair>,
}

impl CompositeValue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: Option<String>) {
        let name = name.into();
        if let Some(existing) = self.pairs.iter_mut().find(|p| p.name == name) {
            existing.value = value;
        } else {
            self.pairs.push(Pair { name, value });
        }
    }

    /// Outer `None` means the name is missing, inner `None` means it has no value.
    pub fn get(&self, name: &str) -> Option<Option<&str>> {
        self.pairs
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value.as_deref())
    }

    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pair> {
        self.pairs.iter()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl fmt::Display for CompositeValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (idx, pair) in self.pairs.iter().enumerate() {
            if idx > 0 {
                f.write_str(",")?;
            }
            // Keys are kept exactly as captured, so they are already escaped.
            f.write_str(&pair.name)?;
            if let Some(value) = &pair.value {
                write!(f, ":{}", escape_value(value))?;
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a CompositeValue {
    type Item = &'a Pair;
    type IntoIter = std::slice::Iter<'a, Pair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

impl FromIterator<Pair> for CompositeValue {
    fn from_iter<T: IntoIterator<Item = Pair>>(iter: T) -> Self {
        let mut out = CompositeValue::new();
        for pair in iter {
            out.insert(pair.name, pair.value);
        }
        out
    }
}
