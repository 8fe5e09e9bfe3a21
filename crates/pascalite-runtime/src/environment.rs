//! Global variable storage for one interpreter run

use crate::value::Value;
use serde::Serialize;
use std::collections::BTreeMap;

/// Mapping from variable name to value
///
/// Names are folded to lowercase on every access, so `X` and `x` are the
/// same variable. Iteration is in name order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Environment {
    vars: BTreeMap<String, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.vars.get(&fold(name))
    }

    /// Bind `name`, returning the previous value if there was one
    pub fn set(&mut self, name: &str, value: Value) -> Option<Value> {
        self.vars.insert(fold(name), value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(&fold(name))
    }

    /// Iterate over `(name, value)` pairs in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Serialize to a JSON object
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

fn fold(name: &str) -> String {
    name.to_lowercase()
}

impl IntoIterator for Environment {
    type Item = (String, Value);
    type IntoIter = std::collections::btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.vars.into_iter()
    }
}

impl<'a> IntoIterator for &'a Environment {
    type Item = (&'a String, &'a Value);
    type IntoIter = std::collections::btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.vars.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_case_insensitive() {
        let mut env = Environment::new();
        env.set("Total", Value::Integer(3));
        assert_eq!(env.get("TOTAL"), Some(&Value::Integer(3)));
        assert!(env.contains("total"));

        let previous = env.set("total", Value::Integer(4));
        assert_eq!(previous, Some(Value::Integer(3)));
        assert_eq!(env.len(), 1);
    }

    #[test]
    fn test_iteration_is_sorted() {
        let mut env = Environment::new();
        env.set("b", Value::Integer(2));
        env.set("a", Value::Integer(1));
        let names: Vec<_> = env.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_json_object() {
        let mut env = Environment::new();
        env.set("x", Value::Integer(5));
        env.set("r", Value::Real(2.5));
        let json: serde_json::Value = serde_json::from_str(&env.to_json().unwrap()).unwrap();
        assert_eq!(json, serde_json::json!({"r": 2.5, "x": 5}));
    }
}
