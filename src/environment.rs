use std::collections::HashMap;

/// Name to integer bindings that expressions are evaluated against.
///
/// Names are case-sensitive. Defining a name twice keeps the later value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    variables: HashMap<String, i32>,
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            variables: HashMap::new(),
        }
    }

    pub fn define(&mut self, name: impl Into<String>, value: i32) {
        self.variables.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<i32> {
        self.variables.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, i32)> for Environment {
    fn from_iter<I: IntoIterator<Item = (K, i32)>>(iter: I) -> Self {
        let mut env = Environment::new();
        env.extend(iter);
        env
    }
}

impl<K: Into<String>> Extend<(K, i32)> for Environment {
    fn extend<I: IntoIterator<Item = (K, i32)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.define(name, value);
        }
    }
}
