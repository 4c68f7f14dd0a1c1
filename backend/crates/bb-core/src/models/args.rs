use std::collections::HashMap;

/// Key under which a command's unnamed positional value is stored.
pub const UNNAMED_ARG: &str = "_unnamed";

/// Parsed command arguments: flag name to value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args(HashMap<String, String>);

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, flag: impl Into<String>, value: impl Into<String>) {
        self.0.insert(flag.into(), value.into());
    }

    pub fn get(&self, flag: &str) -> Option<&str> {
        self.0.get(flag).map(String::as_str)
    }

    /// The positional value, for commands that accept one
    pub fn unnamed(&self) -> Option<&str> {
        self.get(UNNAMED_ARG)
    }

    /// Positive integer flag value; anything else (absent, zero, negative,
    /// non-numeric) yields None.
    pub fn positive_usize(&self, flag: &str) -> Option<usize> {
        self.get(flag)
            .and_then(|value| value.parse::<usize>().ok())
            .filter(|value| *value > 0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Args {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(flag, value)| (flag.into(), value.into()))
                .collect(),
        )
    }
}
