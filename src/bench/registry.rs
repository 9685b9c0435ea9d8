use crate::solver::Constructor;

/// Constructors addressable by key, for configs described as data.
pub struct Registry<G> {
    entries: Vec<(String, Constructor<G>)>,
}

impl<G> Default for Registry<G> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<G> Registry<G> {
    /// Add or replace the constructor stored under `key`.
    pub fn register(mut self, key: impl Into<String>, constructor: Constructor<G>) -> Self {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = constructor,
            None => self.entries.push((key, constructor)),
        }
        self
    }
    pub fn get(&self, key: &str) -> Option<Constructor<G>> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, constructor)| *constructor)
    }
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}
