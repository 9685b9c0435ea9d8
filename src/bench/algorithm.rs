use super::*;
use crate::solver::Constructor;
use serde_json::Value;

/// A requested benchmark unit: how to build the algorithm, what to call it,
/// and which options to forward to its constructor.
pub struct AlgorithmConfig<G> {
    constructor: Constructor<G>,
    name: String,
    options: Options,
    schedule: Option<Schedule>,
}

impl<G> Clone for AlgorithmConfig<G> {
    fn clone(&self) -> Self {
        Self {
            constructor: self.constructor,
            name: self.name.clone(),
            options: self.options.clone(),
            schedule: self.schedule,
        }
    }
}

impl<G> AlgorithmConfig<G> {
    pub fn new(constructor: Constructor<G>, name: impl Into<String>) -> Self {
        Self {
            constructor,
            name: name.into(),
            options: Options::default(),
            schedule: None,
        }
    }
    pub fn with_options(self, options: Options) -> Self {
        Self { options, ..self }
    }
    /// Override the batch-wide schedule for this entry only.
    pub fn with_schedule(self, schedule: Schedule) -> Self {
        Self {
            schedule: Some(schedule),
            ..self
        }
    }
    pub fn constructor(&self) -> Constructor<G> {
        self.constructor
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn options(&self) -> &Options {
        &self.options
    }
    pub fn schedule(&self) -> Option<Schedule> {
        self.schedule
    }

    /// Parse a config described as data: `[key, name]` or
    /// `[key, name, {options}]`, with `key` resolved through `registry`.
    pub fn parse(registry: &Registry<G>, entry: &Value) -> Result<Self, BenchError> {
        let Value::Array(items) = entry else {
            return Err(BenchError::Config(format!(
                "expected [algorithm, name] or [algorithm, name, options], got {}",
                entry
            )));
        };
        let (key, name, options) = match items.as_slice() {
            [key, name] => (key, name, Options::default()),
            [key, name, options] => (key, name, Options::try_from(options.clone())?),
            _ => {
                return Err(BenchError::Config(format!(
                    "expected 2 or 3 elements, got {} in {}",
                    items.len(),
                    entry
                )));
            }
        };
        let key = key
            .as_str()
            .ok_or_else(|| BenchError::Config(format!("algorithm key must be a string, got {}", key)))?;
        let name = name
            .as_str()
            .ok_or_else(|| BenchError::Config(format!("display name must be a string, got {}", name)))?;
        let constructor = registry.get(key).ok_or_else(|| {
            BenchError::Config(format!(
                "unknown algorithm {:?}, expected one of [{}]",
                key,
                registry.keys().collect::<Vec<_>>().join(", ")
            ))
        })?;
        Ok(Self::new(constructor, name).with_options(options))
    }
}
