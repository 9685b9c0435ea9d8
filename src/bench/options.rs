use super::BenchError;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

/// Named constructor parameters, forwarded verbatim to an algorithm.
///
/// The harness never invents defaults here. An empty set means
/// "no extra options".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Options(Map<String, Value>);

impl Options {
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<Value> for Options {
    type Error = BenchError;
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(BenchError::Config(format!(
                "options must be an object, got {}",
                other
            ))),
        }
    }
}

impl std::fmt::Display for Options {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Value::Object(self.0.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn objects_become_options() {
        let options = Options::try_from(json!({"lookback_depth": 1})).expect("object");
        assert_eq!(options.len(), 1);
        assert_eq!(options.get("lookback_depth"), Some(&json!(1)));
    }

    #[test]
    fn non_objects_are_config_errors() {
        assert!(matches!(
            Options::try_from(json!([1, 2])),
            Err(BenchError::Config(_))
        ));
    }

    #[test]
    fn displays_as_json() {
        let options = Options::default().with("k", 1);
        assert_eq!(options.to_string(), r#"{"k":1}"#);
    }
}
