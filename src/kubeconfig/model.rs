use super::{KubeconfigError, KubeconfigResult};
use serde_yaml::{Mapping, Value};

pub const CURRENT_CONTEXT: &str = "current-context";
pub const CONTEXTS: &str = "contexts";
pub const NAME: &str = "name";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigDocument(Mapping);

impl ConfigDocument {
    pub fn parse(contents: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(contents).map(Self)
    }

    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(&self.0)
    }

    pub fn field(&self, key: &'static str) -> KubeconfigResult<&Value> {
        self.0.get(key).ok_or(KubeconfigError::MissingField(key))
    }

    pub fn str_field(&self, key: &'static str) -> KubeconfigResult<&str> {
        self.field(key)?
            .as_str()
            .ok_or(KubeconfigError::WrongType {
                field: key,
                expected: "string",
            })
    }

    pub fn seq_field(&self, key: &'static str) -> KubeconfigResult<&[Value]> {
        self.0
            .get(key)
            .and_then(Value::as_sequence)
            .map(Vec::as_slice)
            .ok_or(KubeconfigError::MissingField(key))
    }

    pub fn set_str(&mut self, key: &'static str, value: &str) {
        self.0
            .insert(Value::from(key), Value::String(value.to_owned()));
    }
}
