use serde_json::Value;

use crate::{error::RuntimeError, interpreter::value::core::Constant};

impl TryFrom<&Value> for Constant {
    type Error = RuntimeError;

    /// Casts a context value into a constant.
    ///
    /// Strings become `String`, numbers become `Number` using serde_json's
    /// decimal rendering, and arrays are cast element by element.
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(text) => Ok(Self::String(text.clone())),
            Value::Number(number) => Ok(Self::Number(number.to_string())),
            Value::Array(values) => values.iter()
                                          .map(Self::try_from)
                                          .collect::<Result<Vec<_>, _>>()
                                          .map(Self::Array),
            Value::Null | Value::Bool(_) | Value::Object(_) => {
                Err(RuntimeError::InvalidVariableType(value.clone()))
            },
        }
    }
}
