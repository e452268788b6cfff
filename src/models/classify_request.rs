use crate::Error;
use serde::Deserialize;

/// Request body of the form `{"inputmsg": "..."}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ClassifyRequest {
    pub inputmsg: Option<String>,
}

impl ClassifyRequest {
    /// Parses a JSON request body. A missing `inputmsg` field is an error; an explicit `null`
    /// is treated as absent input.
    pub fn from_json(body: &str) -> Result<Self, Error> {
        let value: serde_json::Value = serde_json::from_str(body)?;

        let Some(object) = value.as_object() else {
            return Err(Error::ParserError("request body must be a JSON object".to_string()));
        };

        if !object.contains_key("inputmsg") {
            return Err(Error::MissingField("inputmsg".to_string()));
        }

        Ok(serde_json::from_value(value)?)
    }

    pub fn text(&self) -> Option<&str> {
        self.inputmsg.as_deref()
    }
}
