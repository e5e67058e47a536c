//! JSON request-body scrubbing
//!
//! GraphQL POST bodies arrive as `{"query": ..., "variables": {...}}`.
//! The query member is scrubbed as a document; variables are plain request
//! data, so deny-listed keys are filtered wherever they appear in the
//! object tree.

use serde_json::Value;

use crate::ParamFilter;

impl ParamFilter {
    /// Scrub a JSON-encoded GraphQL request body. Input that is not valid
    /// JSON passes through unchanged.
    pub fn scrub_request(&self, body: &str) -> String {
        let mut json: Value = match serde_json::from_str(body) {
            Ok(value) => value,
            Err(_) => return body.to_string(),
        };

        if let Some(object) = json.as_object_mut() {
            if let Some(Value::String(query)) = object.get_mut("query") {
                let scrubbed = self.scrub_query(query.as_str());
                *query = scrubbed;
            }
            if let Some(variables) = object.get_mut("variables") {
                self.scrub_variables(variables);
            }
        }

        json.to_string()
    }

    fn scrub_variables(&self, value: &mut Value) {
        match value {
            Value::Object(map) => {
                for (key, item) in map.iter_mut() {
                    if self.scrubber().is_filtered(key) {
                        *item = Value::String(self.placeholder().to_string());
                    } else {
                        self.scrub_variables(item);
                    }
                }
            }
            Value::Array(items) => {
                for item in items.iter_mut() {
                    self.scrub_variables(item);
                }
            }
            _ => {}
        }
    }
}
