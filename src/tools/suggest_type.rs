use crate::input::{arguments, required_str};
use crate::profiles::ProfileStore;
use crate::suggest::suggest;
use crate::tools::{error_result, json_result};
use serde_json::{Value, json};

pub fn call(store: &ProfileStore, args: &Value) -> Value {
    let description = match arguments(args).and_then(|obj| required_str(obj, "description")) {
        Ok(description) => description,
        Err(err) => return error_result(err.kind, err.message, None),
    };

    let suggestions = json!(suggest(store, description));
    json_result(json!({ "suggestions": suggestions }), &suggestions)
}
