use crate::profiles::ProfileStore;
use crate::tools::json_result;
use serde_json::{Map, Value, json};

pub fn call(store: &ProfileStore, _args: &Value) -> Value {
    let mut types = Map::new();
    for profile in store.profiles() {
        types.insert(
            profile.id.clone(),
            json!({
                "display_name": profile.display_name,
                "description": profile.description,
            }),
        );
    }

    let types = Value::Object(types);
    json_result(json!({ "types": types }), &types)
}
