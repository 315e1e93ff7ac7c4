use std::process::Command;

#[test]
fn cli_suggest_outputs_ranked_json() -> Result<(), Box<dyn std::error::Error>> {
    let output = Command::new(env!("CARGO_BIN_EXE_mcp-microscopy"))
        .args([
            "suggest",
            "--description",
            "a dramatic dark scene with rim light",
        ])
        .output()?;

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    let suggestions = value.as_array().expect("array output");
    assert!(!suggestions.is_empty() && suggestions.len() <= 3);
    assert_eq!(
        suggestions[0].get("type").and_then(|v| v.as_str()),
        Some("darkfield")
    );
    assert_eq!(
        suggestions[0].get("confidence").and_then(|v| v.as_str()),
        Some("high")
    );
    Ok(())
}

#[test]
fn cli_list_types_json() -> Result<(), Box<dyn std::error::Error>> {
    let output = Command::new(env!("CARGO_BIN_EXE_mcp-microscopy"))
        .args(["list-types", "--json"])
        .output()?;

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    let types = value
        .get("types")
        .and_then(|v| v.as_object())
        .expect("types object");
    assert_eq!(types.len(), 7);
    assert!(types.contains_key("multiphoton"));
    Ok(())
}
