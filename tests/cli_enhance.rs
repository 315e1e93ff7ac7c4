use std::process::Command;

#[test]
fn cli_enhance_outputs_prompt() -> Result<(), Box<dyn std::error::Error>> {
    let output = Command::new(env!("CARGO_BIN_EXE_mcp-microscopy"))
        .args([
            "enhance",
            "--prompt",
            "a pollen grain",
            "--type",
            "electron",
            "--magnification",
            "high",
        ])
        .output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.starts_with("a pollen grain, rendered with electron (sem/tem) microscopy"));
    assert!(stdout.contains("molecular-scale atomic arrangements"));
    Ok(())
}

#[test]
fn cli_enhance_json_reports_word_count() -> Result<(), Box<dyn std::error::Error>> {
    let output = Command::new(env!("CARGO_BIN_EXE_mcp-microscopy"))
        .args([
            "enhance",
            "--prompt",
            "a diatom",
            "--type",
            "phase contrast",
            "--strength",
            "subtle",
            "--json",
        ])
        .output()?;

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(
        value.get("modality").and_then(|v| v.as_str()),
        Some("phase_contrast")
    );
    assert_eq!(
        value
            .get("characteristics")
            .and_then(|v| v.as_array())
            .map(|items| items.len()),
        Some(2)
    );
    let words = value
        .get("word_count")
        .and_then(|v| v.as_u64())
        .expect("word_count present");
    assert!((60..=80).contains(&words));
    Ok(())
}

#[test]
fn cli_enhance_unknown_type_fails() -> Result<(), Box<dyn std::error::Error>> {
    let output = Command::new(env!("CARGO_BIN_EXE_mcp-microscopy"))
        .args(["enhance", "--prompt", "x", "--type", "x-ray"])
        .output()?;

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Unknown microscopy type 'x-ray'"));
    assert!(stderr.contains("multiphoton"));
    Ok(())
}
