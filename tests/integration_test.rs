use std::fs;
use std::path::Path;
use std::process::Command;
use anyhow::Result;
use tempfile::TempDir;

const HEADER: &str = "Date,Received Quantity,Received Currency,Sent Quantity,Sent Currency,Fee Amount,Fee Currency,Tag";

#[test]
fn test_cli_correctly_processes_sample() -> Result<()> {
    let binary_path = env!("CARGO_BIN_EXE_history-transformer");
    let sample_path = Path::new("samples").join("history.csv");
    let directory = TempDir::new()?;
    let output_path = directory.path().join("history_transformed.csv");

    let output = Command::new(binary_path)
        .arg(&sample_path)
        .arg(&output_path)
        .output()?;

    assert!(output.status.success());

    let stderr = String::from_utf8(output.stderr)?;

    assert!(stderr.contains("staking"));
    assert!(stderr.contains("abc"));

    let written = fs::read_to_string(&output_path)?;
    let lines: Vec<&str> = written.lines().collect();

    assert_eq!(lines, vec![
        HEADER,
        "2023-01-05 10:22:31,0.5,BTC,,,,,",
        "2023-01-05 11:02:10,1000,EUR,,,,,",
        "2023-01-06 09:15:00,2,ETH,3000,EUR,1.25,EUR,",
        "2023-01-08 13:00:00,1600,EUR,1,ETH,0.8,EUR,",
        "2023-01-10 20:00:00,,,0.25,BTC,0.0001,BTC,",
    ]);

    Ok(())
}

#[test]
fn test_cli_accepts_legacy_paid_amount_column() -> Result<()> {
    let binary_path = env!("CARGO_BIN_EXE_history-transformer");
    let sample_path = Path::new("samples").join("history_legacy.csv");
    let directory = TempDir::new()?;
    let output_path = directory.path().join("legacy_transformed.csv");

    let output = Command::new(binary_path)
        .arg(&sample_path)
        .arg(&output_path)
        .output()?;

    assert!(output.status.success());

    let written = fs::read_to_string(&output_path)?;
    let lines: Vec<&str> = written.lines().collect();

    assert_eq!(lines, vec![
        HEADER,
        "2022-11-01 08:00:00,500,EUR,,,,,",
        "2022-11-02 09:00:00,1000,ADA,350.5,EUR,0.87,EUR,",
        "2022-11-03 10:00:00,150,EUR,400,ADA,0.37,EUR,",
    ]);

    Ok(())
}

#[test]
fn test_cli_uses_fixed_file_names_by_default() -> Result<()> {
    let binary_path = env!("CARGO_BIN_EXE_history-transformer");
    let directory = TempDir::new()?;
    fs::copy(Path::new("samples").join("history.csv"), directory.path().join("history.csv"))?;

    let output = Command::new(binary_path)
        .current_dir(directory.path())
        .output()?;

    assert!(output.status.success());

    let written = fs::read_to_string(directory.path().join("history_transformed.csv"))?;

    assert_eq!(written.lines().next(), Some(HEADER));
    assert_eq!(written.lines().count(), 6);

    Ok(())
}

#[test]
fn test_cli_fails_when_input_is_missing() -> Result<()> {
    let binary_path = env!("CARGO_BIN_EXE_history-transformer");
    let directory = TempDir::new()?;

    let output = Command::new(binary_path)
        .current_dir(directory.path())
        .output()?;

    assert!(!output.status.success());

    let stderr = String::from_utf8(output.stderr)?;

    assert!(stderr.contains("history.csv"));
    assert!(!directory.path().join("history_transformed.csv").exists());

    Ok(())
}
