use std::fs;
use std::process::Command;

fn whitepaper_pdf() -> Command {
    Command::new(env!("CARGO_BIN_EXE_whitepaper-pdf"))
}

#[test]
fn missing_input_exits_with_status_one() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("absent.txt");
    let output = dir.path().join("absent.pdf");

    let result = whitepaper_pdf()
        .arg(&input)
        .arg(&output)
        .output()
        .expect("run whitepaper-pdf");

    assert_eq!(result.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(
        stderr.contains(&format!("Error: Input file '{}' not found!", input.display())),
        "unexpected stderr: {stderr}"
    );
    assert!(result.stdout.is_empty());
    assert!(!output.exists());
}

#[test]
fn unreadable_input_reports_a_generation_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("paper.txt");
    let output = dir.path().join("paper.pdf");
    fs::write(&input, [0xff, 0xfe, 0x00, 0x9f]).expect("write input");

    let result = whitepaper_pdf()
        .arg(&input)
        .arg(&output)
        .output()
        .expect("run whitepaper-pdf");

    assert_eq!(result.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.starts_with("Error generating PDF: "), "unexpected stderr: {stderr}");
    assert!(stderr.contains("caused by:"), "unexpected stderr: {stderr}");
    assert!(!output.exists());
}
