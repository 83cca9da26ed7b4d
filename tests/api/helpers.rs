//! tests/api/helpers.rs
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

pub fn test_data_dir() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("data");
    path
}

pub fn read_test_file(name: &str) -> String {
    let mut path = test_data_dir();
    path.push(name);
    std::fs::read_to_string(path).expect("Failed to read test file")
}

fn run(program: &str, input: &[u8]) -> Output {
    let mut child = Command::new(program)
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn stage");

    let mut stdin = child.stdin.take().expect("Failed to open stdin");
    let input = input.to_vec();
    let writer = std::thread::spawn(move || stdin.write_all(&input));

    let output = child.wait_with_output().expect("Failed to wait for stage");
    writer
        .join()
        .expect("Writer thread panicked")
        .expect("Failed to write stdin");
    output
}

pub fn run_mapper(input: &[u8]) -> Output {
    run(env!("CARGO_BIN_EXE_mapper"), input)
}

pub fn run_reducer(input: &[u8]) -> Output {
    run(env!("CARGO_BIN_EXE_reducer"), input)
}

pub fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8(output.stdout.clone())
        .expect("Stage wrote invalid UTF-8")
        .lines()
        .map(String::from)
        .collect()
}

/// Stands in for the shuffle step that sits between the stages.
pub fn sort_lines(bytes: &[u8]) -> Vec<u8> {
    let text = std::str::from_utf8(bytes).expect("Stage wrote invalid UTF-8");
    let mut lines: Vec<&str> = text.lines().collect();
    lines.sort_by(|a, b| {
        let key = |l: &str| l.split('\t').next().unwrap_or_default().to_owned();
        key(a).cmp(&key(b))
    });
    let mut sorted = lines.join("\n");
    if !sorted.is_empty() {
        sorted.push('\n');
    }
    sorted.into_bytes()
}
