use std::path::Path;
use std::process::{Command, Output};

/// Run the CLI against an isolated data directory, without simulated delays.
pub fn run_cli(args: &[&str], data_dir: &Path) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_jobboard"));
    cmd.args(args);
    cmd.env("JOBBOARD_DATA_DIR", data_dir);
    cmd.env("JOBBOARD_LATENCY", "off");
    cmd.env("JOBBOARD_HASH_COST", "4");
    cmd.env_remove("JOBBOARD_FIXTURES");
    cmd.env_remove("RUST_LOG");
    cmd.env("NO_COLOR", "1");
    cmd.output().expect("Failed to execute CLI")
}

/// Run the CLI and expect success, returning stdout.
pub fn run_cli_success(args: &[&str], data_dir: &Path) -> String {
    let output = run_cli(args, data_dir);
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Run the CLI and expect failure, returning stderr.
pub fn run_cli_failure(args: &[&str], data_dir: &Path) -> String {
    let output = run_cli(args, data_dir);
    if output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        panic!("CLI command unexpectedly succeeded: {:?}\nstdout: {}", args, stdout);
    }
    String::from_utf8_lossy(&output.stderr).to_string()
}

pub fn register_student(data_dir: &Path, email: &str) -> String {
    run_cli_success(
        &[
            "register",
            "student",
            "--name",
            "Sam Student",
            "--email",
            email,
            "--password",
            "Secret1!",
            "--institution",
            "State University",
            "--graduation-year",
            "2026",
            "--major",
            "Computer Science",
            "--skills",
            "Rust, SQL",
        ],
        data_dir,
    )
}

pub fn register_recruiter(data_dir: &Path, email: &str) -> String {
    run_cli_success(
        &[
            "register",
            "recruiter",
            "--name",
            "Rita Recruiter",
            "--email",
            email,
            "--password",
            "Secret1!",
            "--company",
            "Acme",
            "--job-title",
            "Talent Lead",
            "--phone",
            "+1 555 0100",
        ],
        data_dir,
    )
}
