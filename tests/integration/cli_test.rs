use std::path::PathBuf;
use std::process::{Command, Output};

fn get_binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_nqueens"))
}

fn run_nqueens(args: &[&str]) -> Output {
    Command::new(get_binary_path())
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute nqueens")
}

fn reported_total(stdout: &str) -> u64 {
    stdout
        .lines()
        .find_map(|line| line.strip_prefix("Total number of solutions found: "))
        .expect("Should print the total")
        .trim()
        .parse()
        .expect("Total should be a number")
}

#[test]
fn test_four_queens_output_format() {
    let output = run_nqueens(&["4", "1"]);

    assert!(
        output.status.success(),
        "Command failed with status: {:?}\nstderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();

    // Timing first, then the count.
    assert!(
        lines[0].starts_with("The execution time is ") && lines[0].ends_with(" sec"),
        "First line should report execution time, got: {}",
        lines[0]
    );
    assert_eq!(lines[1], "Total number of solutions found: 2");
}

#[test]
fn test_worker_count_does_not_change_total() {
    for workers in ["1", "4"] {
        let output = run_nqueens(&["4", workers]);
        assert!(output.status.success());
        assert_eq!(reported_total(&String::from_utf8_lossy(&output.stdout)), 2);
    }

    let single = run_nqueens(&["8", "1", "--schedule", "static"]);
    let many = run_nqueens(&["8", "8", "--schedule", "dynamic", "--chunk-size", "100"]);
    assert!(single.status.success() && many.status.success());
    assert_eq!(reported_total(&String::from_utf8_lossy(&single.stdout)), 92);
    assert_eq!(reported_total(&String::from_utf8_lossy(&many.stdout)), 92);
}

#[test]
fn test_trivial_boards() {
    let output = run_nqueens(&["0", "2"]);
    assert!(output.status.success());
    assert_eq!(reported_total(&String::from_utf8_lossy(&output.stdout)), 1);

    let output = run_nqueens(&["2", "2"]);
    assert!(output.status.success());
    assert_eq!(reported_total(&String::from_utf8_lossy(&output.stdout)), 0);
}

#[test]
fn test_show_solutions() {
    let output = run_nqueens(&["4", "2", "--show-solutions", "5"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[1, 3, 0, 2]"), "stdout: {}", stdout);
    assert!(stdout.contains("[2, 0, 3, 1]"), "stdout: {}", stdout);
}

#[test]
fn test_verbose_prints_statistics() {
    let output = run_nqueens(&["5", "2", "--verbose"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Search Statistics:"));
    assert!(stdout.contains("Candidates evaluated: 120"));
    assert!(stdout.contains("worker   0"));
    assert!(stdout.contains("worker   1"));
}

#[test]
fn test_missing_arguments_fail() {
    for args in [&[][..], &["8"][..], &["8", "2", "3"][..]] {
        let output = run_nqueens(args);
        assert!(
            !output.status.success(),
            "Should fail with arguments {:?}",
            args
        );

        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(
            !stdout.contains("Total number of solutions found"),
            "Should not report a count for arguments {:?}",
            args
        );

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Usage"), "stderr: {}", stderr);
    }
}

#[test]
fn test_non_numeric_arguments_fail() {
    let output = run_nqueens(&["eight", "2"]);
    assert!(!output.status.success());

    let output = run_nqueens(&["8", "-1"]);
    assert!(!output.status.success());
}

#[test]
fn test_board_too_large_fails() {
    let output = run_nqueens(&["21", "4"]);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("board size 21 exceeds maximum supported size 20"),
        "stderr: {}",
        stderr
    );
}

#[test]
fn test_zero_workers_fails() {
    let output = run_nqueens(&["8", "0"]);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("worker count must be at least 1"), "stderr: {}", stderr);
}

#[test]
fn test_huge_worker_count_fails() {
    for workers in ["18446744073709551615", "100000000000"] {
        let output = run_nqueens(&["4", workers]);
        assert_eq!(output.status.code(), Some(1), "workers: {}", workers);

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Error: worker count"), "stderr: {}", stderr);
        assert!(stderr.contains("exceeds maximum"), "stderr: {}", stderr);
        assert!(output.stdout.is_empty());
    }
}

#[test]
fn test_timeout_reports_partial_count() {
    let output = run_nqueens(&["15", "2", "--timeout", "1"]);
    // Distinct from clap's usage-error status.
    assert_eq!(output.status.code(), Some(3));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Total number of solutions found"));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("search stopped early"), "stderr: {}", stderr);
}
