use assert_cmd::Command;

fn sum_cli() -> Command {
    let mut command = Command::cargo_bin("sum-cli").unwrap();
    command.env_remove("RUST_LOG");
    command
}

#[test]
fn flags_are_added() {
    sum_cli()
        .args(["--num1", "2", "--num2", "5"])
        .assert()
        .success()
        .stdout("The sum of 2.0 and 5.0 is 7.0.\n");
}

#[test]
fn fractional_flags_keep_full_precision() {
    sum_cli()
        .args(["--num1", "0.1", "--num2", "0.2"])
        .assert()
        .success()
        .stdout("The sum of 0.1 and 0.2 is 0.30000000000000004.\n");
}

#[test]
fn missing_flag_prints_usage() {
    let assert = sum_cli().args(["--num1", "2"]).assert().failure().code(2);
    let output = assert.get_output();
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr.clone()).unwrap();
    assert!(stderr.contains("--num2"), "{}", stderr);
    assert!(stderr.contains("required"), "{}", stderr);
    assert!(stderr.contains("Usage"), "{}", stderr);
}

#[test]
fn invalid_number_is_rejected() {
    let assert = sum_cli()
        .args(["--num1", "abc", "--num2", "5"])
        .assert()
        .failure()
        .code(1);
    let output = assert.get_output();
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr.clone()).unwrap();
    assert!(stderr.contains("--num1"), "{}", stderr);
    assert!(stderr.contains("abc"), "{}", stderr);
}

#[test]
fn invalid_second_number_names_its_flag() {
    let assert = sum_cli()
        .args(["--num1", "2", "--num2", "5x"])
        .assert()
        .failure()
        .code(1);
    let output = assert.get_output();
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr.clone()).unwrap();
    assert!(stderr.contains("'--num2'"), "{}", stderr);
    assert!(!stderr.contains("'--num1'"), "{}", stderr);
    assert!(stderr.contains("5x"), "{}", stderr);
}

#[test]
fn repeated_invocations_match() {
    let first = sum_cli().args(["--num1", "-4.5", "--num2", "1e3"]).output().unwrap();
    let second = sum_cli().args(["--num1", "-4.5", "--num2", "1e3"]).output().unwrap();
    assert_eq!(first.status.code(), Some(0));
    assert_eq!(first.status.code(), second.status.code());
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(
        String::from_utf8(first.stdout).unwrap(),
        "The sum of -4.5 and 1000.0 is 995.5.\n"
    );
}
