use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_nth_prime() {
    cargo_bin_cmd!("primetime")
        .args(["nth-prime", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The 3rd prime is 5"));
}

#[test]
fn test_nth_prime_zero_fails() {
    cargo_bin_cmd!("primetime")
        .args(["nth-prime", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 1"));
}

#[test]
fn test_is_prime() {
    cargo_bin_cmd!("primetime")
        .args(["is-prime", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("7 is prime"));

    cargo_bin_cmd!("primetime")
        .args(["is-prime", "-7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-7 is not prime"));
}
