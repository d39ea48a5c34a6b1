use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

mod common;

#[test]
fn test_malformed_csv_handling() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("robustness.csv");
    common::write_action_csv(
        &path,
        &[
            ["add", "1", "Ball", "10.00", "1", "ball.jpg"],
            // Unknown action type
            ["clear", "1", "", "", "", ""],
            // Add without a price
            ["add", "2", "Cap", "", "1", ""],
            // Negative price
            ["add", "3", "Gloves", "-4.00", "1", ""],
            ["add", "1", "Ball", "10.00", "2", "ball.jpg"],
        ],
    )
    .unwrap();

    let mut cmd = Command::new(cargo_bin!("cart-engine"));
    cmd.arg(&path);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error reading action"))
        .stderr(predicate::str::contains("error=Validation error"))
        .stdout(predicate::str::contains("1,Ball,10.00,3,30.00"))
        .stdout(predicate::str::contains("30.00,3.00,33.00,1,3,1"));
}

#[test]
fn test_invalid_data_types() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "type, id, name, price, quantity, image").unwrap();
    writeln!(file, "add, 1, Ball, not_a_price, 1, ").unwrap();
    writeln!(file, "add, 1, Ball, 5.00, many, ").unwrap();
    writeln!(file, "add, 2, Cap, 5.00, 1, ").unwrap();
    writeln!(file, "update, 2, , , 1.5, ").unwrap();

    let mut cmd = Command::new(cargo_bin!("cart-engine"));
    cmd.arg(file.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error reading action"))
        .stdout(predicate::str::contains("2,Cap,5.00,1,5.00"))
        .stdout(predicate::str::contains("1,Ball").not());
}

#[test]
fn test_stepper_below_one_removes_item() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "type, id, name, price, quantity, image").unwrap();
    writeln!(file, "add, 1, Ball, 89.99, 1, ball.jpg").unwrap();
    writeln!(file, "update, 1, , , 0, ").unwrap();
    writeln!(file, "update, 1, , , 3, ").unwrap();

    let mut cmd = Command::new(cargo_bin!("cart-engine"));
    cmd.arg(file.path());

    // The update after removal targets an absent id and is ignored.
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("0.00,0.00,0.00,0,0,0"));
}

#[test]
fn test_unrepresentable_total_is_ignored() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "type, id, name, price, quantity, image").unwrap();
    writeln!(file, "add, 1, Yacht, 100000000000000000000.00, 1, ").unwrap();
    writeln!(file, "update, 1, , , 99999999999, ").unwrap();

    let mut cmd = Command::new(cargo_bin!("cart-engine"));
    cmd.arg(file.path());

    // The update would overflow the total, so the cart keeps one yacht.
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "1,Yacht,100000000000000000000.00,1,100000000000000000000.00",
        ));
}

#[test]
fn test_long_prices_keep_every_digit() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "type, id, name, price, quantity, image").unwrap();
    writeln!(file, "add, 1, Ball, 12345678901234567.89, 1, ").unwrap();
    writeln!(file, "add, 2, Boat, 19999999999999999999, 1, ").unwrap();

    let mut cmd = Command::new(cargo_bin!("cart-engine"));
    cmd.arg(file.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "1,Ball,12345678901234567.89,1,12345678901234567.89",
        ))
        .stdout(predicate::str::contains(
            "2,Boat,19999999999999999999.00,1,19999999999999999999.00",
        ));
}
