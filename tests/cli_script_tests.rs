use std::fmt::Write as _;
use std::fs;

use assert_cmd::Command;
use predicates::str::contains;
use tempfile::tempdir;

const DATASET_HEADER: &str = "name,cuisine,rating,address,localAddress,phone,description\n";

fn cli(home: &std::path::Path, dataset: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("lifehub_cli").unwrap();
    cmd.env("LIFEHUB_CLI_SCRIPT", "1")
        .env("LIFEHUB_HOME", home)
        .env("LIFEHUB_RESTAURANTS", dataset);
    cmd
}

#[test]
fn filter_prints_matches_and_exits_cleanly() {
    let temp = tempdir().unwrap();
    let dataset = temp.path().join("restaurants.csv");
    fs::write(
        &dataset,
        format!(
            "{DATASET_HEADER}\
Spice Route,North Indian,4.2,12 MG Road,Indiranagar,080-1111,Classic curries\n\
Pasta Lane,Italian,4.0,44 Church St,Koramangala,080-2222,Wood-fired pizza\n"
        ),
    )
    .unwrap();

    cli(temp.path(), &dataset)
        .write_stdin("filter italian 4.0\nexit\n")
        .assert()
        .success()
        .stdout(contains("Found 1 restaurant(s):"))
        .stdout(contains("- Pasta Lane"))
        .stdout(contains("Rating: 4.0"));
}

#[test]
fn filter_reports_when_nothing_matches() {
    let temp = tempdir().unwrap();
    let dataset = temp.path().join("restaurants.csv");
    fs::write(
        &dataset,
        format!("{DATASET_HEADER}Spice Route,North Indian,4.2,12 MG Road,Indiranagar,080-1111,Curries\n"),
    )
    .unwrap();

    cli(temp.path(), &dataset)
        .write_stdin("filter sushi 4.5\nexit\n")
        .assert()
        .success()
        .stdout(contains("No restaurants matched these filters."));
}

#[test]
fn filter_truncates_past_twenty_matches() {
    let temp = tempdir().unwrap();
    let dataset = temp.path().join("restaurants.csv");
    let mut data = String::from(DATASET_HEADER);
    for index in 0..25 {
        writeln!(
            data,
            "Curry House {index},North Indian,4.{},Street {index},Area {index},080-{index:04},Curries",
            index % 10
        )
        .unwrap();
    }
    fs::write(&dataset, data).unwrap();

    cli(temp.path(), &dataset)
        .write_stdin("filter curry 0\nexit\n")
        .assert()
        .success()
        .stdout(contains("Found 25 restaurant(s):"))
        .stdout(contains("...and 5 more matching restaurants not shown."));
}

#[test]
fn invalid_rating_input_defaults_to_zero() {
    let temp = tempdir().unwrap();
    let dataset = temp.path().join("restaurants.csv");
    fs::write(
        &dataset,
        format!("{DATASET_HEADER}Dosa Corner,South Indian,3.6,2 Jayanagar,Jayanagar,080-4444,Crisp dosas\n"),
    )
    .unwrap();

    cli(temp.path(), &dataset)
        .write_stdin("filter dosa not-a-number\nexit\n")
        .assert()
        .success()
        .stdout(contains("rating: \"0+\""))
        .stdout(contains("- Dosa Corner"));
}

#[test]
fn script_mode_surfaces_insights_and_alerts() {
    let temp = tempdir().unwrap();
    let dataset = temp.path().join("restaurants.csv");
    fs::write(&dataset, DATASET_HEADER).unwrap();

    // No data anywhere yet: one no-data insight, no alerts.
    cli(temp.path(), &dataset)
        .write_stdin("insights\nalerts\ndue\nexit\n")
        .assert()
        .success()
        .stdout(contains("No expenses yet to analyze"))
        .stdout(contains("No budget alerts."))
        .stdout(contains("Nothing due right now."));
}

#[test]
fn unknown_commands_warn_but_do_not_fail() {
    let temp = tempdir().unwrap();
    let dataset = temp.path().join("restaurants.csv");
    fs::write(&dataset, DATASET_HEADER).unwrap();

    cli(temp.path(), &dataset)
        .write_stdin("frobnicate\nexit\n")
        .assert()
        .success()
        .stdout(contains("Unknown command: frobnicate"));
}
