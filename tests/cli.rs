//! E2E tests for the summary, projection, optimise and schema commands

use std::process::{Command, Output};

fn supersim(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_supersim"))
        .args(args)
        .output()
        .expect("Failed to execute command")
}

/// Test the worked scenario summary from flags
#[test]
fn summary_from_flags() {
    let output = supersim(&[
        "summary",
        "--salary",
        "100000",
        "--negative-gearing",
        "30000",
        "--salary-sacrifice",
        "8400",
        "--start-balance",
        "100000",
        "--years",
        "1",
        "--fees-rate",
        "0.0075",
        "--private-insured",
    ]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("AUD 61600.00"));
    assert!(stdout.contains("AUD 10072.00"));
    assert!(stdout.contains("AUD 1232.00"));
    assert!(stdout.contains("AUD 17340.00"));
    assert!(stdout.contains("AUD 80296.00"));
    assert!(stdout.contains("SG (at 12%)"));
    assert!(!stdout.contains("WARNING"));
}

/// Test JSON summary output from a scenario file
#[test]
fn summary_json_from_file() {
    let output = supersim(&["summary", "--file", "tests/data/worked_scenario.json", "--json"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid json");
    assert_eq!(json["taxable_income"], "61600.00");
    assert_eq!(json["income_tax"], "10072.00");
    assert_eq!(json["take_home_cash"], "80296.00");
    assert_eq!(json["caps"]["max_additional_sacrifice"], "18000.00");
    assert_eq!(json["projection_years"], 1);
    assert_eq!(json["final_balance"], "122444.29");
}

/// Test over-cap warning in the text summary
#[test]
fn summary_warns_when_over_cap() {
    let output = supersim(&["summary", "--salary", "100000", "--salary-sacrifice", "25000"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("WARNING: Over cap by AUD 7000.00"));
}

/// Test projection CSV export to stdout
#[test]
fn projection_csv() {
    let output = supersim(&[
        "projection",
        "--file",
        "tests/data/worked_scenario.json",
        "--csv",
    ]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "year,start_balance,net_cc_in,gross_earnings,earnings_tax,fees,end_balance",
            "1,100000.00,17340.00,7040.40,1056.06,880.05,122444.29",
        ]
    );
}

/// Test a two year projection rounds every amount to cents
#[test]
fn projection_csv_two_years() {
    let output = supersim(&[
        "projection",
        "--salary",
        "100000",
        "--negative-gearing",
        "30000",
        "--salary-sacrifice",
        "8400",
        "--start-balance",
        "100000",
        "--years",
        "2",
        "--fees-rate",
        "0.0075",
        "--csv",
    ]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    let lines: Vec<_> = stdout.lines().skip(1).collect();
    assert_eq!(
        lines,
        vec![
            "1,100000.00,17340.00,7040.40,1056.06,880.05,122444.29",
            "2,122444.29,17340.00,8387.06,1258.06,1048.38,145864.91",
        ]
    );
}

/// Test a projection long enough to reach the numeric limit still completes
#[test]
fn projection_csv_long_horizon() {
    let output = supersim(&["projection", "--salary", "100000", "--years", "1500", "--csv"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 1501);
    assert!(lines[1500].starts_with("1500,"));
    let end_balance = |line: &str| line.rsplit(',').next().unwrap().to_string();
    assert_eq!(end_balance(lines[1499]), end_balance(lines[1500]));
}

/// Test projection table with zero years still reports one year
#[test]
fn projection_table_zero_years() {
    let output = supersim(&["projection", "--salary", "90000", "--years", "0"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("end_balance"));
    // 10800 SG less 15% tax, grown at 6% less 15% earnings tax
    assert!(stdout.contains("9648.18"));
}

/// Test the salary sacrifice optimiser
#[test]
fn optimise_fills_cap() {
    let output = supersim(&[
        "optimise",
        "--file",
        "tests/data/worked_scenario.json",
        "--json",
    ]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid json");
    assert_eq!(json["current_sacrifice"], "8400.00");
    assert_eq!(json["optimised_sacrifice"], "18000.00");
    assert_eq!(json["additional_sacrifice"], "9600.00");
    assert_eq!(json["super_inflow_change"], "8160.00");
}

/// Test invalid custom schedules are rejected
#[test]
fn bad_schedule_fails() {
    let output = supersim(&["summary", "--file", "tests/data/bad_schedule.json"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("not above the previous bracket"));
}

/// Test schema outputs
#[test]
fn schema_formats() {
    let output = supersim(&["schema", "csv-header"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "Command failed: {:?}", output);
    assert_eq!(
        stdout.trim(),
        "year,start_balance,net_cc_in,gross_earnings,earnings_tax,fees,end_balance"
    );

    let output = supersim(&["schema"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("ScenarioFile"));
}
