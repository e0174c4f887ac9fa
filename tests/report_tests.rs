//! End-to-end report tests against a mock hub

mod common;

use common::hafind;
use httpmock::prelude::*;
use predicates::prelude::*;
use serde_json::json;

fn states_body() -> serde_json::Value {
    json!([
        {"entity_id": "sensor.temp", "state": "21.5", "attributes": {}},
        {"entity_id": "light.kitchen", "state": "on",
         "attributes": {"friendly_name": "Kitchen Light"}}
    ])
}

#[test]
fn test_lists_all_entities_sorted_with_summary() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/states")
            .header("authorization", "Bearer test-token");
        then.status(200).json_body(states_body());
    });

    let output = hafind()
        .env("HA_URL", server.base_url())
        .env("HA_TOKEN", "test-token")
        .output()
        .unwrap();

    mock.assert();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("Found 2 entities:"));
    assert!(stdout.contains("Kitchen Light"));
    assert!(stdout.contains("N/A"));

    // Rows come out sorted ascending by entity id
    let light = stdout.find("light.kitchen").unwrap();
    let sensor = stdout.find("sensor.temp").unwrap();
    assert!(light < sensor);

    // Entity table first, domain summary second
    assert!(stdout.find("Entity ID").unwrap() < stdout.find("Domain").unwrap());

    assert!(stdout
        .lines()
        .any(|l| l.starts_with("light ") && l.trim_end().ends_with('1')));
    assert!(stdout
        .lines()
        .any(|l| l.starts_with("sensor ") && l.trim_end().ends_with('1')));
}

#[test]
fn test_domain_filter_limits_report() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/states");
        then.status(200).json_body(states_body());
    });

    let output = hafind()
        .env("HA_URL", server.base_url())
        .env("HA_TOKEN", "test-token")
        .arg("sensor")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("Fetching sensor entities"));
    assert!(stdout.contains("Found 1 entities:"));
    assert!(stdout.contains("sensor.temp"));
    assert!(!stdout.contains("light.kitchen"));
    assert!(!stdout.lines().any(|l| l.starts_with("light ")));
}

#[test]
fn test_no_matches_prints_single_line_and_no_summary() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/states");
        then.status(200).json_body(states_body());
    });

    hafind()
        .env("HA_URL", server.base_url())
        .env("HA_TOKEN", "test-token")
        .arg("switch")
        .assert()
        .success()
        .stdout(predicate::str::contains("No entities found"))
        .stdout(predicate::str::contains("Domain").not())
        .stdout(predicate::str::contains("Found").not());
}

#[test]
fn test_url_flag_overrides_environment() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/states");
        then.status(200).json_body(json!([]));
    });

    hafind()
        .env("HA_URL", "http://127.0.0.1:1")
        .env("HA_TOKEN", "test-token")
        .args(["--url", &server.base_url()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entities found"));

    mock.assert();
}

#[test]
fn test_rejected_token_prints_checklist() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/states");
        then.status(401).body("401: Unauthorized");
    });

    hafind()
        .env("HA_URL", server.base_url())
        .env("HA_TOKEN", "expired-token")
        .assert()
        .failure()
        .stderr(predicate::str::contains("authentication"))
        .stderr(predicate::str::contains("HA_TOKEN is valid"));
}

#[test]
fn test_malformed_records_are_skipped_with_warning() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/states");
        then.status(200).json_body(json!([
            {"state": "orphaned"},
            {"entity_id": "light.kitchen", "state": "on"}
        ]));
    });

    let output = hafind()
        .env("HA_URL", server.base_url())
        .env("HA_TOKEN", "test-token")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(stderr.contains("Skipping"));
    assert!(stdout.contains("Found 1 entities:"));
    assert!(stdout.contains("light.kitchen"));
}
