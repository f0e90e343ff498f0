//! Integration tests for building inventories from NetAlertX device data.
//!
//! The fixture mirrors a `GET /devices` response from a home network, with
//! devices that exercise every skip rule.

use std::fs;
use std::path::PathBuf;

use netalert_api::{DevicesClient, DevicesResponse};
use netalert_core::Error;
use netalert_inventory::{build_inventory, run, Cli};
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Get the path to the test fixtures directory.
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Load the device response fixture from disk.
fn load_devices_fixture() -> String {
    let fixture_path = fixtures_dir().join("devices_response.json");
    fs::read_to_string(&fixture_path).unwrap_or_else(|e| {
        panic!(
            "Failed to read devices fixture at {}: {}",
            fixture_path.display(),
            e
        )
    })
}

fn fixture_devices() -> Vec<Value> {
    DevicesResponse::from_slice(load_devices_fixture().as_bytes())
        .unwrap()
        .devices
}

#[test]
fn test_fixture_inventory() {
    let devices = fixture_devices();
    assert_eq!(devices.len(), 7, "Expected 7 devices in test data");

    let inventory = serde_json::to_value(build_inventory(&devices)).unwrap();

    assert_eq!(
        inventory,
        json!({
            "_meta": {
                "hostvars": {
                    "router.home.lan": {
                        "ansible_host": "192.168.1.1",
                        "ansible_user": "admin",
                        "ansible_port": "2222"
                    },
                    "nas": {
                        "ansible_host": "192.168.1.10",
                        "pool": "tank"
                    },
                    "dns.home.lan": {
                        "ansible_host": "192.168.1.53"
                    },
                    "offsite.example.net": {
                        "ansible_host": null
                    }
                }
            },
            "all": {"children": ["network", "routers", "storage", "backup", "dns"]},
            "network": {"hosts": ["router.home.lan", "dns.home.lan"]},
            "routers": {"hosts": ["router.home.lan"]},
            "storage": {"hosts": ["nas"]},
            "backup": {"hosts": ["nas", "offsite.example.net"]},
            "dns": {"hosts": ["dns.home.lan"]}
        })
    );
}

#[test]
fn test_host_count_never_exceeds_device_count() {
    let devices = fixture_devices();
    let inventory = build_inventory(&devices);

    // Three of the seven devices lack an identifier or tags.
    assert!(inventory.hostvars().len() <= devices.len());
    assert_eq!(inventory.hostvars().len(), 4);
    assert!(!inventory.hostvars().contains_key("laptop.home.lan"));
    assert!(!inventory.hostvars().contains_key("(unknown)"));
}

#[test]
fn test_every_group_member_has_hostvars() {
    let inventory = build_inventory(&fixture_devices());

    for group in inventory.groups() {
        for host in &group.hosts {
            assert!(
                inventory.hostvars().contains_key(host),
                "{host} in group {} has no hostvars",
                group.name
            );
        }
    }
}

#[test]
fn test_rendered_key_order() {
    let rendered = build_inventory(&fixture_devices()).to_json_pretty().unwrap();
    let document: serde_json::Map<String, Value> = serde_json::from_str(&rendered).unwrap();
    let keys: Vec<&str> = document.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        vec!["_meta", "all", "network", "routers", "storage", "backup", "dns"]
    );
}

#[tokio::test]
async fn test_end_to_end_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/devices"))
        .and(header("Authorization", "Bearer e2e-token"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(load_devices_fixture(), "application/json"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = netalert_api::DevicesClientBuilder::new(server.uri())
        .unwrap()
        .with_token("e2e-token")
        .build()
        .unwrap();
    let output = run(&Cli::default(), &client).await.unwrap();

    let document: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(document["all"]["children"][0], "network");
    assert_eq!(document["storage"]["hosts"], json!(["nas"]));
}

#[tokio::test]
async fn test_end_to_end_invalid_json_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/devices"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"devices\": ["))
        .mount(&server)
        .await;

    let client = DevicesClient::new(server.uri()).unwrap();
    let err = run(&Cli::default(), &client).await.unwrap_err();
    assert!(matches!(err, Error::ParseError(_)));
}

#[tokio::test]
async fn test_end_to_end_connection_refused_fails() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let client = DevicesClient::new(format!("http://127.0.0.1:{port}")).unwrap();
    let err = run(&Cli::default(), &client).await.unwrap_err();
    assert!(matches!(err, Error::ServiceUnavailable(_)));
    assert_ne!(err.exit_code(), 0);
}
