#![allow(clippy::unwrap_used)]
// End-to-end tests for `AsaDriver` against a wiremock device.

use std::time::Duration;

use pretty_assertions::assert_eq;
use secrecy::SecretString;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use asa_core::{
    ApiGeneration, AsaDriver, ConfigRetrieve, CoreError, DriverConfig, DriverOptions,
    NetworkDriver,
};

const TOKEN: &str = "3f1a6c";

// ── Helpers ─────────────────────────────────────────────────────────

fn driver(server: &MockServer, api: ApiGeneration) -> AsaDriver {
    driver_with_timeout(server, api, Duration::from_secs(5))
}

fn driver_with_timeout(server: &MockServer, api: ApiGeneration, timeout: Duration) -> AsaDriver {
    let config = DriverConfig::new(
        &server.uri(),
        "cisco",
        SecretString::from("cisco"),
        timeout,
        DriverOptions {
            api,
            ..DriverOptions::default()
        },
    )
    .unwrap();
    AsaDriver::new(config).unwrap()
}

async fn open_rest(server: &MockServer) -> AsaDriver {
    Mock::given(method("POST"))
        .and(path("/api/tokenservices"))
        .respond_with(ResponseTemplate::new(204).insert_header("X-Auth-Token", TOKEN))
        .mount(server)
        .await;

    let mut driver = driver(server, ApiGeneration::Rest);
    driver.open().await.unwrap();
    driver
}

async fn mount_cli(server: &MockServer, commands: &[&str], outputs: &[&str]) {
    Mock::given(method("POST"))
        .and(path("/api/cli"))
        .and(body_json(json!({ "commands": commands })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "response": outputs })))
        .mount(server)
        .await;
}

async fn mount_legacy(server: &MockServer, command: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/admin/exec/{}", command.replace(' ', "+"))))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

fn physical_listing() -> serde_json::Value {
    json!({
        "kind": "collection#PhysicalInterface",
        "rangeInfo": { "offset": 0, "limit": 2, "total": 2 },
        "items": [
            {
                "kind": "object#GigabitInterface",
                "hardwareID": "GigabitEthernet0/0",
                "interfaceDesc": "Uplink",
                "shutdown": false,
                "ipAddress": {
                    "ip": { "kind": "IPv4Address", "value": "10.0.0.1" },
                    "netMask": { "kind": "IPv4NetMask", "value": "255.255.255.0" },
                    "kind": "StaticIP"
                },
                "ipv6Info": { "ipv6Addresses": [
                    { "address": { "value": "2001:db8::1" }, "prefixLength": 64 }
                ] }
            },
            {
                "kind": "object#GigabitInterface",
                "hardwareID": "GigabitEthernet0/1",
                "interfaceDesc": "",
                "shutdown": true,
                "ipAddress": "NoneSelected",
                "ipv6Info": { "ipv6Addresses": [] }
            }
        ]
    })
}

const GI0_DETAIL: &str = "Interface GigabitEthernet0/0 \"outside\", is up, line protocol is up\n  \
Hardware is i82540EM rev03, BW 1000 Mbps, DLY 10 usec\n        \
MAC address 0050.5689.0001, MTU 1500\n";

const GI1_DETAIL: &str = "Interface GigabitEthernet0/1 \"\", is administratively down, line protocol is down\n  \
Hardware is i82540EM rev03, BW 1000 Mbps, DLY 10 usec\n        \
MAC address 0050.5689.0002, MTU not set\n";

async fn mount_interfaces(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/interfaces/physical"))
        .respond_with(ResponseTemplate::new(200).set_body_json(physical_listing()))
        .mount(server)
        .await;

    mount_cli(
        server,
        &[
            "show interface GigabitEthernet0/0",
            "show interface GigabitEthernet0/1",
        ],
        &[GI0_DETAIL, GI1_DETAIL],
    )
    .await;
}

// ── Session lifecycle ───────────────────────────────────────────────

#[tokio::test]
async fn test_open_close_revokes_active_token() {
    let server = MockServer::start().await;
    let mut driver = open_rest(&server).await;
    assert!(driver.is_open());

    Mock::given(method("DELETE"))
        .and(path(format!("/api/tokenservices/{TOKEN}")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    driver.close().await.unwrap();
    assert!(!driver.is_open());
}

#[tokio::test]
async fn test_open_rejected_is_authentication_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/tokenservices"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let mut driver = driver(&server, ApiGeneration::Rest);
    let err = driver.open().await.unwrap_err();

    assert!(matches!(err, CoreError::AuthenticationFailed { status: 401, .. }));
    assert!(err.is_connection());
    assert!(!driver.is_open());
}

#[tokio::test]
async fn test_close_rejected_revocation() {
    let server = MockServer::start().await;
    let mut driver = open_rest(&server).await;

    Mock::given(method("DELETE"))
        .and(path(format!("/api/tokenservices/{TOKEN}")))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = driver.close().await.unwrap_err();
    assert!(matches!(err, CoreError::Connection { .. }));
    assert!(!driver.is_open());
}

#[tokio::test]
async fn test_close_timeout_still_closes() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/tokenservices"))
        .respond_with(ResponseTemplate::new(204).insert_header("X-Auth-Token", TOKEN))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(format!("/api/tokenservices/{TOKEN}")))
        .respond_with(ResponseTemplate::new(204).set_delay(Duration::from_secs(3)))
        .mount(&server)
        .await;

    let mut driver =
        driver_with_timeout(&server, ApiGeneration::Rest, Duration::from_millis(300));
    driver.open().await.unwrap();

    let err = driver.close().await.unwrap_err();
    assert!(matches!(err, CoreError::Timeout { .. }));
    assert!(!driver.is_open());
    assert!(!driver.is_alive().await.unwrap().is_alive);
}

#[tokio::test]
async fn test_is_alive_uses_token() {
    let server = MockServer::start().await;
    let driver = open_rest(&server).await;

    Mock::given(method("GET"))
        .and(path("/api/monitoring/serialnumber"))
        .and(header("X-Auth-Token", TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "serialNumber": "JAD1" })))
        .mount(&server)
        .await;

    assert!(driver.is_alive().await.unwrap().is_alive);
}

// ── CLI ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_cli_maps_commands_to_outputs() {
    let server = MockServer::start().await;
    let driver = open_rest(&server).await;
    mount_cli(
        &server,
        &["show clock", "show hostname", "show clock"],
        &["12:00\n", "fw01\n", "12:01\n"],
    )
    .await;

    let commands: Vec<String> = ["show clock", "show hostname", "show clock"]
        .map(String::from)
        .to_vec();

    let map = driver.cli(&commands).await.unwrap();
    assert_eq!(map.len(), 2);
    assert_eq!(map["show hostname"], "fw01\n");
    assert_eq!(map["show clock"], "12:01\n");

    let pairs = driver.cli_pairs(&commands).await.unwrap();
    assert_eq!(pairs.len(), 3);
    assert_eq!(pairs[0].1, "12:00\n");
}

// ── Config ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_config_startup_only() {
    let server = MockServer::start().await;
    let driver = open_rest(&server).await;
    mount_cli(&server, &["show startup-config"], &["hostname fw01\n"]).await;

    let config = driver
        .get_config(ConfigRetrieve::Startup, false, false)
        .await
        .unwrap();

    assert_eq!(config.startup, "hostname fw01\n");
    assert_eq!(config.running, "");
    assert_eq!(config.candidate, "");
}

#[tokio::test]
async fn test_get_config_all_sanitized() {
    let server = MockServer::start().await;
    let driver = open_rest(&server).await;
    mount_cli(
        &server,
        &["show startup-config", "show running-config"],
        &[
            "hostname fw01\nenable password abc123 encrypted\n",
            "hostname fw01\nsnmp-server community s3cret\n",
        ],
    )
    .await;

    let config = driver
        .get_config(ConfigRetrieve::All, true, true)
        .await
        .unwrap();

    assert_eq!(config.startup, "hostname fw01\nenable password <removed> encrypted\n");
    assert_eq!(config.running, "hostname fw01\nsnmp-server community <removed>\n");
    assert_eq!(config.candidate, "");
}

#[tokio::test]
async fn test_get_config_candidate_sends_nothing() {
    let server = MockServer::start().await;
    let driver = open_rest(&server).await;

    Mock::given(method("POST"))
        .and(path("/api/cli"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let config = driver
        .get_config(ConfigRetrieve::Candidate, false, false)
        .await
        .unwrap();
    assert_eq!(config, asa_core::ConfigSnapshot::default());
}

// ── Interfaces ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_interfaces_enriches_listing() {
    let server = MockServer::start().await;
    let driver = open_rest(&server).await;
    mount_interfaces(&server).await;

    let interfaces = driver.get_interfaces().await.unwrap();
    let names: Vec<&str> = interfaces.keys().map(String::as_str).collect();
    assert_eq!(names, ["GigabitEthernet0/0", "GigabitEthernet0/1"]);

    let gi0 = &interfaces["GigabitEthernet0/0"];
    assert!(gi0.is_up);
    assert!(gi0.is_enabled);
    assert_eq!(gi0.description, "Uplink");
    assert_eq!(gi0.mac_address, "00:50:56:89:00:01");
    assert_eq!(gi0.mtu, 1500);
    assert_eq!(gi0.speed, 1000);

    let gi1 = &interfaces["GigabitEthernet0/1"];
    assert!(!gi1.is_up);
    assert!(!gi1.is_enabled);
    assert_eq!(gi1.mtu, 0);
}

#[tokio::test]
async fn test_missing_line_protocol_fails_whole_call() {
    let server = MockServer::start().await;
    let driver = open_rest(&server).await;

    Mock::given(method("GET"))
        .and(path("/api/interfaces/physical"))
        .respond_with(ResponseTemplate::new(200).set_body_json(physical_listing()))
        .mount(&server)
        .await;
    mount_cli(
        &server,
        &[
            "show interface GigabitEthernet0/0",
            "show interface GigabitEthernet0/1",
        ],
        &[GI0_DETAIL, "ERROR: % Invalid input detected\n"],
    )
    .await;

    let err = driver.get_interfaces().await.unwrap_err();
    assert!(matches!(err, CoreError::Parse { .. }));
}

#[tokio::test]
async fn test_get_interfaces_merges_sibling_listings() {
    let server = MockServer::start().await;
    let driver = open_rest(&server).await;

    Mock::given(method("GET"))
        .and(path("/api/interfaces/physical"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "rangeInfo": { "offset": 0, "limit": 1, "total": 1 },
            "items": [
                { "hardwareID": "GigabitEthernet0/0", "interfaceDesc": "Uplink", "shutdown": false }
            ]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/interfaces/vlan"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "rangeInfo": { "offset": 0, "limit": 1, "total": 1 },
            "items": [
                { "hardwareID": "GigabitEthernet0/1.100", "interfaceDesc": "Guests", "shutdown": false }
            ]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/interfaces/redundant"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "rangeInfo": { "offset": 0, "limit": 1, "total": 1 },
            "items": [
                { "hardwareID": "Redundant1", "interfaceDesc": "", "shutdown": true }
            ]
        })))
        .mount(&server)
        .await;
    // No etherchannel listing on this device: the default 404 is skipped.
    mount_cli(
        &server,
        &[
            "show interface GigabitEthernet0/0",
            "show interface GigabitEthernet0/1.100",
            "show interface Redundant1",
        ],
        &[
            GI0_DETAIL,
            "Interface GigabitEthernet0/1.100 \"guests\", is up, line protocol is up\n  \
VLAN identifier 100\n        MAC address 0050.5689.0002, MTU 1500\n",
            "Interface Redundant1 \"\", is administratively down, line protocol is down\n",
        ],
    )
    .await;

    let interfaces = driver.get_interfaces().await.unwrap();

    let names: Vec<&str> = interfaces.keys().map(String::as_str).collect();
    assert_eq!(
        names,
        ["GigabitEthernet0/0", "GigabitEthernet0/1.100", "Redundant1"]
    );
    assert_eq!(interfaces["GigabitEthernet0/1.100"].description, "Guests");
    assert!(interfaces["GigabitEthernet0/1.100"].is_up);
    assert_eq!(interfaces["GigabitEthernet0/1.100"].mtu, 1500);
    assert!(!interfaces["Redundant1"].is_enabled);
}

#[tokio::test]
async fn test_missing_physical_listing_is_an_error() {
    let server = MockServer::start().await;
    let driver = open_rest(&server).await;

    Mock::given(method("GET"))
        .and(path("/api/interfaces/vlan"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "rangeInfo": { "offset": 0, "limit": 0, "total": 0 },
            "items": []
        })))
        .mount(&server)
        .await;

    let err = driver.get_interfaces().await.unwrap_err();
    assert!(matches!(err, CoreError::Command { status: 404, .. }));
}

#[tokio::test]
async fn test_interface_listing_is_paginated() {
    let server = MockServer::start().await;
    let driver = open_rest(&server).await;

    Mock::given(method("GET"))
        .and(path("/api/interfaces/physical"))
        .and(query_param_is_missing("offset"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "rangeInfo": { "offset": 0, "limit": 1, "total": 2 },
            "items": [
                { "hardwareID": "GigabitEthernet0/0", "interfaceDesc": "Uplink", "shutdown": false }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/interfaces/physical"))
        .and(query_param("offset", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "rangeInfo": { "offset": 1, "limit": 1, "total": 2 },
            "items": [
                { "hardwareID": "GigabitEthernet0/1", "interfaceDesc": "", "shutdown": true }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;
    mount_cli(
        &server,
        &[
            "show interface GigabitEthernet0/0",
            "show interface GigabitEthernet0/1",
        ],
        &[GI0_DETAIL, GI1_DETAIL],
    )
    .await;

    let interfaces = driver.get_interfaces().await.unwrap();

    let names: Vec<&str> = interfaces.keys().map(String::as_str).collect();
    assert_eq!(names, ["GigabitEthernet0/0", "GigabitEthernet0/1"]);
    assert_eq!(interfaces["GigabitEthernet0/0"].mac_address, "00:50:56:89:00:01");
}

#[tokio::test]
async fn test_get_interfaces_ip() {
    let server = MockServer::start().await;
    let driver = open_rest(&server).await;
    mount_interfaces(&server).await;

    let ips = driver.get_interfaces_ip().await.unwrap();
    assert_eq!(ips.len(), 1);

    let value = serde_json::to_value(&ips).unwrap();
    assert_eq!(
        value,
        json!({
            "GigabitEthernet0/0": {
                "ipv4": { "10.0.0.1": { "prefix_length": 24 } },
                "ipv6": { "2001:db8::1": { "prefix_length": 64 } }
            }
        })
    );
}

#[tokio::test]
async fn test_get_facts() {
    let server = MockServer::start().await;
    let driver = open_rest(&server).await;
    mount_interfaces(&server).await;

    Mock::given(method("GET"))
        .and(path("/api/monitoring/serialnumber"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "serialNumber": "JAD1234" })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/monitoring/device/components/version"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "kind": "object#Version",
            "asaVersion": "9.8(2)",
            "upTimeinSeconds": 86400,
            "deviceType": "ASAv"
        })))
        .mount(&server)
        .await;
    mount_cli(
        &server,
        &["show hostname", "show hostname fqdn"],
        &["fw01\n", "fw01.example.net\n"],
    )
    .await;

    let facts = driver.get_facts().await.unwrap();

    assert_eq!(facts.vendor, "Cisco Systems");
    assert_eq!(facts.serial_number, "JAD1234");
    assert_eq!(facts.os_version, "9.8(2)");
    assert_eq!(facts.model, "ASAv");
    assert!((facts.uptime - 86_400.0).abs() < f64::EPSILON);
    assert_eq!(facts.hostname, "fw01");
    assert_eq!(facts.fqdn, "fw01.example.net");
    assert_eq!(
        facts.interface_list,
        ["GigabitEthernet0/0", "GigabitEthernet0/1"]
    );
}

// ── ARP ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_arp_table_rest() {
    let server = MockServer::start().await;
    let driver = open_rest(&server).await;

    Mock::given(method("GET"))
        .and(path("/api/monitoring/arp"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "rangeInfo": { "offset": 0, "limit": 1, "total": 1 },
            "items": [
                { "interface": "inside", "ipAddress": "192.168.1.20", "macAddress": "5c5e.abda.3cf0" }
            ]
        })))
        .mount(&server)
        .await;

    let arp = driver.get_arp_table("").await.unwrap();

    assert_eq!(arp.len(), 1);
    assert_eq!(arp[0].interface, "inside");
    assert_eq!(arp[0].mac, "5C:5E:AB:DA:3C:F0");
    assert_eq!(arp[0].ip.to_string(), "192.168.1.20");
    assert!(arp[0].age.abs() < f64::EPSILON);
}

// ── Legacy API ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_legacy_open_and_arp() {
    let server = MockServer::start().await;
    mount_legacy(&server, "show version", "Cisco Adaptive Security Appliance Software Version 9.1(7)\n").await;
    mount_legacy(
        &server,
        "show arp",
        "\toutside 10.0.0.254 0050.5689.00fe 12\n\tinside 192.168.1.1 5c5e.abda.3cf0 alias\n",
    )
    .await;

    let mut driver = driver(&server, ApiGeneration::Legacy);
    driver.open().await.unwrap();
    assert!(driver.is_alive().await.unwrap().is_alive);

    let arp = driver.get_arp_table("").await.unwrap();
    assert_eq!(arp.len(), 2);
    assert!((arp[0].age - 12.0).abs() < f64::EPSILON);
    assert!(arp[1].age.abs() < f64::EPSILON);

    driver.close().await.unwrap();
}

#[tokio::test]
async fn test_legacy_interfaces_ip_joins_nameif() {
    let server = MockServer::start().await;
    mount_legacy(
        &server,
        "show interface",
        "Interface GigabitEthernet0/0 \"outside\", is up, line protocol is up\n  \
Hardware is i82540EM rev03, BW 1000 Mbps, DLY 10 usec\n        \
IP address 198.51.100.2, subnet mask 255.255.255.252\n",
    )
    .await;
    mount_legacy(
        &server,
        "show nameif",
        "Interface                Name                     Security\n\
GigabitEthernet0/0       outside                    0\n",
    )
    .await;
    mount_legacy(
        &server,
        "show ipv6 interface",
        "outside is up, line protocol is up\n  \
IPv6 is enabled, link-local address is fe80::250:56ff:fe89:1\n  \
Global unicast address(es):\n    \
2001:db8::2, subnet is 2001:db8::/64\n",
    )
    .await;

    let driver = driver(&server, ApiGeneration::Legacy);
    let ips = driver.get_interfaces_ip().await.unwrap();

    let value = serde_json::to_value(&ips).unwrap();
    assert_eq!(
        value,
        json!({
            "GigabitEthernet0/0": {
                "ipv4": { "198.51.100.2": { "prefix_length": 30 } },
                "ipv6": {
                    "fe80::250:56ff:fe89:1": { "prefix_length": 64 },
                    "2001:db8::2": { "prefix_length": 64 }
                }
            }
        })
    );
}

#[tokio::test]
async fn test_legacy_ipv6_unavailable_keeps_ipv4() {
    let server = MockServer::start().await;
    mount_legacy(
        &server,
        "show interface",
        "Interface Management0/0 \"management\", is up, line protocol is up\n        \
IP address 192.168.0.1, subnet mask 255.255.255.0\n",
    )
    .await;
    mount_legacy(&server, "show nameif", "").await;
    Mock::given(method("GET"))
        .and(path("/admin/exec/show+ipv6+interface"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&server)
        .await;

    let driver = driver(&server, ApiGeneration::Legacy);
    let ips = driver.get_interfaces_ip().await.unwrap();

    assert_eq!(ips.len(), 1);
    assert!(ips["Management0/0"].ipv6.is_empty());
}

const LEGACY_VERSION: &str = "\
Cisco Adaptive Security Appliance Software Version 9.1(7)
Device Manager Version 7.6(1)

Compiled on Wed 25-Nov-15 13:57 PST by builders
System image file is \"disk0:/asa917-k8.bin\"
Config file at boot was \"startup-config\"

fw02 up 3 days 4 hours 5 mins

Hardware:   ASA5512, 4096 MB RAM, CPU Clarkdale 2793 MHz, 1 CPU (2 cores)
Serial Number: FGL1721400A
";

const LEGACY_DUMP: &str = "\
Interface GigabitEthernet0/0 \"outside\", is up, line protocol is up
  Hardware is i82574L rev00, BW 1000 Mbps, DLY 10 usec
        Auto-Duplex(Full-duplex), Auto-Speed(100 Mbps)
        Description: Uplink to ISP
        MAC address 5c5e.abda.3cf0, MTU 1500
        IP address 198.51.100.2, subnet mask 255.255.255.252
Interface Management0/0 \"\", is administratively down, line protocol is down
  Hardware is i82574L rev00, BW 1000 Mbps, DLY 10 usec
        MAC address 5c5e.abda.3cf8, MTU not set
        IP address unassigned
";

#[tokio::test]
async fn test_legacy_get_interfaces() {
    let server = MockServer::start().await;
    mount_legacy(&server, "show interface", LEGACY_DUMP).await;

    let driver = driver(&server, ApiGeneration::Legacy);
    let interfaces = driver.get_interfaces().await.unwrap();

    let names: Vec<&str> = interfaces.keys().map(String::as_str).collect();
    assert_eq!(names, ["GigabitEthernet0/0", "Management0/0"]);

    let outside = &interfaces["GigabitEthernet0/0"];
    assert!(outside.is_up);
    assert!(outside.is_enabled);
    assert_eq!(outside.description, "Uplink to ISP");
    assert_eq!(outside.speed, 100);
    assert_eq!(outside.mac_address, "5C:5E:AB:DA:3C:F0");
    assert_eq!(outside.mtu, 1500);
    assert!((outside.last_flapped + 1.0).abs() < f64::EPSILON);

    let mgmt = &interfaces["Management0/0"];
    assert!(!mgmt.is_up);
    assert!(!mgmt.is_enabled);
    assert_eq!(mgmt.speed, 1000);
    assert_eq!(mgmt.mtu, 0);
}

#[tokio::test]
async fn test_legacy_get_facts() {
    let server = MockServer::start().await;
    mount_legacy(&server, "show version", LEGACY_VERSION).await;
    mount_legacy(&server, "show hostname", "fw02\r\n").await;
    mount_legacy(&server, "show hostname fqdn", "fw02.example.net\n").await;
    mount_legacy(&server, "show interface", LEGACY_DUMP).await;

    let driver = driver(&server, ApiGeneration::Legacy);
    let facts = driver.get_facts().await.unwrap();

    assert_eq!(facts.vendor, "Cisco Systems");
    assert_eq!(facts.os_version, "9.1(7)");
    assert_eq!(facts.model, "ASA5512");
    assert_eq!(facts.serial_number, "FGL1721400A");
    let expected = f64::from(3 * 86_400 + 4 * 3_600 + 5 * 60);
    assert!((facts.uptime - expected).abs() < f64::EPSILON);
    assert_eq!(facts.hostname, "fw02");
    assert_eq!(facts.fqdn, "fw02.example.net");
    assert_eq!(facts.interface_list, ["GigabitEthernet0/0", "Management0/0"]);
}
