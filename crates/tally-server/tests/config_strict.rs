#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use tally_server::config::{self, TallyConfig};

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
server:
  listen: "0.0.0.0:8080"
  max_bodie_bytes: 123 # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.server.listen, "0.0.0.0:8080");
    assert_eq!(cfg.server.max_name_len, 63);
    assert_eq!(cfg.service.name, "Tally REST API Service");
}

#[test]
fn full_config() {
    let ok = r#"
version: 1
server:
  listen: "127.0.0.1:9000"
  max_body_bytes: 2048
  max_name_len: 32
  log_level: "debug"
service:
  name: "Counter Service"
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.server.listen_addr().unwrap().port(), 9000);
    assert_eq!(cfg.server.max_body_bytes, 2048);
    assert_eq!(cfg.server.log_level, "debug");
    assert_eq!(cfg.service.name, "Counter Service");
}

#[test]
fn unsupported_version() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn out_of_range_values_fail() {
    for bad in [
        "version: 1\nserver:\n  listen: \"not-an-addr\"\n",
        "version: 1\nserver:\n  max_body_bytes: 10\n",
        "version: 1\nserver:\n  max_name_len: 0\n",
        "version: 1\nservice:\n  name: \"  \"\n",
    ] {
        let err = config::load_from_str(bad).expect_err("must fail");
        assert_eq!(err.client_code().as_str(), "BAD_REQUEST", "config={bad}");
    }
}

#[test]
fn port_override_keeps_host() {
    let mut cfg = TallyConfig::default();
    cfg.server.listen = "127.0.0.1:8080".into();
    config::apply_port_override(&mut cfg, "5000").unwrap();
    assert_eq!(cfg.server.listen, "127.0.0.1:5000");

    assert!(config::apply_port_override(&mut cfg, "http").is_err());
}
