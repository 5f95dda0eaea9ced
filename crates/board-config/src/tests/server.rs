use crate::ServerConfig;

use googletest::prelude::*;

#[test]
fn given_default_server_config_when_validating_then_it_passes() {
    assert_that!(ServerConfig::default().validate(), ok(anything()));
}

#[test]
fn given_privileged_port_when_validating_then_it_is_rejected() {
    let config = ServerConfig {
        port: 80,
        ..Default::default()
    };

    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_port_zero_when_validating_then_auto_assign_is_allowed() {
    let config = ServerConfig {
        port: 0,
        ..Default::default()
    };

    assert_that!(config.validate(), ok(anything()));
}
