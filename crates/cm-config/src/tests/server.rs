use crate::ServerConfig;

use googletest::prelude::*;

#[test]
fn test_port_zero_is_auto_assign() {
    let config = ServerConfig {
        port: 0,
        ..Default::default()
    };
    assert_that!(config.validate(), ok(anything()));
}

#[test]
fn test_privileged_port_is_rejected() {
    let config = ServerConfig {
        port: 80,
        ..Default::default()
    };
    assert_that!(config.validate(), err(anything()));
}

#[test]
fn test_user_port_is_accepted() {
    let config = ServerConfig {
        port: 9090,
        ..Default::default()
    };
    assert_that!(config.validate(), ok(anything()));
}
