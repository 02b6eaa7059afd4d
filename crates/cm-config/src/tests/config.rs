use crate::Config;

use googletest::prelude::*;

#[test]
fn test_default_config_is_valid() {
    let config = Config::default();
    assert_that!(config.validate(), ok(anything()));
}

#[test]
fn test_default_bind_addr() {
    let config = Config::default();
    assert_that!(config.bind_addr(), eq("127.0.0.1:8080"));
}

#[test]
fn test_absolute_database_path_is_rejected() {
    let mut config = Config::default();
    config.database.path = "/etc/buildsphere.db".to_string();
    assert_that!(config.validate(), err(anything()));
}

#[test]
fn test_parent_escaping_database_path_is_rejected() {
    let mut config = Config::default();
    config.database.path = "../elsewhere.db".to_string();
    assert_that!(config.validate(), err(anything()));
}
