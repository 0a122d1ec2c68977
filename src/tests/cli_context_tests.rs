use std::sync::Arc;
use std::time::Duration;

use crate::cli_context::{CliContext, CliContextBuilder};
use crate::config::Config;
use crate::models::Resource;

#[test]
fn test_cli_context_builder() {
    let context = CliContextBuilder::new()
        .with_base_url("http://fit.test/api/")
        .build();

    assert!(context.is_ok());
    let context = context.unwrap();

    assert_eq!(context.base_url(), "http://fit.test/api");
    assert_eq!(context.timeout(), None);
    assert_eq!(
        context.endpoint(Resource::Leaderboard).as_str(),
        "http://fit.test/api/leaderboard/"
    );
}

#[test]
fn test_builder_timeout() {
    let context = CliContextBuilder::new()
        .with_base_url("http://fit.test/api")
        .with_timeout(Duration::from_secs(5))
        .build()
        .unwrap();

    assert_eq!(context.timeout(), Some(Duration::from_secs(5)));
}

#[test]
fn test_from_config_prefers_flag() {
    let config = Config {
        api_base_url: Some("http://from-config.test/api".to_string()),
        request_timeout_secs: Some(0),
        default_format: None,
    };

    let context = CliContext::from_config(Some("http://flag.test/api/"), &config);
    assert_eq!(context.base_url(), "http://flag.test/api");
    // zero means no timeout
    assert_eq!(context.timeout(), None);
}

#[test]
fn test_client_is_shared() {
    let mut context = CliContextBuilder::new()
        .with_base_url("http://fit.test/api")
        .build()
        .unwrap();

    let client = context.client();
    assert!(client.is_ok());
    let client2 = context.client();
    assert!(client2.is_ok());

    // Getting client again should return same instance
    assert!(Arc::ptr_eq(&client.unwrap(), &client2.unwrap()));
}
