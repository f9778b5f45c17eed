use std::time::Duration;

use vscroll::precision::MAX_EXTENT;
use vscroll::{ConfigError, ScrollbarConfig};

#[test]
fn test_defaults() {
    let config = ScrollbarConfig::default();
    assert_eq!(config.content_width, 0.0);
    assert_eq!(config.content_height, 0.0);
    assert_eq!(config.scroll_color, "rgba(0, 0, 0, 0.3)");
    assert_eq!(config.wheel_amount, 100.0);
    assert_eq!(config.min_thumb_length, 50.0);
    assert_eq!(config.throttle_window(), Duration::from_millis(50));
    assert!(config.validate().is_ok());
}

#[test]
fn test_builder() {
    let config = ScrollbarConfig::default()
        .content_size(1000.0, 2000.0)
        .scroll_color("#333")
        .wheel_amount(40.0)
        .min_thumb_length(20.0)
        .throttle(Duration::from_millis(16));

    assert_eq!((config.content_width, config.content_height), (1000.0, 2000.0));
    assert_eq!(config.scroll_color, "#333");
    assert_eq!(config.wheel_amount, 40.0);
    assert_eq!(config.min_thumb_length, 20.0);
    assert_eq!(config.throttle_ms, 16);
}

#[test]
fn test_partial_json_uses_defaults() {
    let config: ScrollbarConfig =
        serde_json::from_str(r#"{ "content_height": 5000, "wheel_amount": 60 }"#).unwrap();
    assert_eq!(config.content_height, 5000.0);
    assert_eq!(config.wheel_amount, 60.0);
    assert_eq!(config.content_width, 0.0);
    assert_eq!(config.scroll_color, "rgba(0, 0, 0, 0.3)");
    assert_eq!(config.throttle_ms, 50);
}

#[test]
fn test_validate_reports_each_field() {
    assert!(matches!(
        ScrollbarConfig::default().content_size(f64::NAN, 0.0).validate(),
        Err(ConfigError::ContentSize { axis: "width", value }) if value.is_nan()
    ));
    assert!(matches!(
        ScrollbarConfig::default().content_size(0.0, -5.0).validate(),
        Err(ConfigError::ContentSize { axis: "height", value }) if value == -5.0
    ));
    assert_eq!(
        ScrollbarConfig::default().wheel_amount(-1.0).validate(),
        Err(ConfigError::WheelAmount(-1.0))
    );
    assert_eq!(
        ScrollbarConfig::default().min_thumb_length(-1.0).validate(),
        Err(ConfigError::MinThumbLength(-1.0))
    );
    assert_eq!(
        ScrollbarConfig::default().scroll_color("").validate(),
        Err(ConfigError::EmptyColor)
    );
}

#[test]
fn test_validate_bounds_sizes() {
    let largest = ScrollbarConfig::default().content_size(MAX_EXTENT, 1e-25);
    assert!(largest.validate().is_ok());
    assert!(matches!(
        ScrollbarConfig::default().content_size(1e30, 0.0).validate(),
        Err(ConfigError::ContentSize { axis: "width", value }) if value == 1e30
    ));
    assert_eq!(
        ScrollbarConfig::default().wheel_amount(1e30).validate(),
        Err(ConfigError::WheelAmount(1e30))
    );
    assert_eq!(
        ScrollbarConfig::default().min_thumb_length(1e30).validate(),
        Err(ConfigError::MinThumbLength(1e30))
    );
}

#[test]
fn test_error_messages() {
    assert_eq!(
        ConfigError::WheelAmount(0.0).to_string(),
        "Invalid wheel amount: 0"
    );
    assert_eq!(
        ConfigError::ContentSize {
            axis: "height",
            value: -2.0
        }
        .to_string(),
        "Invalid content height size: -2"
    );
}
