//! Tests for ElasticbookError type

use super::*;

#[test]
fn test_config_error_display() {
    let error = ElasticbookError::Config {
        path: "/tmp/config.toml".to_string(),
        message: "expected `=`".to_string(),
    };
    let msg = error.to_string();
    assert!(msg.contains("Invalid config file"));
    assert!(msg.contains("/tmp/config.toml"));
    assert!(msg.contains("expected `=`"));
}

#[test]
fn test_io_error_display() {
    let error = ElasticbookError::Io("file not found".to_string());
    let msg = error.to_string();
    assert!(msg.contains("IO error"));
    assert!(msg.contains("file not found"));
}

#[test]
fn test_io_error_from_std_io_error() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test error");
    let err = ElasticbookError::from(io_err);
    assert!(matches!(err, ElasticbookError::Io(_)));
    assert!(err.to_string().contains("test error"));
}

#[test]
fn test_error_equality() {
    let err1 = ElasticbookError::Io("test".to_string());
    let err2 = ElasticbookError::Io("test".to_string());
    let err3 = ElasticbookError::Io("different".to_string());

    assert_eq!(err1, err2);
    assert_ne!(err1, err3);
}
