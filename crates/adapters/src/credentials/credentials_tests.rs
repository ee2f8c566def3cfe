// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn static_credentials_return_key() {
    assert_eq!(
        StaticCredentials::new("abc").current_api_key().as_deref(),
        Some("abc")
    );
    assert_eq!(StaticCredentials::missing().current_api_key(), None);
}

#[test]
fn blank_key_counts_as_missing() {
    assert_eq!(StaticCredentials::new("   ").current_api_key(), None);
}

#[test]
fn env_credentials_missing_variable() {
    let creds = EnvCredentials::new("HS_TEST_SURELY_UNSET_VARIABLE_9f1c");
    assert_eq!(creds.current_api_key(), None);
}

#[test]
fn fingerprint_is_stable_hex_digest() {
    let fp = fingerprint("secret-key");
    assert_eq!(fp.len(), 64);
    assert!(fp.chars().all(|c| c.is_ascii_hexdigit()));
    assert_eq!(fp, fingerprint("secret-key"));
    assert_ne!(fp, fingerprint("other-key"));
    assert!(!fp.contains("secret"));
}

#[test]
fn fingerprint_of_empty_string_matches_known_digest() {
    assert_eq!(
        fingerprint(""),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}
