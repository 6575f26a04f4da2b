use crate::{CoreError, IdentityField, NewIdentity};

use googletest::prelude::*;

#[test]
fn given_complete_identity_when_validated_then_ok() {
    let identity = NewIdentity::new("alice", "token-a", "refresh-a");

    assert_that!(identity.validate(), ok(anything()));
}

#[test]
fn given_blank_refresh_token_when_validated_then_validation_error() {
    let identity = NewIdentity::new("alice", "token-a", "   ");

    let result = identity.validate();

    assert!(matches!(result, Err(CoreError::Validation { .. })));
    assert!(result.unwrap_err().to_string().contains("refreshToken"));
}

#[test]
fn given_identity_when_reading_fields_then_matches_construction() {
    let identity = NewIdentity::new("u1", "t1", "r1");

    assert_that!(identity.field(IdentityField::Username), eq("u1"));
    assert_that!(identity.field(IdentityField::AccessToken), eq("t1"));
    assert_that!(identity.field(IdentityField::RefreshToken), eq("r1"));
}

#[test]
fn given_sign_in_json_when_deserialized_then_uses_camel_case_keys() {
    let json = r#"{"username":"u1","accessToken":"t1","refreshToken":"r1"}"#;

    let identity: NewIdentity = serde_json::from_str(json).unwrap();

    assert_that!(identity, eq(&NewIdentity::new("u1", "t1", "r1")));
}
