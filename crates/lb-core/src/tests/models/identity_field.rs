use crate::IdentityField;

use std::str::FromStr;

#[test]
fn test_identity_field_round_trips_through_name() {
    for field in IdentityField::ALL {
        assert_eq!(IdentityField::from_str(field.as_str()).unwrap(), field);
    }
}

#[test]
fn test_identity_field_rejects_unknown_name() {
    assert!(IdentityField::from_str("password").is_err());
    assert!(IdentityField::from_str("access_token").is_err());
}

#[test]
fn test_identity_field_columns() {
    assert_eq!(IdentityField::Username.column(), "username");
    assert_eq!(IdentityField::AccessToken.column(), "access_token");
    assert_eq!(IdentityField::RefreshToken.column(), "refresh_token");
}
