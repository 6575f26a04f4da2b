use lb_core::NewIdentity;

/// Identity with tokens derived from the username
pub fn create_test_identity(username: &str) -> NewIdentity {
    NewIdentity::new(
        username,
        format!("access-{}", username),
        format!("refresh-{}", username),
    )
}
