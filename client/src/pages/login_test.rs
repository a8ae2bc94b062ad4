use super::*;

#[test]
fn validate_credentials_trims_email() {
    assert_eq!(
        validate_credentials("  admin@example.com  ", "secret"),
        Ok(("admin@example.com".to_owned(), "secret".to_owned()))
    );
}

#[test]
fn validate_credentials_requires_both_fields() {
    assert_eq!(
        validate_credentials("   ", ""),
        Err(CredentialErrors { email: Some(EMAIL_REQUIRED), password: Some(PASSWORD_REQUIRED) })
    );
}

#[test]
fn validate_credentials_rejects_malformed_email() {
    assert_eq!(
        validate_credentials("admin", "secret"),
        Err(CredentialErrors { email: Some(EMAIL_INVALID), password: None })
    );
}

#[test]
fn password_is_not_trimmed() {
    assert_eq!(
        validate_credentials("a@b.co", " pw "),
        Ok(("a@b.co".to_owned(), " pw ".to_owned()))
    );
}

#[test]
fn looks_like_email_accepts_common_shapes() {
    assert!(looks_like_email("a@b.co"));
    assert!(looks_like_email("first.last+tag@mail.example.com"));
}

#[test]
fn looks_like_email_rejects_bad_shapes() {
    assert!(!looks_like_email("a@b"));
    assert!(!looks_like_email("@b.com"));
    assert!(!looks_like_email("a@@b.com"));
    assert!(!looks_like_email("a@b..com"));
    assert!(!looks_like_email("a b@c.com"));
}
