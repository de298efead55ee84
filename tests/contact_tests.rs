use fiscale::core::*;

// ---------------------------------------------------------------------------
// Email
// ---------------------------------------------------------------------------

#[test]
fn email_shapes() {
    let good = [
        "a@b.c",
        "mario.rossi@example.it",
        "ordini+pos@negozio.co.uk",
        "info@sub.dominio.it",
    ];
    for email in good {
        assert!(validate_email(email).is_valid, "{email}");
    }

    let bad = [
        "not-an-email",
        "@example.it",
        "mario@",
        "mario@example",
        "mario@.",
        "mario rossi@example.it",
        "mario@exa mple.it",
        " mario@example.it",
    ];
    for email in bad {
        let r = validate_email(email);
        assert!(!r.is_valid, "{email}");
        assert_eq!(r.error.as_deref(), Some(EMAIL_FORMAT_MESSAGE));
    }
}

#[test]
fn email_check_returns_input() {
    assert_eq!(check_email("a@b.c").unwrap(), "a@b.c");
}

#[test]
fn email_error_kind_is_format() {
    assert_eq!(check_email("x").unwrap_err().kind, ErrorKind::Format);
}

// ---------------------------------------------------------------------------
// Phone
// ---------------------------------------------------------------------------

#[test]
fn phone_normalization() {
    assert_eq!(normalize_phone("+39 333-1234567"), "+393331234567");
    assert_eq!(normalize_phone("(06) 123.456"), "06123456");
    assert_eq!(normalize_phone("\t333 12 34 567\n"), "3331234567");
}

#[test]
fn phone_shapes() {
    for phone in ["+39 333-1234567", "3331234567", "06 1234567", "+39 (06) 123.456"] {
        assert!(validate_phone(phone).is_valid, "{phone}");
    }
    for phone in ["123", "+39 123", "39+3331234567", "+393", "333/1234567", "+1 555 1234567"] {
        let r = validate_phone(phone);
        assert!(!r.is_valid, "{phone}");
        assert_eq!(r.error.as_deref(), Some(PHONE_FORMAT_MESSAGE));
    }
}

#[test]
fn phone_prefix_counts_separately_from_digits() {
    // +39 followed by 15 digits is still within bounds
    assert!(validate_phone("+39123456789012345").is_valid);
    assert!(!validate_phone("+391234567890123456").is_valid);
}

#[test]
fn phone_empty_is_valid() {
    assert_eq!(validate_phone(""), ValidationResult::valid());
    assert_eq!(check_phone("").unwrap(), "");
}
