use super::*;

#[test]
fn validate_sign_in_input_trims_email() {
    assert_eq!(
        validate_sign_in_input("  admin@example.com  ", "hunter22"),
        Ok(("admin@example.com".to_owned(), "hunter22".to_owned()))
    );
}

#[test]
fn validate_sign_in_input_requires_both_fields() {
    assert_eq!(validate_sign_in_input("", "hunter22"), Err("Enter both email and password."));
    assert_eq!(validate_sign_in_input("a@b.com", "   "), Err("Enter both email and password."));
}

#[test]
fn validate_sign_up_input_builds_request() {
    let req = validate_sign_up_input(" Ada ", " ada@example.com ", "", "correct horse").unwrap();
    assert_eq!(req.name, "Ada");
    assert_eq!(req.email, "ada@example.com");
    assert_eq!(req.phone, None);
    assert_eq!(req.password, "correct horse");
}

#[test]
fn validate_sign_up_input_keeps_trimmed_phone() {
    let req = validate_sign_up_input("Ada", "ada@example.com", " +1 555 0100 ", "correct horse").unwrap();
    assert_eq!(req.phone.as_deref(), Some("+1 555 0100"));
}

#[test]
fn validate_sign_up_input_requires_name_email_password() {
    assert_eq!(
        validate_sign_up_input("", "ada@example.com", "", "correct horse"),
        Err("Name, email and password are required.")
    );
    assert_eq!(
        validate_sign_up_input("Ada", "ada@example.com", "", ""),
        Err("Name, email and password are required.")
    );
}

#[test]
fn validate_sign_up_input_rejects_short_password() {
    assert_eq!(
        validate_sign_up_input("Ada", "ada@example.com", "", "short"),
        Err("Password must be at least 8 characters.")
    );
}

#[test]
fn validate_otp_input_accepts_six_digits() {
    assert_eq!(validate_otp_input(" 012345 "), Ok("012345".to_owned()));
}

#[test]
fn validate_otp_input_rejects_wrong_length_or_letters() {
    assert_eq!(validate_otp_input("12345"), Err("Enter the 6-digit code."));
    assert_eq!(validate_otp_input("1234567"), Err("Enter the 6-digit code."));
    assert_eq!(validate_otp_input("12a456"), Err("Enter the 6-digit code."));
}
