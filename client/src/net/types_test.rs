use super::*;

fn admin_json() -> serde_json::Value {
    serde_json::json!({
        "id": "u-1",
        "name": "Ada Admin",
        "email": "ada@example.com",
        "role": "admin"
    })
}

#[test]
fn user_deserializes_lowercase_role() {
    let user: User = serde_json::from_value(admin_json()).unwrap();
    assert_eq!(user.role, Role::Admin);
    assert!(user.is_admin());
    assert_eq!(user.phone, None);
}

#[test]
fn customer_is_not_admin() {
    let mut raw = admin_json();
    raw["role"] = serde_json::json!("customer");
    raw["phone"] = serde_json::json!("+15550100");
    let user: User = serde_json::from_value(raw).unwrap();
    assert_eq!(user.role, Role::Customer);
    assert!(!user.is_admin());
    assert_eq!(user.phone.as_deref(), Some("+15550100"));
}

#[test]
fn unknown_role_is_rejected() {
    let mut raw = admin_json();
    raw["role"] = serde_json::json!("superuser");
    assert!(serde_json::from_value::<User>(raw).is_err());
}

#[test]
fn auth_response_unwraps_user_field() {
    let body = serde_json::json!({ "user": admin_json() });
    let resp: AuthResponse = serde_json::from_value(body).unwrap();
    assert_eq!(resp.user.id, "u-1");
}

#[test]
fn signup_request_omits_missing_phone() {
    let req = SignupRequest {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        phone: None,
        password: "correct horse".to_owned(),
    };
    let value = serde_json::to_value(&req).unwrap();
    assert!(value.get("phone").is_none());
    assert_eq!(value["email"], "ada@example.com");
}

#[test]
fn verify_otp_request_field_names() {
    let req = VerifyOtpRequest { email: "a@b.com".to_owned(), otp: "123456".to_owned() };
    assert_eq!(serde_json::to_value(&req).unwrap(), serde_json::json!({ "email": "a@b.com", "otp": "123456" }));
}
