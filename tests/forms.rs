use repo_dashboard_server::error::DashboardError;
use repo_dashboard_server::forms::{LoginForm, PasswordResetForm, SignUpForm};

fn valid_sign_up() -> SignUpForm {
    SignUpForm {
        name: "Test User".to_string(),
        email: "test@example.com".to_string(),
        password: "secret1".to_string(),
        confirm_password: "secret1".to_string(),
    }
}

fn field_names(err: DashboardError) -> Vec<&'static str> {
    match err {
        DashboardError::Validation(fields) => fields.into_iter().map(|f| f.field).collect(),
        other => panic!("Expected Validation error, got: {:?}", other),
    }
}

#[test]
fn valid_sign_up_passes() {
    assert!(valid_sign_up().validate().is_ok());
}

#[test]
fn mismatched_confirmation_is_rejected() {
    let form = SignUpForm {
        confirm_password: "different".to_string(),
        ..valid_sign_up()
    };

    let fields = field_names(form.validate().unwrap_err());
    assert_eq!(fields, vec!["confirm_password"]);
}

#[test]
fn missing_name_is_rejected() {
    let form = SignUpForm {
        name: "   ".to_string(),
        ..valid_sign_up()
    };

    let fields = field_names(form.validate().unwrap_err());
    assert_eq!(fields, vec!["name"]);
}

#[test]
fn short_password_is_rejected() {
    let form = SignUpForm {
        password: "abc".to_string(),
        confirm_password: "abc".to_string(),
        ..valid_sign_up()
    };

    let fields = field_names(form.validate().unwrap_err());
    assert_eq!(fields, vec!["password"]);
}

#[test]
fn multiple_violations_are_all_reported() {
    let form = SignUpForm {
        name: String::new(),
        email: "not-an-email".to_string(),
        password: "abc".to_string(),
        confirm_password: String::new(),
    };

    let fields = field_names(form.validate().unwrap_err());
    assert_eq!(
        fields,
        vec!["name", "email", "password", "confirm_password"]
    );
}

#[test]
fn login_requires_well_formed_email() {
    let form = LoginForm {
        email: "nobody@".to_string(),
        password: "secret1".to_string(),
    };
    assert_eq!(field_names(form.validate().unwrap_err()), vec!["email"]);

    let form = LoginForm {
        email: "nobody@host".to_string(),
        password: "secret1".to_string(),
    };
    assert_eq!(field_names(form.validate().unwrap_err()), vec!["email"]);

    let form = LoginForm {
        email: "nobody@host.example".to_string(),
        password: "secret1".to_string(),
    };
    assert!(form.validate().is_ok());
}

#[test]
fn login_requires_password() {
    let form = LoginForm {
        email: "user@example.com".to_string(),
        password: String::new(),
    };
    assert_eq!(field_names(form.validate().unwrap_err()), vec!["password"]);
}

#[test]
fn reset_requires_email() {
    let form = PasswordResetForm {
        email: String::new(),
    };
    assert_eq!(field_names(form.validate().unwrap_err()), vec!["email"]);

    let form = PasswordResetForm {
        email: "user@example.com".to_string(),
    };
    assert!(form.validate().is_ok());
}
