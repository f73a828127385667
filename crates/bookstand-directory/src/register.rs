use bookstand_types::{Role, Violations};

/// Raw registration input, exactly as it arrives off the wire.
///
/// Every field is optional here; validation decides what is missing and
/// reports all failures in one batch.
#[derive(Clone, Debug, Default)]
pub struct Registration {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
    pub role: Option<String>,
    pub terms_accepted: Option<String>,
}

/// Validated registration fields, ready for hashing and insert.
#[derive(Clone, Debug)]
pub struct ValidRegistration {
    pub full_name: String,
    /// Normalized (trimmed, lowercased).
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Run every registration rule and collect every failure.
///
/// Mirrors the account-creation contract: name length and alphabet, email
/// shape and normalization, password length and confirmation, role
/// whitelist, terms acceptance. Uniqueness of the email is checked by the
/// caller against the store and merged into the same batch.
pub fn validate_registration(input: &Registration) -> (Option<ValidRegistration>, Violations) {
    let mut violations = Violations::new();

    let full_name = input.full_name.as_deref().unwrap_or("").trim().to_string();
    if full_name.chars().count() < 2 {
        violations.push("fullName", "Full name must be at least 2 characters long.");
    }
    if !full_name.is_empty() && !full_name.chars().all(|c| c.is_alphabetic() || c == ' ') {
        violations.push("fullName", "Full name must contain only letters and spaces.");
    }

    let email = normalize_email(input.email.as_deref().unwrap_or(""));
    if !is_email_shaped(&email) {
        violations.push("email", "Please enter a valid email address.");
    }

    let password = input.password.clone().unwrap_or_default();
    if password.chars().count() < 6 {
        violations.push("password", "Password must be at least 6 characters long.");
    }
    if input.confirm_password.as_deref() != Some(password.as_str()) {
        violations.push("confirmPassword", "Passwords do not match.");
    }

    let role = match input.role.as_deref().unwrap_or("").parse::<Role>() {
        Ok(role) => Some(role),
        Err(_) => {
            violations.push("userType", "Invalid user type selected.");
            None
        }
    };

    if !matches!(input.terms_accepted.as_deref(), Some("true")) {
        violations.push("termsAccepted", "You must accept the terms and conditions.");
    }

    let valid = role.filter(|_| violations.is_empty()).map(|role| ValidRegistration {
        full_name,
        email,
        password,
        role,
    });
    (valid, violations)
}

/// Trim and lowercase an email address.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}

/// Minimal RFC-shape check: one `@`, a non-empty local part, and a domain
/// with a dot and no leading/trailing dot.
pub fn is_email_shaped(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    if email.chars().any(char::is_whitespace) || domain.contains('@') {
        return false;
    }
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> Registration {
        Registration {
            full_name: Some("Jane Author".into()),
            email: Some("Jane@Example.com".into()),
            password: Some("secret123".into()),
            confirm_password: Some("secret123".into()),
            role: Some("Author".into()),
            terms_accepted: Some("true".into()),
        }
    }

    #[test]
    fn valid_input_passes_and_normalizes_email() {
        let (valid, violations) = validate_registration(&valid_input());
        assert!(violations.is_empty());
        let valid = valid.unwrap();
        assert_eq!(valid.email, "jane@example.com");
        assert_eq!(valid.role, Role::Author);
    }

    #[test]
    fn all_failures_are_reported_at_once() {
        let (valid, violations) = validate_registration(&Registration::default());
        assert!(valid.is_none());
        // fullName, email, password, confirmPassword, userType, termsAccepted
        assert_eq!(violations.len(), 6);
    }

    #[test]
    fn short_name_is_rejected() {
        let mut input = valid_input();
        input.full_name = Some("J".into());
        let (_, violations) = validate_registration(&input);
        let errs = violations.into_vec();
        assert!(errs.iter().any(|v| v.param.as_deref() == Some("fullName")));
    }

    #[test]
    fn name_with_digits_is_rejected() {
        let mut input = valid_input();
        input.full_name = Some("Jane 2".into());
        let (valid, violations) = validate_registration(&input);
        assert!(valid.is_none());
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn password_mismatch_is_rejected() {
        let mut input = valid_input();
        input.confirm_password = Some("different".into());
        let (_, violations) = validate_registration(&input);
        let errs = violations.into_vec();
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].msg, "Passwords do not match.");
    }

    #[test]
    fn unknown_role_is_rejected() {
        let mut input = valid_input();
        input.role = Some("Admin".into());
        let (_, violations) = validate_registration(&input);
        let errs = violations.into_vec();
        assert!(errs.iter().any(|v| v.msg == "Invalid user type selected."));
    }

    #[test]
    fn terms_must_be_accepted() {
        let mut input = valid_input();
        input.terms_accepted = Some("false".into());
        let (valid, violations) = validate_registration(&input);
        assert!(valid.is_none());
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn email_shapes() {
        assert!(is_email_shaped("a@b.com"));
        assert!(is_email_shaped("first.last@sub.domain.org"));
        assert!(!is_email_shaped("no-at-sign"));
        assert!(!is_email_shaped("@missing-local.com"));
        assert!(!is_email_shaped("user@"));
        assert!(!is_email_shaped("user@nodot"));
        assert!(!is_email_shaped("user@.leadingdot.com"));
        assert!(!is_email_shaped("spaced user@b.com"));
    }
}
