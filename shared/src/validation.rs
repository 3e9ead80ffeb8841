// =============================================================================
// Validation — chainable field validators for the contact form gate
// =============================================================================
//
// The contact form marks every field mandatory at the input layer. These
// validators express that gate so the engine can report per-field errors and
// a can_submit() flag; submit() itself never re-checks emptiness.
//
//   let result = validate(value)
//       .required()
//       .email()
//       .max_length(254)
//       .finish();
//
// Once any validator in the chain fails, the rest are skipped and `.finish()`
// returns the first error message.
//
// =============================================================================

/// Longest accepted sender name.
pub const MAX_NAME_LEN: usize = 100;

/// RFC 5321 path limit.
pub const MAX_EMAIL_LEN: usize = 254;

/// Upper bound for the message body. Long bodies make mail clients truncate
/// the URI.
pub const MAX_MESSAGE_LEN: usize = 5000;

/// A chainable validator that keeps the first error encountered.
pub struct Validator<'a> {
    value: &'a str,
    result: Result<(), String>,
}

/// Start a validation chain for the given value.
pub fn validate(value: &str) -> Validator<'_> {
    Validator {
        value,
        result: Ok(()),
    }
}

impl<'a> Validator<'a> {
    fn fail(self, msg: String) -> Self {
        Validator {
            value: self.value,
            result: Err(msg),
        }
    }

    /// Fails if the value is empty (after trimming).
    pub fn required(self) -> Self {
        if self.result.is_err() {
            return self;
        }
        match required(self.value) {
            Ok(()) => self,
            Err(msg) => self.fail(msg),
        }
    }

    /// Fails if the value has more than `n` characters.
    pub fn max_length(self, n: usize) -> Self {
        if self.result.is_err() {
            return self;
        }
        if self.value.chars().count() > n {
            return self.fail(format!("Must be at most {} characters", n));
        }
        self
    }

    /// Basic email check: '@' with a '.' somewhere in the domain part. Only
    /// meant to catch typos; the mail client is the real judge.
    pub fn email(self) -> Self {
        if self.result.is_err() {
            return self;
        }
        match email(self.value) {
            Ok(()) => self,
            Err(msg) => self.fail(msg),
        }
    }

    /// Consume the validator and return the accumulated result.
    pub fn finish(self) -> Result<(), String> {
        self.result
    }
}

/// Fails if the value is empty (after trimming).
pub fn required(value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err("This field is required".to_string());
    }
    Ok(())
}

/// Basic email validation: must contain '@' with a '.' after it.
pub fn email(value: &str) -> Result<(), String> {
    let valid = value
        .split_once('@')
        .map_or(false, |(local, domain)| {
            !local.is_empty() && domain.contains('.') && !domain.ends_with('.')
        });
    if !valid {
        return Err("Please enter a valid email address".to_string());
    }
    Ok(())
}

/// Run the contact form's rule chain for one field. Unknown fields pass.
pub fn validate_contact_field(field: &str, value: &str) -> Result<(), String> {
    match field {
        "name" => validate(value).required().max_length(MAX_NAME_LEN).finish(),
        "email" => validate(value)
            .required()
            .email()
            .max_length(MAX_EMAIL_LEN)
            .finish(),
        "message" => validate(value)
            .required()
            .max_length(MAX_MESSAGE_LEN)
            .finish(),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_all_pass() {
        let result = validate("hello@example.com")
            .required()
            .email()
            .max_length(100)
            .finish();
        assert!(result.is_ok());
    }

    #[test]
    fn test_chain_required_fails_on_whitespace() {
        let result = validate("   ").required().finish();
        assert_eq!(result.unwrap_err(), "This field is required");
    }

    #[test]
    fn test_chain_early_return_skips_later_checks() {
        // email() would report a different message if it ran.
        let result = validate("").required().email().finish();
        assert_eq!(result.unwrap_err(), "This field is required");
    }

    #[test]
    fn test_chain_max_length_counts_chars() {
        assert!(validate("ééééé").max_length(5).finish().is_ok());
        assert_eq!(
            validate("abcdef").max_length(5).finish().unwrap_err(),
            "Must be at most 5 characters"
        );
    }

    #[test]
    fn test_email() {
        assert!(email("ada@x.com").is_ok());
        assert!(email("a@b.c").is_ok());
        assert!(email("noatsign").is_err());
        assert!(email("no@dot").is_err());
        assert!(email("@nolocal.com").is_err());
        assert!(email("trailing@dot.").is_err());
    }

    #[test]
    fn test_validate_contact_field_dispatch() {
        assert!(validate_contact_field("name", "Ada").is_ok());
        assert!(validate_contact_field("name", "").is_err());
        assert!(validate_contact_field("email", "ada@x.com").is_ok());
        assert!(validate_contact_field("email", "ada").is_err());
        assert!(validate_contact_field("message", "Hi").is_ok());
        assert!(validate_contact_field("message", &"m".repeat(MAX_MESSAGE_LEN + 1)).is_err());
        assert!(validate_contact_field("phone", "").is_ok());
    }
}
