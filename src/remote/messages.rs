//! Translation table for provider error codes.
//!
//! The account service answers failures with a short machine code; known
//! codes map to a fixed local message, anything else falls back to a
//! generic one so raw codes never reach the screen.

pub fn translate(code: &str) -> String {
    match code {
        "invalid-credentials" => "Wrong email or password.".to_string(),
        "user-not-found" => "No account exists for that email.".to_string(),
        "email-already-in-use" => "That email is already registered.".to_string(),
        "invalid-email" => "That email address is not valid.".to_string(),
        "weak-password" => "Password is too weak (minimum 6 characters).".to_string(),
        "too-many-requests" => {
            "Too many attempts. Wait a moment and try again.".to_string()
        }
        "user-disabled" => "This account has been disabled.".to_string(),
        "network-request-failed" => "Could not reach the account service.".to_string(),
        other => format!("Account service error ({other})."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_have_fixed_messages() {
        assert_eq!(translate("invalid-credentials"), "Wrong email or password.");
        assert_eq!(
            translate("email-already-in-use"),
            "That email is already registered."
        );
    }

    #[test]
    fn unknown_codes_fall_back_without_leaking_internals() {
        let msg = translate("quota-exceeded");
        assert!(msg.contains("quota-exceeded"));
        assert!(msg.starts_with("Account service error"));
    }
}
