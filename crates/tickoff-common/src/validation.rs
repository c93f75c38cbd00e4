use anyhow::{bail, Result};

/// Validates an email address and returns its normalized form.
///
/// Surrounding whitespace is dropped and the domain part is lowercased; the
/// local part is kept as typed.
pub fn normalize_email(email: &str) -> Result<String> {
    let email = email.trim();
    if email.is_empty() {
        bail!("Email is required");
    }
    if email.chars().any(char::is_whitespace) {
        bail!("Email must not contain whitespace");
    }

    let (local, domain) = match email.split_once('@') {
        Some(parts) => parts,
        None => bail!("Email must contain '@'"),
    };
    if local.is_empty() || domain.contains('@') {
        bail!("Email '{}' is not a valid address", email);
    }
    if !domain.contains('.')
        || domain.starts_with('.')
        || domain.ends_with('.')
        || domain.contains("..")
    {
        bail!("Email '{}' has an invalid domain", email);
    }

    Ok(format!("{}@{}", local, domain.to_ascii_lowercase()))
}

/// Display name: required, stored trimmed.
pub fn validate_name(name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        bail!("Name is required");
    }
    Ok(name.to_string())
}

/// Passwords are taken verbatim; only emptiness is rejected.
pub fn validate_password(password: &str) -> Result<()> {
    if password.is_empty() {
        bail!("Password is required");
    }
    Ok(())
}

/// Todo title: required, stored trimmed.
pub fn validate_title(title: &str) -> Result<String> {
    let title = title.trim();
    if title.is_empty() {
        bail!("Title must not be empty");
    }
    Ok(title.to_string())
}
