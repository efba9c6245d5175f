//! Client-side form guards.
//!
//! These rules gate submissions before any network call is made. They are
//! UI-level only; the server remains the authority on every one of them.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a valid amount.")]
    InvalidAmount,
    #[error("Amount exceeds your total earnings.")]
    AmountExceedsEarnings,
    #[error("Account number is required.")]
    AccountNumberMissing,
    #[error("Account numbers do not match.")]
    AccountNumberMismatch,
    #[error("Enter a valid 11-character IFSC code.")]
    InvalidIfscCode,
    #[error("Name is required.")]
    NameMissing,
    #[error("Enter a valid 10-digit mobile number.")]
    InvalidMobileNumber,
    #[error("Enter a valid email address.")]
    InvalidEmail,
    #[error("Password must be at least 8 characters long, with at least one number and one special character.")]
    WeakPassword,
    #[error("Passwords do not match.")]
    PasswordMismatch,
    #[error("Referral ID is required.")]
    ReferralCodeMissing,
    #[error("Select a PIN to continue.")]
    PinMissing,
}

/// Parses and bounds-checks a withdrawal amount against the earnings total
/// currently displayed. Rejects without touching the network.
pub fn withdraw_amount(raw: &str, total_earnings: f64) -> Result<f64, ValidationError> {
    let amount: f64 = raw.trim().parse().map_err(|_| ValidationError::InvalidAmount)?;
    if !amount.is_finite() || amount <= 0.0 {
        return Err(ValidationError::InvalidAmount);
    }
    if amount > total_earnings {
        return Err(ValidationError::AmountExceedsEarnings);
    }
    Ok(amount)
}

/// Bank-details guard: the account number must be non-empty and match its
/// confirmation field, and the IFSC code must have the standard shape.
pub fn bank_details(
    account_number: &str,
    confirm_account_number: &str,
    ifsc_code: &str,
) -> Result<(), ValidationError> {
    if account_number.trim().is_empty() {
        return Err(ValidationError::AccountNumberMissing);
    }
    if account_number != confirm_account_number {
        return Err(ValidationError::AccountNumberMismatch);
    }
    let ifsc = ifsc_code.trim();
    if ifsc.len() != 11 || !ifsc.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ValidationError::InvalidIfscCode);
    }
    Ok(())
}

pub fn referral_code(raw: &str) -> Result<(), ValidationError> {
    if raw.trim().is_empty() {
        return Err(ValidationError::ReferralCodeMissing);
    }
    Ok(())
}

pub fn name(raw: &str) -> Result<(), ValidationError> {
    if raw.trim().is_empty() {
        return Err(ValidationError::NameMissing);
    }
    Ok(())
}

pub fn mobile_number(raw: &str) -> Result<(), ValidationError> {
    if raw.len() == 10 && raw.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidMobileNumber)
    }
}

pub fn email(raw: &str) -> Result<(), ValidationError> {
    let Some((local, domain)) = raw.split_once('@') else {
        return Err(ValidationError::InvalidEmail);
    };
    let domain_ok = match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    };
    if local.is_empty() || !domain_ok || raw.contains(char::is_whitespace) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

pub fn password(raw: &str) -> Result<(), ValidationError> {
    const SPECIALS: &str = "!@#$%^&*";
    let long_enough = raw.len() >= 8;
    let has_digit = raw.chars().any(|c| c.is_ascii_digit());
    let has_special = raw.chars().any(|c| SPECIALS.contains(c));
    if long_enough && has_digit && has_special {
        Ok(())
    } else {
        Err(ValidationError::WeakPassword)
    }
}

pub fn password_confirmation(password: &str, confirm: &str) -> Result<(), ValidationError> {
    if password == confirm {
        Ok(())
    } else {
        Err(ValidationError::PasswordMismatch)
    }
}

pub fn pin_selection(pin: &str) -> Result<(), ValidationError> {
    if pin.is_empty() {
        Err(ValidationError::PinMissing)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn withdraw_rejects_amount_above_earnings() {
        assert_eq!(
            withdraw_amount("15501", 15500.0),
            Err(ValidationError::AmountExceedsEarnings)
        );
    }

    #[test]
    fn withdraw_rejects_zero_negative_and_garbage() {
        assert_eq!(withdraw_amount("0", 100.0), Err(ValidationError::InvalidAmount));
        assert_eq!(withdraw_amount("-5", 100.0), Err(ValidationError::InvalidAmount));
        assert_eq!(withdraw_amount("abc", 100.0), Err(ValidationError::InvalidAmount));
        assert_eq!(withdraw_amount("", 100.0), Err(ValidationError::InvalidAmount));
    }

    #[test]
    fn withdraw_accepts_amount_within_earnings() {
        assert_eq!(withdraw_amount(" 1500.50 ", 15500.0), Ok(1500.5));
        assert_eq!(withdraw_amount("15500", 15500.0), Ok(15500.0));
    }

    #[test]
    fn bank_details_require_matching_account_numbers() {
        assert_eq!(
            bank_details("12345678", "12345679", "HDFC0001234"),
            Err(ValidationError::AccountNumberMismatch)
        );
        assert_eq!(bank_details("12345678", "12345678", "HDFC0001234"), Ok(()));
    }

    #[test]
    fn bank_details_check_ifsc_shape() {
        assert_eq!(
            bank_details("12345678", "12345678", "HDFC-1234"),
            Err(ValidationError::InvalidIfscCode)
        );
    }

    #[test]
    fn mobile_number_must_be_ten_digits() {
        assert_eq!(mobile_number("9876543210"), Ok(()));
        assert_eq!(mobile_number("98765"), Err(ValidationError::InvalidMobileNumber));
        assert_eq!(mobile_number("987654321x"), Err(ValidationError::InvalidMobileNumber));
    }

    #[test]
    fn password_needs_length_digit_and_special() {
        assert_eq!(password("pass1word!"), Ok(()));
        assert_eq!(password("short1!"), Err(ValidationError::WeakPassword));
        assert_eq!(password("longpassword!"), Err(ValidationError::WeakPassword));
        assert_eq!(password("longpassword1"), Err(ValidationError::WeakPassword));
    }

    #[test]
    fn email_shape() {
        assert_eq!(email("a@b.co"), Ok(()));
        assert_eq!(email("a b@c.co"), Err(ValidationError::InvalidEmail));
        assert_eq!(email("a@bco"), Err(ValidationError::InvalidEmail));
        assert_eq!(email("@b.co"), Err(ValidationError::InvalidEmail));
    }
}
