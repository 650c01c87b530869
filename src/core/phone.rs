//! Kenyan mobile number validation for the M-PESA payment field.

use super::payment::PaymentMethod;

/// Placeholder shown in the phone field for every method
pub const PHONE_PLACEHOLDER: &str = "254700000000";

/// Inline error shown under a non-empty, invalid phone number
pub const INVALID_PHONE_MESSAGE: &str =
    "Please enter a valid Kenyan phone number (e.g., 254700000000)";

const COUNTRY_PREFIX: &str = "254";
const PHONE_LENGTH: usize = 12;

/// Result of checking the phone field
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PhoneStatus {
    /// Nothing entered yet. Neutral feedback, never an error.
    #[default]
    Empty,
    Valid,
    Invalid,
}

impl PhoneStatus {
    pub fn is_valid(&self) -> bool {
        matches!(self, PhoneStatus::Valid)
    }

    /// Border color for the input, `None` keeps the stylesheet default
    pub fn border_color(&self) -> Option<&'static str> {
        match self {
            PhoneStatus::Empty => None,
            PhoneStatus::Valid => Some("#28a745"),
            PhoneStatus::Invalid => Some("#dc3545"),
        }
    }

    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            PhoneStatus::Invalid => Some(INVALID_PHONE_MESSAGE),
            _ => None,
        }
    }
}

/// Check a phone number: `254`, then `7` or `1`, then exactly eight digits.
pub fn check_phone(phone: &str) -> PhoneStatus {
    if phone.is_empty() {
        return PhoneStatus::Empty;
    }

    let bytes = phone.as_bytes();
    let valid = bytes.len() == PHONE_LENGTH
        && phone.starts_with(COUNTRY_PREFIX)
        && matches!(bytes[3], b'7' | b'1')
        && bytes[4..].iter().all(u8::is_ascii_digit);

    if valid {
        PhoneStatus::Valid
    } else {
        PhoneStatus::Invalid
    }
}

/// Whether the pay button may be enabled for this method and phone state.
///
/// Only a method that requires a phone number can disable submission.
pub fn submit_allowed(method: Option<PaymentMethod>, status: PhoneStatus) -> bool {
    match method {
        Some(method) if method.requires_phone() => status.is_valid(),
        _ => true,
    }
}

/// Label and placeholder of the phone field for the selected method
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhoneFieldCopy {
    pub label: &'static str,
    pub placeholder: &'static str,
}

impl PhoneFieldCopy {
    pub fn for_method(method: Option<PaymentMethod>) -> Self {
        let label = match method {
            Some(method) if method.requires_phone() => "Phone Number (for M-PESA)",
            _ => "Phone Number (Optional)",
        };

        Self {
            label,
            placeholder: PHONE_PLACEHOLDER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_safaricom_and_airtel_prefixes() {
        assert_eq!(check_phone("254712345678"), PhoneStatus::Valid);
        assert_eq!(check_phone("254112345678"), PhoneStatus::Valid);
    }

    #[test]
    fn test_rejects_malformed_numbers() {
        for phone in [
            "254812345678",  // wrong operator digit
            "25471234567",   // too short
            "2547123456789", // too long
            "0712345678",    // local format
            "+254712345678", // leading plus
            "25471234567a",  // non-digit
            "254 71234567",
        ] {
            assert_eq!(check_phone(phone), PhoneStatus::Invalid, "{phone}");
        }
    }

    #[test]
    fn test_rejects_non_ascii_digits() {
        assert_eq!(check_phone("254712345６78"), PhoneStatus::Invalid);
    }

    #[test]
    fn test_empty_is_neutral() {
        let status = check_phone("");
        assert_eq!(status, PhoneStatus::Empty);
        assert!(status.border_color().is_none());
        assert!(status.error_message().is_none());
    }

    #[test]
    fn test_feedback_colors() {
        assert_eq!(PhoneStatus::Valid.border_color(), Some("#28a745"));
        assert_eq!(PhoneStatus::Invalid.border_color(), Some("#dc3545"));
        assert_eq!(
            PhoneStatus::Invalid.error_message(),
            Some(INVALID_PHONE_MESSAGE)
        );
    }

    #[test]
    fn test_mpesa_requires_valid_phone() {
        let mpesa = Some(PaymentMethod::Mpesa);
        assert!(!submit_allowed(mpesa, PhoneStatus::Empty));
        assert!(!submit_allowed(mpesa, PhoneStatus::Invalid));
        assert!(submit_allowed(mpesa, PhoneStatus::Valid));
    }

    #[test]
    fn test_other_methods_always_allowed() {
        for status in [PhoneStatus::Empty, PhoneStatus::Invalid, PhoneStatus::Valid] {
            assert!(submit_allowed(Some(PaymentMethod::Card), status));
            assert!(submit_allowed(None, status));
        }
    }

    #[test]
    fn test_field_copy_per_method() {
        let mpesa = PhoneFieldCopy::for_method(Some(PaymentMethod::Mpesa));
        let card = PhoneFieldCopy::for_method(Some(PaymentMethod::Card));

        assert_eq!(mpesa.label, "Phone Number (for M-PESA)");
        assert_eq!(card.label, "Phone Number (Optional)");
        assert_eq!(mpesa.placeholder, card.placeholder);
    }
}
