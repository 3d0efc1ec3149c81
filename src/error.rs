use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised while turning user input into a human-equivalent age.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AgeError {
    #[error("invalid birth date: {0:?}")]
    InvalidDate(String),

    #[error("invalid size category: {0:?} (expected small, medium or large)")]
    InvalidCategory(String),

    #[error("birth date is empty")]
    EmptyBirthDate,

    #[error("birth date {birth} is after reference date {reference}")]
    FutureDate {
        birth: NaiveDate,
        reference: NaiveDate,
    },
}

impl AgeError {
    /// True for mistakes the user can fix by correcting the form.
    /// An unknown category only comes from a wiring bug.
    pub fn is_user_error(&self) -> bool {
        !matches!(self, AgeError::InvalidCategory(_))
    }

    /// Message shown in the results panel.
    pub fn user_message(&self) -> String {
        match self {
            AgeError::EmptyBirthDate => "Please enter your dog's birth date.".to_string(),
            AgeError::InvalidDate(_) => {
                "The birth date could not be read, please check it (YYYY-MM-DD).".to_string()
            }
            AgeError::FutureDate { .. } => {
                "Your dog has not been born yet! Please check the birth date.".to_string()
            }
            AgeError::InvalidCategory(token) => {
                format!("Unknown size category {token:?}.")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_category_errors_are_defects() {
        assert!(AgeError::EmptyBirthDate.is_user_error());
        assert!(AgeError::InvalidDate("x".into()).is_user_error());
        let birth = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
        let reference = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        assert!(AgeError::FutureDate { birth, reference }.is_user_error());
        assert!(!AgeError::InvalidCategory("huge".into()).is_user_error());
    }

    #[test]
    fn future_date_message_says_not_born() {
        let birth = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
        let reference = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let msg = AgeError::FutureDate { birth, reference }.user_message();
        assert!(msg.contains("not been born"));
    }
}
