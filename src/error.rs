/// Rejections surfaced by the wheel.
///
/// The `Display` text is meant to be shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WheelError {
    #[error("Please enter a valid name.")]
    InvalidInput,

    #[error("\"{0}\" is already on the wheel.")]
    DuplicateEntry(String),

    /// A selection landed outside the registry. Never expected at runtime.
    #[error("index {index} is out of range for {len} participants")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Please add at least {required} names ({present} on the wheel).")]
    InsufficientParticipants { required: usize, present: usize },

    #[error("Wait for the wheel to stop first.")]
    SpinInProgress,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        assert_eq!(WheelError::InvalidInput.to_string(), "Please enter a valid name.");
        assert_eq!(
            WheelError::DuplicateEntry("Ada".into()).to_string(),
            "\"Ada\" is already on the wheel."
        );
        assert_eq!(
            WheelError::InsufficientParticipants { required: 2, present: 1 }.to_string(),
            "Please add at least 2 names (1 on the wheel)."
        );
    }
}
