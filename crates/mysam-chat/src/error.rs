//! Error types for the conversational interface.

use mysam_core::MySamError;

/// Errors from the chat and voice subsystems.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("speech recognition is not available")]
    SpeechUnavailable,
    #[error("voice capture is already active")]
    AlreadyListening,
    #[error("voice capture is not active")]
    NotListening,
    #[error("recognition error: {0}")]
    Recognition(String),
    #[error("synthesis error: {0}")]
    Synthesis(String),
}

impl From<ChatError> for MySamError {
    fn from(err: ChatError) -> Self {
        MySamError::Voice(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_error_display() {
        assert_eq!(
            ChatError::SpeechUnavailable.to_string(),
            "speech recognition is not available"
        );
        assert_eq!(
            ChatError::AlreadyListening.to_string(),
            "voice capture is already active"
        );
        assert_eq!(
            ChatError::NotListening.to_string(),
            "voice capture is not active"
        );
        assert_eq!(
            ChatError::Recognition("no-speech".to_string()).to_string(),
            "recognition error: no-speech"
        );
        assert_eq!(
            ChatError::Synthesis("device busy".to_string()).to_string(),
            "synthesis error: device busy"
        );
    }

    #[test]
    fn test_chat_error_converts_to_core_error() {
        let err: MySamError = ChatError::SpeechUnavailable.into();
        assert!(matches!(err, MySamError::Voice(_)));
        assert!(err.to_string().contains("not available"));
    }
}
