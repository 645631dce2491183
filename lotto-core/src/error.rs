use crate::types::Address;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LotteryError>;

/// Broad classes of rejection, used by callers to decide how to present a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    IllegalState,
    BusinessRule,
    Ambient,
}

#[derive(Error, Debug)]
pub enum LotteryError {
    #[error("Invalid ticket price: {0:?} (enter a number greater than 0)")]
    InvalidTicketPrice(String),

    #[error("Invalid address: {0:?}")]
    InvalidAddress(String),

    #[error("An active lottery already exists, pick a winner first")]
    AlreadyActive,

    #[error("No active lottery")]
    NoActiveLottery,

    #[error("{0} has already purchased a ticket for this lottery")]
    DuplicateParticipant(Address),

    #[error("No participants to pick a winner from")]
    NoParticipants,

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl LotteryError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidTicketPrice(_) | Self::InvalidAddress(_) => ErrorKind::InvalidInput,
            Self::AlreadyActive | Self::NoActiveLottery => ErrorKind::IllegalState,
            Self::DuplicateParticipant(_) | Self::NoParticipants => ErrorKind::BusinessRule,
            Self::Config(_) | Self::Io(_) | Self::Serialization(_) => ErrorKind::Ambient,
        }
    }

    /// Rejections of a single operation that leave the machine usable.
    pub fn is_rejection(&self) -> bool {
        self.kind() != ErrorKind::Ambient
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            LotteryError::InvalidTicketPrice("abc".into()).kind(),
            ErrorKind::InvalidInput
        );
        assert_eq!(LotteryError::AlreadyActive.kind(), ErrorKind::IllegalState);
        assert_eq!(LotteryError::NoParticipants.kind(), ErrorKind::BusinessRule);
        assert!(!LotteryError::config("bad").is_rejection());
        assert!(LotteryError::NoActiveLottery.is_rejection());
    }
}
