// src/exit.rs
//! Process exit codes for the `fypgraph` binary.

use std::process::Termination;

use crate::error::FeedError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum FypExit {
    /// Command completed.
    Success = 0,
    /// Generic error (I/O, malformed files).
    Error = 1,
    /// Rejected input (bad flags, counters, config values, `top_k`).
    InvalidInput = 2,
    /// An interaction referenced a video missing from the catalog.
    NotFound = 3,
}

impl FypExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn exit(self) -> ! {
        std::process::exit(self.code())
    }
}

impl Termination for FypExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}

impl From<&FeedError> for FypExit {
    fn from(err: &FeedError) -> Self {
        match err {
            FeedError::VideoNotFound { .. } => Self::NotFound,
            FeedError::InvalidInput(_) => Self::InvalidInput,
            FeedError::Io { .. } | FeedError::Json(_) | FeedError::Toml(_) => Self::Error,
        }
    }
}
