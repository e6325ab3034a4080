// Legacy Runtime Error Codes
// "Fifteen codes, three classes, no surprises"

use serde::{Deserialize, Serialize};

/// The closed set of legacy runtime error codes this crate classifies.
///
/// Raw values follow the source runtime's numbering. The table is fixed by
/// design: a raw code outside this set classifies as [`SeverityClass::Fatal`]
/// and renders its severity name as `"Unknown"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    Error,
    Warning,
    Parse,
    Notice,
    CoreError,
    CoreWarning,
    CompileError,
    CompileWarning,
    UserError,
    UserWarning,
    UserNotice,
    Strict,
    RecoverableError,
    Deprecated,
    UserDeprecated,
}

/// How a runtime error code routes through the interception core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeverityClass {
    /// Logged at `notice`, execution continues.
    Notice,
    /// Logged at `warning`, execution continues.
    Warning,
    /// Escalated into uncaught-failure handling.
    Fatal,
}

impl ErrorCode {
    /// All codes, in raw-value order.
    pub const ALL: [ErrorCode; 15] = [
        Self::Error,
        Self::Warning,
        Self::Parse,
        Self::Notice,
        Self::CoreError,
        Self::CoreWarning,
        Self::CompileError,
        Self::CompileWarning,
        Self::UserError,
        Self::UserWarning,
        Self::UserNotice,
        Self::Strict,
        Self::RecoverableError,
        Self::Deprecated,
        Self::UserDeprecated,
    ];

    /// Look up a code from its raw runtime value.
    pub fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            1 => Some(Self::Error),
            2 => Some(Self::Warning),
            4 => Some(Self::Parse),
            8 => Some(Self::Notice),
            16 => Some(Self::CoreError),
            32 => Some(Self::CoreWarning),
            64 => Some(Self::CompileError),
            128 => Some(Self::CompileWarning),
            256 => Some(Self::UserError),
            512 => Some(Self::UserWarning),
            1024 => Some(Self::UserNotice),
            2048 => Some(Self::Strict),
            4096 => Some(Self::RecoverableError),
            8192 => Some(Self::Deprecated),
            16384 => Some(Self::UserDeprecated),
            _ => None,
        }
    }

    /// The raw runtime value for this code.
    pub fn as_raw(&self) -> u32 {
        match self {
            Self::Error => 1,
            Self::Warning => 2,
            Self::Parse => 4,
            Self::Notice => 8,
            Self::CoreError => 16,
            Self::CoreWarning => 32,
            Self::CompileError => 64,
            Self::CompileWarning => 128,
            Self::UserError => 256,
            Self::UserWarning => 512,
            Self::UserNotice => 1024,
            Self::Strict => 2048,
            Self::RecoverableError => 4096,
            Self::Deprecated => 8192,
            Self::UserDeprecated => 16384,
        }
    }

    /// Human-readable severity name used in critical log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Error => "E_ERROR",
            Self::Warning => "E_WARNING",
            Self::Parse => "E_PARSE",
            Self::Notice => "E_NOTICE",
            Self::CoreError => "E_CORE_ERROR",
            Self::CoreWarning => "E_CORE_WARNING",
            Self::CompileError => "E_COMPILE_ERROR",
            Self::CompileWarning => "E_COMPILE_WARNING",
            Self::UserError => "E_USER_ERROR",
            Self::UserWarning => "E_USER_WARNING",
            Self::UserNotice => "E_USER_NOTICE",
            Self::Strict => "E_STRICT",
            Self::RecoverableError => "E_RECOVERABLE_ERROR",
            Self::Deprecated => "E_DEPRECATED",
            Self::UserDeprecated => "E_USER_DEPRECATED",
        }
    }

    /// Classification driving the recoverable-error path.
    pub fn class(&self) -> SeverityClass {
        match self {
            Self::Notice
            | Self::UserNotice
            | Self::Deprecated
            | Self::UserDeprecated
            | Self::Strict => SeverityClass::Notice,

            Self::Warning | Self::UserWarning => SeverityClass::Warning,

            // Everything else escalates, including recoverable errors.
            Self::Error
            | Self::Parse
            | Self::CoreError
            | Self::CoreWarning
            | Self::CompileError
            | Self::CompileWarning
            | Self::UserError
            | Self::RecoverableError => SeverityClass::Fatal,
        }
    }

    /// Whether this code participates in the fatal-shutdown pass.
    ///
    /// A distinct, smaller set than [`SeverityClass::Fatal`]: recoverable
    /// errors escalate while running but never appear as a shutdown condition.
    pub fn is_shutdown_fatal(&self) -> bool {
        matches!(
            self,
            Self::Error
                | Self::CompileError
                | Self::CompileWarning
                | Self::CoreError
                | Self::CoreWarning
                | Self::Parse
                | Self::UserError
        )
    }
}

/// Classify a raw runtime code, failing closed: unmapped codes are Fatal.
pub fn classify_raw(raw: u32) -> SeverityClass {
    ErrorCode::from_raw(raw).map_or(SeverityClass::Fatal, |code| code.class())
}

/// Severity name for a raw code, `"Unknown"` when unmapped.
pub fn severity_name(raw: u32) -> &'static str {
    ErrorCode::from_raw(raw).map_or("Unknown", |code| code.name())
}

/// Shutdown-fatal membership for a raw code; unmapped codes are excluded.
pub fn raw_is_shutdown_fatal(raw: u32) -> bool {
    ErrorCode::from_raw(raw).is_some_and(|code| code.is_shutdown_fatal())
}
