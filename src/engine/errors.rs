use thiserror::Error;

/// Errors raised by world construction and content evaluation.
///
/// Player-facing misses (unknown clue, locked room, empty bag) are never
/// errors; they come back as ordinary reply strings. Everything here is an
/// author-time or content defect.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A required field was empty or missing at construction time.
    #[error("invalid {entity}: {reason}")]
    Construction {
        entity: &'static str,
        reason: String,
    },

    /// No location is flagged as the default, or more than one is.
    #[error("world needs exactly one default location, found {found}")]
    MissingDefaultLocation { found: usize },

    /// A location has no room flagged as the default.
    #[error("location \"{location}\" has no default room")]
    MissingDefaultRoom { location: String },

    /// An action rule references a location or room that does not exist.
    #[error("action for \"{trigger}\" references missing {kind} \"{target}\"")]
    UnresolvedActionTarget {
        trigger: String,
        kind: &'static str,
        target: String,
    },

    /// Wrapper around IO errors while reading world or config files.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Wrapper around JSON errors while parsing a world seed document.
    #[error("seed parse error: {0}")]
    Seed(#[from] serde_json::Error),
}
