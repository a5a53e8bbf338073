use thiserror::Error;

/// Which record family a conversion was attempting to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Transaction,
    Attachment,
}

impl RecordKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Transaction => "transaction",
            Self::Attachment => "attachment",
        }
    }
}

/// The only failure the engine surfaces: a caller-supplied value whose
/// fundamental shape does not form a record at all. Well-shaped records with
/// missing fields are never errors; absent fields degrade to missed signals
/// inside the matcher.
#[derive(Debug, Error)]
#[error("{} record has the wrong shape: {source}", .kind.as_str())]
pub struct RecordError {
    pub kind: RecordKind,
    pub source: serde_json::Error,
}

impl RecordError {
    pub(crate) fn new(kind: RecordKind, source: serde_json::Error) -> Self {
        Self { kind, source }
    }
}
