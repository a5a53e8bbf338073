pub mod error;
pub mod matching;

pub use error::{RecordError, RecordKind};
pub use matching::lookup::{find_attachment, find_transaction};
pub use matching::policy::{MATCH_POLICY_V1, MatchPolicy};
pub use matching::types::{Attachment, AttachmentData, AttachmentKind, Transaction};

pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");
