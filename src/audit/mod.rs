pub mod collect;
pub mod record;

pub use collect::collect_audit;
pub use record::{AuditRecord, CategoryScores, Competitor};
