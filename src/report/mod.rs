pub mod audit;
pub mod formatters;

pub use audit::AuditLog;
