pub mod contact;
pub mod parser;

pub use contact::{Contact, Iff};
pub use parser::{load_contacts, ContactParser, ParseReport, RejectReason, RejectedRow};
