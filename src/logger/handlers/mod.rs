// Log Handlers
// "File, mail, and in-memory destinations"

mod email;
mod file;
mod memory;

pub use email::{EmailHandler, MailTransport, SendmailTransport};
pub use file::FileHandler;
pub use memory::MemoryHandler;
