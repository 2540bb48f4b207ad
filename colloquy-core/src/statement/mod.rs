pub mod conversation;
pub mod statement;

pub use conversation::Conversation;
pub use statement::Statement;
