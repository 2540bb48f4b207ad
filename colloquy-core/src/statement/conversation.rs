use serde::{Deserialize, Serialize};

use super::Statement;

/// An ordered, append-only history of conversational turns.
///
/// Appending wires the new statement's `in_response_to` to the previous
/// turn's text key, so a conversation always carries its own chain of
/// predecessor links. The matching core only ever reads this structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Conversation {
    statements: Vec<Statement>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a conversation from raw turn texts, linking each turn to the
    /// previous one.
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut conversation = Self::new();
        for text in texts {
            conversation.add_statement(Statement::new(text));
        }
        conversation
    }

    /// The most recent turn, if any.
    pub fn previous_statement(&self) -> Option<&Statement> {
        self.statements.last()
    }

    /// Append a statement as the latest turn in the conversation.
    pub fn add_statement(&mut self, mut statement: Statement) {
        if let Some(previous) = self.previous_statement() {
            statement.add_response(previous.text.clone());
        }
        self.statements.push(statement);
    }

    /// All turns, oldest first.
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Statement> {
        self.statements.iter()
    }
}

impl<'a> IntoIterator for &'a Conversation {
    type Item = &'a Statement;
    type IntoIter = std::slice::Iter<'a, Statement>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.iter()
    }
}
