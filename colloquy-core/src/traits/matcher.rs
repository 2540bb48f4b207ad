use crate::errors::ColloquyResult;
use crate::models::SequenceMatch;
use crate::statement::Conversation;

/// The matching boundary: find the closest previously observed
/// conversational path for an ongoing conversation.
///
/// `Ok(None)` is the explicit no-match signal, returned when the corpus is
/// empty or no candidate scores positively.
pub trait ISequenceMatcher {
    fn find_closest(&self, conversation: &Conversation) -> ColloquyResult<Option<SequenceMatch>>;
}
