use std::collections::HashSet;

use crate::move_token::MoveToken;

/// The legal moves for one position, normalized and de-duplicated.
///
/// Built once per request from whatever the caller supplied. Entries that do
/// not parse as a [`MoveToken`] are dropped silently; the first occurrence of
/// a duplicate keeps its place in the list.
#[derive(Debug, Clone, Default)]
pub struct LegalMoveSet {
    moves: Vec<MoveToken>,
    members: HashSet<MoveToken>,
}

impl LegalMoveSet {
    pub fn normalize<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::default();
        for entry in raw {
            let Some(token) = MoveToken::parse(entry.as_ref()) else {
                continue;
            };
            if set.members.insert(token.clone()) {
                set.moves.push(token);
            }
        }
        set
    }

    pub fn contains(&self, token: &MoveToken) -> bool {
        self.members.contains(token)
    }

    /// An empty set means the side to move has no legal moves.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Members in first-seen order.
    pub fn as_slice(&self) -> &[MoveToken] {
        &self.moves
    }

    pub fn iter(&self) -> impl Iterator<Item = &MoveToken> {
        self.moves.iter()
    }
}
