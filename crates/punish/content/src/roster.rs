//! In-memory fighter registry.

use std::collections::HashMap;

use punish_core::{Fighter, Move};

/// Fighters indexed by id, kept in load order.
#[derive(Clone, Debug, Default)]
pub struct Roster {
    fighters: Vec<Fighter>,
    index: HashMap<String, usize>,
}

impl Roster {
    /// Builds a roster, rejecting duplicate fighter ids.
    pub fn new(fighters: Vec<Fighter>) -> anyhow::Result<Self> {
        let mut index = HashMap::with_capacity(fighters.len());
        for (position, fighter) in fighters.iter().enumerate() {
            if index.insert(fighter.id.clone(), position).is_some() {
                anyhow::bail!("Duplicate fighter id '{}' in roster", fighter.id);
            }
        }
        Ok(Self { fighters, index })
    }

    pub fn fighter(&self, id: &str) -> Option<&Fighter> {
        self.index.get(id).map(|&position| &self.fighters[position])
    }

    /// Looks up a move by fighter id and move id.
    pub fn find_move(&self, fighter_id: &str, move_id: &str) -> Option<&Move> {
        self.fighter(fighter_id)?.find_move(move_id)
    }

    /// All fighters, in load order.
    pub fn fighters(&self) -> &[Fighter] {
        &self.fighters
    }

    pub fn len(&self) -> usize {
        self.fighters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fighters.is_empty()
    }
}
