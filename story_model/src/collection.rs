//! Ordered story collection with copy-on-write edits.

use serde::Serialize;
use serde_json::Value;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::card::{StoryCard, StoryId};
use crate::error::ModelResult;
use crate::schema::normalize;

/// Direction for [`StoryCollection::move_card`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    /// Towards index 0.
    Up,
    /// Towards the end.
    Down,
}

impl MoveDirection {
    pub fn offset(&self) -> isize {
        match self {
            MoveDirection::Up => -1,
            MoveDirection::Down => 1,
        }
    }
}

/// The ordered list of story cards. Order is render order.
///
/// Every operation returns a new collection. Cards are shared behind `Arc`,
/// so cards an operation did not touch stay pointer-equal to the ones in the
/// input and a view can skip re-rendering them.
///
/// Ids are unique within a collection. Keeping at least one card is a rule
/// of the editing surface (see [`StoryCollection::can_remove`]), not of the
/// collection itself.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(transparent)]
pub struct StoryCollection {
    cards: Vec<Arc<StoryCard>>,
}

impl StoryCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// The two seeded example cards a new section starts with.
    pub fn default_collection() -> Self {
        Self::from_cards([StoryCard::create_default(0), StoryCard::create_default(1)])
    }

    /// Build from already-normalized cards, repairing duplicate ids.
    pub fn from_cards(cards: impl IntoIterator<Item = StoryCard>) -> Self {
        let mut seen = HashSet::new();
        let cards = cards
            .into_iter()
            .map(|mut card| {
                if !seen.insert(card.id.clone()) {
                    let fresh = StoryId::new();
                    warn!(duplicate = %card.id, %fresh, "reassigning duplicate story id");
                    card.id = fresh.clone();
                    seen.insert(fresh);
                }
                Arc::new(card)
            })
            .collect();
        Self { cards }
    }

    /// Normalize every element of a persisted JSON array.
    ///
    /// Anything other than an array yields an empty collection.
    pub fn from_raw(raw: &Value) -> Self {
        match raw.as_array() {
            Some(items) => Self::from_cards(items.iter().map(normalize)),
            None => {
                debug!("stored stories are not an array; starting empty");
                Self::new()
            }
        }
    }

    /// Like [`StoryCollection::from_raw`], but an empty result is replaced
    /// by [`StoryCollection::default_collection`].
    pub fn load(raw: &Value) -> Self {
        let collection = Self::from_raw(raw);
        if collection.is_empty() {
            debug!("no stored stories; seeding defaults");
            return Self::default_collection();
        }
        collection
    }

    /// Parse JSON text and normalize it with [`StoryCollection::from_raw`].
    pub fn from_json_str(source: &str) -> ModelResult<Self> {
        let raw: Value = serde_json::from_str(source)?;
        Ok(Self::from_raw(&raw))
    }

    /// Serialize for persistence.
    pub fn to_value(&self) -> ModelResult<Value> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Arc<StoryCard>] {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<StoryCard>> {
        self.cards.iter()
    }

    pub fn get(&self, id: &StoryId) -> Option<&Arc<StoryCard>> {
        self.cards.iter().find(|card| &card.id == id)
    }

    pub fn position(&self, id: &StoryId) -> Option<usize> {
        self.cards.iter().position(|card| &card.id == id)
    }

    /// Append a fresh default card.
    ///
    /// The seed alternates with the current length so single-corner images
    /// keep alternating down the section.
    pub fn add(&self) -> (Self, Arc<StoryCard>) {
        let card = Arc::new(StoryCard::create_default(self.cards.len() % 2));
        let mut cards = self.cards.clone();
        cards.push(Arc::clone(&card));
        (Self { cards }, card)
    }

    /// Remove the card with `id`. Unknown ids are a no-op.
    pub fn remove(&self, id: &StoryId) -> Self {
        if self.position(id).is_none() {
            debug!(%id, "remove: story not found");
        }
        Self {
            cards: self
                .cards
                .iter()
                .filter(|card| &card.id != id)
                .cloned()
                .collect(),
        }
    }

    /// Swap the card at `index` with its neighbour in `direction`.
    ///
    /// A no-op when either position is out of bounds.
    pub fn move_card(&self, index: usize, direction: MoveDirection) -> Self {
        let target = index as isize + direction.offset();
        if index >= self.cards.len() || target < 0 || target as usize >= self.cards.len() {
            debug!(index, ?direction, "move: target out of bounds");
            return self.clone();
        }

        let mut cards = self.cards.clone();
        cards.swap(index, target as usize);
        Self { cards }
    }

    /// Replace the card with `id` by `update(card)`.
    ///
    /// The updater receives an owned copy. Its result keeps the original id
    /// even if the updater changed it. Unknown ids are a no-op.
    pub fn update_by_id<F>(&self, id: &StoryId, update: F) -> Self
    where
        F: FnOnce(StoryCard) -> StoryCard,
    {
        let Some(index) = self.position(id) else {
            debug!(%id, "update: story not found");
            return self.clone();
        };

        let mut updated = update(StoryCard::clone(&self.cards[index]));
        if &updated.id != id {
            warn!(%id, attempted = %updated.id, "story ids are immutable; keeping original");
            updated.id = id.clone();
        }

        let mut cards = self.cards.clone();
        cards[index] = Arc::new(updated);
        Self { cards }
    }

    /// Whether the editing surface may delete a card: never the last one.
    pub fn can_remove(&self) -> bool {
        self.cards.len() > 1
    }

    /// Resolve a possibly stale selection to an existing id, falling back to
    /// the first card.
    pub fn active_or_first(&self, selected: Option<&StoryId>) -> Option<&StoryId> {
        selected
            .and_then(|id| self.get(id))
            .or_else(|| self.cards.first())
            .map(|card| &card.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ids(collection: &StoryCollection) -> Vec<StoryId> {
        collection.iter().map(|card| card.id.clone()).collect()
    }

    fn three() -> StoryCollection {
        let (c, _) = StoryCollection::default_collection().add();
        c
    }

    #[test]
    fn test_default_collection() {
        let collection = StoryCollection::default_collection();
        assert_eq!(collection.len(), 2);
        assert!(!collection.cards()[0].image.single_corner);
        assert!(collection.cards()[1].image.single_corner);
    }

    #[test]
    fn test_add_alternates_corner() {
        let collection = StoryCollection::default_collection();
        let (grown, card) = collection.add();
        assert_eq!(grown.len(), 3);
        assert!(!card.image.single_corner);

        let (grown_again, card) = grown.add();
        assert_eq!(grown_again.len(), 4);
        assert!(card.image.single_corner);
        assert!(Arc::ptr_eq(&grown_again.cards()[3], &card));
    }

    #[test]
    fn test_add_to_empty() {
        let (collection, card) = StoryCollection::new().add();
        assert_eq!(collection.len(), 1);
        assert!(!card.image.single_corner);
    }

    #[test]
    fn test_remove() {
        let collection = StoryCollection::from_cards([StoryCard::create_default(0)]);
        let id = collection.cards()[0].id.clone();
        assert!(collection.remove(&id).is_empty());
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let collection = three();
        let after = collection.remove(&StoryId::from_string("missing"));
        assert_eq!(ids(&after), ids(&collection));
    }

    #[test]
    fn test_move_swaps_neighbours() {
        let collection = three();
        let [a, b, c]: [StoryId; 3] = ids(&collection).try_into().unwrap();

        let moved = collection.move_card(1, MoveDirection::Up);
        assert_eq!(ids(&moved), vec![b.clone(), a.clone(), c.clone()]);

        let moved = collection.move_card(1, MoveDirection::Down);
        assert_eq!(ids(&moved), vec![a, c, b]);
    }

    #[test]
    fn test_move_out_of_bounds_is_noop() {
        let collection = three();
        assert_eq!(ids(&collection.move_card(0, MoveDirection::Up)), ids(&collection));
        assert_eq!(ids(&collection.move_card(2, MoveDirection::Down)), ids(&collection));
        assert_eq!(ids(&collection.move_card(9, MoveDirection::Up)), ids(&collection));
    }

    #[test]
    fn test_update_by_id_shares_untouched_cards() {
        let collection = three();
        let target = collection.cards()[1].id.clone();

        let updated = collection.update_by_id(&target, |card| card.with_title("Edited"));

        assert_eq!(updated.cards()[1].title, "Edited");
        assert_eq!(collection.cards()[1].title, "Consectetur adipiscing elit lorem");
        assert!(Arc::ptr_eq(&updated.cards()[0], &collection.cards()[0]));
        assert!(Arc::ptr_eq(&updated.cards()[2], &collection.cards()[2]));
        assert!(!Arc::ptr_eq(&updated.cards()[1], &collection.cards()[1]));
    }

    #[test]
    fn test_update_by_id_unknown_is_noop() {
        let collection = three();
        let updated = collection.update_by_id(&StoryId::from_string("gone"), |card| {
            card.with_title("never")
        });
        assert_eq!(updated, collection);
    }

    #[test]
    fn test_update_cannot_change_id() {
        let collection = three();
        let target = collection.cards()[0].id.clone();
        let updated = collection.update_by_id(&target, |mut card| {
            card.id = StoryId::from_string("hijack");
            card
        });
        assert_eq!(updated.cards()[0].id, target);
    }

    #[test]
    fn test_from_raw_normalizes_and_dedupes() {
        let collection = StoryCollection::from_raw(&json!([
            { "id": "a", "title": "First", "hoverEffects": { "text": true } },
            { "id": "a", "title": "Second" },
            "junk"
        ]));

        assert_eq!(collection.len(), 3);
        assert!(collection.cards()[0].hover_effects.text.enabled);
        assert_eq!(collection.cards()[0].id.as_str(), "a");
        assert_ne!(collection.cards()[1].id.as_str(), "a");
        assert_eq!(collection.cards()[1].title, "Second");
    }

    #[test]
    fn test_from_raw_non_array() {
        assert!(StoryCollection::from_raw(&json!({ "stories": [] })).is_empty());
    }

    #[test]
    fn test_load_seeds_empty() {
        assert_eq!(StoryCollection::load(&json!([])).len(), 2);
        assert_eq!(StoryCollection::load(&json!(null)).len(), 2);
        assert_eq!(StoryCollection::load(&json!([{ "id": "x" }])).len(), 1);
    }

    #[test]
    fn test_json_round_trip() {
        let collection = StoryCollection::default_collection();
        let text = collection.to_value().unwrap().to_string();
        let restored = StoryCollection::from_json_str(&text).unwrap();
        assert_eq!(restored, collection);
    }

    #[test]
    fn test_from_json_str_invalid() {
        assert!(StoryCollection::from_json_str("[{").is_err());
    }

    #[test]
    fn test_can_remove() {
        let collection = StoryCollection::default_collection();
        assert!(collection.can_remove());
        let id = collection.cards()[0].id.clone();
        assert!(!collection.remove(&id).can_remove());
    }

    #[test]
    fn test_active_or_first() {
        let collection = StoryCollection::default_collection();
        let second = collection.cards()[1].id.clone();
        let first = collection.cards()[0].id.clone();

        assert_eq!(collection.active_or_first(Some(&second)), Some(&second));
        assert_eq!(
            collection.active_or_first(Some(&StoryId::from_string("stale"))),
            Some(&first)
        );
        assert_eq!(collection.active_or_first(None), Some(&first));
        assert_eq!(StoryCollection::new().active_or_first(None), None);
    }
}
