//! Typed publish/subscribe topics for application wide events.
//!
//! Each topic is a `tokio::sync::broadcast` channel. Views subscribe to the topics they care
//! about and refresh when an event arrives.

use dioxus_logger::tracing;
use tokio::sync::broadcast;

use crate::model::{Character, CharacterId, CharacterSection, CharacterShort, GeneralSection};

/// Capacity of each topic. Slow subscribers skip older events.
const TOPIC_CAPACITY: usize = 64;

/// A typed broadcast topic.
#[derive(Debug)]
pub struct Topic<T> {
    name: &'static str,
    sender: broadcast::Sender<T>,
}

impl<T> Clone for Topic<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            sender: self.sender.clone(),
        }
    }
}

impl<T: Clone + std::fmt::Debug> Topic<T> {
    pub fn new(name: &'static str, capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { name, sender }
    }

    /// Publishes an event to all current subscribers.
    ///
    /// # Returns
    /// Number of subscribers which received the event.
    pub fn publish(&self, event: T) -> usize {
        match self.sender.send(event) {
            Ok(count) => {
                tracing::debug!(topic = self.name, subscribers = count, "Published event");
                count
            }
            Err(err) => {
                tracing::debug!(topic = self.name, event = ?err.0, "No subscribers for event");
                0
            }
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<T> {
        self.sender.subscribe()
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterSectionUpdated {
    pub character_id: CharacterId,
    pub section: CharacterSection,
}

/// All topics of the application.
#[derive(Debug, Clone)]
pub struct EventBus {
    pub current_character_exchanged: Topic<Option<Character>>,
    pub character_section_changed: Topic<CharacterSectionUpdated>,
    pub general_section_changed: Topic<GeneralSection>,
    pub character_added: Topic<Character>,
    pub character_removed: Topic<CharacterShort>,
    pub tags_changed: Topic<()>,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            current_character_exchanged: Topic::new("current_character_exchanged", TOPIC_CAPACITY),
            character_section_changed: Topic::new("character_section_changed", TOPIC_CAPACITY),
            general_section_changed: Topic::new("general_section_changed", TOPIC_CAPACITY),
            character_added: Topic::new("character_added", TOPIC_CAPACITY),
            character_removed: Topic::new("character_removed", TOPIC_CAPACITY),
            tags_changed: Topic::new("tags_changed", TOPIC_CAPACITY),
        }
    }

    /// Subscribes to all topics at once.
    pub fn subscribe(&self) -> EventSubscription {
        EventSubscription {
            current_character_exchanged: self.current_character_exchanged.subscribe(),
            character_section_changed: self.character_section_changed.subscribe(),
            general_section_changed: self.general_section_changed.subscribe(),
            character_added: self.character_added.subscribe(),
            character_removed: self.character_removed.subscribe(),
            tags_changed: self.tags_changed.subscribe(),
        }
    }
}

/// An event from any topic of the [`EventBus`].
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    CurrentCharacterExchanged(Option<CharacterId>),
    CharacterSectionChanged(CharacterSectionUpdated),
    GeneralSectionChanged(GeneralSection),
    CharacterAdded(CharacterId),
    CharacterRemoved(CharacterId),
    TagsChanged,
}

/// Receivers for all topics of the [`EventBus`].
pub struct EventSubscription {
    current_character_exchanged: broadcast::Receiver<Option<Character>>,
    character_section_changed: broadcast::Receiver<CharacterSectionUpdated>,
    general_section_changed: broadcast::Receiver<GeneralSection>,
    character_added: broadcast::Receiver<Character>,
    character_removed: broadcast::Receiver<CharacterShort>,
    tags_changed: broadcast::Receiver<()>,
}

impl EventSubscription {
    /// Waits for the next event on any topic.
    ///
    /// Lagging receivers skip the missed events.
    ///
    /// # Returns
    /// - `Some(event)` - The next event
    /// - `None` - The event bus was dropped
    pub async fn recv(&mut self) -> Option<AppEvent> {
        loop {
            let result = tokio::select! {
                r = self.current_character_exchanged.recv() => {
                    r.map(|c| AppEvent::CurrentCharacterExchanged(c.map(|c| c.id)))
                }
                r = self.character_section_changed.recv() => {
                    r.map(AppEvent::CharacterSectionChanged)
                }
                r = self.general_section_changed.recv() => r.map(AppEvent::GeneralSectionChanged),
                r = self.character_added.recv() => r.map(|c| AppEvent::CharacterAdded(c.id)),
                r = self.character_removed.recv() => r.map(|c| AppEvent::CharacterRemoved(c.id)),
                r = self.tags_changed.recv() => r.map(|_| AppEvent::TagsChanged),
            };
            match result {
                Ok(event) => return Some(event),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Event subscriber lagged behind");
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }
}
