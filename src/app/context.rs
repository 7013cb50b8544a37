//! Dependencies shared by all views.

use std::sync::Arc;

use dioxus_logger::tracing;
use tokio::sync::watch;

use crate::{
    app::{
        config::{Config, Layout},
        error::Error,
        event::EventBus,
        service::{CharacterService, EveUniverseService},
        status::StatusCache,
        view::ViewConfig,
    },
    model::{Character, CharacterId, RoutePreference},
};

/// Application context passed to every view.
///
/// Clones share the services, caches, event bus and current character.
#[derive(Clone)]
pub struct AppContext {
    pub characters: Arc<dyn CharacterService>,
    pub universe: Arc<dyn EveUniverseService>,
    pub status: StatusCache,
    pub events: EventBus,
    pub view_config: ViewConfig,
    pub layout: Layout,
    pub route_preference: RoutePreference,
    current_character: Arc<watch::Sender<Option<Character>>>,
}

impl AppContext {
    pub fn new(
        characters: Arc<dyn CharacterService>,
        universe: Arc<dyn EveUniverseService>,
        status: StatusCache,
    ) -> Self {
        let (current_character, _) = watch::channel(None);
        Self {
            characters,
            universe,
            status,
            events: EventBus::new(),
            view_config: ViewConfig::default(),
            layout: Layout::default(),
            route_preference: RoutePreference::default(),
            current_character: Arc::new(current_character),
        }
    }

    /// Applies the GUI related settings of the configuration.
    pub fn with_config(mut self, config: &Config) -> Self {
        self.layout = config.layout;
        self.route_preference = config.route_preference;
        self
    }

    pub fn with_view_config(mut self, view_config: ViewConfig) -> Self {
        self.view_config = view_config;
        self
    }

    pub fn current_character(&self) -> Option<Character> {
        self.current_character.borrow().clone()
    }

    pub fn current_character_id(&self) -> Option<CharacterId> {
        self.current_character.borrow().as_ref().map(|c| c.id)
    }

    /// Returns a receiver which is notified whenever the current character changes.
    pub fn watch_character(&self) -> watch::Receiver<Option<Character>> {
        self.current_character.subscribe()
    }

    /// Makes a character the current character and publishes the change.
    pub fn set_character(&self, character: Option<Character>) {
        tracing::info!(
            character_id = ?character.as_ref().map(|c| c.id),
            "Current character exchanged"
        );
        self.current_character.send_replace(character.clone());
        self.events.current_character_exchanged.publish(character);
    }

    /// Loads a character and makes it the current character.
    pub async fn switch_character(&self, character_id: CharacterId) -> Result<(), Error> {
        let character = self.characters.get_character(character_id).await?;
        self.set_character(Some(character));
        Ok(())
    }

    /// Makes the first character the current one, if no character is set yet.
    pub async fn init_current_character(&self) -> Result<(), Error> {
        if self.current_character_id().is_some() {
            return Ok(());
        }
        let characters = self.characters.list_characters().await?;
        if let Some(first) = characters.into_iter().next() {
            self.set_character(Some(first));
        }
        Ok(())
    }
}
