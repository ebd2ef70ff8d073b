//! Root Dioxus application component
//!
//! This module contains the main App component that serves as the root of the UI tree.

use crate::llm::gemini::{CompletionClient, GeminiClient};
use crate::storage::persona::{load_persona, save_persona};
use crate::storage::settings::{load_settings, AppSettings};
use crate::storage::{JsonFileStore, KeyValueStore, MemoryStore, StorageError};
use crate::types::persona::PersonaConfig;
use crate::ui::chat::ChatView;
use crate::ui::setup::SetupView;
use dioxus::prelude::*;
use std::sync::Arc;

/// Which screen is shown
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Mode {
    /// Reading the stored persona at startup
    Loading,
    Setup,
    Chat,
}

/// Screen to show once the stored persona has been read
pub fn initial_mode(persona: Option<&PersonaConfig>) -> Mode {
    match persona {
        Some(_) => Mode::Chat,
        None => Mode::Setup,
    }
}

/// Screen to show after trying to save a persona from `current`
pub fn mode_after_save(result: &Result<(), StorageError>, current: Mode) -> Mode {
    match result {
        Ok(()) => Mode::Chat,
        Err(_) => current,
    }
}

/// The chat is only shown in chat mode with a persona to talk as
pub fn shows_chat(mode: Mode, persona: Option<&PersonaConfig>) -> bool {
    mode == Mode::Chat && persona.is_some()
}

/// Read the stored persona and pick the first screen
pub fn bootstrap(store: &dyn KeyValueStore) -> (Mode, Option<PersonaConfig>) {
    let persona = load_persona(store);
    (initial_mode(persona.as_ref()), persona)
}

/// Global application state shared across components
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn KeyValueStore>,
    pub client: Arc<dyn CompletionClient>,
    pub settings: Signal<AppSettings>,
    pub persona: Signal<Option<PersonaConfig>>,
    pub mode: Signal<Mode>,
}

impl AppState {
    pub fn new() -> Self {
        let settings = load_settings();
        let store: Arc<dyn KeyValueStore> = match JsonFileStore::in_data_dir() {
            Ok(store) => {
                tracing::info!("Persona store at {}", store.root().display());
                Arc::new(store)
            }
            Err(e) => {
                tracing::warn!("No data directory ({}), persona will not survive a restart", e);
                Arc::new(MemoryStore::new())
            }
        };
        let gemini = GeminiClient::from_settings(&settings);
        tracing::info!("AppState initialized (model: {})", gemini.model());
        let client: Arc<dyn CompletionClient> = Arc::new(gemini);

        Self {
            store,
            client,
            settings: Signal::new(settings),
            persona: Signal::new(None),
            mode: Signal::new(Mode::Loading),
        }
    }

    /// Persist a new or edited persona and open the chat.
    ///
    /// When saving fails the user stays on the setup screen.
    pub fn create_persona(&mut self, config: PersonaConfig) {
        let result = save_persona(self.store.as_ref(), &config);
        if let Err(e) = &result {
            tracing::error!("Failed to save persona configuration: {}", e);
        }

        let current = *self.mode.peek();
        let next = mode_after_save(&result, current);
        if next == Mode::Chat {
            self.persona.set(Some(config));
        }
        self.mode.set(next);
    }

    /// Go back to the setup screen, keeping the current persona as the form's starting point
    pub fn edit_persona(&mut self) {
        self.mode.set(Mode::Setup);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn App() -> Element {
    let app_state = use_context_provider(AppState::new);

    {
        let store = app_state.store.clone();
        let mut persona = app_state.persona;
        let mut mode = app_state.mode;
        use_hook(move || {
            spawn(async move {
                let (first_mode, loaded) =
                    match tokio::task::spawn_blocking(move || bootstrap(store.as_ref())).await {
                        Ok(result) => result,
                        Err(e) => {
                            tracing::error!("Persona loading task failed: {}", e);
                            (Mode::Setup, None)
                        }
                    };
                persona.set(loaded);
                mode.set(first_mode);
            });
        });
    }

    let mode = (app_state.mode)();
    let persona = app_state.persona.read().clone();

    rsx! {
        div {
            class: "app-root",
            match (mode, persona) {
                (Mode::Loading, _) => rsx! {
                    div { class: "loading-screen",
                        div { class: "loading-text", "Loading..." }
                    }
                },
                (mode, Some(config)) if shows_chat(mode, Some(&config)) => rsx! {
                    ChatView { key: "{config.name}", config }
                },
                (_, config) => rsx! { SetupView { initial: config } },
            }
        }
    }
}
