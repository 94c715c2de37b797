// Input configuration and remapping

use super::action::{self, Action, GlobalAction, InputSource};
use std::collections::HashMap;

/// Key map for a single player
#[derive(Debug, Clone)]
pub struct InputConfig {
    /// Player this config is for
    player_id: usize,

    /// Mapping from input sources to actions
    bindings: HashMap<InputSource, Action>,

    /// Reverse mapping for quick lookups (action -> all sources)
    action_to_sources: HashMap<Action, Vec<InputSource>>,
}

impl InputConfig {
    pub fn new(player_id: usize) -> Self {
        Self {
            player_id,
            bindings: HashMap::new(),
            action_to_sources: HashMap::new(),
        }
    }

    pub fn player_id(&self) -> usize {
        self.player_id
    }

    /// Bind an input source to an action, replacing its previous binding
    pub fn bind(&mut self, source: InputSource, action: Action) {
        self.unbind_source(source);
        self.bindings.insert(source, action);
        self.action_to_sources.entry(action).or_default().push(source);
    }

    pub fn unbind_source(&mut self, source: InputSource) {
        if let Some(action) = self.bindings.remove(&source) {
            if let Some(sources) = self.action_to_sources.get_mut(&action) {
                sources.retain(|s| *s != source);
                if sources.is_empty() {
                    self.action_to_sources.remove(&action);
                }
            }
        }
    }

    pub fn get_action(&self, source: InputSource) -> Option<Action> {
        self.bindings.get(&source).copied()
    }

    /// Get all input sources bound to an action
    pub fn get_sources(&self, action: Action) -> Vec<InputSource> {
        self.action_to_sources
            .get(&action)
            .cloned()
            .unwrap_or_default()
    }

    pub fn clear(&mut self) {
        self.bindings.clear();
        self.action_to_sources.clear();
    }

    /// Reset to the default layout for this player
    pub fn reset_to_defaults(&mut self) {
        self.clear();
        let defaults = match self.player_id {
            0 => action::default_p1_bindings(),
            1 => action::default_p2_bindings(),
            _ => Vec::new(),
        };
        for (source, action) in defaults {
            self.bind(source, action);
        }
    }
}

/// What a key press turned into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Player(usize, Action),
    Global(GlobalAction),
}

/// All player key maps plus the global one
#[derive(Debug)]
pub struct InputConfigManager {
    configs: Vec<InputConfig>,
    global: HashMap<InputSource, GlobalAction>,
}

impl InputConfigManager {
    /// Default layouts for `num_players` players
    pub fn new(num_players: usize) -> Self {
        let configs = (0..num_players)
            .map(|player_id| {
                let mut config = InputConfig::new(player_id);
                config.reset_to_defaults();
                config
            })
            .collect();

        Self {
            configs,
            global: action::global_bindings().into_iter().collect(),
        }
    }

    pub fn get_config(&self, player_id: usize) -> Option<&InputConfig> {
        self.configs.get(player_id)
    }

    /// Resolve a source; player bindings win over global ones
    pub fn route(&self, source: InputSource) -> Option<InputEvent> {
        self.configs
            .iter()
            .find_map(|config| {
                config
                    .get_action(source)
                    .map(|action| InputEvent::Player(config.player_id(), action))
            })
            .or_else(|| self.global.get(&source).copied().map(InputEvent::Global))
    }
}

impl Default for InputConfigManager {
    fn default() -> Self {
        Self::new(2)
    }
}
