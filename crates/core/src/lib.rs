pub mod action;
pub mod color;
pub mod config;
pub mod content;
pub mod game;
pub mod interaction;
pub mod message_log;
pub mod render;
pub mod save;
pub mod session;
pub mod state;
pub mod types;

pub use action::{Action, ActionFault, ActionOutcome};
pub use config::{ConfigError, EngineConfig};
pub use game::Game;
pub use interaction::{
    InputEvent, InteractionState, Key, Modifiers, MouseButton, QuitKind, Transition,
};
pub use render::{CONSOLE_HEIGHT, CONSOLE_WIDTH, Console, Surface};
pub use save::{SaveError, SaveSlot};
pub use session::Session;
pub use state::{GameState, Map};
pub use types::*;
