//! Browser-facing wrapper around [`GameEngine`].
//!
//! Every mutating call returns the fresh [`crate::types::GameState`] so the
//! page can re-render from one value.

use tracing::debug;
use wasm_bindgen::prelude::*;

use crate::config::GameConfig;
use crate::error::GameError;
use crate::game::GameEngine;
use crate::geometry::Viewport;
use crate::render;

#[wasm_bindgen]
#[derive(Debug)]
pub struct TicTacToe {
    engine: GameEngine,
    viewport: Viewport,
}

#[wasm_bindgen]
impl TicTacToe {
    /// `config` is an optional `{ board_size, width, height }` object.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<TicTacToe, JsValue> {
        let config = parse_config(config)?;
        let viewport = config.validate()?;
        Ok(Self {
            engine: GameEngine::new(config.board_size)?,
            viewport,
        })
    }

    /// Starts a new game on a `board_size`×`board_size` board.
    pub fn start(&mut self, board_size: usize) -> Result<JsValue, JsValue> {
        self.engine.new_game(board_size)?;
        self.state()
    }

    /// Plays the side to move at `index`; invalid requests leave the game as is.
    pub fn play(&mut self, index: usize) -> Result<JsValue, JsValue> {
        self.engine.apply_move(index);
        self.state()
    }

    /// Like [`TicTacToe::play`] for a pointer position relative to the board's
    /// top-left corner.
    pub fn click(&mut self, x: f64, y: f64) -> Result<JsValue, JsValue> {
        match self.viewport.cell_at(self.engine.size(), x, y) {
            Some(index) => {
                self.engine.apply_move(index);
            }
            None => debug!(x, y, "click outside board"),
        }
        self.state()
    }

    pub fn reset(&mut self) -> Result<JsValue, JsValue> {
        self.engine.reset();
        self.state()
    }

    pub fn state(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.engine.to_game_state())?)
    }

    /// Draw requests for the current position.
    pub fn scene(&self) -> Result<JsValue, JsValue> {
        let commands = render::scene(&self.engine, &self.viewport);
        Ok(serde_wasm_bindgen::to_value(&commands)?)
    }

    #[wasm_bindgen(getter, js_name = boardSize)]
    pub fn board_size(&self) -> usize {
        self.engine.size()
    }

    #[wasm_bindgen(getter, js_name = isGameOver)]
    pub fn is_game_over(&self) -> bool {
        self.engine.is_game_over()
    }
}

impl From<GameError> for JsValue {
    fn from(err: GameError) -> Self {
        JsError::new(&err.to_string()).into()
    }
}

fn parse_config(value: JsValue) -> Result<GameConfig, GameError> {
    if value.is_undefined() || value.is_null() {
        return Ok(GameConfig::default());
    }
    serde_wasm_bindgen::from_value(value).map_err(|err| GameError::InvalidConfig {
        message: err.to_string(),
    })
}
