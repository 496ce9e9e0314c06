//! JavaScript-facing session wrapper.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::error::MoveError;
use crate::game::GameState;
use crate::types::{Coord, StateView, player_code};

/// One game session owned by the JS side. All rules live in [`GameState`].
#[wasm_bindgen]
#[derive(Debug, Default)]
pub struct ReversiSession {
    state: GameState,
}

#[wasm_bindgen]
impl ReversiSession {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Plays at `(x, y)` for the side to move and returns the new state.
    /// Throws with the rejection reason when the move is refused.
    pub fn play(&mut self, x: i32, y: i32) -> Result<JsValue, JsError> {
        self.apply(x, y).map_err(|err| JsError::new(&err.to_string()))?;
        to_js(&StateView::from(&self.state))
    }

    #[wasm_bindgen(js_name = legalMoves)]
    pub fn legal_moves(&self) -> Result<JsValue, JsError> {
        let moves: Vec<Coord> = self
            .state
            .legal_moves()
            .into_iter()
            .map(Coord::from)
            .collect();
        to_js(&moves)
    }

    #[wasm_bindgen(js_name = isTerminal)]
    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    /// `0` while playing or on a draw, `1` for black, `2` for white.
    pub fn winner(&self) -> u8 {
        player_code(self.state.winner())
    }

    pub fn state(&self) -> Result<JsValue, JsError> {
        to_js(&StateView::from(&self.state))
    }

    /// Final score, or `null` while the game is running.
    pub fn result(&self) -> Result<JsValue, JsError> {
        to_js(&self.state.result())
    }

    pub fn reset(&mut self) {
        self.state = GameState::init();
    }
}

impl ReversiSession {
    fn apply(&mut self, x: i32, y: i32) -> Result<(), MoveError> {
        self.state = self.state.make_move(x, y)?;
        Ok(())
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_missing_as_null(true);
    value
        .serialize(&serializer)
        .map_err(|err| JsError::new(&err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IllegalMove;

    #[test]
    fn rejected_move_keeps_the_session_state() {
        let mut session = ReversiSession::new();

        let err = session.apply(0, 0).unwrap_err();

        assert_eq!(err, MoveError::IllegalMove(IllegalMove::NoCaptures { x: 0, y: 0 }));
        assert_eq!(session.state, GameState::init());
    }

    #[test]
    fn reset_returns_to_the_opening() {
        let mut session = ReversiSession::new();
        session.apply(3, 2).unwrap();
        assert_ne!(session.state, GameState::init());

        session.reset();

        assert_eq!(session.state, GameState::init());
        assert!(!session.is_terminal());
        assert_eq!(session.winner(), 0);
    }
}
