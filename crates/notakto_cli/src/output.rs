//! Reports printed by the CLI.

use notakto::{
    ComputerMove, Move, Position, is_dead, is_game_over, is_losing_for_mover, position_value,
};
use serde::Serialize;

/// Algebraic summary of a position.
#[derive(Debug, Clone, Serialize)]
pub struct Evaluation {
    /// The position evaluated.
    pub position: Position,
    /// Monoid element index of the position.
    pub value: u8,
    /// Official name of that element.
    pub value_name: String,
    /// Whether the player to move has already lost.
    pub losing_for_mover: bool,
    /// Dead flag per board.
    pub dead: Vec<bool>,
    /// Whether every board is dead.
    pub game_over: bool,
}

impl Evaluation {
    /// Evaluates `position`.
    pub fn of(position: &Position) -> Self {
        let value = position_value(position);
        Self {
            position: position.clone(),
            value: value.index(),
            value_name: value.name().to_string(),
            losing_for_mover: is_losing_for_mover(position),
            dead: position.boards().iter().map(is_dead).collect(),
            game_over: is_game_over(position),
        }
    }

    /// Plain-text rendering.
    pub fn text(&self) -> String {
        let mut out = format!(
            "position: {}\nvalue: {} ({})\nlosing for mover: {}\n",
            self.position, self.value_name, self.value, self.losing_for_mover
        );
        if self.game_over {
            out.push_str("game over\n");
        }
        out
    }
}

/// Who lost a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Loser {
    /// The human killed the last board.
    Human,
    /// The computer killed the last board.
    Computer,
}

/// Result of one exchange of moves.
#[derive(Debug, Clone, Serialize)]
pub struct Turn {
    /// Position after all moves of this turn.
    pub position: Position,
    /// Computer's move, if it got to move.
    pub computer: Option<Move>,
    /// True if the human can no longer win against perfect play.
    pub opponent_lost: bool,
    /// Set once every board is dead.
    pub loser: Option<Loser>,
}

impl Turn {
    /// The human's move already ended the game.
    pub fn human_finished(position: Position) -> Self {
        Self {
            position,
            computer: None,
            opponent_lost: false,
            loser: Some(Loser::Human),
        }
    }

    /// The computer answered.
    pub fn computer_replied(reply: ComputerMove) -> Self {
        let computer = Some(*reply.played());
        let opponent_lost = reply.leaves_opponent_lost();
        let position = reply.into_position();
        let loser = is_game_over(&position).then_some(Loser::Computer);
        Self {
            position,
            computer,
            opponent_lost,
            loser,
        }
    }

    /// Plain-text rendering.
    pub fn text(&self) -> String {
        let mut out = format!("position: {}\n", self.position);
        if let Some(mov) = &self.computer {
            out.push_str(&format!("computer: {}\n", mov));
        }
        if self.opponent_lost {
            out.push_str("you can no longer win against perfect play\n");
        }
        match self.loser {
            Some(Loser::Human) => out.push_str("game over: you completed the last line and lose\n"),
            Some(Loser::Computer) => {
                out.push_str("game over: the computer completed the last line and loses\n")
            }
            None => {}
        }
        out
    }
}
