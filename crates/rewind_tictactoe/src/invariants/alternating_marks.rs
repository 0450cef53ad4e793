//! Alternating marks invariant: X, O, X, O, ...

use super::{BoardHistory, Invariant};
use crate::coordinate::changed_position;
use crate::{Player, Square};

/// Invariant: the square filled by board `k` holds X when `k` is odd and O
/// when `k` is even.
pub struct AlternatingMarks;

impl Invariant<BoardHistory> for AlternatingMarks {
    fn holds(history: &BoardHistory) -> bool {
        history
            .as_slice()
            .windows(2)
            .enumerate()
            .all(|(move_number, pair)| {
                let [before, after] = pair else {
                    return false;
                };
                match changed_position(before, after) {
                    Ok(pos) => after.get(pos) == Square::Occupied(Player::for_move(move_number)),
                    Err(_) => false,
                }
            })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
