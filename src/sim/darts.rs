//! Two-player darts game

use serde::{Deserialize, Serialize};

use super::board::Dartboard;
use super::random::RandomSource;
use crate::renderer::Surface;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    PlayerOne,
    PlayerTwo,
    Tie,
}

/// Final tally of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DartsOutcome {
    pub player_one: u32,
    pub player_two: u32,
}

impl DartsOutcome {
    /// Strictly more hits wins; equal hits is a tie
    pub fn winner(&self) -> Winner {
        use std::cmp::Ordering;
        match self.player_one.cmp(&self.player_two) {
            Ordering::Greater => Winner::PlayerOne,
            Ordering::Less => Winner::PlayerTwo,
            Ordering::Equal => Winner::Tie,
        }
    }
}

/// Play `rounds` rounds, player one throwing first each round
pub fn play_darts<S, R>(board: &Dartboard, surface: &mut S, rng: &mut R, rounds: u32) -> DartsOutcome
where
    S: Surface,
    R: RandomSource,
{
    let mut outcome = DartsOutcome::default();
    for _ in 0..rounds {
        if board.throw_dart(surface, rng).inside {
            outcome.player_one += 1;
        }
        if board.throw_dart(surface, rng).inside {
            outcome.player_two += 1;
        }
    }

    log::info!(
        "Darts over {} rounds: {} - {} ({:?})",
        rounds,
        outcome.player_one,
        outcome.player_two,
        outcome.winner()
    );
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{Canvas, Color, NullSurface};
    use crate::sim::{ScriptedSource, SeededSource};

    #[test]
    fn test_one_round_player_one_wins() {
        let board = Dartboard::default();
        let mut rng = ScriptedSource::points(&[(0.0, 0.0), (0.95, 0.95)]);
        let outcome = play_darts(&board, &mut NullSurface::new(), &mut rng, 1);

        assert_eq!(outcome, DartsOutcome { player_one: 1, player_two: 0 });
        assert_eq!(outcome.winner(), Winner::PlayerOne);
    }

    #[test]
    fn test_player_two_wins_and_tie() {
        assert_eq!(
            DartsOutcome { player_one: 2, player_two: 5 }.winner(),
            Winner::PlayerTwo
        );
        assert_eq!(
            DartsOutcome { player_one: 3, player_two: 3 }.winner(),
            Winner::Tie
        );
    }

    #[test]
    fn test_zero_rounds_is_a_tie() {
        let board = Dartboard::default();
        let outcome = play_darts(&board, &mut NullSurface::new(), &mut SeededSource::new(1), 0);
        assert_eq!(outcome.winner(), Winner::Tie);
    }

    #[test]
    fn test_every_throw_is_drawn() {
        let board = Dartboard::default();
        let mut canvas = Canvas::default();
        let outcome = play_darts(&board, &mut canvas, &mut SeededSource::new(8), 10);

        let hits = outcome.player_one + outcome.player_two;
        assert_eq!(canvas.stamps(Color::Blue), hits as usize);
        assert_eq!(canvas.stamps(Color::Red), 20 - hits as usize);
        assert!(outcome.player_one <= 10 && outcome.player_two <= 10);
    }
}
