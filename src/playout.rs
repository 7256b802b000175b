//! Random queen playouts.
//!
//! A playout keeps placing queens on uniformly random legal cells until no
//! legal cell remains. It never undoes a move, so it is not a solver: most
//! playouts on an 8×8 board stall before the eighth queen. Playouts are used
//! to drive the engine through realistic random sequences (demos, fuzzing,
//! benches) and are fully reproducible from the RNG seed.

use log::debug;

use crate::core::GameRng;
use crate::game::QueensGame;

/// Outcome of a single playout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayoutResult {
    /// Queens placed by this playout (not counting queens already on the board).
    pub placed: usize,
    /// Whether the board ended complete.
    pub complete: bool,
}

/// Fill `game` with random legal queens until it is complete or stuck.
///
/// Queens already on the board are kept.
///
/// ```
/// use queens_engine::core::GameRng;
/// use queens_engine::game::QueensGame;
/// use queens_engine::playout::random_playout;
///
/// let mut game = QueensGame::new(8);
/// let result = random_playout(&mut game, &mut GameRng::new(42));
///
/// assert_eq!(result.placed, game.queens_count());
/// assert!(game.legal_positions().is_empty());
/// ```
pub fn random_playout(game: &mut QueensGame, rng: &mut GameRng) -> PlayoutResult {
    let mut placed = 0;

    loop {
        let legal = game.legal_positions();
        let Some(&pos) = rng.choose(&legal) else {
            break;
        };

        // Chosen from legal_positions, so placement cannot be refused.
        if game.place_queen(pos) {
            placed += 1;
        }
    }

    let result = PlayoutResult {
        placed,
        complete: game.is_game_complete(),
    };
    debug!(
        "playout seed={} placed={} complete={}",
        rng.seed(),
        result.placed,
        result.complete
    );
    result
}
