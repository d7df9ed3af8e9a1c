//! Turn flow for a full game.
//!
//! Human and automated turns end in the same place: tiles are laid on the
//! board, the rules engine judges them, and the turn either commits or rolls
//! the board back. The hand is only changed on commit.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use super::bag::TileBag;
use super::error::TurnError;
use super::player::Player;
use crate::board::{Board, PremiumLayout};
use crate::core::{Coord, PlacedTile, HAND_SIZE};
use crate::dictionary::Dictionary;
use crate::rules::{MoveResult, RulesConfig, RulesEngine};
use crate::search::{MoveCandidate, MoveSearch};

/// One hand tile going to one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// Position of the tile in the current player's hand.
    pub hand_index: usize,
    /// Target cell.
    pub coord: Coord,
    /// Letter for a blank tile; ignored for lettered tiles.
    pub blank_letter: Option<char>,
}

impl Placement {
    /// Place a lettered tile.
    #[must_use]
    pub const fn new(hand_index: usize, coord: Coord) -> Self {
        Self {
            hand_index,
            coord,
            blank_letter: None,
        }
    }

    /// Place a blank tile reading as `letter`.
    #[must_use]
    pub const fn blank(hand_index: usize, coord: Coord, letter: char) -> Self {
        Self {
            hand_index,
            coord,
            blank_letter: Some(letter),
        }
    }
}

/// What a turn ended up doing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// Tiles were committed to the board.
    Played(MoveResult),
    /// The hand was swapped for fresh tiles.
    Exchanged,
    /// Nothing to exchange with; the turn passed.
    Passed,
}

/// A game in progress.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    bag: TileBag,
    players: Vec<Player>,
    current: usize,
    first_move: bool,
    passes: usize,
    hand_size: usize,
    rules: RulesConfig,
    over: bool,
}

impl Game {
    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The undrawn tiles.
    #[must_use]
    pub fn bag(&self) -> &TileBag {
        &self.bag
    }

    /// All players in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Index of the player to move.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The player to move.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// Whether the next play is the opening move.
    #[must_use]
    pub fn is_first_move(&self) -> bool {
        self.first_move
    }

    /// Rules every play is judged by.
    #[must_use]
    pub fn rules(&self) -> RulesConfig {
        self.rules
    }

    /// Consecutive passes so far.
    #[must_use]
    pub fn passes(&self) -> usize {
        self.passes
    }

    /// Whether the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// The leading player; the earliest seat wins ties.
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        self.players.iter().fold(None, |best: Option<&Player>, p| match best {
            Some(b) if b.score >= p.score => Some(b),
            _ => Some(p),
        })
    }

    /// Play tiles from the current player's hand.
    ///
    /// On success the move is committed: the score is added, the tiles leave
    /// the hand, the hand is refilled and the turn passes on. On failure the
    /// board and hand are exactly as before.
    pub fn play<D: Dictionary>(
        &mut self,
        dictionary: &D,
        placements: &[Placement],
    ) -> Result<MoveResult, TurnError> {
        if self.over {
            return Err(TurnError::GameOver);
        }

        let placed = self.lay_tiles(placements)?;
        let engine = RulesEngine::new(self.rules);
        let result = match engine.evaluate(&self.board, dictionary, &placed, self.first_move) {
            Ok(result) => result,
            Err(reason) => {
                for p in &placed {
                    self.board.remove(p.coord);
                }
                debug!(player = self.current, %reason, "play rolled back");
                return Err(reason.into());
            }
        };

        self.commit(placements, &result);
        Ok(result)
    }

    /// Play a candidate found by the move search.
    ///
    /// Each empty cell the word covers takes a matching lettered tile from
    /// the hand, or a blank if none is left.
    pub fn play_candidate<D: Dictionary>(
        &mut self,
        dictionary: &D,
        candidate: &MoveCandidate,
    ) -> Result<MoveResult, TurnError> {
        let hand = &self.players[self.current].hand;
        let mut used: FxHashSet<usize> = FxHashSet::default();
        let mut placements = Vec::new();

        for (coord, letter) in candidate.cells() {
            if self.board.is_occupied(coord) {
                continue;
            }
            let free = |i: &usize| !used.contains(i);
            let lettered = (0..hand.len())
                .filter(free)
                .find(|&i| hand.get(i).is_some_and(|t| !t.is_blank() && t.reads_as(letter)));
            let placement = match lettered {
                Some(i) => Placement::new(i, coord),
                None => {
                    let blank = (0..hand.len())
                        .filter(free)
                        .find(|&i| hand.get(i).is_some_and(|t| t.is_blank()))
                        .ok_or(TurnError::MissingLetter(letter))?;
                    Placement::blank(blank, coord, letter)
                }
            };
            used.insert(placement.hand_index);
            placements.push(placement);
        }

        self.play(dictionary, &placements)
    }

    /// Let the move search play the current seat.
    ///
    /// Plays the best candidate, or exchanges when there is none. The search
    /// is switched to this game's rules first so candidates are ranked the
    /// way the committed play is scored.
    #[instrument(skip_all, fields(player = self.current))]
    pub fn take_automated_turn<D: Dictionary>(
        &mut self,
        dictionary: &D,
        search: &mut MoveSearch,
    ) -> Result<TurnOutcome, TurnError> {
        if self.over {
            return Err(TurnError::GameOver);
        }

        search.set_rules(self.rules);
        let hand = &self.players[self.current].hand;
        let best = search.best_move(dictionary, &mut self.board, self.first_move, hand);

        match best {
            Some(candidate) => match self.play_candidate(dictionary, &candidate) {
                Ok(result) => Ok(TurnOutcome::Played(result)),
                Err(TurnError::Rejected(_) | TurnError::MissingLetter(_)) => self.exchange(),
                Err(err) => Err(err),
            },
            None => self.exchange(),
        }
    }

    /// Swap the whole hand for fresh tiles, or pass if the bag is empty.
    ///
    /// Once every player has passed in a row the game is over.
    pub fn exchange(&mut self) -> Result<TurnOutcome, TurnError> {
        if self.over {
            return Err(TurnError::GameOver);
        }

        let seats = self.players.len();
        let player = &mut self.players[self.current];
        player.turns += 1;

        let outcome = if self.bag.is_empty() {
            self.passes += 1;
            if self.passes >= seats {
                self.over = true;
            }
            TurnOutcome::Passed
        } else {
            let returned = player.hand.drain();
            self.bag.return_tiles(returned);
            player.refill(&mut self.bag, self.hand_size);
            self.passes = 0;
            TurnOutcome::Exchanged
        };

        info!(
            player = %self.players[self.current].name,
            outcome = ?outcome,
            passes = self.passes,
            over = self.over,
            "turn without a play"
        );
        self.advance();
        Ok(outcome)
    }

    /// Put the chosen hand tiles on the board.
    ///
    /// Either every tile lands or none does.
    fn lay_tiles(&mut self, placements: &[Placement]) -> Result<Vec<PlacedTile>, TurnError> {
        let hand = &self.players[self.current].hand;
        let mut seen: FxHashSet<usize> = FxHashSet::default();
        let mut tiles = Vec::with_capacity(placements.len());

        for placement in placements {
            let mut tile = *hand
                .get(placement.hand_index)
                .ok_or(TurnError::NoSuchTile(placement.hand_index))?;
            if !seen.insert(placement.hand_index) {
                return Err(TurnError::DuplicateTile(placement.hand_index));
            }
            if tile.is_blank() {
                let letter = placement.blank_letter.ok_or(TurnError::BlankNeedsLetter)?;
                tile.assign(letter);
            }
            tiles.push(PlacedTile::new(placement.coord, tile));
        }

        for (i, p) in tiles.iter().enumerate() {
            if self.board.place(p.coord, p.tile).is_err() {
                for undo in &tiles[..i] {
                    self.board.remove(undo.coord);
                }
                return Err(TurnError::CellUnavailable(p.coord));
            }
        }
        Ok(tiles)
    }

    fn commit(&mut self, placements: &[Placement], result: &MoveResult) {
        let player = &mut self.players[self.current];

        let mut indices: Vec<usize> = placements.iter().map(|p| p.hand_index).collect();
        indices.sort_unstable_by(|a, b| b.cmp(a));
        for i in indices {
            player.hand.remove(i);
        }

        player.score += result.score;
        player.turns += 1;
        player.moves.push(result.clone());
        player.refill(&mut self.bag, self.hand_size);

        self.first_move = false;
        self.passes = 0;
        if self.bag.is_empty() && player.hand.is_empty() {
            self.over = true;
        }

        info!(
            player = %player.name,
            word = %result.main_word,
            score = result.score,
            total = player.score,
            over = self.over,
            "move committed"
        );
        self.advance();
    }

    fn advance(&mut self) {
        if !self.over {
            self.current = (self.current + 1) % self.players.len();
        }
    }
}

/// Builder for creating a `Game`.
pub struct GameBuilder {
    players: Vec<Player>,
    hand_size: usize,
    layout: PremiumLayout,
    rules: RulesConfig,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            players: Vec::new(),
            hand_size: HAND_SIZE,
            layout: PremiumLayout::standard(),
            rules: RulesConfig::default(),
        }
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a human-controlled seat.
    pub fn human(mut self, name: impl Into<String>) -> Self {
        self.players.push(Player::new(name, false));
        self
    }

    /// Add a seat played by the move search.
    pub fn automated(mut self, name: impl Into<String>) -> Self {
        self.players.push(Player::new(name, true));
        self
    }

    pub fn hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    pub fn layout(mut self, layout: PremiumLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn rules(mut self, rules: RulesConfig) -> Self {
        self.rules = rules;
        self
    }

    /// Build the game with a standard bag shuffled by `seed`.
    ///
    /// # Panics
    ///
    /// Panics if no player was added.
    pub fn build(self, seed: u64) -> Game {
        self.build_with_bag(TileBag::standard(seed))
    }

    /// Build the game drawing from `bag`. Hands are dealt in seat order.
    ///
    /// # Panics
    ///
    /// Panics if no player was added.
    pub fn build_with_bag(self, mut bag: TileBag) -> Game {
        assert!(!self.players.is_empty(), "a game needs at least one player");

        let mut players = self.players;
        for player in &mut players {
            player.refill(&mut bag, self.hand_size);
        }

        Game {
            board: Board::with_layout(self.layout),
            bag,
            players,
            current: 0,
            first_move: true,
            passes: 0,
            hand_size: self.hand_size,
            rules: self.rules,
            over: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Hand, Tile};
    use crate::dictionary::WordSet;

    /// Two seats holding fixed racks, nothing left in the bag.
    fn fixed_game(first: &str, second: &str) -> Game {
        let mut game = GameBuilder::new()
            .human("ada")
            .human("bob")
            .layout(PremiumLayout::plain())
            .build_with_bag(TileBag::from_tiles(Vec::new(), 0));
        game.players[0].hand = Hand::from_letters(first);
        game.players[1].hand = Hand::from_letters(second);
        game
    }

    #[test]
    fn test_winner_prefers_first_seat_on_tie() {
        let mut game = fixed_game("A", "B");
        game.players[0].score = 10;
        game.players[1].score = 10;
        assert_eq!(game.winner().map(|p| p.name.as_str()), Some("ada"));

        game.players[1].score = 11;
        assert_eq!(game.winner().map(|p| p.name.as_str()), Some("bob"));
    }

    #[test]
    fn test_lay_tiles_is_all_or_nothing() {
        let mut game = fixed_game("CAT", "DOG");
        game.board.place(Coord::new(7, 9), Tile::new('X')).unwrap();

        let err = game
            .lay_tiles(&[
                Placement::new(0, Coord::new(7, 7)),
                Placement::new(1, Coord::new(7, 8)),
                Placement::new(2, Coord::new(7, 9)),
            ])
            .unwrap_err();

        assert_eq!(err, TurnError::CellUnavailable(Coord::new(7, 9)));
        assert_eq!(game.board.occupied_count(), 1);
    }

    #[test]
    fn test_exchange_with_empty_bag_passes() {
        let words: WordSet = ["CAT"].into_iter().collect();
        let mut game = fixed_game("QQ", "ZZ");

        assert_eq!(game.exchange(), Ok(TurnOutcome::Passed));
        assert!(!game.is_over());
        assert_eq!(game.exchange(), Ok(TurnOutcome::Passed));
        assert!(game.is_over());
        assert_eq!(game.play(&words, &[]), Err(TurnError::GameOver));
    }
}
