//! Word ladder duel.
//!
//! Players take turns changing exactly one letter of the current word; the
//! action is the whole new word. When a dictionary is given, every new word
//! must be in it. Reaching the goal word wins for whoever played it. A word
//! with no successor ends the game as a draw. The mover is the parity of
//! the words played so far.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{Action, ActionError, GameSettings, PlayerId};
use crate::rules::{Game, Outcome, TurnPolicy};

use super::{BoxedGame, GameRegistry};

/// Word ladder position.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordLadderState {
    pub word: String,
    pub plies: u32,
}

/// Word ladder rules.
#[derive(Clone, Debug)]
pub struct WordLadderDuel {
    start: String,
    goal: String,
    dictionary: Option<FxHashSet<String>>,
}

impl WordLadderDuel {
    /// Create a ladder from `start` to `goal`. Words are lowercased.
    ///
    /// Panics if either word has a character outside ASCII letters or the
    /// two words differ in length.
    #[must_use]
    pub fn new<I, S>(start: &str, goal: &str, dictionary: Option<I>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        assert!(
            start.chars().chain(goal.chars()).all(|ch| ch.is_ascii_alphabetic()),
            "start and goal must be ASCII letters"
        );
        assert_eq!(
            start.chars().count(),
            goal.chars().count(),
            "start and goal must be the same length"
        );
        Self {
            start: start.to_lowercase(),
            goal: goal.to_lowercase(),
            dictionary: dictionary.map(|words| words.into_iter().map(|w| w.as_ref().to_lowercase()).collect()),
        }
    }

    #[must_use]
    pub fn goal(&self) -> &str {
        &self.goal
    }

    fn allowed(&self, word: &str) -> bool {
        self.dictionary.as_ref().map_or(true, |dict| dict.contains(word))
    }

    fn successors<'a>(&'a self, word: &'a str) -> impl Iterator<Item = String> + 'a {
        let letters: Vec<char> = word.chars().collect();
        (0..letters.len())
            .flat_map(move |i| ('a'..='z').map(move |ch| (i, ch)))
            .filter_map(move |(i, ch)| {
                if letters[i] == ch {
                    return None;
                }
                let mut next = letters.clone();
                next[i] = ch;
                let candidate: String = next.into_iter().collect();
                self.allowed(&candidate).then_some(candidate)
            })
    }

    fn one_letter_apart(a: &str, b: &str) -> bool {
        a.chars().count() == b.chars().count() && a.chars().zip(b.chars()).filter(|(x, y)| x != y).count() == 1
    }
}

impl Game for WordLadderDuel {
    type State = WordLadderState;

    fn name(&self) -> &str {
        "word_ladder"
    }

    fn turn_policy(&self) -> TurnPolicy {
        TurnPolicy::DerivedFromState
    }

    fn current_player(&self, state: &WordLadderState) -> Option<PlayerId> {
        Some(PlayerId::from_parity(state.plies as usize))
    }

    fn reset(&self) -> WordLadderState {
        WordLadderState {
            word: self.start.clone(),
            plies: 0,
        }
    }

    fn valid_actions(&self, state: &WordLadderState) -> Vec<Action> {
        if state.word == self.goal {
            return Vec::new();
        }
        self.successors(&state.word).map(Action::new).collect()
    }

    fn apply_action(&self, state: &WordLadderState, action: &Action) -> Result<WordLadderState, ActionError> {
        let word = action.as_str();
        let expected = "lowercase word of the current length";
        if word.chars().count() != state.word.chars().count() || !word.chars().all(|ch| ch.is_ascii_lowercase()) {
            return Err(action.malformed(expected));
        }
        if self.is_terminal(state) {
            return Err(action.game_over());
        }
        if !Self::one_letter_apart(&state.word, word) || !self.allowed(word) {
            return Err(action.illegal());
        }
        Ok(WordLadderState {
            word: word.to_string(),
            plies: state.plies + 1,
        })
    }

    fn is_terminal(&self, state: &WordLadderState) -> bool {
        state.word == self.goal || self.successors(&state.word).next().is_none()
    }

    fn winner(&self, state: &WordLadderState) -> Outcome {
        if state.word == self.goal && state.plies > 0 {
            Outcome::Winner(PlayerId::from_parity(state.plies as usize - 1))
        } else if self.is_terminal(state) {
            Outcome::Draw
        } else {
            Outcome::Undecided
        }
    }

    fn render(&self, state: &WordLadderState) -> String {
        format!("Current: {} -> Goal: {}", state.word, self.goal)
    }
}

/// Register the word ladder under `"word_ladder"`.
pub fn register(registry: &mut GameRegistry) {
    registry.register("word_ladder", |settings: &GameSettings| {
        let ladder = &settings.word_ladder;
        BoxedGame::new(WordLadderDuel::new(&ladder.start, &ladder.goal, ladder.dictionary.as_ref()))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions;

    fn ladder() -> WordLadderDuel {
        WordLadderDuel::new("cold", "warm", Some(["cold", "cord", "card", "ward", "warm"]))
    }

    #[test]
    fn test_reaching_goal_wins() {
        let game = ladder();
        let state = game
            .apply_all(&game.reset(), &actions(["cord", "card", "ward", "warm"]))
            .unwrap();

        assert!(game.is_terminal(&state));
        assert_eq!(game.winner(&state), Outcome::Winner(PlayerId::SECOND));
        assert!(game.valid_actions(&state).is_empty());
    }

    #[test]
    fn test_successors_follow_dictionary() {
        let game = ladder();

        assert_eq!(game.valid_actions(&game.reset()), actions(["cord"]));
    }

    #[test]
    fn test_rejections() {
        let game = ladder();
        let state = game.reset();

        // Two letters changed.
        assert!(matches!(
            game.apply_action(&state, &Action::new("card")),
            Err(ActionError::Illegal { .. })
        ));
        // Not in the dictionary.
        assert!(matches!(
            game.apply_action(&state, &Action::new("bold")),
            Err(ActionError::Illegal { .. })
        ));
        assert!(game.apply_action(&state, &Action::new("colder")).unwrap_err().is_malformed());
        assert!(game.apply_action(&state, &Action::new("CORD")).unwrap_err().is_malformed());
    }

    #[test]
    fn test_open_dictionary() {
        let game = WordLadderDuel::new("ab", "zz", None::<Vec<String>>);
        let state = game.reset();

        assert_eq!(game.valid_actions(&state).len(), 50);
        let state = game.apply_action(&state, &Action::new("zb")).unwrap();
        let state = game.apply_action(&state, &Action::new("zz")).unwrap();
        assert_eq!(game.winner(&state), Outcome::Winner(PlayerId::SECOND));
    }

    #[test]
    fn test_dead_end_is_a_draw() {
        let game = WordLadderDuel::new("cold", "warm", Some(["cold", "warm"]));
        let state = game.reset();

        assert!(game.is_terminal(&state));
        assert!(game.valid_actions(&state).is_empty());
        assert_eq!(game.winner(&state), Outcome::Draw);
    }

    #[test]
    #[should_panic(expected = "ASCII letters")]
    fn test_non_ascii_start_is_rejected() {
        let _ = WordLadderDuel::new("café", "cafe", None::<Vec<String>>);
    }

    #[test]
    fn test_words_are_lowercased() {
        let game = WordLadderDuel::new("COLD", "Warm", Some(["Cord"]));

        assert_eq!(game.goal(), "warm");
        assert_eq!(game.valid_actions(&game.reset()), actions(["cord"]));
    }
}
