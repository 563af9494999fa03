//! Session and round orchestration
//!
//! One `Session` spans many rounds. Each round runs {prompt, validate,
//! apply, render} until the state machine reaches a terminal outcome, then
//! the replay prompt decides whether another round begins.

use super::input::InputSource;
use crate::core::{Difficulty, MAX_WORD_LEN, MIN_WORD_LEN, Word};
use crate::dict::Dictionary;
use crate::game::{GameState, GuessValidator, ValidatedGuess};
use crate::output::{Renderer, Theme};
use anyhow::{Result, bail};
use log::debug;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

/// Presentation settings spanning rounds, owned by the session
///
/// Passed into renderer calls explicitly; nothing reads it as a global.
#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    /// Banner theme; `None` until the player picks one from the menu
    pub theme: Option<Theme>,
    /// Arm the debug-mode question at round start
    pub debug: bool,
}

/// Everything needed to start one round
#[derive(Debug, Clone)]
pub struct RoundConfig {
    pub difficulty: Difficulty,
    pub word_length: usize,
    pub debug: bool,
    /// Debug override: use this word instead of drawing from the pool
    pub forced_word: Option<Word>,
    /// Debug override: replace the difficulty's guess budget
    pub max_guesses: Option<usize>,
}

impl RoundConfig {
    /// A standard (non-debug) round
    #[must_use]
    pub const fn standard(difficulty: Difficulty, word_length: usize) -> Self {
        Self {
            difficulty,
            word_length,
            debug: false,
            forced_word: None,
            max_guesses: None,
        }
    }
}

/// Round sequencer, generic over the input and rendering seams
pub struct Session<I: InputSource, R: Renderer> {
    dict: Dictionary,
    input: I,
    renderer: R,
    config: SessionConfig,
    rng: StdRng,
}

impl<I: InputSource, R: Renderer> Session<I, R> {
    /// Create a session
    ///
    /// With a seed, word and theme draws are reproducible; without one the
    /// RNG seeds from OS entropy.
    #[must_use]
    pub fn new(
        dict: Dictionary,
        input: I,
        renderer: R,
        config: SessionConfig,
        seed: Option<u64>,
    ) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self {
            dict,
            input,
            renderer,
            config,
            rng,
        }
    }

    /// Run the whole session: setup, then rounds until the player stops
    ///
    /// # Errors
    /// Returns an error on input/output failure or a dictionary gap; all
    /// invalid player input is handled by re-prompting instead.
    pub fn run(&mut self) -> Result<()> {
        let debug_armed = self.config.debug || self.startup_debug_prompt()?;

        if self.config.theme.is_none() {
            let theme = self.select_theme()?;
            self.config.theme = Some(theme);
        }

        loop {
            let mut state = self.start_round(debug_armed)?;
            self.run_round(&mut state)?;

            if !self.offer_replay()? {
                return Ok(());
            }
        }
    }

    /// Initial prompt: any key continues, `s` arms debug mode
    fn startup_debug_prompt(&mut self) -> Result<bool> {
        let line = self
            .input
            .prompt_line("[S for debug mode]\nPress any key to continue...\n> ")?;
        Ok(line.eq_ignore_ascii_case("s"))
    }

    /// Theme menu, looped until a valid number is entered
    fn select_theme(&mut self) -> Result<Theme> {
        loop {
            self.renderer.clear();
            self.renderer.title(Theme::Normal);
            self.renderer.theme_menu();

            let line = self.input.prompt_line("> ")?;
            if let Ok(n) = line.parse::<usize>()
                && let Some(theme) = Theme::from_menu_index(n)
            {
                return Ok(theme);
            }

            self.renderer.message("Enter a number in the range!");
        }
    }

    /// Set up one round, asking about debug mode first when armed
    fn start_round(&mut self, debug_armed: bool) -> Result<GameState> {
        if debug_armed {
            let answer = self.input.prompt_line("Enter debug mode? [Y/N]: ")?;
            if answer.eq_ignore_ascii_case("y") {
                return self.debug_settings();
            }
        }

        self.renderer.clear();
        if let Some(theme) = self.config.theme {
            self.renderer.title(theme);
        }

        let difficulty = self.select_difficulty()?;
        let word_length = self.select_word_length()?;

        self.new_round(&RoundConfig::standard(difficulty, word_length))
    }

    /// Difficulty menu, looped until a digit 1-6 is entered
    fn select_difficulty(&mut self) -> Result<Difficulty> {
        loop {
            self.renderer.difficulty_menu();

            let line = self.input.prompt_line("> ")?;
            if let Ok(n) = line.parse::<usize>()
                && let Some(difficulty) = Difficulty::from_menu_index(n)
            {
                return Ok(difficulty);
            }

            self.renderer
                .message("Enter a valid number between 1 and 6.");
        }
    }

    /// Word length prompt, looped until a number 3-9 is entered
    fn select_word_length(&mut self) -> Result<usize> {
        loop {
            let line = self
                .input
                .prompt_line("Enter how long you want the word to be (3-9 letters): ")?;
            if let Ok(n) = line.parse::<usize>()
                && (MIN_WORD_LEN..=MAX_WORD_LEN).contains(&n)
            {
                return Ok(n);
            }

            self.renderer.message("Enter a number from 3 to 9!");
        }
    }

    /// Debug round setup: forced word, custom budget, difficulty
    fn debug_settings(&mut self) -> Result<GameState> {
        let word = loop {
            let line = self.input.prompt_line("Enter a word [R for random]: ")?;
            if line.eq_ignore_ascii_case("r") {
                let length = self.rng.random_range(MIN_WORD_LEN..=MAX_WORD_LEN);
                break self.draw_secret(length)?;
            }

            match Word::new(line) {
                Ok(word) => break word,
                Err(e) => self.renderer.message(&e.to_string()),
            }
        };

        let max_guesses = loop {
            let line = self.input.prompt_line("Enter guess amount: ")?;
            if let Ok(n) = line.parse::<usize>()
                && n >= 1
            {
                break n;
            }
            self.renderer.message("Enter a number of at least 1!");
        };

        let difficulty = loop {
            let line = self.input.prompt_line("Enter difficulty: ")?;
            if let Ok(n) = line.parse::<usize>()
                && let Some(difficulty) = Difficulty::from_menu_index(n)
            {
                break difficulty;
            }
            self.renderer
                .message("Enter a valid number between 1 and 6.");
        };

        let word_length = word.len();
        self.new_round(&RoundConfig {
            difficulty,
            word_length,
            debug: true,
            forced_word: Some(word),
            max_guesses: Some(max_guesses),
        })
    }

    /// Create a fresh in-progress round from a config
    ///
    /// # Errors
    /// Fails when no forced word is given and the secret pool for the
    /// requested length is empty; the startup completeness check makes
    /// that unreachable in a correctly initialized session.
    pub fn new_round(&mut self, config: &RoundConfig) -> Result<GameState> {
        let secret = match &config.forced_word {
            Some(word) => word.clone(),
            None => self.draw_secret(config.word_length)?,
        };

        debug!(
            "new round: length={} difficulty={} max_guesses={} debug={}",
            secret.len(),
            config.difficulty,
            config
                .max_guesses
                .unwrap_or_else(|| config.difficulty.max_guesses()),
            config.debug
        );

        Ok(match config.max_guesses {
            Some(max) => GameState::with_max_guesses(secret, config.difficulty, max, config.debug),
            None => GameState::new(secret, config.difficulty, config.debug),
        })
    }

    /// Draw a secret word from the common pool for a length
    fn draw_secret(&mut self, length: usize) -> Result<Word> {
        let pool = self.dict.common_words_of_length(length);
        match pool.choose(&mut self.rng) {
            Some(word) => Ok(word.clone()),
            None => bail!("no common words of length {length} to draw from"),
        }
    }

    /// Play one round to its terminal outcome
    ///
    /// # Errors
    /// Propagates input failures; validation rejections never surface here,
    /// they re-prompt in place.
    pub fn run_round(&mut self, state: &mut GameState) -> Result<()> {
        self.renderer.clear();
        self.renderer.render_round(state, false);

        if state.debug() {
            let secret = state.secret().text().to_string();
            self.renderer.message(&secret);
        }

        while !state.is_over() {
            let guess = self.prompt_valid_guess(state)?;
            state.apply_guess(guess)?;

            self.renderer.clear();
            self.renderer.render_round(state, true);
        }

        self.renderer.render_outcome(state);
        Ok(())
    }

    /// Prompt until a guess passes validation
    fn prompt_valid_guess(&mut self, state: &GameState) -> Result<ValidatedGuess> {
        let validator = GuessValidator::new(&self.dict);

        loop {
            let raw = self.input.prompt_line("")?;

            match validator.validate(&raw, state) {
                Ok(guess) => return Ok(guess),
                Err(reason) => {
                    self.renderer.message(&reason.to_string());
                    self.renderer.clear();
                    self.renderer.render_round(state, false);
                }
            }
        }
    }

    /// Replay prompt, looped until Y or N
    ///
    /// # Errors
    /// Propagates input failures.
    pub fn offer_replay(&mut self) -> Result<bool> {
        loop {
            let answer = self
                .input
                .prompt_line("\nPlay Again [Y/N]?: ")?
                .to_lowercase();

            match answer.as_str() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => self.renderer.message("Enter Y or N!"),
            }
        }
    }
}
