//! Interactive menu
//!
//! Each screen returns a `LoopStep` describing where to go next, and the
//! main loop in `MenuController::run` acts on it. End of input behaves like
//! choosing exit.

use std::io::{self, BufRead};

use tracing::{debug, info};
use wordbridge::{DictionarySource, LanguagePair, TranslationEngine};

use crate::presenter::{Presenter, emoji};

/// What the caller should do after a menu step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopStep {
    /// Carry on in the enclosing loop: the main menu is shown again, or
    /// language selection starts over when returned from the translation loop
    Continue,
    /// Go back to the main menu
    ReturnToMenu,
    /// Leave the program
    Exit,
}

const GOODBYE: &str = "Goodbye!";
const INVALID_CHOICE: &str = "Invalid choice. Please try again.";
const EMPTY_INPUT: &str = "Input cannot be empty.";
const TRANSLATION_PROMPT: &str =
    "Enter text to translate (or 'exit' / 'menu' to return to the main menu):";

fn main_menu() -> String {
    format!(
        "\n{} Main Menu:\n1. Start Translation\n2. Help\n3. Exit",
        emoji::MENU
    )
}

fn help_text() -> String {
    format!(
        "\n{} Help:\n\
         1. Select a language pair for translation\n\
         2. Enter text to translate\n\
         3. View the translation result\n\
         4. Enter 'exit' to return to the main menu\n\
         \nTips:\n\
         - You can use numbers or text commands (e.g., '1' or 'start')\n\
         - Empty input is not allowed\n\
         - Unknown words will be kept as is\n\
         - Punctuation marks are preserved\n\
         - The first letter of the sentence is capitalized\n\
         \n1. Back to menu\n2. Exit",
        emoji::HELP
    )
}

const AFTER_TRANSLATION_MENU: &str =
    "\n1. Back to menu\n2. Exit\n3. Change language\n4. Stay on current language";

enum Selection {
    Language(LanguagePair),
    Step(LoopStep),
}

enum AfterTranslation {
    Stay,
    Leave(LoopStep),
}

/// Drives the main menu, language selection and translation loop
pub struct MenuController<S, P, R> {
    source: S,
    languages: Vec<LanguagePair>,
    presenter: P,
    input: R,
}

impl<S, P, R> MenuController<S, P, R>
where
    S: DictionarySource,
    P: Presenter,
    R: BufRead,
{
    pub fn new(source: S, languages: Vec<LanguagePair>, presenter: P, input: R) -> Self {
        MenuController {
            source,
            languages,
            presenter,
            input,
        }
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Run until the user exits or input ends
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.presenter.show_text(&main_menu())?;
            self.presenter.show_prompt("Select an action:")?;
            let step = match self.read_line()? {
                Some(choice) => self.handle_main_choice(&choice.to_lowercase())?,
                None => LoopStep::Exit,
            };
            if step == LoopStep::Exit {
                info!("Leaving interactive menu");
                return Ok(());
            }
        }
    }

    /// Act on a main menu choice
    pub fn handle_main_choice(&mut self, choice: &str) -> io::Result<LoopStep> {
        match choice {
            "1" | "start" => self.translation_mode(),
            "2" | "help" => self.help_mode(),
            "3" | "exit" => {
                self.presenter.show_text(GOODBYE)?;
                Ok(LoopStep::Exit)
            }
            _ => {
                self.presenter.show_error(INVALID_CHOICE)?;
                Ok(LoopStep::Continue)
            }
        }
    }

    fn translation_mode(&mut self) -> io::Result<LoopStep> {
        // Left unset after a failed load so the error stays on screen
        let mut clear_screen = true;
        loop {
            if clear_screen {
                self.presenter.clear()?;
            }
            clear_screen = true;
            let language = match self.select_language()? {
                Selection::Language(language) => language,
                Selection::Step(step) => return Ok(step),
            };
            self.presenter.clear()?;

            let terms = match self.source.load_term_map(&language) {
                Ok(terms) => terms,
                Err(e) => {
                    self.presenter.show_error(&e.to_string())?;
                    clear_screen = false;
                    continue;
                }
            };
            let engine = TranslationEngine::new(terms, language);
            self.presenter.show_text(&format!(
                "\n{} {}",
                emoji::LANGUAGE,
                engine.current_language()
            ))?;

            match self.translation_loop(&engine)? {
                LoopStep::Continue => debug!("Changing language"),
                step => return Ok(step),
            }
        }
    }

    fn select_language(&mut self) -> io::Result<Selection> {
        let mut listing = format!("\n{} Available languages:", emoji::LANGUAGE);
        for (i, language) in self.languages.iter().enumerate() {
            listing.push_str(&format!("\n{}. {}", i + 1, language));
        }
        self.presenter.show_text(&listing)?;

        loop {
            self.presenter.show_prompt(&format!(
                "Select language (1-{}) or 'exit' to return:",
                self.languages.len()
            ))?;
            let Some(input) = self.read_line()? else {
                return Ok(Selection::Step(LoopStep::Exit));
            };
            if input.eq_ignore_ascii_case("exit") {
                return Ok(Selection::Step(LoopStep::ReturnToMenu));
            }
            match input.parse::<usize>() {
                Ok(n) if (1..=self.languages.len()).contains(&n) => {
                    let language = self.languages[n - 1].clone();
                    debug!("Selected language pair '{}'", language.code);
                    return Ok(Selection::Language(language));
                }
                _ => self.presenter.show_error(INVALID_CHOICE)?,
            }
        }
    }

    /// Translate lines until the user leaves
    ///
    /// Returns `Continue` when the user asks to change language.
    pub fn translation_loop(&mut self, engine: &TranslationEngine) -> io::Result<LoopStep> {
        loop {
            self.presenter.show_prompt(TRANSLATION_PROMPT)?;
            let Some(input) = self.read_line()? else {
                return Ok(LoopStep::Exit);
            };
            if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("menu") {
                return Ok(LoopStep::ReturnToMenu);
            }

            match engine.translate(&input) {
                Ok(translation) => {
                    self.presenter.show_result(&translation)?;
                    if let AfterTranslation::Leave(step) = self.after_translation()? {
                        return Ok(step);
                    }
                }
                Err(e) if e.is_invalid_argument() => self.presenter.show_error(EMPTY_INPUT)?,
                Err(e) => self.presenter.show_error(&e.to_string())?,
            }
        }
    }

    fn after_translation(&mut self) -> io::Result<AfterTranslation> {
        self.presenter.show_text(AFTER_TRANSLATION_MENU)?;
        self.presenter.show_prompt("Select an action:")?;
        match self.read_line()?.as_deref() {
            Some("1") => Ok(AfterTranslation::Leave(LoopStep::ReturnToMenu)),
            Some("2") | None => {
                self.presenter.show_text(GOODBYE)?;
                Ok(AfterTranslation::Leave(LoopStep::Exit))
            }
            // Back to language selection
            Some("3") => Ok(AfterTranslation::Leave(LoopStep::Continue)),
            _ => Ok(AfterTranslation::Stay),
        }
    }

    fn help_mode(&mut self) -> io::Result<LoopStep> {
        self.presenter.clear()?;
        self.presenter.show_text(&help_text())?;
        loop {
            self.presenter.show_prompt("Select an action:")?;
            let Some(choice) = self.read_line()? else {
                return Ok(LoopStep::Exit);
            };
            match choice.to_lowercase().as_str() {
                "1" | "menu" | "back" => {
                    self.presenter.clear()?;
                    return Ok(LoopStep::ReturnToMenu);
                }
                "2" | "exit" => {
                    self.presenter.show_text(GOODBYE)?;
                    return Ok(LoopStep::Exit);
                }
                _ => self.presenter.show_error(INVALID_CHOICE)?,
            }
        }
    }

    /// Next trimmed line, or `None` at end of input
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
