//! Output side of the interactive menu
//!
//! The menu controller never prints directly; it talks to a `Presenter`.
//! `ConsolePresenter` is the terminal implementation.

use std::io::{self, Write};

pub mod emoji {
    pub const THINKING: &str = "🤔";
    pub const ERROR: &str = "❌";
    pub const TRANSLATION: &str = "🔄";
    pub const LANGUAGE: &str = "🌍";
    pub const MENU: &str = "📋";
    pub const HELP: &str = "❓";
}

/// Everything the menu needs to show to the user
pub trait Presenter {
    /// Plain informational text such as menus and lists
    fn show_text(&mut self, text: &str) -> io::Result<()>;

    /// A prompt that expects the user to type something next
    fn show_prompt(&mut self, prompt: &str) -> io::Result<()>;

    fn show_result(&mut self, translation: &str) -> io::Result<()>;

    fn show_error(&mut self, message: &str) -> io::Result<()>;

    fn clear(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Writes the menu to a terminal (or any writer)
pub struct ConsolePresenter<W: Write> {
    out: W,
    ansi: bool,
}

impl ConsolePresenter<io::Stdout> {
    pub fn stdout() -> Self {
        ConsolePresenter::new(io::stdout(), true)
    }
}

impl<W: Write> ConsolePresenter<W> {
    /// `ansi` enables the clear-screen escape sequence
    pub fn new(out: W, ansi: bool) -> Self {
        ConsolePresenter { out, ansi }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for ConsolePresenter<W> {
    fn show_text(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }

    fn show_prompt(&mut self, prompt: &str) -> io::Result<()> {
        write!(self.out, "\n{} {} ", emoji::THINKING, prompt)?;
        self.out.flush()
    }

    fn show_result(&mut self, translation: &str) -> io::Result<()> {
        writeln!(self.out, "\n{} Translation: {}", emoji::TRANSLATION, translation)
    }

    fn show_error(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{} Error: {}", emoji::ERROR, message)
    }

    fn clear(&mut self) -> io::Result<()> {
        if self.ansi {
            write!(self.out, "\x1B[2J\x1B[H")?;
            self.out.flush()?;
        }
        Ok(())
    }
}
