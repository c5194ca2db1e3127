//! Command line front end for wordbridge
//!
//! Provides the interactive menu (language selection, translation loop, help)
//! and the one-shot `languages` / `translate` commands used by the
//! `wordbridge` binary.
//!
//! # Example
//!
//! ```no_run
//! use std::io;
//! use wordbridge::{DictionarySource, FsDictionary};
//! use wordbridge_cli::{ConsolePresenter, MenuController};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = FsDictionary::new("data");
//!     let languages = source.load_languages()?;
//!     let mut menu = MenuController::new(
//!         source,
//!         languages,
//!         ConsolePresenter::stdout(),
//!         io::stdin().lock(),
//!     );
//!     menu.run()?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod logging;
pub mod menu;
pub mod presenter;

pub use cli::{build_command, format_language_list, translate_once};
pub use config::Settings;
pub use menu::{LoopStep, MenuController};
pub use presenter::{ConsolePresenter, Presenter};
