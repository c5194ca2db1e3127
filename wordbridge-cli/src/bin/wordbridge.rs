use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::ArgMatches;
use wordbridge::{DictionarySource, FsDictionary};
use wordbridge_cli::{
    ConsolePresenter, MenuController, Settings, build_command, format_language_list, logging,
    translate_once,
};

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    let scoped = matches.subcommand().map(|(_, sub)| sub).unwrap_or(&matches);

    let data_dir = scoped.get_one::<PathBuf>("data-dir").cloned();
    let settings = Settings::resolve(data_dir.as_deref(), scoped.get_flag("verbose"));
    logging::init(settings.verbose);

    let source = FsDictionary::new(&settings.data_dir);
    let result = match matches.subcommand() {
        Some(("languages", _)) => list_languages(&source),
        Some(("translate", sub)) => translate(&source, sub),
        _ => interactive(source),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn list_languages(source: &FsDictionary) -> Result<(), Box<dyn std::error::Error>> {
    let languages = source.load_languages()?;
    if languages.is_empty() {
        eprintln!(
            "No language pairs configured in {}",
            source.base_path().display()
        );
        return Ok(());
    }
    println!("{}", format_language_list(&languages));
    Ok(())
}

fn translate(source: &FsDictionary, sub: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    // Both are required by the command definition
    let code = sub.get_one::<String>("lang").ok_or("missing --lang")?;
    let words: Vec<String> = sub
        .get_many::<String>("text")
        .ok_or("missing text")?
        .cloned()
        .collect();

    println!("{}", translate_once(source, code, &words)?);
    Ok(())
}

fn interactive(source: FsDictionary) -> Result<(), Box<dyn std::error::Error>> {
    let languages = source.load_languages()?;
    if languages.is_empty() {
        return Err(format!(
            "No language pairs configured in {}",
            source.base_path().display()
        )
        .into());
    }

    let stdin = io::stdin();
    let mut menu = MenuController::new(
        source,
        languages,
        ConsolePresenter::stdout(),
        stdin.lock(),
    );
    menu.run()?;
    Ok(())
}
