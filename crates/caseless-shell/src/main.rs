mod cli;
mod command;
mod session;

use std::{
    fs,
    io::{self, BufRead, Write},
    process::ExitCode,
};

use clap::Parser;

use crate::session::Session;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let arguments = cli::Arguments::parse();
    let mut session = Session::new(arguments.folding());

    let result = match &arguments.file {
        Some(path) => match fs::read_to_string(path) {
            Ok(script) => run_script(&mut session, &script),
            Err(error) => {
                log::error!("Could not read {}: {error}", path.display());
                return ExitCode::FAILURE;
            },
        },
        None => run_shell(&mut session, arguments.quiet),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            log::error!("{error}");
            ExitCode::FAILURE
        },
    }
}

fn run_script(session: &mut Session, script: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    for line in script.lines() {
        session.run_line(line, &mut stdout)?;
    }
    Ok(())
}

fn run_shell(session: &mut Session, quiet: bool) -> io::Result<()> {
    let mut buffer = String::new();
    let mut stdin = io::stdin().lock();

    log::info!("Using {} case folding", session.folding());

    loop {
        buffer.clear();
        let mut stdout = io::stdout();
        if !quiet {
            write!(stdout, ">>> ")?;
            stdout.flush()?;
        }

        if stdin.read_line(&mut buffer)? == 0 {
            // EOF
            return Ok(());
        }

        session.run_line(&buffer, &mut stdout)?;
    }
}
