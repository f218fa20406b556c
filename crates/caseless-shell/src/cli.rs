use std::path::PathBuf;

use caseless::Folding;

#[derive(clap::Parser, Debug)]
#[command(name = "caseless-shell", version, about = "Poke at a case-insensitive property map", long_about = None)]
pub struct Arguments {
    /// Only fold ASCII letters instead of using full unicode lowercasing
    #[clap(
        long,
        action = clap::ArgAction::SetTrue,
    )]
    ascii: bool,

    /// Don't print a prompt
    #[clap(
        short,
        long,
        action = clap::ArgAction::SetTrue,
    )]
    pub quiet: bool,

    /// Read commands from this file instead of stdin
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub file: Option<PathBuf>,
}

impl Arguments {
    #[must_use]
    pub fn folding(&self) -> Folding {
        if self.ascii {
            Folding::Ascii
        } else {
            Folding::Unicode
        }
    }
}
