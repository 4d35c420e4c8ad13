use std::io::{self, Write};

use anyhow::{Context, Result};
use log::{debug, info};
use sha2fips::digest_hex;
use structopt::StructOpt;

mod input;
mod settings;

use input::read_line;
use settings::Settings;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "sha256hex",
    about = "Prints the SHA-256 digest of a line of text as lowercase hex."
)]
struct Opt {
    #[structopt(help = "Text to hash instead of reading one line from stdin.")]
    text: Option<String>,
    #[structopt(short, long, help = "Only print the hex digest.")]
    quiet: bool,
}

fn main() -> Result<()> {
    fil_logger::init();

    let opt = Opt::from_args();
    let settings = Settings::new().context("invalid configuration")?;
    debug!("{:?}", settings);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let text = match opt.text {
        Some(text) => {
            info!("hashing command line argument");
            text
        }
        None => {
            if settings.show_prompt && !opt.quiet {
                write!(out, "{}", settings.prompt)?;
                out.flush()?;
            }
            info!("reading one line from stdin");
            let stdin = io::stdin();
            read_line(&mut stdin.lock())?
        }
    };

    let hex = digest_hex(&text)?;
    if opt.quiet {
        writeln!(out, "{}", hex)?;
    } else {
        writeln!(out, "{}{}", settings.label, hex)?;
    }

    Ok(())
}
