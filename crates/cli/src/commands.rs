use std::{
    fs,
    io::{Read, Write},
    path::Path,
};

use anyhow::{Context, Result};
use msgsig_verifier::{Notice, SignedMessagePayload, normalize_pasted, sign_message, submit};

use crate::{Commands, InputArgs, OutputFormat, config::Config};

/// How a command ended, short of an unexpected fault
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    Rejected,
}

/// Runs `command`, writing results to `out` and notices to `err`
pub fn run(
    command: Commands,
    config: &Config,
    stdin: impl Read,
    mut out: impl Write,
    mut err: impl Write,
) -> Result<Outcome> {
    match command {
        Commands::Verify { input, format } => {
            match String::from_utf8(read_input(&input, stdin)?) {
                Ok(raw) => verify(&raw, format, &mut out, &mut err),
                Err(utf8) => {
                    tracing::debug!(error = %utf8.utf8_error(), "input is not UTF-8");
                    write_notices(&[Notice::INVALID], &mut err)?;
                    Ok(Outcome::Rejected)
                }
            }
        }
        Commands::Normalize(input) => {
            match String::from_utf8(read_input(&input, stdin)?) {
                Ok(raw) => writeln!(out, "{}", normalize_pasted(&raw).unwrap_or(raw))?,
                Err(utf8) => {
                    out.write_all(utf8.as_bytes())?;
                    writeln!(out)?;
                }
            }
            Ok(Outcome::Done)
        }
        Commands::Example => {
            writeln!(out, "{}", SignedMessagePayload::example().to_json_pretty()?)?;
            Ok(Outcome::Done)
        }
        Commands::Sign { message, key_file } => {
            let key = config.signing_key(key_file.as_deref())?;
            let payload = sign_message(&key, message)?;
            writeln!(out, "{}", payload.to_json_pretty()?)?;
            Ok(Outcome::Done)
        }
    }
}

pub fn verify(
    raw: &str,
    format: OutputFormat,
    mut out: impl Write,
    mut err: impl Write,
) -> Result<Outcome> {
    let mut notices = Vec::new();
    let identity = submit(raw, &mut |n: Notice| notices.push(n));
    write_notices(&notices, &mut err)?;

    let Some(identity) = identity else {
        return Ok(Outcome::Rejected);
    };

    match format {
        OutputFormat::Text => writeln!(out, "{} signed {}", identity.address, identity.msg)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &identity)?;
            writeln!(out)?;
        }
    }
    Ok(Outcome::Done)
}

fn write_notices(notices: &[Notice], mut err: impl Write) -> Result<()> {
    for notice in notices {
        writeln!(err, "{}: {}", notice.severity, notice.key)?;
    }
    Ok(())
}

/// Inline `--json` wins, then `--input <FILE>`, otherwise stdin.
/// Bytes are returned as is: decoding them is up to the command.
pub fn read_input(args: &InputArgs, mut stdin: impl Read) -> Result<Vec<u8>> {
    if let Some(json) = &args.json {
        return Ok(json.clone().into_bytes());
    }

    match args.input.as_deref() {
        Some(path) if path != Path::new("-") => {
            fs::read(path).with_context(|| format!("read input from {}", path.display()))
        }
        _ => {
            let mut raw = Vec::new();
            stdin.read_to_end(&mut raw).context("read stdin")?;
            Ok(raw)
        }
    }
}
