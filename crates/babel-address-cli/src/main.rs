//! `babel` — Encodes pages into hexagon addresses and decodes them back.
//!
//! **Usage:**
//! ```text
//! babel encode "hello world" --wall 1 --shelf 1 --volume 1 --page 1 [--url]
//! babel decode <ADDRESS> --wall 1 --shelf 1 --volume 1 --page 1 [--strict] [--trim]
//! babel decode "https://libraryofbabel.info/book.cgi?<ADDRESS>:1:1:01:001"
//! babel parse-url <URL>
//! babel chunk <STRING> [--size 4]
//! ```
//!
//! Any failure prints `Error: <message>` on stderr and exits with status 1.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, anyhow};
use babel_address::url::DEFAULT_BASE_URL;
use babel_address::{Coordinate, HexAddress, LibraryUrl, UrlOptions, seed};
use clap::{ArgAction, Args, Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Encode and decode Library of Babel hexagon addresses.
#[derive(Parser, Debug)]
#[command(name = "babel", version, about = "Encode and decode Library of Babel hexagon addresses")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Base URL used when printing library URLs.
    #[arg(long, env = "BABEL_BASE_URL", default_value = DEFAULT_BASE_URL, global = true)]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encode text into a hexagon address
    Encode(EncodeArgs),

    /// Decode a hexagon address (or library URL) into its page
    Decode(DecodeArgs),

    /// Print the address and coordinate carried by a library URL
    ParseUrl {
        /// URL in the form <base>?<address>:<wall>:<shelf>:<volume>:<page>
        url: String,
    },

    /// Split a string into hyphen-separated chunks for easier reading
    Chunk {
        /// String to format
        input: String,

        /// Characters per chunk
        #[arg(long, default_value_t = seed::DEFAULT_CHUNK)]
        size: usize,
    },
}

/// Coordinate fields, given as flags.
#[derive(Args, Debug, Default)]
struct CoordinateArgs {
    /// Wall (1 digit)
    #[arg(long)]
    wall: Option<u32>,

    /// Shelf (1 digit)
    #[arg(long)]
    shelf: Option<u32>,

    /// Volume (2 digits)
    #[arg(long)]
    volume: Option<u32>,

    /// Page (3 digits)
    #[arg(long)]
    page: Option<u32>,
}

impl CoordinateArgs {
    fn is_empty(&self) -> bool {
        self.wall.is_none() && self.shelf.is_none() && self.volume.is_none() && self.page.is_none()
    }

    fn resolve(&self) -> Result<Coordinate> {
        let require = |value: Option<u32>, flag: &str| {
            value.ok_or_else(|| anyhow!("missing --{flag}: all four coordinate fields are required"))
        };
        Ok(Coordinate {
            wall: require(self.wall, "wall")?,
            shelf: require(self.shelf, "shelf")?,
            volume: require(self.volume, "volume")?,
            page: require(self.page, "page")?,
        })
    }
}

#[derive(Args, Debug)]
struct EncodeArgs {
    /// Text to encode; read from stdin when neither TEXT nor --file is given
    #[arg(conflicts_with = "file")]
    text: Option<String>,

    /// Read the text from a file
    #[arg(long)]
    file: Option<PathBuf>,

    #[command(flatten)]
    coordinate: CoordinateArgs,

    /// Print a library URL instead of the bare address
    #[arg(short, long)]
    url: bool,
}

#[derive(Args, Debug)]
struct DecodeArgs {
    /// Base-36 address, or a library URL carrying its own coordinate
    address: String,

    #[command(flatten)]
    coordinate: CoordinateArgs,

    /// Fail if the address was built for a different coordinate
    #[arg(long)]
    strict: bool,

    /// Strip trailing page padding
    #[arg(long)]
    trim: bool,
}

fn read_text(args: &EncodeArgs) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    if let Some(path) = &args.file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()));
    }
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("failed to read text from stdin")?;
    Ok(text)
}

fn encode(args: &EncodeArgs, options: &UrlOptions, out: &mut impl Write) -> Result<()> {
    let coordinate = args.coordinate.resolve()?;
    let text = read_text(args)?;
    debug!(chars = text.chars().count(), %coordinate, "encoding text");

    let address = babel_address::encode(&text, &coordinate)?;
    if args.url {
        let url = LibraryUrl::new(address, coordinate);
        writeln!(out, "{}", url.to_url_string(options))?;
    } else {
        writeln!(out, "{}", address)?;
    }
    Ok(())
}

fn decode(args: &DecodeArgs, out: &mut impl Write) -> Result<()> {
    let (address, coordinate) = if args.address.contains('?') {
        if !args.coordinate.is_empty() {
            info!("coordinate taken from URL; coordinate flags ignored");
        }
        let url = babel_address::url::parse(&args.address)?;
        (url.address, url.coordinate)
    } else {
        (
            HexAddress::parse(&args.address)?,
            args.coordinate.resolve()?,
        )
    };

    let page = if args.strict {
        address.decode_strict(&coordinate)?
    } else {
        address.decode(&coordinate)?
    };

    if args.trim {
        writeln!(out, "{}", page.trimmed())?;
    } else {
        writeln!(out, "{}", page)?;
    }
    Ok(())
}

fn parse_url(url: &str, out: &mut impl Write) -> Result<()> {
    let url = babel_address::url::parse(url)?;
    writeln!(out, "address: {}", url.address)?;
    writeln!(out, "wall: {}", url.coordinate.wall)?;
    writeln!(out, "shelf: {}", url.coordinate.shelf)?;
    writeln!(out, "volume: {:02}", url.coordinate.volume)?;
    writeln!(out, "page: {:03}", url.coordinate.page)?;
    Ok(())
}

fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    let options = UrlOptions::new(cli.base_url);
    match &cli.command {
        Command::Encode(args) => encode(args, &options, out),
        Command::Decode(args) => decode(args, out),
        Command::ParseUrl { url } => parse_url(url, out),
        Command::Chunk { input, size } => {
            writeln!(out, "{}", seed::format_chunked(input, *size))?;
            Ok(())
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let stdout = io::stdout();
    match run(cli, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn run_args(args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(args).unwrap();
        let mut out = Vec::new();
        run(cli, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    const COORD: [&str; 8] = ["--wall", "1", "--shelf", "1", "--volume", "1", "--page", "1"];

    #[test]
    fn test_encode_decode_roundtrip() {
        let mut args = vec!["babel", "encode", "hello world"];
        args.extend(COORD);
        let address = run_args(&args).unwrap();
        let address = address.trim_end();

        let mut args = vec!["babel", "decode", address, "--trim"];
        args.extend(COORD);
        assert_eq!(run_args(&args).unwrap(), "hello world\n");
    }

    #[test]
    fn test_decode_from_url() {
        let mut args = vec!["babel", "encode", "from a url", "--url"];
        args.extend(COORD);
        let url = run_args(&args).unwrap();
        let url = url.trim_end();
        assert!(url.starts_with("https://libraryofbabel.info/book.cgi?"));
        assert!(url.ends_with(":1:1:01:001"));

        let decoded = run_args(&["babel", "decode", url, "--trim", "--strict"]).unwrap();
        assert_eq!(decoded, "from a url\n");
    }

    #[test]
    fn test_custom_base_url() {
        let mut args = vec!["babel", "--base-url", "http://mirror/book.cgi", "encode", "x", "-u"];
        args.extend(COORD);
        assert!(run_args(&args).unwrap().starts_with("http://mirror/book.cgi?"));
    }

    #[test]
    fn test_decode_full_page_is_padded() {
        let mut args = vec!["babel", "decode", "0"];
        args.extend(["--wall", "0", "--shelf", "0", "--volume", "0", "--page", "0"]);
        let page = run_args(&args).unwrap();
        assert_eq!(page.trim_end_matches('\n').len(), babel_address::limits::PAGE_LEN);
    }

    #[test]
    fn test_missing_coordinate_field() {
        let err = run_args(&["babel", "encode", "text", "--wall", "1"]).unwrap_err();
        assert!(err.to_string().contains("missing --shelf"));
    }

    #[test]
    fn test_strict_mismatch_fails() {
        let mut args = vec!["babel", "encode", "mismatch"];
        args.extend(COORD);
        let address = run_args(&args).unwrap();

        let args = [
            "babel", "decode", address.trim_end(), "--strict",
            "--wall", "2", "--shelf", "2", "--volume", "2", "--page", "2",
        ];
        assert!(run_args(&args).is_err());
    }

    #[test]
    fn test_parse_url_output() {
        let out = run_args(&["babel", "parse-url", "https://host/book.cgi?abc:1:1:01:001"]).unwrap();
        assert_eq!(out, "address: abc\nwall: 1\nshelf: 1\nvolume: 01\npage: 001\n");
        assert!(run_args(&["babel", "parse-url", "https://host/book.cgi?abc:1:1:01"]).is_err());
    }

    #[test]
    fn test_chunk() {
        assert_eq!(
            run_args(&["babel", "chunk", "aztulinerblinken"]).unwrap(),
            "aztu-line-rbli-nken\n"
        );
        assert_eq!(run_args(&["babel", "chunk", "abcdef", "--size", "3"]).unwrap(), "abc-def\n");
    }

    #[test]
    fn test_text_conflicts_with_file() {
        let result = Cli::try_parse_from(["babel", "encode", "text", "--file", "x.txt"]);
        assert!(result.is_err());
    }
}
