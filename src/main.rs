use anyhow::Result;
use clap::{Arg, ArgAction, CommandFactory, FromArgMatches, Parser};
use pip2arch::commands::{GenerateOptions, generate, search};
use pip2arch::error::ResolveError;
use pip2arch::runtime::RealRuntime;
use std::path::PathBuf;
use std::process::ExitCode;

/// pip2arch - Convert a PyPI package into an Arch Linux PKGBUILD
///
/// Looks the package up on the index, picks a source tarball and writes a
/// PKGBUILD for it. When several versions exist and none is given, asks
/// which one to use.
///
/// Examples:
///   pip2arch requests                      # Write ./PKGBUILD for requests
///   pip2arch requests -v 2.0.0 -d python-idna
///   pip2arch -s flask                      # Search instead
#[derive(Parser, Debug)]
#[command(
    author,
    version = env!("PIP2ARCH_VERSION"),
    about,
    disable_version_flag = true
)]
struct Cli {
    /// Name of the PyPI package to process (the search term with --search)
    #[arg(value_name = "PKGNAME")]
    pub pkgname: String,

    /// Version of the package to process (skips the version prompt)
    #[arg(short = 'v', long = "version", value_name = "VERSION")]
    pub version: Option<String>,

    /// File to write the generated PKGBUILD to
    #[arg(short = 'o', long = "output", value_name = "PATH", default_value = "PKGBUILD")]
    pub output: PathBuf,

    /// Search for PKGNAME instead of generating a PKGBUILD (needs an
    /// --index-url that serves a JSON search API; pypi.org does not)
    #[arg(short = 's', long = "search")]
    pub search: bool,

    /// Extra dependency for the depends array (repeatable)
    #[arg(short = 'd', long = "dependencies", value_name = "DEPENDENCY")]
    pub depends: Vec<String>,

    /// pkgname of the generated PKGBUILD (defaults to PKGNAME)
    #[arg(short = 'n', long = "output-package-name", value_name = "NAME")]
    pub output_name: Option<String>,

    /// Package index URL (defaults to https://pypi.org)
    #[arg(long = "index-url", env = "PIP2ARCH_INDEX_URL", value_name = "URL")]
    pub index_url: Option<String>,
}

impl Cli {
    /// `-v/--version` selects the package version, so the program version
    /// moves to `-V/--app-version`.
    fn command_with_app_version() -> clap::Command {
        Cli::command().arg(
            Arg::new("app_version")
                .short('V')
                .long("app-version")
                .action(ArgAction::Version)
                .help("Print version"),
        )
    }

    fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let matches = Self::command_with_app_version().try_get_matches_from(args)?;
        Self::from_arg_matches(&matches)
    }

    fn generate_options(&self) -> GenerateOptions {
        GenerateOptions {
            name: self.pkgname.clone(),
            version: self.version.clone(),
            output: self.output.clone(),
            output_name: self.output_name.clone(),
            depends: self.depends.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::try_parse_args(std::env::args_os()).unwrap_or_else(|e| e.exit());

    if cli.search {
        search(&cli.pkgname, cli.index_url).await?;
        return Ok(ExitCode::SUCCESS);
    }

    let options = cli.generate_options();
    match generate(RealRuntime, options, cli.index_url).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => match err.downcast_ref::<ResolveError>() {
            Some(resolve_error) => {
                eprintln!("ERROR: {}", resolve_error);
                Ok(ExitCode::FAILURE)
            }
            None => Err(err),
        },
    }
}
