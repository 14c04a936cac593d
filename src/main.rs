//! quran-explorer: browse the surahs and verses of the Quran from the terminal
//!
//! Data comes from the public API at quranapi.pages.dev; recitations are
//! played through an external player (mpv by default).

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use quran_explorer::config::Config;

mod commands;

#[derive(Parser)]
#[command(name = "quran-explorer")]
#[command(about = "Browse the surahs and verses of the Quran", long_about = None)]
#[command(version)]
struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Config file (defaults to <config dir>/quran-explorer/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List surahs, optionally searched and filtered
    List {
        /// Match surah name, Arabic name or number
        #[arg(long, short)]
        search: Option<String>,

        /// Filter: all, mecca, medina, juz (default: all)
        #[arg(long, short, default_value = "all")]
        filter: String,

        /// Juz to show with --filter juz
        #[arg(long, short, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=30))]
        juz: u8,

        /// Limit number of results
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Show every verse of a surah
    Surah {
        /// Surah number (1-114)
        #[arg(value_parser = clap::value_parser!(u16).range(1..=114))]
        surah: u16,

        /// Translation: en, bn or ur (default from config)
        #[arg(long, short)]
        translation: Option<String>,

        /// Reciter id for the full-surah audio link
        #[arg(long, short)]
        reciter: Option<String>,

        /// Show Arabic text only
        #[arg(long)]
        arabic_only: bool,
    },

    /// Show a single verse with its recitations
    Verse {
        /// Surah number (1-114)
        #[arg(value_parser = clap::value_parser!(u16).range(1..=114))]
        surah: u16,

        /// Verse number within the surah
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        ayah: u32,

        /// Translation: en, bn or ur (default from config)
        #[arg(long, short)]
        translation: Option<String>,
    },

    /// Recite a surah, or a single verse of it
    Play {
        /// Surah number (1-114)
        #[arg(value_parser = clap::value_parser!(u16).range(1..=114))]
        surah: u16,

        /// Verse number (plays the whole surah if omitted)
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        ayah: Option<u32>,

        /// Reciter id (see `reciters`)
        #[arg(long, short)]
        reciter: Option<String>,

        /// Print the audio URL instead of playing it
        #[arg(long)]
        print_url: bool,
    },

    /// List available reciters
    Reciters,

    /// Explore interactively: search, open surahs and verses, play audio
    Browse,
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_names(false)
        .with_line_number(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    tracing::debug!(?config, "configuration resolved");

    match cli.command {
        Commands::List {
            search,
            filter,
            juz,
            limit,
        } => {
            let options = commands::list::ListOptions {
                search,
                filter,
                juz,
                limit,
            };
            let output = commands::list::execute(&config, options)?;
            println!("{}", output);
        }

        Commands::Surah {
            surah,
            translation,
            reciter,
            arabic_only,
        } => {
            let options = commands::surah::SurahOptions {
                surah,
                translation,
                reciter,
                arabic_only,
            };
            println!("{}", commands::surah::execute(&config, options)?);
        }

        Commands::Verse {
            surah,
            ayah,
            translation,
        } => {
            let options = commands::verse::VerseOptions {
                surah,
                ayah,
                translation,
            };
            println!("{}", commands::verse::execute(&config, options)?);
        }

        Commands::Play {
            surah,
            ayah,
            reciter,
            print_url,
        } => {
            let options = commands::play::PlayOptions {
                surah,
                ayah,
                reciter,
                print_url,
            };
            commands::play::execute(&config, options)?;
        }

        Commands::Reciters => {
            println!("{}", commands::reciters::execute(&config)?);
        }

        Commands::Browse => {
            commands::browse::execute(&config)?;
        }
    }

    Ok(())
}
