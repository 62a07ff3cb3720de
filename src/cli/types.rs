use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI parser structure
#[derive(Parser)]
#[command(name = "sitepress")]
#[command(about = "Front-matter driven content pipeline for an MDX blog", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Site root (defaults to ./)
    #[arg(short, long, value_name = "DIR", global = true)]
    pub source: Option<PathBuf>,

    /// Configuration file(s), merged in order
    #[arg(short, long, value_name = "CONFIG_FILE", global = true)]
    pub config: Option<Vec<PathBuf>>,

    /// Show the full backtrace when an error occurs
    #[arg(short, long, default_value_t = false, global = true)]
    pub trace: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false, global = true)]
    pub debug: bool,

    /// Only log errors
    #[arg(short, long, default_value_t = false, global = true)]
    pub quiet: bool,
}

/// Subcommands for the CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Print the post index as JSON
    #[command(alias = "i")]
    Index {
        /// Only posts written in this locale
        #[arg(short, long, value_name = "LOCALE")]
        lang: Option<String>,

        /// Sort by date, newest first
        #[arg(long, default_value_t = false)]
        newest_first: bool,

        /// Pretty-print the JSON
        #[arg(long, default_value_t = false)]
        pretty: bool,
    },

    /// Compile one content file into an MDX module wrapped in the layout
    Inject {
        /// Content file to compile
        file: PathBuf,

        /// Write the module here instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Keep the post index fresh while content files change
    #[command(alias = "w")]
    Watch {
        /// Print the index JSON after every re-scan
        #[arg(long, default_value_t = false)]
        print: bool,
    },

    /// Show which localized file a request path maps to
    Rewrite {
        /// Request path, e.g. /blog/hello-world
        path: String,

        /// Resolved request locale; unknown locales fall back to the default
        #[arg(short, long, value_name = "LOCALE")]
        locale: Option<String>,

        /// Query string to carry over, including the leading `?`
        #[arg(long, default_value = "")]
        search: String,
    },
}
