use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "qindex", bin_name = "qindex", version = get_version())]
#[command(about = "Keep a README's question index in sync with a markdown tree", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Root directory of the question files [default: questions]
    #[arg(long, global = true, value_name = "DIR")]
    pub questions: Option<PathBuf>,

    /// README holding the GENERATED markers [default: README.md]
    #[arg(long, global = true, value_name = "FILE")]
    pub readme: Option<PathBuf>,

    /// Configuration file [default: ./qindex.json]
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Regenerate the question index inside the README (default)
    #[command(alias = "gen")]
    Generate {
        /// Fail if the README is out of date instead of rewriting it
        #[arg(long)]
        check: bool,

        /// Omit the top-level "Questions" heading
        #[arg(long)]
        no_heading: bool,
    },

    /// Append a code example link to each question file that lacks one
    #[command(alias = "link")]
    LinkExamples {
        /// Directory holding the code examples [default: code]
        #[arg(long, value_name = "DIR")]
        code: Option<PathBuf>,

        /// List the files that would change without writing them
        #[arg(long)]
        dry_run: bool,
    },
}
