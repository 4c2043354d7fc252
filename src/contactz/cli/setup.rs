use clap::Parser;
use std::path::PathBuf;
use std::sync::OnceLock;

/// "0.3.2" for builds outside git, "0.3.2@abc1234" otherwise.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("CONTACTZ_GIT_HASH");

    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| {
        if GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "contactz", bin_name = "contactz", version = get_version())]
#[command(about = "A small, file-backed address book for the terminal", long_about = None)]
pub struct Cli {
    /// Store file (defaults to address_book.json in the data dir)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Contacts per page for show_all / next
    #[arg(short, long, value_name = "N")]
    pub page_size: Option<usize>,

    /// Debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Run one command line (e.g. `add Alice 1234567890`) instead of the interactive loop
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "COMMAND")]
    pub command: Vec<String>,
}
