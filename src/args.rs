use std::path::PathBuf;

use url::Url;

use checknumber_verifier::api_key::ApiKey;

pub const DEFAULT_API_URL: &str = "https://api.checknumber.ai";

#[derive(clap::Parser)]
#[command(name = "xcheck")]
#[command(version)]
#[command(about = "Bulk account verification through the CheckNumber API")]
#[command(long_about = "
A command-line client for the CheckNumber bulk account verification API.

Submitting an input file creates an asynchronous verification task on the
service. The task is then observed through the status endpoint until it is
exported (results available) or has failed.

Examples:
  # Submit an input file and wait for the results
  xcheck --api-key <KEY> submit --file input.txt --watch

  # Submit a handful of accounts directly and download the results
  xcheck --api-key <KEY> submit --targets +1234567890,+9876543210 \\
    --output results.xlsx

  # Check an existing task once
  xcheck --api-key <KEY> status --task-id <ID> --user-id test
")]
pub struct Args {
    /// API endpoint URL
    #[arg(
        long,
        value_name = "URL",
        value_hint = clap::ValueHint::Url,
        value_parser = Url::parse,
        default_value = DEFAULT_API_URL,
        global = true
    )]
    pub url: Url,

    /// API key sent as the X-API-Key header
    #[arg(
        long = "api-key",
        value_name = "KEY",
        env = "CHECKNUMBER_API_KEY",
        hide_env_values = true,
        value_parser = ApiKey::new,
        global = true
    )]
    pub api_key: Option<ApiKey>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand)]
pub enum Commands {
    /// Upload an input file and create a verification task
    ///
    /// The file is sent as a single multipart field. By default the
    /// command returns right after the task is created; use --watch to
    /// poll the status endpoint every few seconds until the task is
    /// exported or has failed.
    Submit(SubmitArgs),

    /// Check the status of an existing task
    ///
    /// Performs a single status call and prints the task snapshot,
    /// including the result URL once the task has been exported.
    Status(StatusArgs),
}

#[derive(clap::Args)]
#[command(group = clap::ArgGroup::new("source").required(true).args(["file", "targets"]))]
pub struct SubmitArgs {
    /// Path to the input file, one account per line
    #[arg(long, value_name = "PATH", value_hint = clap::ValueHint::FilePath)]
    pub file: Option<PathBuf>,

    /// Comma-separated accounts, written to the input file before upload
    #[arg(long, value_name = "ACCOUNTS", value_delimiter = ',')]
    pub targets: Option<Vec<String>>,

    /// Where to write the generated input file (only with --targets)
    #[arg(long, value_name = "PATH", default_value = "input.txt")]
    pub input: PathBuf,

    /// User identifier passed to the status endpoint
    #[arg(long = "user-id", value_name = "ID", default_value = "test")]
    pub user_id: String,

    /// Poll until the task reaches a terminal status
    #[arg(long, default_value_t = false)]
    pub watch: bool,

    /// Download the exported results to this path (implies --watch)
    #[arg(long, value_name = "PATH", value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

#[derive(clap::Args)]
pub struct StatusArgs {
    /// Task identifier returned by submit
    #[arg(long = "task-id", value_name = "ID")]
    pub task_id: String,

    /// User identifier the task was created under
    #[arg(long = "user-id", value_name = "ID", default_value = "test")]
    pub user_id: String,
}
