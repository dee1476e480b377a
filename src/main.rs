mod args;
use crate::args::{Args, Commands, StatusArgs, SubmitArgs};

use std::path::{Path, PathBuf};

use clap::Parser;
use thiserror::Error;

use checknumber_verifier::{
    api::{poll_task_status, ApiClient, ApiClientError, Task},
    input,
    progress::ApiProgress,
};

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Api(#[from] ApiClientError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("No API key provided. Pass --api-key or set CHECKNUMBER_API_KEY")]
    MissingApiKey,

    #[error("No input provided. Use --file or --targets to supply accounts")]
    NoInput,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let Args {
        command: cmd,
        url,
        api_key,
    } = Args::parse();

    let api_key = api_key.ok_or(CliError::MissingApiKey)?;
    let api = ApiClient::new(url, api_key).map_err(CliError::from)?;

    match &cmd {
        Commands::Submit(args) => submit(&api, args)?,
        Commands::Status(args) => status(&api, args)?,
    }
    Ok(())
}

fn submit(api: &ApiClient, args: &SubmitArgs) -> Result<(), CliError> {
    let path = input_file(args)?;

    let spinner = ApiProgress::new_upload();
    let uploaded = api.upload_file(&path);
    spinner.finish_and_clear();
    let task = uploaded?;

    println!("Task ID: {}", task.task_id());
    println!("Status: {}", task.status());

    if args.watch || args.output.is_some() {
        let finished = poll_task_status(api, task.task_id(), &args.user_id)?;
        report(api, &finished, args.output.as_deref())?;
    }
    Ok(())
}

fn input_file(args: &SubmitArgs) -> Result<PathBuf, CliError> {
    // clap enforces exactly one of --file/--targets, the fallthrough is
    // for programmatic construction of SubmitArgs
    match (&args.file, &args.targets) {
        (Some(file), _) => Ok(file.clone()),
        (None, Some(targets)) => {
            input::write_targets(targets, &args.input)?;
            println!("Created input file: {}", args.input.display());
            Ok(args.input.clone())
        }
        (None, None) => Err(CliError::NoInput),
    }
}

fn report(api: &ApiClient, task: &Task, output: Option<&Path>) -> Result<(), CliError> {
    if task.has_failed() {
        println!("Task {} failed", task.task_id());
        return Ok(());
    }

    match task.result_url() {
        Some(result_url) => {
            println!("Results available at: {result_url}");
            if let Some(path) = output {
                api.download_results(result_url, path)?;
                println!("Results saved to: {}", path.display());
            }
        }
        None => println!("Task {} finished without a result URL", task.task_id()),
    }
    Ok(())
}

fn status(api: &ApiClient, args: &StatusArgs) -> Result<(), CliError> {
    let spinner = ApiProgress::new_status_check();
    let snapshot = api.get_task_status(&args.task_id, &args.user_id);
    spinner.finish_and_clear();
    let task = snapshot?;

    println!("Task ID: {}", task.task_id());
    println!("Status: {}", task.status());
    println!(
        "Checked: {}/{} ({} failed)",
        task.success(),
        task.total(),
        task.failure()
    );
    println!("Created: {}", task.created_at());
    println!("Updated: {}", task.updated_at());
    if let Some(result_url) = task.result_url() {
        println!("Results available at: {result_url}");
    }
    Ok(())
}
