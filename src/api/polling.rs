use std::time::Duration;

use backon::{BlockingRetryable, ConstantBuilder};

use super::client::ApiClient;
use super::errors::ApiClientError;
use super::models::Task;

/// Fixed delay between consecutive status checks.
pub const POLL_INTERVAL: Duration = Duration::from_secs(5);

// About an hour at the 5 second interval.
const MAX_POLL_ATTEMPTS: usize = 720;

enum Attempt {
    /// Task exists but has not reached a terminal status yet.
    Pending,
    /// Status check failed, retried on the next interval.
    Transient(ApiClientError),
}

/// Polls the status endpoint until the task reaches a terminal status.
///
/// Status-check failures are treated as transient: they are logged and
/// the next interval retries. Progress counters are printed on every
/// non-terminal snapshot.
///
/// # Errors
///
/// Will return `Err` if the attempt budget runs out before the task
/// finishes; the last transport or decode error is surfaced if one
/// happened on the final attempt.
pub fn poll_task_status(
    api: &ApiClient,
    task_id: &str,
    user_id: &str,
) -> Result<Task, ApiClientError> {
    let fetch = || -> Result<Task, Attempt> {
        match api.get_task_status(task_id, user_id) {
            Ok(task) if task.is_terminal() => Ok(task),
            Ok(task) => {
                println!(
                    "Status: {}, Success: {}, Total: {}",
                    task.status(),
                    task.success(),
                    task.total()
                );
                Err(Attempt::Pending)
            }
            Err(err) => Err(Attempt::Transient(err)),
        }
    };

    fetch
        .retry(
            ConstantBuilder::default()
                .with_delay(POLL_INTERVAL)
                .with_max_times(MAX_POLL_ATTEMPTS),
        )
        .notify(|attempt: &Attempt, dur: Duration| {
            if let Attempt::Transient(err) = attempt {
                log::warn!("Status check for task {task_id} failed: {err}, retrying in {dur:?}");
            }
        })
        .call()
        .map_err(|attempt| match attempt {
            Attempt::Pending => ApiClientError::InProgress,
            Attempt::Transient(err) => err,
        })
}
