use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub struct ApiProgress {
    bar: ProgressBar,
}

impl ApiProgress {
    pub fn new_upload() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("🚀 {msg} {spinner:.green}")
                .unwrap()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ "),
        );
        bar.set_message("Uploading input file...");
        bar.enable_steady_tick(Duration::from_millis(80));

        Self { bar }
    }

    pub fn new_status_check() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("⏳ {msg} {spinner:.yellow}")
                .unwrap()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ "),
        );
        bar.set_message("Checking task status...");
        bar.enable_steady_tick(Duration::from_millis(120));

        Self { bar }
    }

    pub fn finish_and_clear(&self) {
        self.bar.finish_and_clear();
    }
}
