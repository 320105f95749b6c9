use crate::prelude::{println, *};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use sectiongen_core::plan::PlannedFile;
use sectiongen_core::registry::AssetKind;

/// Receives progress and success events from the fetcher and materializer.
pub trait Notifier {
    /// A registry request is about to be sent.
    fn fetching(&self, kind: AssetKind, name: &str);

    /// A registry response was received and validated.
    fn fetched(&self, kind: AssetKind, name: &str);

    /// A file was written to disk.
    fn file_written(&self, file: &PlannedFile);
}

/// Notifier for interactive use: spinner while fetching, one block per file.
///
/// In JSON mode the spinner is hidden and per-file events only go to the log
/// so stdout carries a single JSON document.
pub struct TerminalNotifier {
    spinner: Option<ProgressBar>,
    json: bool,
}

impl TerminalNotifier {
    pub fn new(json: bool) -> Self {
        let spinner = if json {
            None
        } else {
            let spinner = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
                spinner.set_style(style);
            }
            Some(spinner)
        };

        Self { spinner, json }
    }

    /// Clear the spinner if it is still running.
    pub fn finish(&self) {
        if let Some(spinner) = &self.spinner {
            spinner.finish_and_clear();
        }
    }
}

impl Notifier for TerminalNotifier {
    fn fetching(&self, kind: AssetKind, name: &str) {
        log::info!("Fetching {kind} {name}");

        if let Some(spinner) = &self.spinner {
            spinner.enable_steady_tick(std::time::Duration::from_millis(100));
            spinner.set_message(f!("Fetching {kind} {name}..."));
        }
    }

    fn fetched(&self, kind: AssetKind, name: &str) {
        log::debug!("Fetched {kind} {name}");
        self.finish();
    }

    fn file_written(&self, file: &PlannedFile) {
        log::info!("Wrote {} {}", file.group.label(), file.path.display());

        if !self.json {
            println!("{}", format_file_written(file));
        }
    }
}

/// Render the success notification for a written file, content included.
pub fn format_file_written(file: &PlannedFile) -> String {
    let mut result = f!(
        "{} {} {} {}\n",
        "✓".green().bold(),
        f!("Created {}", file.group.label()).green(),
        file.name.bright_white().bold(),
        f!("({})", file.path.display()).bright_black()
    );

    for line in file.content.lines() {
        result.push_str(&f!("    {}\n", line.dimmed()));
    }

    result
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::sync::Mutex;

    /// Notifier that records every event as a plain string.
    #[derive(Default)]
    pub struct RecordingNotifier {
        events: Mutex<Vec<String>>,
    }

    impl RecordingNotifier {
        pub fn events(&self) -> Vec<String> {
            self.events.lock().unwrap().clone()
        }

        pub fn written(&self) -> Vec<String> {
            self.events()
                .into_iter()
                .filter_map(|e| e.strip_prefix("written ").map(str::to_string))
                .collect()
        }

        fn push(&self, event: String) {
            self.events.lock().unwrap().push(event);
        }
    }

    impl Notifier for RecordingNotifier {
        fn fetching(&self, kind: AssetKind, name: &str) {
            self.push(f!("fetching {kind} {name}"));
        }

        fn fetched(&self, kind: AssetKind, name: &str) {
            self.push(f!("fetched {kind} {name}"));
        }

        fn file_written(&self, file: &PlannedFile) {
            self.push(f!("written {}", file.path.display()));
        }
    }
}
