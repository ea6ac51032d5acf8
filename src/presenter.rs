//! Presentation seam for the assignment editor
//!
//! The editor never talks to a terminal directly; it renders choices,
//! collects submissions, and signals outcomes through the [`Presenter`]
//! trait. The interactive ratatui implementation lives in `tui.rs`; this
//! module holds the trait, the headless batch implementation used by the
//! CLI flags, and a recording implementation for tests.

use std::collections::HashMap;

use strum::Display;

use crate::catalog::SelectionSet;
use crate::error::Result;

/// Fixed navigation targets the editor can redirect to after a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Destination {
    /// The assignment overview listing all categories
    #[strum(serialize = "assignment overview")]
    AssignmentOverview,
}

/// Input/output surface for one editing session.
///
/// `collect_submission` returns `None` when the user cancels without
/// submitting; the editor then performs no write.
pub trait Presenter {
    /// Display the offered options with their current checked state
    fn render_selection(&mut self, selection: &SelectionSet) -> Result<()>;

    /// Collect the user's submission as an id -> checked mapping
    /// (absent id = unchecked)
    fn collect_submission(&mut self) -> Result<Option<HashMap<String, bool>>>;

    /// Show a notice to the user
    fn notify(&mut self, message: &str);

    /// Navigate to a fixed destination after a successful submission
    fn redirect(&mut self, destination: Destination);
}

/// Headless presenter backed by `--enable`/`--disable` CLI flags.
///
/// Rendering prints a checkbox list to stdout; the submission is built from
/// the flags (enabled ids true, disabled ids false, everything else absent).
#[derive(Debug, Default)]
pub struct BatchPresenter {
    enable: Vec<String>,
    disable: Vec<String>,
}

impl BatchPresenter {
    /// Create a presenter from the ids to enable and disable
    pub fn new(enable: Vec<String>, disable: Vec<String>) -> Self {
        Self { enable, disable }
    }
}

impl Presenter for BatchPresenter {
    fn render_selection(&mut self, selection: &SelectionSet) -> Result<()> {
        println!("Category: {}", selection.category);
        for opt in &selection.options {
            let mark = if opt.selected { "x" } else { " " };
            println!("  [{}] {} ({})", mark, opt.label, opt.id);
        }
        Ok(())
    }

    fn collect_submission(&mut self) -> Result<Option<HashMap<String, bool>>> {
        let mut submission = HashMap::new();
        for id in &self.enable {
            submission.insert(id.clone(), true);
        }
        // Disables are applied second so an id listed in both flags
        // resolves to unchecked.
        for id in &self.disable {
            submission.insert(id.clone(), false);
        }
        Ok(Some(submission))
    }

    fn notify(&mut self, message: &str) {
        println!("{}", message);
    }

    fn redirect(&mut self, destination: Destination) {
        tracing::debug!(%destination, "redirect requested");
    }
}

/// Presenter that records every interaction, for assertions in tests.
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    /// Submission handed back by `collect_submission` (`None` = cancel)
    pub submission: Option<HashMap<String, bool>>,
    /// Selections rendered so far, in order
    pub rendered: Vec<SelectionSet>,
    /// Notices shown so far, in order
    pub notices: Vec<String>,
    /// Redirects requested so far, in order
    pub redirects: Vec<Destination>,
}

impl RecordingPresenter {
    /// Presenter that will submit the given map
    pub fn submitting(submission: HashMap<String, bool>) -> Self {
        Self {
            submission: Some(submission),
            ..Self::default()
        }
    }

    /// Presenter that will cancel instead of submitting
    pub fn cancelling() -> Self {
        Self::default()
    }
}

impl Presenter for RecordingPresenter {
    fn render_selection(&mut self, selection: &SelectionSet) -> Result<()> {
        self.rendered.push(selection.clone());
        Ok(())
    }

    fn collect_submission(&mut self) -> Result<Option<HashMap<String, bool>>> {
        Ok(self.submission.clone())
    }

    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }

    fn redirect(&mut self, destination: Destination) {
        self.redirects.push(destination);
    }
}
