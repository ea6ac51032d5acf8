//! Assignment settings editor
//!
//! Mediates between the persisted settings record and a presentation surface
//! for one category at a time: load the current selection, collect a
//! submission, filter it against the catalog, and replace the stored set in
//! a single write.

use std::collections::{BTreeSet, HashMap};

use tracing::{debug, info};

use crate::catalog::{Catalog, SelectionSet, TypeOption};
use crate::error::{AssignError, Result};
use crate::presenter::{Destination, Presenter};
use crate::store::SettingsStore;

/// Notice shown after a successful submission
pub const SAVED_NOTICE: &str = "Package assignment configuration saved.";

/// Editor for the enabled-type sets of assignment categories.
///
/// The store and presenter are injected at construction; the editor itself
/// holds no transport or rendering concerns. Each `run` call is one
/// independent load/submit cycle.
pub struct AssignmentEditor<S: SettingsStore, P: Presenter> {
    store: S,
    presenter: P,
    catalog: Catalog,
}

impl<S: SettingsStore, P: Presenter> AssignmentEditor<S, P> {
    /// Create an editor over a validated catalog
    pub fn new(store: S, presenter: P, catalog: Catalog) -> Result<Self> {
        catalog.validate()?;
        Ok(Self {
            store,
            presenter,
            catalog,
        })
    }

    /// Build the current selection for a category: all cataloged options in
    /// presentation order, checked per the stored set. No side effects.
    pub fn load_selection(&self, category: &str) -> Result<SelectionSet> {
        let cat = self
            .catalog
            .category(category)
            .ok_or_else(|| AssignError::unknown_category(category))?;

        let stored = self.store.get(category).unwrap_or_default();
        let options = cat
            .options
            .iter()
            .map(|opt| TypeOption {
                id: opt.id.clone(),
                label: opt.label.clone(),
                selected: stored.contains(&opt.id),
            })
            .collect();

        Ok(SelectionSet {
            category: category.to_string(),
            options,
        })
    }

    /// Persist a submitted selection for a category.
    ///
    /// Keeps the ids mapped to `true`, drops everything else, and intersects
    /// the survivors with the category's catalog so a stale or tampered form
    /// can never persist ids that were not offered. The resulting set
    /// replaces the stored one in exactly one write; on success the
    /// presenter shows the confirmation notice and redirects to the
    /// assignment overview. Store failures propagate with no notice and no
    /// redirect.
    pub fn submit_selection(
        &mut self,
        category: &str,
        submitted: &HashMap<String, bool>,
    ) -> Result<()> {
        let cat = self
            .catalog
            .category(category)
            .ok_or_else(|| AssignError::unknown_category(category))?;

        let mut types = BTreeSet::new();
        for (id, checked) in submitted {
            if !checked {
                continue;
            }
            if cat.options.iter().any(|opt| &opt.id == id) {
                types.insert(id.clone());
            } else {
                debug!(category, id, "dropping id not offered by the catalog");
            }
        }

        self.store.set(category, types.clone())?;
        self.store.commit()?;
        info!(category, count = types.len(), "assignment settings saved");

        self.presenter.notify(SAVED_NOTICE);
        self.presenter.redirect(Destination::AssignmentOverview);
        Ok(())
    }

    /// Run one full editing cycle for a category: load, render, collect,
    /// submit.
    ///
    /// Returns `Ok(false)` when the user cancels without submitting. When
    /// the save fails, the form is re-presented with the submitted (unsaved)
    /// choices so nothing the user entered is lost, and the error
    /// propagates to the caller.
    pub fn run(&mut self, category: &str) -> Result<bool> {
        let selection = self.load_selection(category)?;
        self.presenter.render_selection(&selection)?;

        let Some(submitted) = self.presenter.collect_submission()? else {
            debug!(category, "submission cancelled");
            return Ok(false);
        };

        match self.submit_selection(category, &submitted) {
            Ok(()) => Ok(true),
            Err(err) => {
                self.presenter
                    .notify(&format!("Failed to save assignment settings: {}", err));
                let resubmit = self.selection_from_submission(category, &submitted)?;
                self.presenter.render_selection(&resubmit)?;
                Err(err)
            }
        }
    }

    /// Selection reflecting an unsaved submission rather than stored state
    fn selection_from_submission(
        &self,
        category: &str,
        submitted: &HashMap<String, bool>,
    ) -> Result<SelectionSet> {
        let cat = self
            .catalog
            .category(category)
            .ok_or_else(|| AssignError::unknown_category(category))?;

        let options = cat
            .options
            .iter()
            .map(|opt| TypeOption {
                id: opt.id.clone(),
                label: opt.label.clone(),
                selected: submitted.get(&opt.id).copied().unwrap_or(false),
            })
            .collect();

        Ok(SelectionSet {
            category: category.to_string(),
            options,
        })
    }

    /// Access the underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Access the presenter
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Consume the editor, returning the store and presenter
    pub fn into_parts(self) -> (S, P) {
        (self.store, self.presenter)
    }
}
