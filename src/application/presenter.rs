//! Presenter: maps user events to core calls and view updates
//!
//! The view is a trait so the same flow drives a terminal, a test double or
//! any other surface. The core never sees the view.

use tracing::debug;

use crate::application::services::ComplementService;
use crate::application::ApplicationResult;
use crate::domain::{ComputationResult, Steps};

/// Display surface: six result slots, a steps area and an error area.
pub trait ResultView {
    /// Render the six result values and make the result area visible.
    fn show_result(&mut self, result: &ComputationResult);

    /// Render the intermediate binaries and make the steps area visible.
    fn show_steps(&mut self, steps: &Steps);

    /// Render an error and hide result and steps areas.
    fn show_error(&mut self, message: &str);

    /// Hide the error area.
    fn clear_error(&mut self);
}

/// Drives a [`ResultView`] from the two user events: trigger and edit.
pub struct Presenter<V: ResultView> {
    view: V,
    service: ComplementService,
    show_steps: bool,
}

impl<V: ResultView> Presenter<V> {
    pub fn new(view: V) -> Self {
        Self {
            view,
            service: ComplementService::new(),
            show_steps: true,
        }
    }

    /// Toggle rendering of the steps area.
    pub fn with_steps(mut self, show_steps: bool) -> Self {
        self.show_steps = show_steps;
        self
    }

    /// Handle one trigger (button or Enter): compute exactly once and render.
    ///
    /// Both outcomes are rendered before returning, so callers only use the
    /// returned value for bookkeeping such as exit codes.
    pub fn submit(&mut self, raw: &str) -> ApplicationResult<ComputationResult> {
        match self.service.compute(raw.trim()) {
            Ok(result) => {
                self.view.show_result(&result);
                if self.show_steps {
                    self.view.show_steps(&result.steps());
                }
                self.view.clear_error();
                Ok(result)
            }
            Err(e) => {
                debug!("submit: showing error: {}", e);
                self.view.show_error(&e.to_string());
                Err(e)
            }
        }
    }

    /// Handle an edit of the input text: only the error state is cleared.
    pub fn input_changed(&mut self) {
        self.view.clear_error();
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }
}
