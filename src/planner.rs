//! Planner state: the current parameters and the result derived from them
//!
//! Every mutation recomputes the full result and hands it to the
//! subscribed observers before returning, so whatever renders the result
//! never sees a stale value.

use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

use crate::calculator::{self, CostParameters, CostResult};
use crate::input::{self, Field};

pub const DEFAULT_TITLE: &str = "Ice Planner";
pub const DEFAULT_TEAM_NAME: &str = "My Team";

/// Receives every freshly computed result
pub trait CostObserver {
    fn on_result(&mut self, result: &CostResult);
}

impl<F> CostObserver for F
where
    F: FnMut(&CostResult),
{
    fn on_result(&mut self, result: &CostResult) {
        self(result)
    }
}

/// Owns one team's cost parameters and their latest result
pub struct Planner {
    title: String,
    team_name: String,
    params: CostParameters,
    result: CostResult,
    observers: Vec<Box<dyn CostObserver>>,
}

impl Default for Planner {
    fn default() -> Self {
        Self::new(CostParameters::default())
    }
}

impl std::fmt::Debug for Planner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Planner")
            .field("title", &self.title)
            .field("team_name", &self.team_name)
            .field("params", &self.params)
            .field("result", &self.result)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Planner {
    /// Create a planner and derive its initial result immediately
    pub fn new(params: CostParameters) -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            team_name: DEFAULT_TEAM_NAME.to_string(),
            params,
            result: calculator::compute(&params),
            observers: Vec::new(),
        }
    }

    pub fn with_team_name(mut self, team_name: impl Into<String>) -> Self {
        self.team_name = team_name.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn team_name(&self) -> &str {
        &self.team_name
    }

    pub fn params(&self) -> &CostParameters {
        &self.params
    }

    pub fn result(&self) -> &CostResult {
        &self.result
    }

    /// Register an observer; it sees results computed from now on
    pub fn subscribe(&mut self, observer: impl CostObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Register an observer and keep a handle to it
    ///
    /// The planner holds one reference, the caller the other, so the
    /// observer can still be read after results start arriving.
    pub fn subscribe_shared<T>(&mut self, observer: T) -> Rc<RefCell<T>>
    where
        T: CostObserver + 'static,
    {
        let shared = Rc::new(RefCell::new(observer));
        let sink = Rc::clone(&shared);
        self.subscribe(move |result: &CostResult| sink.borrow_mut().on_result(result));
        shared
    }

    /// Update one parameter and recompute
    pub fn set(&mut self, field: Field, value: f64) {
        field.write(&mut self.params, value);
        debug!(field = field.key(), value, "Parameter updated");
        self.recompute();
    }

    /// Update one parameter from raw input text and recompute
    pub fn set_input(&mut self, field: Field, raw: &str) {
        self.set(field, input::coerce_number(raw));
    }

    /// Replace the whole parameter set and recompute
    pub fn replace_params(&mut self, params: CostParameters) {
        self.params = params;
        self.recompute();
    }

    pub fn set_team_name(&mut self, team_name: impl Into<String>) {
        self.team_name = team_name.into();
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    fn recompute(&mut self) {
        self.result = calculator::compute(&self.params);
        debug!(
            total = self.result.total,
            per_player = self.result.per_player,
            "Cost recomputed"
        );

        for observer in &mut self.observers {
            observer.on_result(&self.result);
        }
    }
}
