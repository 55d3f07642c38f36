//! Solve observer trait for diagnostics and log capture.

use sk_model::LpModel;

use crate::{OptError, Plan};

/// Callbacks invoked by [`Optimizer::solve_observed`][crate::Optimizer::solve_observed]
/// at each stage of a solve.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  Nothing an observer does can change the
/// returned plan.
///
/// # Example: print the LP text
///
/// ```rust,ignore
/// struct DumpModel;
///
/// impl SolveObserver for DumpModel {
///     fn on_model_built(&mut self, model: &LpModel) {
///         println!("{model}");
///     }
/// }
/// ```
pub trait SolveObserver {
    /// Called once the model is complete, before it goes to the backend.
    fn on_model_built(&mut self, _model: &LpModel) {}

    /// Called for each diagnostic line the solve produced, in order.
    fn on_solver_log(&mut self, _line: &str) {}

    /// Called with the finished plan.
    fn on_solved(&mut self, _plan: &Plan) {}

    /// Called when the solve fails at any stage.
    fn on_failed(&mut self, _err: &OptError) {}
}

/// A [`SolveObserver`] that does nothing.
pub struct NoopObserver;

impl SolveObserver for NoopObserver {}

/// Collects the LP text and every solver log line for later display.
#[derive(Clone, Debug, Default)]
pub struct LogCapture {
    /// LP-format rendering of the last model built.
    pub model_text: Option<String>,
    pub lines:      Vec<String>,
    /// Message of the last failure, if any.
    pub failure:    Option<String>,
}

impl LogCapture {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SolveObserver for LogCapture {
    fn on_model_built(&mut self, model: &LpModel) {
        self.model_text = Some(model.to_string());
    }

    fn on_solver_log(&mut self, line: &str) {
        self.lines.push(line.to_owned());
    }

    fn on_failed(&mut self, err: &OptError) {
        self.failure = Some(err.to_string());
    }
}

/// Forward every callback to both observers, first `A` then `B`.
impl<A: SolveObserver, B: SolveObserver> SolveObserver for (A, B) {
    fn on_model_built(&mut self, model: &LpModel) {
        self.0.on_model_built(model);
        self.1.on_model_built(model);
    }

    fn on_solver_log(&mut self, line: &str) {
        self.0.on_solver_log(line);
        self.1.on_solver_log(line);
    }

    fn on_solved(&mut self, plan: &Plan) {
        self.0.on_solved(plan);
        self.1.on_solved(plan);
    }

    fn on_failed(&mut self, err: &OptError) {
        self.0.on_failed(err);
        self.1.on_failed(err);
    }
}
