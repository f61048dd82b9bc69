//! Branch step evaluation.
//!
//! Given a branch step and the two lookup services, decide what the guide
//! should show: a yes/no question, a number picker, plain text, or a
//! "still loading" marker while a card is fetched.
//!
//! ## Key Components
//!
//! - [`BranchEvaluator`]: Dispatches on the step's condition
//! - [`EvalContext`]: Lookup services and config passed to every evaluation
//! - [`PromptDescriptor`]: What to show; [`PromptDescriptor::resolve`] maps
//!   an [`Answer`] back to the selected option
//! - [`EvalIssue`]: Problems recovered from during evaluation
//!
//! ## Totality
//!
//! Evaluation never fails. Unknown condition tags, missing log entries,
//! and missing cards produce informational text; option sets that don't
//! fit a yes/no question leave result slots empty for the caller to treat
//! as a dead end.

mod branch;
mod issue;
mod phrasing;
mod prompt;

pub use branch::{BranchEvaluator, EvalContext, Evaluation};
pub use issue::EvalIssue;
pub use prompt::{Answer, PromptDescriptor};
