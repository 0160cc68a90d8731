// Result of one submission attempt that reached the gateway.
//
// Purpose
// - Tell the orchestrator what to render: a welcome banner, an inline
//   server-side field error, or an error banner.
//
// Lifecycle
// - Created per attempt, consumed right away to update the view, then dropped.

use crate::modules::registration::core::fields::FormField;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// 2xx response. `display_name` is what the welcome banner greets.
    Success { display_name: String },
    /// Non-2xx response without a field to attach it to; rendered as a banner.
    Conflict { message: String },
    /// Non-2xx response the server tied to one field, such as a duplicate email.
    ValidationRejected { field: FormField, message: String },
    /// No response at all.
    NetworkFailure { message: String },
}
