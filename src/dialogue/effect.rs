//! Effects produced by dialogue transitions
//!
//! The transition function never performs I/O; anything side-effecting
//! is returned as an `Effect` for the caller to dispatch after the reply
//! has been computed.

/// Effects to be executed after a dialogue turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Notify a human operator that a user asked for an agent.
    /// Best-effort: transport failure is logged and never surfaces
    /// in the user-facing reply.
    NotifyAgent { message: String },
}

impl Effect {
    pub fn notify_agent(message: impl Into<String>) -> Self {
        Effect::NotifyAgent {
            message: message.into(),
        }
    }
}
