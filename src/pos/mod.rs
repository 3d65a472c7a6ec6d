//! Sale-processing core: validation, the per-terminal queue, the atomic
//! executor, and post-commit view notification.

pub mod executor;
pub mod notifier;
pub mod observers;
pub mod queue;
pub mod validator;
