//! Canonical logging macros
//!
//! These macros provide a structured, consistent way to log validation runs.

/// Log the start of a validation run
///
/// # Example
///
/// ```
/// # use plumbline_core::log_run_start;
/// log_run_start!("compare_trees");
/// log_run_start!("compare_trees", run_id = "0192f3a0");
/// ```
#[macro_export]
macro_rules! log_run_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = plumbline_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = plumbline_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of a validation run
///
/// # Example
///
/// ```
/// # use plumbline_core::log_run_end;
/// log_run_end!("compare_trees", duration_ms = 42);
/// ```
#[macro_export]
macro_rules! log_run_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = plumbline_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = plumbline_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log a validation run that aborted on a structural input error
///
/// # Example
///
/// ```ignore
/// # use plumbline_core::{log_run_error, errors::{StructuralInputError, TreeSide}};
/// let err = StructuralInputError::MissingRoot { side: TreeSide::Actual };
/// log_run_error!("compare_trees", err, duration_ms = 10);
/// ```
#[macro_export]
macro_rules! log_run_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = plumbline_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_code = $err.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = plumbline_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_code = $err.code(),
            $($field)*
        );
    }};
}
