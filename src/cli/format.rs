//! Format output dispatch helpers
//!
//! Provides a macro to eliminate repetitive format match blocks.

/// Macro to dispatch output by format with minimal boilerplate.
///
/// # Examples
///
/// ```rust,ignore
/// output_by_format!(ctx.format(),
///     json => { output_json()? },
///     human => { output_human(); },
///     records => { output_records(); }
/// );
/// ```
#[macro_export]
macro_rules! output_by_format {
    ($format:expr, json => $json:block, human => $human:block, records => $records:block) => {
        match $format {
            $crate::cli::OutputFormat::Json => $json,
            $crate::cli::OutputFormat::Human => $human,
            $crate::cli::OutputFormat::Records => $records,
        }
    };
}
