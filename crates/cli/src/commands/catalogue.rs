//! Offline catalogue inspection.
//!
//! # Usage
//!
//! ```bash
//! sd-cli catalogue list
//! sd-cli catalogue show product-details
//! sd-cli catalogue check
//! ```

use saleor_dashboard_admin::saleor::lint::{self, DocumentIssue};
use saleor_dashboard_admin::saleor::{CATALOGUE, SaleorError, catalogue};
use thiserror::Error;

/// Errors from catalogue commands.
#[derive(Debug, Error)]
pub enum CatalogueError {
    /// No entry has the requested key.
    #[error(transparent)]
    Lookup(#[from] SaleorError),

    /// Example variables failed to serialize.
    #[error("Example variables: {0}")]
    Example(#[from] serde_json::Error),

    /// The lint pass found problems.
    #[error("{0} lint issue(s) found")]
    Lint(usize),
}

/// Print one line per entry: key, kind and wire operation name.
pub fn list() {
    let width = CATALOGUE
        .iter()
        .map(|entry| entry.key.len())
        .max()
        .unwrap_or(0);

    #[allow(clippy::print_stdout)]
    {
        for entry in CATALOGUE {
            println!(
                "{:width$}  {:8}  {}",
                entry.key, entry.kind, entry.operation_name
            );
        }
    }
}

/// Print an entry's composed document and example variables.
///
/// # Errors
///
/// Returns `CatalogueError::Lookup` for an unknown key.
pub fn show(key: &str) -> Result<(), CatalogueError> {
    let entry = catalogue::find(key)?;
    let example = serde_json::to_string_pretty(&entry.example()?)?;

    #[allow(clippy::print_stdout)]
    {
        println!("# {} ({} {})", entry.key, entry.kind, entry.operation_name);
        println!("{}", entry.document().trim_end());
        println!();
        println!("# Example variables");
        println!("{example}");
    }
    Ok(())
}

/// Lint every document and report each issue.
///
/// # Errors
///
/// Returns `CatalogueError::Lint` when any issue is found.
pub fn check() -> Result<(), CatalogueError> {
    let issues = lint::lint_catalogue();
    report(&issues)?;

    tracing::info!(entries = CATALOGUE.len(), "Catalogue is clean");
    Ok(())
}

fn report(issues: &[DocumentIssue]) -> Result<(), CatalogueError> {
    if issues.is_empty() {
        return Ok(());
    }
    for issue in issues {
        tracing::error!("{issue}");
    }
    Err(CatalogueError::Lint(issues.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_unknown_key() {
        let err = show("no-such-entry").expect_err("unknown key");
        assert!(matches!(
            err,
            CatalogueError::Lookup(SaleorError::UnknownEntry(_))
        ));
    }

    #[test]
    fn test_check_passes() {
        check().expect("catalogue lints clean");
    }

    #[test]
    fn test_report_without_issues() {
        assert!(report(&[]).is_ok());
    }
}
