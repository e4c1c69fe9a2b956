//! Human-readable summary of a batch run.

use crate::work::RunTally;

/// Formats the final tally. `action` is the verb for the summary lines
/// ("download" or "convert"). Deterministic and completion-order independent:
/// success + failed + skipped always equals the number of dispatched items.
pub fn summary(action: &str, tally: &RunTally) -> String {
    format!(
        "All done!\n\
         {} succeeded to {action}\n\
         {} failed to {action}\n\
         {} skipped (already present)\n\
         Check the log file for details.",
        tally.success, tally.failed, tally.already_exists
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::work::Outcome;

    #[test]
    fn summary_reflects_counts() {
        let mut tally = RunTally::default();
        tally.record(&Outcome::Success);
        tally.record(&Outcome::Failed("HTTP 404".into()));
        tally.record(&Outcome::AlreadyExists);

        let text = summary("download", &tally);
        assert!(text.contains("1 succeeded to download"));
        assert!(text.contains("1 failed to download"));
        assert!(text.contains("1 skipped"));
    }
}
