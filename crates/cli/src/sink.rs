use lagoon::api::{Report, ReportSink};

/// Logs each result as a structured `tracing` event and keeps the last one.
#[derive(Debug, Default)]
pub struct TracingSink {
    pub last: Option<Report>,
}

impl ReportSink for TracingSink {
    fn report(&mut self, report: &Report) {
        tracing::info!(
            mode = ?report.mode,
            moves = report.moves,
            area = %report.area,
            "lagoon_area"
        );
        tracing::info!(
            "The solution of PART{} is: {}",
            report.mode.part(),
            report.area
        );
        self.last = Some(*report);
    }
}
