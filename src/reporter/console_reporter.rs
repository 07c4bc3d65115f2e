//! Console-based report renderer.

use std::io::{self, Write};

use crate::reporter::ReportSink;
use crate::AnalysisReport;

/// Format a duration in seconds as `Hh Mm`, e.g. `1h 30m`.
///
/// Pure presentation; sub-minute remainders are dropped.
pub fn format_duration(seconds: u32) -> String {
    format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60)
}

/// Renders analysis results to the console.
///
/// Formats the top-N tables and the misbehavior summary in a
/// human-readable format suitable for terminal output.
pub struct ConsoleReporter {
    /// Whether to print per-network lease durations with the rankings.
    verbose: bool,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self { verbose: false }
    }

    /// Enable or disable verbose output.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    fn write_report<W: Write>(&self, out: &mut W, report: &AnalysisReport) -> io::Result<()> {
        writeln!(out, "--- Top {} DHCP Clients ---", report.top_clients.len())?;
        for (client, count) in &report.top_clients {
            writeln!(out, "Client: {}, Leases: {}", client, count)?;
        }

        writeln!(
            out,
            "\n--- Top {} Networks by Lease Count ---",
            report.top_networks.len()
        )?;
        for (network, count) in &report.top_networks {
            if self.verbose {
                match report.lease_durations.get(network.as_str()) {
                    Some(&secs) => writeln!(
                        out,
                        "Network: {}, Leases: {} (lease time {})",
                        network,
                        count,
                        format_duration(secs)
                    )?,
                    None => writeln!(out, "Network: {}, Leases: {}", network, count)?,
                }
            } else {
                writeln!(out, "Network: {}, Leases: {}", network, count)?;
            }
        }

        writeln!(
            out,
            "\n--- Misbehaving Clients ({} total) ---",
            report.misbehaving_client_count
        )?;
        for (client, network, count) in &report.misbehavior_summary {
            writeln!(
                out,
                "Client: {} misbehaved {} times on Network: {}",
                client, count, network
            )?;
        }

        Ok(())
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportSink for ConsoleReporter {
    fn render(&self, report: &AnalysisReport) {
        let mut stdout = io::stdout().lock();
        let _ = self.write_report(&mut stdout, report);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn sample_report() -> AnalysisReport {
        AnalysisReport {
            top_clients: vec![
                ("aa:bb:cc:dd:ee:ff".to_string(), 12),
                ("11:22:33:44:55:66".to_string(), 3),
            ],
            top_networks: vec![("10.10.0.0".to_string(), 15)],
            lease_durations: HashMap::from([("10.10.0.0".to_string(), 5400)]),
            misbehavior_summary: vec![(
                "aa:bb:cc:dd:ee:ff".to_string(),
                "10.10.0.0".to_string(),
                4,
            )],
            misbehaving_client_count: 1,
        }
    }

    fn render_to_string(reporter: &ConsoleReporter, report: &AnalysisReport) -> String {
        let mut buf = Vec::new();
        reporter.write_report(&mut buf, report).unwrap();
        String::from_utf8(buf).unwrap()
    }

    mod format_duration_tests {
        use super::*;

        #[test]
        fn whole_hours() {
            assert_eq!(format_duration(3600), "1h 0m");
            assert_eq!(format_duration(7200), "2h 0m");
        }

        #[test]
        fn hours_and_minutes() {
            assert_eq!(format_duration(5400), "1h 30m");
        }

        #[test]
        fn under_an_hour() {
            assert_eq!(format_duration(600), "0h 10m");
        }

        #[test]
        fn sub_minute_remainder_dropped() {
            assert_eq!(format_duration(3659), "1h 0m");
        }

        #[test]
        fn zero() {
            assert_eq!(format_duration(0), "0h 0m");
        }
    }

    mod rendering_tests {
        use super::*;

        #[test]
        fn renders_all_sections() {
            let output = render_to_string(&ConsoleReporter::new(), &sample_report());

            assert!(output.contains("--- Top 2 DHCP Clients ---"));
            assert!(output.contains("Client: aa:bb:cc:dd:ee:ff, Leases: 12"));
            assert!(output.contains("--- Top 1 Networks by Lease Count ---"));
            assert!(output.contains("Network: 10.10.0.0, Leases: 15"));
            assert!(output.contains("--- Misbehaving Clients (1 total) ---"));
            assert!(output
                .contains("Client: aa:bb:cc:dd:ee:ff misbehaved 4 times on Network: 10.10.0.0"));
        }

        #[test]
        fn verbose_includes_lease_durations() {
            let reporter = ConsoleReporter::new().with_verbose(true);
            let output = render_to_string(&reporter, &sample_report());
            assert!(output.contains("(lease time 1h 30m)"));
        }

        #[test]
        fn non_verbose_omits_lease_durations() {
            let output = render_to_string(&ConsoleReporter::new(), &sample_report());
            assert!(!output.contains("lease time"));
        }

        #[test]
        fn empty_report_still_renders_headers() {
            let report = AnalysisReport::default();
            let output = render_to_string(&ConsoleReporter::new(), &report);
            assert!(output.contains("--- Misbehaving Clients (0 total) ---"));
        }
    }
}
