use std::fmt::Write;

use crate::models::{ParticipantProgress, ParticipantSummary};

pub fn build_report(roster: &[ParticipantProgress], summary: &ParticipantSummary) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "# Participant Progress Report");
    let _ = writeln!(output);
    let _ = writeln!(
        output,
        "{} participants enrolled, average completion {}%.",
        summary.count, summary.avg
    );
    let _ = writeln!(output);
    let _ = writeln!(output, "## Roster");

    if roster.is_empty() {
        let _ = writeln!(output, "No participants found.");
        return output;
    }

    let _ = writeln!(output, "| # | Participant | Joined | Overall |");
    let _ = writeln!(output, "|---|---|---|---|");
    for (position, participant) in roster.iter().enumerate() {
        let _ = writeln!(
            output,
            "| {} | {} | {} | {}% |",
            position + 1,
            participant.full_name,
            participant.date_of_joining,
            participant.overall_pct
        );
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Weekly Breakdown");

    for participant in roster {
        let _ = writeln!(output);
        let _ = writeln!(output, "### {}", participant.full_name);
        for week in &participant.weeks {
            let _ = writeln!(
                output,
                "- Week {}: {}/{} tabs ({}%)",
                week.week, week.completed, week.required, week.pct
            );
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawParticipantRecord;
    use crate::progress::{rank, ProgressConfig};

    #[test]
    fn report_lists_ranked_participants() {
        let config = ProgressConfig::production();
        let records = vec![
            RawParticipantRecord {
                full_name: "Dara Rashid".to_string(),
                username: "dara.rashid".to_string(),
                date_of_joining: None,
                weekly_counts: [(1, 5)].into_iter().collect(),
            },
            RawParticipantRecord {
                full_name: "Amina Yusuf".to_string(),
                username: "amina.yusuf".to_string(),
                date_of_joining: chrono::NaiveDate::from_ymd_opt(2024, 9, 2),
                weekly_counts: [(1, 10), (2, 12), (3, 12), (4, 7), (5, 4)]
                    .into_iter()
                    .collect(),
            },
        ];

        let (roster, summary) = rank(&config, Ok(records));
        let report = build_report(&roster, &summary);

        assert!(report.contains("2 participants enrolled, average completion 55.5%."));
        assert!(report.contains("| 1 | Amina Yusuf | 2024-09-02 | 100% |"));
        assert!(report.contains("| 2 | Dara Rashid | N/A | 11% |"));
        assert!(report.contains("- Week 5: 0/4 tabs (0%)"));
    }

    #[test]
    fn empty_roster_renders_placeholder() {
        let summary = crate::progress::summarize(&[]);
        let report = build_report(&[], &summary);

        assert!(report.contains("0 participants enrolled, average completion 0.0%."));
        assert!(report.contains("No participants found."));
    }
}
