//! Result card rendering for a completed assessment.

use std::io::Write;

/// Everything the card shows after classification.
#[derive(Debug)]
pub struct Assessment {
    pub state: String,
    pub disaster_type: String,
    pub level: String,
    pub completion_percent: f64,
    pub awareness_score: u32,
    pub tips: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Print the assessment as a sectioned card.
pub fn print_assessment<W: Write>(out: &mut W, a: &Assessment) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "=== Preparedness Assessment ===")?;
    writeln!(out)?;

    writeln!(out, "Household")?;
    writeln!(out, "  {:<26} {}", "state", a.state)?;
    writeln!(out, "  {:<26} {}", "disaster_type", a.disaster_type)?;
    writeln!(out, "  {:<26} {:.1}%", "checklist_completion", a.completion_percent)?;
    writeln!(out, "  {:<26} {}", "awareness_score", a.awareness_score)?;
    writeln!(out)?;

    writeln!(out, "Result")?;
    writeln!(out, "  {:<26} {}", "preparedness_level", a.level)?;
    writeln!(out)?;

    if !a.tips.is_empty() {
        writeln!(out, "Improvement Tips")?;
        for tip in &a.tips {
            writeln!(out, "  - {tip}")?;
        }
        writeln!(out)?;
    }

    if !a.recommendations.is_empty() {
        writeln!(out, "Recommended Actions")?;
        for action in &a.recommendations {
            writeln!(out, "  - {action}")?;
        }
        writeln!(out)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assessment() -> Assessment {
        Assessment {
            state: "Kerala".to_string(),
            disaster_type: "Flood".to_string(),
            level: "Moderately Prepared".to_string(),
            completion_percent: 50.0,
            awareness_score: 5,
            tips: vec!["Review missing checklist items.".to_string()],
            recommendations: vec!["Keep sandbags ready for quick use.".to_string()],
        }
    }

    #[test]
    fn card_contains_all_sections() {
        let mut out = Vec::new();
        print_assessment(&mut out, &assessment()).unwrap();
        let rendered = String::from_utf8(out).unwrap();

        assert!(rendered.contains("=== Preparedness Assessment ==="));
        assert!(rendered.contains("Moderately Prepared"));
        assert!(rendered.contains("50.0%"));
        assert!(rendered.contains("Improvement Tips"));
        assert!(rendered.contains("- Keep sandbags ready for quick use."));
    }

    #[test]
    fn empty_lists_skip_their_sections() {
        let mut a = assessment();
        a.tips.clear();
        a.recommendations.clear();

        let mut out = Vec::new();
        print_assessment(&mut out, &a).unwrap();
        let rendered = String::from_utf8(out).unwrap();

        assert!(!rendered.contains("Improvement Tips"));
        assert!(!rendered.contains("Recommended Actions"));
    }
}
