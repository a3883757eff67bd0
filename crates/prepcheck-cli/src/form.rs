//! Interactive survey prompts.
//!
//! All prompting runs over generic `BufRead`/`Write` handles so the flow is
//! exercised in tests with in-memory cursors instead of a terminal.

use std::io::{BufRead, Write};

use anyhow::{Context, bail};
use prepcheck_core::{ChecklistResponse, HouseholdProfile, KnowledgeBase};

/// Everything the survey collects.
#[derive(Debug)]
pub struct SurveyAnswers {
    pub state: String,
    pub profile: HouseholdProfile,
}

/// Walk the full survey: state, disaster type, household size, kit
/// ownership, then one yes/no per checklist item.
pub fn run_survey<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    kb: &KnowledgeBase,
) -> anyhow::Result<SurveyAnswers> {
    let state = select_from_list(input, out, "Select your state", kb.regions())?;
    let disasters = kb.disaster_types_for_region(&state)?;
    let disaster_type = select_from_list(input, out, "Select disaster type", disasters)?;

    let household_size = prompt_household_size(input, out)?;
    let has_kit = prompt_yes_no(input, out, "Do you have a disaster kit?")?;

    writeln!(out, "\nChecklist - mark items you've completed:")?;
    let mut checklist = ChecklistResponse::new();
    for item in kb.checklist_template(&disaster_type)? {
        let done = prompt_yes_no(input, out, item)?;
        checklist.insert(item.clone(), done);
    }

    Ok(SurveyAnswers {
        state,
        profile: HouseholdProfile { household_size, has_kit, disaster_type, checklist },
    })
}

// ── Prompt primitives ──

fn read_line<R: BufRead>(input: &mut R) -> anyhow::Result<String> {
    let mut line = String::new();
    let n = input.read_line(&mut line).context("reading survey input")?;
    if n == 0 {
        bail!("input ended before the survey was complete");
    }
    Ok(line.trim().to_string())
}

/// Numbered pick list; re-prompts until a valid index is entered.
fn select_from_list<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
    options: &[String],
) -> anyhow::Result<String> {
    writeln!(out, "\n{prompt}:")?;
    for (i, option) in options.iter().enumerate() {
        writeln!(out, "  {:>2}. {option}", i + 1)?;
    }

    loop {
        write!(out, "> ")?;
        out.flush()?;
        let line = read_line(input)?;
        match line.parse::<usize>() {
            Ok(n) if n >= 1 && n <= options.len() => return Ok(options[n - 1].clone()),
            _ => writeln!(out, "Enter a number between 1 and {}", options.len())?,
        }
    }
}

fn prompt_household_size<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> anyhow::Result<u32> {
    loop {
        write!(out, "\nHousehold size: ")?;
        out.flush()?;
        let line = read_line(input)?;
        match line.parse::<u32>() {
            Ok(n) if n >= 1 => return Ok(n),
            _ => writeln!(out, "Enter a whole number of 1 or more")?,
        }
    }
}

fn prompt_yes_no<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> anyhow::Result<bool> {
    loop {
        write!(out, "{prompt} [y/n]: ")?;
        out.flush()?;
        let line = read_line(input)?;
        match line.to_ascii_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => writeln!(out, "Answer y or n")?,
        }
    }
}
