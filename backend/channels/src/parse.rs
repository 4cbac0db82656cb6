//! Three-line input protocol parser.
//!
//! Line 1: task names, comma separated. Line 2: age. Line 3: near,pc working
//! distances in cm. Every field normalizes to a defined default (empty list
//! or 0) rather than failing, so parsing is total over arbitrary text.

use lensbot_core::{tasks, ClassificationInput};

/// Split on both ASCII and zenkaku commas.
fn split_commas(line: &str) -> impl Iterator<Item = &str> {
    line.split([',', '、']).map(str::trim).filter(|s| !s.is_empty())
}

/// Leading integer of a line, 0 when absent or unparseable.
fn parse_int(line: Option<&str>) -> u32 {
    let line = match line {
        Some(l) => l.trim(),
        None => return 0,
    };
    let digits: String = line.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

/// Parse a raw message body into a classification input.
pub fn parse_message(text: &str) -> ClassificationInput {
    let mut lines = text.lines();
    let task_names: Vec<String> = lines
        .next()
        .map(|l| split_commas(l).map(str::to_owned).collect())
        .unwrap_or_default();
    let age = parse_int(lines.next());
    // Distances are positional: an empty first slot leaves near unknown.
    let distance_line = lines.next().unwrap_or("");
    let mut distances = distance_line
        .split([',', '、'])
        .map(|v| v.trim().parse().unwrap_or(0));
    let near_distance_cm = distances.next().unwrap_or(0);
    let pc_distance_cm = distances.next().unwrap_or(0);

    ClassificationInput { task_names, age, near_distance_cm, pc_distance_cm }
}

/// True if at least one name on the first line is a recognized task. Used to
/// decide between running the engine and replying with the usage example.
pub fn has_known_task(input: &ClassificationInput) -> bool {
    input.task_names.iter().any(|n| tasks::is_known_task(n))
}
