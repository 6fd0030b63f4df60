use crate::locale::Direction;

/// Lines starting with one of these markers are treated as preparation
/// steps. Only the first four markers are recognized, matching the
/// historical behavior: a fifth step line ends up in the ingredients
/// block. Known bug, kept for compatibility.
const STEP_MARKERS: [&str; 4] = ["1.", "2.", "3.", "4."];

/// Section-header artifacts the model sometimes leaks in the wrong
/// language. Lines containing any of these are dropped outright.
const LATIN_ARTIFACTS: [&str; 4] = ["ingredients", "preparation", "temps", "step"];
const ARABIC_ARTIFACTS: [&str; 3] = ["مقادير", "طريقة", "خطوة"];

/// A recipe response split into display sections.
///
/// Derived read-only view over the raw generation output: after the
/// artifact filter, every surviving line lands in exactly one of the
/// title, the ingredients block or the steps block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassifiedRecipe {
    /// First non-filtered line; empty when nothing survives the filter
    pub title: String,
    /// Remaining lines without a step marker
    pub ingredients_block: Vec<String>,
    /// Remaining lines starting with a step marker
    pub steps_block: Vec<String>,
    /// Filtered lines re-joined with newlines
    pub full_text: String,
}

fn is_artifact(line: &str, direction: Direction) -> bool {
    match direction {
        // Arabic output: drop leaked Latin section headers
        Direction::RightToLeft => {
            let lowered = line.to_lowercase();
            LATIN_ARTIFACTS.iter().any(|word| lowered.contains(word))
        }
        // French output: drop leaked Arabic section headers
        Direction::LeftToRight => ARABIC_ARTIFACTS.iter().any(|word| line.contains(word)),
    }
}

/// Split raw generation output into title, ingredients and steps.
///
/// This is a best-effort heuristic over free-form text, not a parse.
/// Filtered artifact lines are discarded, not relocated. Never fails:
/// empty input yields an empty `ClassifiedRecipe`.
pub fn classify(text: &str, direction: Direction) -> ClassifiedRecipe {
    let kept: Vec<&str> = text
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .filter(|line| !is_artifact(line, direction))
        .collect();

    let title = kept.first().map(|line| line.to_string()).unwrap_or_default();

    let mut ingredients_block = Vec::new();
    let mut steps_block = Vec::new();
    for line in kept.iter().skip(1) {
        if STEP_MARKERS.iter().any(|marker| line.starts_with(marker)) {
            steps_block.push(line.to_string());
        } else {
            ingredients_block.push(line.to_string());
        }
    }

    ClassifiedRecipe {
        title,
        ingredients_block,
        steps_block,
        full_text: kept.join("\n"),
    }
}
