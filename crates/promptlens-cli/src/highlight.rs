//! Terminal rendering of tagged element spans.

use colored::{Color, Colorize};
use promptlens::TaggedSpan;

/// Background color for each built-in element.
fn element_color(element: &str) -> Color {
    match element {
        "Instruction" => Color::Blue,
        "Context" => Color::Green,
        "Input Data" => Color::Yellow,
        "Output Format" => Color::Magenta,
        "Role" => Color::BrightMagenta,
        "Delimiter" => Color::Red,
        "Example Marker" => Color::BrightYellow,
        "CoT Trigger" => Color::Cyan,
        _ => Color::White,
    }
}

/// Render the prompt with per-element background highlighting.
///
/// Span offsets are character positions. Where spans from different rules
/// overlap, the span listed first (earlier rule in the table) wins.
pub fn render(text: &str, spans: &[TaggedSpan]) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut owner: Vec<Option<&str>> = vec![None; chars.len()];

    for span in spans {
        for slot in owner
            .iter_mut()
            .take(span.end.min(chars.len()))
            .skip(span.start)
        {
            if slot.is_none() {
                *slot = Some(span.element.as_str());
            }
        }
    }

    let mut out = String::new();
    let mut i = 0;
    while i < chars.len() {
        let current = owner[i];
        let mut j = i + 1;
        while j < chars.len() && owner[j] == current {
            j += 1;
        }

        let segment: String = chars[i..j].iter().collect();
        match current {
            Some(element) => {
                out.push_str(&segment.black().on_color(element_color(element)).to_string());
            }
            None => out.push_str(&segment),
        }
        i = j;
    }

    out
}

/// One-line legend of the elements found in the prompt.
pub fn legend<'a, I>(elements: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let entries: Vec<String> = elements
        .into_iter()
        .map(|element| {
            element
                .black()
                .on_color(element_color(element))
                .to_string()
        })
        .collect();
    entries.join(" ")
}
