use std::sync::LazyLock;

use regex::Regex;

/// Canonical replacement for every highlights header variant.
pub const HIGHLIGHTS: &str = "#highlights";

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

static DATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<month>[A-Za-z]{3,9})\.?\s*(?P<day>\d{1,2})(?:st|nd|rd|th)?,?\s*(?P<year>\d{4})$",
    )
    .expect("date regex must compile")
});

static READWISE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^#+\s*#highlights\s+first\s+synced.+").expect("readwise regex must compile")
});

static HIGHLIGHTS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)#highlights").expect("highlights regex must compile"));

// "* highlights", "## Highlights:", "- #highlights"
static MARKED_HIGHLIGHTS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:[*#-]+\s*)+#?highlights:?$").expect("marked highlights regex must compile")
});

static ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bid::\s+\S+").expect("id regex must compile"));

/// Format a day of the month with its English ordinal suffix.
///
/// 11, 12 and 13 always take "th"; otherwise the last digit decides.
pub fn ordinal(day: u32) -> String {
    let suffix = if (11..=13).contains(&(day % 100)) {
        "th"
    } else {
        match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        }
    };
    format!("{day}{suffix}")
}

/// Resolve a month word by its first three letters, case-insensitive.
fn month_name(word: &str) -> Option<&'static str> {
    let prefix = word.get(..3)?;
    MONTHS
        .iter()
        .find(|month| month[..3].eq_ignore_ascii_case(prefix))
        .copied()
}

/// Rewrite a daily-note title into Roam's long form.
///
/// Returns `None` when the title is not a recognizable date.
pub fn canonical_date(title: &str) -> Option<String> {
    let captures = DATE_REGEX.captures(title.trim())?;

    let month = month_name(&captures["month"])?;
    let day: u32 = captures["day"].parse().ok()?;
    if !(1..=31).contains(&day) {
        return None;
    }

    Some(format!("{month} {}, {}", ordinal(day), &captures["year"]))
}

/// Canonical form of a page title: the long-form date for daily notes, the
/// trimmed title otherwise.
///
/// "Sep 24, 2023", "sept. 24th 2023" and "September 24th, 2023" all become
/// "September 24th, 2023".
pub fn canonicalize_title(title: &str) -> String {
    canonical_date(title).unwrap_or_else(|| title.trim().to_string())
}

/// Normalize block text for display and for duplicate detection.
///
/// - Any highlights header variant (Readwise sync line, `## #highlights`,
///   `* highlights`, or any text mentioning `#highlights`) becomes `#highlights`
/// - `id:: <token>` properties are removed
/// - Whitespace runs collapse to a single space, ends are trimmed
pub fn clean_text(text: &str) -> String {
    let trimmed = text.trim();
    let text = READWISE_REGEX.replace(trimmed, HIGHLIGHTS);

    if HIGHLIGHTS_REGEX.is_match(&text) {
        return HIGHLIGHTS.to_string();
    }

    // Repeat until stable: "id::id:: a" only exposes its outer marker once the
    // inner one is gone.
    let mut text = text.into_owned();
    while ID_REGEX.is_match(&text) {
        text = ID_REGEX.replace_all(&text, "").into_owned();
    }
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");

    // Checked last: removing an id property can expose a bare marker line.
    if MARKED_HIGHLIGHTS_REGEX.is_match(&text) {
        return HIGHLIGHTS.to_string();
    }

    text
}
