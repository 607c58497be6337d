use crate::load::LoadedExport;
use crate::prelude::{println, *};
use colored::Colorize;

use graphmerge_core::{count_blocks, Page, PageStatus};

/// Marker printed in verbose mode for each page fed to the merger.
pub fn status_marker(status: PageStatus) -> &'static str {
    match status {
        PageStatus::Added => "+",
        PageStatus::Merged => "↺",
    }
}

pub fn print_page_status(title: &str, status: PageStatus) {
    let marker = match status {
        PageStatus::Added => status_marker(status).green(),
        PageStatus::Merged => status_marker(status).yellow(),
    };
    println!("{} {}", marker, title);
}

fn total_blocks(pages: &[Page]) -> usize {
    pages.iter().map(|page| count_blocks(&page.children)).sum()
}

/// Pages and blocks per input, followed by the merged totals.
pub fn summary_table(exports: &[LoadedExport], merged: &[Page]) -> prettytable::Table {
    let mut table = new_table();
    table.add_row(prettytable::row![
        "Source".bold().cyan(),
        "Format".bold().cyan(),
        "Pages".bold().cyan(),
        "Blocks".bold().cyan()
    ]);

    for export in exports {
        let format = if export.from_archive {
            f!("{} (zip)", export.shape.describe())
        } else {
            export.shape.describe().to_string()
        };
        table.add_row(prettytable::row![
            export.path.display().to_string().bright_white(),
            format.bright_black(),
            export.pages.len(),
            total_blocks(&export.pages)
        ]);
    }

    table.add_row(prettytable::row![
        "merged".bold().green(),
        "page list".bright_black(),
        merged.len(),
        total_blocks(merged)
    ]);

    table
}
