use crate::load::{load_export, LoadedExport};
use crate::prelude::{println, *};
use crate::report::{print_page_status, summary_table};
use crate::write::write_pages;
use crate::App;
use colored::Colorize;

use graphmerge_core::{DuplicatePolicy, Page, PageMerger, UidAllocator};

/// Load every export, merge them, and write (or just report) the result.
pub fn run(app: App) -> Result<()> {
    let exports = app
        .exports
        .iter()
        .map(|path| load_export(path))
        .collect::<Result<Vec<_>>>()?;

    let policy = DuplicatePolicy::from_keep_last(app.keep_last);
    let mut uids = match app.seed {
        Some(seed) => UidAllocator::seeded(seed),
        None => UidAllocator::new(),
    };

    let merged = merge_exports(&exports, policy, &mut uids, app.verbose);

    log::info!(
        "merged {} exports into {} pages ({:?})",
        exports.len(),
        merged.len(),
        policy
    );
    println!("{} merged {} pages", "✔".green(), merged.len());

    if app.verbose {
        summary_table(&exports, &merged).printstd();
    }

    if app.dry_run {
        println!("(dry-run) no file written");
        return Ok(());
    }

    let written = write_pages(&app.output, &merged, app.pretty)?;
    println!("{} wrote {}", "✓".green(), written.display());

    Ok(())
}

/// Merge loaded exports page by page, in input order.
///
/// All input uids are reserved up front so generated ones never repeat them.
pub fn merge_exports(
    exports: &[LoadedExport],
    policy: DuplicatePolicy,
    uids: &mut UidAllocator,
    verbose: bool,
) -> Vec<Page> {
    uids.reserve_pages(exports.iter().flat_map(|export| &export.pages));

    let mut merger = PageMerger::new(policy, uids);
    for export in exports {
        for page in &export.pages {
            let (title, status) = merger.add(page);
            if verbose {
                print_page_status(&title, status);
            }
        }
    }
    merger.finish()
}
