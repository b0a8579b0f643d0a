//! Binary entry point for the `snapmatch` command-line tool.
//!
//! Parses arguments, expands inputs, scans every file on its own encoder
//! (files in parallel), prints one report line per file and a totals line
//! when there are several.  Exits 1 if any file could not be scanned or
//! failed verification.

use snapmatch::analyze::{scan_files, ScanReport};
use snapmatch::cli::args::parse_args;
use snapmatch::cli::constants::{set_display_level, AUTHOR, PROGRAM_NAME};
use snapmatch::cli::report::{format_report, format_totals, header};
use snapmatch::config::effective_workers;
use snapmatch::inputs::collect_inputs;

fn run() -> anyhow::Result<i32> {
    let args = parse_args(std::env::args_os())?;
    set_display_level(args.display_level);

    snapmatch::displaylevel!(
        3,
        "*** {} v{} {}-bit, by {} ***\n",
        PROGRAM_NAME,
        snapmatch::version_string(),
        std::mem::size_of::<*const ()>() * 8,
        AUTHOR
    );

    let files = collect_inputs(&args.inputs, args.recursive)?;
    if files.is_empty() {
        snapmatch::displaylevel!(1, "{}: no input files\n", PROGRAM_NAME);
        return Ok(1);
    }
    snapmatch::displaylevel!(
        4,
        "level {}, blocks of {} bytes, {} workers, {} files\n",
        args.options.level,
        args.options.block_size,
        effective_workers(args.workers),
        files.len()
    );

    let reports = scan_files(&files, &args.options, args.workers)?;

    if snapmatch::cli::constants::display_level() >= 2 {
        snapmatch::displayout!("{}\n", header());
    }
    let mut totals = ScanReport::default();
    let mut scanned = 0usize;
    let mut failed = 0usize;
    for file in &reports {
        match &file.result {
            Ok(r) => {
                snapmatch::displayout!(
                    "{}\n",
                    format_report(&file.path.display().to_string(), args.options.level, r)
                );
                totals.accumulate(r);
                scanned += 1;
            }
            Err(e) => {
                snapmatch::displaylevel!(1, "{}: {:#}\n", PROGRAM_NAME, e);
                failed += 1;
            }
        }
    }
    if scanned > 1 {
        snapmatch::displayout!("{}\n", format_totals(scanned, args.options.level, &totals));
    }
    if args.options.verify && failed == 0 {
        snapmatch::displaylevel!(3, "all {} inputs verified\n", scanned);
    }

    Ok(if failed == 0 { 0 } else { 1 })
}

fn main() {
    let code = match run() {
        Ok(code) => code,
        Err(e) => {
            // clap renders its own usage/help/version output.
            if let Some(clap_err) = e.downcast_ref::<clap::Error>() {
                let _ = clap_err.print();
                clap_err.exit_code()
            } else {
                snapmatch::displaylevel!(1, "{}: {:#}\n", PROGRAM_NAME, e);
                1
            }
        }
    };
    std::process::exit(code);
}
