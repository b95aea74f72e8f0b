use imgsweep::{cli, ui};

fn main() {
    // Setup-phase failures (unreadable reference file, missing or invalid
    // asset directory, bad config) exit non-zero. A run that completes with
    // per-file delete failures exits 0; those are visible in the report.
    if let Err(err) = cli::run() {
        ui::output::error(format!("{:#}", err));
        std::process::exit(1);
    }
}
