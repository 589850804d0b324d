//! Reference deformation scenario, written out as a point cloud.
//!
//! Builds a 9x9x9 volume with random colours, pushes cell (7, 7, 8) by
//! (1, 1, 3), and prints `x y z r g b` per cell on stdout. A summary goes
//! to stderr so the output can be piped straight into a plotting tool.

use std::io::{self, BufWriter, Write};

use chainmail_bench::{reference_profile, write_point_cloud, REFERENCE_INITIAL, REFERENCE_SEED};
use chainmail_propagator::Deform;
use chainmail_test_utils::fixtures::colored_volume;

fn main() -> io::Result<()> {
    let mut volume = colored_volume(reference_profile(), 42);
    let report = match volume.deform(REFERENCE_SEED, REFERENCE_INITIAL) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("deform failed: {e}");
            std::process::exit(1);
        }
    };

    let (lo, hi) = volume.bounds();
    eprintln!(
        "seed {} displaced by {}: {} of {} cells moved, max depth {}",
        report.seed(),
        report.initial(),
        report.cells_reached(),
        volume.cell_count(),
        report.max_depth()
    );
    eprintln!("bounds: {lo} .. {hi}");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_point_cloud(&volume, &mut out)?;
    out.flush()
}
