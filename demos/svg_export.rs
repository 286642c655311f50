//! Print an accepted diagram as SVG for offline inspection
//!
//! Usage: pipe stdout into a .svg file and open it in a browser.

use shattered_mirror::*;

fn main() -> Result<()> {
    let config = PuzzleConfigBuilder::new()
        .seed(7)
        .shard_count(10)?
        .build()?;

    let puzzle = ShatterPuzzle::generate(config)?;
    println!("{}", puzzle.to_svg());

    Ok(())
}
