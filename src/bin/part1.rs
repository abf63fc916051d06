use anyhow::{Context, Result};
use clap::Parser;
use seating::{CLIArgs, SeatRule};

fn main() -> Result<()> {
    seating::init_logger();
    let args = CLIArgs::parse();
    let seat_map = seating::read_seat_map(&args.input_path).with_context(|| {
        format!(
            "Failed to read map of seats layout from given input file({}).",
            args.input_path.display()
        )
    })?;

    let rule = SeatRule::adjacent();
    let (stable_map, gen_n) = seating::stabilize(seat_map, &rule, args.max_generations)
        .context("Failed to stabilize given seats layout.")?;

    println!(
        "Counting adjacent seats (leave at {} occupied), after {} generation(s) given seats layout stabilizes, and there are {} seats have been occupied.",
        rule.leave_threshold(),
        gen_n,
        stable_map.occupied_count()
    );

    Ok(())
}
