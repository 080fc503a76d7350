use clap::Parser;
use poker_odds::classify::Category;
use poker_odds::sim::{Progress, Simulation};
use std::io::{self, BufRead, Write};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(
    name = "poker-odds",
    version,
    about = "Estimate the odds against five-card poker hand categories by simulation"
)]
struct Args {
    /// Number of hands to deal; prompts on stdin when omitted
    hands: Option<u64>,

    /// Seed the RNG for a reproducible run; defaults to OS entropy
    #[arg(long)]
    seed: Option<u64>,

    /// Hands between live progress updates; 0 reports only at the end
    #[arg(long, default_value_t = 1_000_000)]
    every: u64,
}

/// Interactive fallback: keep asking until the user supplies an unsigned
/// integer. Invalid input never reaches the simulation.
fn prompt_hands() -> io::Result<u64> {
    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("How many hands would you like to deal? ");
        io::stdout().flush()?;
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "no input"));
        }
        match line.trim().parse::<u64>() {
            Ok(n) => return Ok(n),
            Err(_) => eprintln!("please enter an unsigned integer"),
        }
    }
}

fn print_header() {
    println!();
    for cat in Category::ALL {
        print!("{:-^10}  ", cat.abbrev());
    }
    println!("\t{:8}  {:8}", "% Dealt", "Elapsed");
    println!();
}

/// Redraw the odds row in place. A category that has never occurred
/// renders as 0:1, the historical sentinel of this simulator.
fn print_row(progress: &Progress<'_>, started: Instant) {
    print!("\r");
    for cat in Category::ALL {
        let odds = progress.odds_against(cat).unwrap_or(0);
        print!("{:>7}:1   ", odds);
    }
    print!(
        "\t{:>6}%   [ {} seconds ]",
        progress.percent_complete(),
        started.elapsed().as_secs()
    );
    let _ = io::stdout().flush();
}

fn print_summary(progress: &Progress<'_>) {
    println!("\n");
    for cat in Category::ALL {
        match progress.odds_against(cat) {
            Some(odds) => println!(
                "{:<16} {:>10} in {} hands  ({}:1 against)",
                cat.label(),
                progress.count(cat),
                progress.hands_dealt(),
                odds
            ),
            None => println!(
                "{:<16} {:>10} in {} hands",
                cat.label(),
                progress.count(cat),
                progress.hands_dealt()
            ),
        }
    }
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    let hands = match args.hands {
        Some(n) => n,
        None => prompt_hands()?,
    };

    let mut sim = match args.seed {
        Some(seed) => Simulation::seeded(seed),
        None => Simulation::new(),
    };

    print_header();
    let started = Instant::now();
    sim.run_with_progress(hands, args.every, |p| print_row(&p, started));

    // Final row covers runs shorter than one reporting interval.
    let final_progress = sim.progress(hands);
    print_row(&final_progress, started);
    print_summary(&final_progress);
    Ok(())
}
