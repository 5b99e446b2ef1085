use std::io::{self, Write};

use clap::{Parser, Subcommand};
use color_eyre::eyre::{eyre, OptionExt};
use log::info;
use permalg::{El, Perm};

/// Walks through permutation algebra on small examples
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the built-in walkthrough (the default)
    Walkthrough,
    /// Describe a permutation given in cycle notation or as a list of images
    Inspect {
        /// Cycle notation, e.g. "(1 5)(2 3)"
        #[arg(long, conflicts_with = "images", required_unless_present = "images")]
        cycles: Option<String>,
        /// Images of 1, ..., n separated by commas, e.g. 6,2,1,5,4,3
        #[arg(long, value_delimiter = ',')]
        images: Option<Vec<El>>,
        /// Number of elements; required with --cycles
        #[arg(short, long)]
        size: Option<usize>,
        /// Also print this power of the permutation
        #[arg(short, long, allow_negative_numbers = true)]
        power: Option<i64>,
    },
    /// Print the product `left * right` of two permutations in cycle notation
    Compose {
        left: String,
        right: String,
        /// Number of elements
        #[arg(short, long)]
        size: usize,
    },
}

fn describe(out: &mut impl Write, name: &str, perm: &Perm) -> io::Result<()> {
    write!(out, "{}", perm)?;
    writeln!(out, "This is the cycle decomposition of {}: {}", name, perm.decomposition())?;
    writeln!(out, "This is the inverse of {}: ", name)?;
    write!(out, "{}", perm.inverse())?;
    writeln!(out, "This is the order of {}: {}", name, order_text(perm))
}

fn order_text(perm: &Perm) -> String {
    match perm.checked_order() {
        Some(order) => order.to_string(),
        None => "too large to fit in u128".to_owned(),
    }
}

fn walkthrough(out: &mut impl Write) -> color_eyre::Result<()> {
    let p1 = Perm::from_vec(vec![6, 2, 1, 5, 4, 3])?;
    writeln!(out, "This is an example of a permutation (call it p1): ")?;
    describe(out, "p1", &p1)?;

    let p2 = Perm::from_cycles("(1 5)(2 3)", 6)?;
    writeln!(out, "This is an example of a permutation (call it p2): ")?;
    describe(out, "p2", &p2)?;

    writeln!(out, "This is p1 * p2: ")?;
    write!(out, "{}", (&p1 * &p2)?)?;
    writeln!(out, "This is p2 * p1: ")?;
    write!(out, "{}", (&p2 * &p1)?)?;
    Ok(())
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    env_logger::init();

    let args = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command.unwrap_or(Commands::Walkthrough) {
        Commands::Walkthrough => walkthrough(&mut out)?,
        Commands::Inspect {
            cycles,
            images,
            size,
            power,
        } => {
            let perm = match (cycles, images) {
                (Some(cycles), _) => {
                    let size = size.ok_or_eyre("--size is required with --cycles")?;
                    Perm::from_cycles(&cycles, size)?
                }
                (None, Some(images)) => match size {
                    Some(size) => Perm::from_images(&images, size)?,
                    None => Perm::from_vec(images)?,
                },
                (None, None) => return Err(eyre!("either --cycles or --images is required")),
            };
            info!("inspecting permutation {:?} of size {}", perm, perm.size());

            describe(&mut out, "p", &perm)?;
            if let Some(power) = power {
                writeln!(out, "This is p ^ {}: ", power)?;
                write!(out, "{}", perm.pow(power))?;
            }
        }
        Commands::Compose { left, right, size } => {
            let left = Perm::from_cycles(&left, size)?;
            let right = Perm::from_cycles(&right, size)?;
            writeln!(out, "{}", (&left * &right)?.decomposition())?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walkthrough_output() {
        let mut out = vec![];
        walkthrough(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("This is the cycle decomposition of p1: (1 6 3)(4 5)\n"));
        assert!(text.contains("This is the order of p1: 6\n"));
        assert!(text.contains("This is the order of p2: 2\n"));
    }

    #[test]
    fn huge_order_is_reported() {
        // Disjoint cycles of every prime length up to 113 have an order beyond u128
        let mut notation = String::new();
        let mut next: El = 1;
        for len in (2..=113).filter(|&n: &El| (2..n).all(|d| n % d != 0)) {
            let elements: Vec<_> = (next..next + len).map(|el| el.to_string()).collect();
            notation.push_str(&format!("({})", elements.join(" ")));
            next += len;
        }
        let perm = Perm::from_cycles(&notation, next as usize - 1).unwrap();

        let mut out = vec![];
        describe(&mut out, "p", &perm).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("This is the order of p: too large to fit in u128\n"));
    }
}
