use std::path::Path;

use anyhow::{ensure, Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use sausage_solver::{solve, Game};

const PUZZLES: &[(&str, &str)] = &[
    (
        "plates",
        concat!(
            "LGGGL\n",
            "001LL\n",
            "LL122\n",
            "^GGGL\n",
        ),
    ),
    (
        "detour",
        concat!(
            " L00LL\n",
            "LL   L\n",
            "L  G L\n",
            "L G  L\n",
            "^   LL\n",
            "LLLLL\n",
        ),
    ),
    (
        "twins",
        concat!(
            "LLLLL\n",
            "LG01G\n",
            "LG01G\n",
            "^LLLL\n",
        ),
    ),
];

fn main() -> Result<()> {
    let arg = std::env::args().nth(1);
    let arg = arg.as_deref().unwrap_or(PUZZLES[0].0);

    let (name, map) = match PUZZLES.iter().find(|(name, _)| *name == arg) {
        Some(&(name, map)) => (name.to_owned(), map.to_owned()),
        None => {
            ensure!(
                Path::new(arg).exists(),
                "Unknown puzzle {arg:?}, expecting a map file or one of: {}",
                PUZZLES
                    .iter()
                    .map(|(name, _)| *name)
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            let map = std::fs::read_to_string(arg).context("Failed to read the map")?;
            (arg.to_owned(), map)
        }
    };

    let game = map.parse::<Game>().context("Failed to parse the map")?;
    eprintln!("{name}:\n{game}");

    let bar = ProgressBar::new_spinner();
    bar.set_style(ProgressStyle::with_template("{spinner} {pos} moves tried")?);
    let solution = solve::bfs(&game, || bar.inc(1));
    bar.finish_and_clear();

    match solution {
        None => println!("{}", style("No solution").red()),
        Some(actions) => {
            println!(
                "{}",
                style(format!("Solved in {} moves", actions.len())).green()
            );
            let mut game = game;
            println!("0)\n{game}");
            for (action, i) in actions.iter().zip(1..) {
                game.apply(*action);
                println!("{i}) {action}\n{game}");
            }
        }
    }
    Ok(())
}
