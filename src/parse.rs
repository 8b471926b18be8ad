use std::str::FromStr;

use anyhow::{bail, ensure, Context, Result};

use crate::{Direction, Field, Game, Sausage, Tile, Vec2};

impl Field {
    pub fn from_rows(rows: &[&str]) -> Result<Self> {
        let height = rows.len();
        let width = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0);
        let mut grid = vec![Tile::Void; width * height];
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                grid[y * width + x] = match ch {
                    ' ' => Tile::Void,
                    'L' => Tile::Land,
                    'G' => Tile::Grill,
                    _ => bail!("Invalid tile: {ch:?}"),
                };
            }
        }
        Ok(Field {
            width: width as _,
            height: height as _,
            grid: grid.into(),
        })
    }
}

impl FromStr for Game {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s.lines().collect::<Vec<_>>();
        ensure!(!rows.is_empty(), "Empty map");
        let height = rows.len();
        let width = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0);

        let mut grid = vec![Tile::Void; width * height];
        let mut player = None;
        let mut segments = vec![Vec::new(); 10];
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                let pos = Vec2(x as _, y as _);
                grid[y * width + x] = match ch {
                    ' ' => Tile::Void,
                    'L' => Tile::Land,
                    'G' => Tile::Grill,
                    '0'..='9' => {
                        segments[ch as usize - '0' as usize].push(pos);
                        Tile::Land
                    }
                    _ => match Direction::from_glyph(ch) {
                        Some(dir) => {
                            ensure!(player.is_none(), "Multiple players");
                            player = Some((pos, dir));
                            Tile::Land
                        }
                        None => bail!("Invalid cell: {ch:?}"),
                    },
                };
            }
        }

        let field = Field {
            width: width as _,
            height: height as _,
            grid: grid.into(),
        };

        let used = segments
            .iter()
            .take_while(|cells| !cells.is_empty())
            .count();
        ensure!(
            segments[used..].iter().all(|cells| cells.is_empty()),
            "Sausage markers must be contiguous digits from 0",
        );
        let sausages = segments[..used]
            .iter()
            .zip(0..)
            .map(|(cells, i)| {
                ensure!(
                    cells.len() == 2,
                    "Sausage {i} must cover exactly 2 cells, got {}",
                    cells.len(),
                );
                Sausage::new([cells[0], cells[1]]).with_context(|| format!("Sausage {i}"))
            })
            .collect::<Result<Vec<_>>>()?;

        let (player, facing) = player.context("Missing player")?;
        Ok(Game::new(field, sausages, player, facing))
    }
}
