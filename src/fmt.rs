use std::error::Error;
use std::fmt;

use crate::{Action, Direction, Game, InvalidSausageShape, Tile, Vec2};

impl fmt::Display for InvalidSausageShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [Vec2(ax, ay), Vec2(bx, by)] = self.0;
        write!(
            f,
            "cells ({ax},{ay}) and ({bx},{by}) are not adjacent on one axis",
        )
    }
}

impl Error for InvalidSausageShape {}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tile::Void => " ".fmt(f),
            Tile::Land => "L".fmt(f),
            Tile::Grill => "G".fmt(f),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.glyph().fmt(f)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.glyph().fmt(f)
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.field.height() {
            for x in 0..self.field.width() {
                let pos = Vec2(x, y);
                let covering = self
                    .state
                    .sausages()
                    .iter()
                    .enumerate()
                    .rev()
                    .find(|(_, sausage)| sausage.has_point(pos));
                if let Some((i, _)) = covering {
                    char::from_digit(i as u32, 10).unwrap_or('?').fmt(f)?;
                } else if pos == self.state.player() {
                    self.state.facing().fmt(f)?;
                } else {
                    self.field.tile(pos).fmt(f)?;
                }
            }
            "\n".fmt(f)?;
        }
        for (i, sausage) in self.state.sausages().iter().enumerate() {
            let [[b0, t0], [b1, t1]] = sausage.cooked();
            writeln!(f, "{i}: ({b0},{t0}) ({b1},{t1})")?;
        }
        Ok(())
    }
}
