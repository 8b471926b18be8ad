use std::mem;

use arrayvec::ArrayVec;

mod fmt;
mod parse;
pub mod solve;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vec2(pub i16, pub i16);

impl Vec2 {
    fn shifted(self, dir: Direction) -> Self {
        let Vec2(dx, dy) = dir.delta();
        Vec2(self.0 + dx, self.1 + dy)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left = 0,
    Up,
    Down,
    Right,
}

impl Direction {
    pub const ALL: [Self; 4] = [Self::Left, Self::Up, Self::Down, Self::Right];

    pub fn delta(self) -> Vec2 {
        match self {
            Direction::Left => Vec2(-1, 0),
            Direction::Up => Vec2(0, -1),
            Direction::Down => Vec2(0, 1),
            Direction::Right => Vec2(1, 0),
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Right => Direction::Left,
        }
    }

    pub fn rotated_left(self) -> Self {
        match self {
            Direction::Left => Direction::Down,
            Direction::Up => Direction::Left,
            Direction::Down => Direction::Right,
            Direction::Right => Direction::Up,
        }
    }

    pub fn rotated_right(self) -> Self {
        match self {
            Direction::Left => Direction::Up,
            Direction::Up => Direction::Right,
            Direction::Down => Direction::Left,
            Direction::Right => Direction::Down,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Direction::Left => '<',
            Direction::Up => '^',
            Direction::Down => 'V',
            Direction::Right => '>',
        }
    }

    pub fn from_glyph(ch: char) -> Option<Self> {
        Some(match ch {
            '<' => Direction::Left,
            '^' => Direction::Up,
            'V' => Direction::Down,
            '>' => Direction::Right,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Forward = 0,
    Backward,
    TurnLeft,
    TurnRight,
}

impl Action {
    pub const ALL: [Self; 4] = [
        Self::Forward,
        Self::Backward,
        Self::TurnLeft,
        Self::TurnRight,
    ];

    pub fn glyph(self) -> char {
        match self {
            Action::Forward => 'F',
            Action::Backward => 'B',
            Action::TurnLeft => 'L',
            Action::TurnRight => 'R',
        }
    }

    pub fn from_glyph(ch: char) -> Option<Self> {
        Some(match ch {
            'F' => Action::Forward,
            'B' => Action::Backward,
            'L' => Action::TurnLeft,
            'R' => Action::TurnRight,
            _ => return None,
        })
    }
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    #[default]
    Void,
    Land,
    Grill,
}

#[derive(Debug, Clone)]
pub struct Field {
    width: i16,
    height: i16,
    grid: Box<[Tile]>,
}

impl Field {
    pub fn width(&self) -> i16 {
        self.width
    }

    pub fn height(&self) -> i16 {
        self.height
    }

    pub fn tile(&self, pos: Vec2) -> Tile {
        if !(0..self.width).contains(&pos.0) || !(0..self.height).contains(&pos.1) {
            return Tile::Void;
        }
        self.grid[pos.1 as usize * self.width as usize + pos.0 as usize]
    }

    pub fn is_grill(&self, pos: Vec2) -> bool {
        self.tile(pos) == Tile::Grill
    }

    pub fn is_support(&self, pos: Vec2) -> bool {
        matches!(self.tile(pos), Tile::Land | Tile::Grill)
    }

    pub fn supports(&self, sausage: &Sausage) -> bool {
        sausage.rests_on(|pos| self.is_support(pos))
    }

    pub fn grill(&self, sausage: &mut Sausage) {
        sausage.cook_on(|pos| self.is_grill(pos));
    }

    pub fn is_player_pos_valid(&self, pos: Vec2) -> bool {
        self.tile(pos) == Tile::Land
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidSausageShape(pub [Vec2; 2]);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sausage {
    cells: [Vec2; 2],
    // Per cell: (bottom, top) grill contact counts.
    cooked: [[u8; 2]; 2],
}

impl Sausage {
    pub fn new(cells: [Vec2; 2]) -> Result<Self, InvalidSausageShape> {
        let [a, b] = cells;
        let aligned =
            (a.0 == b.0 && (a.1 - b.1).abs() == 1) || (a.1 == b.1 && (a.0 - b.0).abs() == 1);
        if !aligned {
            return Err(InvalidSausageShape(cells));
        }
        Ok(Sausage {
            cells,
            cooked: [[0; 2]; 2],
        })
    }

    pub fn points(&self) -> [Vec2; 2] {
        self.cells
    }

    pub fn cooked(&self) -> [[u8; 2]; 2] {
        self.cooked
    }

    pub fn is_vertical(&self) -> bool {
        self.cells[0].0 == self.cells[1].0
    }

    pub fn is_horizontal(&self) -> bool {
        self.cells[0].1 == self.cells[1].1
    }

    pub fn is_burned(&self) -> bool {
        self.cooked.iter().flatten().any(|&cnt| cnt > 1)
    }

    pub fn is_ready(&self) -> bool {
        self.cooked.iter().flatten().all(|&cnt| cnt == 1)
    }

    pub fn has_point(&self, pos: Vec2) -> bool {
        self.cells.contains(&pos)
    }

    pub fn roll(&mut self, dir: Direction) {
        let Vec2(dx, dy) = dir.delta();
        for cell in &mut self.cells {
            *cell = Vec2(cell.0 + dx, cell.1 + dy);
        }
        // Rolling across the short axis tumbles the piece onto its other face.
        if (self.is_horizontal() && dy != 0) || (self.is_vertical() && dx != 0) {
            for faces in &mut self.cooked {
                faces.swap(0, 1);
            }
        }
    }

    pub fn cook_on(&mut self, mut is_grill: impl FnMut(Vec2) -> bool) {
        for (cell, faces) in self.cells.iter().zip(&mut self.cooked) {
            if is_grill(*cell) {
                faces[0] += 1;
            }
        }
    }

    pub fn rests_on(&self, mut is_support: impl FnMut(Vec2) -> bool) -> bool {
        self.cells.iter().any(|&cell| is_support(cell))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct State {
    sausages: Box<[Sausage]>,
    player: Vec2,
    facing: Direction,
}

impl State {
    pub fn sausages(&self) -> &[Sausage] {
        &self.sausages
    }

    pub fn player(&self) -> Vec2 {
        self.player
    }

    pub fn facing(&self) -> Direction {
        self.facing
    }

    pub fn is_winning(&self) -> bool {
        self.sausages.iter().all(Sausage::is_ready)
    }

    pub fn is_losing(&self, field: &Field) -> bool {
        self.sausages
            .iter()
            .any(|sausage| sausage.is_burned() || !field.supports(sausage))
            || !field.is_player_pos_valid(self.player)
    }

    pub fn apply(&mut self, action: Action, field: &Field) {
        let forward = self.facing;
        let backward = forward.reversed();
        match action {
            Action::Forward => {
                self.player = self.player.shifted(forward);
                // The fork tip runs one cell ahead of the player.
                self.touch_all_sausages(field, self.player.shifted(forward), forward);
            }
            Action::Backward => {
                self.player = self.player.shifted(backward);
                self.touch_all_sausages(field, self.player, backward);
            }
            Action::TurnLeft | Action::TurnRight => {
                let side = match action {
                    Action::TurnLeft => forward.rotated_left(),
                    _ => forward.rotated_right(),
                };
                self.facing = side;
                // The fork sweeps the forward corner, then settles beside the
                // player pressing backward.
                self.touch_all_sausages(field, self.player.shifted(forward).shifted(side), side);
                self.touch_all_sausages(field, self.player.shifted(side), backward);
            }
        }
    }

    pub fn expand(&self, field: &Field) -> ArrayVec<State, 4> {
        Action::ALL
            .iter()
            .map(|&action| {
                let mut next = self.clone();
                next.apply(action, field);
                next
            })
            .collect()
    }

    fn touch_all_sausages(&mut self, field: &Field, start: Vec2, dir: Direction) {
        let mut moved = vec![false; self.sausages.len()];
        let mut frontier = vec![start];
        let mut next = Vec::new();
        while !frontier.is_empty() {
            for (sausage, moved) in self.sausages.iter_mut().zip(&mut moved) {
                if *moved || !frontier.iter().any(|&pos| sausage.has_point(pos)) {
                    continue;
                }
                sausage.roll(dir);
                field.grill(sausage);
                *moved = true;
                next.extend_from_slice(&sausage.points());
            }
            frontier.clear();
            mem::swap(&mut frontier, &mut next);
        }
    }
}

#[derive(Debug, Clone)]
pub struct Game {
    pub field: Field,
    pub state: State,
}

impl Game {
    pub fn new(field: Field, sausages: Vec<Sausage>, player: Vec2, facing: Direction) -> Self {
        Game {
            field,
            state: State {
                sausages: sausages.into(),
                player,
                facing,
            },
        }
    }

    pub fn apply(&mut self, action: Action) {
        let Game { field, state } = self;
        state.apply(action, field);
    }

    pub fn is_winning(&self) -> bool {
        self.state.is_winning()
    }

    pub fn is_losing(&self) -> bool {
        self.state.is_losing(&self.field)
    }
}
