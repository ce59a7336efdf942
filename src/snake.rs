/// A point on the board in pixel units. Every position the game produces is a
/// multiple of the cell size.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    /// The neighbouring position `step` pixels away in `direction`.
    pub fn shifted(self, direction: Direction, step: i32) -> Self {
        match direction {
            Direction::Up => Position { x: self.x, y: self.y - step },
            Direction::Down => Position { x: self.x, y: self.y + step },
            Direction::Left => Position { x: self.x - step, y: self.y },
            Direction::Right => Position { x: self.x + step, y: self.y },
        }
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// The snake body, head first.
///
/// Besides the live segments the snake remembers the position its tail left
/// on the last move, so that growing re-occupies that cell instead of
/// inventing a new one.
#[derive(Clone, Debug)]
pub struct Snake {
    body: Vec<Position>,
    vacated: Option<Position>,
}

impl Snake {
    /// Lays out `length` segments in a horizontal line, heading right from
    /// `head`: segment `i` sits at `head.x - i * step`.
    pub fn horizontal(head: Position, length: usize, step: i32) -> Self {
        let body = (0..length as i32)
            .map(|i| Position::new(head.x - i * step, head.y))
            .collect();
        Snake { body, vacated: None }
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn segments(&self) -> &[Position] {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Shifts every segment onto its predecessor's cell and moves the head
    /// one step in `direction`.
    pub fn advance(&mut self, direction: Direction, step: i32) {
        let new_head = self.head().shifted(direction, step);
        self.body.insert(0, new_head);
        self.vacated = self.body.pop();
    }

    /// Appends one segment at the cell the tail vacated on the last move.
    pub fn grow(&mut self) {
        if let Some(tail) = self.vacated.take() {
            self.body.push(tail);
        }
    }

    /// Whether the head overlaps a segment further back than `skip` places.
    /// The segments right behind the head can never be reached on a single
    /// turn, so they are not checked. The cell the tail left on the last move
    /// counts as the slot just past the tail.
    pub fn bites_itself(&self, skip: usize) -> bool {
        let head = self.head();
        let vacated = if self.body.len() > skip { self.vacated } else { None };
        self.body
            .iter()
            .skip(skip + 1)
            .chain(vacated.iter())
            .any(|segment| *segment == head)
    }
}
