use std::fmt;

/// The four approaches to the intersection, in the cyclic order
/// North -> East -> South -> West -> North used for right-turn detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "North",
            Direction::East => "East",
            Direction::South => "South",
            Direction::West => "West",
        };
        write!(f, "{}", name)
    }
}

/// Number of valid movements through a four-way intersection
/// (16 origin x destination combinations minus the 4 with origin = destination).
pub const MOVEMENT_COUNT: usize = 12;

/// The path a vehicle intends to traverse: where it arrives from and
/// where it is heading. origin != destination always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Movement {
    pub origin: Direction,
    pub destination: Direction,
}

impl Movement {
    /// All 12 valid movements, ordered by slot (see [`Movement::slot`]).
    pub const ALL: [Movement; MOVEMENT_COUNT] = [
        Movement { origin: Direction::North, destination: Direction::East },
        Movement { origin: Direction::North, destination: Direction::South },
        Movement { origin: Direction::North, destination: Direction::West },
        Movement { origin: Direction::East, destination: Direction::North },
        Movement { origin: Direction::East, destination: Direction::South },
        Movement { origin: Direction::East, destination: Direction::West },
        Movement { origin: Direction::South, destination: Direction::North },
        Movement { origin: Direction::South, destination: Direction::East },
        Movement { origin: Direction::South, destination: Direction::West },
        Movement { origin: Direction::West, destination: Direction::North },
        Movement { origin: Direction::West, destination: Direction::East },
        Movement { origin: Direction::West, destination: Direction::South },
    ];

    pub fn new(origin: Direction, destination: Direction) -> Self {
        assert!(
            origin != destination,
            "invalid movement: a vehicle cannot both arrive from and head {}",
            origin
        );
        Self { origin, destination }
    }

    /// Raw table code `origin * 4 + destination`, range 0..16 with the four
    /// diagonal codes (origin = destination) unused.
    fn code(self) -> usize {
        self.origin.index() * 4 + self.destination.index()
    }

    /// Compact index in 0..12, shared by the occupancy table and the wakeup
    /// channel bank. The diagonal codes are exactly the multiples of 5, so
    /// each valid code collapses by one unused slot per diagonal below it.
    pub fn slot(self) -> usize {
        let code = self.code();
        code - code / 5 - 1
    }

    /// One of the four fixed right-turn combinations in the cyclic ordering.
    pub fn is_right_turn(self) -> bool {
        matches!(
            (self.origin, self.destination),
            (Direction::North, Direction::West)
                | (Direction::East, Direction::North)
                | (Direction::South, Direction::East)
                | (Direction::West, Direction::South)
        )
    }

    /// Whether two movements may occupy the intersection at the same time.
    ///
    /// They may coexist iff any of:
    /// 1. they enter from the same side (paths never cross), or
    /// 2. they are exact opposites along the same axis, or
    /// 3. at least one is a right turn and they head to different sides.
    ///
    /// Symmetric in its two movements.
    pub fn compatible_with(self, other: Movement) -> bool {
        if self.origin == other.origin {
            return true;
        }
        if self.origin == other.destination && self.destination == other.origin {
            return true;
        }
        (self.is_right_turn() || other.is_right_turn()) && self.destination != other.destination
    }
}

impl fmt::Display for Movement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.origin, self.destination)
    }
}
