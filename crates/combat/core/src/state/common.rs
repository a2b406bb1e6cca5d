use std::fmt;

/// Unique identifier for a creature visible to the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Discrete grid position expressed in tile coordinates.
///
/// `z` is a floor index. Floors are strictly separate planes: distances are
/// only meaningful between positions on the same floor, and nothing in the
/// engine ever interpolates across floors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0, z: 0 };

    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Returns true if both positions share a floor index.
    #[inline]
    pub const fn same_floor(&self, other: &Position) -> bool {
        self.z == other.z
    }

    /// Chebyshev distance on the xy-plane: `max(|dx|, |dy|)`.
    ///
    /// Floor indices are ignored; callers filter by [`Self::same_floor`]
    /// before comparing distances.
    #[inline]
    pub fn chebyshev(&self, other: &Position) -> u32 {
        let dx = (self.x - other.x).unsigned_abs();
        let dy = (self.y - other.y).unsigned_abs();
        dx.max(dy)
    }

    /// Manhattan distance on the xy-plane: `|dx| + |dy|`.
    #[inline]
    pub fn manhattan(&self, other: &Position) -> u32 {
        (self.x - other.x).unsigned_abs() + (self.y - other.y).unsigned_abs()
    }

    /// Position reached by stepping `steps` tiles along `direction`.
    pub fn translated(&self, direction: Direction, steps: i32) -> Self {
        let (dx, dy) = direction.offset();
        Self::new(self.x + dx * steps, self.y + dy * steps, self.z)
    }

    /// Cardinal direction from `self` toward `other`, if the offset is
    /// exactly axis-aligned.
    ///
    /// Diagonal offsets, zero offsets, and cross-floor offsets all yield
    /// `None`. This is deliberately strict: the flanking test depends on it.
    pub fn direction_to(&self, other: &Position) -> Option<Direction> {
        if !self.same_floor(other) {
            return None;
        }
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        match (dx, dy) {
            (0, 0) => None,
            (0, d) if d < 0 => Some(Direction::North),
            (0, _) => Some(Direction::South),
            (d, 0) if d < 0 => Some(Direction::West),
            (_, 0) => Some(Direction::East),
            _ => None,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// 4-way facing direction on the grid.
///
/// Screen coordinates: north is negative y, east is positive x.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All four directions in evaluation order.
    ///
    /// Search loops iterate this array, so it also defines the documented
    /// first-found tie-break for equal-scoring candidates.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Unit tile offset `(dx, dy)` for one step in this direction.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }

    /// The opposite cardinal direction.
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// A direction perpendicular to this one (the clockwise one).
    ///
    /// Used to spread area-effect footprints sideways from the facing axis;
    /// footprints are symmetric, so either perpendicular works.
    pub const fn perpendicular(self) -> Direction {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }
}

/// Integer percentage clamped to 0..=100 at construction.
///
/// Used for both health and mana; the engine only ever reasons in percent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Percent(u8);

impl Percent {
    pub const ZERO: Self = Self(0);
    pub const FULL: Self = Self(100);

    /// Creates a percent value, clamping anything above 100.
    pub const fn new(value: u8) -> Self {
        Self(if value > 100 { 100 } else { value })
    }

    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Fractional value in `0.0..=1.0`.
    #[inline]
    pub fn ratio(self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
