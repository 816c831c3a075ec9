#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    /// Car calls carry no direction: the rider already chose it by boarding.
    None,
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::None => Direction::None,
        }
    }

    pub fn as_string(self) -> Option<String> {
        match self {
            Direction::Up => Some(String::from("up")),
            Direction::Down => Some(String::from("down")),
            Direction::None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_symmetric() {
        for direction in [Direction::Up, Direction::Down, Direction::None] {
            assert_eq!(direction.opposite().opposite(), direction);
        }
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::None.opposite(), Direction::None);
    }

    #[test]
    fn only_hall_directions_have_names() {
        assert_eq!(Direction::Up.as_string().as_deref(), Some("up"));
        assert_eq!(Direction::None.as_string(), None);
    }
}
