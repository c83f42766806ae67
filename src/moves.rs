use serde::{Deserialize, Serialize};

/// A named battle move.
///
/// Pure data: `power` scales damage, `accuracy` is the hit chance in percent
/// (0-100). Categories are an open string set ("Normal", "Fire", ...) rather
/// than a fixed enum, so prefab data and future content share one type.
///
/// Fields stay private so the accuracy cap holds for every instance;
/// deserialization routes through the same constructor via `RawMove`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawMove")]
pub struct Move {
    name: String,
    category: String,
    power: u32,
    accuracy: u8,
}

#[derive(Deserialize)]
struct RawMove {
    name: String,
    category: String,
    power: u32,
    accuracy: u8,
}

impl From<RawMove> for Move {
    fn from(raw: RawMove) -> Self {
        Move::new(&raw.name, &raw.category, raw.power, raw.accuracy)
    }
}

impl Move {
    /// Accuracy is capped at 100; a 100-accuracy move can never miss.
    pub fn new(name: &str, category: &str, power: u32, accuracy: u8) -> Self {
        Move {
            name: name.to_string(),
            category: category.to_string(),
            power,
            accuracy: accuracy.min(100),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn power(&self) -> u32 {
        self.power
    }

    pub fn accuracy(&self) -> u8 {
        self.accuracy
    }
}
