use std::fmt;

use serde::{Deserialize, Serialize};

/// The mark drawn at one end of an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeMark {
    None,
    Tail,
    Arrow,
    Circle,
}

impl EdgeMark {
    pub const ALL: [EdgeMark; 4] = [Self::None, Self::Tail, Self::Arrow, Self::Circle];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Tail => "tail",
            Self::Arrow => "arrow",
            Self::Circle => "circle",
        }
    }
}

impl fmt::Display for EdgeMark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
