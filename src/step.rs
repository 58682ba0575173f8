use std::fmt;

use serde::{Deserialize, Serialize};

/// One discrete directional move a traversal can claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    Left,
    Right,
    Forward,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::Left => "left",
            Step::Right => "right",
            Step::Forward => "forward",
        };
        f.write_str(name)
    }
}
