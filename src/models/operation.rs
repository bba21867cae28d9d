//! The fixed set of operations the service computes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Operation name, as exposed in responses and stored in the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Power,
    Fibonacci,
    Factorial,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Power => "power",
            Operation::Fibonacci => "fibonacci",
            Operation::Factorial => "factorial",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "power" => Ok(Operation::Power),
            "fibonacci" => Ok(Operation::Fibonacci),
            "factorial" => Ok(Operation::Factorial),
            other => Err(format!("Unknown operation: {other}")),
        }
    }
}
