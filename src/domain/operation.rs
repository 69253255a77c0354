use std::fmt;

use serde::{Deserialize, Serialize};

/// Listing category queried against the search API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Sale,
    Rent,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sale => "sale",
            Self::Rent => "rent",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operation_strings() {
        assert_eq!(Operation::Sale.as_str(), "sale");
        assert_eq!(Operation::Rent.to_string(), "rent");
    }

    #[test]
    fn operation_serde_lowercase() {
        let json = serde_json::to_string(&Operation::Rent).unwrap();
        assert_eq!(json, "\"rent\"");
        let op: Operation = serde_json::from_str("\"sale\"").unwrap();
        assert_eq!(op, Operation::Sale);
    }
}
