//! Domain - The measurement families conversions stay within

use serde::{Deserialize, Serialize};

/// Measurement domain. Conversions only happen between units of one domain.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Length,
    Weight,
    Temperature,
}

impl Domain {
    /// All domains in display order
    pub const ALL: [Domain; 3] = [Domain::Length, Domain::Weight, Domain::Temperature];
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Domain::Length => write!(f, "length"),
            Domain::Weight => write!(f, "weight"),
            Domain::Temperature => write!(f, "temperature"),
        }
    }
}

impl std::str::FromStr for Domain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "length" => Ok(Domain::Length),
            "weight" => Ok(Domain::Weight),
            "temperature" | "temp" => Ok(Domain::Temperature),
            _ => Err(format!("Unknown domain: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_domain() {
        assert_eq!("length".parse::<Domain>(), Ok(Domain::Length));
        assert_eq!("Weight".parse::<Domain>(), Ok(Domain::Weight));
        assert_eq!("temp".parse::<Domain>(), Ok(Domain::Temperature));
        assert!("volume".parse::<Domain>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Domain::Temperature).unwrap();
        assert_eq!(json, "\"temperature\"");
        let parsed: Domain = serde_json::from_str("\"weight\"").unwrap();
        assert_eq!(parsed, Domain::Weight);
    }
}
