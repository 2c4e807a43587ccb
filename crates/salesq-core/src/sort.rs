//! Sort specification and the named presets offered to users.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Date,
    Quantity,
    CustomerName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: SortField,
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortSpec {
    pub const fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    pub const fn asc(field: SortField) -> Self {
        Self::new(field, SortDirection::Asc)
    }

    pub const fn desc(field: SortField) -> Self {
        Self::new(field, SortDirection::Desc)
    }

    /// Human label of the matching preset, if this spec is one.
    pub fn label(&self) -> Option<&'static str> {
        SORT_OPTIONS
            .iter()
            .find(|o| o.spec == *self)
            .map(|o| o.label)
    }
}

impl Default for SortSpec {
    /// Newest first.
    fn default() -> Self {
        Self::desc(SortField::Date)
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortField::Date => "date",
            SortField::Quantity => "quantity",
            SortField::CustomerName => "customerName",
        })
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        })
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.field, self.direction)
    }
}

impl FromStr for SortField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "date" => Ok(SortField::Date),
            "quantity" | "qty" => Ok(SortField::Quantity),
            "customername" | "customer_name" | "name" => Ok(SortField::CustomerName),
            other => Err(Error::SortKey(format!("unknown sort field '{other}'"))),
        }
    }
}

impl FromStr for SortDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Asc),
            "desc" | "descending" => Ok(SortDirection::Desc),
            other => Err(Error::SortKey(format!("unknown sort direction '{other}'"))),
        }
    }
}

/// Parses `field[:direction]`; the direction defaults to ascending.
impl FromStr for SortSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, direction) = match s.split_once(':') {
            Some((f, d)) => (f, d.parse()?),
            None => (s, SortDirection::Asc),
        };
        Ok(SortSpec::new(field.parse()?, direction))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOption {
    pub spec: SortSpec,
    pub label: &'static str,
}

/// Presets in display order. The first one is the default.
pub const SORT_OPTIONS: [SortOption; 6] = [
    SortOption {
        spec: SortSpec::desc(SortField::Date),
        label: "Date (Newest First)",
    },
    SortOption {
        spec: SortSpec::asc(SortField::Date),
        label: "Date (Oldest First)",
    },
    SortOption {
        spec: SortSpec::desc(SortField::Quantity),
        label: "Quantity (High to Low)",
    },
    SortOption {
        spec: SortSpec::asc(SortField::Quantity),
        label: "Quantity (Low to High)",
    },
    SortOption {
        spec: SortSpec::asc(SortField::CustomerName),
        label: "Customer Name (A–Z)",
    },
    SortOption {
        spec: SortSpec::desc(SortField::CustomerName),
        label: "Customer Name (Z–A)",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_first_preset() {
        assert_eq!(SortSpec::default(), SORT_OPTIONS[0].spec);
        assert_eq!(SortSpec::default().label(), Some("Date (Newest First)"));
    }

    #[test]
    fn parses_field_and_direction() {
        assert_eq!(
            "customerName:desc".parse::<SortSpec>().unwrap(),
            SortSpec::desc(SortField::CustomerName)
        );
        assert_eq!(
            "quantity".parse::<SortSpec>().unwrap(),
            SortSpec::asc(SortField::Quantity)
        );
        assert!("price:asc".parse::<SortSpec>().is_err());
        assert!("date:sideways".parse::<SortSpec>().is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        for o in SORT_OPTIONS {
            assert_eq!(o.spec.to_string().parse::<SortSpec>().unwrap(), o.spec);
        }
    }

    #[test]
    fn serde_uses_camel_case_field_names() {
        let v = serde_json::to_value(SortSpec::asc(SortField::CustomerName)).unwrap();
        assert_eq!(v["field"], "customerName");
        assert_eq!(v["direction"], "asc");
    }
}
