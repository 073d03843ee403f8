// src/config/record.rs
use serde::{Serialize, Deserialize};
use std::fmt;
use crate::error::SalesError;

/// One month of sales. Revenue is reported independently of units sold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub period: String,
    pub sales: u64,
    pub revenue: u64,
}

impl SalesRecord {
    pub fn new(period: impl Into<String>, sales: u64, revenue: u64) -> Self {
        Self {
            period: period.into(),
            sales,
            revenue,
        }
    }
}

// Closed set of years with bundled data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum Year {
    Y2022,
    Y2023,
    Y2024,
}

impl Year {
    pub const ALL: [Year; 3] = [Year::Y2022, Year::Y2023, Year::Y2024];

    pub fn as_u16(self) -> u16 {
        match self {
            Year::Y2022 => 2022,
            Year::Y2023 => 2023,
            Year::Y2024 => 2024,
        }
    }
}

impl Default for Year {
    fn default() -> Self {
        Year::Y2024
    }
}

impl TryFrom<u16> for Year {
    type Error = SalesError;

    fn try_from(key: u16) -> Result<Self, Self::Error> {
        Year::ALL
            .into_iter()
            .find(|year| year.as_u16() == key)
            .ok_or(SalesError::UnknownYear(key))
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.as_u16()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u16())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
}

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [ChartKind::Bar, ChartKind::Line, ChartKind::Pie];

    pub fn label(self) -> &'static str {
        match self {
            ChartKind::Bar => "📊 Bar",
            ChartKind::Line => "📈 Line",
            ChartKind::Pie => "◔ Pie",
        }
    }
}

impl Default for ChartKind {
    fn default() -> Self {
        ChartKind::Bar
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_keys_outside_the_closed_set_are_rejected() {
        assert_eq!(Year::try_from(2023).unwrap(), Year::Y2023);
        let err = Year::try_from(2021).unwrap_err();
        assert!(matches!(err, SalesError::UnknownYear(2021)));
        assert!(Year::try_from(2025).is_err());
    }

    #[test]
    fn year_serializes_as_its_number() {
        let json = serde_json::to_string(&Year::Y2022).unwrap();
        assert_eq!(json, "2022");
        let parsed: Year = serde_json::from_str("2024").unwrap();
        assert_eq!(parsed, Year::Y2024);
        assert!(serde_json::from_str::<Year>("1999").is_err());
    }

    #[test]
    fn chart_kind_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&ChartKind::Pie).unwrap(), "\"pie\"");
        assert_eq!(ChartKind::default(), ChartKind::Bar);
    }
}
