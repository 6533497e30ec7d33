//! Series numbers: the canonical key for every rule table.
use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Decimal series identifier, stored as fixed-point tenths so spin-off
/// entries like 12.8 compare and hash exactly.
///
/// Series numbers are monotonic by release order and stable across regions,
/// unlike catalog row ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SeriesNumber(u16);

impl SeriesNumber {
    pub const EOSD: Self = Self::from_tenths(60);
    pub const PCB: Self = Self::from_tenths(70);
    pub const IN: Self = Self::from_tenths(80);
    pub const POFV: Self = Self::from_tenths(90);
    pub const MOF: Self = Self::from_tenths(100);
    pub const SA: Self = Self::from_tenths(110);
    pub const UFO: Self = Self::from_tenths(120);
    pub const FW: Self = Self::from_tenths(128);
    pub const TD: Self = Self::from_tenths(130);
    pub const DDC: Self = Self::from_tenths(140);
    pub const LOLK: Self = Self::from_tenths(150);
    pub const HSIFS: Self = Self::from_tenths(160);
    pub const WBAWC: Self = Self::from_tenths(170);
    pub const UM: Self = Self::from_tenths(180);
    pub const UDOALG: Self = Self::from_tenths(190);
    pub const UDOKJ: Self = Self::from_tenths(200);

    #[must_use]
    pub const fn from_tenths(tenths: u16) -> Self {
        Self(tenths)
    }

    /// Parse a decimal series number. Anything that is not representable in
    /// tenths (the catalog column is DECIMAL(4,1)) is rejected.
    #[must_use]
    pub fn from_f64(value: f64) -> Option<Self> {
        if !(0.0..=f64::from(u16::MAX) / 10.0).contains(&value) {
            return None;
        }
        let tenths = (value * 10.0).round();
        if (tenths - value * 10.0).abs() > 1e-6 {
            return None;
        }
        Some(Self(tenths as u16))
    }

    #[must_use]
    pub const fn tenths(self) -> u16 {
        self.0
    }

    #[must_use]
    pub fn as_f64(self) -> f64 {
        f64::from(self.0) / 10.0
    }

    /// Half-integer entries (7.5, 12.8, ...) are spin-off / fan-disc titles.
    #[must_use]
    pub const fn is_spin_off(self) -> bool {
        self.0 % 10 != 0
    }
}

impl fmt::Display for SeriesNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 % 10 == 0 {
            write!(f, "{}", self.0 / 10)
        } else {
            write!(f, "{}.{}", self.0 / 10, self.0 % 10)
        }
    }
}

impl Serialize for SeriesNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0 % 10 == 0 {
            serializer.serialize_u16(self.0 / 10)
        } else {
            serializer.serialize_f64(self.as_f64())
        }
    }
}

impl<'de> Deserialize<'de> for SeriesNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Self::from_f64(value)
            .ok_or_else(|| D::Error::custom(format!("invalid series number {value}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fractional_series_numbers_are_exact() {
        let fairy_wars = SeriesNumber::from_f64(12.8).unwrap();
        assert_eq!(fairy_wars, SeriesNumber::FW);
        assert_eq!(fairy_wars.tenths(), 128);
        assert!(fairy_wars.is_spin_off());
        assert_eq!(fairy_wars.to_string(), "12.8");
    }

    #[test]
    fn whole_series_numbers_render_without_fraction() {
        assert_eq!(SeriesNumber::LOLK.to_string(), "15");
        assert!(!SeriesNumber::LOLK.is_spin_off());
    }

    #[test]
    fn rejects_values_outside_tenths_grid() {
        assert_eq!(SeriesNumber::from_f64(7.25), None);
        assert_eq!(SeriesNumber::from_f64(-1.0), None);
        assert_eq!(SeriesNumber::from_f64(1e9), None);
    }

    #[test]
    fn serde_round_trip() {
        let json = serde_json::to_string(&SeriesNumber::FW).unwrap();
        assert_eq!(json, "12.8");
        let back: SeriesNumber = serde_json::from_str(&json).unwrap();
        assert_eq!(back, SeriesNumber::FW);

        let whole: SeriesNumber = serde_json::from_str("19").unwrap();
        assert_eq!(whole, SeriesNumber::UDOALG);
    }

    #[test]
    fn ordering_follows_release_order() {
        assert!(SeriesNumber::UFO < SeriesNumber::FW);
        assert!(SeriesNumber::FW < SeriesNumber::TD);
    }
}
