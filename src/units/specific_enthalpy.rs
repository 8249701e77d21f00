use serde::{Deserialize, Serialize};

use super::UnitParseError;

/// 비엔탈피 단위. 내부 기준은 J/kg 이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpecificEnthalpyUnit {
    JPerKg,
    KjPerKg,
    KcalPerKg,
    BtuPerPound,
}

impl SpecificEnthalpyUnit {
    fn j_per_kg(self) -> f64 {
        match self {
            SpecificEnthalpyUnit::JPerKg => 1.0,
            SpecificEnthalpyUnit::KjPerKg => 1000.0,
            SpecificEnthalpyUnit::KcalPerKg => 4184.0,
            SpecificEnthalpyUnit::BtuPerPound => 2326.0,
        }
    }

    pub fn to_si(self, value: f64) -> f64 {
        value * self.j_per_kg()
    }

    pub fn from_si(self, value_j_per_kg: f64) -> f64 {
        value_j_per_kg / self.j_per_kg()
    }

    pub fn symbol(self) -> &'static str {
        match self {
            SpecificEnthalpyUnit::JPerKg => "J/kg",
            SpecificEnthalpyUnit::KjPerKg => "kJ/kg",
            SpecificEnthalpyUnit::KcalPerKg => "kcal/kg",
            SpecificEnthalpyUnit::BtuPerPound => "Btu/lb",
        }
    }

    pub fn parse(s: &str) -> Result<Self, UnitParseError> {
        match s.trim().to_lowercase().as_str() {
            "j/kg" => Ok(SpecificEnthalpyUnit::JPerKg),
            "kj/kg" => Ok(SpecificEnthalpyUnit::KjPerKg),
            "kcal/kg" => Ok(SpecificEnthalpyUnit::KcalPerKg),
            "btu/lb" | "btu/lbm" => Ok(SpecificEnthalpyUnit::BtuPerPound),
            _ => Err(UnitParseError::SpecificEnthalpy(s.to_string())),
        }
    }
}
