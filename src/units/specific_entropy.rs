use serde::{Deserialize, Serialize};

use super::UnitParseError;

/// 비엔트로피 단위. 내부 기준은 J/(kg·K).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpecificEntropyUnit {
    JPerKgK,
    KjPerKgK,
    BtuPerPoundR,
}

impl SpecificEntropyUnit {
    fn j_per_kg_k(self) -> f64 {
        match self {
            SpecificEntropyUnit::JPerKgK => 1.0,
            SpecificEntropyUnit::KjPerKgK => 1000.0,
            // 1 Btu/(lb·°R) = 4.1868 kJ/(kg·K)
            SpecificEntropyUnit::BtuPerPoundR => 4186.8,
        }
    }

    pub fn to_si(self, value: f64) -> f64 {
        value * self.j_per_kg_k()
    }

    pub fn from_si(self, value_j_per_kg_k: f64) -> f64 {
        value_j_per_kg_k / self.j_per_kg_k()
    }

    pub fn symbol(self) -> &'static str {
        match self {
            SpecificEntropyUnit::JPerKgK => "J/(kg·K)",
            SpecificEntropyUnit::KjPerKgK => "kJ/(kg·K)",
            SpecificEntropyUnit::BtuPerPoundR => "Btu/(lb·°R)",
        }
    }

    pub fn parse(s: &str) -> Result<Self, UnitParseError> {
        let compact: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '(' | ')' | '·' | '.' | '°'))
            .collect::<String>()
            .to_lowercase();
        match compact.as_str() {
            "j/kgk" => Ok(SpecificEntropyUnit::JPerKgK),
            "kj/kgk" => Ok(SpecificEntropyUnit::KjPerKgK),
            "btu/lbr" => Ok(SpecificEntropyUnit::BtuPerPoundR),
            _ => Err(UnitParseError::SpecificEntropy(s.to_string())),
        }
    }
}
