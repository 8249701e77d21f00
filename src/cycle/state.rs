use std::fmt;

use serde::{Deserialize, Serialize};

/// 사이클 위의 네 지점. 순서는 항상 1→2→3→4 이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StateLabel {
    TurbineInlet,
    TurbineExit,
    PumpInlet,
    PumpExit,
}

impl StateLabel {
    pub const ALL: [StateLabel; 4] = [
        StateLabel::TurbineInlet,
        StateLabel::TurbineExit,
        StateLabel::PumpInlet,
        StateLabel::PumpExit,
    ];

    /// 상태 번호(1~4).
    pub fn number(self) -> u8 {
        match self {
            StateLabel::TurbineInlet => 1,
            StateLabel::TurbineExit => 2,
            StateLabel::PumpInlet => 3,
            StateLabel::PumpExit => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            StateLabel::TurbineInlet => "Turbine Inlet",
            StateLabel::TurbineExit => "Turbine Exit",
            StateLabel::PumpInlet => "Pump Inlet",
            StateLabel::PumpExit => "Pump Exit",
        }
    }
}

impl fmt::Display for StateLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.number(), self.name())
    }
}

/// 한 상태점의 물성(SI).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatePoint {
    pub label: StateLabel,
    /// 압력(Pa)
    pub pressure: f64,
    /// 온도(K)
    pub temperature: f64,
    /// 비엔탈피(J/kg)
    pub enthalpy: f64,
    /// 비엔트로피(J/kg·K)
    pub entropy: f64,
}

/// 이상 랭킨 사이클 계산 결과. 생성 후 변경하지 않는다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CycleResult {
    /// 터빈 입구, 터빈 출구, 펌프 입구, 펌프 출구 순서
    pub states: [StatePoint; 4],
    /// 터빈 일 h1 - h2 (J/kg)
    pub turbine_work: f64,
    /// 펌프 일 h4 - h3 (J/kg)
    pub pump_work: f64,
    /// 보일러 가열량 h1 - h4 (J/kg)
    pub heat_input: f64,
    /// 열효율(%)
    pub thermal_efficiency_percent: f64,
}

impl CycleResult {
    pub fn state(&self, label: StateLabel) -> &StatePoint {
        &self.states[usize::from(label.number() - 1)]
    }

    /// 순일(J/kg)
    pub fn net_work(&self) -> f64 {
        self.turbine_work - self.pump_work
    }

    /// 복수기 방열량 h2 - h3 (J/kg)
    pub fn heat_rejected(&self) -> f64 {
        self.state(StateLabel::TurbineExit).enthalpy - self.state(StateLabel::PumpInlet).enthalpy
    }

    /// 펌프 일 / 터빈 일
    pub fn back_work_ratio(&self) -> f64 {
        self.pump_work / self.turbine_work
    }

    /// 같은 최고/최저 온도(T1, T3) 사이 카르노 효율(%).
    pub fn carnot_efficiency_percent(&self) -> f64 {
        let t_hot = self.state(StateLabel::TurbineInlet).temperature;
        let t_cold = self.state(StateLabel::PumpInlet).temperature;
        (1.0 - t_cold / t_hot) * 100.0
    }
}
