use serde::Serialize;

use super::table::{StateRow, StateTable};
use super::DisplayUnits;
use crate::cycle::{CycleInputs, CycleResult};

/// JSON 으로 내보내는 결과 요약. 일/열량은 비엔탈피 표시 단위를 따른다.
#[derive(Debug, Clone, Serialize)]
pub struct CycleReport {
    pub fluid: String,
    pub units: DisplayUnits,
    pub inputs: ReportInputs,
    pub states: Vec<StateRow>,
    pub turbine_work: f64,
    pub pump_work: f64,
    pub net_work: f64,
    pub heat_input: f64,
    pub heat_rejected: f64,
    pub back_work_ratio: f64,
    pub thermal_efficiency_percent: f64,
    pub carnot_efficiency_percent: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportInputs {
    pub boiler_pressure: f64,
    pub boiler_temperature: f64,
    pub condenser_pressure: f64,
}

impl CycleReport {
    pub fn new(inputs: &CycleInputs, result: &CycleResult, units: &DisplayUnits) -> Self {
        let energy = |v: f64| units.enthalpy.from_si(v);
        Self {
            fluid: inputs.fluid.to_string(),
            units: *units,
            inputs: ReportInputs {
                boiler_pressure: units.pressure.from_si(inputs.boiler_pressure),
                boiler_temperature: units.temperature.from_si(inputs.boiler_temperature),
                condenser_pressure: units.pressure.from_si(inputs.condenser_pressure),
            },
            states: StateTable::new(result, units).rows,
            turbine_work: energy(result.turbine_work),
            pump_work: energy(result.pump_work),
            net_work: energy(result.net_work()),
            heat_input: energy(result.heat_input),
            heat_rejected: energy(result.heat_rejected()),
            back_work_ratio: result.back_work_ratio(),
            thermal_efficiency_percent: result.thermal_efficiency_percent,
            carnot_efficiency_percent: result.carnot_efficiency_percent(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// 일/열량 요약 줄들(표 아래에 붙는다).
    pub fn summary_lines(&self) -> Vec<String> {
        let unit = self.units.enthalpy.symbol();
        vec![
            format!("Turbine work:    {:.2} {unit}", self.turbine_work),
            format!("Pump work:       {:.2} {unit}", self.pump_work),
            format!("Net work:        {:.2} {unit}", self.net_work),
            format!("Heat input:      {:.2} {unit}", self.heat_input),
            format!("Heat rejected:   {:.2} {unit}", self.heat_rejected),
            format!("Back work ratio: {:.4}", self.back_work_ratio),
            format!("Carnot limit:    {:.2} %", self.carnot_efficiency_percent),
        ]
    }
}
