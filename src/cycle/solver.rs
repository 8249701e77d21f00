//! 이상 랭킨 사이클 4상태 계산.
//!
//! 1: 터빈 입구(과열 증기) - (P_boiler, T_boiler)
//! 2: 터빈 출구 - 등엔트로피 팽창, s2 = s1
//! 3: 펌프 입구 - 복수기 압력의 포화수(Q = 0)
//! 4: 펌프 출구 - 등엔트로피 압축, s4 = s3
//!
//! 조회 순서는 고정이다. 3은 1·2와 무관하지만 2는 s1, 4는 s3 에 의존한다.

use tracing::{debug, trace};

use super::error::{DegenerateCycle, SolveError};
use super::inputs::CycleInputs;
use super::state::{CycleResult, StateLabel, StatePoint};
use crate::fluid::{KnownProperty, PropertyKind, PropertyLookup, PropertyQuery};

/// 입력과 물성 조회기로 사이클 결과를 계산한다. 조회 실패 한 번이면 전체가 중단된다.
pub fn solve<L>(inputs: &CycleInputs, lookup: &L) -> Result<CycleResult, SolveError>
where
    L: PropertyLookup + ?Sized,
{
    validate(inputs)?;
    let session = Session { inputs, lookup };
    let inlet = session.turbine_inlet()?;
    let exit = session.turbine_exit(&inlet)?;
    let pump_inlet = session.pump_inlet()?;
    let pump_exit = session.pump_exit(&pump_inlet)?;
    let result = assemble([inlet, exit, pump_inlet, pump_exit])?;
    debug!(
        efficiency = result.thermal_efficiency_percent,
        turbine_work = result.turbine_work,
        pump_work = result.pump_work,
        heat_input = result.heat_input,
        "랭킨 사이클 계산 완료"
    );
    Ok(result)
}

/// 조회 전에 걸러낼 수 있는 입력 오류를 확인한다.
fn validate(inputs: &CycleInputs) -> Result<(), SolveError> {
    let degenerate = |reason| Err(SolveError::DegenerateCycle(reason));
    let values = [
        inputs.boiler_pressure,
        inputs.boiler_temperature,
        inputs.condenser_pressure,
    ];
    if values.iter().any(|v| !v.is_finite()) {
        return degenerate(DegenerateCycle::NonFiniteInput);
    }
    if inputs.boiler_pressure <= 0.0 || inputs.condenser_pressure <= 0.0 {
        return degenerate(DegenerateCycle::NonPositivePressure);
    }
    if inputs.boiler_temperature <= 0.0 {
        return degenerate(DegenerateCycle::NonPositiveTemperature);
    }
    if inputs.condenser_pressure >= inputs.boiler_pressure {
        return degenerate(DegenerateCycle::NoPressureDrop {
            boiler: inputs.boiler_pressure,
            condenser: inputs.condenser_pressure,
        });
    }
    Ok(())
}

fn assemble(states: [StatePoint; 4]) -> Result<CycleResult, SolveError> {
    let [s1, s2, s3, s4] = &states;
    let turbine_work = s1.enthalpy - s2.enthalpy;
    let pump_work = s4.enthalpy - s3.enthalpy;
    let heat_input = s1.enthalpy - s4.enthalpy;
    // NaN 도 여기서 걸러진다
    if !(heat_input > 0.0) {
        return Err(SolveError::DegenerateCycle(
            DegenerateCycle::NonPositiveHeatInput(heat_input),
        ));
    }
    let thermal_efficiency_percent = (turbine_work - pump_work) / heat_input * 100.0;
    Ok(CycleResult {
        states,
        turbine_work,
        pump_work,
        heat_input,
        thermal_efficiency_percent,
    })
}

struct Session<'a, L: ?Sized> {
    inputs: &'a CycleInputs,
    lookup: &'a L,
}

impl<L: PropertyLookup + ?Sized> Session<'_, L> {
    fn query(
        &self,
        state: StateLabel,
        output: PropertyKind,
        first: KnownProperty,
        second: KnownProperty,
    ) -> Result<f64, SolveError> {
        let fluid = &self.inputs.fluid;
        trace!(%state, output = output.symbol(), %first, %second, "물성 조회");
        self.lookup
            .query(output, first, second, fluid)
            .map_err(|source| SolveError::PropertyQuery {
                state,
                query: PropertyQuery {
                    output,
                    first,
                    second,
                    fluid: fluid.clone(),
                },
                source,
            })
    }

    fn turbine_inlet(&self) -> Result<StatePoint, SolveError> {
        let state = StateLabel::TurbineInlet;
        let p = KnownProperty::pressure(self.inputs.boiler_pressure);
        let t = KnownProperty::temperature(self.inputs.boiler_temperature);
        let enthalpy = self.query(state, PropertyKind::Enthalpy, p, t)?;
        let entropy = self.query(state, PropertyKind::Entropy, p, t)?;
        Ok(logged(StatePoint {
            label: state,
            pressure: self.inputs.boiler_pressure,
            temperature: self.inputs.boiler_temperature,
            enthalpy,
            entropy,
        }))
    }

    fn turbine_exit(&self, inlet: &StatePoint) -> Result<StatePoint, SolveError> {
        let state = StateLabel::TurbineExit;
        let p = KnownProperty::pressure(self.inputs.condenser_pressure);
        let entropy = inlet.entropy;
        let enthalpy =
            self.query(state, PropertyKind::Enthalpy, p, KnownProperty::entropy(entropy))?;
        let temperature =
            self.query(state, PropertyKind::Temperature, p, KnownProperty::enthalpy(enthalpy))?;
        Ok(logged(StatePoint {
            label: state,
            pressure: self.inputs.condenser_pressure,
            temperature,
            enthalpy,
            entropy,
        }))
    }

    fn pump_inlet(&self) -> Result<StatePoint, SolveError> {
        let state = StateLabel::PumpInlet;
        let p = KnownProperty::pressure(self.inputs.condenser_pressure);
        let q = KnownProperty::quality(0.0);
        let enthalpy = self.query(state, PropertyKind::Enthalpy, p, q)?;
        let entropy = self.query(state, PropertyKind::Entropy, p, q)?;
        let temperature = self.query(state, PropertyKind::Temperature, p, q)?;
        Ok(logged(StatePoint {
            label: state,
            pressure: self.inputs.condenser_pressure,
            temperature,
            enthalpy,
            entropy,
        }))
    }

    fn pump_exit(&self, pump_inlet: &StatePoint) -> Result<StatePoint, SolveError> {
        let state = StateLabel::PumpExit;
        let p = KnownProperty::pressure(self.inputs.boiler_pressure);
        let entropy = pump_inlet.entropy;
        let enthalpy =
            self.query(state, PropertyKind::Enthalpy, p, KnownProperty::entropy(entropy))?;
        let temperature =
            self.query(state, PropertyKind::Temperature, p, KnownProperty::enthalpy(enthalpy))?;
        Ok(logged(StatePoint {
            label: state,
            pressure: self.inputs.boiler_pressure,
            temperature,
            enthalpy,
            entropy,
        }))
    }
}

fn logged(point: StatePoint) -> StatePoint {
    debug!(
        state = %point.label,
        p = point.pressure,
        t = point.temperature,
        h = point.enthalpy,
        s = point.entropy,
        "상태점 계산"
    );
    point
}
