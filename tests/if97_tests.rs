//! IF97 기준점 회귀 테스트. IAPWS-IF97 공식 문서의 검증 예제 값을 SI 단위 조회로 확인한다.
use rankine_cycle_simulator::fluid::{
    FluidId, If97Lookup, KnownProperty, PropertyError, PropertyKind, PropertyLookup,
};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

fn h_s_at(p_pa: f64, t_k: f64) -> (f64, f64) {
    let lookup = If97Lookup::new();
    let water = FluidId::water();
    let p = KnownProperty::pressure(p_pa);
    let t = KnownProperty::temperature(t_k);
    let h = lookup
        .query(PropertyKind::Enthalpy, p, t, &water)
        .expect("enthalpy");
    let s = lookup
        .query(PropertyKind::Entropy, p, t, &water)
        .expect("entropy");
    (h, s)
}

#[test]
fn region1_reference_point() {
    // IF97: p = 3 MPa, T = 300 K
    let (h, s) = h_s_at(3.0e6, 300.0);
    assert_close("h", h, 115_331.273_021_438_4, 1e-6);
    assert_close("s", s, 392.294_792_402_624_27, 1e-6);
}

#[test]
fn region2_reference_points() {
    // IF97: p = 0.0035 MPa, T = 300 K
    let (h1, s1) = h_s_at(3.5e3, 300.0);
    assert_close("h300K", h1, 2_549_911.450_840_020_3, 1e-6);
    assert_close("s300K", s1, 8_522.389_667_335_792, 1e-6);

    // IF97: p = 0.0035 MPa, T = 700 K
    let (h2, s2) = h_s_at(3.5e3, 700.0);
    assert_close("h700K", h2, 3_335_683.753_731_224, 1e-6);
    assert_close("s700K", s2, 10_174.999_578_595_989, 1e-6);
}

#[test]
fn region3_reference_point() {
    // IF97: p = 25 MPa, T = 650 K
    let (h, s) = h_s_at(25.0e6, 650.0);
    assert_close("h", h, 1_876_359.122_516_944_4, 5e-4);
    assert_close("s", s, 4_075.979_000_313_241, 5e-4);
}

#[test]
fn region5_reference_points() {
    // IF97: p = 0.5 MPa, T = 1500 K
    let (h1, s1) = h_s_at(0.5e6, 1_500.0);
    assert_close("h1500K-0.5MPa", h1, 5_219_768.551_208_338, 1e-6);
    assert_close("s1500K-0.5MPa", s1, 9_654.088_753_312_948, 1e-6);

    // IF97: p = 30 MPa, T = 1500 K
    let (h2, s2) = h_s_at(30.0e6, 1_500.0);
    assert_close("h1500K-30MPa", h2, 5_167_235.140_089_517, 1e-6);
    assert_close("s1500K-30MPa", s2, 7_729.701_326_182_764, 1e-6);
}

#[test]
fn saturation_temperature_at_one_bar() {
    // IF97 region 4: p = 0.1 MPa → Ts = 372.755919 K
    let t = If97Lookup::new()
        .saturation_temperature(0.1e6, &FluidId::water())
        .expect("tsat");
    assert_close("Tsat", t, 372.755_919_155_3, 1e-6);
}

#[test]
fn backward_pressure_enthalpy_temperature() {
    // IF97 backward T(p,h): p = 3 MPa, h = 500 kJ/kg → T = 391.798509 K
    let t = If97Lookup::new()
        .query(
            PropertyKind::Temperature,
            KnownProperty::pressure(3.0e6),
            KnownProperty::enthalpy(500.0e3),
            &FluidId::water(),
        )
        .expect("T(p,h)");
    assert_close("T(p,h)", t, 391.798_509, 1e-4);
}

#[test]
fn pressure_entropy_roundtrip_stays_on_isentrope() {
    let lookup = If97Lookup::new();
    let water = FluidId::water();
    let (h1, s1) = h_s_at(8.0e6, 773.15);
    let h_back = lookup
        .query(
            PropertyKind::Enthalpy,
            KnownProperty::pressure(8.0e6),
            KnownProperty::entropy(s1),
            &water,
        )
        .expect("h(p,s)");
    assert_close("h(p,s)", h_back, h1, 1e-5);
}

#[test]
fn envelope_violations_are_out_of_range() {
    let lookup = If97Lookup::new();
    let water = FluidId::water();
    let too_cold = lookup.query(
        PropertyKind::Enthalpy,
        KnownProperty::pressure(1.0e6),
        KnownProperty::temperature(200.0),
        &water,
    );
    assert!(matches!(too_cold, Err(PropertyError::OutOfRange { .. })));

    let above_critical = lookup.query(
        PropertyKind::Enthalpy,
        KnownProperty::pressure(25.0e6),
        KnownProperty::quality(0.0),
        &water,
    );
    assert!(matches!(above_critical, Err(PropertyError::OutOfRange { .. })));
}
