#![cfg(feature = "serde")]

use std::collections::HashMap;

use rpnexpr::{Program, compile};

#[test]
fn program_serializes_as_instruction_list() {
    let program = compile("Sqrt(x) * 2").unwrap().program().clone();
    let json = serde_json::to_string(&program).unwrap();
    assert_eq!(json,
               r#"[{"Variable":"x"},{"Function":"Sqrt"},{"Value":2.0},{"Operator":"Mul"}]"#);
}

#[test]
fn deserialized_program_still_runs() {
    let json = r#"[{"Value":8.0},{"Value":3.0},{"Operator":"Sub"},{"Variable":"pi"},{"Operator":"Add"}]"#;
    let program: Program = serde_json::from_str(json).unwrap();
    assert_eq!(program.to_string(), "8 3 - pi +");
    assert_eq!(program.execute(&HashMap::new()), Ok(5.0 + std::f64::consts::PI));
}
