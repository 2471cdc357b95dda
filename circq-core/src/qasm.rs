//! OpenQASM 2.0 export
//!
//! Renders a circuit as an OpenQASM 2.0 program: a version header, a
//! quantum register declaration sized to the circuit, and one instruction
//! line per gate in program order using `qelib1.inc` mnemonics. A
//! classical register is declared only when the circuit measures.
//!
//! Qubit index `i` maps directly to register slot `q[i]`; measurements
//! map `q[i]` to `c[i]`.

use crate::{Circuit, QuantumError, Result};

/// Render a circuit as an OpenQASM 2.0 program string
///
/// # Errors
/// Returns [`QuantumError::UnsupportedGate`] for gates outside the
/// standard vocabulary.
///
/// # Example
/// ```
/// use circq_core::{qasm, Circuit, QubitId};
/// use circq_core::gates::Hadamard;
/// use std::sync::Arc;
///
/// let mut circuit = Circuit::new(1);
/// circuit.add_gate(Arc::new(Hadamard), &[QubitId::new(0)]).unwrap();
/// let program = qasm::export(&circuit).unwrap();
/// assert!(program.contains("h q[0];"));
/// ```
pub fn export(circuit: &Circuit) -> Result<String> {
    let mut out = String::new();
    out.push_str("OPENQASM 2.0;\n");
    out.push_str("include \"qelib1.inc\";\n");
    out.push_str(&format!("qreg q[{}];\n", circuit.num_qubits()));

    let has_measurement = circuit.operations().any(|op| !op.gate().is_unitary());
    if has_measurement {
        out.push_str(&format!("creg c[{}];\n", circuit.num_qubits()));
    }

    for op in circuit.operations() {
        out.push_str(&render_op(op)?);
        out.push('\n');
    }

    Ok(out)
}

fn render_op(op: &crate::GateOp) -> Result<String> {
    let qubits = op.qubits();
    let line = match op.gate().name() {
        "H" => format!("h q[{}];", qubits[0].index()),
        "X" => format!("x q[{}];", qubits[0].index()),
        "Y" => format!("y q[{}];", qubits[0].index()),
        "Z" => format!("z q[{}];", qubits[0].index()),
        "S" => format!("s q[{}];", qubits[0].index()),
        "T" => format!("t q[{}];", qubits[0].index()),
        "CNOT" => format!("cx q[{}],q[{}];", qubits[0].index(), qubits[1].index()),
        "CZ" => format!("cz q[{}],q[{}];", qubits[0].index(), qubits[1].index()),
        "CP" => {
            let theta = op
                .gate()
                .parameters()
                .first()
                .copied()
                .ok_or_else(|| QuantumError::UnsupportedGate("CP without angle".to_string()))?;
            format!(
                "cu1({}) q[{}],q[{}];",
                theta,
                qubits[0].index(),
                qubits[1].index()
            )
        }
        "MEASURE" => format!(
            "measure q[{0}] -> c[{0}];",
            qubits[0].index()
        ),
        other => return Err(QuantumError::UnsupportedGate(other.to_string())),
    };
    Ok(line)
}
