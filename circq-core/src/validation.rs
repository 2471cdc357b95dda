//! Rule-based circuit validation
//!
//! Structural problems in a user-built circuit are surfaced as data, not
//! as errors: an interactive builder wants every out-of-range qubit and
//! every oversized-circuit warning in one report. A report with no errors
//! is valid; warnings never affect validity.

use crate::Circuit;

/// Default gate-count threshold above which a circuit draws a warning
pub const DEFAULT_LARGE_CIRCUIT_THRESHOLD: usize = 100;

/// Default hard cap on qubit count
///
/// A 24-qubit state vector already holds 16M complex amplitudes
/// (256 MiB); anything above is rejected rather than allocated.
pub const DEFAULT_MAX_QUBITS: usize = 24;

/// Configurable validation limits
#[derive(Clone, Debug)]
pub struct ValidatorConfig {
    /// Gate count above which a warning is emitted
    pub large_circuit_threshold: usize,
    /// Qubit count above which an error is emitted
    pub max_qubits: usize,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            large_circuit_threshold: DEFAULT_LARGE_CIRCUIT_THRESHOLD,
            max_qubits: DEFAULT_MAX_QUBITS,
        }
    }
}

impl ValidatorConfig {
    /// Create a configuration with default limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the large-circuit warning threshold
    pub fn with_large_circuit_threshold(mut self, threshold: usize) -> Self {
        self.large_circuit_threshold = threshold;
        self
    }

    /// Set the hard qubit cap
    pub fn with_max_qubits(mut self, max_qubits: usize) -> Self {
        self.max_qubits = max_qubits;
        self
    }
}

/// Validation error with location information
#[derive(Clone, Debug)]
pub struct ValidationError {
    pub rule_name: String,
    pub message: String,
    pub operation_index: Option<usize>,
    pub qubits: Vec<usize>,
}

impl ValidationError {
    /// Format error for display
    pub fn format(&self) -> String {
        let mut msg = format!("error [{}]: {}", self.rule_name, self.message);
        if let Some(idx) = self.operation_index {
            msg.push_str(&format!(" (operation {})", idx));
        }
        msg
    }
}

/// Validation warning
#[derive(Clone, Debug)]
pub struct ValidationWarning {
    pub rule_name: String,
    pub message: String,
}

impl ValidationWarning {
    /// Format warning for display
    pub fn format(&self) -> String {
        format!("warning [{}]: {}", self.rule_name, self.message)
    }
}

/// Outcome of a single validation rule
#[derive(Clone, Debug, Default)]
pub struct RuleOutcome {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl RuleOutcome {
    /// Create a clean outcome
    pub fn ok() -> Self {
        Self::default()
    }

    /// Add an error to the outcome
    pub fn push_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Add a warning to the outcome
    pub fn push_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }
}

/// Validation rule that checks one circuit property
pub trait ValidationRule: Send + Sync {
    /// Name of the validation rule
    fn name(&self) -> &str;

    /// Description of what this rule checks
    fn description(&self) -> &str;

    /// Validate the circuit
    fn check(&self, circuit: &Circuit, config: &ValidatorConfig) -> RuleOutcome;
}

/// Flags every qubit reference outside `[0, num_qubits)`
pub struct QubitBoundsRule;

impl ValidationRule for QubitBoundsRule {
    fn name(&self) -> &str {
        "qubit_bounds"
    }

    fn description(&self) -> &str {
        "All qubit references must lie within the circuit register"
    }

    fn check(&self, circuit: &Circuit, _config: &ValidatorConfig) -> RuleOutcome {
        let mut outcome = RuleOutcome::ok();
        for (idx, op) in circuit.operations().enumerate() {
            for q in op.qubits() {
                if q.index() >= circuit.num_qubits() {
                    outcome.push_error(ValidationError {
                        rule_name: self.name().to_string(),
                        message: format!(
                            "gate '{}' references qubit {} but the circuit has only {} qubits",
                            op.gate().name(),
                            q.index(),
                            circuit.num_qubits()
                        ),
                        operation_index: Some(idx),
                        qubits: vec![q.index()],
                    });
                }
            }
        }
        outcome
    }
}

/// Warns when the circuit grows past the large-circuit threshold
pub struct CircuitSizeRule;

impl ValidationRule for CircuitSizeRule {
    fn name(&self) -> &str {
        "circuit_size"
    }

    fn description(&self) -> &str {
        "Deep circuits simulate slowly and deserve a warning"
    }

    fn check(&self, circuit: &Circuit, config: &ValidatorConfig) -> RuleOutcome {
        let mut outcome = RuleOutcome::ok();
        if circuit.len() > config.large_circuit_threshold {
            outcome.push_warning(ValidationWarning {
                rule_name: self.name().to_string(),
                message: format!(
                    "circuit has {} gates (threshold {}); simulation may be slow",
                    circuit.len(),
                    config.large_circuit_threshold
                ),
            });
        }
        outcome
    }
}

/// Rejects registers too large to simulate
pub struct QubitCapRule;

impl ValidationRule for QubitCapRule {
    fn name(&self) -> &str {
        "qubit_cap"
    }

    fn description(&self) -> &str {
        "State vectors scale as 2^n; registers above the cap are rejected"
    }

    fn check(&self, circuit: &Circuit, config: &ValidatorConfig) -> RuleOutcome {
        let mut outcome = RuleOutcome::ok();
        if circuit.num_qubits() > config.max_qubits {
            outcome.push_error(ValidationError {
                rule_name: self.name().to_string(),
                message: format!(
                    "{} qubits exceeds the maximum of {} (state vector would hold 2^{} amplitudes)",
                    circuit.num_qubits(),
                    config.max_qubits,
                    circuit.num_qubits()
                ),
                operation_index: None,
                qubits: Vec::new(),
            });
        }
        outcome
    }
}

/// Aggregated validation report for a circuit
#[derive(Clone, Debug, Default)]
pub struct ValidationReport {
    errors: Vec<ValidationError>,
    warnings: Vec<ValidationWarning>,
}

impl ValidationReport {
    /// Check if validation passed (no errors; warnings are allowed)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Get all errors
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Get all warnings
    pub fn warnings(&self) -> &[ValidationWarning] {
        &self.warnings
    }

    /// Format the report for display
    pub fn format(&self) -> String {
        let mut msg = String::new();
        if self.is_valid() {
            msg.push_str("circuit validation passed\n");
        } else {
            msg.push_str("circuit validation failed\n");
        }
        for error in &self.errors {
            msg.push_str("  ");
            msg.push_str(&error.format());
            msg.push('\n');
        }
        for warning in &self.warnings {
            msg.push_str("  ");
            msg.push_str(&warning.format());
            msg.push('\n');
        }
        msg
    }
}

/// Runs all validation rules against a circuit
pub struct CircuitValidator {
    config: ValidatorConfig,
    rules: Vec<Box<dyn ValidationRule>>,
}

impl CircuitValidator {
    /// Create a validator with the standard rule set
    pub fn new(config: ValidatorConfig) -> Self {
        Self {
            config,
            rules: vec![
                Box::new(QubitBoundsRule),
                Box::new(QubitCapRule),
                Box::new(CircuitSizeRule),
            ],
        }
    }

    /// Add an extra rule to this validator
    pub fn with_rule(mut self, rule: Box<dyn ValidationRule>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Get the validator configuration
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validate a circuit against every rule, aggregating all findings
    pub fn validate(&self, circuit: &Circuit) -> ValidationReport {
        let mut report = ValidationReport::default();
        for rule in &self.rules {
            let outcome = rule.check(circuit, &self.config);
            report.errors.extend(outcome.errors);
            report.warnings.extend(outcome.warnings);
        }
        report
    }
}

impl Default for CircuitValidator {
    fn default() -> Self {
        Self::new(ValidatorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gates::{Hadamard, PauliX};
    use crate::QubitId;
    use std::sync::Arc;

    #[test]
    fn test_valid_circuit() {
        let mut circuit = Circuit::new(2);
        circuit.add_gate(Arc::new(Hadamard), &[QubitId::new(0)]).unwrap();

        let report = CircuitValidator::default().validate(&circuit);
        assert!(report.is_valid());
        assert!(!report.has_warnings());
    }

    #[test]
    fn test_out_of_range_qubit_is_error() {
        let mut circuit = Circuit::new(2);
        circuit.add_gate(Arc::new(PauliX), &[QubitId::new(5)]).unwrap();

        let report = CircuitValidator::default().validate(&circuit);
        assert!(!report.is_valid());
        assert_eq!(report.errors().len(), 1);
        assert_eq!(report.errors()[0].qubits, vec![5]);
        assert_eq!(report.errors()[0].operation_index, Some(0));
    }

    #[test]
    fn test_large_circuit_is_warning_not_error() {
        let mut circuit = Circuit::new(1);
        for _ in 0..150 {
            circuit.add_gate(Arc::new(Hadamard), &[QubitId::new(0)]).unwrap();
        }

        let report = CircuitValidator::default().validate(&circuit);
        assert!(report.is_valid());
        assert!(report.has_warnings());
        assert!(report.warnings()[0].message.contains("150"));
    }

    #[test]
    fn test_qubit_cap_is_error() {
        let circuit = Circuit::new(25);
        let report = CircuitValidator::default().validate(&circuit);
        assert!(!report.is_valid());
    }

    #[test]
    fn test_configurable_threshold() {
        let mut circuit = Circuit::new(1);
        for _ in 0..10 {
            circuit.add_gate(Arc::new(Hadamard), &[QubitId::new(0)]).unwrap();
        }

        let config = ValidatorConfig::new().with_large_circuit_threshold(5);
        let report = CircuitValidator::new(config).validate(&circuit);
        assert!(report.is_valid());
        assert!(report.has_warnings());
    }

    #[test]
    fn test_report_format() {
        let mut circuit = Circuit::new(2);
        circuit.add_gate(Arc::new(PauliX), &[QubitId::new(9)]).unwrap();

        let report = CircuitValidator::default().validate(&circuit);
        let text = report.format();
        assert!(text.contains("failed"));
        assert!(text.contains("qubit_bounds"));
    }
}
