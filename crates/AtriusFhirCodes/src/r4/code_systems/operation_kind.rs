// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: OperationKind
/// Canonical URL: http://hl7.org/fhir/operation-kind
/// Title: Operation Kind
/// Status: active
///
/// Whether an operation is a normal operation or a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "OperationKind",
    system = "http://hl7.org/fhir/operation-kind",
    version = "4.0.1"
)]
pub enum OperationKind {
    /// Display: Operation
    ///
    /// Definition: This operation is invoked as an operation.
    #[code(
        value = "operation",
        display = "Operation",
        definition = "This operation is invoked as an operation."
    )]
    Operation,
    /// Display: Query
    ///
    /// Definition: This operation is a named query, invoked using the search mechanism.
    #[code(
        value = "query",
        display = "Query",
        definition = "This operation is a named query, invoked using the search mechanism."
    )]
    Query,
}
/// Coded [`OperationKind`] value: optional `id`, `extension` and member code.
pub type OperationKindCode = Coded<OperationKind>;
