// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: AuditEventAction
/// Canonical URL: http://hl7.org/fhir/audit-event-action
/// Title: Audit Event Action
/// Status: active
///
/// Indicator for type of action performed during the event that generated the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "AuditEventAction",
    system = "http://hl7.org/fhir/audit-event-action",
    version = "4.0.1"
)]
pub enum AuditEventAction {
    /// Display: Create
    ///
    /// Definition: Create a new database object, such as placing an order.
    #[code(
        value = "C",
        display = "Create",
        definition = "Create a new database object, such as placing an order."
    )]
    C,
    /// Display: Read/View/Print
    ///
    /// Definition: Display or print data, such as a doctor census.
    #[code(
        value = "R",
        display = "Read/View/Print",
        definition = "Display or print data, such as a doctor census."
    )]
    R,
    /// Display: Update
    ///
    /// Definition: Update data, such as revise patient information.
    #[code(
        value = "U",
        display = "Update",
        definition = "Update data, such as revise patient information."
    )]
    U,
    /// Display: Delete
    ///
    /// Definition: Delete items, such as a doctor master file record.
    #[code(
        value = "D",
        display = "Delete",
        definition = "Delete items, such as a doctor master file record."
    )]
    D,
    /// Display: Execute
    ///
    /// Definition: Perform a system or application function such as log-on, program execution or use of an object's method, or perform a query/search operation.
    #[code(
        value = "E",
        display = "Execute",
        definition = "Perform a system or application function such as log-on, program execution or use of an object's method, or perform a query/search operation."
    )]
    E,
}
/// Coded [`AuditEventAction`] value: optional `id`, `extension` and member code.
pub type AuditEventActionCode = Coded<AuditEventAction>;
