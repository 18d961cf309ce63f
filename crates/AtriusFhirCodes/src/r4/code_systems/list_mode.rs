// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: ListMode
/// Canonical URL: http://hl7.org/fhir/list-mode
/// Title: List Mode
/// Status: active
///
/// The processing mode that applies to this list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "ListMode",
    system = "http://hl7.org/fhir/list-mode",
    version = "4.0.1"
)]
pub enum ListMode {
    /// Display: Working List
    ///
    /// Definition: This list is the master list, maintained in an ongoing fashion with regular updates as the real world list it is tracking changes.
    #[code(
        value = "working",
        display = "Working List",
        definition = "This list is the master list, maintained in an ongoing fashion with regular updates as the real world list it is tracking changes."
    )]
    Working,
    /// Display: Snapshot List
    ///
    /// Definition: This list was prepared as a snapshot. It should not be assumed to be current.
    #[code(
        value = "snapshot",
        display = "Snapshot List",
        definition = "This list was prepared as a snapshot. It should not be assumed to be current."
    )]
    Snapshot,
    /// Display: Change List
    ///
    /// Definition: A point-in-time list that shows what changes have been made or recommended.
    #[code(
        value = "changes",
        display = "Change List",
        definition = "A point-in-time list that shows what changes have been made or recommended."
    )]
    Changes,
}
/// Coded [`ListMode`] value: optional `id`, `extension` and member code.
pub type ListModeCode = Coded<ListMode>;
