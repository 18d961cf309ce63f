// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: DeviceNameType
/// Canonical URL: http://hl7.org/fhir/device-nametype
/// Title: Device Name Type
/// Status: active
///
/// The type of name the device is referred by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "DeviceNameType",
    system = "http://hl7.org/fhir/device-nametype",
    version = "4.0.1"
)]
pub enum DeviceNameType {
    /// Display: UDI Label name
    ///
    /// Definition: UDI Label name.
    #[code(
        value = "udi-label-name",
        display = "UDI Label name",
        definition = "UDI Label name."
    )]
    UdiLabelName,
    /// Display: User Friendly name
    ///
    /// Definition: User Friendly name.
    #[code(
        value = "user-friendly-name",
        display = "User Friendly name",
        definition = "User Friendly name."
    )]
    UserFriendlyName,
    /// Display: Patient Reported name
    ///
    /// Definition: Patient Reported name.
    #[code(
        value = "patient-reported-name",
        display = "Patient Reported name",
        definition = "Patient Reported name."
    )]
    PatientReportedName,
    /// Display: Manufacturer name
    ///
    /// Definition: Manufacturer name.
    #[code(
        value = "manufacturer-name",
        display = "Manufacturer name",
        definition = "Manufacturer name."
    )]
    ManufacturerName,
    /// Display: Model name
    ///
    /// Definition: Model name.
    #[code(value = "model-name", display = "Model name", definition = "Model name.")]
    ModelName,
    /// Display: other
    ///
    /// Definition: other.
    #[code(value = "other", display = "other", definition = "other.")]
    Other,
}
/// Coded [`DeviceNameType`] value: optional `id`, `extension` and member code.
pub type DeviceNameTypeCode = Coded<DeviceNameType>;
