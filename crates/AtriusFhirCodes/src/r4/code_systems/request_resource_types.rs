// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: ActivityDefinitionKind
/// Canonical URL: http://hl7.org/fhir/request-resource-types
/// Title: Activity Definition Kind
/// Status: active
///
/// The kind of activity the definition is describing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "ActivityDefinitionKind",
    system = "http://hl7.org/fhir/request-resource-types",
    version = "4.0.1"
)]
pub enum ActivityDefinitionKind {
    /// Display: Appointment
    ///
    /// Definition: A booking of a healthcare event among patient(s), practitioner(s), related person(s) and/or device(s) for a specific date/time.
    #[code(
        value = "Appointment",
        display = "Appointment",
        definition = "A booking of a healthcare event among patient(s), practitioner(s), related person(s) and/or device(s) for a specific date/time."
    )]
    Appointment,
    /// Display: AppointmentResponse
    ///
    /// Definition: A reply to an appointment request for a patient and/or practitioner(s), such as a confirmation or rejection.
    #[code(
        value = "AppointmentResponse",
        display = "AppointmentResponse",
        definition = "A reply to an appointment request for a patient and/or practitioner(s), such as a confirmation or rejection."
    )]
    AppointmentResponse,
    /// Display: CarePlan
    ///
    /// Definition: Healthcare plan for patient or group.
    #[code(
        value = "CarePlan",
        display = "CarePlan",
        definition = "Healthcare plan for patient or group."
    )]
    CarePlan,
    /// Display: Claim
    ///
    /// Definition: Claim, Pre-determination or Pre-authorization.
    #[code(
        value = "Claim",
        display = "Claim",
        definition = "Claim, Pre-determination or Pre-authorization."
    )]
    Claim,
    /// Display: CommunicationRequest
    ///
    /// Definition: A request for information to be sent to a receiver.
    #[code(
        value = "CommunicationRequest",
        display = "CommunicationRequest",
        definition = "A request for information to be sent to a receiver."
    )]
    CommunicationRequest,
    /// Display: Contract
    ///
    /// Definition: Legal Agreement.
    #[code(value = "Contract", display = "Contract", definition = "Legal Agreement.")]
    Contract,
    /// Display: DeviceRequest
    ///
    /// Definition: Medical device request.
    #[code(
        value = "DeviceRequest",
        display = "DeviceRequest",
        definition = "Medical device request."
    )]
    DeviceRequest,
    /// Display: EnrollmentRequest
    ///
    /// Definition: Enrollment request.
    #[code(
        value = "EnrollmentRequest",
        display = "EnrollmentRequest",
        definition = "Enrollment request."
    )]
    EnrollmentRequest,
    /// Display: ImmunizationRecommendation
    ///
    /// Definition: Guidance or advice relating to an immunization.
    #[code(
        value = "ImmunizationRecommendation",
        display = "ImmunizationRecommendation",
        definition = "Guidance or advice relating to an immunization."
    )]
    ImmunizationRecommendation,
    /// Display: MedicationRequest
    ///
    /// Definition: Ordering of medication for patient or group.
    #[code(
        value = "MedicationRequest",
        display = "MedicationRequest",
        definition = "Ordering of medication for patient or group."
    )]
    MedicationRequest,
    /// Display: NutritionOrder
    ///
    /// Definition: Diet, formula or nutritional supplement request.
    #[code(
        value = "NutritionOrder",
        display = "NutritionOrder",
        definition = "Diet, formula or nutritional supplement request."
    )]
    NutritionOrder,
    /// Display: ServiceRequest
    ///
    /// Definition: A record of a request for service such as diagnostic investigations, treatments, or operations to be performed.
    #[code(
        value = "ServiceRequest",
        display = "ServiceRequest",
        definition = "A record of a request for service such as diagnostic investigations, treatments, or operations to be performed."
    )]
    ServiceRequest,
    /// Display: SupplyRequest
    ///
    /// Definition: Request for a medication, substance or device.
    #[code(
        value = "SupplyRequest",
        display = "SupplyRequest",
        definition = "Request for a medication, substance or device."
    )]
    SupplyRequest,
    /// Display: Task
    ///
    /// Definition: A task to be performed.
    #[code(value = "Task", display = "Task", definition = "A task to be performed.")]
    Task,
    /// Display: VisionPrescription
    ///
    /// Definition: Prescription for vision correction products for a patient.
    #[code(
        value = "VisionPrescription",
        display = "VisionPrescription",
        definition = "Prescription for vision correction products for a patient."
    )]
    VisionPrescription,
}
/// Coded [`ActivityDefinitionKind`] value: optional `id`, `extension` and member code.
pub type ActivityDefinitionKindCode = Coded<ActivityDefinitionKind>;
/// Legacy name of [`ActivityDefinitionKind`].
#[deprecated(note = "use `ActivityDefinitionKind`")]
pub type ActivityDefinitionKindValueSet = ActivityDefinitionKind;
