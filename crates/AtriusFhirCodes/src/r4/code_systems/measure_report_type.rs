// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: MeasureReportType
/// Canonical URL: http://hl7.org/fhir/measure-report-type
/// Title: Measure Report Type
/// Status: active
///
/// The type of the measure report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "MeasureReportType",
    system = "http://hl7.org/fhir/measure-report-type",
    version = "4.0.1"
)]
pub enum MeasureReportType {
    /// Display: Individual
    ///
    /// Definition: An individual report that provides information on the performance for a given measure with respect to a single subject.
    #[code(
        value = "individual",
        display = "Individual",
        definition = "An individual report that provides information on the performance for a given measure with respect to a single subject."
    )]
    Individual,
    /// Display: Subject List
    ///
    /// Definition: A subject list report that includes a listing of subjects that satisfied each population criteria in the measure.
    #[code(
        value = "subject-list",
        display = "Subject List",
        definition = "A subject list report that includes a listing of subjects that satisfied each population criteria in the measure."
    )]
    SubjectList,
    /// Display: Summary
    ///
    /// Definition: A summary report that returns the number of members in each population criteria for the measure.
    #[code(
        value = "summary",
        display = "Summary",
        definition = "A summary report that returns the number of members in each population criteria for the measure."
    )]
    Summary,
    /// Display: Data Collection
    ///
    /// Definition: A data collection report that contains data-of-interest for the measure.
    #[code(
        value = "data-collection",
        display = "Data Collection",
        definition = "A data collection report that contains data-of-interest for the measure."
    )]
    DataCollection,
}
/// Coded [`MeasureReportType`] value: optional `id`, `extension` and member code.
pub type MeasureReportTypeCode = Coded<MeasureReportType>;
