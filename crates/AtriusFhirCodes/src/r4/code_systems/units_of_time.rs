// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: UnitsOfTime
/// Canonical URL: http://unitsofmeasure.org
/// Title: Units Of Time
/// Status: active
///
/// A unit of time (units from UCUM).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "UnitsOfTime",
    system = "http://unitsofmeasure.org",
    version = "4.0.1"
)]
pub enum UnitsOfTime {
    /// Display: second
    ///
    /// Definition: Second.
    #[code(value = "s", display = "second", definition = "Second.")]
    S,
    /// Display: minute
    ///
    /// Definition: Minute.
    #[code(value = "min", display = "minute", definition = "Minute.")]
    Min,
    /// Display: hour
    ///
    /// Definition: Hour.
    #[code(value = "h", display = "hour", definition = "Hour.")]
    H,
    /// Display: day
    ///
    /// Definition: Day.
    #[code(value = "d", display = "day", definition = "Day.")]
    D,
    /// Display: week
    ///
    /// Definition: Week.
    #[code(value = "wk", display = "week", definition = "Week.")]
    Wk,
    /// Display: month
    ///
    /// Definition: Month.
    #[code(value = "mo", display = "month", definition = "Month.")]
    Mo,
    /// Display: year
    ///
    /// Definition: Year.
    #[code(value = "a", display = "year", definition = "Year.")]
    A,
}
/// Coded [`UnitsOfTime`] value: optional `id`, `extension` and member code.
pub type UnitsOfTimeCode = Coded<UnitsOfTime>;
