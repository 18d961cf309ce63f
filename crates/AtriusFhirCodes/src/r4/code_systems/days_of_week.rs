// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: DaysOfWeek
/// Canonical URL: http://hl7.org/fhir/days-of-week
/// Title: Days Of Week
/// Status: active
///
/// The days of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "DaysOfWeek",
    system = "http://hl7.org/fhir/days-of-week",
    version = "4.0.1"
)]
pub enum DaysOfWeek {
    /// Display: Monday
    ///
    /// Definition: Monday.
    #[code(value = "mon", display = "Monday", definition = "Monday.")]
    Mon,
    /// Display: Tuesday
    ///
    /// Definition: Tuesday.
    #[code(value = "tue", display = "Tuesday", definition = "Tuesday.")]
    Tue,
    /// Display: Wednesday
    ///
    /// Definition: Wednesday.
    #[code(value = "wed", display = "Wednesday", definition = "Wednesday.")]
    Wed,
    /// Display: Thursday
    ///
    /// Definition: Thursday.
    #[code(value = "thu", display = "Thursday", definition = "Thursday.")]
    Thu,
    /// Display: Friday
    ///
    /// Definition: Friday.
    #[code(value = "fri", display = "Friday", definition = "Friday.")]
    Fri,
    /// Display: Saturday
    ///
    /// Definition: Saturday.
    #[code(value = "sat", display = "Saturday", definition = "Saturday.")]
    Sat,
    /// Display: Sunday
    ///
    /// Definition: Sunday.
    #[code(value = "sun", display = "Sunday", definition = "Sunday.")]
    Sun,
}
/// Coded [`DaysOfWeek`] value: optional `id`, `extension` and member code.
pub type DaysOfWeekCode = Coded<DaysOfWeek>;
/// Legacy name of [`DaysOfWeek`].
#[deprecated(note = "use `DaysOfWeek`")]
pub type DaysOfWeekValueSet = DaysOfWeek;
