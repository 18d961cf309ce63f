// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: EventTiming
/// Canonical URL: http://hl7.org/fhir/event-timing
/// Title: Event Timing
/// Status: active
///
/// Real world event relating to the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "EventTiming",
    system = "http://hl7.org/fhir/event-timing",
    version = "4.0.1"
)]
pub enum EventTiming {
    /// Display: Morning
    ///
    /// Definition: Event occurs during the morning. The exact time is unspecified and established by institution convention or patient interpretation.
    #[code(
        value = "MORN",
        display = "Morning",
        definition = "Event occurs during the morning. The exact time is unspecified and established by institution convention or patient interpretation."
    )]
    Morn,
    /// Display: Early Morning
    ///
    /// Definition: Event occurs during the early morning. The exact time is unspecified and established by institution convention or patient interpretation.
    #[code(
        value = "MORN.early",
        display = "Early Morning",
        definition = "Event occurs during the early morning. The exact time is unspecified and established by institution convention or patient interpretation."
    )]
    MornEarly,
    /// Display: Late Morning
    ///
    /// Definition: Event occurs during the late morning. The exact time is unspecified and established by institution convention or patient interpretation.
    #[code(
        value = "MORN.late",
        display = "Late Morning",
        definition = "Event occurs during the late morning. The exact time is unspecified and established by institution convention or patient interpretation."
    )]
    MornLate,
    /// Display: Noon
    ///
    /// Definition: Event occurs around 12:00pm. The exact time is unspecified and established by institution convention or patient interpretation.
    #[code(
        value = "NOON",
        display = "Noon",
        definition = "Event occurs around 12:00pm. The exact time is unspecified and established by institution convention or patient interpretation."
    )]
    Noon,
    /// Display: Afternoon
    ///
    /// Definition: Event occurs during the afternoon. The exact time is unspecified and established by institution convention or patient interpretation.
    #[code(
        value = "AFT",
        display = "Afternoon",
        definition = "Event occurs during the afternoon. The exact time is unspecified and established by institution convention or patient interpretation."
    )]
    Aft,
    /// Display: Early Afternoon
    ///
    /// Definition: Event occurs during the early afternoon. The exact time is unspecified and established by institution convention or patient interpretation.
    #[code(
        value = "AFT.early",
        display = "Early Afternoon",
        definition = "Event occurs during the early afternoon. The exact time is unspecified and established by institution convention or patient interpretation."
    )]
    AftEarly,
    /// Display: Late Afternoon
    ///
    /// Definition: Event occurs during the late afternoon. The exact time is unspecified and established by institution convention or patient interpretation.
    #[code(
        value = "AFT.late",
        display = "Late Afternoon",
        definition = "Event occurs during the late afternoon. The exact time is unspecified and established by institution convention or patient interpretation."
    )]
    AftLate,
    /// Display: Evening
    ///
    /// Definition: Event occurs during the evening. The exact time is unspecified and established by institution convention or patient interpretation.
    #[code(
        value = "EVE",
        display = "Evening",
        definition = "Event occurs during the evening. The exact time is unspecified and established by institution convention or patient interpretation."
    )]
    Eve,
    /// Display: Early Evening
    ///
    /// Definition: Event occurs during the early evening. The exact time is unspecified and established by institution convention or patient interpretation.
    #[code(
        value = "EVE.early",
        display = "Early Evening",
        definition = "Event occurs during the early evening. The exact time is unspecified and established by institution convention or patient interpretation."
    )]
    EveEarly,
    /// Display: Late Evening
    ///
    /// Definition: Event occurs during the late evening. The exact time is unspecified and established by institution convention or patient interpretation.
    #[code(
        value = "EVE.late",
        display = "Late Evening",
        definition = "Event occurs during the late evening. The exact time is unspecified and established by institution convention or patient interpretation."
    )]
    EveLate,
    /// Display: Night
    ///
    /// Definition: Event occurs during the night. The exact time is unspecified and established by institution convention or patient interpretation.
    #[code(
        value = "NIGHT",
        display = "Night",
        definition = "Event occurs during the night. The exact time is unspecified and established by institution convention or patient interpretation."
    )]
    Night,
    /// Display: After Sleep
    ///
    /// Definition: Event occurs [offset] after subject goes to sleep. The exact time is unspecified and established by institution convention or patient interpretation.
    #[code(
        value = "PHS",
        display = "After Sleep",
        definition = "Event occurs [offset] after subject goes to sleep. The exact time is unspecified and established by institution convention or patient interpretation."
    )]
    Phs,
    /// Display: HS
    ///
    /// Definition: Prior to beginning a regular period of extended sleep (this would exclude naps).
    #[code(
        value = "HS",
        display = "HS",
        definition = "Prior to beginning a regular period of extended sleep (this would exclude naps)."
    )]
    Hs,
    /// Display: WAKE
    ///
    /// Definition: Upon waking up from a regular period of sleep, in order to start regular activities (this would exclude waking up from a nap or temporarily waking up during a period of sleep).
    #[code(
        value = "WAKE",
        display = "WAKE",
        definition = "Upon waking up from a regular period of sleep, in order to start regular activities (this would exclude waking up from a nap or temporarily waking up during a period of sleep)."
    )]
    Wake,
    /// Display: C
    ///
    /// Definition: Meal.
    #[code(value = "C", display = "C", definition = "Meal.")]
    C,
    /// Display: CM
    ///
    /// Definition: Breakfast.
    #[code(value = "CM", display = "CM", definition = "Breakfast.")]
    Cm,
    /// Display: CD
    ///
    /// Definition: Lunch.
    #[code(value = "CD", display = "CD", definition = "Lunch.")]
    Cd,
    /// Display: CV
    ///
    /// Definition: Dinner.
    #[code(value = "CV", display = "CV", definition = "Dinner.")]
    Cv,
    /// Display: AC
    ///
    /// Definition: Before meal (from lat. ante cibus).
    #[code(
        value = "AC",
        display = "AC",
        definition = "Before meal (from lat. ante cibus)."
    )]
    Ac,
    /// Display: ACM
    ///
    /// Definition: Before breakfast (from lat. ante cibus matutinus).
    #[code(
        value = "ACM",
        display = "ACM",
        definition = "Before breakfast (from lat. ante cibus matutinus)."
    )]
    Acm,
    /// Display: ACD
    ///
    /// Definition: Before lunch (from lat. ante cibus diurnus).
    #[code(
        value = "ACD",
        display = "ACD",
        definition = "Before lunch (from lat. ante cibus diurnus)."
    )]
    Acd,
    /// Display: ACV
    ///
    /// Definition: Before dinner (from lat. ante cibus vespertinus).
    #[code(
        value = "ACV",
        display = "ACV",
        definition = "Before dinner (from lat. ante cibus vespertinus)."
    )]
    Acv,
    /// Display: PC
    ///
    /// Definition: After meal (from lat. post cibus).
    #[code(
        value = "PC",
        display = "PC",
        definition = "After meal (from lat. post cibus)."
    )]
    Pc,
    /// Display: PCM
    ///
    /// Definition: After breakfast (from lat. post cibus matutinus).
    #[code(
        value = "PCM",
        display = "PCM",
        definition = "After breakfast (from lat. post cibus matutinus)."
    )]
    Pcm,
    /// Display: PCD
    ///
    /// Definition: After lunch (from lat. post cibus diurnus).
    #[code(
        value = "PCD",
        display = "PCD",
        definition = "After lunch (from lat. post cibus diurnus)."
    )]
    Pcd,
    /// Display: PCV
    ///
    /// Definition: After dinner (from lat. post cibus vespertinus).
    #[code(
        value = "PCV",
        display = "PCV",
        definition = "After dinner (from lat. post cibus vespertinus)."
    )]
    Pcv,
}
/// Coded [`EventTiming`] value: optional `id`, `extension` and member code.
pub type EventTimingCode = Coded<EventTiming>;
/// Legacy name of [`EventTiming`].
#[deprecated(note = "use `EventTiming`")]
pub type EventTimingValueSet = EventTiming;
