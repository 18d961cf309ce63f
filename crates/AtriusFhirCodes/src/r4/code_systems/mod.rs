// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

//! FHIR R4 (4.0.1) code systems bound with `required` strength.
pub mod account_status;
pub mod action_cardinality_behavior;
pub mod action_condition_kind;
pub mod action_grouping_behavior;
pub mod action_participant_type;
pub mod action_precheck_behavior;
pub mod action_relationship_type;
pub mod action_required_behavior;
pub mod action_selection_behavior;
pub mod address_type;
pub mod address_use;
pub mod administrative_gender;
pub mod adverse_event_actuality;
pub mod allergy_intolerance_category;
pub mod allergy_intolerance_criticality;
pub mod allergy_intolerance_type;
pub mod appointmentstatus;
pub mod assert_direction_codes;
pub mod assert_operator_codes;
pub mod audit_event_action;
pub mod audit_event_outcome;
pub mod binding_strength;
pub mod bundle_type;
pub mod capability_statement_kind;
pub mod care_plan_activity_status;
pub mod care_plan_intent;
pub mod care_plan_status;
pub mod care_team_status;
pub mod chargeitem_status;
pub mod claim_use;
pub mod clinicalimpression_status;
pub mod code_search_support;
pub mod codesystem_content_mode;
pub mod codesystem_hierarchy_meaning;
pub mod composition_attestation_mode;
pub mod composition_status;
pub mod concept_map_equivalence;
pub mod concept_property_type;
pub mod conditional_delete_status;
pub mod conditional_read_status;
pub mod consent_data_meaning;
pub mod consent_provision_type;
pub mod consent_state_codes;
pub mod constraint_severity;
pub mod contact_point_system;
pub mod contact_point_use;
pub mod contributor_type;
pub mod days_of_week;
pub mod detectedissue_severity;
pub mod device_nametype;
pub mod device_statement_status;
pub mod diagnostic_report_status;
pub mod discriminator_type;
pub mod document_mode;
pub mod document_reference_status;
pub mod document_relationship_type;
pub mod encounter_location_status;
pub mod encounter_status;
pub mod endpoint_status;
pub mod episode_of_care_status;
pub mod event_capability_mode;
pub mod event_status;
pub mod event_timing;
pub mod filter_operator;
pub mod flag_status;
pub mod fm_status;
pub mod goal_status;
pub mod group_type;
pub mod guidance_response_status;
pub mod history_status;
pub mod http_verb;
pub mod identifier_use;
pub mod identity_assurance_level;
pub mod imagingstudy_status;
pub mod immunization_status;
pub mod invoice_status;
pub mod issue_severity;
pub mod issue_type;
pub mod item_type;
pub mod link_type;
pub mod linkage_type;
pub mod list_mode;
pub mod list_status;
pub mod location_mode;
pub mod location_status;
pub mod measure_report_status;
pub mod measure_report_type;
pub mod medication_statement_status;
pub mod medicationrequest_intent;
pub mod medicationrequest_status;
pub mod name_use;
pub mod narrative_status;
pub mod network_type;
pub mod note_type;
pub mod observation_status;
pub mod operation_kind;
pub mod operation_parameter_use;
pub mod participantrequired;
pub mod participationstatus;
pub mod property_representation;
pub mod provenance_entity_role;
pub mod publication_status;
pub mod quantity_comparator;
pub mod questionnaire_answers_status;
pub mod questionnaire_enable_operator;
pub mod reaction_event_severity;
pub mod reference_handling_policy;
pub mod remittance_outcome;
pub mod report_result_codes;
pub mod report_status_codes;
pub mod request_intent;
pub mod request_priority;
pub mod request_resource_types;
pub mod request_status;
pub mod resource_aggregation_mode;
pub mod resource_slicing_rules;
pub mod restful_capability_mode;
pub mod search_comparator;
pub mod search_entry_mode;
pub mod search_modifier_code;
pub mod search_param_type;
pub mod search_xpath_usage;
pub mod slotstatus;
pub mod sort_direction;
pub mod specimen_status;
pub mod structure_definition_kind;
pub mod subscription_channel_type;
pub mod subscription_status;
pub mod task_intent;
pub mod task_status;
pub mod type_derivation_rule;
pub mod units_of_time;
pub mod versioning_policy;
pub mod vision_base_codes;
pub mod vision_eye_codes;
pub use account_status::*;
pub use action_cardinality_behavior::*;
pub use action_condition_kind::*;
pub use action_grouping_behavior::*;
pub use action_participant_type::*;
pub use action_precheck_behavior::*;
pub use action_relationship_type::*;
pub use action_required_behavior::*;
pub use action_selection_behavior::*;
pub use address_type::*;
pub use address_use::*;
pub use administrative_gender::*;
pub use adverse_event_actuality::*;
pub use allergy_intolerance_category::*;
pub use allergy_intolerance_criticality::*;
pub use allergy_intolerance_type::*;
pub use appointmentstatus::*;
pub use assert_direction_codes::*;
pub use assert_operator_codes::*;
pub use audit_event_action::*;
pub use audit_event_outcome::*;
pub use binding_strength::*;
pub use bundle_type::*;
pub use capability_statement_kind::*;
pub use care_plan_activity_status::*;
pub use care_plan_intent::*;
pub use care_plan_status::*;
pub use care_team_status::*;
pub use chargeitem_status::*;
pub use claim_use::*;
pub use clinicalimpression_status::*;
pub use code_search_support::*;
pub use codesystem_content_mode::*;
pub use codesystem_hierarchy_meaning::*;
pub use composition_attestation_mode::*;
pub use composition_status::*;
pub use concept_map_equivalence::*;
pub use concept_property_type::*;
pub use conditional_delete_status::*;
pub use conditional_read_status::*;
pub use consent_data_meaning::*;
pub use consent_provision_type::*;
pub use consent_state_codes::*;
pub use constraint_severity::*;
pub use contact_point_system::*;
pub use contact_point_use::*;
pub use contributor_type::*;
pub use days_of_week::*;
pub use detectedissue_severity::*;
pub use device_nametype::*;
pub use device_statement_status::*;
pub use diagnostic_report_status::*;
pub use discriminator_type::*;
pub use document_mode::*;
pub use document_reference_status::*;
pub use document_relationship_type::*;
pub use encounter_location_status::*;
pub use encounter_status::*;
pub use endpoint_status::*;
pub use episode_of_care_status::*;
pub use event_capability_mode::*;
pub use event_status::*;
pub use event_timing::*;
pub use filter_operator::*;
pub use flag_status::*;
pub use fm_status::*;
pub use goal_status::*;
pub use group_type::*;
pub use guidance_response_status::*;
pub use history_status::*;
pub use http_verb::*;
pub use identifier_use::*;
pub use identity_assurance_level::*;
pub use imagingstudy_status::*;
pub use immunization_status::*;
pub use invoice_status::*;
pub use issue_severity::*;
pub use issue_type::*;
pub use item_type::*;
pub use link_type::*;
pub use linkage_type::*;
pub use list_mode::*;
pub use list_status::*;
pub use location_mode::*;
pub use location_status::*;
pub use measure_report_status::*;
pub use measure_report_type::*;
pub use medication_statement_status::*;
pub use medicationrequest_intent::*;
pub use medicationrequest_status::*;
pub use name_use::*;
pub use narrative_status::*;
pub use network_type::*;
pub use note_type::*;
pub use observation_status::*;
pub use operation_kind::*;
pub use operation_parameter_use::*;
pub use participantrequired::*;
pub use participationstatus::*;
pub use property_representation::*;
pub use provenance_entity_role::*;
pub use publication_status::*;
pub use quantity_comparator::*;
pub use questionnaire_answers_status::*;
pub use questionnaire_enable_operator::*;
pub use reaction_event_severity::*;
pub use reference_handling_policy::*;
pub use remittance_outcome::*;
pub use report_result_codes::*;
pub use report_status_codes::*;
pub use request_intent::*;
pub use request_priority::*;
pub use request_resource_types::*;
pub use request_status::*;
pub use resource_aggregation_mode::*;
pub use resource_slicing_rules::*;
pub use restful_capability_mode::*;
pub use search_comparator::*;
pub use search_entry_mode::*;
pub use search_modifier_code::*;
pub use search_param_type::*;
pub use search_xpath_usage::*;
pub use slotstatus::*;
pub use sort_direction::*;
pub use specimen_status::*;
pub use structure_definition_kind::*;
pub use subscription_channel_type::*;
pub use subscription_status::*;
pub use task_intent::*;
pub use task_status::*;
pub use type_derivation_rule::*;
pub use units_of_time::*;
pub use versioning_policy::*;
pub use vision_base_codes::*;
pub use vision_eye_codes::*;
use crate::VocabularyInfo;
/// Every generated vocabulary, in module order.
pub static VOCABULARIES: &[VocabularyInfo] = &[
    VocabularyInfo::of::<AccountStatus>(),
    VocabularyInfo::of::<ActionCardinalityBehavior>(),
    VocabularyInfo::of::<ActionConditionKind>(),
    VocabularyInfo::of::<ActionGroupingBehavior>(),
    VocabularyInfo::of::<ActionParticipantType>(),
    VocabularyInfo::of::<ActionPrecheckBehavior>(),
    VocabularyInfo::of::<ActionRelationshipType>(),
    VocabularyInfo::of::<ActionRequiredBehavior>(),
    VocabularyInfo::of::<ActionSelectionBehavior>(),
    VocabularyInfo::of::<AddressType>(),
    VocabularyInfo::of::<AddressUse>(),
    VocabularyInfo::of::<AdministrativeGender>(),
    VocabularyInfo::of::<AdverseEventActuality>(),
    VocabularyInfo::of::<AllergyIntoleranceCategory>(),
    VocabularyInfo::of::<AllergyIntoleranceCriticality>(),
    VocabularyInfo::of::<AllergyIntoleranceType>(),
    VocabularyInfo::of::<AppointmentStatus>(),
    VocabularyInfo::of::<AssertionDirectionType>(),
    VocabularyInfo::of::<AssertionOperatorType>(),
    VocabularyInfo::of::<AuditEventAction>(),
    VocabularyInfo::of::<AuditEventOutcome>(),
    VocabularyInfo::of::<BindingStrength>(),
    VocabularyInfo::of::<BundleType>(),
    VocabularyInfo::of::<CapabilityStatementKind>(),
    VocabularyInfo::of::<CarePlanActivityStatus>(),
    VocabularyInfo::of::<CarePlanIntent>(),
    VocabularyInfo::of::<CarePlanStatus>(),
    VocabularyInfo::of::<CareTeamStatus>(),
    VocabularyInfo::of::<ChargeItemStatus>(),
    VocabularyInfo::of::<Use>(),
    VocabularyInfo::of::<ClinicalImpressionStatus>(),
    VocabularyInfo::of::<CodeSearchSupport>(),
    VocabularyInfo::of::<CodeSystemContentMode>(),
    VocabularyInfo::of::<CodeSystemHierarchyMeaning>(),
    VocabularyInfo::of::<CompositionAttestationMode>(),
    VocabularyInfo::of::<CompositionStatus>(),
    VocabularyInfo::of::<ConceptMapEquivalence>(),
    VocabularyInfo::of::<PropertyType>(),
    VocabularyInfo::of::<ConditionalDeleteStatus>(),
    VocabularyInfo::of::<ConditionalReadStatus>(),
    VocabularyInfo::of::<ConsentDataMeaning>(),
    VocabularyInfo::of::<ConsentProvisionType>(),
    VocabularyInfo::of::<ConsentState>(),
    VocabularyInfo::of::<ConstraintSeverity>(),
    VocabularyInfo::of::<ContactPointSystem>(),
    VocabularyInfo::of::<ContactPointUse>(),
    VocabularyInfo::of::<ContributorType>(),
    VocabularyInfo::of::<DaysOfWeek>(),
    VocabularyInfo::of::<DetectedIssueSeverity>(),
    VocabularyInfo::of::<DeviceNameType>(),
    VocabularyInfo::of::<DeviceUseStatementStatus>(),
    VocabularyInfo::of::<DiagnosticReportStatus>(),
    VocabularyInfo::of::<DiscriminatorType>(),
    VocabularyInfo::of::<DocumentMode>(),
    VocabularyInfo::of::<DocumentReferenceStatus>(),
    VocabularyInfo::of::<DocumentRelationshipType>(),
    VocabularyInfo::of::<EncounterLocationStatus>(),
    VocabularyInfo::of::<EncounterStatus>(),
    VocabularyInfo::of::<EndpointStatus>(),
    VocabularyInfo::of::<EpisodeOfCareStatus>(),
    VocabularyInfo::of::<EventCapabilityMode>(),
    VocabularyInfo::of::<EventStatus>(),
    VocabularyInfo::of::<EventTiming>(),
    VocabularyInfo::of::<FilterOperator>(),
    VocabularyInfo::of::<FlagStatus>(),
    VocabularyInfo::of::<ClaimStatus>(),
    VocabularyInfo::of::<GoalLifecycleStatus>(),
    VocabularyInfo::of::<GroupType>(),
    VocabularyInfo::of::<GuidanceResponseStatus>(),
    VocabularyInfo::of::<FamilyHistoryStatus>(),
    VocabularyInfo::of::<HTTPVerb>(),
    VocabularyInfo::of::<IdentifierUse>(),
    VocabularyInfo::of::<IdentityAssuranceLevel>(),
    VocabularyInfo::of::<ImagingStudyStatus>(),
    VocabularyInfo::of::<ImmunizationStatus>(),
    VocabularyInfo::of::<InvoiceStatus>(),
    VocabularyInfo::of::<IssueSeverity>(),
    VocabularyInfo::of::<IssueType>(),
    VocabularyInfo::of::<QuestionnaireItemType>(),
    VocabularyInfo::of::<LinkType>(),
    VocabularyInfo::of::<LinkageType>(),
    VocabularyInfo::of::<ListMode>(),
    VocabularyInfo::of::<ListStatus>(),
    VocabularyInfo::of::<LocationMode>(),
    VocabularyInfo::of::<LocationStatus>(),
    VocabularyInfo::of::<MeasureReportStatus>(),
    VocabularyInfo::of::<MeasureReportType>(),
    VocabularyInfo::of::<MedicationStatementStatus>(),
    VocabularyInfo::of::<MedicationRequestIntent>(),
    VocabularyInfo::of::<MedicationRequestStatus>(),
    VocabularyInfo::of::<NameUse>(),
    VocabularyInfo::of::<NarrativeStatus>(),
    VocabularyInfo::of::<AuditEventAgentNetworkType>(),
    VocabularyInfo::of::<NoteType>(),
    VocabularyInfo::of::<ObservationStatus>(),
    VocabularyInfo::of::<OperationKind>(),
    VocabularyInfo::of::<OperationParameterUse>(),
    VocabularyInfo::of::<ParticipantRequired>(),
    VocabularyInfo::of::<ParticipationStatus>(),
    VocabularyInfo::of::<PropertyRepresentation>(),
    VocabularyInfo::of::<ProvenanceEntityRole>(),
    VocabularyInfo::of::<PublicationStatus>(),
    VocabularyInfo::of::<QuantityComparator>(),
    VocabularyInfo::of::<QuestionnaireResponseStatus>(),
    VocabularyInfo::of::<QuestionnaireItemOperator>(),
    VocabularyInfo::of::<AllergyIntoleranceSeverity>(),
    VocabularyInfo::of::<ReferenceHandlingPolicy>(),
    VocabularyInfo::of::<RemittanceOutcome>(),
    VocabularyInfo::of::<TestReportResult>(),
    VocabularyInfo::of::<TestReportStatus>(),
    VocabularyInfo::of::<RequestIntent>(),
    VocabularyInfo::of::<RequestPriority>(),
    VocabularyInfo::of::<ActivityDefinitionKind>(),
    VocabularyInfo::of::<RequestStatus>(),
    VocabularyInfo::of::<AggregationMode>(),
    VocabularyInfo::of::<SlicingRules>(),
    VocabularyInfo::of::<RestfulCapabilityMode>(),
    VocabularyInfo::of::<SearchComparator>(),
    VocabularyInfo::of::<SearchEntryMode>(),
    VocabularyInfo::of::<SearchModifierCode>(),
    VocabularyInfo::of::<SearchParamType>(),
    VocabularyInfo::of::<XPathUsageType>(),
    VocabularyInfo::of::<SlotStatus>(),
    VocabularyInfo::of::<SortDirection>(),
    VocabularyInfo::of::<SpecimenStatus>(),
    VocabularyInfo::of::<StructureDefinitionKind>(),
    VocabularyInfo::of::<SubscriptionChannelType>(),
    VocabularyInfo::of::<SubscriptionStatus>(),
    VocabularyInfo::of::<TaskIntent>(),
    VocabularyInfo::of::<TaskStatus>(),
    VocabularyInfo::of::<TypeDerivationRule>(),
    VocabularyInfo::of::<UnitsOfTime>(),
    VocabularyInfo::of::<ResourceVersionPolicy>(),
    VocabularyInfo::of::<VisionBase>(),
    VocabularyInfo::of::<VisionEyes>(),
];
