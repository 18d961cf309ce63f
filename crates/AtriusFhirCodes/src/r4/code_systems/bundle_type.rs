// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: BundleType
/// Canonical URL: http://hl7.org/fhir/bundle-type
/// Title: Bundle Type
/// Status: active
///
/// Indicates the purpose of a bundle - how it is intended to be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "BundleType",
    system = "http://hl7.org/fhir/bundle-type",
    version = "4.0.1"
)]
pub enum BundleType {
    /// Display: Document
    ///
    /// Definition: The bundle is a document. The first resource is a Composition.
    #[code(
        value = "document",
        display = "Document",
        definition = "The bundle is a document. The first resource is a Composition."
    )]
    Document,
    /// Display: Message
    ///
    /// Definition: The bundle is a message. The first resource is a MessageHeader.
    #[code(
        value = "message",
        display = "Message",
        definition = "The bundle is a message. The first resource is a MessageHeader."
    )]
    Message,
    /// Display: Transaction
    ///
    /// Definition: The bundle is a transaction - intended to be processed by a server as an atomic commit.
    #[code(
        value = "transaction",
        display = "Transaction",
        definition = "The bundle is a transaction - intended to be processed by a server as an atomic commit."
    )]
    Transaction,
    /// Display: Transaction Response
    ///
    /// Definition: The bundle is a transaction response.
    #[code(
        value = "transaction-response",
        display = "Transaction Response",
        definition = "The bundle is a transaction response."
    )]
    TransactionResponse,
    /// Display: Batch
    ///
    /// Definition: The bundle is a set of actions - intended to be processed by a server as a group of independent actions.
    #[code(
        value = "batch",
        display = "Batch",
        definition = "The bundle is a set of actions - intended to be processed by a server as a group of independent actions."
    )]
    Batch,
    /// Display: Batch Response
    ///
    /// Definition: The bundle is a batch response.
    #[code(
        value = "batch-response",
        display = "Batch Response",
        definition = "The bundle is a batch response."
    )]
    BatchResponse,
    /// Display: History List
    ///
    /// Definition: The bundle is a list of resources from a history interaction on a server.
    #[code(
        value = "history",
        display = "History List",
        definition = "The bundle is a list of resources from a history interaction on a server."
    )]
    History,
    /// Display: Search Results
    ///
    /// Definition: The bundle is a list of resources returned as a result of a search/query interaction, operation, or message.
    #[code(
        value = "searchset",
        display = "Search Results",
        definition = "The bundle is a list of resources returned as a result of a search/query interaction, operation, or message."
    )]
    Searchset,
    /// Display: Collection
    ///
    /// Definition: The bundle is a set of resources collected into a single package for ease of distribution that imposes no processing obligations or behavioral rules beyond persistence.
    #[code(
        value = "collection",
        display = "Collection",
        definition = "The bundle is a set of resources collected into a single package for ease of distribution that imposes no processing obligations or behavioral rules beyond persistence."
    )]
    Collection,
}
/// Coded [`BundleType`] value: optional `id`, `extension` and member code.
pub type BundleTypeCode = Coded<BundleType>;
