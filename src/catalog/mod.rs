//! Parts catalog access: HTTP client, raw payloads and simplified projections.

mod client;
pub mod normalize;
mod types;

pub use client::{is_valid_article_id, CatalogClient, CatalogError};
pub use types::{
    field_str, fields, ArticleSummary, EnvelopeData, OemNumber, PartIdentity, RawCatalogResponse,
    RawList, SimplifiedEnvelope, SupplierRef, VehicleApplicability,
};
