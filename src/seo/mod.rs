// SEO module - document metadata and structured data
mod config;
pub mod hints;
mod publish;
pub mod schema;
mod surface;

pub use config::{BusinessProfile, PostalAddress, SeoConfig};
pub use hints::ImageHint;
pub use publish::{publish, upsert};
pub use schema::{BreadcrumbItem, breadcrumb_schema, local_business_schema, organization_schema};
pub use surface::{MetaAttribute, MetaDocument, MetaEntry, MetadataSurface, escape_html};

#[cfg(test)]
mod tests;
