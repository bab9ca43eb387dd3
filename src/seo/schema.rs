//! schema.org structured data, rendered into `application/ld+json` blocks.

use super::BusinessProfile;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

const CONTEXT: &str = "https://schema.org";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BreadcrumbItem {
    pub name: String,
    pub url: String,
}

impl BreadcrumbItem {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

pub fn local_business_schema(profile: &BusinessProfile) -> Value {
    json!({
        "@context": CONTEXT,
        "@type": "LocalBusiness",
        "name": profile.name,
        "image": profile.image,
        "description": profile.description,
        "url": profile.url,
        "telephone": profile.telephone,
        "email": profile.email,
        "address": {
            "@type": "PostalAddress",
            "streetAddress": profile.address.street_address,
            "addressLocality": profile.address.locality,
            "addressRegion": profile.address.region,
            "postalCode": profile.address.postal_code,
            "addressCountry": profile.address.country,
        },
        "priceRange": profile.price_range,
        "sameAs": profile.same_as,
        "foundingDate": profile.founding_date,
        "areaServed": profile.area_served,
        "serviceType": profile.service_type,
    })
}

pub fn organization_schema(profile: &BusinessProfile) -> Value {
    json!({
        "@context": CONTEXT,
        "@type": "Organization",
        "name": profile.name,
        "url": profile.url,
        "logo": profile.logo,
        "description": profile.short_description,
        "sameAs": profile.same_as,
        "contact": {
            "@type": "ContactPoint",
            "contactType": "Customer Service",
            "availableLanguage": profile.language,
        },
    })
}

/// Positions are 1-based and follow the order of `items`.
pub fn breadcrumb_schema(items: &[BreadcrumbItem]) -> Value {
    let elements: Vec<Value> = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            json!({
                "@type": "ListItem",
                "position": index + 1,
                "name": item.name,
                "item": item.url,
            })
        })
        .collect();

    json!({
        "@context": CONTEXT,
        "@type": "BreadcrumbList",
        "itemListElement": elements,
    })
}

/// Serializes a schema for embedding inside a `<script>` element.
///
/// `<` is escaped so that a value can never close the script tag early.
pub fn to_script_json(schema: &Value) -> String {
    schema.to_string().replace('<', "\\u003c")
}
