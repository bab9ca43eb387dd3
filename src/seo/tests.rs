use super::*;

fn minimal() -> SeoConfig {
    SeoConfig {
        title: "Title".to_string(),
        description: "Description".to_string(),
        keywords: None,
        image: None,
        url: None,
        content_type: None,
    }
}

#[test]
fn test_publish_full_config() {
    let mut doc = MetaDocument::new();
    publish(&SeoConfig::default(), &mut doc);

    assert_eq!(
        doc.title(),
        Some("Два-Кадра - Детская студия видеотворчества в Ярославле")
    );
    assert_eq!(doc.entries().len(), 11);
    assert_eq!(doc.get("og:type"), Some("website"));
    assert_eq!(doc.get("twitter:image"), Some("/images/hero-kids-filming.jpg"));
    assert!(doc.get("keywords").unwrap().starts_with("студия видеотворчества, детская студия"));
}

#[test]
fn test_publish_is_idempotent() {
    let mut doc = MetaDocument::new();
    let config = SeoConfig::default();

    publish(&config, &mut doc);
    let first = doc.clone();
    publish(&config, &mut doc);

    assert_eq!(doc, first);
    let mut keys: Vec<_> = doc.entries().iter().map(|e| e.key.clone()).collect();
    let total = keys.len();
    keys.sort();
    keys.dedup();
    assert_eq!(keys.len(), total);
}

#[test]
fn test_publish_updates_in_place() {
    let mut doc = MetaDocument::new();
    publish(&SeoConfig::default(), &mut doc);

    let mut updated = SeoConfig::default();
    updated.title = "Новый заголовок".to_string();
    updated.description = "Новое описание".to_string();
    publish(&updated, &mut doc);

    assert_eq!(doc.entries().len(), 11);
    assert_eq!(doc.title(), Some("Новый заголовок"));
    assert_eq!(doc.get("og:title"), Some("Новый заголовок"));
    assert_eq!(doc.get("twitter:description"), Some("Новое описание"));
}

#[test]
fn test_optional_fields_skipped() {
    let mut doc = MetaDocument::new();
    publish(&minimal(), &mut doc);

    let keys: Vec<_> = doc.entries().iter().map(|e| e.key.as_str()).collect();
    assert_eq!(
        keys,
        vec![
            "og:title",
            "twitter:title",
            "description",
            "og:description",
            "twitter:description"
        ]
    );
}

#[test]
fn test_attribute_choice() {
    let mut doc = MetaDocument::new();
    publish(&SeoConfig::default(), &mut doc);

    for entry in doc.entries() {
        let namespaced = entry.key.starts_with("og:") || entry.key.starts_with("twitter:");
        let expected = if namespaced {
            MetaAttribute::Property
        } else {
            MetaAttribute::Name
        };
        assert_eq!(entry.attribute, expected, "key {}", entry.key);
    }
}

#[test]
fn test_existing_entry_reused() {
    let mut doc = MetaDocument::new();
    doc.append(MetaEntry {
        attribute: MetaAttribute::Name,
        key: "description".to_string(),
        content: "old".to_string(),
    });

    publish(&minimal(), &mut doc);

    let matching: Vec<_> = doc
        .entries()
        .iter()
        .filter(|e| e.key == "description")
        .collect();
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0].content, "Description");
}

#[test]
fn test_to_html_escapes() {
    let mut doc = MetaDocument::new();
    let mut config = minimal();
    config.title = "Tom & \"Jerry\"".to_string();
    publish(&config, &mut doc);

    let html = doc.to_html();
    assert!(html.contains("<title>Tom &amp; &quot;Jerry&quot;</title>"));
    assert!(html.contains(r#"<meta property="og:title" content="Tom &amp; &quot;Jerry&quot;">"#));
    assert!(html.contains(r#"<meta name="description" content="Description">"#));
}

#[test]
fn test_local_business_schema() {
    let schema = local_business_schema(&BusinessProfile::default());
    assert_eq!(schema["@context"], "https://schema.org");
    assert_eq!(schema["@type"], "LocalBusiness");
    assert_eq!(schema["name"], "Два-Кадра");
    assert_eq!(schema["address"]["@type"], "PostalAddress");
    assert_eq!(schema["address"]["addressCountry"], "RU");
    assert_eq!(schema["sameAs"][1], "https://t.me/dva_kadra");
    assert_eq!(schema["foundingDate"], "2017");
}

#[test]
fn test_organization_schema() {
    let schema = organization_schema(&BusinessProfile::default());
    assert_eq!(schema["@type"], "Organization");
    assert_eq!(schema["logo"], "/images/logo.png");
    assert_eq!(schema["contact"]["@type"], "ContactPoint");
    assert_eq!(schema["contact"]["availableLanguage"], "ru");
}

#[test]
fn test_breadcrumb_schema() {
    let schema = breadcrumb_schema(&[
        BreadcrumbItem::new("Главная", "https://example.com/"),
        BreadcrumbItem::new("Галерея", "https://example.com/#gallery"),
    ]);
    assert_eq!(schema["@type"], "BreadcrumbList");
    let list = schema["itemListElement"].as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["position"], 1);
    assert_eq!(list[1]["position"], 2);
    assert_eq!(list[1]["name"], "Галерея");
    assert_eq!(list[1]["item"], "https://example.com/#gallery");

    let empty = breadcrumb_schema(&[]);
    assert!(empty["itemListElement"].as_array().unwrap().is_empty());
}

#[test]
fn test_script_json_escapes_tags() {
    let value = serde_json::json!({ "name": "</script><b>" });
    let out = schema::to_script_json(&value);
    assert!(!out.contains("</script>"));
    assert!(out.contains("\\u003c/script>"));
}
