use super::{TemplateEngine, TemplateError};
use std::fs;
use tempfile::TempDir;

fn setup_test_templates() -> (TempDir, TemplateEngine) {
    let temp_dir = TempDir::new().unwrap();
    let template_path = temp_dir.path();
    fs::create_dir_all(template_path.join("pages")).unwrap();
    fs::create_dir_all(template_path.join("partials")).unwrap();

    let header_content = r#"<!DOCTYPE html>
<html>
<head>
    <title>{% if page_title %}{{ page_title }} - {% endif %}Test Studio</title>
</head>
<body>
    <main>"#;
    fs::write(
        template_path.join("partials/_header.html.liquid"),
        header_content,
    )
    .unwrap();

    let footer_content = r#"    </main>
    <footer>&copy; {{ current_year }} Test Studio</footer>
</body>
</html>"#;
    fs::write(
        template_path.join("partials/_footer.html.liquid"),
        footer_content,
    )
    .unwrap();

    let index_content = r#"{% assign page_title = "Home" %}
{% include "_header.html.liquid" %}
<h1>Welcome</h1>
<ul>
{% for video in videos %}
    <li{% if video.active %} class="active"{% endif %}>{{ video.title }}</li>
{% endfor %}
</ul>
{% include "_footer.html.liquid" %}"#;
    fs::write(template_path.join("pages/index.html.liquid"), index_content).unwrap();

    let template_engine = TemplateEngine::new(template_path.to_path_buf());
    (temp_dir, template_engine)
}

#[tokio::test]
async fn test_render_page_with_partials() {
    let (_temp_dir, engine) = setup_test_templates();

    let globals = liquid::object!({
        "current_year": 2025,
        "videos": [
            { "title": "Ежовости", "active": true },
            { "title": "Любопытно", "active": false },
        ],
    });

    let html = engine
        .render_template("pages/index.html.liquid", &globals)
        .await
        .unwrap();
    assert!(html.contains("<title>Home - Test Studio</title>"));
    assert!(html.contains(r#"<li class="active">Ежовости</li>"#));
    assert!(html.contains("<li>Любопытно</li>"));
    assert!(html.contains("&copy; 2025 Test Studio"));
}

#[tokio::test]
async fn test_missing_template() {
    let (_temp_dir, engine) = setup_test_templates();

    let result = engine
        .render_template("pages/missing.html.liquid", &liquid::object!({}))
        .await;
    assert!(matches!(result, Err(TemplateError::NotFound(_))));
    assert!(!engine.has_template("pages/missing.html.liquid").await);
    assert!(engine.has_template("pages/index.html.liquid").await);
}

#[tokio::test]
async fn test_missing_partial_error() {
    let (temp_dir, engine) = setup_test_templates();
    fs::write(
        temp_dir.path().join("pages/bad.html.liquid"),
        r#"{% include "_missing.html.liquid" %}"#,
    )
    .unwrap();

    let result = engine
        .render_template("pages/bad.html.liquid", &liquid::object!({}))
        .await;
    assert!(matches!(result, Err(TemplateError::LiquidError(_))));
}

#[tokio::test]
async fn test_render_without_partials_directory() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("plain.html.liquid"), "Hi {{ name }}").unwrap();

    let engine = TemplateEngine::new(temp_dir.path().to_path_buf());
    let html = engine
        .render_template("plain.html.liquid", &liquid::object!({ "name": "Аня" }))
        .await
        .unwrap();
    assert_eq!(html, "Hi Аня");
}

#[tokio::test]
async fn test_template_reloads_after_change() {
    let (temp_dir, engine) = setup_test_templates();
    let path = temp_dir.path().join("pages/note.html.liquid");
    fs::write(&path, "first").unwrap();

    let globals = liquid::object!({});
    assert_eq!(
        engine
            .render_template("pages/note.html.liquid", &globals)
            .await
            .unwrap(),
        "first"
    );
    // Cached copy is served while the file is unchanged.
    assert_eq!(
        engine
            .render_template("pages/note.html.liquid", &globals)
            .await
            .unwrap(),
        "first"
    );

    let file = fs::OpenOptions::new().write(true).open(&path).unwrap();
    fs::write(&path, "second").unwrap();
    file.set_modified(std::time::SystemTime::now() + std::time::Duration::from_secs(5))
        .unwrap();

    assert_eq!(
        engine
            .render_template("pages/note.html.liquid", &globals)
            .await
            .unwrap(),
        "second"
    );
}

#[tokio::test]
async fn test_render_page_maps_errors_to_500() {
    let (_temp_dir, engine) = setup_test_templates();
    let result = engine
        .render_page("pages/missing.html.liquid", &liquid::object!({}))
        .await;
    assert_eq!(
        result.unwrap_err(),
        axum::http::StatusCode::INTERNAL_SERVER_ERROR
    );
}
