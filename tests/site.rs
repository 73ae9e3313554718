//! End-to-end site generation

use std::fs;

use devoops::catalog::loader::CatalogLoader;
use devoops::Site;

const CONFIG: &str = r#"
title: DevOops
tagline: Oops Happens
url: https://chen-wenyi.github.io
base_url: /devoops
navbar:
  items:
    - label: Blog
      to: /blog
    - label: GitHub
      href: https://github.com/chen-wenyi/devoops
      position: right
search:
  app_id: CDC78XYJGF
  api_key: search-only
  index_name: chen-wenyiio
"#;

const CARDS: &str = r#"
- title: Front-end
  color: '#2f9e44'
  blocks:
    - title: React
      content:
        - title: Suspense
          link: /docs/frontend/react/suspense
        - title: Redux
          link: ''
    - title: Typescript
      content: []
- title: CI/CD
  color: '#2f9e44'
  blocks: []
"#;

fn write_site(dir: &std::path::Path) {
    fs::write(dir.join("_config.yml"), CONFIG).unwrap();
    fs::create_dir_all(dir.join("source/_data")).unwrap();
    fs::write(dir.join("source/_data/cards.yml"), CARDS).unwrap();
}

#[test]
fn generate_then_clean() {
    let dir = tempfile::tempdir().unwrap();
    write_site(dir.path());

    let site = Site::new(dir.path()).unwrap();
    site.generate().unwrap();

    let index = fs::read_to_string(site.public_dir.join("index.html")).unwrap();
    assert!(index.contains("<title>Hello from DevOops</title>"));
    assert_eq!(index.matches("<div class=\"card\" ").count(), 2);
    assert_eq!(index.matches("<div class=\"block\">").count(), 2);
    assert_eq!(index.matches("<span class=\"link\"").count(), 2);
    assert!(index.contains("href=\"/devoops/docs/frontend/react/suspense\""));
    assert!(index.contains("<a class=\"card-link\" aria-disabled=\"true\">"));
    assert!(index.contains("id=\"docsearch-config\""));
    assert!(index.contains("<a href=\"/devoops/blog\">Blog</a>"));

    assert!(site.public_dir.join("catalog.json").is_file());

    site.clean().unwrap();
    assert!(!site.public_dir.exists());
}

#[test]
fn generation_is_repeatable() {
    let dir = tempfile::tempdir().unwrap();
    write_site(dir.path());
    let site = Site::new(dir.path()).unwrap();

    site.generate().unwrap();
    let first = fs::read(site.public_dir.join("index.html")).unwrap();
    site.generate().unwrap();
    let second = fs::read(site.public_dir.join("index.html")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn invalid_cards_fail_generation() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("source/_data")).unwrap();
    fs::write(
        dir.path().join("source/_data/cards.yml"),
        "- title: ''\n  color: '#fff'\n",
    )
    .unwrap();

    let site = Site::new(dir.path()).unwrap();
    assert!(CatalogLoader::new(&site).load().is_err());
    assert!(site.generate().is_err());
    assert!(!site.public_dir.join("index.html").exists());
}

#[test]
fn init_then_generate() {
    let dir = tempfile::tempdir().unwrap();
    devoops::commands::init::init_site(dir.path()).unwrap();

    let site = Site::new(dir.path()).unwrap();
    site.generate().unwrap();

    let index = fs::read_to_string(site.public_dir.join("index.html")).unwrap();
    assert!(index.contains("<div class=\"card-title\">Cloud Computing Platform</div>"));
    assert!(index.contains("<nav class=\"navbar navbar--hideable\">"));
}
