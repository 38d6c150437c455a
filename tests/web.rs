#![cfg(target_arch = "wasm32")]

use portfolio_wasm::config::{GalleryConfig, SiteConfig};
use portfolio_wasm::contact::{check_submission, Field, Submission};
use portfolio_wasm::wasm::{dom, gallery};
use portfolio_wasm::SiteError;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn fixture(markup: &str) -> Element {
    let doc = document();
    let root = doc.create_element("div").unwrap();
    root.set_inner_html(markup);
    doc.body().unwrap().append_child(&root).unwrap();
    root
}

#[wasm_bindgen_test]
fn home_grid_renders_and_follows_filter_clicks() {
    let root = fixture(
        r#"<button class="filter-btn active" data-filter="all"></button>
           <button class="filter-btn" data-filter="web"></button>
           <button class="filter-btn" data-filter="robots"></button>
           <div id="home-projects-grid"></div>"#,
    );
    let doc = document();
    gallery::mount(&doc, &GalleryConfig::default()).unwrap();

    let grid = doc.get_element_by_id("home-projects-grid").unwrap();
    assert_eq!(grid.children().length(), 3);

    let buttons = doc.query_selector_all(".filter-btn").unwrap();
    let button = |i| {
        buttons
            .item(i)
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap()
    };

    button(1).click();
    assert_eq!(grid.children().length(), 1);
    assert!(grid.inner_html().contains("QR Code Generator"));
    assert!(button(1).class_list().contains("active"));
    assert!(!button(0).class_list().contains("active"));

    button(2).click();
    assert!(grid.inner_html().contains("No projects found in this category."));

    root.remove();
}

#[wasm_bindgen_test]
fn contact_form_marks_every_invalid_field() {
    let root = fixture(
        r#"<input id="name"><p id="name-error" class="hidden"></p>
           <input id="email"><p id="email-error" class="hidden"></p>
           <textarea id="message"></textarea><p id="message-error" class="hidden"></p>"#,
    );
    let doc = document();
    let input = |id: &str| {
        doc.get_element_by_id(id)
            .unwrap()
            .dyn_into::<HtmlInputElement>()
            .unwrap()
    };
    input("email").set_value("no-at-sign");
    doc.get_element_by_id("message").unwrap().set_text_content(Some("hi"));

    let mut form = dom::DomForm::find(&doc).unwrap();
    let values = form.read();
    let outcome = check_submission(&values, &mut form);
    assert_eq!(outcome, Submission::Cancel(vec![Field::Name, Field::Email]));

    let error = |id: &str| doc.get_element_by_id(id).unwrap().class_list();
    assert!(input("name").class_list().contains("border-red-500"));
    assert!(!error("name-error").contains("hidden"));
    assert!(!error("email-error").contains("hidden"));
    assert!(error("message-error").contains("hidden"));

    root.remove();
}

#[wasm_bindgen_test]
fn missing_config_block_means_defaults() {
    assert_eq!(dom::read_config(&document()), SiteConfig::default());
}

#[wasm_bindgen_test]
fn gallery_without_a_grid_reports_the_missing_anchor() {
    let root = fixture(r#"<button class="filter-btn" data-filter="all"></button>"#);
    let err = gallery::mount(&document(), &GalleryConfig::default()).unwrap_err();
    assert!(matches!(err, SiteError::MissingElement(id) if id == gallery::HOME_GRID_ID));
    root.remove();
}

#[wasm_bindgen_test]
fn contact_form_without_an_error_slot_is_not_mounted() {
    let root = fixture(
        r#"<input id="name"><p id="name-error" class="hidden"></p>
           <input id="email"><p id="email-error" class="hidden"></p>
           <textarea id="message"></textarea>"#,
    );
    let err = dom::DomForm::find(&document()).err().unwrap();
    assert!(matches!(err, SiteError::MissingElement(id) if id == "message-error"));
    root.remove();
}

#[wasm_bindgen_test]
fn malformed_config_block_falls_back_to_defaults() {
    let root = fixture(r#"<script type="application/json" id="site-config">{ "particles": </script>"#);
    assert_eq!(dom::read_config(&document()), SiteConfig::default());
    root.remove();
}
