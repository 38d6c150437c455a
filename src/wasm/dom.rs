use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlInputElement, HtmlTextAreaElement};

use crate::config::SiteConfig;
use crate::contact::{ContactForm, Field, FormSurface, ERROR_BORDER_CLASS};
use crate::control::ToggleControl;
use crate::error::{Result, SiteError};
use crate::gallery::GridSurface;
use crate::theme::HIDDEN_CLASS;

pub const CONFIG_ELEMENT_ID: &str = "site-config";

pub fn host_err(err: JsValue) -> SiteError {
    SiteError::Host(format!("{err:?}"))
}

pub fn by_id(document: &Document, id: &str) -> Result<Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| SiteError::MissingElement(id.to_string()))
}

pub fn by_selector(document: &Document, selector: &str) -> Result<Element> {
    document
        .query_selector(selector)
        .map_err(host_err)?
        .ok_or_else(|| SiteError::MissingElement(selector.to_string()))
}

/// Reads the optional JSON override block; falls back to defaults.
pub fn read_config(document: &Document) -> SiteConfig {
    let Some(text) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return SiteConfig::default();
    };
    SiteConfig::from_json(&text).unwrap_or_else(|e| {
        log::warn!("{e}; using defaults");
        SiteConfig::default()
    })
}

/// An element driven through its class list.
#[derive(Clone)]
pub struct ElementControl(pub Element);

impl ToggleControl for ElementControl {
    fn set_class(&mut self, class: &str, on: bool) {
        if let Err(e) = self.0.class_list().toggle_with_force(class, on) {
            log::warn!("class `{class}` on #{}: {e:?}", self.0.id());
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }
}

pub struct ElementGrid(pub Element);

impl GridSurface for ElementGrid {
    fn set_markup(&mut self, markup: &str) {
        self.0.set_inner_html(markup);
    }
}

fn field_value(el: &Element) -> String {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        el.text_content().unwrap_or_default()
    }
}

/// The contact form inputs and the error message under each.
pub struct DomForm {
    fields: Vec<(Field, ElementControl, ElementControl)>,
}

impl DomForm {
    pub fn find(document: &Document) -> Result<Self> {
        let fields = Field::ALL
            .into_iter()
            .map(|f| -> Result<_> {
                Ok((
                    f,
                    ElementControl(by_id(document, f.input_id())?),
                    ElementControl(by_id(document, f.error_id())?),
                ))
            })
            .collect::<Result<_>>()?;
        Ok(Self { fields })
    }

    pub fn read(&self) -> ContactForm {
        let mut form = ContactForm::default();
        for (field, input, _) in &self.fields {
            let value = field_value(&input.0);
            match field {
                Field::Name => form.name = value,
                Field::Email => form.email = value,
                Field::Message => form.message = value,
            }
        }
        form
    }

    fn mark(&mut self, field: Field, invalid: bool) {
        if let Some((_, input, error)) = self.fields.iter_mut().find(|(f, _, _)| *f == field) {
            input.set_class(ERROR_BORDER_CLASS, invalid);
            error.set_class(HIDDEN_CLASS, !invalid);
        }
    }
}

impl FormSurface for DomForm {
    fn clear_error(&mut self, field: Field) {
        self.mark(field, false);
    }

    fn show_error(&mut self, field: Field) {
        self.mark(field, true);
    }
}
