//! Theme toggle, mobile menu, hero typewriter and contact form wiring.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Document, Element, Event};

use crate::config::{ThemeConfig, TypingConfig};
use crate::contact::{check_submission, Submission};
use crate::error::{Result, SiteError};
use crate::menu::MobileMenu;
use crate::schedule::{Cadence, TaskHandle};
use crate::theme::{ThemeSwitch, ThemeView};
use crate::typing::{Typewriter, TypingCycler};

use super::dom::{by_id, by_selector, host_err, DomForm, ElementControl};
use super::schedule;
use super::storage::LocalStorage;

fn on(target: &Element, event: &str, handler: Box<dyn FnMut(Event)>) -> Result<()> {
    let closure = Closure::wrap(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(host_err)?;
    closure.forget();
    Ok(())
}

pub fn mount_theme(document: &Document, cfg: &ThemeConfig) -> Result<()> {
    let toggle = by_id(document, "theme-toggle")?;
    let body: Element = document
        .body()
        .ok_or_else(|| SiteError::MissingElement("body".to_string()))?
        .into();
    let mut view = ThemeView {
        body: ElementControl(body),
        moon_icon: ElementControl(by_selector(document, ".light-icon")?),
        sun_icon: ElementControl(by_selector(document, ".dark-icon")?),
    };

    let mut switch = ThemeSwitch::load(LocalStorage::open(), cfg.storage_key.clone());
    view.apply(switch.current());

    on(
        &toggle,
        "click",
        Box::new(move |_: Event| {
            let theme = switch.toggle();
            view.apply(theme);
        }),
    )
}

pub fn mount_menu(document: &Document) -> Result<()> {
    let button = by_id(document, "mobile-menu-btn")?;
    let mut panel = ElementControl(by_id(document, "mobile-menu")?);
    let mut menu = MobileMenu::default();

    let target = button.clone();
    on(
        &target,
        "click",
        Box::new(move |_: Event| {
            menu.toggle();
            menu.apply(&mut panel);
            button.set_inner_html(menu.button_markup());
        }),
    )
}

pub fn mount_typing(document: &Document, cfg: &TypingConfig) -> Result<TaskHandle> {
    let target = by_id(document, "typing-text")?;
    let cycler = TypingCycler::new(cfg.clone())?;
    let writer = Typewriter {
        cycler,
        show: move |text: &str| target.set_text_content(Some(text)),
    };
    schedule::spawn(writer, Cadence::After(0)).map_err(host_err)
}

pub fn mount_contact(document: &Document) -> Result<()> {
    let form_el = by_id(document, "contact-form")?;
    let form = Rc::new(RefCell::new(DomForm::find(document)?));

    on(
        &form_el,
        "submit",
        Box::new(move |event: Event| {
            let mut form = form.borrow_mut();
            let values = form.read();
            if let Submission::Cancel(_) = check_submission(&values, &mut *form) {
                event.prevent_default();
            }
        }),
    )
}
