use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Document, Element};

use crate::catalog::CATALOG;
use crate::config::GalleryConfig;
use crate::error::{Result, SiteError};
use crate::gallery::{Filter, FilterBar, Gallery, Grid, GridView};

use super::dom::{host_err, ElementControl, ElementGrid};

pub const HOME_GRID_ID: &str = "home-projects-grid";
pub const ALL_GRID_ID: &str = "all-projects-grid";
pub const FILTER_BUTTON_SELECTOR: &str = ".filter-btn";

fn filter_buttons(document: &Document) -> Result<Vec<(Filter, ElementControl)>> {
    let nodes = document
        .query_selector_all(FILTER_BUTTON_SELECTOR)
        .map_err(host_err)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .map(|el| {
            let filter = Filter::from_attr(&el.get_attribute("data-filter").unwrap_or_default());
            (filter, ElementControl(el))
        })
        .collect())
}

/// Mounts whichever project grids the page has and wires the filter buttons.
pub fn mount(document: &Document, cfg: &GalleryConfig) -> Result<()> {
    let grids: Vec<_> = [(HOME_GRID_ID, GridView::Home), (ALL_GRID_ID, GridView::FullListing)]
        .into_iter()
        .filter_map(|(id, view)| {
            let el = document.get_element_by_id(id)?;
            Some(Grid::mount(view, &CATALOG, cfg, ElementGrid(el)))
        })
        .collect();
    if grids.is_empty() {
        return Err(SiteError::MissingElement(HOME_GRID_ID.to_string()));
    }

    let buttons = filter_buttons(document)?;
    let targets: Vec<Element> = buttons.iter().map(|(_, b)| b.0.clone()).collect();
    let gallery = Rc::new(RefCell::new(Gallery::new(grids, FilterBar::new(buttons))));

    for (index, button) in targets.into_iter().enumerate() {
        let gallery = gallery.clone();
        let on_click = Closure::wrap(Box::new(move || {
            gallery.borrow_mut().click(index);
        }) as Box<dyn FnMut()>);
        button
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .map_err(host_err)?;
        on_click.forget();
    }
    Ok(())
}
