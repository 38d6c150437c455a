#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

//! Client-side behavior of the portfolio site: project gallery filtering,
//! theme toggle, hero typewriter, particle background and contact form checks.
//!
//! Everything outside `wasm` is plain Rust and runs under `cargo test` on the
//! host; the browser glue only talks to these modules through small
//! capability traits.

pub mod catalog;
pub mod config;
pub mod contact;
pub mod control;
pub mod error;
pub mod gallery;
pub mod menu;
pub mod particles;
pub mod schedule;
pub mod theme;
pub mod typing;

pub use error::{Result, SiteError};

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use wasm_bindgen::prelude::*;

    use crate::error::SiteError;

    pub mod controls;
    pub mod dom;
    pub mod gallery;
    pub mod render;
    pub mod schedule;
    pub mod storage;

    /// Features whose anchor element is absent are skipped, not failed.
    fn mount<T>(feature: &str, result: crate::Result<T>) {
        match result {
            Ok(_) => log::debug!("{feature}: mounted"),
            Err(SiteError::MissingElement(id)) => log::debug!("{feature}: skipped, no `{id}`"),
            Err(SiteError::NoDrawingContext) => log::debug!("{feature}: skipped, no 2d canvas"),
            Err(e) => log::error!("{feature}: {e}"),
        }
    }

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        let level = if cfg!(debug_assertions) {
            log::Level::Debug
        } else {
            log::Level::Info
        };
        console_log::init_with_level(level).ok();

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let config = dom::read_config(&document);

        mount("gallery", gallery::mount(&document, &config.gallery));
        mount("menu", controls::mount_menu(&document));
        mount("theme", controls::mount_theme(&document, &config.theme));
        mount("typing", controls::mount_typing(&document, &config.typing));

        let canvas = dom::by_id(&document, "canvas-bg").and_then(|el| {
            el.dyn_into::<web_sys::HtmlCanvasElement>()
                .map_err(|_| SiteError::NoDrawingContext)
        });
        mount(
            "particles",
            canvas.and_then(|c| render::start(c, config.particles.clone())),
        );

        mount("contact", controls::mount_contact(&document));
        log::info!("portfolio page ready");
        Ok(())
    }
}
