use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement};

use crate::config::ParticleConfig;
use crate::error::{Result, SiteError};
use crate::particles::{Animation, Bounds, DrawSurface, ParticleField};
use crate::schedule::{Cadence, TaskHandle};

use super::dom::host_err;
use super::schedule;

pub struct CanvasSurface(CanvasRenderingContext2d);

impl DrawSurface for CanvasSurface {
    fn clear(&mut self, bounds: Bounds) {
        self.0.clear_rect(0.0, 0.0, bounds.width, bounds.height);
    }

    fn fill_disc(&mut self, x: f64, y: f64, radius: f64, color: &str) {
        let ctx = &self.0;
        ctx.set_fill_style_str(color);
        ctx.begin_path();
        if ctx.arc(x, y, radius, 0.0, TAU).is_ok() {
            ctx.fill();
        }
    }

    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: &str) {
        let ctx = &self.0;
        ctx.set_stroke_style_str(color);
        ctx.set_line_width(width);
        ctx.begin_path();
        ctx.move_to(from.0, from.1);
        ctx.line_to(to.0, to.1);
        ctx.stroke();
    }
}

fn viewport() -> Option<Bounds> {
    let w = window()?;
    Some(Bounds {
        width: w.inner_width().ok()?.as_f64()?,
        height: w.inner_height().ok()?.as_f64()?,
    })
}

fn fit(canvas: &HtmlCanvasElement, bounds: Bounds) {
    canvas.set_width(bounds.width as u32);
    canvas.set_height(bounds.height as u32);
}

/// Start the particle background on `canvas`; returns the redraw loop handle.
pub fn start(canvas: HtmlCanvasElement, config: ParticleConfig) -> Result<TaskHandle> {
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(host_err)?
        .ok_or(SiteError::NoDrawingContext)?
        .dyn_into()
        .map_err(|_| SiteError::NoDrawingContext)?;

    let bounds = viewport().ok_or_else(|| SiteError::Host("viewport size unavailable".into()))?;
    fit(&canvas, bounds);

    let field = ParticleField::spawn(config, bounds, &mut rand::thread_rng());
    let animation = Rc::new(RefCell::new(Animation {
        field,
        surface: CanvasSurface(ctx),
    }));

    // Resize canvas to fit window; every event resets the drawable size at once.
    let resize_closure = {
        let canvas = canvas.clone();
        let animation = animation.clone();
        Closure::wrap(Box::new(move || {
            if let Some(bounds) = viewport() {
                fit(&canvas, bounds);
                animation.borrow_mut().field.resize(bounds);
            }
        }) as Box<dyn FnMut()>)
    };
    window()
        .ok_or_else(|| SiteError::Host("no window".into()))?
        .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())
        .map_err(host_err)?;
    resize_closure.forget();

    schedule::spawn(animation, Cadence::NextFrame).map_err(host_err)
}
