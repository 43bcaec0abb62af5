//! Leptos component wrapping the seat plot canvas.
//!
//! The component creates an HTML canvas element and wires pointer and wheel
//! handlers to the scene state. An animation loop runs via
//! `requestAnimationFrame`, ticking the layout while it has energy left and
//! redrawing every frame.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent};

use super::config::SeatPlotConfig;
use super::render;
use super::state::SeatPlotState;
use super::theme::SeatTheme;
use crate::browser::{browser_rng, half_screen};
use crate::data::SeatData;
use crate::error::{Result, VizError};

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d> {
	canvas
		.get_context("2d")
		.map_err(|e| VizError::Js(format!("{e:?}")))?
		.ok_or_else(|| VizError::Js("canvas has no 2d context".into()))?
		.dyn_into()
		.map_err(|_| VizError::Js("2d context has unexpected type".into()))
}

fn canvas_position(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	)
}

/// Renders the force-directed seat plot on a canvas.
///
/// Sized to half the available screen unless `width`/`height` are given.
/// Releasing the pointer anywhere on the plot toggles the links; scrolling
/// over it flips a random set of seats to the other party.
#[component]
pub fn SeatPlotCanvas(
	#[prop(into)] data: Signal<SeatData>,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<SeatPlotState>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (state_init, animate_init) = (state.clone(), animate.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let (w, h) = match (width, height) {
			(Some(w), Some(h)) => (w, h),
			_ => {
				let (sw, sh) = half_screen(&window).unwrap_or_else(|e| {
					warn!("house-viz: using default seat plot size: {}", e);
					(800.0, 600.0)
				});
				(width.unwrap_or(sw), height.unwrap_or(sh))
			}
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx = match context_2d(&canvas) {
			Ok(ctx) => ctx,
			Err(e) => {
				warn!("house-viz: seat plot disabled: {}", e);
				return;
			}
		};

		*state_init.borrow_mut() = Some(SeatPlotState::new(
			data.get(),
			w,
			h,
			SeatPlotConfig::default(),
			SeatTheme::default(),
			browser_rng(),
		));

		let (state_anim, animate_inner) = (state_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.tick(0.016);
				render::render(s, &ctx);
			}
			if let (Some(cb), Some(win)) = (animate_inner.borrow().as_ref(), web_sys::window()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let state_mu = state.clone();
	let on_mouseup = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_mu.borrow_mut() {
			s.toggle_links();
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let (x, y) = canvas_position(&canvas, &ev);
		if let Some(ref mut s) = *state_mm.borrow_mut() {
			let hovered = s.node_at_position(x, y);
			s.set_hover(hovered);
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.set_hover(None);
		}
	};

	let state_wh = state.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		if let Some(ref mut s) = *state_wh.borrow_mut() {
			s.shuffle_parties();
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			id="seats-canvas"
			class="seat-plot-canvas"
			on:mouseup=on_mouseup
			on:mousemove=on_mousemove
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			style="display: block; cursor: pointer;"
		/>
	}
}
