//! Canvas rendering for the seat plot.
//!
//! Draw order: background, links (when visible), seats, then the hovered
//! seat's ring and label on top.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::SeatPlotState;

/// Renders the complete seat plot to the canvas.
pub fn render(state: &SeatPlotState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(&state.theme.background.to_css());
	ctx.fill_rect(0.0, 0.0, state.width, state.height);

	if state.links_visible {
		draw_links(state, ctx);
	}
	draw_seats(state, ctx);
	draw_hover(state, ctx);
}

fn draw_links(state: &SeatPlotState, ctx: &CanvasRenderingContext2d) {
	ctx.set_stroke_style_str(&state.theme.link.to_css());
	ctx.set_line_width(state.config.link_width);
	ctx.begin_path();
	state.graph.visit_edges(|n1, n2, _| {
		ctx.move_to(n1.x() as f64, n1.y() as f64);
		ctx.line_to(n2.x() as f64, n2.y() as f64);
	});
	ctx.stroke();
}

fn draw_seats(state: &SeatPlotState, ctx: &CanvasRenderingContext2d) {
	state.graph.visit_nodes(|node| {
		let info = &node.data.user_data;
		ctx.begin_path();
		let _ = ctx.arc(node.x() as f64, node.y() as f64, info.radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&info.color);
		ctx.fill();
	});
}

fn draw_hover(state: &SeatPlotState, ctx: &CanvasRenderingContext2d) {
	let Some(seat) = state.hovered else {
		return;
	};
	state.graph.visit_nodes(|node| {
		let info = &node.data.user_data;
		if info.seat != seat {
			return;
		}
		let (x, y) = (node.x() as f64, node.y() as f64);

		ctx.begin_path();
		let _ = ctx.arc(x, y, info.radius + 2.0, 0.0, 2.0 * PI);
		ctx.set_stroke_style_str(&state.theme.hover_ring.to_css());
		ctx.set_line_width(1.5);
		ctx.stroke();

		ctx.set_fill_style_str(&state.theme.label.to_css());
		ctx.set_font(&state.config.label_font);
		let _ = ctx.fill_text(&info.label, x + info.radius + 4.0, y + 3.0);
	});
}
