/// HTML canvas renderer using the 2D context
use std::f64::consts::TAU;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use wireview_core::{Error, Projection, Renderer};

const EDGE_COLOR: &str = "#00c000";
const EDGE_WIDTH: f64 = 1.0;
const MARKER_RADIUS: f64 = 4.0;
const MARKER_FILL: &str = "#00c000";
const MARKER_STROKE: &str = "#008000";
const MARKER_STROKE_WIDTH: f64 = 1.5;

/// A canvas element together with its 2D drawing context
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, Error> {
        let context = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or_else(|| Error::missing("2d canvas context"))?;
        Ok(Self { canvas, context })
    }

    pub fn width(&self) -> f64 {
        f64::from(self.canvas.width())
    }

    pub fn height(&self) -> f64 {
        f64::from(self.canvas.height())
    }

    /// Match the drawing buffer to the element's laid-out size
    pub fn fit_to_client(&self) {
        let width = self.canvas.client_width().max(0) as u32;
        let height = self.canvas.client_height().max(0) as u32;
        tracing::debug!(width, height, "resizing canvas");
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }
}

/// Translation that puts the centre of the drawing's bounds at the centre of
/// a `width` x `height` surface
pub fn layer_offset(projection: &Projection, width: f64, height: f64) -> Option<(f64, f64)> {
    let center = projection.bounds()?.center();
    Some((
        width / 2.0 - f64::from(center.x),
        height / 2.0 - f64::from(center.y),
    ))
}

/// Draws green edges and round vertex markers
#[derive(Debug, Default, Clone, Copy)]
pub struct CanvasRenderer;

impl Renderer<CanvasSurface> for CanvasRenderer {
    type Error = JsValue;

    fn render(&self, surface: &mut CanvasSurface, projection: &Projection) -> Result<(), JsValue> {
        let ctx = &surface.context;
        ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)?;
        ctx.clear_rect(0.0, 0.0, surface.width(), surface.height());

        let Some((dx, dy)) = layer_offset(projection, surface.width(), surface.height()) else {
            return Ok(());
        };
        ctx.translate(dx, dy)?;

        ctx.set_stroke_style_str(EDGE_COLOR);
        ctx.set_line_width(EDGE_WIDTH);
        for (from, to) in projection.segments() {
            ctx.begin_path();
            ctx.move_to(f64::from(from.x), f64::from(from.y));
            ctx.line_to(f64::from(to.x), f64::from(to.y));
            ctx.stroke();
        }

        ctx.set_fill_style_str(MARKER_FILL);
        ctx.set_stroke_style_str(MARKER_STROKE);
        ctx.set_line_width(MARKER_STROKE_WIDTH);
        for point in &projection.points {
            ctx.begin_path();
            ctx.arc(f64::from(point.x), f64::from(point.y), MARKER_RADIUS, 0.0, TAU)?;
            ctx.fill();
            ctx.stroke();
        }

        ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
    }
}
