/// Wireview Web - canvas wireframe viewer for the browser
///
/// Wires a canvas and three rotation sliders to a [`WireframeProjector`].
/// Every slider `input` event and every window `resize` re-projects and
/// redraws the whole frame.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, HtmlCanvasElement};
use wireview_core::{obj, render_frame, Error, InputSource, WireframeProjector};

pub mod canvas;
pub mod slider;

pub use canvas::{CanvasRenderer, CanvasSurface};
pub use slider::SliderInput;

type Listener = Closure<dyn FnMut(Event)>;

/// An event listener that stays attached for as long as this value lives.
/// Dropping it detaches the callback before the closure is freed.
struct Registration {
    target: EventTarget,
    event: &'static str,
    listener: Listener,
}

impl Drop for Registration {
    fn drop(&mut self) {
        let callback = self.listener.as_ref().unchecked_ref();
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.event, callback)
        {
            tracing::warn!(event = self.event, ?err, "failed to detach listener");
        }
    }
}

struct ViewerState {
    projector: WireframeProjector,
    surface: CanvasSurface,
    input: SliderInput,
    renderer: CanvasRenderer,
    scale: f32,
    frames: u32,
}

impl ViewerState {
    fn redraw(&mut self) -> Result<(), JsValue> {
        let rotation = self.input.rotation().unwrap_or_else(|never| match never {});
        render_frame(
            &self.projector,
            &self.renderer,
            &mut self.surface,
            rotation,
            self.scale,
        )?;
        self.frames = self.frames.wrapping_add(1);
        Ok(())
    }

    fn resize(&mut self) -> Result<(), JsValue> {
        self.surface.fit_to_client();
        self.redraw()
    }
}

/// Canvas viewer bound to three sliders.
///
/// Slider and resize listeners are detached when the viewer is dropped (or
/// freed from JavaScript), so the page must keep a reference for as long as
/// the canvas should follow the sliders.
#[wasm_bindgen]
pub struct WireframeViewer {
    state: Rc<RefCell<ViewerState>>,
    _listeners: Vec<Registration>,
}

#[wasm_bindgen]
impl WireframeViewer {
    /// Show the canonical cube on `canvas_id`, driven by three sliders
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas_id: &str,
        x_slider_id: &str,
        y_slider_id: &str,
        z_slider_id: &str,
        scale: f32,
    ) -> Result<WireframeViewer, JsValue> {
        Self::build(
            WireframeProjector::cube(),
            canvas_id,
            [x_slider_id, y_slider_id, z_slider_id],
            scale,
        )
    }

    /// Same as the constructor, with the wireframe taken from OBJ text
    #[wasm_bindgen(js_name = fromObj)]
    pub fn from_obj(
        obj_text: &str,
        canvas_id: &str,
        x_slider_id: &str,
        y_slider_id: &str,
        z_slider_id: &str,
        scale: f32,
    ) -> Result<WireframeViewer, JsValue> {
        let projector = obj::parse_obj_wireframe(obj_text)
            .and_then(WireframeProjector::from_wireframe)
            .map_err(to_js)?;
        Self::build(projector, canvas_id, [x_slider_id, y_slider_id, z_slider_id], scale)
    }

    /// Redraw with the sliders' current values
    pub fn redraw(&self) -> Result<(), JsValue> {
        self.state.borrow_mut().redraw()
    }

    /// Refit the canvas to its element size and redraw
    pub fn resize(&self) -> Result<(), JsValue> {
        self.state.borrow_mut().resize()
    }

    /// Number of frames drawn so far
    #[wasm_bindgen(getter)]
    pub fn frames(&self) -> u32 {
        self.state.borrow().frames
    }
}

impl WireframeViewer {
    fn build(
        projector: WireframeProjector,
        canvas_id: &str,
        slider_ids: [&str; 3],
        scale: f32,
    ) -> Result<WireframeViewer, JsValue> {
        let window = web_sys::window().ok_or_else(|| to_js(Error::missing("window")))?;
        let document = window
            .document()
            .ok_or_else(|| to_js(Error::missing("document")))?;

        let canvas = document
            .get_element_by_id(canvas_id)
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
            .ok_or_else(|| to_js(Error::missing(format!("canvas #{canvas_id}"))))?;
        let surface = CanvasSurface::new(canvas).map_err(to_js)?;
        let input = SliderInput::find(&document, slider_ids).map_err(to_js)?;

        let targets: Vec<EventTarget> = input
            .sliders()
            .iter()
            .map(|slider| slider.clone().unchecked_into())
            .collect();

        let state = Rc::new(RefCell::new(ViewerState {
            projector,
            surface,
            input,
            renderer: CanvasRenderer,
            scale,
            frames: 0,
        }));

        let mut listeners = Vec::new();
        for target in targets {
            listeners.push(listen(target, "input", &state, ViewerState::redraw)?);
        }
        let window: EventTarget = window.unchecked_into();
        listeners.push(listen(window, "resize", &state, ViewerState::resize)?);

        state.borrow_mut().resize()?;
        tracing::debug!(canvas_id, "wireframe viewer attached");

        Ok(WireframeViewer {
            state,
            _listeners: listeners,
        })
    }
}

fn listen(
    target: EventTarget,
    event: &'static str,
    state: &Rc<RefCell<ViewerState>>,
    action: fn(&mut ViewerState) -> Result<(), JsValue>,
) -> Result<Registration, JsValue> {
    let state = Rc::clone(state);
    let listener = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        if let Err(err) = action(&mut state.borrow_mut()) {
            tracing::error!(event, ?err, "redraw failed");
        }
    });
    target.add_event_listener_with_callback(event, listener.as_ref().unchecked_ref())?;
    Ok(Registration {
        target,
        event,
        listener,
    })
}

fn to_js(err: Error) -> JsValue {
    JsValue::from_str(&err.to_string())
}
