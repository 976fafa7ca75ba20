/// Rotation input from three range sliders
use std::convert::Infallible;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement};
use wireview_core::{Error, InputSource, RotationState};

/// X, Y and Z sliders whose values are degrees
pub struct SliderInput {
    sliders: [HtmlInputElement; 3],
}

impl SliderInput {
    /// Look up the three sliders by element id
    pub fn find(document: &Document, ids: [&str; 3]) -> Result<Self, Error> {
        let lookup = |id: &str| {
            document
                .get_element_by_id(id)
                .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
                .ok_or_else(|| Error::missing(format!("slider #{id}")))
        };
        Ok(Self {
            sliders: [lookup(ids[0])?, lookup(ids[1])?, lookup(ids[2])?],
        })
    }

    pub fn sliders(&self) -> &[HtmlInputElement; 3] {
        &self.sliders
    }
}

impl InputSource for SliderInput {
    type Error = Infallible;

    fn rotation(&self) -> Result<RotationState, Infallible> {
        let [x, y, z] = &self.sliders;
        Ok(RotationState::from_degrees(
            parse_degrees(&x.value()),
            parse_degrees(&y.value()),
            parse_degrees(&z.value()),
        ))
    }
}

/// Slider value to degrees. Blank reads as zero; anything unparseable is
/// NaN and flows through to the projection untouched.
pub fn parse_degrees(value: &str) -> f32 {
    let value = value.trim();
    if value.is_empty() {
        return 0.0;
    }
    value.parse().unwrap_or(f32::NAN)
}
