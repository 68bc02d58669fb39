//! Content bounds resolution.
//!
//! The intrinsic size of the graphic comes from the first source in this
//! chain that yields a usable answer:
//! 1. the rendered tight bounding box
//! 2. the `viewBox` attribute
//! 3. the `width`/`height` attributes, each axis falling back on its own
//! 4. a fixed 400x300 fallback
//!
//! A failing source never aborts the chain; it simply falls through.

use crate::error::BoundsError;
use crate::geometry::Size;

pub const FALLBACK_WIDTH: f64 = 400.0;
pub const FALLBACK_HEIGHT: f64 = 300.0;

/// Read access to the graphic element's size information.
pub trait BoundsSource {
    /// Tight bounding box of the rendered content.
    fn bounding_box(&self) -> Result<Size, BoundsError>;

    /// Raw `viewBox` attribute value, if present.
    fn view_box(&self) -> Option<String>;

    /// Raw value of an attribute (`width`, `height`), if present.
    fn attribute(&self, name: &str) -> Option<String>;
}

/// Which source produced a [`ContentBounds`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundsOrigin {
    BoundingBox,
    ViewBox,
    Attributes,
    Fallback,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContentBounds {
    pub size: Size,
    pub origin: BoundsOrigin,
}

impl ContentBounds {
    pub fn fallback() -> Self {
        Self {
            size: Size::new(FALLBACK_WIDTH, FALLBACK_HEIGHT),
            origin: BoundsOrigin::Fallback,
        }
    }
}

/// Walk the fallback chain and return the first usable size.
pub fn resolve_content_bounds(source: &dyn BoundsSource) -> ContentBounds {
    match source.bounding_box() {
        Ok(size) if size.is_valid() => {
            return ContentBounds {
                size,
                origin: BoundsOrigin::BoundingBox,
            }
        }
        Ok(size) => log::trace!(
            "ignoring degenerate bounding box {}x{}",
            size.width,
            size.height
        ),
        Err(e) => log::trace!("bounding box unavailable: {}", e),
    }

    if let Some(size) = source.view_box().as_deref().and_then(parse_view_box) {
        return ContentBounds {
            size,
            origin: BoundsOrigin::ViewBox,
        };
    }

    let width = source.attribute("width").as_deref().and_then(parse_length);
    let height = source.attribute("height").as_deref().and_then(parse_length);
    if width.is_some() || height.is_some() {
        return ContentBounds {
            size: Size::new(
                width.unwrap_or(FALLBACK_WIDTH),
                height.unwrap_or(FALLBACK_HEIGHT),
            ),
            origin: BoundsOrigin::Attributes,
        };
    }

    ContentBounds::fallback()
}

/// Parse a `viewBox` value (`min-x min-y width height`, separated by
/// whitespace and/or commas). Returns the width/height if both are finite
/// and positive.
pub fn parse_view_box(value: &str) -> Option<Size> {
    let numbers: Vec<f64> = value
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .map(str::parse::<f64>)
        .collect::<Result<_, _>>()
        .ok()?;

    let [_, _, width, height] = numbers.as_slice() else {
        return None;
    };
    let size = Size::new(*width, *height);
    size.is_valid().then_some(size)
}

/// Parse a `width`/`height` attribute: a plain number, optionally with a `px`
/// suffix. Percentages and other units are rejected.
pub fn parse_length(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    let number = trimmed.strip_suffix("px").unwrap_or(trimmed).trim_end();
    let parsed: f64 = number.parse().ok()?;
    (parsed.is_finite() && parsed > 0.0).then_some(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct FakeGraphic {
        bbox: Option<Size>,
        attributes: HashMap<&'static str, &'static str>,
    }

    impl BoundsSource for FakeGraphic {
        fn bounding_box(&self) -> Result<Size, BoundsError> {
            self.bbox
                .ok_or_else(|| BoundsError::Unavailable("not rendered".into()))
        }

        fn view_box(&self) -> Option<String> {
            self.attribute("viewBox")
        }

        fn attribute(&self, name: &str) -> Option<String> {
            self.attributes.get(name).map(|v| v.to_string())
        }
    }

    fn graphic(bbox: Option<Size>, attributes: &[(&'static str, &'static str)]) -> FakeGraphic {
        FakeGraphic {
            bbox,
            attributes: attributes.iter().copied().collect(),
        }
    }

    #[test]
    fn bounding_box_wins_when_available() {
        let g = graphic(
            Some(Size::new(812.0, 604.0)),
            &[("viewBox", "0 0 800 600"), ("width", "100"), ("height", "50")],
        );
        let bounds = resolve_content_bounds(&g);
        assert_eq!(bounds.size, Size::new(812.0, 604.0));
        assert_eq!(bounds.origin, BoundsOrigin::BoundingBox);
    }

    #[test]
    fn zero_bounding_box_falls_through_to_view_box() {
        let g = graphic(Some(Size::new(0.0, 0.0)), &[("viewBox", "0 0 800 600")]);
        let bounds = resolve_content_bounds(&g);
        assert_eq!(bounds.size, Size::new(800.0, 600.0));
        assert_eq!(bounds.origin, BoundsOrigin::ViewBox);
    }

    #[test]
    fn failing_bounding_box_falls_through_to_view_box() {
        let g = graphic(None, &[("viewBox", "-10,-10, 640,480")]);
        let bounds = resolve_content_bounds(&g);
        assert_eq!(bounds.size, Size::new(640.0, 480.0));
        assert_eq!(bounds.origin, BoundsOrigin::ViewBox);
    }

    #[test]
    fn invalid_view_box_falls_through_to_attributes() {
        let g = graphic(
            None,
            &[("viewBox", "0 0 0 600"), ("width", "320px"), ("height", "200")],
        );
        let bounds = resolve_content_bounds(&g);
        assert_eq!(bounds.size, Size::new(320.0, 200.0));
        assert_eq!(bounds.origin, BoundsOrigin::Attributes);
    }

    #[test]
    fn width_only_falls_back_on_height() {
        let g = graphic(None, &[("width", "320")]);
        let bounds = resolve_content_bounds(&g);
        assert_eq!(bounds.size, Size::new(320.0, 300.0));
        assert_eq!(bounds.origin, BoundsOrigin::Attributes);
    }

    #[test]
    fn height_only_falls_back_on_width() {
        let g = graphic(None, &[("width", "50%"), ("height", "120px")]);
        let bounds = resolve_content_bounds(&g);
        assert_eq!(bounds.size, Size::new(400.0, 120.0));
        assert_eq!(bounds.origin, BoundsOrigin::Attributes);
    }

    #[test]
    fn nothing_usable_uses_fallback() {
        let g = graphic(None, &[("width", "100%"), ("height", "auto")]);
        let bounds = resolve_content_bounds(&g);
        assert_eq!(bounds.size, Size::new(400.0, 300.0));
        assert_eq!(bounds.origin, BoundsOrigin::Fallback);
    }

    #[test]
    fn view_box_parsing() {
        assert_eq!(parse_view_box("0 0 800 600"), Some(Size::new(800.0, 600.0)));
        assert_eq!(parse_view_box("  0,0,  1.5e2 75 "), Some(Size::new(150.0, 75.0)));
        assert_eq!(parse_view_box("0 0 800"), None);
        assert_eq!(parse_view_box("0 0 800 600 1"), None);
        assert_eq!(parse_view_box("0 0 -800 600"), None);
        assert_eq!(parse_view_box("0 0 wide 600"), None);
        assert_eq!(parse_view_box("0 0 inf 600"), None);
    }

    #[test]
    fn length_parsing() {
        assert_eq!(parse_length("800"), Some(800.0));
        assert_eq!(parse_length(" 640.5px "), Some(640.5));
        assert_eq!(parse_length("0"), None);
        assert_eq!(parse_length("-3"), None);
        assert_eq!(parse_length("50%"), None);
        assert_eq!(parse_length("10em"), None);
        assert_eq!(parse_length("NaN"), None);
    }
}
