// Fixed layout of the progress graphic

pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#;
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
pub const SVG_VERSION: &str = "1.1";

pub const CANVAS_WIDTH: &str = "1040";
pub const CANVAS_HEIGHT: &str = "103.99997";
pub const VIEW_BOX: &str = "0 0 275.16667 27.516659";

pub const GRADIENT_ID: &str = "a";
pub const CLIP_ID: &str = "clip";

pub const GRADIENT_X1: &str = "10.354899";
pub const GRADIENT_Y1: &str = "22.651342";
pub const GRADIENT_X2: &str = "299.86063";
pub const GRADIENT_Y2: &str = "22.651342";
pub const GRADIENT_UNITS: &str = "userSpaceOnUse";
pub const GRADIENT_TRANSFORM: &str =
    "matrix(0.91391398,0,0,0.64339551,0.82815907,4.1845399)";

pub struct GradientStop {
    pub offset: &'static str,
    pub color: &'static str,
}

pub const GRADIENT_STOPS: [GradientStop; 3] = [
    GradientStop { offset: "0", color: "#1d65bb" },
    GradientStop { offset: "0.75", color: "#9c3f90" },
    GradientStop { offset: "1", color: "#ed3728" },
];

pub const GROUP_TRANSFORM: &str = "translate(-4.9999838,-4.9999819)";

pub struct RectGeometry {
    pub width: &'static str,
    pub height: &'static str,
    pub x: &'static str,
    pub y: &'static str,
}

pub const BORDER_RECT: RectGeometry = RectGeometry {
    width: "271.68005",
    height: "24.030039",
    x: "6.7432938",
    y: "6.7432919",
};

pub const BORDER_STYLE: &[(&str, &str)] = &[
    ("fill", "#000000"),
    ("fill-opacity", "0.012012"),
    ("stroke", "#3c3c3c"),
    ("stroke-width", "3.48662"),
    ("stroke-linecap", "square"),
    ("stroke-linejoin", "round"),
    ("stroke-dasharray", "none"),
    ("stroke-opacity", "1"),
];

pub const BAR_RECT: RectGeometry = RectGeometry {
    width: "264.58334",
    height: "16.933332",
    x: "10.291647",
    y: "10.291645",
};

/// Follows the gradient `fill`, which is added at render time.
pub const BAR_STYLE: &[(&str, &str)] = &[
    ("fill-opacity", "1"),
    ("stroke", "none"),
    ("stroke-width", "4.98903"),
    ("stroke-dasharray", "none"),
    ("stroke-opacity", "1"),
    ("paint-order", "stroke fill markers"),
];

pub const LABEL_X: &str = "125.55626";
pub const LABEL_Y: &str = "22.611311";

pub const LABEL_TEXT_STYLE: &[(&str, &str)] = &[
    ("font-style", "normal"),
    ("font-variant", "normal"),
    ("font-weight", "normal"),
    ("font-stretch", "normal"),
    ("font-size", "25.4px"),
    ("font-family", "sans-serif"),
    ("-inkscape-font-specification", "\"sans-serif, Normal\""),
    ("font-variant-ligatures", "normal"),
    ("font-variant-caps", "normal"),
    ("font-variant-numeric", "normal"),
    ("font-variant-east-asian", "normal"),
    ("mix-blend-mode", "hard-light"),
    ("fill", "#eeeeec"),
    ("fill-opacity", "0.834835"),
    ("stroke", "#2e3436"),
    ("stroke-width", "2.64583"),
    ("stroke-linecap", "square"),
    ("stroke-linejoin", "round"),
    ("stroke-dasharray", "none"),
    ("stroke-opacity", "1"),
    ("paint-order", "stroke fill markers"),
];

pub const LABEL_SPAN_STYLE: &[(&str, &str)] = &[
    ("font-style", "normal"),
    ("font-variant", "normal"),
    ("font-weight", "normal"),
    ("font-stretch", "normal"),
    ("font-size", "11.2889px"),
    ("font-family", "Helvetica"),
    ("-inkscape-font-specification", "\"Helvetica, Normal\""),
    ("font-variant-ligatures", "normal"),
    ("font-variant-caps", "normal"),
    ("font-variant-numeric", "normal"),
    ("font-variant-east-asian", "normal"),
    ("fill", "#eeeeec"),
    ("fill-opacity", "0.834835"),
    ("stroke", "#2e3436"),
    ("stroke-width", "2.64583"),
    ("stroke-dasharray", "none"),
];
