// SVG rendering for progress values
use crate::domain::progress::ProgressValue;
use crate::infrastructure::render_params::*;

/// A node of an SVG document: a nested element or escaped character data.
#[derive(Debug, Clone, PartialEq)]
pub enum SvgNode {
    Element(SvgElement),
    Text(String),
}

/// Minimal element tree that serialises to XML.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgElement {
    name: &'static str,
    attributes: Vec<(&'static str, String)>,
    children: Vec<SvgNode>,
}

impl SvgElement {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attributes.push((name, value.into()));
        self
    }

    /// Sets the inline `style` attribute from `property: value` declarations.
    pub fn style<'a>(self, declarations: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let css = declarations
            .into_iter()
            .map(|(property, value)| format!("{}:{}", property, value))
            .collect::<Vec<_>>()
            .join(";");
        self.attr("style", css)
    }

    pub fn rect(self, geometry: &RectGeometry) -> Self {
        self.attr("width", geometry.width)
            .attr("height", geometry.height)
            .attr("x", geometry.x)
            .attr("y", geometry.y)
    }

    pub fn child(mut self, child: SvgElement) -> Self {
        self.children.push(SvgNode::Element(child));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(SvgNode::Text(text.into()));
        self
    }

    pub fn write_to(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.name);
        for (name, value) in &self.attributes {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape(value));
            out.push('"');
        }

        if self.children.is_empty() {
            out.push_str("/>");
            return;
        }

        out.push('>');
        for child in &self.children {
            match child {
                SvgNode::Element(element) => element.write_to(out),
                SvgNode::Text(text) => out.push_str(&escape(text)),
            }
        }
        out.push_str("</");
        out.push_str(self.name);
        out.push('>');
    }
}

// Attributes are always double-quoted, so `'` needs no escaping
fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Renders the progress bar graphic, XML declaration included.
pub fn render_progress_svg(progress: ProgressValue) -> String {
    let mut document = String::from(XML_DECLARATION);
    document.push('\n');
    progress_document(progress).write_to(&mut document);
    document
}

/// The `<svg>` root. The clip rectangle's width is the only part that
/// depends on `progress`.
pub fn progress_document(progress: ProgressValue) -> SvgElement {
    let percent = format!("{}%", progress);
    let gradient_fill = format!("url(#{})", GRADIENT_ID);

    SvgElement::new("svg")
        .attr("width", CANVAS_WIDTH)
        .attr("height", CANVAS_HEIGHT)
        .attr("viewBox", VIEW_BOX)
        .attr("version", SVG_VERSION)
        .attr("xmlns", SVG_NAMESPACE)
        .child(SvgElement::new("defs").child(gradient()))
        .child(
            SvgElement::new("g")
                .attr("transform", GROUP_TRANSFORM)
                .child(
                    SvgElement::new("rect")
                        .style(BORDER_STYLE.iter().copied())
                        .rect(&BORDER_RECT),
                )
                .child(
                    SvgElement::new("rect")
                        .style(
                            std::iter::once(("fill", gradient_fill.as_str()))
                                .chain(BAR_STYLE.iter().copied()),
                        )
                        .rect(&BAR_RECT)
                        .attr("clip-path", format!("url(#{})", CLIP_ID)),
                )
                .child(label(&percent)),
        )
        .child(
            SvgElement::new("clipPath").attr("id", CLIP_ID).child(
                SvgElement::new("rect")
                    .attr("width", percent)
                    .attr("height", "100%"),
            ),
        )
}

fn gradient() -> SvgElement {
    GRADIENT_STOPS.iter().fold(
        SvgElement::new("linearGradient")
            .attr("id", GRADIENT_ID)
            .attr("x1", GRADIENT_X1)
            .attr("y1", GRADIENT_Y1)
            .attr("x2", GRADIENT_X2)
            .attr("y2", GRADIENT_Y2)
            .attr("gradientUnits", GRADIENT_UNITS)
            .attr("gradientTransform", GRADIENT_TRANSFORM),
        |gradient, stop| {
            gradient.child(
                SvgElement::new("stop")
                    .style([("stop-color", stop.color), ("stop-opacity", "1")])
                    .attr("offset", stop.offset),
            )
        },
    )
}

fn label(percent: &str) -> SvgElement {
    SvgElement::new("text")
        .style(LABEL_TEXT_STYLE.iter().copied())
        .attr("x", LABEL_X)
        .attr("y", LABEL_Y)
        .child(
            SvgElement::new("tspan")
                .style(LABEL_SPAN_STYLE.iter().copied())
                .attr("x", LABEL_X)
                .attr("y", LABEL_Y)
                .text(percent),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(svg: &str) -> roxmltree::Document<'_> {
        roxmltree::Document::parse(svg).expect("rendered SVG should be well-formed XML")
    }

    fn clip_width(svg: &str) -> String {
        let doc = parse(svg);
        let clip = doc
            .descendants()
            .find(|n| n.has_tag_name("clipPath"))
            .expect("clipPath element");
        let rect = clip.first_element_child().expect("clip rect");
        assert_eq!(rect.attribute("height"), Some("100%"));
        rect.attribute("width").unwrap_or_default().to_string()
    }

    #[test]
    fn test_document_structure() {
        let svg = render_progress_svg(ProgressValue::new(42.0));
        assert!(svg.starts_with(XML_DECLARATION));

        let doc = parse(&svg);
        let root = doc.root_element();
        assert!(root.has_tag_name((SVG_NAMESPACE, "svg")));
        assert_eq!(root.attribute("width"), Some("1040"));
        assert_eq!(root.attribute("viewBox"), Some(VIEW_BOX));

        let gradients: Vec<_> = doc
            .descendants()
            .filter(|n| n.has_tag_name("linearGradient"))
            .collect();
        assert_eq!(gradients.len(), 1);
        assert_eq!(
            gradients[0].children().filter(|n| n.has_tag_name("stop")).count(),
            3
        );

        let bar = doc
            .descendants()
            .find(|n| n.attribute("clip-path") == Some("url(#clip)"))
            .expect("clipped bar");
        assert!(bar.attribute("style").unwrap().starts_with("fill:url(#a);"));
    }

    #[test]
    fn test_clip_and_label_follow_percentage() {
        for value in [0.0, 12.5, 50.0, 99.9, 100.0] {
            let progress = ProgressValue::new(value);
            let svg = render_progress_svg(progress);
            let expected = format!("{}%", progress);

            assert_eq!(clip_width(&svg), expected);

            let doc = parse(&svg);
            let span = doc
                .descendants()
                .find(|n| n.has_tag_name("tspan"))
                .expect("label span");
            assert_eq!(span.text(), Some(expected.as_str()));
            assert_eq!(span.parent_element().unwrap().tag_name().name(), "text");
        }
    }

    #[test]
    fn test_out_of_range_values_render_clamped() {
        assert_eq!(clip_width(&render_progress_svg(ProgressValue::new(150.0))), "100%");
        assert_eq!(clip_width(&render_progress_svg(ProgressValue::new(-20.0))), "0%");
        assert_eq!(clip_width(&render_progress_svg(ProgressValue::new(f64::NAN))), "0%");
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let progress = ProgressValue::new(73.0);
        assert_eq!(render_progress_svg(progress), render_progress_svg(progress));
        assert_ne!(
            render_progress_svg(progress),
            render_progress_svg(ProgressValue::new(74.0))
        );
    }

    #[test]
    fn test_element_escapes_text_and_attributes() {
        let mut out = String::new();
        SvgElement::new("text")
            .attr("data-x", "a\"b<c")
            .text("1 & 2")
            .write_to(&mut out);
        assert_eq!(out, r#"<text data-x="a&quot;b&lt;c">1 &amp; 2</text>"#);
    }

    #[test]
    fn test_style_joins_declarations() {
        let mut out = String::new();
        SvgElement::new("rect")
            .style([("fill", "#000"), ("stroke", "none")])
            .write_to(&mut out);
        assert_eq!(out, r#"<rect style="fill:#000;stroke:none"/>"#);
    }
}
