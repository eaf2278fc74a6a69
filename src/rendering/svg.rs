//! SVG rendition of the preview card, for editors and manual conversion

use crate::OgImageConfig;

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Build an SVG document with the configured background and the text
/// anchored at the canvas center.
pub fn render_svg(config: &OgImageConfig) -> String {
    let (w, h) = (config.size.width, config.size.height);
    format!(
        concat!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
            "<svg width=\"{w}\" height=\"{h}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
            "  <rect width=\"{w}\" height=\"{h}\" fill=\"{bg}\"/>\n",
            "  <g transform=\"translate({cx}, {cy})\">\n",
            "    <text x=\"0\" y=\"0\" font-family=\"Arial, sans-serif\" font-size=\"{size}\" ",
            "font-weight=\"bold\" fill=\"{fg}\" text-anchor=\"middle\" dominant-baseline=\"middle\">{text}</text>\n",
            "  </g>\n",
            "</svg>\n"
        ),
        w = w,
        h = h,
        bg = config.background,
        cx = w / 2,
        cy = h / 2,
        size = config.font_size,
        fg = config.text_color,
        text = escape_xml(&config.text),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_card_svg() {
        let svg = render_svg(&OgImageConfig::default());
        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains("<svg width=\"1200\" height=\"630\""));
        assert!(svg.contains("fill=\"#0f4f30\""));
        assert!(svg.contains("translate(600, 315)"));
        assert!(svg.contains("font-size=\"72\""));
        assert!(svg.contains(">DushanbeMotion</text>"));
    }

    #[test]
    fn text_is_escaped() {
        let cfg = OgImageConfig {
            text: "Tom & <Jerry>".to_string(),
            ..Default::default()
        };
        let svg = render_svg(&cfg);
        assert!(svg.contains(">Tom &amp; &lt;Jerry&gt;</text>"));
    }
}
