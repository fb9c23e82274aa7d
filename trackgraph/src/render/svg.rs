use std::fmt::Write;

use super::drawer::{DrawCommand, DrawList, Stroke};

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

fn stroke_color(s: Stroke) -> &'static str {
    match s {
        Stroke::Edge => "black",
        Stroke::Segment => "lightgreen",
    }
}

/// Renders recorded commands as a standalone SVG document.
pub fn to_svg(list: &DrawList, width: f64, height: f64) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        width, height, width, height
    );
    for cmd in &list.commands {
        let _ = match cmd {
            DrawCommand::Line { from, to, width, stroke } => writeln!(
                out,
                r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
                from.x, from.y, to.x, to.y, stroke_color(*stroke), width
            ),
            DrawCommand::Circle { center, radius } => writeln!(
                out,
                r#"  <circle cx="{}" cy="{}" r="{}" fill="white" stroke="black"/>"#,
                center.x, center.y, radius
            ),
            DrawCommand::Text { at, text } => writeln!(
                out,
                r#"  <text x="{}" y="{}" text-anchor="middle" dominant-baseline="middle" font-family="sans-serif" font-weight="bold" font-size="16">{}</text>"#,
                at.x, at.y, escape(text)
            ),
        };
    }
    out.push_str("</svg>\n");
    out
}
