//! Diagnostic SVG rendering of an accepted diagram
//!
//! Best-effort debugging output: the outer frame rectangle, one filled
//! path per shard polygon and one stroke per internal edge. Consumers are
//! typically log viewers; nothing in the crate depends on this output.

use std::fmt::Write;

use crate::diagram::VoronoiDiagram;

/// Render a diagram as a standalone SVG document
pub fn diagram_to_svg(diagram: &VoronoiDiagram) -> String {
    let w = diagram.width();
    let h = diagram.height();
    let count = diagram.polygon_count().max(1);

    let mut svg = String::new();
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}">"#,
        w, h
    );

    for (i, polygon) in diagram.polygons().iter().enumerate() {
        let mut path = String::new();
        for (k, v) in polygon.vertices.iter().enumerate() {
            let _ = write!(
                path,
                "{}{:.5} {:.5}",
                if k == 0 { "M" } else { " L" },
                v.x,
                v.y
            );
        }
        path.push_str(" z");
        let hue = i * 360 / count;
        let _ = write!(
            svg,
            r#"<path d="{}" fill="hsl({},60%,80%)" stroke="none"/>"#,
            path, hue
        );
    }

    for edge in diagram.internal_edges() {
        let _ = write!(
            svg,
            r##"<line x1="{:.5}" y1="{:.5}" x2="{:.5}" y2="{:.5}" stroke="#444" stroke-width="0.004"/>"##,
            edge.start.x, edge.start.y, edge.end.x, edge.end.y
        );
    }

    let _ = write!(
        svg,
        r##"<rect x="0" y="0" width="{}" height="{}" fill="none" stroke="#000" stroke-width="0.006"/>"##,
        w, h
    );
    svg.push_str("</svg>");
    svg
}
