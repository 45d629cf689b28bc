use crate::icon::geometry::TrianglePoints;

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
const FILL: &str = "black";

/// Renders the SVG document for a square icon canvas of the given size.
///
/// The document has no trailing newline, so the written file matches the
/// rendered string byte for byte.
pub fn render_svg_document(size: u32, points: &TrianglePoints) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <svg width=\"{size}\" height=\"{size}\" viewBox=\"0 0 {size} {size}\" xmlns=\"{SVG_NAMESPACE}\">\n  \
         <polygon points=\"{points}\" fill=\"{FILL}\"/>\n\
         </svg>"
    )
}
