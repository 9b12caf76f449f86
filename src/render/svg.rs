use std::fmt;

use crate::render::scene::Scene;

impl Scene {
    /// Standalone SVG document for this scene.
    pub fn to_svg(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}">"#,
            self.width, self.height
        )?;

        for e in &self.edges {
            if e.path.elements().is_empty() {
                continue;
            }
            write!(
                f,
                r#"  <path id="edge-{}" d="{}" fill="none" stroke="{}" stroke-width="{}" opacity="{}""#,
                Escaped(&e.id),
                e.path.to_svg(),
                Escaped(&e.stroke),
                e.width,
                e.opacity
            )?;
            if e.dashed {
                write!(f, r#" stroke-dasharray="5,3""#)?;
            }
            writeln!(f, "/>")?;
        }

        for v in &self.vertices {
            writeln!(f, r#"  <g id="vertex-{}">"#, Escaped(&v.id))?;
            writeln!(
                f,
                r#"    <circle cx="{}" cy="{}" r="{}" fill="{}" opacity="{}"/>"#,
                v.center.x,
                v.center.y,
                v.radius,
                Escaped(&v.fill),
                v.opacity
            )?;
            if !v.label.is_empty() {
                writeln!(
                    f,
                    r#"    <text x="{}" y="{}" text-anchor="middle" dominant-baseline="middle" fill="white" font-size="14" font-weight="bold">{}</text>"#,
                    v.center.x,
                    v.center.y,
                    Escaped(&v.label)
                )?;
            }
            writeln!(f, "  </g>")?;
        }

        writeln!(f, "</svg>")
    }
}

/// XML-escapes text and attribute values.
struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                '\'' => f.write_str("&apos;")?,
                _ => write!(f, "{c}")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
