use crime_hotspots_shared::Rgb;

/// Format RGBA as a CSS color string.
pub fn rgba_css(r: u8, g: u8, b: u8, a: f64) -> String {
    format!("rgba({r},{g},{b},{a})")
}

/// Solid stroke color for a dataset line.
pub fn stroke_css(color: Rgb) -> String {
    color.to_string()
}

/// Translucent fill for point markers and legend swatches.
pub fn point_fill_css(color: Rgb) -> String {
    let Rgb(r, g, b) = color;
    rgba_css(r, g, b, 0.5)
}
