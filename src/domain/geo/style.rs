/// Vector path styling for a region outline
#[derive(Debug, Clone, PartialEq)]
pub struct PathStyle {
    pub fill_color: &'static str,
    pub weight: f64,
    pub opacity: f64,
    pub color: &'static str,
    pub fill_opacity: f64,
}

impl PathStyle {
    /// Resting state; a fresh value every call so callers may tweak it.
    pub fn default_region() -> Self {
        Self { fill_color: "#00ffff33", weight: 1.0, opacity: 0.8, color: "#00ffff77", fill_opacity: 1.0 }
    }

    pub fn hovered_region() -> Self {
        Self { weight: 2.0, color: "#012a81", fill_color: "#00ffff88", fill_opacity: 0.5, ..Self::default_region() }
    }

    pub fn for_hover(hovered: bool) -> Self {
        if hovered { Self::hovered_region() } else { Self::default_region() }
    }
}
