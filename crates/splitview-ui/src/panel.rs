/// One resizable panel extent with its limits.
///
/// The upper limit shrinks with the viewport: a panel never grows past
/// `viewport_fraction` of the window even when `max` would allow it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelDimension {
    pub value: f32,
    pub min: f32,
    pub max: f32,
    pub viewport_fraction: f32,
}

impl PanelDimension {
    pub const fn new(value: f32, min: f32, max: f32, viewport_fraction: f32) -> Self {
        Self {
            value,
            min,
            max,
            viewport_fraction,
        }
    }

    pub fn effective_max(&self, viewport_extent: f32) -> f32 {
        self.max.min(viewport_extent * self.viewport_fraction)
    }

    /// Clamps `candidate` to the panel limits for the given viewport.
    ///
    /// When the viewport is so small that the upper limit falls below `min`,
    /// `min` wins.
    pub fn clamp(&self, candidate: f32, viewport_extent: f32) -> f32 {
        self.min.max(self.effective_max(viewport_extent).min(candidate))
    }

    /// Grows the panel by `change` (negative shrinks). Returns whether the
    /// stored value changed.
    pub fn apply(&mut self, change: f32, viewport_extent: f32) -> bool {
        let next = self.clamp(self.value + change, viewport_extent);
        if next == self.value {
            return false;
        }
        self.value = next;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_clamps_into_range() {
        let mut panel = PanelDimension::new(384.0, 250.0, 800.0, 0.6);
        assert!(panel.apply(-500.0, 1920.0));
        assert_eq!(panel.value, 250.0);
        assert!(!panel.apply(-10.0, 1920.0), "already at the minimum");
        assert!(panel.apply(1000.0, 1920.0));
        assert_eq!(panel.value, 800.0);
    }

    #[test]
    fn viewport_caps_the_maximum() {
        let panel = PanelDimension::new(384.0, 250.0, 800.0, 0.6);
        assert_eq!(panel.effective_max(1000.0), 600.0);
        assert_eq!(panel.effective_max(2000.0), 800.0);
    }

    #[test]
    fn minimum_wins_on_tiny_viewports() {
        let mut panel = PanelDimension::new(300.0, 250.0, 800.0, 0.6);
        assert_eq!(panel.clamp(400.0, 300.0), 250.0);
        assert!(panel.apply(50.0, 300.0));
        assert_eq!(panel.value, 250.0);
    }
}
