use splitview_foundation::DragConfig;
use splitview_ui_graphics::Size;

use crate::panel::PanelDimension;
use crate::store::{PanelSizeStore, StoreError};

/// Persisted panel extents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PanelKey {
    NotesWidth,
    OutputHeight,
}

impl PanelKey {
    pub const ALL: [PanelKey; 2] = [PanelKey::NotesWidth, PanelKey::OutputHeight];

    /// Key under which the size is cached.
    pub fn storage_key(self) -> &'static str {
        match self {
            PanelKey::NotesWidth => "notesWidth",
            PanelKey::OutputHeight => "outputHeight",
        }
    }
}

/// Builder-style settings for the dashboard panels and their dividers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DashboardLayoutConfig {
    pub notes_width: PanelDimension,
    pub output_height: PanelDimension,
    pub notes_divider: Option<DragConfig>,
    pub output_divider: Option<DragConfig>,
}

impl Default for DashboardLayoutConfig {
    fn default() -> Self {
        Self {
            notes_width: PanelDimension::new(384.0, 250.0, 800.0, 0.6),
            output_height: PanelDimension::new(192.0, 100.0, 500.0, 0.4),
            notes_divider: None,
            output_divider: None,
        }
    }
}

impl DashboardLayoutConfig {
    pub fn with_notes_width(mut self, notes_width: PanelDimension) -> Self {
        self.notes_width = notes_width;
        self
    }

    pub fn with_output_height(mut self, output_height: PanelDimension) -> Self {
        self.output_height = output_height;
        self
    }

    pub fn with_notes_divider(mut self, config: DragConfig) -> Self {
        self.notes_divider = Some(config);
        self
    }

    pub fn with_output_divider(mut self, config: DragConfig) -> Self {
        self.output_divider = Some(config);
        self
    }

    /// Divider between the editor and the notes panel.
    pub fn notes_divider_config(&self) -> DragConfig {
        self.notes_divider.unwrap_or_else(DragConfig::horizontal)
    }

    /// Divider between the editor and the output console.
    pub fn output_divider_config(&self) -> DragConfig {
        self.output_divider.unwrap_or_else(DragConfig::vertical)
    }
}

/// Current panel sizes of the dashboard.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardLayout {
    viewport: Size,
    notes_width: PanelDimension,
    output_height: PanelDimension,
}

impl DashboardLayout {
    pub fn new(config: &DashboardLayoutConfig, viewport: Size) -> Self {
        Self {
            viewport,
            notes_width: config.notes_width,
            output_height: config.output_height,
        }
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Later resizes are limited by the new viewport; current sizes stay as they are.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    pub fn notes_width(&self) -> f32 {
        self.notes_width.value
    }

    pub fn output_height(&self) -> f32 {
        self.output_height.value
    }

    pub fn value(&self, key: PanelKey) -> f32 {
        match key {
            PanelKey::NotesWidth => self.notes_width.value,
            PanelKey::OutputHeight => self.output_height.value,
        }
    }

    /// The notes panel sits right of the divider, so dragging right shrinks it.
    pub fn apply_notes_divider_delta(&mut self, delta: f32) -> bool {
        self.notes_width.apply(-delta, self.viewport.width)
    }

    /// The output console sits below the divider; dragging down grows it.
    pub fn apply_output_divider_delta(&mut self, delta: f32) -> bool {
        self.output_height.apply(delta, self.viewport.height)
    }

    /// Replaces defaults with any sizes cached in `store`.
    ///
    /// Cached values are taken as they are, without clamping; entries that
    /// are missing or not finite numbers are skipped.
    pub fn load(&mut self, store: &dyn PanelSizeStore) -> Result<(), StoreError> {
        for key in PanelKey::ALL {
            let Some(raw) = store.get(key.storage_key())? else {
                continue;
            };
            match raw.trim().parse::<f32>() {
                Ok(value) if value.is_finite() => self.dimension_mut(key).value = value,
                _ => log::warn!("ignoring cached {} value {:?}", key.storage_key(), raw),
            }
        }
        Ok(())
    }

    /// Writes one panel size to `store`. Zero sizes are never cached.
    pub fn save_key(&self, key: PanelKey, store: &dyn PanelSizeStore) -> Result<(), StoreError> {
        let value = self.value(key);
        if value == 0.0 {
            return Ok(());
        }
        store.set(key.storage_key(), &value.to_string())
    }

    pub fn save(&self, store: &dyn PanelSizeStore) -> Result<(), StoreError> {
        for key in PanelKey::ALL {
            self.save_key(key, store)?;
        }
        Ok(())
    }

    fn dimension_mut(&mut self, key: PanelKey) -> &mut PanelDimension {
        match key {
            PanelKey::NotesWidth => &mut self.notes_width,
            PanelKey::OutputHeight => &mut self.output_height,
        }
    }
}

#[cfg(test)]
#[path = "tests/layout_tests.rs"]
mod tests;
