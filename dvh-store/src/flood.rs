//! Flood inundation slider state: the list of mapped gage heights and the
//! one currently shown.

use log::warn;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FloodState {
    /// Gage heights (ft) that have an inundation map, ascending.
    pub stages: Vec<f64>,
    pub gage_height: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FloodAction {
    SetStages(Vec<f64>),
    SetGageHeight(f64),
    SetGageHeightFromStageIndex(usize),
}

/// What the range input shows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FloodSlider {
    pub max_index: usize,
    /// Position of the current gage height in `stages`, if it is one of them.
    pub index: Option<usize>,
    pub gage_height: Option<f64>,
}

impl FloodState {
    pub fn reduce(mut self, action: FloodAction) -> FloodState {
        match action {
            FloodAction::SetStages(stages) => self.stages = stages,
            FloodAction::SetGageHeight(height) => self.gage_height = Some(height),
            FloodAction::SetGageHeightFromStageIndex(index) => match self.stages.get(index) {
                Some(height) => self.gage_height = Some(*height),
                None => warn!(
                    "stage index {} out of range for {} stages",
                    index,
                    self.stages.len()
                ),
            },
        }
        self
    }

    /// `None` hides the slider: there are no stages to pick from.
    pub fn slider(&self) -> Option<FloodSlider> {
        if self.stages.is_empty() {
            return None;
        }
        let index = self
            .gage_height
            .and_then(|height| self.stages.iter().position(|stage| *stage == height));
        Some(FloodSlider {
            max_index: self.stages.len() - 1,
            index,
            gage_height: self.gage_height,
        })
    }
}
