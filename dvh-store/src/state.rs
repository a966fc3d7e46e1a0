use dvh_core::series::{AvailableTimeSeries, DvTimeSeries};
use dvh_data::window::BrushOffset;
use log::debug;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Daily-value hydrograph state: fetched data plus the user's selection and
/// cursor/brush position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DvState {
    pub available_dv_time_series: Vec<AvailableTimeSeries>,
    /// Loaded series by id. Each load is a new allocation, so derived data
    /// can be cached on the `Rc` identity.
    pub dv_time_series: BTreeMap<String, Rc<DvTimeSeries>>,
    pub current_dv_time_series_id: Option<String>,
    /// Milliseconds from the main window start to the cursor.
    pub dv_graph_cursor_offset: Option<i64>,
    pub dv_graph_brush_offset: Option<BrushOffset>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DvAction {
    SetAvailableDvTimeSeries(Vec<AvailableTimeSeries>),
    AddDvTimeSeries { id: String, data: DvTimeSeries },
    SetCurrentDvTimeSeriesId(String),
    SetDvGraphCursorOffset(Option<i64>),
    SetDvGraphBrushOffset { start: i64, end: i64 },
    ClearDvGraphBrushOffset,
}

impl DvState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply `action`, returning the next state.
    pub fn reduce(mut self, action: DvAction) -> DvState {
        debug!("dv action: {:?}", ActionName(&action));
        match action {
            DvAction::SetAvailableDvTimeSeries(available) => {
                self.available_dv_time_series = available;
            }
            DvAction::AddDvTimeSeries { id, data } => {
                self.dv_time_series.insert(id, Rc::new(data));
            }
            DvAction::SetCurrentDvTimeSeriesId(id) => {
                self.current_dv_time_series_id = Some(id);
            }
            DvAction::SetDvGraphCursorOffset(offset) => {
                self.dv_graph_cursor_offset = offset;
            }
            DvAction::SetDvGraphBrushOffset { start, end } => {
                self.dv_graph_brush_offset = Some(BrushOffset { start, end });
            }
            DvAction::ClearDvGraphBrushOffset => {
                self.dv_graph_brush_offset = None;
            }
        }
        self
    }

    /// True when the series is already loaded and only needs selecting.
    pub fn has_dv_time_series(&self, id: &str) -> bool {
        self.dv_time_series.contains_key(id)
    }

    /// The currently selected series, if one is selected and loaded.
    pub fn current_dv_time_series(&self) -> Option<&DvTimeSeries> {
        self.current_dv_time_series_rc().map(Rc::as_ref)
    }

    pub(crate) fn current_dv_time_series_rc(&self) -> Option<&Rc<DvTimeSeries>> {
        self.current_dv_time_series_id
            .as_ref()
            .and_then(|id| self.dv_time_series.get(id))
    }
}

/// Logs the action kind without dumping series payloads.
struct ActionName<'a>(&'a DvAction);

impl std::fmt::Debug for ActionName<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self.0 {
            DvAction::SetAvailableDvTimeSeries(_) => "SetAvailableDvTimeSeries",
            DvAction::AddDvTimeSeries { .. } => "AddDvTimeSeries",
            DvAction::SetCurrentDvTimeSeriesId(_) => "SetCurrentDvTimeSeriesId",
            DvAction::SetDvGraphCursorOffset(_) => "SetDvGraphCursorOffset",
            DvAction::SetDvGraphBrushOffset { .. } => "SetDvGraphBrushOffset",
            DvAction::ClearDvGraphBrushOffset => "ClearDvGraphBrushOffset",
        };
        f.write_str(name)
    }
}
