use crate::{memo::Memo, state::DvState};
use dvh_core::{
    approval::ApprovalSet,
    error::SeriesError,
    point::{LineSegment, Point},
    series::DvTimeSeries,
};
use dvh_data::{
    cursor::{nearest_point, project, resolve_cursor_time, CursorPoint},
    legend::approval_legend,
    points::assemble,
    scale::Scale,
    segments::split,
    window::DisplayWindow,
};
use std::rc::Rc;

/// The series a derivation read, compared by allocation.
///
/// The key keeps its `Rc` alive, so the address cannot be reused by another
/// series while it is cached.
#[derive(Debug, Clone)]
struct SeriesKey(Option<Rc<DvTimeSeries>>);

impl PartialEq for SeriesKey {
    fn eq(&self, other: &Self) -> bool {
        match (&self.0, &other.0) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

type Derived<T> = Result<Rc<Vec<T>>, SeriesError>;

/// Derived views of a [`DvState`].
///
/// Points and segments are cached per loaded series, so cursor movement and
/// brushing never re-run assembly or splitting. Loading a series again, or
/// reading from a state that holds a different series, recomputes them.
#[derive(Debug, Default)]
pub struct DvSelectors {
    points: Memo<SeriesKey, Derived<Point>>,
    segments: Memo<SeriesKey, Derived<LineSegment>>,
}

impl DvSelectors {
    pub fn new() -> Self {
        Self::default()
    }

    fn series_key(state: &DvState) -> SeriesKey {
        SeriesKey(state.current_dv_time_series_rc().cloned())
    }

    /// Points of the current series, sorted by time; empty when nothing is selected.
    pub fn points(&self, state: &DvState) -> Derived<Point> {
        self.points.get_or_compute(&Self::series_key(state), || {
            assemble(state.current_dv_time_series()).map(Rc::new)
        })
    }

    pub fn line_segments(&self, state: &DvState) -> Derived<LineSegment> {
        self.segments.get_or_compute(&Self::series_key(state), || {
            self.points(state).map(|points| Rc::new(split(&points)))
        })
    }

    pub fn legend(&self, state: &DvState) -> Result<Vec<ApprovalSet>, SeriesError> {
        Ok(approval_legend(&self.line_segments(state)?))
    }

    /// The full window of the current series.
    pub fn window(&self, state: &DvState) -> Result<Option<DisplayWindow>, SeriesError> {
        let points = self.points(state)?;
        Ok(state
            .current_dv_time_series()
            .and_then(|series| DisplayWindow::for_series(series, &points)))
    }

    /// The visible window: the full window narrowed by the brush.
    pub fn main_window(&self, state: &DvState) -> Result<Option<DisplayWindow>, SeriesError> {
        Ok(self
            .window(state)?
            .map(|window| window.with_brush(state.dv_graph_brush_offset)))
    }

    pub fn cursor_time(&self, state: &DvState) -> Result<Option<i64>, SeriesError> {
        Ok(self.main_window(state)?.map(|window| {
            resolve_cursor_time(
                state.dv_graph_cursor_offset,
                window.start_time,
                window.end_time,
            )
        }))
    }

    pub fn data_at_cursor(&self, state: &DvState) -> Result<Option<Point>, SeriesError> {
        let Some(cursor_time) = self.cursor_time(state)? else {
            return Ok(None);
        };
        let points = self.points(state)?;
        Ok(nearest_point(&points, cursor_time).cloned())
    }

    pub fn cursor_point<X, Y>(
        &self,
        state: &DvState,
        x_scale: &X,
        y_scale: &Y,
    ) -> Result<Vec<CursorPoint>, SeriesError>
    where
        X: Scale + ?Sized,
        Y: Scale + ?Sized,
    {
        let point = self.data_at_cursor(state)?;
        Ok(project(point.as_ref(), x_scale, y_scale))
    }

    /// Times the points and segments have been derived, in that order.
    pub fn computations(&self) -> (usize, usize) {
        (self.points.computations(), self.segments.computations())
    }
}
