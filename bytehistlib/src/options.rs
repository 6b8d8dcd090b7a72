//! Input options for histogram rendering.
//!
//! This module contains the configuration types that control which views
//! are rendered, how wide the graph is and how entries are ordered.

use serde::{Deserialize, Serialize};

use crate::query::ordering::SortOrder;

/// Narrowest graph the renderer will draw.
pub const MIN_WIDTH: usize = 20;

/// Graph width used when none is requested.
pub const DEFAULT_WIDTH: usize = 80;

/// Widest graph the renderer will draw.
///
/// Every graph line is built in memory, so the width has to stay bounded.
pub const MAX_WIDTH: usize = 10_000;

/// Clamp a requested graph width to `MIN_WIDTH..=MAX_WIDTH`.
///
/// Negative requests clamp too, so any integer is accepted.
///
/// ```rust
/// use bytehistlib::{clamp_width, MAX_WIDTH};
///
/// assert_eq!(clamp_width(5), 20);
/// assert_eq!(clamp_width(120), 120);
/// assert_eq!(clamp_width(i64::MAX), MAX_WIDTH);
/// ```
pub fn clamp_width(requested: i64) -> usize {
    if requested < MIN_WIDTH as i64 {
        MIN_WIDTH
    } else {
        usize::try_from(requested).map_or(MAX_WIDTH, |width| width.min(MAX_WIDTH))
    }
}

/// Which views to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Views {
    /// Render the bar graph
    pub graph: bool,
    /// Render the frequency table
    pub table: bool,
}

impl Default for Views {
    fn default() -> Self {
        Self::both()
    }
}

impl Views {
    /// Graph followed by table (default)
    pub fn both() -> Self {
        Self {
            graph: true,
            table: true,
        }
    }

    /// Only the bar graph
    pub fn graph_only() -> Self {
        Self {
            graph: true,
            table: false,
        }
    }

    /// Only the frequency table
    pub fn table_only() -> Self {
        Self {
            graph: false,
            table: true,
        }
    }

    /// Builder: disable the graph
    pub fn without_graph(mut self) -> Self {
        self.graph = false;
        self
    }

    /// Builder: disable the table
    pub fn without_table(mut self) -> Self {
        self.table = false;
        self
    }
}

/// Options for a histogram run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistogramOptions {
    /// Effective graph width (already clamped)
    pub width: usize,
    /// Entry ordering
    pub ordering: SortOrder,
    /// Views to render
    pub views: Views,
}

impl Default for HistogramOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            ordering: SortOrder::ByValue,
            views: Views::both(),
        }
    }
}

impl HistogramOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the requested graph width, clamped by [`clamp_width`].
    pub fn width(mut self, requested: i64) -> Self {
        self.width = clamp_width(requested);
        self
    }

    /// Enable or disable descending sort by count.
    pub fn sort(mut self, sort: bool) -> Self {
        self.ordering = SortOrder::from_sort_flag(sort);
        self
    }

    /// Set entry ordering.
    pub fn ordering(mut self, ordering: SortOrder) -> Self {
        self.ordering = ordering;
        self
    }

    /// Set which views to render.
    pub fn views(mut self, views: Views) -> Self {
        self.views = views;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_width() {
        assert_eq!(clamp_width(5), MIN_WIDTH);
        assert_eq!(clamp_width(19), MIN_WIDTH);
        assert_eq!(clamp_width(20), 20);
        assert_eq!(clamp_width(0), MIN_WIDTH);
        assert_eq!(clamp_width(-40), MIN_WIDTH);
        assert_eq!(clamp_width(132), 132);
    }

    #[test]
    fn test_clamp_width_upper_bound() {
        assert_eq!(clamp_width(MAX_WIDTH as i64), MAX_WIDTH);
        assert_eq!(clamp_width(MAX_WIDTH as i64 + 1), MAX_WIDTH);
        assert_eq!(clamp_width(100_000_000), MAX_WIDTH);
        assert_eq!(clamp_width(i64::MAX), MAX_WIDTH);
        assert_eq!(HistogramOptions::new().width(i64::MAX).width, MAX_WIDTH);
    }

    #[test]
    fn test_options_default() {
        let options = HistogramOptions::new();
        assert_eq!(options.width, DEFAULT_WIDTH);
        assert_eq!(options.width, 80);
        assert_eq!(options.ordering, SortOrder::ByValue);
        assert_eq!(options.views, Views::both());
    }

    #[test]
    fn test_options_builder() {
        let options = HistogramOptions::new()
            .width(5)
            .sort(true)
            .views(Views::graph_only());
        assert_eq!(options.width, 20);
        assert_eq!(options.ordering, SortOrder::ByCountDescending);
        assert!(options.views.graph);
        assert!(!options.views.table);
    }

    #[test]
    fn test_views_restrictions_combine() {
        assert_eq!(Views::both().without_graph(), Views::table_only());
        assert_eq!(Views::both().without_table(), Views::graph_only());
        assert_eq!(
            Views::both().without_graph().without_table(),
            Views {
                graph: false,
                table: false,
            }
        );
    }
}
