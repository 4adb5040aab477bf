//! Report module - The renderer-agnostic model of the exported document.

mod model;

pub use model::{
    join_or_dash, text_or_dash, Bar, NamedList, ProjectSection, ReportComposer, ReportModel,
    Swatch, EMPTY_MARK, REPORT_TITLE,
};
