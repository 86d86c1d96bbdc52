pub(crate) mod dashboard;
pub(crate) mod format;
pub(crate) mod returns;
pub(crate) mod series;
