mod card;
mod observation;
mod returns;

pub use card::{AssetCard, PeriodReturn};
pub use observation::Observation;
pub use returns::{Period, ReturnClass, ReturnSet};
