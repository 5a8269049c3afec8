pub mod errors;
pub mod types;

pub use errors::{Error, Result, ResultExt};
pub use types::{
    Complexity, ComponentDetail, ComponentType, GeneralSystemCharacteristics, ProjectConfig,
    GSC_COUNT, GSC_MAX_RATING,
};
