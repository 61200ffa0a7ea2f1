pub mod error;
pub mod feature_flags;

// General application domain modules
pub mod callback;
pub mod case_data;
pub mod case_event;
pub mod judicial_decision;

pub use error::*;
pub use feature_flags::*;

pub use callback::*;
pub use case_data::*;
pub use case_event::*;
pub use judicial_decision::*;
