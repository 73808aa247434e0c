pub mod crop;
pub mod eligibility;
pub mod fields;
pub mod forecast;
pub mod region;
pub mod risk;

pub use crop::*;
pub use eligibility::*;
pub use fields::FieldMap;
pub use forecast::*;
pub use region::*;
pub use risk::*;
