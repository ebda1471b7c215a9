pub mod authorizedpm;
pub mod datatrans;

pub use self::{authorizedpm::Authorizedpm, datatrans::Datatrans};
