pub mod emission;
pub mod estimate;
pub mod rejection;
pub mod request;
pub mod sequence;

pub use emission::Emission;
pub use estimate::{Answer, EstimateReport, Eta, Projection, Rate, ReportOutcome, StaleSignal};
pub use rejection::{DomainError, Edge};
pub use request::RequestKind;
pub use sequence::SequenceNumber;
