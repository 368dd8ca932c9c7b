//! This module reexports common used types.

pub use crate::models::common::DayTime;
pub use crate::models::common::Duration;
pub use crate::models::common::Timestamp;
pub use crate::models::problem::Attraction;
pub use crate::models::problem::TravelMatrix;
pub use crate::models::problem::WaitCurve;
pub use crate::models::solution::PlannedStop;
pub use crate::models::solution::TourPlan;
pub use crate::models::Park;

pub use crate::construction::GuidanceParams;

pub use crate::solver::AntGroup;
pub use crate::solver::BehaviorKind;
pub use crate::solver::PlannerConfig;
pub use crate::solver::PlannerConfigBuilder;
pub use crate::solver::RoutePlanner;
pub use crate::solver::StagePopulations;
pub use crate::solver::StageRates;
pub use crate::solver::TelemetryMode;

pub use crate::utils::compare_floats;
pub use crate::utils::DefaultRandom;
pub use crate::utils::Environment;
pub use crate::utils::Float;
pub use crate::utils::GenericError;
pub use crate::utils::GenericResult;
pub use crate::utils::InfoLogger;
pub use crate::utils::Random;
