//=========================================================================
// Errors
//=========================================================================
//
// Fatal construction errors for the tour controller.
//
// Navigation never fails: illegal and dead-end moves are reported as
// `Notice`s on the status line. Only setup can go wrong, and it goes
// wrong before any state machine exists.
//
//=========================================================================

//=== External Dependencies ===============================================

use thiserror::Error;

//=== TourError ===========================================================

/// Errors that abort controller construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TourError {
    /// The scene provided no cameras, so there is nothing to tour.
    #[error("observe mode requires at least one camera, scene has none")]
    NoCameras,

    /// A configuration value cannot be used.
    #[error("invalid tour configuration: {0}")]
    InvalidConfig(String),
}

/// Convenience alias used across the crate.
pub type TourResult<T> = Result<T, TourError>;
