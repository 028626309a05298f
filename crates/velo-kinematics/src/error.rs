#![warn(missing_docs)]

//! Error types for the kinematics library.
//!
//! This module defines the errors that can occur when constructing a
//! bicycle model with invalid physical parameters.

use core::fmt;

/// Errors that can occur when building a kinematic bicycle model.
#[derive(Debug, Clone, PartialEq)]
pub enum KinematicsError {
    /// Error for invalid wheelbase.
    /// This variant is returned when a wheelbase is provided that is not positive.
    InvalidWheelbase(&'static str),
    /// Error for invalid sample time.
    /// This variant is returned when an integration timestep is provided that is not positive.
    InvalidSampleTime(&'static str),
}

impl core::fmt::Display for KinematicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KinematicsError::InvalidWheelbase(msg) => write!(f, "Invalid wheelbase: {}", msg),
            KinematicsError::InvalidSampleTime(msg) => write!(f, "Invalid sample time: {}", msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for KinematicsError {}
