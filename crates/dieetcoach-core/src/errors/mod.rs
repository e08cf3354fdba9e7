// ABOUTME: Unified error handling for the dieetcoach engine and its integration surface
// ABOUTME: Defines ErrorCode families, the AppError type, and an error response shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every failure that leaves the engine boundary is an [`AppError`] carrying a
//! stable [`ErrorCode`]. Compliance violations are NOT errors: they travel as a
//! falsy `EvaluationResult`. Only configuration problems (no templates, empty
//! pools) and malformed requests end up here.

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Request input failed validation
    InvalidInput = 3000,
    /// A required field is missing
    MissingRequiredField = 3001,
    /// Data could not be parsed in the expected format
    InvalidFormat = 3002,
    /// Numeric value outside its accepted range
    ValueOutOfRange = 3003,

    // Resource Management (4000-4999)
    /// Requested resource (profile, plan, meal) does not exist
    ResourceNotFound = 4000,

    // External Services (5000-5999)
    /// A collaborator (storage, nutrition lookup) failed
    ExternalServiceError = 5000,
    /// A collaborator is not reachable
    ExternalServiceUnavailable = 5001,

    // Configuration (6000-6999)
    /// Generic configuration error
    ConfigError = 6000,
    /// Required configuration is missing (e.g. no active templates)
    ConfigMissing = 6001,
    /// Configuration is present but invalid
    ConfigInvalid = 6002,

    // Generation (7000-7999)
    /// A protein or vegetable pool is empty after rule filtering
    InsufficientIngredients = 7000,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    InternalError = 9000,
    /// Storage collaborator returned unusable data
    StorageError = 9002,
    /// Serialization or deserialization failed
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing from the request",
            Self::InvalidFormat => "The data format is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ExternalServiceError => "An external service encountered an error",
            Self::ExternalServiceUnavailable => "An external service is currently unavailable",
            Self::ConfigError => "Configuration error encountered",
            Self::ConfigMissing => "Required configuration is missing",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InsufficientIngredients => {
                "Not enough ingredients to build meals; expand diet rules or add recipes"
            }
            Self::InternalError => "An internal error occurred",
            Self::StorageError => "Storage operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }

    /// Whether the caller can fix this by changing diet rules or recipe setup
    #[must_use]
    pub const fn is_user_actionable(&self) -> bool {
        matches!(
            self,
            Self::InsufficientIngredients | Self::ConfigMissing | Self::ConfigInvalid
        )
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Resource not found
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Missing configuration (no templates, no rules for a profile)
    #[must_use]
    pub fn config_missing(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigMissing, message)
    }

    /// A pool ran dry during generation
    #[must_use]
    pub fn insufficient_ingredients(pool: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::InsufficientIngredients,
            format!(
                "The {} pool is empty; expand diet rules or add recipes",
                pool.into()
            ),
        )
    }

    /// External service error
    #[must_use]
    pub fn external_service(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalServiceError,
            format!("{}: {}", service.into(), message.into()),
        )
    }

    /// Storage collaborator returned unusable data
    #[must_use]
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    /// Serialization failure
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }

    /// Internal error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization(error.to_string()).with_source(error)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Serializable error payload for downstream API layers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Stable error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Whether the user can resolve the error by editing rules or recipes
    pub actionable: bool,
}

impl From<&AppError> for ErrorResponse {
    fn from(error: &AppError) -> Self {
        Self {
            code: error.code,
            message: error.message.clone(),
            actionable: error.code.is_user_actionable(),
        }
    }
}
