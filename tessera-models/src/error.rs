// Copyright (c) 2025 TESSERA LABS <info@tessera.network>

//! this file defines all possible model error categories

use displaydoc::Display;
use thiserror::Error;

/// models error
#[non_exhaustive]
#[derive(Clone, Display, Error, Debug)]
pub enum ModelsError {
    /// invalid identity format: {0}
    InvalidIdFormat(String),
}
