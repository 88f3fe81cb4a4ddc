use crate::server::{data::rating::RatingRepository, error::AppError};
use test_utils::{builder::TestBuilder, factory};

mod average;
mod upsert;
