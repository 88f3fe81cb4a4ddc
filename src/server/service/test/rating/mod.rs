use crate::server::{error::AppError, service::rating::RatingService};
use test_utils::builder::TestBuilder;

mod submit;
