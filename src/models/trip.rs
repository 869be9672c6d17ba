use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::AppError;

/// A stored trip as it comes back from the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Trip {
    pub id: i64,
    pub passengername: Option<String>,
    pub destination: Option<String>,
    pub pickuppoint: Option<String>,
    pub phonenumber: Option<String>,
}

/// Request body of `POST /api/create_trip`. Any `id` sent by the client is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TripPayload {
    pub passengername: Option<String>,
    pub destination: Option<String>,
    pub pickuppoint: Option<String>,
    pub phonenumber: Option<String>,
}

/// A validated trip that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTrip {
    pub passengername: Option<String>,
    pub destination: Option<String>,
    pub pickuppoint: Option<String>,
    pub phonenumber: Option<String>,
}

impl TripPayload {
    pub fn validate(self) -> Result<NewTrip, AppError> {
        let phonenumber = match self.phonenumber {
            Some(raw) if raw.is_empty() => None,
            Some(raw) => {
                if raw.parse::<i64>().is_err() {
                    return Err(AppError::Validation("invalid phone number".into()));
                }
                Some(raw)
            }
            None => None,
        };

        Ok(NewTrip {
            passengername: self.passengername,
            destination: self.destination,
            pickuppoint: self.pickuppoint,
            phonenumber,
        })
    }
}

impl NewTrip {
    pub fn with_id(self, id: i64) -> Trip {
        Trip {
            id,
            passengername: self.passengername,
            destination: self.destination,
            pickuppoint: self.pickuppoint,
            phonenumber: self.phonenumber,
        }
    }
}
