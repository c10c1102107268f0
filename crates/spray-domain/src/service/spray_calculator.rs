//! Spray calculation engine
//!
//! Turns validated parameters into an immutable [`SprayCalculation`]. The
//! engine is total over finite inputs: it never rejects values, and
//! degenerate inputs (zero tank capacity) give degenerate but well-typed
//! results. Range checks belong to the input boundary.

use chrono::{DateTime, Utc};
use tracing::debug;
use uuid::Uuid;

use crate::model::{CalculationInput, SprayCalculation};

/// Compute a calculation with a fresh identity and the current time
pub fn compute(input: &CalculationInput) -> SprayCalculation {
    compute_with_identity(input, Uuid::new_v4(), Utc::now())
}

/// Compute a calculation with a caller-supplied identity and timestamp
pub fn compute_with_identity(
    input: &CalculationInput,
    id: Uuid,
    created_at: DateTime<Utc>,
) -> SprayCalculation {
    let calculation = SprayCalculation::from_parts(id, created_at, input);

    debug!(
        id = %calculation.id(),
        hectares = calculation.field_area_in_hectares(),
        working_fluid = calculation.total_working_fluid(),
        full_tanks = calculation.full_tanks(),
        partial_tank = calculation.partial_tank_volume(),
        "spray calculation computed"
    );

    calculation
}
