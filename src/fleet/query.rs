use crate::fleet::VehiclePosition;

/// Filter criteria for a vehicle monitoring request.
///
/// Every field is optional; absent fields impose no constraint. String
/// predicates are exact, case-sensitive matches against the record.
#[derive(Debug, Default, Clone)]
pub struct VehicleQuery {
    pub line_ref: Option<String>,
    pub operator_ref: Option<String>,
    pub vehicle_ref: Option<String>,
    /// Maximum number of matches to return. Zero or negative means no
    /// limit.
    pub max_vehicles: Option<i64>,
}

impl VehicleQuery {
    pub fn matches(&self, vehicle: &VehiclePosition) -> bool {
        if let Some(line_ref) = &self.line_ref
            && *line_ref != vehicle.line_ref
        {
            return false;
        }
        if let Some(operator_ref) = &self.operator_ref
            && *operator_ref != vehicle.operator_ref
        {
            return false;
        }
        if let Some(vehicle_ref) = &self.vehicle_ref
            && *vehicle_ref != vehicle.vehicle_ref
        {
            return false;
        }
        true
    }

    /// Select the matching records, preserving input order. Never
    /// mutates the input; no match is an empty result, not an error.
    pub fn apply(&self, vehicles: &[VehiclePosition]) -> Vec<VehiclePosition> {
        let matching = vehicles.iter().filter(|vehicle| self.matches(vehicle));
        match self.max_vehicles {
            Some(limit) if limit > 0 => matching.take(limit as usize).cloned().collect(),
            _ => matching.cloned().collect(),
        }
    }
}
