//! Vehicle classification and the permanent toll-exemption set.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TollError;

/// Classification tag of a vehicle. Only the tag drives fee logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum VehicleClass {
    Motorbike,
    Tractor,
    Emergency,
    Diplomat,
    Lorry,
    Bus,
    #[default]
    Car,
}

/// Vehicle classes that pass every toll station free of charge.
pub const TOLL_FREE_VEHICLES: &[VehicleClass] = &[
    VehicleClass::Motorbike,
    VehicleClass::Tractor,
    VehicleClass::Emergency,
    VehicleClass::Diplomat,
];

impl VehicleClass {
    /// Every class, in declaration order.
    pub const ALL: [VehicleClass; 7] = [
        VehicleClass::Motorbike,
        VehicleClass::Tractor,
        VehicleClass::Emergency,
        VehicleClass::Diplomat,
        VehicleClass::Lorry,
        VehicleClass::Bus,
        VehicleClass::Car,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleClass::Motorbike => "Motorbike",
            VehicleClass::Tractor => "Tractor",
            VehicleClass::Emergency => "Emergency",
            VehicleClass::Diplomat => "Diplomat",
            VehicleClass::Lorry => "Lorry",
            VehicleClass::Bus => "Bus",
            VehicleClass::Car => "Car",
        }
    }

    /// Whether this class is in [`TOLL_FREE_VEHICLES`].
    pub fn is_toll_free(&self) -> bool {
        TOLL_FREE_VEHICLES.contains(self)
    }
}

impl fmt::Display for VehicleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a class tag case-insensitively. Unknown tags are rejected rather
/// than defaulted to `Car`.
impl FromStr for VehicleClass {
    type Err = TollError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        VehicleClass::ALL
            .iter()
            .copied()
            .find(|class| class.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| TollError::UnknownVehicleClass(s.to_string()))
    }
}

/// A vehicle passing a toll station.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub class: VehicleClass,
    /// Registration number. Opaque to fee logic.
    pub registration: String,
}

impl Vehicle {
    pub fn new(class: VehicleClass, registration: impl Into<String>) -> Self {
        Self {
            class,
            registration: registration.into(),
        }
    }

    pub fn car(registration: impl Into<String>) -> Self {
        Self::new(VehicleClass::Car, registration)
    }
}

/// Check whether a vehicle is exempt from toll fees.
///
/// An absent vehicle has no classification and is therefore not exempt.
pub fn is_toll_free_vehicle(vehicle: Option<&Vehicle>) -> bool {
    vehicle.is_some_and(|v| v.class.is_toll_free())
}
