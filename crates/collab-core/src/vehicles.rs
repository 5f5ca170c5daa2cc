//! Substitutable vehicles.
//!
//! Every vehicle can travel. Starting an engine is a separate [`Motorized`]
//! contract, implemented only by vehicles that have one, so a bicycle is never
//! handed an operation it would have to refuse.

use crate::capability::Capability;
use crate::error::CapabilityResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineKind {
    Petrol,
    Diesel,
    Electric,
}

impl std::fmt::Display for EngineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            EngineKind::Petrol => "petrol",
            EngineKind::Diesel => "diesel",
            EngineKind::Electric => "electric",
        };
        write!(f, "{s}")
    }
}

pub trait Motorized {
    fn start_engine(&self) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Car {
    pub engine: EngineKind,
}

impl Car {
    pub fn new(engine: EngineKind) -> Self {
        Self { engine }
    }
}

impl Motorized for Car {
    fn start_engine(&self) -> String {
        format!("{} engine started", self.engine)
    }
}

impl Capability for Car {
    type Output = String;

    fn perform(&self) -> CapabilityResult<String> {
        Ok(format!("Car driving on {} power", self.engine))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bicycle;

impl Capability for Bicycle {
    type Output = String;

    fn perform(&self) -> CapabilityResult<String> {
        Ok("Bicycle pedaling".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_car_travels_and_starts_engine() {
        let car = Car::new(EngineKind::Electric);
        assert_eq!(car.perform().unwrap(), "Car driving on electric power");
        assert_eq!(car.start_engine(), "electric engine started");
    }

    #[test]
    fn test_bicycle_travels_without_engine() {
        assert_eq!(Bicycle.perform().unwrap(), "Bicycle pedaling");
    }

    #[test]
    fn test_vehicles_substitute_for_each_other() {
        let fleet: Vec<Box<dyn Capability<Output = String>>> =
            vec![Box::new(Car::new(EngineKind::Diesel)), Box::new(Bicycle)];
        for vehicle in &fleet {
            assert!(vehicle.perform().is_ok());
        }
    }
}
