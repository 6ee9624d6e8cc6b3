//! Transfer shapes moving directory data across the service boundary.
//!
//! Pure field-to-field conversions only: create shapes delegate to the
//! entity constructors (which stamp `created_at` and clear the tombstone
//! flag); nothing here validates or defaults beyond that.

use crate::model::{City, Country, Employee, EntityId};
use serde::{Deserialize, Serialize};

/// Read/update shape for countries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryDto {
    pub id: Option<EntityId>,
    pub name: String,
}

/// Create shape for countries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryCreate {
    pub name: String,
}

/// Read shape for cities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityDto {
    pub id: Option<EntityId>,
    pub name: String,
    pub country_id: EntityId,
}

/// Create shape for cities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityCreate {
    pub name: String,
    pub country_id: EntityId,
}

/// Update shape for cities; the only entity with a dedicated one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityUpdate {
    pub id: Option<EntityId>,
    pub name: String,
    pub country_id: EntityId,
}

/// Read/update shape for employees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeDto {
    pub id: Option<EntityId>,
    pub full_name: String,
}

/// Create shape for employees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeCreate {
    pub full_name: String,
}

impl From<Country> for CountryDto {
    fn from(value: Country) -> Self {
        Self {
            id: value.id,
            name: value.name,
        }
    }
}

impl From<CountryDto> for Country {
    fn from(value: CountryDto) -> Self {
        let mut country = Country::new(value.name);
        country.id = value.id;
        country
    }
}

impl From<CountryCreate> for Country {
    fn from(value: CountryCreate) -> Self {
        Country::new(value.name)
    }
}

impl From<City> for CityDto {
    fn from(value: City) -> Self {
        Self {
            id: value.id,
            name: value.name,
            country_id: value.country_id,
        }
    }
}

impl From<CityDto> for City {
    fn from(value: CityDto) -> Self {
        let mut city = City::new(value.name, value.country_id);
        city.id = value.id;
        city
    }
}

impl From<CityCreate> for City {
    fn from(value: CityCreate) -> Self {
        City::new(value.name, value.country_id)
    }
}

impl From<CityUpdate> for City {
    fn from(value: CityUpdate) -> Self {
        let mut city = City::new(value.name, value.country_id);
        city.id = value.id;
        city
    }
}

impl From<City> for CityUpdate {
    fn from(value: City) -> Self {
        Self {
            id: value.id,
            name: value.name,
            country_id: value.country_id,
        }
    }
}

impl From<Employee> for EmployeeDto {
    fn from(value: Employee) -> Self {
        Self {
            id: value.id,
            full_name: value.full_name,
        }
    }
}

impl From<EmployeeDto> for Employee {
    fn from(value: EmployeeDto) -> Self {
        let mut employee = Employee::new(value.full_name);
        employee.id = value.id;
        employee
    }
}

impl From<EmployeeCreate> for Employee {
    fn from(value: EmployeeCreate) -> Self {
        Employee::new(value.full_name)
    }
}

#[cfg(test)]
mod tests {
    use super::{CityDto, CityUpdate, CountryCreate, CountryDto, EmployeeDto};
    use crate::model::{City, Country, Employee};

    #[test]
    fn country_round_trip_copies_identity_and_name() {
        let mut country = Country::new("Turkiye");
        country.id = Some(7);

        let dto = CountryDto::from(country.clone());
        assert_eq!(dto.id, Some(7));
        assert_eq!(dto.name, "Turkiye");

        let back = Country::from(dto);
        assert_eq!(back.id, Some(7));
        assert_eq!(back.name, country.name);
        assert!(!back.soft_delete);
    }

    #[test]
    fn create_shape_leaves_identity_unassigned() {
        let country = Country::from(CountryCreate {
            name: "England".to_string(),
        });
        assert_eq!(country.id, None);
        assert!(!country.soft_delete);
    }

    #[test]
    fn city_update_round_trip_keeps_owning_country() {
        let mut city = City::new("Seki", 1);
        city.id = Some(1);

        let update = CityUpdate::from(city.clone());
        assert_eq!(update.country_id, 1);

        let back = City::from(update);
        assert_eq!(back.id, Some(1));
        assert_eq!(back.country_id, 1);
        assert_eq!(back.name, "Seki");
    }

    #[test]
    fn employee_dto_serializes_to_stable_json() {
        let mut employee = Employee::new("Ahmet Yilmaz");
        employee.id = Some(1);

        let dto = EmployeeDto::from(employee);
        let json = serde_json::to_string(&dto).unwrap();
        assert_eq!(json, r#"{"id":1,"full_name":"Ahmet Yilmaz"}"#);

        let parsed: EmployeeDto = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, dto);
    }

    #[test]
    fn city_dto_json_round_trip() {
        let dto = CityDto {
            id: Some(2),
            name: "Istanbul".to_string(),
            country_id: 2,
        };
        let json = serde_json::to_string(&dto).unwrap();
        let parsed: CityDto = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, dto);
    }
}
