use orgdir_core::{City, Country, Employee};

#[test]
fn new_entities_start_active_and_unassigned() {
    let country = Country::new("Japan");
    assert_eq!(country.id, None);
    assert!(!country.soft_delete);
    assert!(country.is_active());
    assert!(country.created_at > 0);

    let employee = Employee::new("Kenji Sato");
    assert_eq!(employee.id, None);
    assert!(employee.is_active());
}

#[test]
fn mark_deleted_and_restore_toggle_tombstone() {
    let mut city = City::new("Kyoto", 4);
    assert!(city.is_active());

    city.mark_deleted();
    assert!(city.soft_delete);
    assert!(!city.is_active());

    city.restore();
    assert!(!city.soft_delete);
    assert!(city.is_active());
}

#[test]
fn city_records_its_owning_country() {
    let city = City::new("Seki", 1);
    assert_eq!(city.country_id, 1);
    assert_eq!(city.name, "Seki");
}
