//! Checks the catalog shipped in `data/` against the loader.

use catalog::Catalog;
use std::path::PathBuf;

fn data_file() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/universities.json")
}

#[test]
fn test_bundled_catalog_loads() {
    let catalog = Catalog::load_from_file(&data_file()).unwrap();

    assert_eq!(catalog.len(), 14);
    assert!(catalog.validate().is_ok());
    assert_eq!(
        catalog.countries(),
        vec![
            "Australia",
            "Canada",
            "Germany",
            "Singapore",
            "United Kingdom",
            "United States"
        ]
    );
}

#[test]
fn test_bundled_catalog_lookups() {
    let catalog = Catalog::load_from_file(&data_file()).unwrap();

    let edinburgh = catalog.get("edinburgh").unwrap();
    assert_eq!(edinburgh.country, "United Kingdom");
    assert_eq!(edinburgh.total_annual_cost(), 38500.0);

    let uk: Vec<&str> = catalog
        .in_country("United Kingdom")
        .iter()
        .map(|u| u.id.as_str())
        .collect();
    assert_eq!(uk, vec!["oxford", "imperial", "edinburgh", "manchester"]);

    let mit = catalog.get("mit").unwrap();
    assert_eq!(mit.state.as_deref(), Some("Massachusetts"));
    assert!(mit.sat_range.is_some());
}
