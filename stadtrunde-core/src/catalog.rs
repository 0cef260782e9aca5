use std::collections::HashSet;

use crate::entities::CatalogEntry;

// (address, note, class, name)
//
// Addresses are storage keys: renaming one orphans its persisted state.
const FRANKFURT: [(&str, Option<&str>, &str, &str); 9] = [
    ("Berger Straße 174, Frankfurt am Main", None, "11a", "Markus Just"),
    ("Oeder Weg 49, Frankfurt am Main", None, "10a", "Bertold Breig"),
    ("Steinweg, Frankfurt am Main", Some("am U-Bahnabgang"), "7a", "Sita Poutot"),
    ("Opernplatz, Frankfurt am Main", Some("Ecke Taunusanlage"), "11b", "Petra Kolb"),
    ("Biebergasse, Frankfurt am Main", Some("Südseite, an den Bäumen"), "8a", "Andrea Hübner"),
    (
        "Schweizer Platz, Frankfurt am Main",
        Some("Ecke Oppenheimer Landstraße/ Schneckhofstraße"),
        "10b",
        "Anja Grund",
    ),
    ("Kalbächer Gasse, Frankfurt am Main", Some("Ecke Börsenstraße"), "7b", "Lea Zurr"),
    ("Töngesgasse, Frankfurt am Main", Some("Ecke Hasengasse"), "8b", "El Ham El Zein"),
    ("Merianplatz, Frankfurt am Main", Some("neben dem U-Bahn-Abgang"), "9b", "Christoph Langheim"),
];

/// The compiled-in catalog in display order.
#[must_use]
pub fn catalog() -> Vec<CatalogEntry> {
    FRANKFURT
        .iter()
        .map(|(address, note, class_label, contact_name)| CatalogEntry {
            address: (*address).to_string(),
            note: note.map(ToString::to_string),
            class_label: (*class_label).to_string(),
            contact_name: (*contact_name).to_string(),
        })
        .collect()
}

/// Returns the first address that occurs more than once.
#[must_use]
pub fn find_duplicate_address(catalog: &[CatalogEntry]) -> Option<&str> {
    let mut seen = HashSet::with_capacity(catalog.len());
    catalog
        .iter()
        .map(|e| e.address.as_str())
        .find(|address| !seen.insert(*address))
}
