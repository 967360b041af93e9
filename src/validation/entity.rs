//! Registry of health card issuing-entity codes
//!
//! Twenty-one regional codes (the two autonomous provinces of Trentino-Alto
//! Adige have their own) plus three special entities.

use serde::Serialize;

/// Kind of issuing entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// Region or autonomous province
    Region,
    /// Special administrative entity
    Special,
}

/// One entry of the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct EntityCode {
    pub code: &'static str,
    pub name: &'static str,
    pub kind: EntityKind,
}

const fn region(code: &'static str, name: &'static str) -> EntityCode {
    EntityCode {
        code,
        name,
        kind: EntityKind::Region,
    }
}

const fn special(code: &'static str, name: &'static str) -> EntityCode {
    EntityCode {
        code,
        name,
        kind: EntityKind::Special,
    }
}

/// Every recognized entity code
pub static ENTITY_CODES: [EntityCode; 24] = [
    region("010", "Piemonte"),
    region("020", "Valle d'Aosta"),
    region("030", "Lombardia"),
    region("041", "P.A. Bolzano"),
    region("042", "P.A. Trento"),
    region("050", "Veneto"),
    region("060", "Friuli Venezia Giulia"),
    region("070", "Liguria"),
    region("080", "Emilia-Romagna"),
    region("090", "Toscana"),
    region("100", "Umbria"),
    region("110", "Marche"),
    region("120", "Lazio"),
    region("130", "Abruzzo"),
    region("140", "Molise"),
    region("150", "Campania"),
    region("160", "Puglia"),
    region("170", "Basilicata"),
    region("180", "Calabria"),
    region("190", "Sicilia"),
    region("200", "Sardegna"),
    special("001", "SASN Genova"),
    special("002", "SASN Napoli"),
    special("003", "AIRE"),
];

/// Find the registry entry for `code`
pub fn lookup(code: &str) -> Option<&'static EntityCode> {
    ENTITY_CODES.iter().find(|entity| entity.code == code)
}

/// Whether `code` is a recognized entity code
pub fn is_recognized(code: &str) -> bool {
    lookup(code).is_some()
}

/// Entries of the given kind
pub fn by_kind(kind: EntityKind) -> impl Iterator<Item = &'static EntityCode> {
    ENTITY_CODES.iter().filter(move |entity| entity.kind == kind)
}
