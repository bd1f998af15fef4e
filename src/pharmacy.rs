//! Medicine stock at local pharmacies.
//!
//! A medicine matches a query when its name or brand contains the query,
//! ignoring case. An empty query matches everything.

use crate::i18n::MessageKey;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pharmacy {
    pub id: u32,
    pub name: &'static str,
    pub address: &'static str,
    pub distance_km: f32,
    pub is_open: bool,
    pub delivery_time: Option<&'static str>,
}

pub static PHARMACIES: [Pharmacy; 3] = [
    Pharmacy {
        id: 1,
        name: "Nabha Medical Store",
        address: "Main Market, Nabha",
        distance_km: 0.5,
        is_open: true,
        delivery_time: Some("30-45 mins"),
    },
    Pharmacy {
        id: 2,
        name: "Singh Pharma",
        address: "Bus Stand Road, Nabha",
        distance_km: 1.2,
        is_open: true,
        delivery_time: Some("45-60 mins"),
    },
    Pharmacy {
        id: 3,
        name: "Apollo Pharmacy",
        address: "Civil Hospital Road, Nabha",
        distance_km: 2.1,
        is_open: false,
        delivery_time: Some("60-90 mins"),
    },
];

pub fn find_pharmacy(id: u32) -> Option<&'static Pharmacy> {
    PHARMACIES.iter().find(|p| p.id == id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StockLevel {
    InStock,
    LowStock,
    OutOfStock,
}

impl StockLevel {
    pub fn label_key(self) -> MessageKey {
        match self {
            StockLevel::InStock => MessageKey::PharmacyInStock,
            StockLevel::LowStock => MessageKey::PharmacyLowStock,
            StockLevel::OutOfStock => MessageKey::PharmacyOutOfStock,
        }
    }

    /// Only stocked medicines can be reserved for pickup.
    pub fn can_reserve(self) -> bool {
        self != StockLevel::OutOfStock
    }
}

/// Stock of one medicine at one pharmacy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stock {
    pub pharmacy_id: u32,
    pub level: StockLevel,
    pub quantity: u32,
}

const fn stock(pharmacy_id: u32, level: StockLevel, quantity: u32) -> Stock {
    Stock {
        pharmacy_id,
        level,
        quantity,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Medicine {
    pub id: u32,
    pub name: &'static str,
    pub brand: &'static str,
    pub price: &'static str,
    pub category: &'static str,
    pub stock: &'static [Stock],
}

impl Medicine {
    fn matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(query) || self.brand.to_lowercase().contains(query)
    }

    /// Stock at `pharmacy_id`. Pharmacies without an entry do not carry it.
    pub fn stock_at(&self, pharmacy_id: u32) -> StockLevel {
        self.stock
            .iter()
            .find(|s| s.pharmacy_id == pharmacy_id)
            .map_or(StockLevel::OutOfStock, |s| s.level)
    }

    /// Every pharmacy with this medicine's stock there, closest first.
    pub fn availability(&self) -> Vec<(&'static Pharmacy, StockLevel)> {
        let mut rows: Vec<_> = PHARMACIES
            .iter()
            .map(|pharmacy| (pharmacy, self.stock_at(pharmacy.id)))
            .collect();
        rows.sort_by(|a, b| a.0.distance_km.total_cmp(&b.0.distance_km));
        rows
    }
}

use StockLevel::{InStock, LowStock, OutOfStock};

pub static MEDICINES: [Medicine; 4] = [
    Medicine {
        id: 1,
        name: "Paracetamol 500mg",
        brand: "Crocin",
        price: "₹25",
        category: "Fever & Pain",
        stock: &[stock(1, InStock, 50), stock(2, LowStock, 8), stock(3, OutOfStock, 0)],
    },
    Medicine {
        id: 2,
        name: "Metformin 500mg",
        brand: "Glycomet",
        price: "₹45",
        category: "Diabetes",
        stock: &[stock(1, InStock, 30), stock(2, InStock, 15), stock(3, InStock, 20)],
    },
    Medicine {
        id: 3,
        name: "Amoxicillin 250mg",
        brand: "Moxikind",
        price: "₹85",
        category: "Antibiotics",
        stock: &[stock(1, InStock, 25), stock(2, OutOfStock, 0), stock(3, LowStock, 5)],
    },
    Medicine {
        id: 4,
        name: "Cetirizine 10mg",
        brand: "Zyrtec",
        price: "₹35",
        category: "Allergy",
        stock: &[stock(1, InStock, 40), stock(2, InStock, 12), stock(3, InStock, 18)],
    },
];

/// Medicines whose name or brand contains `query`, in catalogue order.
pub fn search(query: &str) -> Vec<&'static Medicine> {
    let query = query.trim().to_lowercase();
    let found: Vec<_> = MEDICINES.iter().filter(|m| m.matches(&query)).collect();
    debug!("Medicine search '{}' -> {} result(s)", query, found.len());
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(found: &[&Medicine]) -> Vec<&'static str> {
        found.iter().map(|m| m.name).collect()
    }

    // ==================== Search Tests ====================

    #[test]
    fn test_search_ignores_case() {
        assert_eq!(names(&search("PARACETAMOL")), vec!["Paracetamol 500mg"]);
        assert_eq!(names(&search("metFORmin")), vec!["Metformin 500mg"]);
    }

    #[test]
    fn test_search_matches_brand() {
        assert_eq!(names(&search("crocin")), vec!["Paracetamol 500mg"]);
        assert_eq!(names(&search("zyr")), vec!["Cetirizine 10mg"]);
    }

    #[test]
    fn test_search_matches_substring_of_name() {
        // "500mg" appears in two names
        assert_eq!(
            names(&search("500mg")),
            vec!["Paracetamol 500mg", "Metformin 500mg"]
        );
    }

    #[test]
    fn test_empty_query_lists_everything() {
        assert_eq!(search("").len(), MEDICINES.len());
        assert_eq!(search("   ").len(), MEDICINES.len());
    }

    #[test]
    fn test_no_results() {
        assert!(search("insulin").is_empty());
    }

    // ==================== Stock Tests ====================

    #[test]
    fn test_stock_per_pharmacy() {
        let paracetamol = search("crocin")[0];
        assert_eq!(paracetamol.stock_at(1), StockLevel::InStock);
        assert_eq!(paracetamol.stock_at(2), StockLevel::LowStock);
        assert_eq!(paracetamol.stock_at(3), StockLevel::OutOfStock);
        assert_eq!(paracetamol.stock_at(99), StockLevel::OutOfStock);
    }

    #[test]
    fn test_availability_lists_every_pharmacy_closest_first() {
        let amoxicillin = search("moxikind")[0];
        let rows: Vec<_> = amoxicillin
            .availability()
            .into_iter()
            .map(|(pharmacy, level)| (pharmacy.name, level))
            .collect();

        assert_eq!(
            rows,
            vec![
                ("Nabha Medical Store", StockLevel::InStock),
                ("Singh Pharma", StockLevel::OutOfStock),
                ("Apollo Pharmacy", StockLevel::LowStock),
            ]
        );
    }

    #[test]
    fn test_stock_labels_and_reservation() {
        assert_eq!(StockLevel::InStock.label_key(), MessageKey::PharmacyInStock);
        assert_eq!(StockLevel::LowStock.label_key(), MessageKey::PharmacyLowStock);
        assert_eq!(
            StockLevel::OutOfStock.label_key(),
            MessageKey::PharmacyOutOfStock
        );
        assert!(StockLevel::LowStock.can_reserve());
        assert!(!StockLevel::OutOfStock.can_reserve());
    }

    #[test]
    fn test_find_pharmacy() {
        assert_eq!(find_pharmacy(2).unwrap().name, "Singh Pharma");
        assert!(find_pharmacy(4).is_none());
    }
}
