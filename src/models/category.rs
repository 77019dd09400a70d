//! Expense categories
//!
//! Each mode carries its own fixed, ordered category set. The data is static
//! configuration, not computed; labels double as the stable key for expense
//! amounts and the advice prompt.

use std::fmt;

use super::mode::Mode;

/// A named expense bucket with a human-readable description
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryDef {
    /// Category label (the key for amounts)
    pub label: &'static str,
    /// What belongs in this bucket
    pub description: &'static str,
}

impl fmt::Display for CategoryDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Categories for monthly budgeting
const MONTHLY_CATEGORIES: &[CategoryDef] = &[
    CategoryDef {
        label: "Food",
        description: "Daily meals, snacks, canteen",
    },
    CategoryDef {
        label: "Transport",
        description: "Bus, train, cabs, bike fuel",
    },
    CategoryDef {
        label: "Rent/Hostel",
        description: "Hostel fee or PG rent",
    },
    CategoryDef {
        label: "Study Materials",
        description: "Books, stationery, software",
    },
    CategoryDef {
        label: "Internet/Phone",
        description: "Mobile data, WiFi, recharge",
    },
    CategoryDef {
        label: "Entertainment & Outings",
        description: "Movies, hangouts, trips",
    },
    CategoryDef {
        label: "Health & Fitness",
        description: "Medicines, doctor visits, gym",
    },
    CategoryDef {
        label: "Clubs/Events",
        description: "Societies, fests, competitions",
    },
    CategoryDef {
        label: "Others",
        description: "Miscellaneous expenses",
    },
];

/// Categories for semester budgeting
const SEMESTER_CATEGORIES: &[CategoryDef] = &[
    CategoryDef {
        label: "Tuition Fees",
        description: "College or semester fees",
    },
    CategoryDef {
        label: "Hostel/PG Rent",
        description: "Semester-long rent or hostel fee",
    },
    CategoryDef {
        label: "Study Materials",
        description: "Books, notes, stationery, software",
    },
    CategoryDef {
        label: "Transport",
        description: "Travel home, trips, daily commute",
    },
    CategoryDef {
        label: "College Events/Fests",
        description: "Cultural fest, tech fest, competitions",
    },
    CategoryDef {
        label: "Trips & Excursions",
        description: "Industrial visit, college trip",
    },
    CategoryDef {
        label: "Health & Insurance",
        description: "Medicines, hospital, insurance",
    },
    CategoryDef {
        label: "Internet & Utilities",
        description: "WiFi, mobile recharge, electricity",
    },
    CategoryDef {
        label: "Food & Daily Expenses",
        description: "Canteen, groceries, mess",
    },
    CategoryDef {
        label: "Others",
        description: "Miscellaneous semester expenses",
    },
];

/// Get the ordered category set for a mode
pub fn categories_for(mode: Mode) -> &'static [CategoryDef] {
    match mode {
        Mode::Monthly => MONTHLY_CATEGORIES,
        Mode::Semester => SEMESTER_CATEGORIES,
    }
}

/// Look up a category by label within a mode's set
pub fn find_category(mode: Mode, label: &str) -> Option<&'static CategoryDef> {
    categories_for(mode).iter().find(|c| c.label == label)
}
