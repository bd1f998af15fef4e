//! Voice search over nearby healthcare services.
//!
//! Recognition itself happens elsewhere; this module takes the transcript and
//! maps it to a service filter using spoken keywords in English, Hindi and
//! Punjabi.

use serde::Serialize;
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceKind {
    Hospital,
    Pharmacy,
    Clinic,
}

/// What the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchFilter {
    Doctor,
    Pharmacy,
    Hospital,
}

impl SearchFilter {
    pub const ALL: [SearchFilter; 3] = [
        SearchFilter::Doctor,
        SearchFilter::Pharmacy,
        SearchFilter::Hospital,
    ];

    /// Spoken keywords, English lowercase.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            SearchFilter::Doctor => &["doctor", "डॉक्टर", "चिकित्सक", "ਡਾਕਟਰ", "ਵੈਦ"],
            SearchFilter::Pharmacy => &[
                "pharmacy",
                "medicine",
                "दवाखाना",
                "दवा",
                "ਦਵਾਈ ਦੀ ਦੁਕਾਨ",
                "ਫਾਰਮੇਸੀ",
            ],
            SearchFilter::Hospital => &["hospital", "emergency", "अस्पताल", "हॉस्पिटल", "ਹਸਪਤਾਲ"],
        }
    }

    pub fn matches(self, kind: ServiceKind) -> bool {
        matches!(
            (self, kind),
            (SearchFilter::Doctor, ServiceKind::Clinic)
                | (SearchFilter::Pharmacy, ServiceKind::Pharmacy)
                | (SearchFilter::Hospital, ServiceKind::Hospital)
        )
    }
}

impl fmt::Display for SearchFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SearchFilter::Doctor => "doctor",
            SearchFilter::Pharmacy => "pharmacy",
            SearchFilter::Hospital => "hospital",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearbyService {
    pub id: u32,
    pub kind: ServiceKind,
    pub name: &'static str,
    pub address: &'static str,
    pub distance_km: f32,
    pub rating: f32,
    pub is_open: bool,
    pub phone: &'static str,
    pub services: &'static [&'static str],
}

pub static NEARBY_SERVICES: [NearbyService; 4] = [
    NearbyService {
        id: 1,
        kind: ServiceKind::Hospital,
        name: "Civil Hospital Nabha",
        address: "Hospital Road, Nabha",
        distance_km: 0.8,
        rating: 4.2,
        is_open: true,
        phone: "+91 1765-222001",
        services: &["Emergency", "General Medicine", "Surgery"],
    },
    NearbyService {
        id: 2,
        kind: ServiceKind::Pharmacy,
        name: "Nabha Medical Store",
        address: "Main Market, Nabha",
        distance_km: 0.5,
        rating: 4.8,
        is_open: true,
        phone: "+91 98765-43210",
        services: &["General Medicines", "Baby Care"],
    },
    NearbyService {
        id: 3,
        kind: ServiceKind::Clinic,
        name: "Dr. Preet Singh Clinic",
        address: "Bus Stand Road, Nabha",
        distance_km: 1.2,
        rating: 4.9,
        is_open: true,
        phone: "+91 98765-43211",
        services: &["General Medicine", "Consultation"],
    },
    NearbyService {
        id: 4,
        kind: ServiceKind::Pharmacy,
        name: "Apollo Pharmacy",
        address: "Civil Hospital Road, Nabha",
        distance_km: 2.1,
        rating: 4.6,
        is_open: false,
        phone: "+91 98765-43212",
        services: &["24/7 Delivery", "Lab Tests"],
    },
];

/// Filter named by a transcript, if any.
///
/// When several keywords occur, the one spoken first wins.
pub fn interpret(transcript: &str) -> Option<SearchFilter> {
    let lowered = transcript.to_lowercase();
    let spoken = lowered.as_str();

    let found = SearchFilter::ALL
        .into_iter()
        .flat_map(move |filter| {
            filter
                .keywords()
                .iter()
                .filter_map(move |kw| spoken.find(kw).map(|pos| (pos, filter)))
        })
        .min_by_key(|(pos, _)| *pos)
        .map(|(_, filter)| filter);

    debug!("Voice transcript '{}' -> {:?}", transcript, found);
    found
}

/// Nearby services matching `filter`, closest first. `None` lists everything.
pub fn nearby(filter: Option<SearchFilter>) -> Vec<&'static NearbyService> {
    let mut services: Vec<_> = NEARBY_SERVICES
        .iter()
        .filter(|s| filter.map_or(true, |f| f.matches(s.kind)))
        .collect();
    services.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    services
}

/// Interpret a transcript and return the matching services.
pub fn search(transcript: &str) -> (Option<SearchFilter>, Vec<&'static NearbyService>) {
    let filter = interpret(transcript);
    (filter, nearby(filter))
}
