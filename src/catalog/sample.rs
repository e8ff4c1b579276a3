// Built-in catalog used when no catalog file is configured.
//
// Mirrors what the agency site ships with: destinations first, then flights,
// hotels and services.

use super::models::{CatalogEntry, EntryType};
use super::CatalogSections;

// (name, category, country, url)
type Row = (&'static str, &'static str, &'static str, &'static str);

const DESTINATIONS: &[Row] = &[
    ("Bangkok, Thailand", "Asia", "Thailand", "destinations/bangkok.html"),
    ("Phuket, Thailand", "Asia", "Thailand", "destinations/phuket.html"),
    ("Chiang Mai, Thailand", "Asia", "Thailand", "destinations/chiang-mai.html"),
    ("Singapore City", "Asia", "Singapore", "destinations/singapore-city.html"),
    ("Tokyo, Japan", "Asia", "Japan", "destinations/tokyo.html"),
    ("Kyoto, Japan", "Asia", "Japan", "destinations/kyoto.html"),
    ("Osaka, Japan", "Asia", "Japan", "destinations/osaka.html"),
    ("Sydney, Australia", "Oceania", "Australia", "destinations/sydney.html"),
    ("Melbourne, Australia", "Oceania", "Australia", "destinations/melbourne.html"),
    ("New York, United States", "North America", "United States", "destinations/new-york.html"),
    ("Los Angeles, United States", "North America", "United States", "destinations/los-angeles.html"),
    ("San Francisco, United States", "North America", "United States", "destinations/san-francisco.html"),
    ("London, United Kingdom", "Europe", "United Kingdom", "destinations/london.html"),
    ("Edinburgh, United Kingdom", "Europe", "United Kingdom", "destinations/edinburgh.html"),
    ("Dubai, United Arab Emirates", "Middle East", "United Arab Emirates", "destinations/dubai.html"),
    ("Abu Dhabi, United Arab Emirates", "Middle East", "United Arab Emirates", "destinations/abu-dhabi.html"),
    ("Seoul, South Korea", "Asia", "South Korea", "destinations/seoul.html"),
    ("Busan, South Korea", "Asia", "South Korea", "destinations/busan.html"),
    ("Toronto, Canada", "North America", "Canada", "destinations/toronto.html"),
    ("Vancouver, Canada", "North America", "Canada", "destinations/vancouver.html"),
    ("Montreal, Canada", "North America", "Canada", "destinations/montreal.html"),
];

const FLIGHTS: &[Row] = &[
    ("Flight to Bangkok", "Flights", "Thailand", "#book-flight"),
    ("Flight to Singapore", "Flights", "Singapore", "#book-flight"),
    ("Flight to Tokyo", "Flights", "Japan", "#book-flight"),
    ("Flight to Sydney", "Flights", "Australia", "#book-flight"),
    ("Flight to New York", "Flights", "United States", "#book-flight"),
    ("Flight to London", "Flights", "United Kingdom", "#book-flight"),
    ("Flight to Dubai", "Flights", "United Arab Emirates", "#book-flight"),
];

const HOTELS: &[Row] = &[
    ("Hotel in Bangkok", "Accommodation", "Thailand", "#book-flight"),
    ("Hotel in Singapore", "Accommodation", "Singapore", "#book-flight"),
    ("Hotel in Tokyo", "Accommodation", "Japan", "#book-flight"),
    ("Hotel in Sydney", "Accommodation", "Australia", "#book-flight"),
    ("Hotel in New York", "Accommodation", "United States", "#book-flight"),
];

// Services carry their own icons.
const SERVICES: &[(&str, &str, &str)] = &[
    ("Visa Services", "#services", "fas fa-passport"),
    ("Tour Packages", "#services", "fas fa-suitcase"),
    ("Hotel Reservations", "#services", "fas fa-hotel"),
    ("Flight Booking", "#book-flight", "fas fa-ticket-alt"),
];

fn rows(rows: &[Row], entry_type: EntryType) -> Vec<CatalogEntry> {
    rows.iter()
        .map(|(name, category, country, url)| {
            CatalogEntry::new(name, entry_type, category, country, url)
        })
        .collect()
}

pub(super) fn sections() -> CatalogSections {
    CatalogSections {
        destinations: rows(DESTINATIONS, EntryType::Destination),
        flights: rows(FLIGHTS, EntryType::Flight),
        hotels: rows(HOTELS, EntryType::Hotel),
        services: SERVICES
            .iter()
            .map(|(name, url, icon)| {
                CatalogEntry::new(name, EntryType::Service, "Travel Services", "Global", url)
                    .with_icon(icon)
            })
            .collect(),
    }
}
