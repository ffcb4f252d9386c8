use crate::entities::store;

/// Zone a store falls back to when nothing else matches.
pub const GENERAL_ZONE: &str = "general";

/// Resolves the coarse delivery zone for a store.
///
/// The default implementation pattern-matches city keywords out of the
/// free-text address, which is fragile; the trait keeps the scoring engine
/// insulated so a real geocoding backend can slot in later.
pub trait ZoneResolver: Send + Sync {
    fn resolve(&self, store: &store::Model) -> String;
}

struct ZoneDef {
    name: &'static str,
    keywords: &'static [&'static str],
    /// (lat_min, lat_max, lon_min, lon_max)
    bounds: Option<(f64, f64, f64, f64)>,
}

/// Metro-area zone map used by the keyword resolver. Bounds are coarse
/// quadrant boxes around the depot, not parcel-accurate polygons.
const ZONES: &[ZoneDef] = &[
    ZoneDef {
        name: "downtown",
        keywords: &["downtown", "centro", "city center", "old town", "central"],
        bounds: Some((40.40, 40.44, -3.72, -3.68)),
    },
    ZoneDef {
        name: "north",
        keywords: &["north", "norte", "uptown"],
        bounds: Some((40.44, 40.55, -3.75, -3.60)),
    },
    ZoneDef {
        name: "south",
        keywords: &["south", "sur"],
        bounds: Some((40.30, 40.40, -3.75, -3.60)),
    },
    ZoneDef {
        name: "east",
        keywords: &["east", "este"],
        bounds: Some((40.38, 40.46, -3.68, -3.55)),
    },
    ZoneDef {
        name: "west",
        keywords: &["west", "oeste"],
        bounds: Some((40.38, 40.46, -3.82, -3.72)),
    },
];

/// Default resolver: explicit zone field, then city field, then address
/// keywords, then coordinate boxes, then `general`.
#[derive(Debug, Default, Clone)]
pub struct KeywordZoneResolver;

impl ZoneResolver for KeywordZoneResolver {
    fn resolve(&self, store: &store::Model) -> String {
        if let Some(zone) = normalized(store.delivery_zone.as_deref()) {
            return zone;
        }

        if let Some(city) = store.city.as_deref() {
            if let Some(zone) = match_keywords(city) {
                return zone;
            }
        }

        if let Some(zone) = match_keywords(&store.address) {
            return zone;
        }

        if let (Some(lat), Some(lon)) = (store.latitude, store.longitude) {
            if let Some(zone) = match_bounds(lat, lon) {
                return zone;
            }
        }

        GENERAL_ZONE.to_string()
    }
}

fn normalized(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|z| !z.is_empty())
        .map(str::to_lowercase)
}

fn match_keywords(text: &str) -> Option<String> {
    let haystack = text.to_lowercase();
    ZONES
        .iter()
        .find(|zone| zone.keywords.iter().any(|kw| haystack.contains(kw)))
        .map(|zone| zone.name.to_string())
}

fn match_bounds(lat: f64, lon: f64) -> Option<String> {
    ZONES
        .iter()
        .filter_map(|zone| zone.bounds.map(|b| (zone.name, b)))
        .find(|(_, (lat_min, lat_max, lon_min, lon_max))| {
            lat >= *lat_min && lat < *lat_max && lon >= *lon_min && lon < *lon_max
        })
        .map(|(name, _)| name.to_string())
}

/// Great-circle distance in kilometers.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    const EARTH_RADIUS_KM: f64 = 6371.0;

    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn store(
        city: Option<&str>,
        zone: Option<&str>,
        address: &str,
        coords: Option<(f64, f64)>,
    ) -> store::Model {
        store::Model {
            id: Uuid::new_v4(),
            name: "Corner Bakery".into(),
            address: address.into(),
            city: city.map(String::from),
            delivery_zone: zone.map(String::from),
            latitude: coords.map(|c| c.0),
            longitude: coords.map(|c| c.1),
            preferred_delivery_time: None,
            assigned_distributor_id: None,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    #[test]
    fn explicit_zone_field_wins() {
        let resolver = KeywordZoneResolver;
        let s = store(Some("somewhere"), Some("North"), "12 South Road", None);
        assert_eq!(resolver.resolve(&s), "north");
    }

    #[test]
    fn city_keyword_beats_address() {
        let resolver = KeywordZoneResolver;
        let s = store(Some("Norte"), None, "Calle del Sur 5", None);
        assert_eq!(resolver.resolve(&s), "north");
    }

    #[test]
    fn address_keywords_match_case_insensitively() {
        let resolver = KeywordZoneResolver;
        let s = store(None, None, "Plaza Mayor, OLD TOWN, 4th floor", None);
        assert_eq!(resolver.resolve(&s), "downtown");
    }

    #[test]
    fn coordinates_are_the_last_resort_before_general() {
        let resolver = KeywordZoneResolver;
        let in_north = store(None, None, "Unit 7, Industrial Park", Some((40.50, -3.70)));
        assert_eq!(resolver.resolve(&in_north), "north");

        let nowhere = store(None, None, "Unit 7, Industrial Park", Some((51.5, -0.1)));
        assert_eq!(resolver.resolve(&nowhere), GENERAL_ZONE);
    }

    #[test]
    fn unknown_store_defaults_to_general() {
        let resolver = KeywordZoneResolver;
        let s = store(None, None, "somewhere unnamed 12", None);
        assert_eq!(resolver.resolve(&s), GENERAL_ZONE);
    }

    #[test]
    fn haversine_known_distance() {
        // Madrid -> Barcelona is roughly 505 km.
        let km = haversine_km(40.4168, -3.7038, 41.3874, 2.1686);
        assert!((km - 505.0).abs() < 10.0, "got {}", km);
    }

    #[test]
    fn haversine_zero_for_same_point() {
        assert!(haversine_km(40.0, -3.0, 40.0, -3.0) < 1e-9);
    }
}
