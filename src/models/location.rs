//! Location DTOs
//!
//! Response shapes for the PokeAPI location-area endpoints.

use serde::Deserialize;

/// A name/url pair, the building block of most PokeAPI responses.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// One page of location areas (GET /location-area/).
///
/// `next`/`previous` carry the pagination URLs the `map`/`mapb` commands
/// follow; either may be null at the ends of the list.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationAreaPage {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

/// Detail for a single location area (GET /location-area/{name}).
#[derive(Debug, Clone, Deserialize)]
pub struct LocationAreaDetail {
    pub name: String,
    #[serde(default)]
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

/// One possible encounter within a location area.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: NamedResource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_page_deserialize() {
        let json = r#"{
            "count": 1089,
            "next": "https://pokeapi.co/api/v2/location-area/?offset=20&limit=20",
            "previous": null,
            "results": [
                {"name": "canalave-city-area", "url": "https://pokeapi.co/api/v2/location-area/1/"},
                {"name": "eterna-city-area", "url": "https://pokeapi.co/api/v2/location-area/2/"}
            ]
        }"#;

        let page: LocationAreaPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.count, 1089);
        assert!(page.next.is_some());
        assert!(page.previous.is_none());
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[0].name, "canalave-city-area");
    }

    #[test]
    fn test_location_detail_deserialize() {
        let json = r#"{
            "name": "canalave-city-area",
            "pokemon_encounters": [
                {"pokemon": {"name": "tentacool", "url": "https://pokeapi.co/api/v2/pokemon/72/"}},
                {"pokemon": {"name": "staryu", "url": "https://pokeapi.co/api/v2/pokemon/120/"}}
            ]
        }"#;

        let detail: LocationAreaDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.name, "canalave-city-area");
        assert_eq!(detail.pokemon_encounters.len(), 2);
        assert_eq!(detail.pokemon_encounters[1].pokemon.name, "staryu");
    }

    #[test]
    fn test_location_detail_missing_encounters() {
        // Some areas omit the encounter list entirely.
        let json = r#"{"name": "empty-area"}"#;

        let detail: LocationAreaDetail = serde_json::from_str(json).unwrap();
        assert!(detail.pokemon_encounters.is_empty());
    }
}
