//! Frontend Models
//!
//! Data structures matching the admin API. Every wire field is optional:
//! the server owns these records and the UI must render a row even when a
//! field is absent or null, substituting the documented default.

use serde::{Deserialize, Deserializer, Serialize};

/// Placeholder shown for absent optional fields (ship/payment dates, email).
pub const PLACEHOLDER: &str = "—";

/// Identifiers arrive as either JSON strings or numbers depending on the
/// server version; keep them as text so they round-trip unchanged. Any
/// other type is a shape error, not a default.
fn ident<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) => Ok(Some(s)),
        Some(serde_json::Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "identifikator må være tekst eller tall, ikke {}",
            match other {
                serde_json::Value::Bool(_) => "boolsk verdi",
                serde_json::Value::Array(_) => "liste",
                serde_json::Value::Object(_) => "objekt",
                _ => "ukjent type",
            }
        ))),
    }
}

/// Item record from `/api/varer`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vare {
    #[serde(rename = "VNr", default, deserialize_with = "ident")]
    pub vnr: Option<String>,
    #[serde(rename = "Betegnelse", default)]
    pub betegnelse: Option<String>,
    #[serde(rename = "Pris", default)]
    pub pris: Option<f64>,
    #[serde(rename = "Antall", default)]
    pub antall: Option<i64>,
}

impl Vare {
    pub fn vnr_display(&self) -> &str {
        self.vnr.as_deref().unwrap_or("N/A")
    }

    pub fn betegnelse_display(&self) -> &str {
        self.betegnelse.as_deref().unwrap_or("")
    }

    /// Price with exactly two decimals and currency suffix
    pub fn pris_display(&self) -> String {
        format!("{:.2} NOK", self.pris.unwrap_or(0.0))
    }

    pub fn antall_display(&self) -> i64 {
        self.antall.unwrap_or(0)
    }
}

/// Customer record from `/api/kunder`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kunde {
    #[serde(rename = "KNr", default, deserialize_with = "ident")]
    pub knr: Option<String>,
    #[serde(rename = "Fornavn", default)]
    pub fornavn: Option<String>,
    #[serde(rename = "Etternavn", default)]
    pub etternavn: Option<String>,
    #[serde(rename = "Adresse", default)]
    pub adresse: Option<String>,
    // Fixed-width string, but older servers send it as a number
    #[serde(rename = "PostNr", default, deserialize_with = "ident")]
    pub postnr: Option<String>,
    #[serde(rename = "Epost", default)]
    pub epost: Option<String>,
}

impl Kunde {
    pub fn knr_display(&self) -> &str {
        self.knr.as_deref().unwrap_or("N/A")
    }

    pub fn fornavn_display(&self) -> &str {
        self.fornavn.as_deref().unwrap_or("")
    }

    pub fn etternavn_display(&self) -> &str {
        self.etternavn.as_deref().unwrap_or("")
    }

    pub fn adresse_display(&self) -> &str {
        self.adresse.as_deref().unwrap_or("")
    }

    pub fn postnr_display(&self) -> &str {
        self.postnr.as_deref().unwrap_or("")
    }

    pub fn epost_display(&self) -> &str {
        self.epost.as_deref().unwrap_or(PLACEHOLDER)
    }
}

/// Order record from `/api/ordrer`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ordre {
    #[serde(rename = "OrdreNr", default, deserialize_with = "ident")]
    pub ordre_nr: Option<String>,
    #[serde(rename = "OrdreDato", default)]
    pub ordre_dato: Option<String>,
    #[serde(rename = "SendtDato", default)]
    pub sendt_dato: Option<String>,
    #[serde(rename = "BetaltDato", default)]
    pub betalt_dato: Option<String>,
    #[serde(rename = "Kundenavn", default)]
    pub kundenavn: Option<String>,
}

impl Ordre {
    pub fn ordre_nr_display(&self) -> &str {
        self.ordre_nr.as_deref().unwrap_or("N/A")
    }

    pub fn ordre_dato_display(&self) -> &str {
        self.ordre_dato.as_deref().unwrap_or("")
    }

    pub fn sendt_dato_display(&self) -> &str {
        self.sendt_dato.as_deref().unwrap_or(PLACEHOLDER)
    }

    pub fn betalt_dato_display(&self) -> &str {
        self.betalt_dato.as_deref().unwrap_or(PLACEHOLDER)
    }

    pub fn kundenavn_display(&self) -> &str {
        self.kundenavn.as_deref().unwrap_or("")
    }
}

/// POST body for `/api/varer`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NyVare {
    pub vnr: String,
    pub betegnelse: String,
    pub pris: f64,
    pub antall: i64,
}

/// POST body for `/api/kunder`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NyKunde {
    pub fornavn: String,
    pub etternavn: String,
    pub adresse: String,
    pub postnummer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub epost: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_vare_defaults_for_missing_fields() {
        let vare: Vare = serde_json::from_value(json!({})).unwrap();
        assert_eq!(vare.vnr_display(), "N/A");
        assert_eq!(vare.betegnelse_display(), "");
        assert_eq!(vare.pris_display(), "0.00 NOK");
        assert_eq!(vare.antall_display(), 0);
    }

    #[test]
    fn test_vare_null_fields_take_defaults() {
        let vare: Vare =
            serde_json::from_value(json!({"VNr": null, "Pris": null, "Antall": null})).unwrap();
        assert_eq!(vare.vnr_display(), "N/A");
        assert_eq!(vare.pris_display(), "0.00 NOK");
    }

    #[test]
    fn test_identifier_roundtrips_string_and_number() {
        let a: Vare = serde_json::from_value(json!({"VNr": "V-12"})).unwrap();
        let b: Vare = serde_json::from_value(json!({"VNr": 3})).unwrap();
        assert_eq!(a.vnr_display(), "V-12");
        assert_eq!(b.vnr_display(), "3");
    }

    #[test]
    fn test_identifier_wrong_type_is_rejected() {
        assert!(serde_json::from_value::<Vare>(json!({"VNr": true})).is_err());
        assert!(serde_json::from_value::<Vare>(json!({"VNr": [1]})).is_err());
        assert!(serde_json::from_value::<Kunde>(json!({"KNr": {"id": 1}})).is_err());
    }

    #[test]
    fn test_pris_two_decimals() {
        let whole: Vare = serde_json::from_value(json!({"Pris": 9})).unwrap();
        assert_eq!(whole.pris_display(), "9.00 NOK");
        let half: Vare = serde_json::from_value(json!({"Pris": 10.5})).unwrap();
        assert_eq!(half.pris_display(), "10.50 NOK");
        // 9.005 is stored as 9.00499..., so float rounding gives 9.00
        let tie: Vare = serde_json::from_value(json!({"Pris": 9.005})).unwrap();
        assert_eq!(tie.pris_display(), "9.00 NOK");
    }

    #[test]
    fn test_kunde_numeric_postnr() {
        let kunde: Kunde = serde_json::from_value(json!({"PostNr": 7030})).unwrap();
        assert_eq!(kunde.postnr_display(), "7030");
    }

    #[test]
    fn test_ordre_missing_dates_use_placeholder() {
        let ordre: Ordre = serde_json::from_value(json!({
            "OrdreNr": 1,
            "OrdreDato": "2024-01-05",
            "SendtDato": null,
            "Kundenavn": "Ola Nordmann"
        }))
        .unwrap();
        assert_eq!(ordre.ordre_nr_display(), "1");
        assert_eq!(ordre.ordre_dato_display(), "2024-01-05");
        assert_eq!(ordre.sendt_dato_display(), PLACEHOLDER);
        assert_eq!(ordre.betalt_dato_display(), PLACEHOLDER);
    }

    #[test]
    fn test_ny_vare_post_body() {
        let ny = NyVare {
            vnr: "1".to_string(),
            betegnelse: "Widget".to_string(),
            pris: 10.5,
            antall: 5,
        };
        assert_eq!(
            serde_json::to_value(&ny).unwrap(),
            json!({"vnr": "1", "betegnelse": "Widget", "pris": 10.5, "antall": 5})
        );
    }

    #[test]
    fn test_ny_kunde_omits_empty_epost() {
        let ny = NyKunde {
            fornavn: "Kari".to_string(),
            etternavn: "Hansen".to_string(),
            adresse: "Storgata 1".to_string(),
            postnummer: "7030".to_string(),
            epost: None,
        };
        let value = serde_json::to_value(&ny).unwrap();
        assert!(value.get("epost").is_none());
        assert_eq!(value["postnummer"], "7030");
    }
}
