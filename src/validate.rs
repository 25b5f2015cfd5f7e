//! Form Validation
//!
//! Field checks run before any network call. Each function takes the raw
//! input values, trims text fields, and either returns the POST payload or
//! a user-facing message in Norwegian (matching the rest of the UI).

use crate::models::{NyKunde, NyVare};

/// Decimal parse that also accepts comma as the decimal separator.
fn parse_desimal(raw: &str) -> Option<f64> {
    raw.trim().replace(',', ".").parse::<f64>().ok()
}

/// Norwegian postal codes are exactly four digits.
pub fn er_gyldig_postnr(postnr: &str) -> bool {
    postnr.len() == 4 && postnr.chars().all(|c| c.is_ascii_digit())
}

/// Simple email check: allowed local characters, one `@`, a domain with at
/// least one dot, no whitespace.
pub fn er_gyldig_epost(epost: &str) -> bool {
    let Some((lokal, domene)) = epost.split_once('@') else {
        return false;
    };
    if lokal.is_empty() || domene.is_empty() {
        return false;
    }
    let lokal_ok = lokal
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '%' | '+' | '-'));
    let domene_ok = domene
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-'));
    let Some((navn, tld)) = domene.rsplit_once('.') else {
        return false;
    };
    lokal_ok
        && domene_ok
        && !navn.is_empty()
        && tld.len() >= 2
        && tld.chars().all(|c| c.is_ascii_alphabetic())
}

/// Validate the new-item form fields.
pub fn valider_vare(
    vnr: &str,
    betegnelse: &str,
    pris: &str,
    antall: &str,
) -> Result<NyVare, String> {
    let vnr = vnr.trim();
    let betegnelse = betegnelse.trim();
    if vnr.is_empty() {
        return Err("Varenummer må fylles ut.".to_string());
    }
    if betegnelse.is_empty() {
        return Err("Betegnelse må fylles ut.".to_string());
    }
    let pris = parse_desimal(pris)
        .filter(|p| *p > 0.0)
        .ok_or_else(|| "Pris må være et gyldig tall større enn 0.".to_string())?;
    let antall = antall
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|a| *a >= 0)
        .ok_or_else(|| "Antall må være et heltall, 0 eller større.".to_string())?;
    Ok(NyVare {
        vnr: vnr.to_string(),
        betegnelse: betegnelse.to_string(),
        pris,
        antall,
    })
}

/// Validate the new-customer form fields. Email is optional; when left
/// empty it is omitted from the payload.
pub fn valider_kunde(
    fornavn: &str,
    etternavn: &str,
    adresse: &str,
    postnummer: &str,
    epost: &str,
) -> Result<NyKunde, String> {
    let fornavn = fornavn.trim();
    let etternavn = etternavn.trim();
    let adresse = adresse.trim();
    let postnummer = postnummer.trim();
    let epost = epost.trim();
    if fornavn.is_empty() {
        return Err("Fornavn må fylles ut.".to_string());
    }
    if etternavn.is_empty() {
        return Err("Etternavn må fylles ut.".to_string());
    }
    if adresse.is_empty() {
        return Err("Adresse må fylles ut.".to_string());
    }
    if !er_gyldig_postnr(postnummer) {
        return Err("Postnummer må bestå av 4 siffer.".to_string());
    }
    if !epost.is_empty() && !er_gyldig_epost(epost) {
        return Err("E-postadressen er ugyldig.".to_string());
    }
    Ok(NyKunde {
        fornavn: fornavn.to_string(),
        etternavn: etternavn.to_string(),
        adresse: adresse.to_string(),
        postnummer: postnummer.to_string(),
        epost: (!epost.is_empty()).then(|| epost.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vare_empty_vnr_rejected() {
        assert!(valider_vare("", "Widget", "10", "5").is_err());
        // whitespace-only counts as empty
        assert!(valider_vare("   ", "Widget", "10", "5").is_err());
    }

    #[test]
    fn test_vare_nonpositive_pris_rejected() {
        assert!(valider_vare("1", "Widget", "-1", "5").is_err());
        assert!(valider_vare("1", "Widget", "0", "5").is_err());
        assert!(valider_vare("1", "Widget", "abc", "5").is_err());
    }

    #[test]
    fn test_vare_negative_antall_rejected() {
        assert!(valider_vare("1", "Widget", "10", "-2").is_err());
        assert!(valider_vare("1", "Widget", "10", "2.5").is_err());
    }

    #[test]
    fn test_vare_valid_input_builds_payload() {
        let ny = valider_vare("1", "Widget", "10.5", "5").unwrap();
        assert_eq!(
            ny,
            NyVare {
                vnr: "1".to_string(),
                betegnelse: "Widget".to_string(),
                pris: 10.5,
                antall: 5,
            }
        );
    }

    #[test]
    fn test_vare_comma_decimal_accepted() {
        let ny = valider_vare("1", "Widget", "10,5", "0").unwrap();
        assert_eq!(ny.pris, 10.5);
        assert_eq!(ny.antall, 0);
    }

    #[test]
    fn test_vare_fields_are_trimmed() {
        let ny = valider_vare(" 1 ", "  Widget ", "10", "5").unwrap();
        assert_eq!(ny.vnr, "1");
        assert_eq!(ny.betegnelse, "Widget");
    }

    #[test]
    fn test_epost_pattern() {
        assert!(er_gyldig_epost("a@b.co"));
        assert!(er_gyldig_epost("kari.hansen@eksempel.no"));
        assert!(!er_gyldig_epost("a@b"));
        assert!(!er_gyldig_epost("a.b.com"));
        assert!(!er_gyldig_epost("a @b.co"));
        assert!(!er_gyldig_epost("@b.co"));
        assert!(!er_gyldig_epost("a@.co"));
    }

    #[test]
    fn test_postnr_fixed_width() {
        assert!(er_gyldig_postnr("7030"));
        assert!(er_gyldig_postnr("0150"));
        assert!(!er_gyldig_postnr("703"));
        assert!(!er_gyldig_postnr("70301"));
        assert!(!er_gyldig_postnr("7o30"));
    }

    #[test]
    fn test_kunde_requires_text_fields() {
        assert!(valider_kunde("", "Hansen", "Storgata 1", "7030", "").is_err());
        assert!(valider_kunde("Kari", "", "Storgata 1", "7030", "").is_err());
        assert!(valider_kunde("Kari", "Hansen", "", "7030", "").is_err());
        assert!(valider_kunde("Kari", "Hansen", "Storgata 1", "703", "").is_err());
    }

    #[test]
    fn test_kunde_epost_optional() {
        let uten = valider_kunde("Kari", "Hansen", "Storgata 1", "7030", "").unwrap();
        assert_eq!(uten.epost, None);
        let med = valider_kunde("Kari", "Hansen", "Storgata 1", "7030", "kari@eksempel.no")
            .unwrap();
        assert_eq!(med.epost.as_deref(), Some("kari@eksempel.no"));
        assert!(valider_kunde("Kari", "Hansen", "Storgata 1", "7030", "kari@b").is_err());
    }
}
