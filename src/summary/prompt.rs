//! Report prompt construction.

use crate::geo::GeoRecord;

/// Builds the instruction sent to the model for `record`.
///
/// Every field is listed, absent ones as the missing marker, followed by the
/// length, language and tone requirements of the report.
pub fn build_prompt(record: &GeoRecord) -> String {
    format!(
        "Rédige un court rapport clair et professionnel à propos de cette adresse IP :\n\
         \n\
         - IP : {}\n\
         - Pays : {}\n\
         - Ville : {}\n\
         - Latitude : {}\n\
         - Longitude : {}\n\
         - FAI : {}\n\
         - Fuseau horaire : {}\n\
         \n\
         Le rapport doit faire 4 à 5 lignes maximum, en français, dans un ton professionnel.\n",
        record.query_or_missing(),
        record.country_or_missing(),
        record.city_or_missing(),
        record.lat_or_missing(),
        record.lon_or_missing(),
        record.isp_or_missing(),
        record.timezone_or_missing(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MISSING_MARKER;

    #[test]
    fn test_prompt_embeds_every_field() {
        let record = GeoRecord {
            query: Some("8.8.8.8".into()),
            country: Some("United States".into()),
            city: Some("Mountain View".into()),
            lat: Some("37.4".into()),
            lon: Some("-122.1".into()),
            isp: Some("Google LLC".into()),
            timezone: Some("America/Los_Angeles".into()),
        };
        let prompt = build_prompt(&record);

        assert!(prompt.contains("- IP : 8.8.8.8\n"));
        assert!(prompt.contains("- Pays : United States\n"));
        assert!(prompt.contains("- Ville : Mountain View\n"));
        assert!(prompt.contains("- Latitude : 37.4\n"));
        assert!(prompt.contains("- Longitude : -122.1\n"));
        assert!(prompt.contains("- FAI : Google LLC\n"));
        assert!(prompt.contains("- Fuseau horaire : America/Los_Angeles\n"));
        assert!(prompt.contains("4 à 5 lignes maximum, en français"));
    }

    #[test]
    fn test_prompt_marks_missing_fields() {
        let record = GeoRecord {
            query: Some("1.1.1.1".into()),
            ..Default::default()
        };
        let prompt = build_prompt(&record);
        assert!(prompt.contains(&format!("- Ville : {}\n", MISSING_MARKER)));
        assert!(prompt.contains(&format!("- FAI : {}\n", MISSING_MARKER)));
    }
}
