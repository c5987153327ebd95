//! Console rendering of an analysis.

use std::io::{self, Write};

use crate::config::{MAPS_URL_TEMPLATE, RULE_WIDTH};
use crate::geo::GeoRecord;
use crate::summary::Summary;

const RESULTS_TITLE: &str = "🔎  RÉSULTATS DE L'ANALYSE";
const MAPS_HEADING: &str = "🔗 Lien Google Maps :";
const REPORT_HEADING: &str = "🧠 Rapport  :";

/// Map link for the record's coordinates.
///
/// The template's `{lat}` and `{lon}` placeholders are replaced with the
/// coordinates exactly as the service returned them (or the missing marker).
pub fn maps_link(record: &GeoRecord) -> String {
    MAPS_URL_TEMPLATE
        .replace("{lat}", &record.lat_or_missing())
        .replace("{lon}", &record.lon_or_missing())
}

fn rule(ch: char) -> String {
    ch.to_string().repeat(RULE_WIDTH)
}

/// Writes the results banner, the labeled fields and the map link.
pub fn render_record<W: Write + ?Sized>(out: &mut W, record: &GeoRecord) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", rule('='))?;
    writeln!(out, "{:^width$}", RESULTS_TITLE, width = RULE_WIDTH)?;
    writeln!(out, "{}", rule('='))?;

    writeln!(out, "🌐 Adresse IP analysée : {}", record.query_or_missing())?;
    writeln!(out, "🌍 Pays               : {}", record.country_or_missing())?;
    writeln!(out, "🏙️  Ville              : {}", record.city_or_missing())?;
    writeln!(out, "🛰️  Latitude           : {}", record.lat_or_missing())?;
    writeln!(out, "🧭 Longitude          : {}", record.lon_or_missing())?;
    writeln!(out, "📡 Fournisseur (FAI)  : {}", record.isp_or_missing())?;
    writeln!(out, "🕒 Fuseau horaire     : {}", record.timezone_or_missing())?;

    writeln!(out)?;
    writeln!(out, "{}", MAPS_HEADING)?;
    writeln!(out, "{}", maps_link(record))
}

/// Writes the heading of the report section. Printed before the report is
/// requested so the user sees progress while the model answers.
pub fn render_summary_header<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", rule('-'))?;
    writeln!(out, "{}", REPORT_HEADING)?;
    writeln!(out, "{}", rule('-'))?;
    out.flush()
}

/// Writes the report text, if any, and closes the results block.
pub fn render_summary<W: Write + ?Sized>(out: &mut W, summary: Option<&Summary>) -> io::Result<()> {
    if let Some(summary) = summary.filter(|s| !s.is_empty()) {
        writeln!(out, "{}", summary)?;
    }
    writeln!(out, "{}", rule('='))?;
    writeln!(out)
}
