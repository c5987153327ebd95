//! Interactive analysis loop.
//!
//! One iteration: read an address, geolocate it, render the result, request a
//! report, then ask whether to continue. Nothing carries over between
//! iterations except the error counters.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use log::info;

use crate::config::{Config, AFFIRMATIVE_TOKEN, MSG_FAREWELL, PROMPT_CONTINUE};
use crate::error_handling::{
    ErrorType, GeoLookupError, InitializationError, Reporter, SessionStats,
};
use crate::geo::GeoClient;
use crate::initialization::init_client;
use crate::summary::SummaryClient;
use crate::validate::{prompt_for_address, strip_line_ending, Address};

use super::render::{render_record, render_summary, render_summary_header};

/// The two service clients used by a session.
#[derive(Debug, Clone)]
pub struct Analyzer {
    pub geo: GeoClient,
    pub summary: SummaryClient,
}

impl Analyzer {
    pub fn new(geo: GeoClient, summary: SummaryClient) -> Self {
        Self { geo, summary }
    }

    /// Builds both clients from the configuration, sharing one HTTP client.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the HTTP client
    /// cannot be created.
    pub fn from_config(config: &Config) -> Result<Self, InitializationError> {
        let client = init_client(config)?;
        if config.openai_api_key.is_none() {
            log::warn!("OPENAI_API_KEY is not set; reports will not be generated");
        }
        let geo = GeoClient::new(client.clone(), config.geo_api_url.clone());
        let summary = SummaryClient::new(
            client,
            config.openai_api_url.clone(),
            config.openai_api_key.clone(),
            config.model.clone(),
            config.temperature,
        );
        Ok(Self::new(geo, summary))
    }
}

/// Limits applied to a session. The default is unbounded.
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Invalid address entries tolerated in a row before the session ends
    pub max_address_attempts: Option<usize>,
}

/// Outcome of one analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisOutcome {
    /// The geolocation step failed; nothing was rendered.
    GeolocationFailed,
    /// The record was rendered; `summarized` tells whether a report followed.
    Located { summarized: bool },
}

/// Totals for a finished session.
#[derive(Debug, Clone)]
pub struct SessionReport {
    /// Addresses accepted and sent for analysis
    pub analyses: usize,
    /// Analyses that produced a geolocation record
    pub located: usize,
    /// Analyses that produced a report
    pub summarized: usize,
    /// Reported errors by class
    pub stats: SessionStats,
}

/// Runs the geolocation and report steps for one address and renders them.
///
/// Service failures are handed to `reporter` and end the analysis early; they
/// are not errors of this function.
///
/// # Errors
///
/// Fails only if writing to `output` fails.
pub async fn analyze<W: Write + ?Sized>(
    analyzer: &Analyzer,
    address: &Address,
    output: &mut W,
    reporter: &mut dyn Reporter,
    stats: &mut SessionStats,
) -> Result<AnalysisOutcome> {
    let record = match analyzer.geo.lookup(address).await {
        Ok(record) => record,
        Err(e) => {
            log::warn!("Geolocation of {} failed: {}", address, e);
            stats.increment_error(ErrorType::GeolocationFailure);
            reporter.report(ErrorType::GeolocationFailure, &geolocation_message(&e));
            return Ok(AnalysisOutcome::GeolocationFailed);
        }
    };

    render_record(output, &record).context("Failed to write analysis results")?;
    render_summary_header(output).context("Failed to write report heading")?;

    let summary = match analyzer.summary.generate(&record).await {
        Ok(summary) => Some(summary),
        Err(e) => {
            log::warn!("Report generation for {} failed: {}", address, e);
            stats.increment_error(ErrorType::SummaryFailure);
            reporter.report(
                ErrorType::SummaryFailure,
                &format!("❌ Erreur lors de la génération du rapport IA : {}", e),
            );
            None
        }
    };
    let summarized = summary.as_ref().is_some_and(|s| !s.is_empty());

    render_summary(output, summary.as_ref()).context("Failed to write report")?;
    output.flush().context("Failed to flush output")?;

    Ok(AnalysisOutcome::Located { summarized })
}

fn geolocation_message(error: &GeoLookupError) -> String {
    match error {
        GeoLookupError::ServiceFailure { message } => {
            format!("❌ Erreur retournée par l’API : {}", message)
        }
        GeoLookupError::Transport(_) | GeoLookupError::Decode(_) => {
            format!("❌ Erreur technique lors de la requête : {}", error)
        }
    }
}

/// Asks whether to analyze another address.
///
/// Only the affirmative token (case-insensitive) continues; any other answer,
/// including end of input, stops.
///
/// # Errors
///
/// Fails only if reading `input` or writing `output` fails.
pub fn ask_continue<R, W>(input: &mut R, output: &mut W) -> Result<bool>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    write!(output, "{}", PROMPT_CONTINUE).context("Failed to write continue prompt")?;
    output.flush().context("Failed to flush continue prompt")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read continue answer")?;
    if read == 0 {
        return Ok(false);
    }
    Ok(strip_line_ending(&line).to_lowercase() == AFFIRMATIVE_TOKEN)
}

/// Runs the interactive session until the user declines to continue or the
/// input ends, then prints the farewell line.
///
/// # Errors
///
/// Fails only on console I/O errors. Invalid input and service failures are
/// reported through `reporter` and counted in the returned report.
pub async fn run_session<R, W>(
    analyzer: &Analyzer,
    input: &mut R,
    output: &mut W,
    reporter: &mut dyn Reporter,
    options: &SessionOptions,
) -> Result<SessionReport>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    let mut stats = SessionStats::new();
    let mut analyses = 0usize;
    let mut located = 0usize;
    let mut summarized = 0usize;

    loop {
        let Some(address) = prompt_for_address(
            input,
            output,
            reporter,
            &mut stats,
            options.max_address_attempts,
        )?
        else {
            break;
        };

        analyses += 1;
        match analyze(analyzer, &address, output, reporter, &mut stats).await? {
            AnalysisOutcome::GeolocationFailed => {}
            AnalysisOutcome::Located { summarized: done } => {
                located += 1;
                if done {
                    summarized += 1;
                }
            }
        }

        if !ask_continue(input, output)? {
            break;
        }
    }

    writeln!(output).context("Failed to write farewell")?;
    writeln!(output, "{}", MSG_FAREWELL).context("Failed to write farewell")?;
    output.flush().context("Failed to flush output")?;

    info!(
        "Session statistics: analyses={}, located={}, summarized={}, errors={}",
        analyses,
        located,
        summarized,
        stats.total_errors()
    );

    Ok(SessionReport {
        analyses,
        located,
        summarized,
        stats,
    })
}
