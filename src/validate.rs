//! Address input validation.
//!
//! Accepts exactly the IPv4 dotted-quad and IPv6 colon-hex literals understood by
//! [`std::net::IpAddr`], plus an IPv6 zone suffix (`fe80::1%eth0`). No hostname
//! resolution, no range restriction: private, loopback and reserved addresses
//! are all valid.

use std::fmt;
use std::io::{BufRead, Write};
use std::net::{IpAddr, Ipv6Addr};
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::config::{MSG_INVALID_ADDRESS, PROMPT_ADDRESS};
use crate::error_handling::{ErrorType, Reporter, SessionStats, ValidationError};

/// A syntactically valid IPv4 or IPv6 literal.
///
/// Keeps the text exactly as the user typed it, which is what gets sent to the
/// geolocation service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    text: String,
    ip: IpAddr,
}

impl Address {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn ip(&self) -> IpAddr {
        self.ip
    }

    /// Zone suffix of a scoped IPv6 literal, without the `%`.
    pub fn zone(&self) -> Option<&str> {
        self.text.split_once('%').map(|(_, zone)| zone)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for Address {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_address(s)
    }
}

/// Parses `input` as an IP literal. The text must be the literal and nothing
/// else; surrounding whitespace is rejected.
///
/// An IPv6 literal may carry a non-empty zone after a single `%`. The zone is
/// kept in the text but not interpreted; it may not contain `/`.
pub fn parse_address(input: &str) -> Result<Address, ValidationError> {
    let invalid = || ValidationError::InvalidAddress(input.to_string());
    let ip = match input.split_once('%') {
        Some((literal, zone)) => {
            if zone.is_empty() || zone.contains(['%', '/']) {
                return Err(invalid());
            }
            IpAddr::V6(literal.parse::<Ipv6Addr>().map_err(|_| invalid())?)
        }
        None => input.parse::<IpAddr>().map_err(|_| invalid())?,
    };
    Ok(Address {
        text: input.to_string(),
        ip,
    })
}

/// Removes the trailing line terminator left by `read_line`.
pub(crate) fn strip_line_ending(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line)
}

/// Prompts on `output` and reads lines from `input` until one is a valid address.
///
/// Every rejected line is reported as [`ErrorType::InvalidAddress`] and the
/// prompt is repeated. Returns `Ok(None)` when `input` is exhausted, or when
/// `max_attempts` lines have been rejected. The binary passes `None` for an
/// unbounded prompt.
///
/// # Errors
///
/// Fails only if reading `input` or writing `output` fails.
pub fn prompt_for_address<R, W>(
    input: &mut R,
    output: &mut W,
    reporter: &mut dyn Reporter,
    stats: &mut SessionStats,
    max_attempts: Option<usize>,
) -> Result<Option<Address>>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    let mut attempts = 0usize;
    loop {
        if max_attempts.is_some_and(|max| attempts >= max) {
            log::debug!("Giving up after {} invalid address entries", attempts);
            return Ok(None);
        }

        write!(output, "{}", PROMPT_ADDRESS).context("Failed to write address prompt")?;
        output.flush().context("Failed to flush address prompt")?;

        let mut line = String::new();
        let read = input
            .read_line(&mut line)
            .context("Failed to read address input")?;
        if read == 0 {
            return Ok(None);
        }

        match parse_address(strip_line_ending(&line)) {
            Ok(address) => {
                log::debug!("Accepted address {}", address);
                return Ok(Some(address));
            }
            Err(e) => {
                log::debug!("{}", e);
                stats.increment_error(ErrorType::InvalidAddress);
                reporter.report(ErrorType::InvalidAddress, MSG_INVALID_ADDRESS);
                attempts += 1;
            }
        }
    }
}
