//! Pipe, valve and pump records.

use pn_core::parse_real;
use pn_graph::{Category, LinkKind, Pipe, PipeStatus, Pump, PumpMode, Valve, ValveType};
use tracing::debug;

use crate::error::ErrorKind;
use crate::state::{ParseState, Record};

/// `ID Node1 Node2 Length Diameter Roughness [MinorLoss] [Status]`
///
/// With exactly seven columns a status keyword may stand in the minor-loss
/// column.
pub fn pipe(state: &mut ParseState, record: &Record<'_>) {
    if !state.require_columns(record, 6, "Pipe") {
        return;
    }
    let length = state.real(record, 3, "length", Category::Pipe);
    let diameter = state.real(record, 4, "diameter", Category::Pipe);
    let roughness = state.real(record, 5, "roughness", Category::Pipe);

    let (minor_loss, status_token) = match record.token(6) {
        Some(token) if record.tokens.len() == 7 && PipeStatus::from_token(token).is_some() => {
            (0.0, Some(token))
        }
        Some(_) => (
            state.real(record, 6, "minor loss", Category::Pipe),
            record.token(7),
        ),
        None => (0.0, None),
    };
    let status = status_token.and_then(|token| {
        let status = PipeStatus::from_token(token);
        if status.is_none() {
            state.error(
                ErrorKind::Field,
                record.line,
                format!(
                    "Invalid status '{token}' (Pipe '{}'), expected OPEN, CLOSED or CV",
                    record.identifier()
                ),
            );
        }
        status
    });

    state.record_link(
        record,
        record.tokens[1],
        record.tokens[2],
        LinkKind::Pipe(Pipe {
            length,
            diameter,
            roughness,
            minor_loss,
            status,
        }),
    );
}

/// `ID Node1 Node2 Diameter Type Setting [MinorLoss]`
///
/// A GPV's setting column names its head-loss curve.
pub fn valve(state: &mut ParseState, record: &Record<'_>) {
    if !state.require_columns(record, 6, "Valve") {
        return;
    }
    let diameter = state.real(record, 3, "diameter", Category::Valve);
    let type_token = record.tokens[4];
    let valve_type = ValveType::from_token(type_token).unwrap_or_else(|| {
        state.error(
            ErrorKind::Field,
            record.line,
            format!(
                "Invalid valve type '{type_token}' (Valve '{}'), defaulting to PRV",
                record.identifier()
            ),
        );
        ValveType::default()
    });

    let setting_token = record.tokens[5];
    let (setting, setting_curve) =
        if valve_type == ValveType::GPV && parse_real(setting_token, "setting").is_err() {
            (0.0, Some(setting_token.to_string()))
        } else {
            (state.real(record, 5, "setting", Category::Valve), None)
        };
    let minor_loss = state
        .optional_real(record, 6, "minor loss", Category::Valve)
        .unwrap_or(0.0);

    state.record_link(
        record,
        record.tokens[1],
        record.tokens[2],
        LinkKind::Valve(Valve {
            diameter,
            valve_type,
            setting,
            minor_loss,
            setting_curve,
        }),
    );
}

/// `ID Node1 Node2 [KEY value]...` with keys HEAD, POWER, SPEED, PATTERN.
///
/// A parsed POWER makes a power-mode pump; otherwise a HEAD makes a
/// head-mode pump; otherwise the record is reported and defaults to
/// power-mode with zero power.
pub fn pump(state: &mut ParseState, record: &Record<'_>) {
    if !state.require_columns(record, 3, "Pump") {
        return;
    }
    let max_pairs = state.options().max_pump_pairs;
    let params = &record.tokens[3..];
    let max_tokens = max_pairs.saturating_mul(2);
    if params.len() > max_tokens {
        debug!(
            line = record.line,
            ignored = params.len() - max_tokens,
            "pump parameters beyond the pair limit ignored"
        );
    }

    let mut power = None;
    let mut head = None;
    let mut speed = None;
    let mut pattern_id = None;
    let mut extra_parameters = Vec::new();

    for pair in params.chunks(2).take(max_pairs) {
        let key = pair[0];
        let Some(&value) = pair.get(1) else {
            state.error(
                ErrorKind::Field,
                record.line,
                format!(
                    "Missing value for parameter '{key}' (Pump '{}')",
                    record.identifier()
                ),
            );
            continue;
        };
        match key.to_ascii_uppercase().as_str() {
            "POWER" => power = state.number(record, value, "power", Category::Pump),
            "HEAD" => head = Some(value.to_string()),
            "SPEED" => speed = state.number(record, value, "speed", Category::Pump),
            "PATTERN" => pattern_id = Some(value.to_string()),
            _ => extra_parameters.push((key.to_string(), value.to_string())),
        }
    }

    let mode = match (power, head) {
        (Some(power), _) => PumpMode::Power { power },
        (None, Some(curve_reference)) => PumpMode::Head { curve_reference },
        (None, None) => {
            state.error(
                ErrorKind::Field,
                record.line,
                format!(
                    "Pump '{}' is missing HEAD or POWER, defaulting to zero power",
                    record.identifier()
                ),
            );
            PumpMode::default()
        }
    };

    state.record_link(
        record,
        record.tokens[1],
        record.tokens[2],
        LinkKind::Pump(Pump {
            mode,
            speed,
            pattern_id,
            extra_parameters,
        }),
    );
}
