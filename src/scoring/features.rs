use super::domain::PackageRecord;

pub const FEATURE_COUNT: usize = 8;

/// Feature names in derivation order.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "employee_number",
    "model_code",
    "route_group",
    "start_minute",
    "end_minute",
    "result_points",
    "item_count",
    "status",
];

/// Fixed-width numeric encoding of a record for the model path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector([f32; FEATURE_COUNT]);

impl FeatureVector {
    pub fn from_record(record: &PackageRecord) -> Self {
        Self([
            employee_number(&record.employee_id),
            model_code(&record.model_code),
            route_group(&record.route_code),
            minutes_since_midnight(&record.start_time),
            minutes_since_midnight(&record.end_time),
            result_points(&record.result_label),
            parse_or_zero(&record.count_field),
            status_code(&record.status_flag),
        ])
    }

    pub fn values(&self) -> &[f32] {
        &self.0
    }
}

impl From<[f32; FEATURE_COUNT]> for FeatureVector {
    fn from(values: [f32; FEATURE_COUNT]) -> Self {
        Self(values)
    }
}

fn employee_number(employee_id: &str) -> f32 {
    parse_or_zero(&employee_id.replace("EMP", ""))
}

fn model_code(model: &str) -> f32 {
    match model {
        "LX755" => 755.0,
        "LX750" => 750.0,
        "LX735" => 735.0,
        "LX726" => 726.0,
        "LX760" => 760.0,
        "LX730" => 730.0,
        _ => 0.0,
    }
}

fn route_group(route: &str) -> f32 {
    if route.starts_with("SPEC_A") {
        1.0
    } else if route.starts_with("SPEC_B") {
        2.0
    } else if route.starts_with("SPEC_C") {
        3.0
    } else if route.starts_with("SPEC_D") {
        4.0
    } else {
        0.0
    }
}

fn minutes_since_midnight(timestamp: &str) -> f32 {
    let Some(clock) = timestamp.split(' ').nth(1) else {
        return 0.0;
    };
    let mut parts = clock.split(':');
    let hour = parts.next().and_then(|value| value.parse::<f32>().ok());
    let minute = parts.next().and_then(|value| value.parse::<f32>().ok());

    match (hour, minute) {
        (Some(hour), Some(minute)) => hour * 60.0 + minute,
        _ => 0.0,
    }
}

fn result_points(label: &str) -> f32 {
    label
        .split(' ')
        .next()
        .and_then(|token| token.parse::<f32>().ok())
        .unwrap_or(0.0)
}

fn status_code(status: &str) -> f32 {
    if status == "No" {
        0.0
    } else {
        1.0
    }
}

fn parse_or_zero(raw: &str) -> f32 {
    raw.parse::<f32>().unwrap_or(0.0)
}
